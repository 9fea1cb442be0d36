use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::tariff::PriceDate;

/// Raw hourly price samples of one day as delivered by the market feed.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyPrices {
    #[serde_as(as = "DisplayFromStr")]
    pub date: PriceDate,

    /// Samples for hours `0..24`, in the feed's own unit.
    pub prices: Vec<Option<f64>>,
}

impl DailyPrices {
    /// All 24 samples, or `None` if any is missing.
    pub fn complete_samples(&self) -> Option<[f64; 24]> {
        if self.prices.len() != 24 {
            return None;
        }
        let mut samples = [0.0; 24];
        for (sample, price) in samples.iter_mut().zip(&self.prices) {
            *sample = (*price)?;
        }
        Some(samples)
    }
}

/// Date-indexed collection of raw price samples.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceDataset(pub Vec<DailyPrices>);

impl PriceDataset {
    /// Complete samples for the date, if any record for it has them.
    pub fn samples_on(&self, date: PriceDate) -> Option<[f64; 24]> {
        self.0
            .iter()
            .filter(|record| record.date == date)
            .find_map(DailyPrices::complete_samples)
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<DailyPrices> for PriceDataset {
    fn from_iter<T: IntoIterator<Item = DailyPrices>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_json() {
        let dataset: PriceDataset = serde_json::from_str(
            r#"[
                {"date": "01/01/2024", "prices": [1, 2, null]},
                {"date": "02/01/2024", "prices": []}
            ]"#,
        )
        .unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.0[0].prices, [Some(1.0), Some(2.0), None]);
    }

    #[test]
    fn test_complete_samples() {
        let date = "01/01/2024".parse().unwrap();
        let mut record = DailyPrices { date, prices: vec![Some(100.0); 24] };
        assert_eq!(record.complete_samples(), Some([100.0; 24]));

        record.prices[5] = None;
        assert_eq!(record.complete_samples(), None);

        record.prices = vec![Some(100.0); 23];
        assert_eq!(record.complete_samples(), None);
    }

    #[test]
    fn test_samples_on_skips_incomplete_records() {
        let date = "01/01/2024".parse().unwrap();
        let dataset: PriceDataset = [
            DailyPrices { date, prices: vec![None; 24] },
            DailyPrices { date, prices: vec![Some(42.0); 24] },
        ]
        .into_iter()
        .collect();
        assert_eq!(dataset.samples_on(date), Some([42.0; 24]));
        assert_eq!(dataset.samples_on("02/01/2024".parse().unwrap()), None);
    }
}
