use crate::domain::model::{Artwork, Exhibition, ExhibitionKind};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_PRICE: f64 = 1000.0;
pub const DEFAULT_PAINTING_RATE: f64 = 50.0;
pub const DEFAULT_SCULPTURE_RATE: f64 = 30.0;

/// Creation-time price rule: `base_price + age_in_years * per_year_rate`.
/// Evaluated once when a record is created; stored prices are never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub base_price: f64,
    pub painting_rate: f64,
    pub sculpture_rate: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            painting_rate: DEFAULT_PAINTING_RATE,
            sculpture_rate: DEFAULT_SCULPTURE_RATE,
        }
    }
}

impl Pricing {
    pub fn per_year_rate(&self, kind: ExhibitionKind) -> f64 {
        match kind {
            ExhibitionKind::Painting => self.painting_rate,
            ExhibitionKind::Sculpture => self.sculpture_rate,
        }
    }

    /// A `year` after `current_year` gives a negative adjustment and may
    /// yield a negative price. That is allowed and only logged.
    pub fn initial_price(&self, kind: ExhibitionKind, year: i32, current_year: i32) -> f64 {
        let age = f64::from(current_year) - f64::from(year);
        let price = self.base_price + age * self.per_year_rate(kind);

        if price < 0.0 {
            tracing::warn!(
                "⚠️ Creation year {} is after {}, initial {} price is negative ({})",
                year,
                current_year,
                kind,
                price
            );
        }
        price
    }

    pub fn create(
        &self,
        kind: ExhibitionKind,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        current_year: i32,
    ) -> Exhibition {
        let price = self.initial_price(kind, year, current_year);
        Exhibition::new(kind, Artwork::new(title, artist, year, price))
    }
}

/// Calendar year on the local clock, the reference point for artwork age.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
