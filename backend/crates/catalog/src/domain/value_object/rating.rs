//! Rating Value Object
//!
//! A review score: any JSON number from 1 to 5 inclusive. Fractional values
//! are accepted.

use serde_json::Value;

pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;

pub const RATING_MESSAGE: &str = "Rating must be a number between 1 and 5";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (RATING_MIN..=RATING_MAX).contains(&value)).then_some(Self(value))
    }

    /// Accepts JSON numbers only; numeric strings are rejected
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().and_then(Self::new),
            _ => None,
        }
    }

    /// Create from database value (range enforced by a table CHECK)
    pub fn from_db(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Aggregate of every rating a book has received
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingStats {
    pub count: u64,
    pub average: Option<f64>,
}

impl RatingStats {
    /// Mean rounded to one decimal place, 0 when there are no ratings
    ///
    /// Rounds the exact binary value, so 1.45 (stored as 1.4499...) gives
    /// 1.4. Exact halves such as 1.25 round up.
    pub fn rounded_average(&self) -> f64 {
        match self.average {
            Some(avg) if self.count > 0 => round_one_decimal(avg),
            _ => 0.0,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    // Exact halves at one decimal are odd multiples of 1/4, and any multiple
    // of 1/4 times 10 is exact.
    if (value * 4.0).fract() == 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}
