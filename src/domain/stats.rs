// src/domain/stats.rs

use crate::domain::property::{DealStatus, Property};
use serde::Serialize;

/// Summary cards shown above the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealStats {
    pub active: usize,
    pub hot: usize,
    pub avg_spread: f64,
    pub avg_rent: f64,
}

impl DealStats {
    /// Reduces a filtered view. Both averages are 0 over an empty input.
    pub fn from_visible(visible: &[&Property]) -> Self {
        let hot = visible
            .iter()
            .filter(|p| p.status == DealStatus::Hot)
            .count();

        let spreads: Vec<i64> = visible.iter().map(|p| p.spread()).collect();

        // Rentals without a listed rent still count toward the denominator.
        let rents: Vec<i64> = visible
            .iter()
            .filter(|p| p.strategy.is_rental())
            .map(|p| p.rent.unwrap_or(0))
            .collect();

        Self {
            active: visible.len(),
            hot,
            avg_spread: mean(&spreads),
            avg_rent: mean(&rents),
        }
    }
}

fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}
