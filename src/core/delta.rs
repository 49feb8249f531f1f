//! Absolute and percentage change of a live quote against its previous close.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub change_abs: Option<f64>,
    pub change_pct: Option<f64>,
}

/// Computes `price - previous_close` and that change as a percentage of the
/// *current* price, rounded to two decimals.
///
/// Both outputs are `None` when either input is missing; the percentage is
/// `None` for a zero price.
pub fn compute(price: Option<f64>, previous_close: Option<f64>) -> Delta {
    let (Some(price), Some(previous_close)) = (price, previous_close) else {
        return Delta::default();
    };

    let change_abs = price - previous_close;
    let change_pct = if price == 0.0 {
        None
    } else {
        round_2dp(change_abs * 100.0 / price)
    };

    Delta {
        change_abs: Some(change_abs),
        change_pct,
    }
}

fn round_2dp(value: f64) -> Option<f64> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(2))
        .and_then(|d| d.to_f64())
}
