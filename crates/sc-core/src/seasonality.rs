//! Calendar-driven demand multiplier.
//!
//! | Months               | Multiplier |
//! |----------------------|-----------:|
//! | August, September    | 1.8        |
//! | January              | 1.3        |
//! | June, July           | 0.8        |
//! | everything else      | 1.0        |

use chrono::Datelike;

pub const PEAK_SEASON: f64 = 1.8;
pub const NEW_YEAR: f64 = 1.3;
pub const SLOW_SEASON: f64 = 0.8;
pub const NORMAL: f64 = 1.0;

/// Demand multiplier for the month `date` falls in.
pub fn multiplier<D: Datelike>(date: &D) -> f64 {
    match date.month() {
        8 | 9 => PEAK_SEASON,
        1 => NEW_YEAR,
        6 | 7 => SLOW_SEASON,
        _ => NORMAL,
    }
}
