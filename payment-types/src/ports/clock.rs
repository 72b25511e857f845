//! Clock port.

use chrono::{Datelike, Utc};

use crate::domain::YearMonth;

/// Supplies the current calendar month for expiration comparisons.
pub trait Clock: Send + Sync + 'static {
    fn year_month(&self) -> YearMonth;
}

/// Production clock backed by the system time (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn year_month(&self) -> YearMonth {
        let now = Utc::now();
        YearMonth {
            year: now.year(),
            month: now.month(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_month_in_range() {
        let now = SystemClock.year_month();
        assert!((1..=12).contains(&now.month));
        assert!(now.year >= 2024);
    }
}
