//! Calendar-day window arithmetic.
//!
//! # Responsibility
//! - Express "days remaining" and "days overdue" as whole days between
//!   calendar dates.
//!
//! # Invariants
//! - Inputs are already normalized to dates (midnight), so differences are
//!   exact whole days: the same-day boundary is 0, distinct from past (<0
//!   remaining) and future (<0 overdue).

use time::Date;

/// Whole days from `today` until `due`. Negative once `due` is past.
pub fn days_until(today: Date, due: Date) -> i64 {
    (due - today).whole_days()
}

/// Whole days `due` lies in the past. Negative while `due` is upcoming.
pub fn days_overdue(today: Date, due: Date) -> i64 {
    (today - due).whole_days()
}
