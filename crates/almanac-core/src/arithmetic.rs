//! Day-precision date arithmetic with timezone attachment.
//!
//! Relative helpers come in two flavours. [`next_weekday`] and
//! [`previous_weekday`] move strictly, so "next Monday" from a Monday is a
//! week later. [`next_or_same_weekday`] and [`previous_or_same_weekday`]
//! return the input when it already matches. Providers pick whichever
//! matches the rule they encode.

use chrono::Weekday;
use chrono_tz::Tz;

use crate::error::{AlmanacError, AlmanacResult};
use crate::types::{days_in_month, ZonedDate};

/// Constructs a calendar day in a timezone.
///
/// # Errors
///
/// Returns `AlmanacError::InvalidDate` for out-of-range month/day.
pub fn make_date(year: i32, month: u32, day: u32, timezone: Tz) -> AlmanacResult<ZonedDate> {
    ZonedDate::from_ymd(year, month, day, timezone)
}

/// Days from `from` forward to the next `to` (0 when equal).
fn days_forward(from: Weekday, to: Weekday) -> i64 {
    i64::from((to.num_days_from_sunday() + 7 - from.num_days_from_sunday()) % 7)
}

/// The nth (1-based) occurrence of a weekday in a month.
///
/// # Errors
///
/// Returns `AlmanacError::InvalidDate` if the month is out of range, `n` is
/// zero, or the month has fewer than `n` such weekdays.
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    n: u32,
    timezone: Tz,
) -> AlmanacResult<ZonedDate> {
    if n == 0 {
        return Err(AlmanacError::invalid_date(format!(
            "occurrence 0 of {weekday} in {year}-{month:02}"
        )));
    }

    let first = make_date(year, month, 1, timezone)?;
    let lead = 1 + days_forward(first.weekday(), weekday) as u32;

    match (n - 1).checked_mul(7).and_then(|weeks| weeks.checked_add(lead)) {
        Some(day) if day <= days_in_month(year, month) => make_date(year, month, day, timezone),
        _ => Err(AlmanacError::invalid_date(format!(
            "{year}-{month:02} has no occurrence {n} of {weekday}"
        ))),
    }
}

/// The last occurrence of a weekday in a month.
///
/// # Errors
///
/// Returns `AlmanacError::InvalidDate` if the month is out of range.
pub fn last_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    timezone: Tz,
) -> AlmanacResult<ZonedDate> {
    let last = make_date(year, month, days_in_month(year, month), timezone)?;
    let back = days_forward(weekday, last.weekday());
    Ok(last.sub_days(back))
}

/// The first `weekday` strictly after `date`.
#[must_use]
pub fn next_weekday(date: ZonedDate, weekday: Weekday) -> ZonedDate {
    let ahead = days_forward(date.weekday(), weekday);
    date.add_days(if ahead == 0 { 7 } else { ahead })
}

/// The last `weekday` strictly before `date`.
#[must_use]
pub fn previous_weekday(date: ZonedDate, weekday: Weekday) -> ZonedDate {
    let back = days_forward(weekday, date.weekday());
    date.sub_days(if back == 0 { 7 } else { back })
}

/// `date` itself if it is a `weekday`, otherwise the next one.
#[must_use]
pub fn next_or_same_weekday(date: ZonedDate, weekday: Weekday) -> ZonedDate {
    date.add_days(days_forward(date.weekday(), weekday))
}

/// `date` itself if it is a `weekday`, otherwise the previous one.
#[must_use]
pub fn previous_or_same_weekday(date: ZonedDate, weekday: Weekday) -> ZonedDate {
    date.sub_days(days_forward(weekday, date.weekday()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;

    fn d(y: i32, m: u32, day: u32) -> ZonedDate {
        make_date(y, m, day, New_York).unwrap()
    }

    #[test]
    fn test_make_date_rejects_feb_30() {
        assert!(matches!(
            make_date(2024, 2, 30, New_York),
            Err(AlmanacError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_nth_weekday() {
        // 3rd Monday of January 2025
        assert_eq!(
            nth_weekday_of_month(2025, 1, Weekday::Mon, 3, New_York).unwrap(),
            d(2025, 1, 20)
        );
        // 4th Thursday of November 2024 (Thanksgiving)
        assert_eq!(
            nth_weekday_of_month(2024, 11, Weekday::Thu, 4, New_York).unwrap(),
            d(2024, 11, 28)
        );
        // first day of month already matching
        assert_eq!(
            nth_weekday_of_month(2024, 7, Weekday::Mon, 1, New_York).unwrap(),
            d(2024, 7, 1)
        );
    }

    #[test]
    fn test_nth_weekday_out_of_range() {
        // February 2025 has exactly four Mondays
        assert!(nth_weekday_of_month(2025, 2, Weekday::Mon, 4, New_York).is_ok());
        assert!(nth_weekday_of_month(2025, 2, Weekday::Mon, 5, New_York).is_err());
        assert!(nth_weekday_of_month(2025, 2, Weekday::Mon, 0, New_York).is_err());
        assert!(nth_weekday_of_month(2025, 13, Weekday::Mon, 1, New_York).is_err());
    }

    #[test]
    fn test_nth_weekday_huge_occurrence() {
        // (n - 1) * 7 would wrap a u32 for both of these
        for n in [613_566_758, u32::MAX] {
            let err = nth_weekday_of_month(2024, 1, Weekday::Mon, n, New_York).unwrap_err();
            assert!(matches!(err, AlmanacError::InvalidDate { .. }), "{err:?}");
        }
    }

    #[test]
    fn test_last_weekday() {
        // Last Monday of May 2025 (Memorial Day)
        assert_eq!(
            last_weekday_of_month(2025, 5, Weekday::Mon, New_York).unwrap(),
            d(2025, 5, 26)
        );
        // Last day already matching: 2024-03-31 is a Sunday
        assert_eq!(
            last_weekday_of_month(2024, 3, Weekday::Sun, New_York).unwrap(),
            d(2024, 3, 31)
        );
    }

    #[test]
    fn test_next_weekday_is_strict() {
        let monday = d(2025, 1, 6);
        assert_eq!(next_weekday(monday, Weekday::Mon), d(2025, 1, 13));
        assert_eq!(next_weekday(monday, Weekday::Tue), d(2025, 1, 7));
        assert_eq!(next_or_same_weekday(monday, Weekday::Mon), monday);
    }

    #[test]
    fn test_previous_weekday_is_strict() {
        let sunday = d(2025, 1, 5);
        assert_eq!(previous_weekday(sunday, Weekday::Sun), d(2024, 12, 29));
        assert_eq!(previous_weekday(sunday, Weekday::Fri), d(2025, 1, 3));
        assert_eq!(previous_or_same_weekday(sunday, Weekday::Sun), sunday);
    }
}
