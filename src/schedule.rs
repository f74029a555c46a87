use chrono::{Days, Duration, NaiveDateTime};

/// Default booking date: the calendar day after `now`, formatted for a
/// `<input type="date">` value.
pub fn tomorrow(now: NaiveDateTime) -> String {
    (now.date() + Days::new(1)).format("%Y-%m-%d").to_string()
}

/// Default booking time: the top of the hour after `now`, formatted for a
/// `<input type="time">` value. 23:xx rolls over to 00:00.
pub fn next_full_hour(now: NaiveDateTime) -> String {
    (now + Duration::hours(1)).format("%H:00").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn tomorrow_is_next_calendar_day() {
        assert_eq!(tomorrow(at(2026, 8, 30, 14, 35)), "2026-08-31");
    }

    #[test]
    fn tomorrow_crosses_month_and_year_boundaries() {
        assert_eq!(tomorrow(at(2026, 8, 31, 9, 0)), "2026-09-01");
        assert_eq!(tomorrow(at(2026, 12, 31, 23, 59)), "2027-01-01");
    }

    #[test]
    fn next_full_hour_rounds_up() {
        assert_eq!(next_full_hour(at(2026, 8, 30, 14, 35)), "15:00");
        assert_eq!(next_full_hour(at(2026, 8, 30, 14, 0)), "15:00");
    }

    #[test]
    fn next_full_hour_wraps_at_midnight() {
        assert_eq!(next_full_hour(at(2026, 8, 30, 23, 10)), "00:00");
    }
}
