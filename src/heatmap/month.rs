use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{Date, Month};

/// A validated (year, month) pair, fixed for the duration of one render.
///
/// All arithmetic below works on calendar integers only; no instant or
/// host-offset conversion happens anywhere, so a given calendar day always
/// produces the same key on every host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthRef {
    first: Date,
}

impl MonthRef {
    pub(crate) fn new(year: i32, month: Month) -> Result<MonthRef, OutOfCalendarError> {
        Date::from_calendar_date(year, month, 1)
            .map(|first| MonthRef { first })
            .map_err(|_| OutOfCalendarError)
    }

    pub(crate) fn from_date(date: Date) -> MonthRef {
        MonthRef {
            first: date.replace_day(1).expect("day 1 is valid in every month"),
        }
    }

    pub(crate) fn year(self) -> i32 {
        self.first.year()
    }

    pub(crate) fn month(self) -> Month {
        self.first.month()
    }

    pub(crate) fn days(self) -> u8 {
        self.first.month().length(self.first.year())
    }

    /// Weekday index of the 1st of the month, 0=Sunday..6=Saturday.
    pub(crate) fn first_weekday(self) -> u8 {
        self.first.weekday().number_days_from_sunday()
    }

    pub(crate) fn last_weekday(self) -> u8 {
        (self.first_weekday() + self.days() - 1) % 7
    }

    /// Canonical `YYYY-MM-DD` key for a day of this month.
    pub(crate) fn day_key(self, day: u8) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), u8::from(self.month()), day)
    }

    pub(crate) fn contains(self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub(crate) fn next(self) -> Result<MonthRef, OutOfCalendarError> {
        let year = if self.month() == Month::December {
            self.year() + 1
        } else {
            self.year()
        };
        MonthRef::new(year, self.month().next())
    }

    pub(crate) fn previous(self) -> Result<MonthRef, OutOfCalendarError> {
        let year = if self.month() == Month::January {
            self.year() - 1
        } else {
            self.year()
        };
        MonthRef::new(year, self.month().previous())
    }
}

impl FromStr for MonthRef {
    type Err = ParseMonthError;

    /// Accepts `YYYY-M`, `YYYY-MM`, or a full `YYYY-MM-DD`; anything past
    /// the month component is discarded.
    fn from_str(s: &str) -> Result<MonthRef, ParseMonthError> {
        let err = || ParseMonthError(s.to_owned());
        let mut parts = s.splitn(3, '-');
        let year = parts
            .next()
            .and_then(|t| t.parse::<i32>().ok())
            .ok_or_else(err)?;
        let month = parts
            .next()
            .and_then(|t| t.parse::<u8>().ok())
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(err)?;
        MonthRef::new(year, month).map_err(|_| err())
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month(), self.year())
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid month reference: {0:?}")]
pub(crate) struct ParseMonthError(String);

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of the calendar")]
pub(crate) struct OutOfCalendarError;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_variants() {
        let expected = MonthRef::new(2021, Month::January).unwrap();
        assert_eq!("2021-1".parse::<MonthRef>().unwrap(), expected);
        assert_eq!("2021-01".parse::<MonthRef>().unwrap(), expected);
        assert_eq!("2021-01-15".parse::<MonthRef>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for s in ["", "pizza", "2021", "2021-", "2021-0", "2021-13", "2021-xx", "10000-01"] {
            assert!(s.parse::<MonthRef>().is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthRef::new(2021, Month::January).unwrap().days(), 31);
        assert_eq!(MonthRef::new(2023, Month::February).unwrap().days(), 28);
        assert_eq!(MonthRef::new(2024, Month::February).unwrap().days(), 29);
        assert_eq!(MonthRef::new(2000, Month::February).unwrap().days(), 29);
        assert_eq!(MonthRef::new(1900, Month::February).unwrap().days(), 28);
    }

    #[test]
    fn test_weekday_boundaries() {
        // January 2021 runs Friday the 1st through Sunday the 31st.
        let month = MonthRef::new(2021, Month::January).unwrap();
        assert_eq!(month.first_weekday(), 5);
        assert_eq!(month.last_weekday(), 0);
        // February 2015 fits exactly into four Sunday-first weeks.
        let month = MonthRef::new(2015, Month::February).unwrap();
        assert_eq!(month.first_weekday(), 0);
        assert_eq!(month.last_weekday(), 6);
    }

    #[test]
    fn test_day_key_is_zero_padded() {
        let month = MonthRef::new(2021, Month::March).unwrap();
        assert_eq!(month.day_key(7), "2021-03-07");
        assert_eq!(month.day_key(31), "2021-03-31");
    }

    #[test]
    fn test_contains() {
        let month = MonthRef::new(2021, Month::January).unwrap();
        assert!(month.contains(date!(2021 - 01 - 01)));
        assert!(month.contains(date!(2021 - 01 - 31)));
        assert!(!month.contains(date!(2021 - 02 - 01)));
        assert!(!month.contains(date!(2020 - 01 - 15)));
    }

    #[test]
    fn test_paging_across_year_boundary() {
        let december = MonthRef::new(2024, Month::December).unwrap();
        let january = december.next().unwrap();
        assert_eq!(january, MonthRef::new(2025, Month::January).unwrap());
        assert_eq!(january.previous().unwrap(), december);
    }

    #[test]
    fn test_paging_stops_at_calendar_edge() {
        let last = MonthRef::new(9999, Month::December).unwrap();
        assert_eq!(last.next(), Err(OutOfCalendarError));
    }

    #[test]
    fn test_from_date() {
        assert_eq!(
            MonthRef::from_date(date!(2021 - 01 - 22)),
            MonthRef::new(2021, Month::January).unwrap()
        );
    }

    #[test]
    fn test_display() {
        let month = MonthRef::new(2021, Month::January).unwrap();
        assert_eq!(month.to_string(), "January 2021");
    }
}
