//! Moving the calendar's view between months.

use serde::Serialize;

use crate::date::{CalendarDate, MONTH_NAMES, days_in_month};

/// The month currently shown by a calendar, independent of the selected
/// date.
///
/// The year is kept within [ViewedMonth::MIN_YEAR]..=[ViewedMonth::MAX_YEAR]
/// so that the filler days borrowed from the neighbouring months are always
/// valid [CalendarDate]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ViewedMonth {
    year: i32,
    month: u8,
}

impl ViewedMonth {
    /// The earliest year that can be viewed.
    pub const MIN_YEAR: i32 = 1;

    /// The latest year that can be viewed.
    pub const MAX_YEAR: i32 = 9998;

    /// Create a view of the zero-based `month` of `year`.
    ///
    /// Returns `None` if the month is not in `0..12` or the year is outside
    /// the viewable range.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        if month < 12 && (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month that contains `date`, clamped into the viewable range.
    pub fn containing(date: CalendarDate) -> Self {
        if date.year() < Self::MIN_YEAR {
            Self {
                year: Self::MIN_YEAR,
                month: 0,
            }
        } else if date.year() > Self::MAX_YEAR {
            Self {
                year: Self::MAX_YEAR,
                month: 11,
            }
        } else {
            Self {
                year: date.year(),
                month: date.month(),
            }
        }
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The zero-based month, 0 is January.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The number of days in this month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// The first day of this month.
    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::from_parts_unchecked(self.year, self.month, 1)
    }

    /// Whether `date` falls in this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The heading for this month, e.g. "March 2024".
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[usize::from(self.month)], self.year)
    }

    /// The month before this one. Stays put at the start of the viewable
    /// range.
    pub fn previous(self) -> Self {
        let (year, month) = month_before(self.year, self.month);
        Self::new(year, month).unwrap_or(self)
    }

    /// The month after this one. Stays put at the end of the viewable range.
    pub fn next(self) -> Self {
        let (year, month) = month_after(self.year, self.month);
        Self::new(year, month).unwrap_or(self)
    }
}

/// Step the view back by one month, rolling over into December of the
/// previous year.
pub fn previous_month(viewed_month: ViewedMonth) -> ViewedMonth {
    viewed_month.previous()
}

/// Step the view forward by one month, rolling over into January of the
/// next year.
pub fn next_month(viewed_month: ViewedMonth) -> ViewedMonth {
    viewed_month.next()
}

pub(crate) fn month_before(year: i32, month: u8) -> (i32, u8) {
    if month == 0 {
        (year - 1, 11)
    } else {
        (year, month - 1)
    }
}

pub(crate) fn month_after(year: i32, month: u8) -> (i32, u8) {
    if month == 11 {
        (year + 1, 0)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        date::CalendarDate,
        navigation::{ViewedMonth, next_month, previous_month},
    };

    fn month(year: i32, month: u8) -> ViewedMonth {
        ViewedMonth::new(year, month).unwrap()
    }

    #[test]
    fn previous_rolls_back_into_december() {
        assert_eq!(previous_month(month(2024, 0)), month(2023, 11));
    }

    #[test]
    fn next_rolls_over_into_january() {
        assert_eq!(next_month(month(2024, 11)), month(2025, 0));
    }

    #[test]
    fn steps_within_a_year() {
        assert_eq!(previous_month(month(2024, 5)), month(2024, 4));
        assert_eq!(next_month(month(2024, 5)), month(2024, 6));
    }

    #[test]
    fn twelve_steps_move_one_year() {
        let start = month(2024, 7);

        let forward = (0..12).fold(start, |viewed, _| next_month(viewed));
        let back = (0..12).fold(start, |viewed, _| previous_month(viewed));

        assert_eq!(forward, month(2025, 7));
        assert_eq!(back, month(2023, 7));
    }

    #[test]
    fn saturates_at_the_viewable_range() {
        let first = month(ViewedMonth::MIN_YEAR, 0);
        let last = month(ViewedMonth::MAX_YEAR, 11);

        assert_eq!(previous_month(first), first);
        assert_eq!(next_month(last), last);
    }

    #[test]
    fn rejects_out_of_range_views() {
        assert_eq!(ViewedMonth::new(2024, 12), None);
        assert_eq!(ViewedMonth::new(0, 5), None);
        assert_eq!(ViewedMonth::new(9999, 0), None);
    }

    #[test]
    fn containing_uses_the_dates_month() {
        let date = CalendarDate::new(2024, 2, 15).unwrap();
        let edge = CalendarDate::new(9999, 4, 1).unwrap();

        assert_eq!(ViewedMonth::containing(date), month(2024, 2));
        assert_eq!(ViewedMonth::containing(edge), month(9998, 11));
    }

    #[test]
    fn title_names_the_month() {
        assert_eq!(month(2024, 2).title(), "March 2024");
        assert_eq!(month(2023, 11).title(), "December 2023");
    }
}
