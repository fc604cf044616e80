//! Laying out the days of a month as complete Sunday-first weeks.

use serde::Serialize;

use crate::{
    date::{CalendarDate, days_in_month},
    navigation::{ViewedMonth, month_after, month_before},
};

/// The number of days in a week, and so the width of the grid.
pub const DAYS_IN_WEEK: usize = 7;

/// One day in the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// The real calendar date of the cell, also for filler days.
    pub date: CalendarDate,
    /// The number printed in the cell.
    pub day_number: u8,
    /// Whether the cell belongs to the viewed month rather than being filler
    /// from a neighbouring month.
    pub is_current_month: bool,
    /// Whether the cell is today's date.
    pub is_today: bool,
    /// Whether the cell is the selected date.
    pub is_selected: bool,
}

impl DayCell {
    fn filler(date: CalendarDate) -> Self {
        Self {
            date,
            day_number: date.day(),
            is_current_month: false,
            is_today: false,
            is_selected: false,
        }
    }
}

/// The days shown for a [ViewedMonth]: leading filler from the previous
/// month, every day of the viewed month and trailing filler from the next
/// month. The length is always a positive multiple of [DAYS_IN_WEEK].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    month: ViewedMonth,
    cells: Vec<DayCell>,
}

impl Grid {
    /// The month the grid was built for.
    pub fn month(&self) -> ViewedMonth {
        self.month
    }

    /// All cells in display order.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`, a grid holds at least one week.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The rows of the grid, seven cells each.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_IN_WEEK)
    }

    /// The cells that belong to the viewed month.
    pub fn current_month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|cell| cell.is_current_month)
    }
}

/// Build the grid for `viewed_month`.
///
/// `today` and `selected_date` only tag cells of the viewed month; a filler
/// day is never marked as today or selected.
pub fn build(
    viewed_month: ViewedMonth,
    today: CalendarDate,
    selected_date: Option<CalendarDate>,
) -> Grid {
    let year = viewed_month.year();
    let month = viewed_month.month();
    let first_weekday = viewed_month.first_day().weekday();
    let month_length = viewed_month.days_in_month();

    let leading = usize::from(first_weekday);
    let total = (leading + usize::from(month_length)).div_ceil(DAYS_IN_WEEK) * DAYS_IN_WEEK;
    let trailing = total - leading - usize::from(month_length);

    let mut cells = Vec::with_capacity(total);

    let (previous_year, previous_month) = month_before(year, month);
    let previous_length = days_in_month(previous_year, previous_month);
    for day in (previous_length - first_weekday + 1)..=previous_length {
        let date = CalendarDate::from_parts_unchecked(previous_year, previous_month, day);
        cells.push(DayCell::filler(date));
    }

    for day in 1..=month_length {
        let date = CalendarDate::from_parts_unchecked(year, month, day);
        cells.push(DayCell {
            date,
            day_number: day,
            is_current_month: true,
            is_today: date == today,
            is_selected: selected_date == Some(date),
        });
    }

    let (next_year, next_month) = month_after(year, month);
    for day in 1..=trailing as u8 {
        let date = CalendarDate::from_parts_unchecked(next_year, next_month, day);
        cells.push(DayCell::filler(date));
    }

    Grid {
        month: viewed_month,
        cells,
    }
}
