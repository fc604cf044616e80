//! A calendar date picker for the record-entry forms of a personal finance
//! dashboard.
//!
//! The picker shows a Sunday-first month grid padded with the neighbouring
//! months' days, keeps track of whether its dropdown is open and which day is
//! selected, and tells the host form about every pick and clear through a
//! callback. Dates are always reported as zero-padded `YYYY-MM-DD` strings
//! built from the date's own fields, so they never shift across timezones.
//!
//! ```
//! use findash_calendar::{CalendarConfig, CalendarDate, CalendarWidget, FixedClock};
//!
//! let today = CalendarDate::from_canonical("2024-03-10").unwrap();
//! let mut widget = CalendarWidget::with_clock(
//!     CalendarConfig::default(),
//!     FixedClock(today),
//!     |iso_date, _date| println!("picked {iso_date:?}"),
//! );
//!
//! widget.toggle_open();
//! widget.select_day("2024-03-15").unwrap();
//!
//! assert!(!widget.is_open());
//! assert_eq!(widget.trigger_label(), "15 Mar 2024");
//! ```

#![warn(missing_docs)]

mod clock;
mod config;
mod date;
mod dismiss;
mod grid;
pub mod html;
mod navigation;
mod selection;
mod timezone;
mod widget;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CalendarConfig, DEFAULT_PLACEHOLDER};
pub use date::{
    CalendarDate, DAY_NAMES, FormatError, LocaleProfile, MAX_YEAR, MIN_YEAR, MONTH_NAMES,
    days_in_month, is_leap_year,
};
pub use dismiss::{
    DismissMonitor, Interaction, InteractionHub, InteractionSource, Listener, ListenerId, NodeId,
    Subscription,
};
pub use grid::{DAYS_IN_WEEK, DayCell, Grid, build as build_grid};
pub use navigation::{ViewedMonth, next_month, previous_month};
pub use selection::{
    CloseReason, DateChange, PickerAction, PickerState, SelectionState, Transition,
};
pub use timezone::{get_local_offset, get_timezone};
pub use widget::{CalendarWidget, DateSelectCallback};

/// The errors that may occur in the date picker.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// A date string or date fields did not name a real day.
    ///
    /// This only happens when a caller feeds in a raw string, the picker
    /// itself only produces canonical dates.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The configured timezone is not a canonical timezone name.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The config file could not be read.
    ///
    /// Callers should pass in the path and the original error as a string.
    #[error("could not read config file \"{0}\": {1}")]
    ConfigReadError(String, String),

    /// The config JSON is malformed or has unexpected fields.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
