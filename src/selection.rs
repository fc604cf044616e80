//! The open/closed and selected-date state of a date picker.
//!
//! [SelectionState] is a plain value. Every action returns the next value
//! together with the [DateChange] the host should be told about, if any, so
//! the transitions can be checked without a widget or a rendering surface.

use crate::date::{CalendarDate, FormatError};

/// Whether the calendar dropdown is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    /// Only the trigger button is showing.
    #[default]
    Closed,
    /// The month grid is showing and accepts day picks.
    Open,
}

/// Why the dropdown was asked to close without a day being picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The user pressed the "Done" button.
    Done,
    /// The user interacted with something outside the widget.
    OutsideInteraction,
}

/// An input to [SelectionState::apply].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction<'a> {
    /// Open a closed dropdown, or close an open one.
    ToggleOpen,
    /// Pick the day given as a canonical `YYYY-MM-DD` string.
    SelectDay(&'a str),
    /// Forget the selected date.
    Clear,
    /// Close the dropdown, keeping the selection.
    RequestClose(CloseReason),
}

/// The selection the host is notified of.
///
/// Both fields are `Some` after a day is picked and both are `None` after the
/// selection is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateChange {
    /// The picked day as `YYYY-MM-DD`.
    pub iso_date: Option<String>,
    /// The picked day.
    pub date: Option<CalendarDate>,
}

impl DateChange {
    fn selected(date: CalendarDate) -> Self {
        Self {
            iso_date: Some(date.to_canonical()),
            date: Some(date),
        }
    }

    fn cleared() -> Self {
        Self {
            iso_date: None,
            date: None,
        }
    }
}

/// The result of applying an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state after the action.
    pub state: SelectionState,
    /// Set only by day picks and clears.
    pub change: Option<DateChange>,
}

impl Transition {
    fn silent(state: SelectionState) -> Self {
        Self {
            state,
            change: None,
        }
    }
}

/// Open/closed state plus the selected date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    picker_state: PickerState,
    selected_date: Option<CalendarDate>,
}

impl SelectionState {
    /// A closed picker with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the dropdown is showing.
    pub fn is_open(&self) -> bool {
        self.picker_state == PickerState::Open
    }

    /// The current [PickerState].
    pub fn picker_state(&self) -> PickerState {
        self.picker_state
    }

    /// The selected date, if any.
    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selected_date
    }

    /// Apply `action` and report what changed.
    ///
    /// # Errors
    ///
    /// Returns a [FormatError] if a [PickerAction::SelectDay] string is not a
    /// valid canonical date. The state is left untouched in that case.
    pub fn apply(self, action: PickerAction<'_>) -> Result<Transition, FormatError> {
        match action {
            PickerAction::ToggleOpen => Ok(Transition::silent(self.toggle_open())),
            PickerAction::SelectDay(date_str) => self.select_day(date_str),
            PickerAction::Clear => Ok(self.clear()),
            PickerAction::RequestClose(reason) => Ok(Transition::silent(self.request_close(reason))),
        }
    }

    /// Flip between closed and open.
    pub fn toggle_open(self) -> Self {
        let picker_state = match self.picker_state {
            PickerState::Closed => PickerState::Open,
            PickerState::Open => PickerState::Closed,
        };
        tracing::debug!("date picker toggled to {picker_state:?}");

        Self {
            picker_state,
            ..self
        }
    }

    /// Select the day named by `date_str` and close the dropdown.
    ///
    /// Day picks only count while the dropdown is open. A pick on a closed
    /// picker is ignored and reports no change.
    ///
    /// # Errors
    ///
    /// Returns a [FormatError] if `date_str` is not a valid canonical date.
    pub fn select_day(self, date_str: &str) -> Result<Transition, FormatError> {
        if !self.is_open() {
            tracing::debug!("ignoring pick of {date_str:?} while the date picker is closed");
            return Ok(Transition::silent(self));
        }

        let date = CalendarDate::from_canonical(date_str).inspect_err(|error| {
            tracing::warn!("rejected date picker selection: {error}");
        })?;
        tracing::debug!("date picker selected {date}");

        Ok(Transition {
            state: Self {
                picker_state: PickerState::Closed,
                selected_date: Some(date),
            },
            change: Some(DateChange::selected(date)),
        })
    }

    /// Forget the selected date. The dropdown stays open or closed as it was.
    pub fn clear(self) -> Transition {
        tracing::debug!("date picker selection cleared");

        Transition {
            state: Self {
                selected_date: None,
                ..self
            },
            change: Some(DateChange::cleared()),
        }
    }

    /// Close the dropdown without touching the selection. Closing a closed
    /// picker does nothing.
    pub fn request_close(self, reason: CloseReason) -> Self {
        if !self.is_open() {
            return self;
        }
        tracing::debug!("date picker closed: {reason:?}");

        Self {
            picker_state: PickerState::Closed,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        date::{CalendarDate, FormatError},
        selection::{CloseReason, DateChange, PickerAction, PickerState, SelectionState},
    };

    fn open() -> SelectionState {
        SelectionState::new().toggle_open()
    }

    fn open_with(date_str: &str) -> SelectionState {
        open().select_day(date_str).unwrap().state.toggle_open()
    }

    #[test]
    fn starts_closed_with_nothing_selected() {
        let state = SelectionState::new();

        assert_eq!(state.picker_state(), PickerState::Closed);
        assert!(!state.is_open());
        assert_eq!(state.selected_date(), None);
    }

    #[test]
    fn toggle_flips_open_and_closed() {
        let state = SelectionState::new();

        let opened = state.toggle_open();
        let closed = opened.toggle_open();

        assert!(opened.is_open());
        assert!(!closed.is_open());
    }

    #[test]
    fn select_day_closes_and_reports_the_date() {
        let transition = open().select_day("2024-03-15").unwrap();

        let want_date = CalendarDate::new(2024, 2, 15).unwrap();
        assert!(!transition.state.is_open());
        assert_eq!(transition.state.selected_date(), Some(want_date));
        assert_eq!(
            transition.change,
            Some(DateChange {
                iso_date: Some("2024-03-15".to_owned()),
                date: Some(want_date),
            })
        );
    }

    #[test]
    fn select_day_while_closed_is_ignored() {
        let state = SelectionState::new();

        let transition = state.select_day("2024-03-15").unwrap();

        assert_eq!(transition.state, state);
        assert_eq!(transition.change, None);
    }

    #[test]
    fn select_day_rejects_bad_strings_without_changing_state() {
        let state = open_with("2024-03-01");

        let malformed = state.apply(PickerAction::SelectDay("15/03/2024"));
        let impossible = state.apply(PickerAction::SelectDay("2024-02-30"));

        assert_eq!(malformed, Err(FormatError::Malformed("15/03/2024".to_owned())));
        assert_eq!(impossible, Err(FormatError::Impossible("2024-02-30".to_owned())));
        assert!(state.is_open());
        assert_eq!(state.selected_date(), CalendarDate::new(2024, 2, 1).ok());
    }

    #[test]
    fn clear_reports_nothing_selected_and_keeps_open_state() {
        for state in [open_with("2024-03-15"), open_with("2024-03-15").toggle_open()] {
            let was_open = state.is_open();

            let transition = state.clear();

            assert_eq!(transition.state.is_open(), was_open);
            assert_eq!(transition.state.selected_date(), None);
            assert_eq!(
                transition.change,
                Some(DateChange {
                    iso_date: None,
                    date: None
                })
            );
        }
    }

    #[test]
    fn clear_with_nothing_selected_still_reports() {
        let transition = SelectionState::new().clear();

        assert!(transition.change.is_some());
    }

    #[test]
    fn request_close_keeps_selection_and_reports_nothing() {
        let state = open_with("2024-03-15");

        for reason in [CloseReason::Done, CloseReason::OutsideInteraction] {
            let transition = state.apply(PickerAction::RequestClose(reason)).unwrap();

            assert!(!transition.state.is_open());
            assert_eq!(transition.state.selected_date(), state.selected_date());
            assert_eq!(transition.change, None);
        }
    }

    #[test]
    fn request_close_while_closed_does_nothing() {
        let state = SelectionState::new();

        assert_eq!(state.request_close(CloseReason::OutsideInteraction), state);
    }

    #[test]
    fn only_picks_and_clears_report_changes() {
        let state = open();
        let actions = [
            (PickerAction::ToggleOpen, false),
            (PickerAction::RequestClose(CloseReason::Done), false),
            (PickerAction::SelectDay("2024-03-15"), true),
            (PickerAction::Clear, true),
        ];

        for (action, reports) in actions {
            let transition = state.apply(action).unwrap();

            assert_eq!(transition.change.is_some(), reports, "unexpected report for {action:?}");
        }
    }
}
