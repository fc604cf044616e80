//! The date picker a host form embeds.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{
    Error,
    clock::Clock,
    config::CalendarConfig,
    date::CalendarDate,
    dismiss::{DismissMonitor, InteractionSource, NodeId},
    grid::{self, Grid},
    navigation::ViewedMonth,
    selection::{CloseReason, DateChange, PickerAction, SelectionState},
};

/// Receives the picked date as `YYYY-MM-DD` and as a [CalendarDate], or
/// `(None, None)` when the selection is cleared.
pub type DateSelectCallback = Box<dyn FnMut(Option<&str>, Option<CalendarDate>)>;

/// The state shared with the dismiss listener.
struct WidgetCore {
    selection: SelectionState,
    monitor: DismissMonitor,
}

impl WidgetCore {
    fn apply(&mut self, action: PickerAction<'_>) -> Result<Option<DateChange>, Error> {
        let transition = self.selection.apply(action)?;
        self.selection = transition.state;

        if !self.selection.is_open() {
            self.monitor.release();
        }

        Ok(transition.change)
    }
}

/// A calendar date picker: a trigger button plus a dropdown month grid.
///
/// The widget starts closed with nothing selected, showing the current
/// month. The host's callback runs once for every day pick and every clear,
/// after the widget has updated its own state, and never for opening,
/// closing or navigation.
pub struct CalendarWidget {
    config: CalendarConfig,
    root: NodeId,
    viewed_month: ViewedMonth,
    clock: Box<dyn Clock>,
    core: Rc<RefCell<WidgetCore>>,
    on_date_select: DateSelectCallback,
}

impl CalendarWidget {
    /// Create a widget that reads today's date from the wall clock in the
    /// configured timezone.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidTimezoneError] if the configured timezone is
    /// unknown.
    pub fn new(
        config: CalendarConfig,
        on_date_select: impl FnMut(Option<&str>, Option<CalendarDate>) + 'static,
    ) -> Result<Self, Error> {
        let clock = config.clock()?;

        Ok(Self::with_clock(config, clock, on_date_select))
    }

    /// Create a widget that reads today's date from `clock`.
    pub fn with_clock(
        config: CalendarConfig,
        clock: impl Clock + 'static,
        on_date_select: impl FnMut(Option<&str>, Option<CalendarDate>) + 'static,
    ) -> Self {
        let root = NodeId::next();
        let viewed_month = ViewedMonth::containing(clock.today());

        Self {
            config,
            root,
            viewed_month,
            clock: Box::new(clock),
            core: Rc::new(RefCell::new(WidgetCore {
                selection: SelectionState::new(),
                monitor: DismissMonitor::new(root, None),
            })),
            on_date_select: Box::new(on_date_select),
        }
    }

    /// Close the widget whenever `source` reports an interaction outside it.
    ///
    /// Any subscription to a previous source is released first.
    pub fn with_dismiss_source(self, source: Rc<dyn InteractionSource>) -> Self {
        {
            let mut core = self.core.borrow_mut();
            core.monitor = DismissMonitor::new(self.root, Some(source));
        }

        if self.is_open() {
            self.watch_for_dismissal();
        }

        self
    }

    fn watch_for_dismissal(&self) {
        let core: Weak<RefCell<WidgetCore>> = Rc::downgrade(&self.core);

        self.core.borrow_mut().monitor.activate(move || {
            let Some(core) = core.upgrade() else {
                return;
            };

            let Ok(mut core) = core.try_borrow_mut() else {
                tracing::warn!("ignoring outside interaction while the date picker is busy");
                return;
            };

            // Closing never reports a date change.
            let _ = core.apply(PickerAction::RequestClose(CloseReason::OutsideInteraction));
        });
    }

    fn apply(&mut self, action: PickerAction<'_>) -> Result<(), Error> {
        let change = self.core.borrow_mut().apply(action)?;

        if self.is_open() {
            self.watch_for_dismissal();
        }

        if let Some(change) = change {
            (self.on_date_select)(change.iso_date.as_deref(), change.date);
        }

        Ok(())
    }

    /// Open the dropdown if it is closed, close it if it is open.
    pub fn toggle_open(&mut self) {
        // Toggling never fails.
        let _ = self.apply(PickerAction::ToggleOpen);
    }

    /// Pick the day named by the canonical date string `date_str`.
    ///
    /// Closes the dropdown and notifies the host. Ignored while the dropdown
    /// is closed.
    ///
    /// # Errors
    ///
    /// Returns [Error::Format] if `date_str` is not a valid `YYYY-MM-DD` date.
    /// The widget is left unchanged and the host is not notified.
    pub fn select_day(&mut self, date_str: &str) -> Result<(), Error> {
        self.apply(PickerAction::SelectDay(date_str))
    }

    /// Forget the selected date and notify the host with `(None, None)`.
    /// The dropdown stays open or closed.
    pub fn clear(&mut self) {
        let _ = self.apply(PickerAction::Clear);
    }

    /// Handle the "Done" button: close the dropdown, keeping the selection.
    pub fn done(&mut self) {
        let _ = self.apply(PickerAction::RequestClose(CloseReason::Done));
    }

    /// Close the dropdown, keeping the selection.
    pub fn request_close(&mut self, reason: CloseReason) {
        let _ = self.apply(PickerAction::RequestClose(reason));
    }

    /// Show the month before the current one.
    pub fn previous_month(&mut self) {
        self.show_month(self.viewed_month.previous());
    }

    /// Show the month after the current one.
    pub fn next_month(&mut self) {
        self.show_month(self.viewed_month.next());
    }

    /// Show `viewed_month`. The selection is not affected.
    pub fn show_month(&mut self, viewed_month: ViewedMonth) {
        tracing::debug!("date picker showing {}", viewed_month.title());
        self.viewed_month = viewed_month;
    }

    /// The grid of days for the viewed month.
    pub fn grid(&self) -> Grid {
        grid::build(self.viewed_month, self.clock.today(), self.selected_date())
    }

    /// Whether the dropdown is showing.
    pub fn is_open(&self) -> bool {
        self.core.borrow().selection.is_open()
    }

    /// Whether the widget is currently listening for outside interactions.
    pub fn is_watching_for_dismissal(&self) -> bool {
        self.core.borrow().monitor.is_active()
    }

    /// The picked date, if any.
    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.core.borrow().selection.selected_date()
    }

    /// The month being shown.
    pub fn viewed_month(&self) -> ViewedMonth {
        self.viewed_month
    }

    /// The heading of the dropdown, e.g. "March 2024".
    pub fn title(&self) -> String {
        self.viewed_month.title()
    }

    /// The text on the trigger button: the picked date or the placeholder.
    pub fn trigger_label(&self) -> String {
        match self.selected_date() {
            Some(date) => date.to_display(self.config.locale),
            None => self.config.placeholder_text.clone(),
        }
    }

    /// The widget's node in the host's interaction tree. Interactions whose
    /// path includes this node count as inside the widget.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The settings the widget was created with.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }
}
