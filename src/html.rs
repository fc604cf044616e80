//! HTML rendering of the date picker for server-rendered host pages.

use maud::{Markup, html};

use crate::{
    date::DAY_NAMES,
    grid::DayCell,
    widget::CalendarWidget,
};

// The `data-action` values the host page routes clicks back to the widget by.

/// Calls [CalendarWidget::toggle_open].
pub const ACTION_TOGGLE: &str = "toggle-open";
/// Calls [CalendarWidget::previous_month].
pub const ACTION_PREVIOUS_MONTH: &str = "previous-month";
/// Calls [CalendarWidget::next_month].
pub const ACTION_NEXT_MONTH: &str = "next-month";
/// Calls [CalendarWidget::select_day] with the button's `data-date`.
pub const ACTION_SELECT_DAY: &str = "select-day";
/// Calls [CalendarWidget::clear].
pub const ACTION_CLEAR: &str = "clear";
/// Calls [CalendarWidget::done].
pub const ACTION_DONE: &str = "done";

/// The `id` of the widget's container element.
pub fn container_id(widget: &CalendarWidget) -> String {
    format!("calendar-{}", widget.root())
}

/// Render `widget` as an HTML fragment for embedding in a host form.
///
/// The dropdown is only rendered while the widget is open. Styling is left to
/// the host's stylesheet through the class names.
pub fn date_picker(widget: &CalendarWidget) -> Markup {
    let is_open = widget.is_open();
    let label_class = if widget.selected_date().is_some() {
        "selected-text"
    } else {
        "placeholder-text"
    };
    let chevron_class = if is_open { "chevron open" } else { "chevron" };

    html! {
        div class="calendar-container" id=(container_id(widget))
        {
            button
                type="button"
                class="dropdown-button"
                data-action=(ACTION_TOGGLE)
                aria-expanded=(bool_attr(is_open))
            {
                span class=(label_class) { (widget.trigger_label()) }

                svg
                    class=(chevron_class)
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                {
                    path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M19 9l-7 7-7-7" {}
                }
            }

            @if is_open {
                (dropdown(widget))
            }
        }
    }
}

fn dropdown(widget: &CalendarWidget) -> Markup {
    let grid = widget.grid();

    html! {
        div class="dropdown"
        {
            div class="calendar-header"
            {
                button type="button" class="nav-button" data-action=(ACTION_PREVIOUS_MONTH)
                {
                    "← Prev"
                }

                h3 class="month-title" { (widget.title()) }

                button type="button" class="nav-button" data-action=(ACTION_NEXT_MONTH)
                {
                    "Next →"
                }
            }

            div class="calendar-grid"
            {
                @for day_name in DAY_NAMES {
                    div class="day-header" { (day_name) }
                }

                @for cell in grid.cells() {
                    (day_button(cell))
                }
            }

            div class="action-buttons"
            {
                button type="button" class="clear-button" data-action=(ACTION_CLEAR)
                {
                    "Clear"
                }

                button type="button" class="done-button" data-action=(ACTION_DONE)
                {
                    "Done"
                }
            }
        }
    }
}

fn day_button(cell: &DayCell) -> Markup {
    html! {
        button
            type="button"
            class=(day_button_class(cell))
            data-action=(ACTION_SELECT_DAY)
            data-date=(cell.date.to_canonical())
            aria-pressed=(bool_attr(cell.is_selected))
        {
            (cell.day_number)
        }
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn day_button_class(cell: &DayCell) -> String {
    let mut classes = vec![
        "day-button",
        if cell.is_current_month {
            "current-month"
        } else {
            "other-month"
        },
    ];

    if cell.is_today {
        classes.push("today");
    }

    if cell.is_selected {
        classes.push("selected");
    }

    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use scraper::{ElementRef, Html, Selector};

    use crate::{
        clock::FixedClock,
        config::CalendarConfig,
        date::CalendarDate,
        html::{container_id, date_picker},
        widget::CalendarWidget,
    };

    fn new_widget() -> CalendarWidget {
        CalendarWidget::with_clock(
            CalendarConfig::default(),
            FixedClock(CalendarDate::new(2024, 2, 10).unwrap()),
            |_, _| {},
        )
    }

    fn render(widget: &CalendarWidget) -> Html {
        let html = Html::parse_fragment(&date_picker(widget).into_string());
        assert_valid_html(&html);

        html
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    fn select_all<'a>(html: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
        html.select(&Selector::parse(selector).unwrap()).collect()
    }

    #[test]
    fn closed_widget_shows_placeholder_and_no_grid() {
        let widget = new_widget();

        let html = render(&widget);

        let placeholder = select_all(&html, "span.placeholder-text");
        assert_eq!(placeholder.len(), 1);
        assert_eq!(placeholder[0].text().collect::<String>(), "Pick a date");
        assert!(select_all(&html, "div.dropdown").is_empty());
        assert!(select_all(&html, ".chevron.open").is_empty());

        let container = select_all(&html, "div.calendar-container");
        assert_eq!(container[0].value().attr("id"), Some(container_id(&widget).as_str()));
    }

    #[test]
    fn open_widget_shows_month_grid() {
        let mut widget = new_widget();
        widget.toggle_open();

        let html = render(&widget);

        let title = select_all(&html, "h3.month-title");
        assert_eq!(title[0].text().collect::<String>(), "March 2024");

        let headers: Vec<String> = select_all(&html, "div.day-header")
            .iter()
            .map(|header| header.text().collect())
            .collect();
        assert_eq!(headers, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

        assert_eq!(select_all(&html, "button.day-button").len(), 42);
        assert_eq!(select_all(&html, "button.day-button.current-month").len(), 31);
        assert_eq!(select_all(&html, "button.day-button.other-month").len(), 11);
        assert_eq!(select_all(&html, ".chevron.open").len(), 1);
    }

    #[test]
    fn marks_today_and_selected_cells() {
        let mut widget = new_widget();
        widget.toggle_open();
        widget.select_day("2024-03-15").unwrap();
        widget.toggle_open();

        let html = render(&widget);

        let today = select_all(&html, "button.day-button.today");
        let selected = select_all(&html, "button.day-button.selected");
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].value().attr("data-date"), Some("2024-03-10"));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value().attr("data-date"), Some("2024-03-15"));
        assert_eq!(selected[0].text().collect::<String>(), "15");
    }

    #[test]
    fn selected_date_replaces_placeholder() {
        let mut widget = new_widget();
        widget.toggle_open();
        widget.select_day("2024-03-15").unwrap();

        let html = render(&widget);

        let label = select_all(&html, "span.selected-text");
        assert_eq!(label[0].text().collect::<String>(), "15 Mar 2024");
        assert!(select_all(&html, "span.placeholder-text").is_empty());
    }

    #[test]
    fn filler_days_carry_real_dates() {
        let mut widget = new_widget();
        widget.toggle_open();

        let html = render(&widget);

        let fillers = select_all(&html, "button.day-button.other-month");
        assert_eq!(fillers[0].value().attr("data-date"), Some("2024-02-25"));
        assert_eq!(fillers[fillers.len() - 1].value().attr("data-date"), Some("2024-04-06"));
    }

    #[test]
    fn every_button_names_its_action() {
        let mut widget = new_widget();
        widget.toggle_open();

        let html = render(&widget);

        for button in select_all(&html, "button") {
            assert!(
                button.value().attr("data-action").is_some(),
                "button {:?} has no data-action",
                button.html()
            );
            assert_eq!(button.value().attr("type"), Some("button"));
        }
    }
}
