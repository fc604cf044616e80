use std::{error::Error, path::PathBuf, process::exit};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use findash_calendar::{
    CalendarConfig, CalendarWidget, DAY_NAMES, DayCell, Grid, ViewedMonth, html,
};

/// Print the date picker's grid for a month.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The year to show. Defaults to the current year.
    #[arg(long, short)]
    year: Option<i32>,

    /// The month to show, 1 to 12. Defaults to the current month.
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: Option<u8>,

    /// A date to mark as selected, formatted as YYYY-MM-DD.
    #[arg(long, short)]
    select: Option<String>,

    /// File path to a JSON date picker config.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// How to print the grid.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// A plain text calendar.
    Text,
    /// The grid's cells as JSON.
    Json,
    /// The open date picker as an HTML fragment.
    Html,
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CalendarConfig::load(path)?,
        None => CalendarConfig::default(),
    };

    let mut widget = CalendarWidget::new(config, |iso_date, _| {
        tracing::info!("selected {iso_date:?}");
    })?;

    if let Some(date_str) = &args.select {
        widget.toggle_open();
        widget.select_day(date_str)?;
    }

    let current = widget
        .selected_date()
        .map_or(widget.viewed_month(), ViewedMonth::containing);
    let year = args.year.unwrap_or(current.year());
    let month = args.month.map_or(current.month(), |month| month - 1);

    let Some(viewed_month) = ViewedMonth::new(year, month) else {
        eprintln!(
            "Year must be between {} and {}.",
            ViewedMonth::MIN_YEAR,
            ViewedMonth::MAX_YEAR
        );
        exit(1);
    };
    widget.show_month(viewed_month);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&widget.grid())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&widget.grid())?),
        OutputFormat::Html => {
            if !widget.is_open() {
                widget.toggle_open();
            }
            println!("{}", html::date_picker(&widget).into_string());
        }
    }

    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Days outside the month are shown in parentheses, today between asterisks
/// and the selected day between brackets.
fn render_text(grid: &Grid) -> String {
    let mut text = format!("{:^27}\n", grid.month().title());
    text.push_str(&DAY_NAMES.join(" "));
    text.push('\n');

    for week in grid.weeks() {
        let row: Vec<String> = week.iter().map(render_cell).collect();
        text.push_str(row.join("").trim_end());
        text.push('\n');
    }

    text
}

fn render_cell(cell: &DayCell) -> String {
    let (open, close) = if !cell.is_current_month {
        ('(', ')')
    } else if cell.is_selected {
        ('[', ']')
    } else if cell.is_today {
        ('*', '*')
    } else {
        (' ', ' ')
    };

    format!("{open}{:>2}{close}", cell.day_number)
}

#[cfg(test)]
mod tests {
    use findash_calendar::{CalendarDate, ViewedMonth, build_grid};

    use super::render_text;

    #[test]
    fn text_grid_marks_fillers_today_and_selection() {
        let grid = build_grid(
            ViewedMonth::new(2024, 2).unwrap(),
            CalendarDate::new(2024, 2, 10).unwrap(),
            CalendarDate::new(2024, 2, 15).ok(),
        );

        let text = render_text(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "March 2024");
        assert_eq!(lines[1], "Sun Mon Tue Wed Thu Fri Sat");
        assert_eq!(lines[2], "(25)(26)(27)(28)(29)  1   2");
        assert_eq!(lines[3], "  3   4   5   6   7   8   9");
        assert_eq!(lines[4], "*10* 11  12  13  14 [15] 16");
        assert_eq!(lines.len(), 2 + 6);
    }
}
