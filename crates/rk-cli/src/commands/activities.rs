//! Activities command: activity types, distances and weekday patterns.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use rk_core::stats::DAY_NAMES;
use rk_core::{ActivityReport, ActivityType};

/// Formats miles with two decimals.
fn miles(value: f64) -> String {
    format!("{value:.2}")
}

fn type_list(types: &[ActivityType]) -> String {
    types
        .iter()
        .map(ActivityType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats the human-readable activity report.
pub fn format_activities(report: &ActivityReport) -> String {
    let mut output = String::new();

    writeln!(output, "ACTIVITIES").unwrap();
    writeln!(output, "──────────").unwrap();

    if report.activity_count == 0 {
        writeln!(output, "No completed activities with a distance.").unwrap();
        return output;
    }

    let or_none = |a: Option<ActivityType>| a.map_or("-", |a| a.as_str());
    writeln!(output, "Activities logged:   {}", report.activity_count).unwrap();
    writeln!(output, "Distinct types:      {}", report.distinct_types()).unwrap();
    writeln!(output, "Most frequent:       {}", type_list(&report.top)).unwrap();
    writeln!(output, "Longest on average:  {}", or_none(report.longest)).unwrap();
    writeln!(output, "Shortest on average: {}", or_none(report.shortest)).unwrap();

    writeln!(output).unwrap();
    writeln!(output, "BY TYPE").unwrap();
    writeln!(output, "───────").unwrap();
    for entry in &report.by_type {
        writeln!(
            output,
            "{:<12}{:>5}  {:>7} mi avg",
            entry.activity.as_str(),
            entry.count,
            miles(entry.mean_distance_miles)
        )
        .unwrap();
    }

    if !report.by_day.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "MEAN MILES BY DAY").unwrap();
        writeln!(output, "─────────────────").unwrap();
        write!(output, "{:<12}", "").unwrap();
        for day in DAY_NAMES {
            write!(output, "{day:>7}").unwrap();
        }
        writeln!(output).unwrap();

        for &activity in &report.top {
            write!(output, "{:<12}", activity.as_str()).unwrap();
            for day in DAY_NAMES {
                let cell = report
                    .by_day
                    .iter()
                    .find(|d| d.activity == activity && d.day == day)
                    .map_or_else(|| "-".to_string(), |d| miles(d.mean_distance_miles));
                write!(output, "{cell:>7}").unwrap();
            }
            writeln!(output).unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "WEEKDAYS VS WEEKENDS").unwrap();
    writeln!(output, "────────────────────").unwrap();
    writeln!(output, "Weekday mean:  {} mi", miles(report.weekday_mean_miles)).unwrap();
    writeln!(output, "Weekend mean:  {} mi", miles(report.weekend_mean_miles)).unwrap();
    writeln!(output, "Longer on:     {}", report.longer.as_str()).unwrap();

    output
}

/// Runs the activities command.
pub fn run<W: Write>(writer: &mut W, report: &ActivityReport, json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        write!(writer, "{}", format_activities(report))?;
    }
    Ok(())
}
