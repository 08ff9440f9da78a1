//! `bt calculate`: compute a summary from a badge-log file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use bt_core::{AttendanceSummary, calculate_day};

pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let raw = read_input(file)?;
    let summary = calculate_day(&raw)?;
    tracing::debug!(employee_id = %summary.employee_id, status = %summary.status, "computed summary");

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_report(&summary));
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}

/// Render the summary as a plain text report.
fn render_report(summary: &AttendanceSummary) -> String {
    let mut out = String::new();

    let line = |out: &mut String, label: &str, value: &str| {
        out.push_str(&format!("{label:<18} {value}\n"));
    };

    line(&mut out, "Employee", &format!("{} ({})", summary.name, summary.employee_id));
    line(&mut out, "Date", &summary.date.to_string());
    line(&mut out, "Status", summary.status.as_str());
    line(&mut out, "First in", &summary.first_in.to_string());
    line(
        &mut out,
        "Last out",
        &summary
            .last_out
            .map_or_else(|| "-".to_string(), |ts| ts.to_string()),
    );
    line(&mut out, "In office", &summary.net_in_office_duration);
    line(&mut out, "Cafeteria", &summary.total_cafeteria_duration);
    line(&mut out, "Remaining", &summary.remaining_duration);
    line(
        &mut out,
        "Expected logout",
        &summary
            .expected_logout
            .map_or_else(|| "N/A".to_string(), |ts| ts.to_string()),
    );

    out
}
