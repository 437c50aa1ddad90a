use colored::{Color, Colorize};

use crate::executor::ApiResult;

use super::report::{RunReport, StepOutcome, StepRecord};

/// Cap on the pretty-printed response excerpt, in characters.
const EXCERPT_LIMIT: usize = 500;

pub fn print_step(record: &StepRecord) {
    let label = record.use_case.label();
    match &record.outcome {
        StepOutcome::Completed(result) => {
            let status_color = if result.status >= 400 {
                Color::Red
            } else if result.status >= 300 {
                Color::Yellow
            } else {
                Color::Green
            };

            println!("\n{}", label.bold());
            println!(
                "  {} {} {}",
                "Status:".bold(),
                format!("{}", result.status).color(status_color),
                format!("({:.1} ms)", result.duration_ms).dimmed()
            );
            println!(
                "  {} {}",
                "Response:".bold(),
                response_excerpt(result).dimmed()
            );
        }
        StepOutcome::Failed(err) => {
            println!("\n{}", label.bold());
            println!("  {} {}", "Error:".bold(), err.to_string().red());
        }
        StepOutcome::Skipped(reason) => {
            println!("\n{}", label.bold());
            println!("  {} {}", "Skipped:".bold(), reason.dimmed());
        }
    }
}

pub fn print_summary(report: &RunReport) {
    println!(
        "\n{} {}",
        format!("{} use cases:", report.records.len()).bold(),
        format!(
            "{} completed, {} failed, {} skipped",
            report.completed(),
            report.failed(),
            report.skipped()
        )
    );
}

fn response_excerpt(result: &ApiResult) -> String {
    let rendered =
        serde_json::to_string_pretty(&result.body).unwrap_or_else(|_| result.body.to_string());
    if rendered.chars().count() > EXCERPT_LIMIT {
        let truncated: String = rendered.chars().take(EXCERPT_LIMIT).collect();
        format!("{truncated}...")
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::UseCase;
    use serde_json::json;

    fn result_with_body(body: serde_json::Value) -> ApiResult {
        ApiResult {
            success: true,
            status: 200,
            body,
            duration_ms: 12.5,
        }
    }

    #[test]
    fn excerpt_truncates_long_bodies() {
        let long = "x".repeat(2000);
        let excerpt = response_excerpt(&result_with_body(json!({ "blob": long })));
        assert_eq!(excerpt.chars().count(), EXCERPT_LIMIT + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn excerpt_keeps_short_bodies_intact() {
        let excerpt = response_excerpt(&result_with_body(json!({"id": 42})));
        assert!(excerpt.contains("\"id\": 42"));
        assert!(!excerpt.ends_with("..."));
    }

    #[test]
    fn print_step_handles_every_outcome() {
        print_step(&StepRecord {
            use_case: UseCase::Account,
            outcome: StepOutcome::Completed(result_with_body(json!({}))),
        });
        print_step(&StepRecord {
            use_case: UseCase::Sms,
            outcome: StepOutcome::Skipped("no phone configured".to_string()),
        });
        print_step(&StepRecord {
            use_case: UseCase::Senders,
            outcome: StepOutcome::Failed(crate::executor::ApiError::MissingApiKey),
        });
    }
}
