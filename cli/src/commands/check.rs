use colored::*;
use ipgen_common::config::Config;
use ipgen_common::network::{Family, Fragment, RawValue};
use serde::Serialize;
use tracing::warn;

use crate::terminal::print;

/// Outcome of validating a single token.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<Fragment>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub clamped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    pub fn new(family: Family, token: &str) -> Self {
        let raw = RawValue::from_token(token);
        let clamped = matches!(raw, RawValue::Int(i) if !family.contains(i));

        match Fragment::from_raw(family, raw) {
            Ok(fragment) => Self {
                input: token.to_string(),
                fragment: Some(fragment),
                clamped,
                error: None,
            },
            Err(e) => Self {
                input: token.to_string(),
                fragment: None,
                clamped: false,
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn check(family: Family, values: &[String], cfg: &Config) -> anyhow::Result<()> {
    let reports: Vec<CheckReport> = values.iter().map(|v| CheckReport::new(family, v)).collect();
    let failed = reports.iter().filter(|r| r.error.is_some()).count();

    if cfg.json {
        print::json(&reports)?;
    } else {
        reports.iter().for_each(|report| print_report(report, cfg));
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} values failed validation", reports.len());
    }
    Ok(())
}

fn print_report(report: &CheckReport, cfg: &Config) {
    match (&report.fragment, &report.error) {
        (Some(fragment), _) => {
            let arrow = "->".bright_black();
            let note = if report.clamped && cfg.quiet == 0 {
                format!(" {}", "(clamped)".yellow())
            } else {
                String::new()
            };
            print::output(format!("{} {arrow} {}{note}", report.input, fragment.to_string().green()));
        }
        (None, Some(error)) => warn!("{error}"),
        (None, None) => {}
    }
}
