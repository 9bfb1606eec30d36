use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Scheduling cadence of a workflow, as understood by the external
/// orchestrator.
///
/// - `None`: the workflow only runs when triggered externally (the default).
/// - `Hourly` / `Daily` / `Weekly`: the orchestrator's `@hourly`, `@daily`
///   and `@weekly` presets.
/// - `Cron`: a 5-field cron expression, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Schedule {
    #[default]
    None,
    Hourly,
    Daily,
    Weekly,
    Cron(String),
}

impl FromStr for Schedule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "none" => Ok(Schedule::None),
            "@hourly" => Ok(Schedule::Hourly),
            "@daily" => Ok(Schedule::Daily),
            "@weekly" => Ok(Schedule::Weekly),
            _ => parse_cron(s),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::None => write!(f, "none"),
            Schedule::Hourly => write!(f, "@hourly"),
            Schedule::Daily => write!(f, "@daily"),
            Schedule::Weekly => write!(f, "@weekly"),
            Schedule::Cron(expr) => write!(f, "{expr}"),
        }
    }
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Accept a 5-field cron expression.
///
/// We only check shape (field count and charset); interpreting the fields is
/// the orchestrator's job.
fn parse_cron(s: &str) -> Result<Schedule, String> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(format!(
            "invalid schedule: {s:?} (expected \"none\", a preset like \"@daily\", \
             or a 5-field cron expression)"
        ));
    }
    for field in &fields {
        if !field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '*' | ',' | '-' | '/'))
        {
            return Err(format!("invalid cron field {field:?} in schedule {s:?}"));
        }
    }
    Ok(Schedule::Cron(fields.join(" ")))
}
