//! Row processing and the vacation run.
//!
//! [`process_row`] takes one roster row through parsing, validation and the
//! rule engine. [`run`] does that for a whole file: it reads every row, logs
//! the diagnostics and writes the `name,days` result file in one go. Nothing
//! is written unless every step before the write succeeded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::calculation::compute_entitlement;
use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::ingest::{parse_row, validate};
use crate::models::{AuditTrace, AuditWarning, EntitlementResult, INVALID_ROW, RawRow};
use crate::table::{read_rows, write_rows};

/// Columns written to the result file, in order.
pub const OUTPUT_FIELDS: [&str; 2] = ["name", "days"];

/// The processed form of one roster row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowReport {
    /// The result written to the output file.
    pub result: EntitlementResult,
    /// How the result came about.
    pub audit_trace: AuditTrace,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// The file the results were written to.
    pub output_path: PathBuf,
    /// Number of rows processed.
    pub rows: usize,
    /// Number of rows whose day count could not be determined.
    pub undetermined: usize,
    /// Number of warnings raised across all rows.
    pub warnings: usize,
}

/// Parses the target year argument.
///
/// # Examples
///
/// ```
/// use vacation_engine::processor::parse_year;
///
/// assert_eq!(parse_year("2017").unwrap(), 2017);
/// assert_eq!(parse_year(" 2017 ").unwrap(), 2017);
/// assert!(parse_year("a2017").is_err());
/// assert!(parse_year("2017.5").is_err());
/// ```
pub fn parse_year(value: &str) -> EngineResult<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| EngineError::InvalidYear {
            value: value.to_string(),
        })
}

/// Returns `<input stem>_vacation_<year>.csv` in the current directory.
///
/// # Examples
///
/// ```
/// use vacation_engine::processor::default_output_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     default_output_path(Path::new("data/input.csv"), 2017),
///     PathBuf::from("input_vacation_2017.csv")
/// );
/// ```
pub fn default_output_path(input: &Path, year: i32) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    PathBuf::from(format!("{}_vacation_{}.csv", stem, year))
}

/// Processes one roster row for `year`.
///
/// An incomplete row yields `days: None` and an `INVALID_ROW` warning that
/// quotes the original cell values.
pub fn process_row(row: &RawRow, year: i32, policy: &PolicyConfig) -> RowReport {
    let record = parse_row(row);

    let Some(employee) = validate(&record) else {
        return RowReport {
            result: EntitlementResult {
                name: record.name,
                days: None,
            },
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![AuditWarning::new(
                    INVALID_ROW,
                    format!("The following row is not valid: {}", row.joined_values()),
                    "high",
                )],
            },
        };
    };

    let entitlement = compute_entitlement(&employee, year, policy);

    RowReport {
        result: EntitlementResult {
            name: employee.name,
            days: entitlement.rounded_days(),
        },
        audit_trace: entitlement.audit_trace,
    }
}

/// Processes every row, preserving order.
pub fn process_rows(rows: &[RawRow], year: i32, policy: &PolicyConfig) -> Vec<RowReport> {
    rows.iter()
        .map(|row| process_row(row, year, policy))
        .collect()
}

/// Logs every warning of a processed row.
pub fn log_diagnostics(report: &RowReport) {
    for warning in &report.audit_trace.warnings {
        warn!(
            employee = %report.result.name,
            code = %warning.code,
            "{}",
            warning.message
        );
    }
}

/// Computes vacation days for every employee in `input` and writes the results.
///
/// `year` is validated before any file is touched. When `output` is `None`
/// the result file is named after the input (see [`default_output_path`]).
/// Failures are logged here and returned to the caller.
pub async fn run(
    year: &str,
    input: &Path,
    output: Option<&Path>,
    policy: &PolicyConfig,
) -> EngineResult<RunSummary> {
    let year = parse_year(year).inspect_err(|_| error!("Year is not valid"))?;

    execute(year, input, output, policy)
        .await
        .inspect_err(|e| error!("Failed to calculate vacation days. Error: {}", e))
}

async fn execute(
    year: i32,
    input: &Path,
    output: Option<&Path>,
    policy: &PolicyConfig,
) -> EngineResult<RunSummary> {
    info!(year, input = %input.display(), "Calculating vacation days");

    let rows = read_rows(input).await?;
    let reports = process_rows(&rows, year, policy);
    reports.iter().for_each(log_diagnostics);

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input, year));

    let results: Vec<EntitlementResult> = reports.iter().map(|r| r.result.clone()).collect();
    write_rows(&output_path, &results, &OUTPUT_FIELDS).await?;

    let summary = RunSummary {
        output_path,
        rows: reports.len(),
        undetermined: results.iter().filter(|r| !r.is_determined()).count(),
        warnings: reports.iter().map(|r| r.audit_trace.warnings.len()).sum(),
    };

    info!(
        output = %summary.output_path.display(),
        rows = summary.rows,
        undetermined = summary.undetermined,
        warnings = summary.warnings,
        "Vacation days written"
    );

    Ok(summary)
}
