//! Report rendering: fixed-width text table and JSON.
//!
//! The table has one header row, a 65-dash separator, then one row per
//! record:
//!
//! ```text
//! Function       Idempotent   Image           Extended Image     i-regular
//! -----------------------------------------------------------------
//! (0, 0)          | Yes        | {0}           | {0}              | Yes
//! (0, 1)          | Yes        | {0, 1}        | {0, 1}           | Yes
//! ```
//!
//! Columns are minimum widths; a wider cell pushes the rest of its row
//! right rather than being truncated.

use serde::Serialize;

use crate::classify::{ClassificationRecord, MapCheck, Summary};
use crate::enumerate::EnumerationStats;
use crate::error::Result;

/// Column headers, in order.
pub const HEADERS: [&str; 5] = ["Function", "Idempotent", "Image", "Extended Image", "i-regular"];

/// Length of the separator line under the header.
pub const SEPARATOR_WIDTH: usize = 65;

const HEADER_WIDTHS: [usize; 4] = [14, 12, 15, 18];
const ROW_WIDTHS: [usize; 4] = [15, 10, 13, 16];

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// The header row.
#[must_use]
pub fn header() -> String {
    let [w0, w1, w2, w3] = HEADER_WIDTHS;
    format!(
        "{:<w0$} {:<w1$} {:<w2$} {:<w3$} {}",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4]
    )
}

/// One table row.
#[must_use]
pub fn row(record: &ClassificationRecord) -> String {
    let [w0, w1, w2, w3] = ROW_WIDTHS;
    format!(
        "{:<w0$} | {:<w1$} | {:<w2$} | {:<w3$} | {}",
        record.function.to_string(),
        yes_no(record.is_idempotent),
        record.direct_image.to_string(),
        record.extended_image.to_string(),
        yes_no(record.is_i_regular),
    )
}

/// Header, separator, and every row, newline-terminated.
#[must_use]
pub fn render_table(records: &[ClassificationRecord]) -> String {
    let mut out = String::new();
    out.push_str(&header());
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    for record in records {
        out.push_str(&row(record));
        out.push('\n');
    }
    out
}

/// A short tally block for the end of a table report.
#[must_use]
pub fn render_summary(summary: &Summary, stats: Option<&EnumerationStats>) -> String {
    let mut out = String::new();
    if let Some(stats) = stats {
        out.push_str(&format!(
            "Candidates: {} examined, {} rejected (f(0) != 0), {} rejected (not a gcd endomorphism)\n",
            stats.examined, stats.rejected_nonzero, stats.rejected_endomorphism
        ));
    }
    out.push_str(&format!(
        "Summary: {} functions, {} idempotent, {} i-regular, {} both\n",
        summary.total, summary.idempotent, summary.i_regular, summary.idempotent_and_i_regular
    ));
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    n: usize,
    functions: &'a [ClassificationRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'a EnumerationStats>,
}

/// Pretty-printed JSON report.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
pub fn render_json(
    n: usize,
    records: &[ClassificationRecord],
    summary: Option<&Summary>,
    stats: Option<&EnumerationStats>,
) -> Result<String> {
    let report = JsonReport {
        n,
        functions: records,
        summary,
        stats,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Text verdict for a single checked map, followed by its table row when
/// the map is valid.
#[must_use]
pub fn render_check(check: &MapCheck) -> String {
    let mut out = String::new();
    out.push_str(&format!("Function: {}\n", check.function));
    out.push_str(&format!("Fixes 0: {}\n", yes_no(check.fixes_zero)));
    out.push_str(&format!(
        "GCD endomorphism: {}\n",
        yes_no(check.is_endomorphism)
    ));
    if let Some(record) = &check.record {
        out.push('\n');
        out.push_str(&render_table(std::slice::from_ref(record)));
    }
    out
}

/// Pretty-printed JSON for a single checked map.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
pub fn render_check_json(check: &MapCheck) -> Result<String> {
    Ok(serde_json::to_string_pretty(check)?)
}
