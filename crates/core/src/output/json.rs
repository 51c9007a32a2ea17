//! JSON output formatter

use crate::models::OutlineReport;
use crate::output::FormatError;

/// Format report data as pretty-printed JSON
pub fn format_json(data: &OutlineReport) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(FormatError::from)
}
