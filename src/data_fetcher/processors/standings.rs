use super::{list_field, map_rows};
use crate::data_fetcher::models::{StandingsRow, UpstreamTableRow};
use crate::error::AppError;
use serde_json::Value;
use tracing::debug;

/// Converts an upstream standings document into standings rows.
///
/// Only the first entry of `standings` is used: upstream lists the overall
/// league table first, followed by the home and away splits. A missing or
/// empty `standings` list, or a first table without rows, yields no rows.
///
/// # Errors
/// * `AppError::MalformedUpstreamData` - the document or a row has an unexpected shape
pub fn to_standings(raw: &Value) -> Result<Vec<StandingsRow>, AppError> {
    let tables = list_field(raw, "standings", "response")?;

    let Some(first_table) = tables.first() else {
        debug!("Upstream standings list is empty");
        return Ok(Vec::new());
    };

    if tables.len() > 1 {
        debug!("Ignoring {} additional standings tables", tables.len() - 1);
    }

    let rows = list_field(first_table, "table", "standings[0]")?;
    map_rows::<UpstreamTableRow, StandingsRow>(rows, "standings[0].table")
}
