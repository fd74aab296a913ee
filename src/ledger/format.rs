use serde_json::Value;
use tracing::{debug, error, warn};

use super::record::TransactionRecord;

/// Result of turning an API payload into records
#[derive(Debug, Clone, PartialEq)]
pub enum FormatOutcome {
    Records(Vec<TransactionRecord>),
    /// The payload was an empty array
    Empty,
    /// The payload was not an array at all
    Invalid,
}

impl FormatOutcome {
    pub fn into_records(self) -> Vec<TransactionRecord> {
        match self {
            FormatOutcome::Records(records) => records,
            FormatOutcome::Empty | FormatOutcome::Invalid => Vec::new(),
        }
    }
}

/// Map raw sheet rows into records. The first row is the sheet header and is dropped.
pub fn format_rows(payload: &Value) -> FormatOutcome {
    let rows = match payload {
        Value::Array(rows) => rows,
        other => {
            error!(payload = %other, "ledger payload is not an array");
            return FormatOutcome::Invalid;
        }
    };

    if rows.is_empty() {
        warn!("ledger payload is empty");
        return FormatOutcome::Empty;
    }

    let records: Vec<TransactionRecord> = rows.iter().skip(1).map(record_from_row).collect();
    debug!(count = records.len(), "formatted ledger rows");
    FormatOutcome::Records(records)
}

fn record_from_row(row: &Value) -> TransactionRecord {
    let cell = |i: usize| row.as_array().and_then(|cells| cells.get(i)).map(cell_text).unwrap_or_default();

    TransactionRecord {
        date: cell(0),
        device: cell(1),
        serial: cell(2),
        plate: cell(3),
        person: cell(4),
        note: cell(5),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Keep only rows that belong to `user_name`; compared after trimming both sides.
///
/// Without a known user name every record passes through.
pub fn scope_to_user(records: Vec<TransactionRecord>, user_name: Option<&str>) -> Vec<TransactionRecord> {
    let Some(user_name) = user_name else {
        warn!("no user name in session, showing every ledger row");
        return records;
    };

    let wanted = user_name.trim();
    records.into_iter().filter(|r| r.person.trim() == wanted).collect()
}
