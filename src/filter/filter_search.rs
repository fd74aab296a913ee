use crate::ledger::TransactionRecord;

pub struct FilterSearch;

impl FilterSearch {
    /// Records with at least one field containing `query`, ignoring case.
    /// A blank query returns every record.
    pub fn apply(records: &[TransactionRecord], query: &str) -> Vec<TransactionRecord> {
        if query.trim().is_empty() {
            return records.to_vec();
        }

        let needle = query.to_lowercase();
        records
            .iter()
            .filter(|r| r.fields().iter().any(|cell| cell.to_lowercase().contains(&needle)))
            .cloned()
            .collect()
    }
}
