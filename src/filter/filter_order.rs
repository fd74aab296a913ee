use std::cmp::Ordering;

use super::compare::{comparator_for, compare_values, TextCollator};
use super::error::FilterError;
use super::types::{SortDirection, SortKey};
use crate::ledger::{Column, TransactionRecord};

pub struct FilterOrder;

impl FilterOrder {
    /// Parse `"serial desc"` / `"date"` into a sort key
    pub fn parse(order: &str) -> Result<SortKey, FilterError> {
        let mut it = order.split_whitespace();
        let name = it.next().ok_or(FilterError::EmptyOrder)?;
        let column = Column::from_name(name).ok_or_else(|| FilterError::InvalidColumn(name.to_string()))?;

        let direction = match it.next() {
            None => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(d) => return Err(FilterError::InvalidDirection(d.to_string())),
        };

        if let Some(extra) = it.next() {
            return Err(FilterError::InvalidDirection(extra.to_string()));
        }

        Ok(SortKey { column, direction })
    }

    /// Sorted copy of `records`. Equal values keep their relative order.
    pub fn apply(records: &[TransactionRecord], key: SortKey) -> Vec<TransactionRecord> {
        let strategy = comparator_for(key.column);
        let collator = TextCollator::new();
        let cmp = |a: &TransactionRecord, b: &TransactionRecord| -> Ordering {
            let (a, b) = (a.get(key.column), b.get(key.column));
            match key.direction {
                SortDirection::Asc => compare_values(&collator, strategy, a, b),
                SortDirection::Desc => compare_values(&collator, strategy, b, a),
            }
        };

        // The serial comparator mixes numeric and text ordering, which is not a strict
        // total order for every input, so build the result by stable insertion rather
        // than handing it to slice::sort_by.
        let mut sorted: Vec<TransactionRecord> = Vec::with_capacity(records.len());
        for record in records {
            let at = sorted.partition_point(|placed| cmp(placed, record) != Ordering::Greater);
            sorted.insert(at, record.clone());
        }
        sorted
    }
}
