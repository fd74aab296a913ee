use std::cmp::Ordering;

use chrono::NaiveDate;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use super::types::SortStrategy;
use crate::ledger::Column;

/// Per-column comparison table
pub fn comparator_for(column: Column) -> SortStrategy {
    match column {
        Column::Date => SortStrategy::Chronological,
        Column::Serial => SortStrategy::NumericThenText,
        Column::Device | Column::Plate | Column::Person | Column::Note => SortStrategy::Text,
    }
}

/// Locale-aware text ordering (CLDR root collation, so "Ánh" < "Bảo" < "Đức" < "Em")
pub struct TextCollator {
    inner: Option<CollatorBorrowed<'static>>,
}

impl TextCollator {
    pub fn new() -> Self {
        let inner = match Collator::try_new(Default::default(), CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!(error = %e, "collation data unavailable, comparing text by code point");
                None
            }
        };
        Self { inner }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.inner {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

impl Default for TextCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two cell values in ascending order. Both sides are lowercased first.
pub fn compare_values(collator: &TextCollator, strategy: SortStrategy, a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    match strategy {
        SortStrategy::Chronological => match (parse_date(&a), parse_date(&b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            // unparseable dates go last
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortStrategy::NumericThenText => match (parse_number_prefix(&a), parse_number_prefix(&b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => collator.compare(&a, &b),
        },
        SortStrategy::Text => collator.compare(&a, &b),
    }
}

/// Parse `day/month/year`
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('/');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Leading decimal number of `s`, ignoring anything after it ("123abc" is 123).
pub fn parse_number_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // exponent only counts when it has digits
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
