use serde::{Deserialize, Serialize};

use crate::ledger::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header marker shown next to the sorted column
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// How values of a column are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// `day/month/year` dates, compared as calendar dates
    Chronological,
    /// Numeric prefix when both sides have one, text otherwise
    NumericThenText,
    /// Case-insensitive text
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: Column,
    pub direction: SortDirection,
}

/// Column currently sorted on, if any. Starts unsorted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub active: Option<SortKey>,
}

impl SortState {
    /// Header click: ascending on a new column, flip on the current one
    pub fn toggle(&mut self, column: Column) -> SortKey {
        let direction = match self.active {
            Some(key) if key.column == column && key.direction == SortDirection::Asc => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        let key = SortKey { column, direction };
        self.active = Some(key);
        key
    }

    pub fn set(&mut self, key: SortKey) {
        self.active = Some(key);
    }

    pub fn direction_of(&self, column: Column) -> Option<SortDirection> {
        self.active.filter(|k| k.column == column).map(|k| k.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_on_same_column() {
        let mut state = SortState::default();
        assert_eq!(state.toggle(Column::Date).direction, SortDirection::Asc);
        assert_eq!(state.toggle(Column::Date).direction, SortDirection::Desc);
        // third click starts over
        assert_eq!(state.toggle(Column::Date).direction, SortDirection::Asc);
    }

    #[test]
    fn new_column_resets_to_ascending() {
        let mut state = SortState::default();
        state.toggle(Column::Date);
        state.toggle(Column::Date);
        let key = state.toggle(Column::Serial);
        assert_eq!(key, SortKey { column: Column::Serial, direction: SortDirection::Asc });
        assert_eq!(state.direction_of(Column::Date), None);
        assert_eq!(state.direction_of(Column::Serial), Some(SortDirection::Asc));
    }
}
