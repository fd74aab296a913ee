use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The two ledgers kept in the equipment spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    Borrowed,
    Returned,
}

impl LedgerKind {
    /// Resource path under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            LedgerKind::Borrowed => "/borrowed-items",
            LedgerKind::Returned => "/returned-items",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LedgerKind::Borrowed => "BORROWED EQUIPMENT",
            LedgerKind::Returned => "RETURNED EQUIPMENT",
        }
    }

    pub fn label(&self, column: Column) -> &'static str {
        match (self, column) {
            (LedgerKind::Borrowed, Column::Date) => "Borrow date",
            (LedgerKind::Returned, Column::Date) => "Return date",
            (_, Column::Device) => "Device",
            (_, Column::Serial) => "Serial/Phone",
            (_, Column::Plate) => "Plate number",
            (LedgerKind::Borrowed, Column::Person) => "Borrowed by",
            (LedgerKind::Returned, Column::Person) => "Returned by",
            (_, Column::Note) => "Note",
        }
    }
}

/// Record fields, in raw-row order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Date,
    Device,
    #[value(alias = "phone")]
    Serial,
    Plate,
    #[value(alias = "returner", alias = "borrower")]
    Person,
    Note,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Date,
        Column::Device,
        Column::Serial,
        Column::Plate,
        Column::Person,
        Column::Note,
    ];

    pub fn index(&self) -> usize {
        match self {
            Column::Date => 0,
            Column::Device => 1,
            Column::Serial => 2,
            Column::Plate => 3,
            Column::Person => 4,
            Column::Note => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Device => "device",
            Column::Serial => "serial",
            Column::Plate => "plate",
            Column::Person => "person",
            Column::Note => "note",
        }
    }

    /// Lenient lookup used when parsing order strings
    pub fn from_name(name: &str) -> Option<Column> {
        match name.to_ascii_lowercase().as_str() {
            "date" => Some(Column::Date),
            "device" => Some(Column::Device),
            "serial" | "phone" => Some(Column::Serial),
            "plate" => Some(Column::Plate),
            "person" | "returner" | "borrower" => Some(Column::Person),
            "note" => Some(Column::Note),
            _ => None,
        }
    }
}

/// One borrow or return transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// `day/month/year` as typed in the sheet
    pub date: String,
    pub device: String,
    /// Device serial or the holder's phone number
    pub serial: String,
    pub plate: String,
    /// Returner on the returned ledger, borrower on the borrowed one
    pub person: String,
    pub note: String,
}

impl TransactionRecord {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Date => &self.date,
            Column::Device => &self.device,
            Column::Serial => &self.serial,
            Column::Plate => &self.plate,
            Column::Person => &self.person,
            Column::Note => &self.note,
        }
    }

    pub fn fields(&self) -> [&str; 6] {
        [
            &self.date,
            &self.device,
            &self.serial,
            &self.plate,
            &self.person,
            &self.note,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_row_order() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
            assert_eq!(Column::from_name(column.name()), Some(*column));
        }
        assert_eq!(Column::from_name("Returner"), Some(Column::Person));
        assert_eq!(Column::from_name("id"), None);
    }

    #[test]
    fn labels_depend_on_ledger() {
        assert_eq!(LedgerKind::Returned.label(Column::Person), "Returned by");
        assert_eq!(LedgerKind::Borrowed.label(Column::Person), "Borrowed by");
        assert_eq!(LedgerKind::Returned.path(), "/returned-items");
    }
}
