pub mod format;
pub mod record;

pub use format::{format_rows, scope_to_user, FormatOutcome};
pub use record::{Column, LedgerKind, TransactionRecord};
