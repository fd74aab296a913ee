use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Empty order specification")]
    EmptyOrder,

    #[error("Invalid column name: {0}")]
    InvalidColumn(String),

    #[error("Invalid sort direction: {0} (expected asc or desc)")]
    InvalidDirection(String),
}
