use thiserror::Error;

/// Errors returned by grid reads and writes.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridError {
    #[error("cell {row}, {col} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
