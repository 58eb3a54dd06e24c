use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    /// The configured input file does not exist
    #[error("the file {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// One of the declared columns is missing from the header line
    #[error("missing required column `{column}`")]
    MissingColumn { column: &'static str },

    /// A row could not be turned into an order, wrong field count or a bad value
    #[error("malformed record: {0}")]
    MalformedRecord(#[source] csv::Error),

    /// A monetary value of an order does not fit in a decimal
    #[error("arithmetic overflow computing the {value} of order {id}")]
    Overflow { id: i32, value: &'static str },

    /// Anything else that went wrong while reading, mostly I/O
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl OrderError {
    /// Whether the error comes from the shape or content of the CSV itself
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            OrderError::MissingColumn { .. } | OrderError::MalformedRecord(_)
        )
    }
}

impl From<csv::Error> for OrderError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return OrderError::MalformedRecord(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(e) => OrderError::Io(e),
            other => OrderError::Io(io::Error::other(format!("{other:?}"))),
        }
    }
}
