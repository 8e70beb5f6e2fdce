use std::fmt;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Time slot with ID {0} not found")]
    NotFound(Uuid),

    #[error("Time slot with ID {0} is already booked")]
    AlreadyBooked(Uuid),

    #[error("Time slot with ID {0} is not booked")]
    NotBooked(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage failure: {message}")]
    Storage {
        message: String,
        #[source]
        source: eyre::Report,
    },
}

/// Discriminant of a [`SlotError`], for callers that branch on the failure
/// without caring about its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyBooked,
    NotBooked,
    Validation,
    Storage,
}

impl SlotError {
    pub fn validation(message: impl Into<String>) -> Self {
        SlotError::Validation(message.into())
    }

    /// Wraps a storage-layer report with a description of the failed operation.
    pub fn storage(message: impl Into<String>, source: eyre::Report) -> Self {
        SlotError::Storage {
            message: message.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SlotError::NotFound(_) => ErrorKind::NotFound,
            SlotError::AlreadyBooked(_) => ErrorKind::AlreadyBooked,
            SlotError::NotBooked(_) => ErrorKind::NotBooked,
            SlotError::Validation(_) => ErrorKind::Validation,
            SlotError::Storage { .. } => ErrorKind::Storage,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::AlreadyBooked => "already_booked",
            ErrorKind::NotBooked => "not_booked",
            ErrorKind::Validation => "validation",
            ErrorKind::Storage => "storage",
        };
        f.write_str(name)
    }
}

pub type SlotResult<T> = Result<T, SlotError>;
