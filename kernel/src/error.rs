use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum KernelError {
    Validation,
    UserNotFound,
    BookNotFound,
    ReservationNotFound,
    BookUnavailable,
    AlreadyReturned,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid request"),
            KernelError::UserNotFound => write!(f, "User not found"),
            KernelError::BookNotFound => write!(f, "Book not found"),
            KernelError::ReservationNotFound => write!(f, "Reservation not found"),
            KernelError::BookUnavailable => write!(f, "No available copy of the book"),
            KernelError::AlreadyReturned => write!(f, "Reservation is already returned"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
