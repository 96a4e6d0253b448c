use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Book, BookExternalId, Reservation, User, UserId};
use kernel::KernelError;

use crate::error::ConvertError;

pub use self::{book::*, reservation::*, user::*};

mod book;
mod reservation;
mod user;

#[derive(Debug, Clone, Default)]
pub(in crate::database) struct LedgerState {
    pub(in crate::database) users: HashMap<UserId, User>,
    pub(in crate::database) books: HashMap<BookExternalId, Book>,
    // Vec keeps find_all in insertion order
    pub(in crate::database) reservations: Vec<Reservation>,
}

/// Reference store backing the ledger with plain process memory.
///
/// A transaction works on a private copy of the whole state and swaps it in
/// on commit, so partial work never leaks into the shared view. This assumes
/// the single-request-at-a-time model the ledger is specified for.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<Mutex<LedgerState>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds master data owned by the external user directory.
    pub fn insert_user(&self, user: User) -> error_stack::Result<(), KernelError> {
        let mut state = self.state.lock().convert_error()?;
        state.users.insert(user.id().clone(), user);
        Ok(())
    }

    /// Seeds master data owned by the external catalog.
    pub fn insert_book(&self, book: Book) -> error_stack::Result<(), KernelError> {
        let mut state = self.state.lock().convert_error()?;
        state.books.insert(book.external_id().clone(), book);
        Ok(())
    }

    /// Committed view of a book, bypassing any open transaction.
    pub fn find_book(
        &self,
        id: &BookExternalId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let state = self.state.lock().convert_error()?;
        Ok(state.books.get(id).cloned())
    }
}

pub struct MemoryTransaction {
    shared: Arc<Mutex<LedgerState>>,
    pub(in crate::database) working: LedgerState,
}

#[async_trait::async_trait]
impl DatabaseConnection<MemoryTransaction> for MemoryDatabase {
    async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
        let working = self.state.lock().convert_error()?.clone();
        Ok(MemoryTransaction {
            shared: Arc::clone(&self.state),
            working,
        })
    }
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        *self.shared.lock().convert_error()? = self.working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}
