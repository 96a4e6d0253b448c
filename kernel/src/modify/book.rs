use crate::database::Transaction;
use crate::entity::BookExternalId;
use crate::KernelError;

/// Availability counter of the external catalog. Both operations are atomic
/// read-modify-writes and fail loudly when the book no longer exists.
#[async_trait::async_trait]
pub trait BookModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Takes one copy off the shelf. Fails with [`KernelError::BookUnavailable`]
    /// when no free copy remains.
    async fn decrease_available(
        &self,
        con: &mut Connection,
        id: &BookExternalId,
    ) -> error_stack::Result<(), KernelError>;

    /// Puts one copy back on the shelf.
    async fn increase_available(
        &self,
        con: &mut Connection,
        id: &BookExternalId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier<Connection: Transaction>: 'static + Sync + Send {
    type BookModifier: BookModifier<Connection>;
    fn book_modifier(&self) -> &Self::BookModifier;
}
