use error_stack::Report;
use tracing::debug;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{AvailableQuantity, Book, BookExternalId};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery<MemoryTransaction> for MemoryBookRepository {
    async fn find_by_external_id(
        &self,
        con: &mut MemoryTransaction,
        id: &BookExternalId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.working.books.get(id).cloned())
    }
}

#[async_trait::async_trait]
impl BookModifier<MemoryTransaction> for MemoryBookRepository {
    async fn decrease_available(
        &self,
        con: &mut MemoryTransaction,
        id: &BookExternalId,
    ) -> error_stack::Result<(), KernelError> {
        let book = con.working.books.get_mut(id).ok_or_else(|| {
            Report::new(KernelError::BookNotFound)
                .attach_printable(format!("book external id: {}", id.as_ref()))
        })?;
        let next = match book.available_quantity() {
            Some(quantity) if *quantity.as_ref() > 0 => {
                AvailableQuantity::new(*quantity.as_ref() - 1)
            }
            _ => {
                return Err(Report::new(KernelError::BookUnavailable)
                    .attach_printable(format!("book external id: {}", id.as_ref())))
            }
        };
        debug!("book {} available -> {}", id.as_ref(), next.as_ref());
        book.substitute(|book| *book.available_quantity = Some(next));
        Ok(())
    }

    async fn increase_available(
        &self,
        con: &mut MemoryTransaction,
        id: &BookExternalId,
    ) -> error_stack::Result<(), KernelError> {
        let book = con.working.books.get_mut(id).ok_or_else(|| {
            Report::new(KernelError::BookNotFound)
                .attach_printable(format!("book external id: {}", id.as_ref()))
        })?;
        // Untracked availability starts counting from zero here.
        let next = book
            .available_quantity()
            .as_ref()
            .map_or(1, |quantity| *quantity.as_ref() + 1);
        debug!("book {} available -> {}", id.as_ref(), next);
        book.substitute(|book| *book.available_quantity = Some(AvailableQuantity::new(next)));
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        AvailableQuantity, Book, BookExternalId, BookPrice, BookTitle, StockQuantity,
    };
    use kernel::KernelError;
    use rust_decimal_macros::dec;

    use crate::database::memory::{MemoryBookRepository, MemoryDatabase};

    fn book(available: Option<i32>) -> Book {
        Book::new(
            BookExternalId::new(42i64),
            BookTitle::new("The Hobbit"),
            BookPrice::new(dec!(9.50)),
            StockQuantity::new(3),
            available.map(AvailableQuantity::new),
        )
    }

    #[tokio::test]
    async fn find_returns_seeded_book() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        db.insert_book(book(Some(3)))?;
        let mut con = db.transact().await?;

        let id = BookExternalId::new(42i64);
        let found = MemoryBookRepository
            .find_by_external_id(&mut con, &id)
            .await?;
        assert_eq!(found, Some(book(Some(3))));

        let missing = MemoryBookRepository
            .find_by_external_id(&mut con, &BookExternalId::new(7i64))
            .await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn decrease_and_increase_move_the_counter() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        db.insert_book(book(Some(1)))?;
        let mut con = db.transact().await?;
        let id = BookExternalId::new(42i64);

        MemoryBookRepository.decrease_available(&mut con, &id).await?;
        let found = MemoryBookRepository
            .find_by_external_id(&mut con, &id)
            .await?
            .unwrap();
        assert_eq!(found.available_quantity(), &Some(AvailableQuantity::new(0)));

        // Counter is exhausted now.
        let err = MemoryBookRepository
            .decrease_available(&mut con, &id)
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::BookUnavailable);

        MemoryBookRepository.increase_available(&mut con, &id).await?;
        let found = MemoryBookRepository
            .find_by_external_id(&mut con, &id)
            .await?
            .unwrap();
        assert_eq!(found.available_quantity(), &Some(AvailableQuantity::new(1)));
        Ok(())
    }

    #[tokio::test]
    async fn untracked_availability_cannot_be_decreased() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        db.insert_book(book(None))?;
        let mut con = db.transact().await?;
        let id = BookExternalId::new(42i64);

        let err = MemoryBookRepository
            .decrease_available(&mut con, &id)
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::BookUnavailable);
        Ok(())
    }

    #[tokio::test]
    async fn missing_book_fails_loudly() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        let id = BookExternalId::new(404i64);

        let err = MemoryBookRepository
            .decrease_available(&mut con, &id)
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::BookNotFound);

        let err = MemoryBookRepository
            .increase_available(&mut con, &id)
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::BookNotFound);
        Ok(())
    }
}
