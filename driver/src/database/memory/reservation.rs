use error_stack::Report;
use time::{Date, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use kernel::interface::query::ReservationQuery;
use kernel::interface::update::ReservationModifier;
use kernel::prelude::entity::{
    CreatedAt, DestructReservationDraft, Reservation, ReservationDraft, ReservationId,
    ReservationStatus, UserId,
};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryReservationRepository;

#[async_trait::async_trait]
impl ReservationQuery<MemoryTransaction> for MemoryReservationRepository {
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &ReservationId,
    ) -> error_stack::Result<Option<Reservation>, KernelError> {
        Ok(con
            .working
            .reservations
            .iter()
            .find(|reservation| reservation.id() == id)
            .cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        Ok(con.working.reservations.clone())
    }

    async fn find_by_user_id(
        &self,
        con: &mut MemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        Ok(con
            .working
            .reservations
            .iter()
            .filter(|reservation| reservation.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_status(
        &self,
        con: &mut MemoryTransaction,
        status: &ReservationStatus,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        Ok(con
            .working
            .reservations
            .iter()
            .filter(|reservation| reservation.status() == status)
            .cloned()
            .collect())
    }

    async fn find_overdue(
        &self,
        con: &mut MemoryTransaction,
        status: &ReservationStatus,
        as_of: &Date,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        Ok(con
            .working
            .reservations
            .iter()
            .filter(|reservation| {
                reservation.status() == status && reservation.expected_return_date() < as_of
            })
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl ReservationModifier<MemoryTransaction> for MemoryReservationRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        draft: ReservationDraft,
    ) -> error_stack::Result<Reservation, KernelError> {
        let DestructReservationDraft {
            user_id,
            book_external_id,
            rental_days,
            start_date,
            expected_return_date,
            daily_rate,
            total_fee,
            late_fee,
            status,
        } = draft.into_destruct();
        let reservation = Reservation::new(
            ReservationId::new(Uuid::new_v4()),
            user_id,
            book_external_id,
            rental_days,
            start_date,
            expected_return_date,
            None,
            daily_rate,
            total_fee,
            late_fee,
            status,
            CreatedAt::new(OffsetDateTime::now_utc()),
        );
        debug!("reservation created: {}", reservation.id().as_ref());
        con.working.reservations.push(reservation.clone());
        Ok(reservation)
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        reservation: &Reservation,
    ) -> error_stack::Result<(), KernelError> {
        let stored = con
            .working
            .reservations
            .iter_mut()
            .find(|stored| stored.id() == reservation.id())
            .ok_or_else(|| {
                Report::new(KernelError::ReservationNotFound)
                    .attach_printable(format!("reservation id: {}", reservation.id().as_ref()))
            })?;
        *stored = reservation.clone();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::ReservationQuery;
    use kernel::interface::update::ReservationModifier;
    use kernel::prelude::entity::{
        BookExternalId, BookPrice, Fee, RentalDays, Reservation, ReservationDraft,
        ReservationId, ReservationStatus, UserId,
    };
    use kernel::KernelError;
    use rust_decimal_macros::dec;
    use time::macros::date;
    use time::Duration;
    use uuid::Uuid;

    use crate::database::memory::{MemoryDatabase, MemoryReservationRepository};

    fn draft(user_id: UserId, start: time::Date, days: i32) -> ReservationDraft {
        ReservationDraft::new(
            user_id,
            BookExternalId::new(258027i64),
            RentalDays::new(days),
            start,
            start + Duration::days(i64::from(days)),
            BookPrice::new(dec!(15.99)),
            Fee::new(dec!(15.99) * rust_decimal::Decimal::from(days)),
            Fee::zero(),
            ReservationStatus::Active,
        )
    }

    #[tokio::test]
    async fn create_assigns_id_and_keeps_insertion_order(
    ) -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        let user_id = UserId::new(Uuid::new_v4());

        let first = MemoryReservationRepository
            .create(&mut con, draft(user_id.clone(), date!(2024 - 01 - 10), 7))
            .await?;
        let second = MemoryReservationRepository
            .create(&mut con, draft(user_id.clone(), date!(2024 - 02 - 01), 3))
            .await?;
        assert_ne!(first.id(), second.id());

        let all = MemoryReservationRepository.find_all(&mut con).await?;
        assert_eq!(all, vec![first.clone(), second]);

        let found = MemoryReservationRepository
            .find_by_id(&mut con, first.id())
            .await?;
        assert_eq!(found, Some(first));
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_the_stored_record() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        let user_id = UserId::new(Uuid::new_v4());

        let reservation = MemoryReservationRepository
            .create(&mut con, draft(user_id, date!(2024 - 01 - 10), 7))
            .await?;
        let returned = reservation.reconstruct(|r| {
            r.actual_return_date = Some(date!(2024 - 01 - 15));
            r.status = ReservationStatus::Returned;
        });
        MemoryReservationRepository
            .update(&mut con, &returned)
            .await?;

        let found = MemoryReservationRepository
            .find_by_id(&mut con, returned.id())
            .await?;
        assert_eq!(found, Some(returned));
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_reservation_fails() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        let user_id = UserId::new(Uuid::new_v4());

        let reservation = MemoryReservationRepository
            .create(&mut con, draft(user_id, date!(2024 - 01 - 10), 7))
            .await?;
        let ghost = reservation.reconstruct(|r| r.id = ReservationId::new(Uuid::new_v4()));

        let err = MemoryReservationRepository
            .update(&mut con, &ghost)
            .await
            .unwrap_err();
        assert_eq!(err.current_context(), &KernelError::ReservationNotFound);
        Ok(())
    }

    #[tokio::test]
    async fn queries_filter_by_user_status_and_due_date() -> error_stack::Result<(), KernelError>
    {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        let renter = UserId::new(Uuid::new_v4());
        let other = UserId::new(Uuid::new_v4());

        let overdue = MemoryReservationRepository
            .create(&mut con, draft(renter.clone(), date!(2024 - 01 - 01), 7))
            .await?;
        let running = MemoryReservationRepository
            .create(&mut con, draft(renter.clone(), date!(2024 - 03 - 01), 7))
            .await?;
        let foreign = MemoryReservationRepository
            .create(&mut con, draft(other, date!(2024 - 01 - 01), 7))
            .await?;
        let returned = foreign.reconstruct(|r| {
            r.actual_return_date = Some(date!(2024 - 01 - 05));
            r.status = ReservationStatus::Returned;
        });
        MemoryReservationRepository
            .update(&mut con, &returned)
            .await?;

        let mine = MemoryReservationRepository
            .find_by_user_id(&mut con, &renter)
            .await?;
        assert_eq!(mine, vec![overdue.clone(), running.clone()]);

        let active = MemoryReservationRepository
            .find_by_status(&mut con, &ReservationStatus::Active)
            .await?;
        assert_eq!(active, vec![overdue.clone(), running]);

        // Returned reservations stay out even when their due date has passed.
        let late: Vec<Reservation> = MemoryReservationRepository
            .find_overdue(&mut con, &ReservationStatus::Active, &date!(2024 - 02 - 01))
            .await?;
        assert_eq!(late, vec![overdue]);
        Ok(())
    }
}
