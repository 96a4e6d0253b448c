use error_stack::Report;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use time::Duration;
use tracing::info;

use crate::transfer::{
    CreateReservationDto, GetOverdueReservationsDto, GetReservationFromIdDto,
    GetReservationsFromUserIdDto, ReservationDto, ReturnBookDto,
};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookQuery, DependOnBookQuery, DependOnReservationQuery, DependOnUserQuery, ReservationQuery,
    UserQuery,
};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnReservationModifier, ReservationModifier,
};
use kernel::prelude::entity::{
    BookExternalId, BookPrice, Fee, RentalDays, ReservationDraft, ReservationId,
    ReservationStatus, UserId,
};
use kernel::KernelError;

/// Penalty per day of delay: 15% of the book price.
const LATE_FEE_RATE: Decimal = dec!(0.15);

fn base_fee(daily_rate: &BookPrice, rental_days: &RentalDays) -> Fee {
    Fee::new(daily_rate.as_ref() * Decimal::from(*rental_days.as_ref()))
}

fn late_fee(book_price: &BookPrice, days_late: i64) -> Fee {
    if days_late <= 0 {
        return Fee::zero();
    }
    Fee::new(book_price.as_ref() * LATE_FEE_RATE * Decimal::from(days_late))
}

#[async_trait::async_trait]
pub trait CreateReservationService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnReservationModifier<Connection>
{
    async fn create_reservation(
        &mut self,
        dto: CreateReservationDto,
    ) -> error_stack::Result<ReservationDto, KernelError> {
        let rental_days = RentalDays::new(dto.rental_days);
        if !rental_days.is_positive() {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "rental days must be positive, got {}",
                dto.rental_days
            )));
        }

        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        self.user_query()
            .find_by_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::UserNotFound)
                    .attach_printable(format!("user id: {}", dto.user_id))
            })?;

        let book_external_id = BookExternalId::new(dto.book_external_id);
        let book = self
            .book_query()
            .find_by_external_id(&mut connection, &book_external_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::BookNotFound)
                    .attach_printable(format!("book external id: {}", dto.book_external_id))
            })?;
        match book.available_quantity() {
            Some(quantity) if *quantity.as_ref() > 0 => {}
            _ => {
                return Err(Report::new(KernelError::BookUnavailable)
                    .attach_printable(format!("book external id: {}", dto.book_external_id)))
            }
        }

        let expected_return_date = dto.start_date + Duration::days(i64::from(&rental_days));
        // Price snapshot; later catalog price changes never touch the base fee.
        let daily_rate = book.price().clone();
        let total_fee = base_fee(&daily_rate, &rental_days);
        let draft = ReservationDraft::new(
            user_id,
            book_external_id.clone(),
            rental_days,
            dto.start_date,
            expected_return_date,
            daily_rate,
            total_fee,
            Fee::zero(),
            ReservationStatus::Active,
        );

        // Counter decrement and first save share the transaction, so neither
        // outlives the other on failure.
        self.book_modifier()
            .decrease_available(&mut connection, &book_external_id)
            .await?;
        let reservation = self
            .reservation_modifier()
            .create(&mut connection, draft)
            .await?;
        connection.commit().await?;

        info!(
            "reservation {} created for user {}",
            reservation.id().as_ref(),
            dto.user_id
        );
        Ok(ReservationDto::from(reservation))
    }
}

impl<Connection: Transaction + Send, T> CreateReservationService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnReservationModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ReturnBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnReservationQuery<Connection>
    + DependOnReservationModifier<Connection>
{
    async fn return_book(
        &mut self,
        dto: ReturnBookDto,
    ) -> error_stack::Result<ReservationDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let reservation_id = ReservationId::new(dto.reservation_id);
        let reservation = self
            .reservation_query()
            .find_by_id(&mut connection, &reservation_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::ReservationNotFound)
                    .attach_printable(format!("reservation id: {}", dto.reservation_id))
            })?;
        if reservation.status() != &ReservationStatus::Active {
            return Err(Report::new(KernelError::AlreadyReturned)
                .attach_printable(format!("reservation id: {}", dto.reservation_id)));
        }
        let book = self
            .book_query()
            .find_by_external_id(&mut connection, reservation.book_external_id())
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::BookNotFound).attach_printable(format!(
                    "book external id: {}",
                    reservation.book_external_id().as_ref()
                ))
            })?;

        let days_late = (dto.return_date - *reservation.expected_return_date())
            .whole_days()
            .max(0);
        // The penalty follows the current catalog price, the base fee the
        // snapshot taken at creation.
        let late = late_fee(book.price(), days_late);
        let total = base_fee(reservation.daily_rate(), reservation.rental_days()) + late.clone();

        let book_external_id = reservation.book_external_id().clone();
        let returned = reservation.reconstruct(|r| {
            r.actual_return_date = Some(dto.return_date);
            r.late_fee = late;
            r.total_fee = total;
            r.status = ReservationStatus::Returned;
        });

        self.reservation_modifier()
            .update(&mut connection, &returned)
            .await?;
        self.book_modifier()
            .increase_available(&mut connection, &book_external_id)
            .await?;
        connection.commit().await?;

        info!(
            "reservation {} returned, {} day(s) late",
            dto.reservation_id, days_late
        );
        Ok(ReservationDto::from(returned))
    }
}

impl<Connection: Transaction + Send, T> ReturnBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnReservationQuery<Connection>
        + DependOnReservationModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetReservationService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnReservationQuery<Connection>
{
    async fn get_reservation_by_id(
        &mut self,
        dto: GetReservationFromIdDto,
    ) -> error_stack::Result<ReservationDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ReservationId::new(dto.reservation_id);
        let reservation = self
            .reservation_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::ReservationNotFound)
                    .attach_printable(format!("reservation id: {}", dto.reservation_id))
            })?;
        Ok(ReservationDto::from(reservation))
    }

    async fn get_all_reservations(
        &mut self,
    ) -> error_stack::Result<Vec<ReservationDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let reservations = self.reservation_query().find_all(&mut connection).await?;
        Ok(reservations.into_iter().map(ReservationDto::from).collect())
    }

    async fn get_reservations_from_user(
        &mut self,
        dto: GetReservationsFromUserIdDto,
    ) -> error_stack::Result<Vec<ReservationDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let reservations = self
            .reservation_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;
        Ok(reservations.into_iter().map(ReservationDto::from).collect())
    }

    async fn get_active_reservations(
        &mut self,
    ) -> error_stack::Result<Vec<ReservationDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let reservations = self
            .reservation_query()
            .find_by_status(&mut connection, &ReservationStatus::Active)
            .await?;
        Ok(reservations.into_iter().map(ReservationDto::from).collect())
    }

    async fn get_overdue_reservations(
        &mut self,
        dto: GetOverdueReservationsDto,
    ) -> error_stack::Result<Vec<ReservationDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let reservations = self
            .reservation_query()
            .find_overdue(&mut connection, &ReservationStatus::Active, &dto.as_of)
            .await?;
        Ok(reservations.into_iter().map(ReservationDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetReservationService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnReservationQuery<Connection>
{
}
