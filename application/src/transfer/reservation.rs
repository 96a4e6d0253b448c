use kernel::prelude::entity::{DestructReservation, Reservation, ReservationStatus};
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_external_id: i64,
    pub rental_days: i32,
    pub start_date: Date,
    pub expected_return_date: Date,
    pub actual_return_date: Option<Date>,
    pub daily_rate: Decimal,
    pub total_fee: Decimal,
    pub late_fee: Decimal,
    pub status: ReservationStatus,
    pub created_at: OffsetDateTime,
}

impl From<Reservation> for ReservationDto {
    fn from(value: Reservation) -> Self {
        let DestructReservation {
            id,
            user_id,
            book_external_id,
            rental_days,
            start_date,
            expected_return_date,
            actual_return_date,
            daily_rate,
            total_fee,
            late_fee,
            status,
            created_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            book_external_id: book_external_id.into(),
            rental_days: rental_days.into(),
            start_date,
            expected_return_date,
            actual_return_date,
            daily_rate: daily_rate.into(),
            total_fee: *total_fee.as_ref(),
            late_fee: *late_fee.as_ref(),
            status,
            created_at: *created_at.as_ref(),
        }
    }
}

pub struct CreateReservationDto {
    pub user_id: Uuid,
    pub book_external_id: i64,
    pub rental_days: i32,
    pub start_date: Date,
}

pub struct ReturnBookDto {
    pub reservation_id: Uuid,
    pub return_date: Date,
}

pub struct GetReservationFromIdDto {
    pub reservation_id: Uuid,
}

pub struct GetReservationsFromUserIdDto {
    pub user_id: Uuid,
}

pub struct GetOverdueReservationsDto {
    pub as_of: Date,
}
