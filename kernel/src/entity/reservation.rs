mod fee;
mod id;
mod rental_days;
mod status;

pub use self::{fee::*, id::*, rental_days::*, status::*};
use crate::entity::{BookExternalId, BookPrice, CreatedAt, UserId};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use time::Date;
use vodca::References;

/// One book lent to one user for a bounded period. Owned by the store;
/// services only hold it for the duration of a call.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Reservation {
    id: ReservationId,
    user_id: UserId,
    book_external_id: BookExternalId,
    rental_days: RentalDays,
    start_date: Date,
    expected_return_date: Date,
    actual_return_date: Option<Date>,
    /// Book price at creation time. Later price changes never touch this.
    daily_rate: BookPrice,
    total_fee: Fee,
    late_fee: Fee,
    status: ReservationStatus,
    created_at: CreatedAt<Reservation>,
}

impl Reservation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ReservationId,
        user_id: UserId,
        book_external_id: BookExternalId,
        rental_days: RentalDays,
        start_date: Date,
        expected_return_date: Date,
        actual_return_date: Option<Date>,
        daily_rate: BookPrice,
        total_fee: Fee,
        late_fee: Fee,
        status: ReservationStatus,
        created_at: CreatedAt<Reservation>,
    ) -> Self {
        Self {
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
        }
    }
}

/// A reservation before its first save. The store assigns the id and the
/// creation stamp.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct ReservationDraft {
    user_id: UserId,
    book_external_id: BookExternalId,
    rental_days: RentalDays,
    start_date: Date,
    expected_return_date: Date,
    daily_rate: BookPrice,
    total_fee: Fee,
    late_fee: Fee,
    status: ReservationStatus,
}

impl ReservationDraft {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: UserId,
        book_external_id: BookExternalId,
        rental_days: RentalDays,
        start_date: Date,
        expected_return_date: Date,
        daily_rate: BookPrice,
        total_fee: Fee,
        late_fee: Fee,
        status: ReservationStatus,
    ) -> Self {
        Self {
            user_id,
            book_external_id,
            rental_days,
            start_date,
            expected_return_date,
            daily_rate,
            total_fee,
            late_fee,
            status,
        }
    }
}
