use time::Date;

use crate::database::Transaction;
use crate::entity::{Reservation, ReservationId, ReservationStatus, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReservationQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &ReservationId,
    ) -> error_stack::Result<Option<Reservation>, KernelError>;

    /// Order follows the store, which keeps insertion order.
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Reservation>, KernelError>;

    async fn find_by_user_id(
        &self,
        con: &mut Connection,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Reservation>, KernelError>;

    async fn find_by_status(
        &self,
        con: &mut Connection,
        status: &ReservationStatus,
    ) -> error_stack::Result<Vec<Reservation>, KernelError>;

    /// Reservations in the given status whose expected return date lies
    /// strictly before `as_of`.
    async fn find_overdue(
        &self,
        con: &mut Connection,
        status: &ReservationStatus,
        as_of: &Date,
    ) -> error_stack::Result<Vec<Reservation>, KernelError>;
}

pub trait DependOnReservationQuery<Connection: Transaction>: Sync + Send + 'static {
    type ReservationQuery: ReservationQuery<Connection>;
    fn reservation_query(&self) -> &Self::ReservationQuery;
}
