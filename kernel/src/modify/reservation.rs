use crate::database::Transaction;
use crate::entity::{Reservation, ReservationDraft};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReservationModifier<Connection: Transaction>: 'static + Sync + Send {
    /// First save. The store assigns the id and the creation stamp and hands
    /// back the full record.
    async fn create(
        &self,
        con: &mut Connection,
        draft: ReservationDraft,
    ) -> error_stack::Result<Reservation, KernelError>;

    /// In-place update of an existing record, matched by id.
    async fn update(
        &self,
        con: &mut Connection,
        reservation: &Reservation,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnReservationModifier<Connection: Transaction>: 'static + Sync + Send {
    type ReservationModifier: ReservationModifier<Connection>;
    fn reservation_modifier(&self) -> &Self::ReservationModifier;
}
