use std::sync::PoisonError;

use error_stack::Report;
use kernel::KernelError;

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T, G> ConvertError for Result<T, PoisonError<G>> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|_| {
            Report::new(KernelError::Concurrency).attach_printable("ledger state lock poisoned")
        })
    }
}
