mod book;
mod reservation;

pub use self::{book::*, reservation::*};
