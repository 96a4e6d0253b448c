mod book;
mod reservation;
mod user;

pub use self::{book::*, reservation::*, user::*};
