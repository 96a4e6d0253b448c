mod external_id;
mod price;
mod quantity;
mod title;

pub use self::{external_id::*, price::*, quantity::*, title::*};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Book {
    external_id: BookExternalId,
    title: BookTitle,
    price: BookPrice,
    stock_quantity: StockQuantity,
    available_quantity: Option<AvailableQuantity>,
}

impl Book {
    pub fn new(
        external_id: BookExternalId,
        title: BookTitle,
        price: BookPrice,
        stock_quantity: StockQuantity,
        available_quantity: Option<AvailableQuantity>,
    ) -> Self {
        Self {
            external_id,
            title,
            price,
            stock_quantity,
            available_quantity,
        }
    }
}
