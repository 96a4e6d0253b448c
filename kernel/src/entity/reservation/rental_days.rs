use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentalDays(i32);

impl RentalDays {
    pub fn new(days: impl Into<i32>) -> Self {
        Self(days.into())
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl From<&RentalDays> for i64 {
    fn from(value: &RentalDays) -> Self {
        i64::from(value.0)
    }
}
