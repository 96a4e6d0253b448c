use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Catalog number of a book in the external master data, not an id this
/// system hands out.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookExternalId(i64);

impl BookExternalId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
