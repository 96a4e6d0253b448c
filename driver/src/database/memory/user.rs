use kernel::interface::query::UserQuery;
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryUserRepository;

#[async_trait::async_trait]
impl UserQuery<MemoryTransaction> for MemoryUserRepository {
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con.working.users.get(id).cloned())
    }
}
