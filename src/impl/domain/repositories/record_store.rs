use fractic_server_error::ServerError;

use crate::entities::{
    Account, AccountMapping, Employee, MappingChange, MappingId, PayItem, SubscriptionId,
};

pub type MappingListener = Box<dyn FnMut(&MappingChange)>;

/// Owner of the reference collections and the account mappings.
///
/// Listeners registered through `subscribe` are called after every committed
/// mapping mutation, in registration order.
pub trait RecordStore {
    fn list_accounts(&self) -> &[Account];
    fn list_employees(&self) -> &[Employee];
    fn list_pay_items(&self) -> &[PayItem];
    fn list_mappings(&self) -> &[AccountMapping];

    /// Appends `mapping`. Fails if its pay item is already mapped.
    fn add_mapping(&mut self, mapping: AccountMapping) -> Result<(), ServerError>;

    /// Replaces the mapping with the same id. Fails if there is none.
    fn update_mapping(&mut self, mapping: AccountMapping) -> Result<(), ServerError>;

    /// Removes the mapping with `id`, if any.
    fn delete_mapping(&mut self, id: &MappingId) -> Option<AccountMapping>;

    fn subscribe(&mut self, listener: MappingListener) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    fn find_mapping(&self, id: &MappingId) -> Option<&AccountMapping> {
        self.list_mappings().iter().find(|m| &m.id == id)
    }
}
