use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::eligibility::is_mapped,
        repositories::record_store::{MappingListener, RecordStore},
    },
    entities::{
        Account, AccountMapping, Employee, MappingChange, MappingId, PayItem, ReferenceData,
        SubscriptionId,
    },
    errors::{DuplicateMapping, MappingNotFound},
};

/// Process-local record store. Mappings keep insertion order.
pub struct InMemoryRecordStore {
    accounts: Vec<Account>,
    employees: Vec<Employee>,
    pay_items: Vec<PayItem>,
    mappings: Vec<AccountMapping>,
    listeners: Vec<(SubscriptionId, MappingListener)>,
    next_subscription: u64,
}

impl InMemoryRecordStore {
    pub fn new(reference_data: ReferenceData) -> Self {
        let ReferenceData {
            accounts,
            employees,
            pay_items,
        } = reference_data;
        Self {
            accounts,
            employees,
            pay_items,
            mappings: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    fn notify(&mut self, change: MappingChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    fn list_employees(&self) -> &[Employee] {
        &self.employees
    }

    fn list_pay_items(&self) -> &[PayItem] {
        &self.pay_items
    }

    fn list_mappings(&self) -> &[AccountMapping] {
        &self.mappings
    }

    fn add_mapping(&mut self, mapping: AccountMapping) -> Result<(), ServerError> {
        if is_mapped(&mapping.pay_item_id, &self.mappings) {
            tracing::warn!(
                "Rejected second mapping for pay item {}",
                mapping.pay_item_id
            );
            return Err(DuplicateMapping::new(mapping.pay_item_id.as_str()));
        }
        tracing::debug!(
            "Adding mapping {} for pay item {}",
            mapping.id,
            mapping.pay_item_id
        );
        self.mappings.push(mapping.clone());
        self.notify(MappingChange::Added(mapping));
        Ok(())
    }

    fn update_mapping(&mut self, mapping: AccountMapping) -> Result<(), ServerError> {
        let slot = self
            .mappings
            .iter_mut()
            .find(|m| m.id == mapping.id)
            .ok_or_else(|| MappingNotFound::new(mapping.id.as_str()))?;
        tracing::debug!(
            "Updating mapping {} ({} journal entries)",
            mapping.id,
            mapping.journal_entries.len()
        );
        *slot = mapping.clone();
        self.notify(MappingChange::Updated(mapping));
        Ok(())
    }

    fn delete_mapping(&mut self, id: &MappingId) -> Option<AccountMapping> {
        let index = self.mappings.iter().position(|m| &m.id == id)?;
        let removed = self.mappings.remove(index);
        tracing::debug!("Deleted mapping {}", id);
        self.notify(MappingChange::Deleted(id.clone()));
        Some(removed)
    }

    fn subscribe(&mut self, listener: MappingListener) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}
