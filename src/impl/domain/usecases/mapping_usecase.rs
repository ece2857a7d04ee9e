use fractic_server_error::ServerError;

use crate::{
    data::generators::id_suppliers::UuidIdSupplier,
    domain::{
        logic::{
            eligibility::eligible_pay_items,
            grouping_values::distinct_values,
            mapping_derivation::{edit_journal_entry, MappingDerivation},
        },
        repositories::record_store::RecordStore,
    },
    entities::{
        AccountMapping, GroupingOption, IdSupplier, JournalEntryEdit, JournalEntryId,
        LineItemType, MappingId, MappingType, PayItem, PayItemId,
    },
    errors::{MappingNotFound, PayItemNotEligible, UnknownAccount},
};

/// Operations behind the mapping editor. Every structural change goes
/// through the mapping derivation and is committed with a single
/// `update_mapping` call on the given store.
pub trait MappingUsecase {
    fn eligible_pay_items<'s, S: RecordStore>(&self, store: &'s S) -> Vec<&'s PayItem>;

    fn grouping_values<S: RecordStore>(&self, store: &S, grouping: GroupingOption)
        -> Vec<String>;

    fn start_mapping<S: RecordStore>(
        &self,
        store: &mut S,
        pay_item_id: &PayItemId,
    ) -> Result<AccountMapping, ServerError>;

    fn set_mapping_type<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        mapping_type: MappingType,
    ) -> Result<AccountMapping, ServerError>;

    fn set_line_item_type<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        line_item_type: LineItemType,
    ) -> Result<AccountMapping, ServerError>;

    fn set_primary_grouping<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        grouping: GroupingOption,
    ) -> Result<AccountMapping, ServerError>;

    fn clear_primary_grouping<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
    ) -> Result<AccountMapping, ServerError>;

    fn set_secondary_grouping<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        grouping: GroupingOption,
    ) -> Result<AccountMapping, ServerError>;

    fn clear_secondary_grouping<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
    ) -> Result<AccountMapping, ServerError>;

    fn edit_journal_entry<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        entry_id: &JournalEntryId,
        edit: JournalEntryEdit,
    ) -> Result<AccountMapping, ServerError>;

    fn delete_mapping<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
    ) -> Option<AccountMapping>;
}

pub(crate) struct MappingUsecaseImpl<G = UuidIdSupplier>
where
    G: IdSupplier,
{
    ids: G,
}

impl<G: IdSupplier> MappingUsecaseImpl<G> {
    pub(crate) fn new(ids: G) -> Self {
        Self { ids }
    }

    fn modify<S, F>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        f: F,
    ) -> Result<AccountMapping, ServerError>
    where
        S: RecordStore,
        F: FnOnce(&MappingDerivation<'_, G>, AccountMapping) -> Result<AccountMapping, ServerError>,
    {
        let current = store
            .find_mapping(mapping_id)
            .cloned()
            .ok_or_else(|| MappingNotFound::new(mapping_id.as_str()))?;
        let updated = f(
            &MappingDerivation::new(store.list_employees(), &self.ids),
            current,
        )
        .map_err(|e| {
            tracing::warn!("Rejected change to mapping {}", mapping_id);
            e
        })?;
        store.update_mapping(updated.clone())?;
        Ok(updated)
    }
}

impl<G: IdSupplier> MappingUsecase for MappingUsecaseImpl<G> {
    fn eligible_pay_items<'s, S: RecordStore>(&self, store: &'s S) -> Vec<&'s PayItem> {
        eligible_pay_items(store.list_pay_items(), store.list_mappings())
    }

    fn grouping_values<S: RecordStore>(
        &self,
        store: &S,
        grouping: GroupingOption,
    ) -> Vec<String> {
        distinct_values(store.list_employees(), grouping)
    }

    fn start_mapping<S: RecordStore>(
        &self,
        store: &mut S,
        pay_item_id: &PayItemId,
    ) -> Result<AccountMapping, ServerError> {
        let eligible = self
            .eligible_pay_items(store)
            .iter()
            .any(|item| &item.id == pay_item_id);
        if !eligible {
            tracing::warn!("Pay item {} is not eligible for mapping", pay_item_id);
            return Err(PayItemNotEligible::new(pay_item_id.as_str()));
        }
        let mapping = MappingDerivation::new(store.list_employees(), &self.ids)
            .initial_mapping(pay_item_id.clone());
        store.add_mapping(mapping.clone())?;
        Ok(mapping)
    }

    fn set_mapping_type<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        mapping_type: MappingType,
    ) -> Result<AccountMapping, ServerError> {
        self.modify(store, mapping_id, |d, m| {
            Ok(d.with_mapping_type(m, mapping_type))
        })
    }

    fn set_line_item_type<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        line_item_type: LineItemType,
    ) -> Result<AccountMapping, ServerError> {
        self.modify(store, mapping_id, |d, m| {
            Ok(d.with_line_item_type(m, line_item_type))
        })
    }

    fn set_primary_grouping<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        grouping: GroupingOption,
    ) -> Result<AccountMapping, ServerError> {
        self.modify(store, mapping_id, |d, m| d.with_primary_grouping(m, grouping))
    }

    fn clear_primary_grouping<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
    ) -> Result<AccountMapping, ServerError> {
        self.modify(store, mapping_id, |d, m| Ok(d.without_primary_grouping(m)))
    }

    fn set_secondary_grouping<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        grouping: GroupingOption,
    ) -> Result<AccountMapping, ServerError> {
        self.modify(store, mapping_id, |d, m| {
            d.with_secondary_grouping(m, grouping)
        })
    }

    fn clear_secondary_grouping<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
    ) -> Result<AccountMapping, ServerError> {
        self.modify(store, mapping_id, |d, m| Ok(d.without_secondary_grouping(m)))
    }

    fn edit_journal_entry<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
        entry_id: &JournalEntryId,
        edit: JournalEntryEdit,
    ) -> Result<AccountMapping, ServerError> {
        if let JournalEntryEdit::Account(Some(account_id)) = &edit {
            if !store.list_accounts().iter().any(|a| &a.id == account_id) {
                return Err(UnknownAccount::new(account_id.as_str()));
            }
        }
        self.modify(store, mapping_id, |_, m| edit_journal_entry(m, entry_id, edit))
    }

    fn delete_mapping<S: RecordStore>(
        &self,
        store: &mut S,
        mapping_id: &MappingId,
    ) -> Option<AccountMapping> {
        store.delete_mapping(mapping_id)
    }
}
