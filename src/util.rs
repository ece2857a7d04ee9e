use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::seed,
        generators::id_suppliers::UuidIdSupplier,
        repositories::{
            in_memory_record_store::InMemoryRecordStore,
            reference_data_repository_impl::ReferenceDataRepositoryImpl,
        },
    },
    domain::{
        repositories::{
            record_store::{MappingListener, RecordStore},
            reference_data_repository::ReferenceDataRepository as _,
        },
        usecases::{
            load_reference_data_usecase::{
                log_loaded, LoadReferenceDataUsecase as _, LoadReferenceDataUsecaseImpl,
            },
            mapping_usecase::{MappingUsecase as _, MappingUsecaseImpl},
        },
    },
    entities::{
        AccountMapping, GroupingOption, IdSupplier, JournalEntryEdit, JournalEntryId,
        LineItemType, MappingId, MappingType, PayItem, PayItemId, SubscriptionId,
    },
};

/// Application state of the payroll mapping editor: an explicitly owned
/// record store plus the operations that act on it.
pub struct PayrollMappingUtil<S = InMemoryRecordStore, G = UuidIdSupplier>
where
    S: RecordStore,
    G: IdSupplier,
{
    store: S,
    mapping_usecase: MappingUsecaseImpl<G>,
}

impl PayrollMappingUtil<InMemoryRecordStore, UuidIdSupplier> {
    /// Editor over the bundled reference data.
    pub fn with_default_seed() -> Result<Self, ServerError> {
        let reference_data = ReferenceDataRepositoryImpl::new().from_string(
            seed::ACCOUNTS_CSV,
            seed::EMPLOYEES_CSV,
            seed::PAY_ITEMS_CSV,
        )?;
        log_loaded(&reference_data);
        Ok(Self::with_store(
            InMemoryRecordStore::new(reference_data),
            UuidIdSupplier,
        ))
    }

    pub async fn from_string(
        accounts_csv: &str,
        employees_csv: &str,
        pay_items_csv: &str,
    ) -> Result<Self, ServerError> {
        let reference_data = LoadReferenceDataUsecaseImpl::new()
            .from_string(accounts_csv, employees_csv, pay_items_csv)
            .await?;
        Ok(Self::with_store(
            InMemoryRecordStore::new(reference_data),
            UuidIdSupplier,
        ))
    }

    pub async fn from_file<P>(
        accounts_csv: P,
        employees_csv: P,
        pay_items_csv: P,
    ) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let reference_data = LoadReferenceDataUsecaseImpl::new()
            .from_file(accounts_csv, employees_csv, pay_items_csv)
            .await?;
        Ok(Self::with_store(
            InMemoryRecordStore::new(reference_data),
            UuidIdSupplier,
        ))
    }
}

impl<S, G> PayrollMappingUtil<S, G>
where
    S: RecordStore,
    G: IdSupplier,
{
    pub fn with_store(store: S, ids: G) -> Self {
        Self {
            store,
            mapping_usecase: MappingUsecaseImpl::new(ids),
        }
    }

    /// Same store, different identifier source.
    pub fn with_id_supplier<G2: IdSupplier>(self, ids: G2) -> PayrollMappingUtil<S, G2> {
        PayrollMappingUtil::with_store(self.store, ids)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn mappings(&self) -> &[AccountMapping] {
        self.store.list_mappings()
    }

    pub fn mapping(&self, mapping_id: &MappingId) -> Option<&AccountMapping> {
        self.store.find_mapping(mapping_id)
    }

    pub fn mapping_for_pay_item(&self, pay_item_id: &PayItemId) -> Option<&AccountMapping> {
        self.store
            .list_mappings()
            .iter()
            .find(|m| m.pay_item_id() == pay_item_id)
    }

    pub fn subscribe(&mut self, listener: MappingListener) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn eligible_pay_items(&self) -> Vec<&PayItem> {
        self.mapping_usecase.eligible_pay_items(&self.store)
    }

    pub fn grouping_values(&self, grouping: GroupingOption) -> Vec<String> {
        self.mapping_usecase.grouping_values(&self.store, grouping)
    }

    pub fn start_mapping(
        &mut self,
        pay_item_id: &PayItemId,
    ) -> Result<AccountMapping, ServerError> {
        self.mapping_usecase.start_mapping(&mut self.store, pay_item_id)
    }

    pub fn set_mapping_type(
        &mut self,
        mapping_id: &MappingId,
        mapping_type: MappingType,
    ) -> Result<AccountMapping, ServerError> {
        self.mapping_usecase
            .set_mapping_type(&mut self.store, mapping_id, mapping_type)
    }

    pub fn set_line_item_type(
        &mut self,
        mapping_id: &MappingId,
        line_item_type: LineItemType,
    ) -> Result<AccountMapping, ServerError> {
        self.mapping_usecase
            .set_line_item_type(&mut self.store, mapping_id, line_item_type)
    }

    pub fn set_primary_grouping(
        &mut self,
        mapping_id: &MappingId,
        grouping: GroupingOption,
    ) -> Result<AccountMapping, ServerError> {
        self.mapping_usecase
            .set_primary_grouping(&mut self.store, mapping_id, grouping)
    }

    pub fn clear_primary_grouping(
        &mut self,
        mapping_id: &MappingId,
    ) -> Result<AccountMapping, ServerError> {
        self.mapping_usecase
            .clear_primary_grouping(&mut self.store, mapping_id)
    }

    pub fn set_secondary_grouping(
        &mut self,
        mapping_id: &MappingId,
        grouping: GroupingOption,
    ) -> Result<AccountMapping, ServerError> {
        self.mapping_usecase
            .set_secondary_grouping(&mut self.store, mapping_id, grouping)
    }

    pub fn clear_secondary_grouping(
        &mut self,
        mapping_id: &MappingId,
    ) -> Result<AccountMapping, ServerError> {
        self.mapping_usecase
            .clear_secondary_grouping(&mut self.store, mapping_id)
    }

    pub fn edit_journal_entry(
        &mut self,
        mapping_id: &MappingId,
        entry_id: &JournalEntryId,
        edit: JournalEntryEdit,
    ) -> Result<AccountMapping, ServerError> {
        self.mapping_usecase
            .edit_journal_entry(&mut self.store, mapping_id, entry_id, edit)
    }

    pub fn delete_mapping(&mut self, mapping_id: &MappingId) -> Option<AccountMapping> {
        self.mapping_usecase
            .delete_mapping(&mut self.store, mapping_id)
    }
}
