use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::reference_data_repository_impl::ReferenceDataRepositoryImpl,
    domain::repositories::reference_data_repository::ReferenceDataRepository,
    entities::ReferenceData,
};

#[async_trait]
pub trait LoadReferenceDataUsecase: Send + Sync {
    async fn from_string(
        &self,
        accounts_csv: &str,
        employees_csv: &str,
        pay_items_csv: &str,
    ) -> Result<ReferenceData, ServerError>;

    async fn from_file<P>(
        &self,
        accounts_csv: P,
        employees_csv: P,
        pay_items_csv: P,
    ) -> Result<ReferenceData, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LoadReferenceDataUsecaseImpl<R1 = ReferenceDataRepositoryImpl>
where
    R1: ReferenceDataRepository,
{
    reference_data_repository: R1,
}

#[async_trait]
impl<R1> LoadReferenceDataUsecase for LoadReferenceDataUsecaseImpl<R1>
where
    R1: ReferenceDataRepository,
{
    async fn from_string(
        &self,
        accounts_csv: &str,
        employees_csv: &str,
        pay_items_csv: &str,
    ) -> Result<ReferenceData, ServerError> {
        let reference_data = self.reference_data_repository.from_string(
            accounts_csv,
            employees_csv,
            pay_items_csv,
        )?;
        log_loaded(&reference_data);
        Ok(reference_data)
    }

    async fn from_file<P>(
        &self,
        accounts_csv: P,
        employees_csv: P,
        pay_items_csv: P,
    ) -> Result<ReferenceData, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let reference_data = self
            .reference_data_repository
            .from_file(accounts_csv, employees_csv, pay_items_csv)
            .await?;
        log_loaded(&reference_data);
        Ok(reference_data)
    }
}

impl LoadReferenceDataUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadReferenceDataUsecaseImpl {
            reference_data_repository: ReferenceDataRepositoryImpl::new(),
        }
    }
}

pub(crate) fn log_loaded(reference_data: &ReferenceData) {
    tracing::info!(
        "Loaded reference data: {} accounts, {} employees, {} pay items",
        reference_data.accounts.len(),
        reference_data.employees.len(),
        reference_data.pay_items.len()
    );
}
