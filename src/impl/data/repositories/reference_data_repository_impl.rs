use std::collections::HashSet;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        accounts_csv_datasource::{AccountsCsvDatasource, AccountsCsvDatasourceImpl},
        employees_csv_datasource::{EmployeesCsvDatasource, EmployeesCsvDatasourceImpl},
        pay_items_csv_datasource::{PayItemsCsvDatasource, PayItemsCsvDatasourceImpl},
    },
    domain::repositories::reference_data_repository::ReferenceDataRepository,
    entities::ReferenceData,
    errors::{InvalidCsvContent, ReadError},
};

pub(crate) struct ReferenceDataRepositoryImpl<
    DS1 = AccountsCsvDatasourceImpl, // Default.
    DS2 = EmployeesCsvDatasourceImpl,
    DS3 = PayItemsCsvDatasourceImpl,
> where
    DS1: AccountsCsvDatasource,
    DS2: EmployeesCsvDatasource,
    DS3: PayItemsCsvDatasource,
{
    accounts_datasource: DS1,
    employees_datasource: DS2,
    pay_items_datasource: DS3,
}

#[async_trait]
impl<DS1, DS2, DS3> ReferenceDataRepository for ReferenceDataRepositoryImpl<DS1, DS2, DS3>
where
    DS1: AccountsCsvDatasource,
    DS2: EmployeesCsvDatasource,
    DS3: PayItemsCsvDatasource,
{
    fn from_string(
        &self,
        accounts_csv: &str,
        employees_csv: &str,
        pay_items_csv: &str,
    ) -> Result<ReferenceData, ServerError> {
        let reference_data = ReferenceData {
            accounts: self.accounts_datasource.from_string(accounts_csv)?,
            employees: self.employees_datasource.from_string(employees_csv)?,
            pay_items: self.pay_items_datasource.from_string(pay_items_csv)?,
        };
        ensure_unique("account", reference_data.accounts.iter().map(|a| a.id.as_str()))?;
        ensure_unique("employee", reference_data.employees.iter().map(|e| e.id.as_str()))?;
        ensure_unique("pay item", reference_data.pay_items.iter().map(|p| p.id.as_str()))?;
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
        let (accounts, employees, pay_items) = futures::try_join!(
            read(accounts_csv.as_ref()),
            read(employees_csv.as_ref()),
            read(pay_items_csv.as_ref()),
        )?;
        self.from_string(&accounts, &employees, &pay_items)
    }
}

impl ReferenceDataRepositoryImpl {
    pub(crate) fn new() -> Self {
        ReferenceDataRepositoryImpl {
            accounts_datasource: AccountsCsvDatasourceImpl::new(),
            employees_datasource: EmployeesCsvDatasourceImpl::new(),
            pay_items_datasource: PayItemsCsvDatasourceImpl::new(),
        }
    }
}

async fn read(path: &std::path::Path) -> Result<String, ServerError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReadError::with_debug(&e))
}

fn ensure_unique<'a>(
    record_type: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ServerError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(InvalidCsvContent::new(&format!(
                "duplicate {} id '{}'",
                record_type, id
            )));
        }
    }
    Ok(())
}
