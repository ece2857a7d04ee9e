use fractic_server_error::ServerError;

use crate::{
    entities::{Account, AccountId},
    errors::InvalidCsv,
};

pub(crate) trait AccountsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Account>, ServerError>;
}

pub(crate) struct AccountsCsvDatasourceImpl;

impl AccountsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl AccountsCsvDatasource for AccountsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Account>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).map(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_code = r.get(1).unwrap_or("");
                    let raw_name = r.get(2).unwrap_or("");

                    // Build.
                    Account {
                        id: AccountId::new(raw_id.trim()),
                        code: raw_code.trim().to_string(),
                        name: raw_name.trim().to_string(),
                    }
                })
            })
            .collect()
    }
}
