use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::ReferenceData;

#[async_trait]
pub trait ReferenceDataRepository: Send + Sync {
    fn from_string(
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
