use std::str::FromStr as _;

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::{flag_model::FlagModel, pay_item_type_model::PayItemTypeModel},
    entities::{PayItem, PayItemId},
    errors::{InvalidCsv, InvalidRon},
};

pub(crate) trait PayItemsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<PayItem>, ServerError>;
}

pub(crate) struct PayItemsCsvDatasourceImpl;

impl PayItemsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PayItemsCsvDatasource for PayItemsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<PayItem>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_name = r.get(1).unwrap_or("");
                    let raw_type = r.get(2).unwrap_or("");
                    let raw_requires_mapping = r.get(3).unwrap_or("");

                    // Parse.
                    let item_type: PayItemTypeModel = from_str(raw_type.trim())
                        .map_err(|e| InvalidRon::with_debug("PayItemType", &e))?;
                    let requires_mapping: FlagModel = FlagModel::from_str(raw_requires_mapping)?;

                    // Build.
                    Ok(PayItem {
                        id: PayItemId::new(raw_id.trim()),
                        name: raw_name.trim().to_string(),
                        item_type: item_type.into(),
                        requires_mapping: requires_mapping.into(),
                    })
                })
            })
            .collect()
    }
}
