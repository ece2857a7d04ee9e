use crate::entities::PayItemType;

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) enum PayItemTypeModel {
    Earning,
    Deduction,
}

impl Into<PayItemType> for PayItemTypeModel {
    fn into(self) -> PayItemType {
        match self {
            PayItemTypeModel::Earning => PayItemType::Earning,
            PayItemTypeModel::Deduction => PayItemType::Deduction,
        }
    }
}
