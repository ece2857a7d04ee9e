use super::ids::PayItemId;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PayItemType {
    Earning,
    Deduction,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PayItem {
    pub id: PayItemId,
    pub name: String,
    pub item_type: PayItemType,
    /// Only pay items flagged here can be offered for a new mapping.
    pub requires_mapping: bool,
}
