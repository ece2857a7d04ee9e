use crate::entities::{AccountMapping, PayItem, PayItemId};

/// Pay items that require a mapping and are not yet referenced by one.
pub fn eligible_pay_items<'a>(
    pay_items: &'a [PayItem],
    mappings: &[AccountMapping],
) -> Vec<&'a PayItem> {
    pay_items
        .iter()
        .filter(|item| item.requires_mapping && !is_mapped(&item.id, mappings))
        .collect()
}

pub fn is_mapped(pay_item_id: &PayItemId, mappings: &[AccountMapping]) -> bool {
    mappings.iter().any(|m| &m.pay_item_id == pay_item_id)
}
