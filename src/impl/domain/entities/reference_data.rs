use super::{account::Account, employee::Employee, pay_item::PayItem};

/// Static collections the mapping editor works against.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub accounts: Vec<Account>,
    pub employees: Vec<Employee>,
    pub pay_items: Vec<PayItem>,
}
