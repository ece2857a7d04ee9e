// Default reference data, bundled with the crate.

pub(crate) const ACCOUNTS_CSV: &str = include_str!("seed/accounts.csv");
pub(crate) const EMPLOYEES_CSV: &str = include_str!("seed/employees.csv");
pub(crate) const PAY_ITEMS_CSV: &str = include_str!("seed/pay_items.csv");
