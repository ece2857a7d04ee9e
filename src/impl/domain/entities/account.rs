use super::ids::AccountId;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Account {
    pub id: AccountId,
    pub code: String,
    pub name: String,
}
