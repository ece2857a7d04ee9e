use super::ids::EmployeeId;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub location: String,
    pub department: String,
}
