use super::employee::Employee;

/// Employee attribute used to split a pay item across several journal
/// entries.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum GroupingOption {
    Location,
    Department,
}

impl GroupingOption {
    pub fn all() -> [GroupingOption; 2] {
        [GroupingOption::Location, GroupingOption::Department]
    }

    pub fn value_of<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            GroupingOption::Location => &employee.location,
            GroupingOption::Department => &employee.department,
        }
    }
}

impl std::fmt::Display for GroupingOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupingOption::Location => write!(f, "location"),
            GroupingOption::Department => write!(f, "department"),
        }
    }
}
