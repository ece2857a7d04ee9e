use std::collections::HashSet;

use crate::entities::{Employee, GroupingOption};

/// Distinct values of `grouping` across `employees`, in first-seen order.
pub fn distinct_values(employees: &[Employee], grouping: GroupingOption) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    employees
        .iter()
        .map(|e| grouping.value_of(e))
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
