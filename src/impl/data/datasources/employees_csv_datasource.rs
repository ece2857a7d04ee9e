use fractic_server_error::ServerError;

use crate::{
    entities::{Employee, EmployeeId},
    errors::{InvalidCsv, InvalidCsvContent},
};

pub(crate) trait EmployeesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Employee>, ServerError>;
}

pub(crate) struct EmployeesCsvDatasourceImpl;

impl EmployeesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl EmployeesCsvDatasource for EmployeesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Employee>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("").trim();
                    let raw_name = r.get(1).unwrap_or("").trim();
                    let raw_location = r.get(2).unwrap_or("").trim();
                    let raw_department = r.get(3).unwrap_or("").trim();

                    // Validate. Both attributes feed the grouping values.
                    if raw_location.is_empty() {
                        return Err(InvalidCsvContent::new(&format!(
                            "employee '{}' has no location",
                            raw_id
                        )));
                    }
                    if raw_department.is_empty() {
                        return Err(InvalidCsvContent::new(&format!(
                            "employee '{}' has no department",
                            raw_id
                        )));
                    }

                    // Build.
                    Ok(Employee {
                        id: EmployeeId::new(raw_id),
                        name: raw_name.to_string(),
                        location: raw_location.to_string(),
                        department: raw_department.to_string(),
                    })
                })
            })
            .collect()
    }
}
