use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidCsvContent;

/// Boolean CSV cell. An empty cell reads as `false`.
#[derive(Debug)]
pub(crate) struct FlagModel(pub bool);
impl FromStr for FlagModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(FlagModel(true)),
            "false" | "no" | "0" | "" => Ok(FlagModel(false)),
            _ => Err(InvalidCsvContent::new(&format!("invalid flag '{}'", s))),
        }
    }
}

impl Into<bool> for FlagModel {
    fn into(self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_parsing() {
        assert!(FlagModel::from_str("true").unwrap().0);
        assert!(FlagModel::from_str(" TRUE ").unwrap().0);
        assert!(!FlagModel::from_str("false").unwrap().0);
        assert!(!FlagModel::from_str("").unwrap().0);
        assert!(FlagModel::from_str("maybe").is_err());
    }
}
