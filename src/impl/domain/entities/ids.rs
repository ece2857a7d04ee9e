macro_rules! define_id {
    ($typ:ident) => {
        #[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
        pub struct $typ(pub(crate) String);

        impl $typ {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $typ {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $typ {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

define_id!(AccountId);
define_id!(EmployeeId);
define_id!(PayItemId);
define_id!(MappingId);
define_id!(JournalEntryId);

/// Source of identifiers for newly created records.
///
/// Every call must return a value not previously issued during the lifetime
/// of the supplier. No ordering is implied.
pub trait IdSupplier {
    fn next_id(&self) -> String;

    fn next_mapping_id(&self) -> MappingId {
        MappingId(self.next_id())
    }

    fn next_entry_id(&self) -> JournalEntryId {
        JournalEntryId(self.next_id())
    }
}
