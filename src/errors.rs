use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });

// Mapping-related.
define_client_error!(
    DuplicateMapping,
    "Pay item '{pay_item_id}' already has an account mapping.",
    { pay_item_id: &str }
);
define_client_error!(
    MappingNotFound,
    "No account mapping with id '{mapping_id}'.",
    { mapping_id: &str }
);
define_client_error!(
    PayItemNotEligible,
    "Pay item '{pay_item_id}' is not eligible for mapping (unknown, does not require mapping, or already mapped).",
    { pay_item_id: &str }
);
define_client_error!(
    InvalidGrouping,
    "Invalid employee grouping: {details}.",
    { details: &str }
);
define_client_error!(
    JournalEntryNotFound,
    "Mapping '{mapping_id}' has no journal entry with id '{entry_id}'.",
    { mapping_id: &str, entry_id: &str }
);
define_client_error!(
    UnknownAccount,
    "Account '{account_id}' does not exist.",
    { account_id: &str }
);
