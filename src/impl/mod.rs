// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod accounts_csv_datasource;
        pub(crate) mod employees_csv_datasource;
        pub(crate) mod pay_items_csv_datasource;
        pub(crate) mod seed;
    }
    pub(crate) mod generators {
        pub(crate) mod id_suppliers;
    }
    pub(crate) mod models {
        pub(crate) mod flag_model;
        pub(crate) mod pay_item_type_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod in_memory_record_store;
        pub(crate) mod reference_data_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod account_mapping;
        pub(crate) mod employee;
        pub(crate) mod grouping;
        pub(crate) mod ids;
        pub(crate) mod journal_entry;
        pub(crate) mod mapping_change;
        pub(crate) mod pay_item;
        pub(crate) mod reference_data;
    }
    pub(crate) mod logic {
        pub(crate) mod eligibility;
        pub(crate) mod grouping_values;
        pub(crate) mod mapping_derivation;
    }
    pub(crate) mod repositories {
        pub(crate) mod record_store;
        pub(crate) mod reference_data_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_reference_data_usecase;
        pub(crate) mod mapping_usecase;
    }
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account::*;
        pub use crate::domain::entities::account_mapping::*;
        pub use crate::domain::entities::employee::*;
        pub use crate::domain::entities::grouping::*;
        pub use crate::domain::entities::ids::*;
        pub use crate::domain::entities::journal_entry::*;
        pub use crate::domain::entities::mapping_change::*;
        pub use crate::domain::entities::pay_item::*;
        pub use crate::domain::entities::reference_data::*;
    }

    pub mod logic {
        pub use crate::domain::logic::eligibility::*;
        pub use crate::domain::logic::grouping_values::*;
        pub use crate::domain::logic::mapping_derivation::*;
    }

    pub mod store {
        pub use crate::data::repositories::in_memory_record_store::*;
        pub use crate::domain::repositories::record_store::*;
    }

    pub mod id_suppliers {
        pub use crate::data::generators::id_suppliers::*;
    }
}
