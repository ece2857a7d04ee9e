use super::{account_mapping::AccountMapping, ids::MappingId};

/// Notification sent to store subscribers after a committed mutation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum MappingChange {
    Added(AccountMapping),
    Updated(AccountMapping),
    Deleted(MappingId),
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct SubscriptionId(pub(crate) u64);
