use super::{
    grouping::GroupingOption,
    ids::{MappingId, PayItemId},
    journal_entry::JournalEntry,
};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum MappingType {
    Single,
    Multiple,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum LineItemType {
    Single,
    Multiple,
}

/// Links a pay item to the journal entries it posts to.
///
/// The structural fields and the set of journal entries are only changed
/// through the mapping derivation, which keeps the following invariants:
///
///  - `primary_grouping` is set only for `MappingType::Multiple`,
///  - `secondary_grouping` is set only for `LineItemType::Multiple` with a
///    primary grouping, and always differs from it,
///  - the number of journal entries is determined by the groupings and the
///    employee population at derivation time.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AccountMapping {
    pub(crate) id: MappingId,
    pub(crate) pay_item_id: PayItemId,
    pub(crate) mapping_type: MappingType,
    pub(crate) line_item_type: LineItemType,
    pub(crate) primary_grouping: Option<GroupingOption>,
    pub(crate) secondary_grouping: Option<GroupingOption>,
    pub(crate) journal_entries: Vec<JournalEntry>,
}

// --

impl AccountMapping {
    pub fn id(&self) -> &MappingId {
        &self.id
    }

    pub fn pay_item_id(&self) -> &PayItemId {
        &self.pay_item_id
    }

    pub fn mapping_type(&self) -> MappingType {
        self.mapping_type
    }

    pub fn line_item_type(&self) -> LineItemType {
        self.line_item_type
    }

    pub fn primary_grouping(&self) -> Option<GroupingOption> {
        self.primary_grouping
    }

    pub fn secondary_grouping(&self) -> Option<GroupingOption> {
        self.secondary_grouping
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.journal_entries
    }
}
