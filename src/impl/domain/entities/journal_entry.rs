use super::ids::{AccountId, JournalEntryId};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum EntryType {
    #[default]
    Debit,
    Credit,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct JournalEntry {
    pub id: JournalEntryId,
    /// Unset until the administrator picks an account.
    pub account_id: Option<AccountId>,
    pub description: String,
    pub entry_type: EntryType,
    /// Snapshot of the primary grouping attribute value this entry covers.
    pub grouping_value: Option<String>,
    /// Snapshot of the secondary grouping attribute value this entry covers.
    pub secondary_grouping_value: Option<String>,
}

/// A direct edit to one of the user-editable fields of a journal entry.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum JournalEntryEdit {
    Account(Option<AccountId>),
    Description(String),
    EntryType(EntryType),
}

// --

impl JournalEntry {
    pub(crate) fn blank(id: JournalEntryId) -> Self {
        Self {
            id,
            account_id: None,
            description: String::new(),
            entry_type: EntryType::Debit,
            grouping_value: None,
            secondary_grouping_value: None,
        }
    }

    pub(crate) fn grouped(id: JournalEntryId, grouping_value: String) -> Self {
        Self {
            grouping_value: Some(grouping_value),
            ..Self::blank(id)
        }
    }

    pub(crate) fn cross_grouped(
        id: JournalEntryId,
        grouping_value: String,
        secondary_grouping_value: String,
    ) -> Self {
        Self {
            grouping_value: Some(grouping_value),
            secondary_grouping_value: Some(secondary_grouping_value),
            ..Self::blank(id)
        }
    }

    pub(crate) fn apply(&mut self, edit: JournalEntryEdit) {
        match edit {
            JournalEntryEdit::Account(account_id) => self.account_id = account_id,
            JournalEntryEdit::Description(description) => self.description = description,
            JournalEntryEdit::EntryType(entry_type) => self.entry_type = entry_type,
        }
    }
}
