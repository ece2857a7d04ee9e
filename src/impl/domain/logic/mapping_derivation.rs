use fractic_server_error::ServerError;

use crate::{
    domain::logic::grouping_values::distinct_values,
    entities::{
        AccountMapping, Employee, GroupingOption, IdSupplier, JournalEntry, JournalEntryEdit,
        JournalEntryId, LineItemType, MappingType, PayItemId,
    },
    errors::{InvalidGrouping, JournalEntryNotFound},
};

/// Recomputes the structural state of a mapping against the current
/// employee population.
///
/// Every structural change that affects the number of journal entries
/// replaces them wholesale; previous per-entry edits are not carried over.
pub struct MappingDerivation<'a, G: IdSupplier> {
    employees: &'a [Employee],
    ids: &'a G,
}

impl<'a, G: IdSupplier> MappingDerivation<'a, G> {
    pub fn new(employees: &'a [Employee], ids: &'a G) -> Self {
        Self { employees, ids }
    }

    pub fn initial_mapping(&self, pay_item_id: PayItemId) -> AccountMapping {
        AccountMapping {
            id: self.ids.next_mapping_id(),
            pay_item_id,
            mapping_type: MappingType::Single,
            line_item_type: LineItemType::Single,
            primary_grouping: None,
            secondary_grouping: None,
            journal_entries: vec![JournalEntry::blank(self.ids.next_entry_id())],
        }
    }

    pub fn with_mapping_type(
        &self,
        mapping: AccountMapping,
        mapping_type: MappingType,
    ) -> AccountMapping {
        match mapping_type {
            MappingType::Single => AccountMapping {
                mapping_type,
                primary_grouping: None,
                secondary_grouping: None,
                journal_entries: vec![JournalEntry::blank(self.ids.next_entry_id())],
                ..mapping
            },
            MappingType::Multiple if mapping.mapping_type == MappingType::Multiple => mapping,
            MappingType::Multiple => AccountMapping {
                mapping_type,
                primary_grouping: None,
                secondary_grouping: None,
                journal_entries: Vec::new(),
                ..mapping
            },
        }
    }

    pub fn with_line_item_type(
        &self,
        mapping: AccountMapping,
        line_item_type: LineItemType,
    ) -> AccountMapping {
        match line_item_type {
            LineItemType::Single => AccountMapping {
                line_item_type,
                ..self.without_secondary_grouping(mapping)
            },
            LineItemType::Multiple => AccountMapping {
                line_item_type,
                ..mapping
            },
        }
    }

    pub fn with_primary_grouping(
        &self,
        mapping: AccountMapping,
        grouping: GroupingOption,
    ) -> Result<AccountMapping, ServerError> {
        if mapping.mapping_type != MappingType::Multiple {
            return Err(InvalidGrouping::new(
                "a primary grouping requires the multiple accounts mapping type",
            ));
        }
        Ok(AccountMapping {
            primary_grouping: Some(grouping),
            secondary_grouping: None,
            journal_entries: self.primary_entries(grouping),
            ..mapping
        })
    }

    pub fn without_primary_grouping(&self, mapping: AccountMapping) -> AccountMapping {
        if mapping.primary_grouping.is_none() {
            return mapping;
        }
        AccountMapping {
            primary_grouping: None,
            secondary_grouping: None,
            journal_entries: Vec::new(),
            ..mapping
        }
    }

    pub fn with_secondary_grouping(
        &self,
        mapping: AccountMapping,
        grouping: GroupingOption,
    ) -> Result<AccountMapping, ServerError> {
        if mapping.line_item_type != LineItemType::Multiple {
            return Err(InvalidGrouping::new(
                "a secondary grouping requires the multiple line items type",
            ));
        }
        let primary = match mapping.primary_grouping {
            Some(primary) => primary,
            None => {
                return Err(InvalidGrouping::new(
                    "a secondary grouping requires a primary grouping",
                ))
            }
        };
        if primary == grouping {
            return Err(InvalidGrouping::new(
                "the secondary grouping must differ from the primary grouping",
            ));
        }
        Ok(AccountMapping {
            secondary_grouping: Some(grouping),
            journal_entries: self.cross_entries(primary, grouping),
            ..mapping
        })
    }

    /// Drops the secondary split, falling back to one entry per primary
    /// grouping value. The cross-product entries are not kept, so the entry
    /// count always matches the groupings that remain selected.
    pub fn without_secondary_grouping(&self, mapping: AccountMapping) -> AccountMapping {
        match (mapping.primary_grouping, mapping.secondary_grouping) {
            (Some(primary), Some(_)) => AccountMapping {
                secondary_grouping: None,
                journal_entries: self.primary_entries(primary),
                ..mapping
            },
            _ => AccountMapping {
                secondary_grouping: None,
                ..mapping
            },
        }
    }

    fn primary_entries(&self, grouping: GroupingOption) -> Vec<JournalEntry> {
        let entries: Vec<JournalEntry> = distinct_values(self.employees, grouping)
            .into_iter()
            .map(|value| JournalEntry::grouped(self.ids.next_entry_id(), value))
            .collect();
        tracing::debug!(
            "Derived {} journal entries grouped by {}",
            entries.len(),
            grouping
        );
        entries
    }

    fn cross_entries(
        &self,
        primary: GroupingOption,
        secondary: GroupingOption,
    ) -> Vec<JournalEntry> {
        let secondary_values = distinct_values(self.employees, secondary);
        let entries: Vec<JournalEntry> = distinct_values(self.employees, primary)
            .into_iter()
            .flat_map(|primary_value| {
                secondary_values.iter().map(move |secondary_value| {
                    (primary_value.clone(), secondary_value.clone())
                })
            })
            .map(|(primary_value, secondary_value)| {
                JournalEntry::cross_grouped(
                    self.ids.next_entry_id(),
                    primary_value,
                    secondary_value,
                )
            })
            .collect();
        tracing::debug!(
            "Derived {} journal entries grouped by {} x {}",
            entries.len(),
            primary,
            secondary
        );
        entries
    }
}

/// Applies a leaf-field edit to one journal entry. Never changes the number
/// of entries or any structural field.
pub fn edit_journal_entry(
    mut mapping: AccountMapping,
    entry_id: &JournalEntryId,
    edit: JournalEntryEdit,
) -> Result<AccountMapping, ServerError> {
    let entry = mapping
        .journal_entries
        .iter_mut()
        .find(|e| &e.id == entry_id)
        .ok_or_else(|| JournalEntryNotFound::new(mapping.id.as_str(), entry_id.as_str()))?;
    entry.apply(edit);
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::generators::id_suppliers::SequentialIdSupplier,
        entities::{AccountId, EmployeeId, EntryType},
    };

    fn employee(id: &str, location: &str, department: &str) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            name: format!("Employee {}", id),
            location: location.to_string(),
            department: department.to_string(),
        }
    }

    fn seed_employees() -> Vec<Employee> {
        vec![
            employee("1", "Dubai", "Engineering"),
            employee("2", "Abu Dhabi", "Marketing"),
            employee("3", "Dubai", "Finance"),
        ]
    }

    fn groupings(mapping: &AccountMapping) -> Vec<(Option<&str>, Option<&str>)> {
        mapping
            .journal_entries
            .iter()
            .map(|e| {
                (
                    e.grouping_value.as_deref(),
                    e.secondary_grouping_value.as_deref(),
                )
            })
            .collect()
    }

    fn multiple_by_location(
        derivation: &MappingDerivation<'_, SequentialIdSupplier>,
    ) -> AccountMapping {
        let mapping = derivation.initial_mapping(PayItemId::new("1"));
        let mapping = derivation.with_mapping_type(mapping, MappingType::Multiple);
        let mapping = derivation.with_line_item_type(mapping, LineItemType::Multiple);
        derivation
            .with_primary_grouping(mapping, GroupingOption::Location)
            .unwrap()
    }

    #[test]
    fn test_initial_mapping_has_one_blank_debit_entry() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let mapping = MappingDerivation::new(&employees, &ids).initial_mapping(PayItemId::new("1"));

        assert_eq!(mapping.mapping_type, MappingType::Single);
        assert_eq!(mapping.line_item_type, LineItemType::Single);
        assert_eq!(mapping.journal_entries.len(), 1);
        let entry = &mapping.journal_entries[0];
        assert_eq!(entry.account_id, None);
        assert_eq!(entry.description, "");
        assert_eq!(entry.entry_type, EntryType::Debit);
        assert_eq!(entry.grouping_value, None);
    }

    #[test]
    fn test_multiple_mapping_type_waits_for_grouping() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = derivation.initial_mapping(PayItemId::new("1"));

        let mapping = derivation.with_mapping_type(mapping, MappingType::Multiple);
        assert_eq!(mapping.mapping_type, MappingType::Multiple);
        assert!(mapping.journal_entries.is_empty());
    }

    #[test]
    fn test_reselecting_multiple_keeps_derived_entries() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = multiple_by_location(&derivation);

        let again = derivation.with_mapping_type(mapping.clone(), MappingType::Multiple);
        assert_eq!(again, mapping);
    }

    #[test]
    fn test_primary_grouping_derives_one_entry_per_value() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = multiple_by_location(&derivation);

        assert_eq!(mapping.primary_grouping, Some(GroupingOption::Location));
        assert_eq!(
            groupings(&mapping),
            vec![(Some("Dubai"), None), (Some("Abu Dhabi"), None)]
        );
        assert!(mapping
            .journal_entries
            .iter()
            .all(|e| e.account_id.is_none() && e.entry_type == EntryType::Debit));
    }

    #[test]
    fn test_primary_grouping_is_idempotent_apart_from_ids() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let first = multiple_by_location(&derivation);
        let second = derivation
            .with_primary_grouping(first.clone(), GroupingOption::Location)
            .unwrap();

        assert_eq!(groupings(&first), groupings(&second));
        assert_ne!(first.journal_entries[0].id, second.journal_entries[0].id);
    }

    #[test]
    fn test_primary_grouping_rejected_for_single_mapping_type() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = derivation.initial_mapping(PayItemId::new("1"));

        let err = derivation
            .with_primary_grouping(mapping, GroupingOption::Location)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            InvalidGrouping::new("a primary grouping requires the multiple accounts mapping type")
                .to_string()
        );
    }

    #[test]
    fn test_secondary_grouping_builds_nested_cross_product() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = derivation
            .with_secondary_grouping(multiple_by_location(&derivation), GroupingOption::Department)
            .unwrap();

        assert_eq!(mapping.secondary_grouping, Some(GroupingOption::Department));
        assert_eq!(
            groupings(&mapping),
            vec![
                (Some("Dubai"), Some("Engineering")),
                (Some("Dubai"), Some("Marketing")),
                (Some("Dubai"), Some("Finance")),
                (Some("Abu Dhabi"), Some("Engineering")),
                (Some("Abu Dhabi"), Some("Marketing")),
                (Some("Abu Dhabi"), Some("Finance")),
            ]
        );
    }

    #[test]
    fn test_secondary_grouping_cardinality_matches_distinct_counts() {
        let employees = vec![
            employee("1", "Dubai", "Engineering"),
            employee("2", "Abu Dhabi", "Finance"),
            employee("3", "Dubai", "Finance"),
            employee("4", "Sharjah", "Engineering"),
        ];
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = derivation
            .with_secondary_grouping(multiple_by_location(&derivation), GroupingOption::Department)
            .unwrap();

        assert_eq!(mapping.journal_entries.len(), 3 * 2);
    }

    #[test]
    fn test_secondary_grouping_equal_to_primary_is_rejected() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = multiple_by_location(&derivation);

        let err = derivation
            .with_secondary_grouping(mapping, GroupingOption::Location)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            InvalidGrouping::new("the secondary grouping must differ from the primary grouping")
                .to_string()
        );
    }

    #[test]
    fn test_secondary_grouping_without_primary_is_rejected() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = derivation.initial_mapping(PayItemId::new("1"));
        let mapping = derivation.with_mapping_type(mapping, MappingType::Multiple);
        let mapping = derivation.with_line_item_type(mapping, LineItemType::Multiple);

        let err = derivation
            .with_secondary_grouping(mapping, GroupingOption::Department)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            InvalidGrouping::new("a secondary grouping requires a primary grouping").to_string()
        );
    }

    #[test]
    fn test_secondary_grouping_requires_multiple_line_items() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = derivation.with_line_item_type(
            multiple_by_location(&derivation),
            LineItemType::Single,
        );

        let err = derivation
            .with_secondary_grouping(mapping, GroupingOption::Department)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            InvalidGrouping::new("a secondary grouping requires the multiple line items type")
                .to_string()
        );
    }

    #[test]
    fn test_single_line_items_drop_secondary_split() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = derivation
            .with_secondary_grouping(multiple_by_location(&derivation), GroupingOption::Department)
            .unwrap();

        let mapping = derivation.with_line_item_type(mapping, LineItemType::Single);
        assert_eq!(mapping.secondary_grouping, None);
        assert_eq!(mapping.primary_grouping, Some(GroupingOption::Location));
        assert_eq!(
            groupings(&mapping),
            vec![(Some("Dubai"), None), (Some("Abu Dhabi"), None)]
        );
    }

    #[test]
    fn test_clearing_primary_grouping_clears_secondary() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = derivation
            .with_secondary_grouping(multiple_by_location(&derivation), GroupingOption::Department)
            .unwrap();

        let mapping = derivation.without_primary_grouping(mapping);
        assert_eq!(mapping.primary_grouping, None);
        assert_eq!(mapping.secondary_grouping, None);
        assert!(mapping.journal_entries.is_empty());
    }

    #[test]
    fn test_changing_primary_grouping_resets_secondary() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = derivation
            .with_secondary_grouping(multiple_by_location(&derivation), GroupingOption::Department)
            .unwrap();

        let mapping = derivation
            .with_primary_grouping(mapping, GroupingOption::Department)
            .unwrap();
        assert_eq!(mapping.secondary_grouping, None);
        assert_eq!(mapping.journal_entries.len(), 3);
    }

    #[test]
    fn test_single_mapping_type_resets_everything() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = derivation
            .with_secondary_grouping(multiple_by_location(&derivation), GroupingOption::Department)
            .unwrap();
        let entry_id = mapping.journal_entries[0].id.clone();
        let mapping = edit_journal_entry(
            mapping,
            &entry_id,
            JournalEntryEdit::Description("Dubai engineering".to_string()),
        )
        .unwrap();

        let mapping = derivation.with_mapping_type(mapping, MappingType::Single);
        assert_eq!(mapping.primary_grouping, None);
        assert_eq!(mapping.secondary_grouping, None);
        assert_eq!(mapping.journal_entries.len(), 1);
        assert_eq!(mapping.journal_entries[0].description, "");
        assert_eq!(mapping.journal_entries[0].entry_type, EntryType::Debit);
    }

    #[test]
    fn test_grouping_over_empty_population_yields_no_entries() {
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&[], &ids);
        let mapping = multiple_by_location(&derivation);

        assert!(mapping.journal_entries.is_empty());
    }

    #[test]
    fn test_entry_edit_touches_only_the_target_entry() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let derivation = MappingDerivation::new(&employees, &ids);
        let mapping = multiple_by_location(&derivation);
        let target = mapping.journal_entries[1].id.clone();

        let edited = edit_journal_entry(
            mapping.clone(),
            &target,
            JournalEntryEdit::Account(Some(AccountId::new("2"))),
        )
        .unwrap();
        let edited =
            edit_journal_entry(edited, &target, JournalEntryEdit::EntryType(EntryType::Credit))
                .unwrap();

        assert_eq!(edited.journal_entries.len(), mapping.journal_entries.len());
        assert_eq!(edited.journal_entries[0], mapping.journal_entries[0]);
        assert_eq!(edited.journal_entries[1].account_id, Some(AccountId::new("2")));
        assert_eq!(edited.journal_entries[1].entry_type, EntryType::Credit);
        assert_eq!(
            edited.journal_entries[1].grouping_value.as_deref(),
            Some("Abu Dhabi")
        );
    }

    #[test]
    fn test_entry_edit_with_unknown_entry_is_rejected() {
        let employees = seed_employees();
        let ids = SequentialIdSupplier::new("id");
        let mapping = MappingDerivation::new(&employees, &ids).initial_mapping(PayItemId::new("1"));

        let mapping_id = mapping.id.clone();

        let err = edit_journal_entry(
            mapping,
            &JournalEntryId::new("missing"),
            JournalEntryEdit::Description("x".to_string()),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            JournalEntryNotFound::new(mapping_id.as_str(), "missing").to_string()
        );
    }
}
