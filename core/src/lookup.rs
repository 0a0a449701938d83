//! Trigger resolution: free-text input to table entries.
//!
//! A user authors a trigger by typing either an ability/status name or a
//! numeric id. Resolution is exact: an id match wins outright, otherwise
//! the name must match case-insensitively in full. No fuzzy matching;
//! an ambiguous name returns every match and the caller decides.
//!
//! Actions resolve through three tables in order (primary, alias,
//! general), stopping at the first that produces anything. Statuses have
//! a single table.

use crate::sheets::{ActionAliasRow, ActionRow, GameTables, GeneralActionRow, StatusRow};

/// One resolved table entry backing a trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerData {
    pub name: String,
    pub id: u32,
    pub icon: u16,
    pub max_stacks: u8,
}

impl TriggerData {
    fn from_status(row: &StatusRow) -> Self {
        Self {
            name: row.name.clone(),
            id: row.row_id,
            icon: row.icon,
            max_stacks: row.max_stacks,
        }
    }

    fn from_action(row: &ActionRow) -> Self {
        Self {
            name: row.name.clone(),
            id: row.row_id,
            icon: row.icon,
            max_stacks: row.max_charges,
        }
    }
}

fn parse_id(input: &str) -> Option<u32> {
    input.parse().ok().filter(|id| *id > 0)
}

/// Resolve a status trigger input against the status table
pub fn find_status_entries(tables: &GameTables, input: &str) -> Vec<TriggerData> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }

    if let Some(id) = parse_id(input)
        && let Some(row) = tables.status(id)
    {
        return vec![TriggerData::from_status(row)];
    }

    let needle = input.to_lowercase();
    tables
        .statuses()
        .iter()
        .filter(|row| row.name.to_lowercase() == needle)
        .map(TriggerData::from_status)
        .collect()
}

/// Resolve an action trigger input through the three action tables
pub fn find_action_entries(tables: &GameTables, input: &str) -> Vec<TriggerData> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }

    let mut matches = entries_from_actions(tables, input);
    if matches.is_empty() {
        matches = entries_from_aliases(tables, input);
    }
    if matches.is_empty() {
        matches = entries_from_general(tables, input);
    }
    matches
}

/// Only actions a player can actually press are eligible from the
/// primary table; everything else in it is NPC/system data.
fn eligible(row: &ActionRow) -> bool {
    row.is_player_action || row.is_role_action
}

fn entries_from_actions(tables: &GameTables, input: &str) -> Vec<TriggerData> {
    if let Some(id) = parse_id(input)
        && let Some(row) = tables.action(id)
        && eligible(row)
    {
        return vec![TriggerData::from_action(row)];
    }

    let needle = input.to_lowercase();
    tables
        .actions()
        .iter()
        .filter(|row| eligible(row) && row.name.to_lowercase() == needle)
        .map(TriggerData::from_action)
        .collect()
}

fn entries_from_aliases(tables: &GameTables, input: &str) -> Vec<TriggerData> {
    let resolve = |alias: &ActionAliasRow| tables.action(alias.action_id);

    if let Some(id) = parse_id(input)
        && let Some(row) = tables.aliases().iter().filter_map(resolve).find(|row| row.row_id == id)
    {
        return vec![TriggerData::from_action(row)];
    }

    let needle = input.to_lowercase();
    tables
        .aliases()
        .iter()
        .filter_map(resolve)
        .filter(|row| row.name.to_lowercase() == needle)
        .map(TriggerData::from_action)
        .collect()
}

fn entries_from_general(tables: &GameTables, input: &str) -> Vec<TriggerData> {
    // General entries carry their own name and icon but delegate id and
    // charges to the underlying action; entries whose action is missing
    // from the primary table are skipped.
    fn resolve<'t>(
        tables: &'t GameTables,
        general: &'t GeneralActionRow,
    ) -> Option<(&'t GeneralActionRow, &'t ActionRow)> {
        tables.action(general.action_id).map(|action| (general, action))
    }
    let record = |general: &GeneralActionRow, action: &ActionRow| TriggerData {
        name: general.name.clone(),
        id: action.row_id,
        icon: general.icon,
        max_stacks: action.max_charges,
    };

    if let Some(id) = parse_id(input)
        && let Some((general, action)) = tables
            .general_actions()
            .iter()
            .filter_map(|g| resolve(tables, g))
            .find(|(_, action)| action.row_id == id)
    {
        return vec![record(general, action)];
    }

    let needle = input.to_lowercase();
    tables
        .general_actions()
        .iter()
        .filter_map(|g| resolve(tables, g))
        .filter(|(general, _)| general.name.to_lowercase() == needle)
        .map(|(general, action)| record(general, action))
        .collect()
}
