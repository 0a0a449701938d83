//! Bundled static data tables.
//!
//! The game ships its reference data (statuses, actions, aliases) in
//! proprietary archives; an extraction step exports the handful of
//! columns this crate needs to JSON files that are distributed alongside
//! the addon. [`GameTables`] owns the loaded rows and keeps id indexes in
//! front of them so per-keystroke lookups stay cheap.
//!
//! Tables are immutable after load. Embedders that extract rows
//! themselves (or tests) can construct [`GameTables::new`] directly.

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// One row of the status-effect table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRow {
    pub row_id: u32,
    pub name: String,
    #[serde(default)]
    pub icon: u16,
    #[serde(default)]
    pub max_stacks: u8,
}

/// One row of the primary action table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRow {
    pub row_id: u32,
    pub name: String,
    #[serde(default)]
    pub icon: u16,
    #[serde(default)]
    pub max_charges: u8,
    /// Directly usable by players
    #[serde(default)]
    pub is_player_action: bool,
    /// Shared role action
    #[serde(default)]
    pub is_role_action: bool,
}

/// One row of the alias (indirection) table; points at a primary action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionAliasRow {
    pub action_id: u32,
}

/// One row of the general-action table (sprint, mount, etc.)
///
/// Carries its own display name and icon but delegates id and charge
/// bookkeeping to the underlying primary action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralActionRow {
    pub name: String,
    #[serde(default)]
    pub icon: u16,
    pub action_id: u32,
}

const STATUS_FILE: &str = "status.json";
const ACTION_FILE: &str = "action.json";
const ALIAS_FILE: &str = "action_alias.json";
const GENERAL_FILE: &str = "general_action.json";

/// The four bundled tables plus id indexes
#[derive(Debug, Default)]
pub struct GameTables {
    statuses: Vec<StatusRow>,
    actions: Vec<ActionRow>,
    aliases: Vec<ActionAliasRow>,
    general: Vec<GeneralActionRow>,

    status_index: HashMap<u32, usize>,
    action_index: HashMap<u32, usize>,
}

impl GameTables {
    /// Build tables from already-extracted rows
    pub fn new(
        statuses: Vec<StatusRow>,
        actions: Vec<ActionRow>,
        aliases: Vec<ActionAliasRow>,
        general: Vec<GeneralActionRow>,
    ) -> Self {
        let status_index = statuses
            .iter()
            .enumerate()
            .map(|(index, row)| (row.row_id, index))
            .collect();
        let action_index = actions
            .iter()
            .enumerate()
            .map(|(index, row)| (row.row_id, index))
            .collect();
        Self {
            statuses,
            actions,
            aliases,
            general,
            status_index,
            action_index,
        }
    }

    /// Load the four table files from a data directory
    pub fn load(dir: &Path) -> Result<Self> {
        let tables = Self::new(
            load_table(dir, STATUS_FILE)?,
            load_table(dir, ACTION_FILE)?,
            load_table(dir, ALIAS_FILE)?,
            load_table(dir, GENERAL_FILE)?,
        );
        debug!(
            statuses = tables.statuses.len(),
            actions = tables.actions.len(),
            aliases = tables.aliases.len(),
            general = tables.general.len(),
            "loaded data tables"
        );
        Ok(tables)
    }

    /// Default data directory for the bundled table files
    pub fn default_data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("sigil").join("tables"))
    }

    /// Status row by id
    pub fn status(&self, row_id: u32) -> Option<&StatusRow> {
        self.status_index.get(&row_id).map(|&index| &self.statuses[index])
    }

    /// Action row by id
    pub fn action(&self, row_id: u32) -> Option<&ActionRow> {
        self.action_index.get(&row_id).map(|&index| &self.actions[index])
    }

    pub fn statuses(&self) -> &[StatusRow] {
        &self.statuses
    }

    pub fn actions(&self) -> &[ActionRow] {
        &self.actions
    }

    pub fn aliases(&self) -> &[ActionAliasRow] {
        &self.aliases
    }

    pub fn general_actions(&self) -> &[GeneralActionRow] {
        &self.general
    }
}

fn load_table<T: DeserializeOwned>(dir: &Path, name: &'static str) -> Result<Vec<T>> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(Error::MissingTable {
            name,
            dir: dir.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::Parse { path, source })
}
