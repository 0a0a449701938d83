pub mod client;
pub mod error;
pub mod lookup;
pub mod recast;
pub mod sheets;
pub mod source;


// Re-exports for convenience
pub use client::{
    ActionRuntime, ClientRuntime, ClientState, GameObject, HostFns, RecastRecord, StatusSnapshot,
};
pub use error::{Error, Result};
pub use lookup::{TriggerData, find_action_entries, find_status_entries};
pub use recast::{AdjustedRecast, CHARGE_REFERENCE_LEVEL, SpellReader};
pub use sheets::{ActionAliasRow, ActionRow, GameTables, GeneralActionRow, StatusRow};
pub use source::{DataSource, cooldown_data, status_data};
