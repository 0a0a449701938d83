//! Trigger definition types
//!
//! Definitions are templates loaded from TOML config files that describe
//! what abilities or statuses to watch and how a frontend should read the
//! resulting snapshots. The core library resolves each definition's
//! free-text `input` against the bundled data tables once, then polls the
//! client every frame for the matched ids.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Trigger Enums
// ═══════════════════════════════════════════════════════════════════════════

/// Which actor a status trigger inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    /// The local player
    #[default]
    Player,
    /// The local player's current target
    Target,
    /// The target's target
    TargetOfTarget,
    /// The focus target
    FocusTarget,
}

/// What kind of state a trigger tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// A status effect on some actor (buff/debuff)
    #[default]
    Status,
    /// An action's recast timer and charges
    Cooldown,
}

/// Which numeric field of a snapshot a display element binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataValueKind {
    /// Remaining time in seconds
    #[default]
    Value,
    /// Current stack/charge count
    Stacks,
    /// Maximum stack/charge count
    MaxStacks,
}

// ═══════════════════════════════════════════════════════════════════════════
// Trigger Definitions
// ═══════════════════════════════════════════════════════════════════════════

/// One user-authored trigger (loaded from config)
///
/// The `input` field holds exactly what the user typed: either an ability
/// or status name, or a numeric id. Resolution against the data tables
/// happens in the core library and may produce zero or more matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerDefinition {
    /// Unique identifier for this definition (e.g., "my_dot")
    pub id: String,

    /// Free-text ability/status name or numeric id
    pub input: String,

    /// Whether this tracks a status or a cooldown
    #[serde(default)]
    pub kind: TriggerKind,

    /// Which actor to inspect (status triggers only)
    #[serde(default)]
    pub source: TriggerSource,

    /// Only match statuses applied by the local player
    #[serde(default = "default_true")]
    pub only_mine: bool,

    /// Whether this definition is currently enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

// ═══════════════════════════════════════════════════════════════════════════
// Config File Structure
// ═══════════════════════════════════════════════════════════════════════════

/// Root structure for trigger config files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Trigger definitions in this file
    #[serde(default, rename = "trigger")]
    pub triggers: Vec<TriggerDefinition>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_trigger_defaults() {
        let toml = r#"
            [[trigger]]
            id = "surging_tempest"
            input = "Surging Tempest"
        "#;

        let config: TriggerConfig = toml::from_str(toml).expect("Should parse");
        assert_eq!(config.triggers.len(), 1);

        let trigger = &config.triggers[0];
        assert_eq!(trigger.kind, TriggerKind::Status);
        assert_eq!(trigger.source, TriggerSource::Player);
        assert!(trigger.only_mine);
        assert!(trigger.enabled);
    }

    #[test]
    fn test_cooldown_trigger_fields() {
        let toml = r#"
            [[trigger]]
            id = "bloodbath_cd"
            input = "7542"
            kind = "cooldown"
            only_mine = false
            enabled = false
        "#;

        let config: TriggerConfig = toml::from_str(toml).expect("Should parse");
        let trigger = &config.triggers[0];
        assert_eq!(trigger.kind, TriggerKind::Cooldown);
        assert_eq!(trigger.input, "7542");
        assert!(!trigger.only_mine);
        assert!(!trigger.enabled);
    }

    #[test]
    fn test_source_round_trip() {
        let def = TriggerDefinition {
            id: "boss_vuln".to_string(),
            input: "Vulnerability Up".to_string(),
            kind: TriggerKind::Status,
            source: TriggerSource::FocusTarget,
            only_mine: false,
            enabled: true,
        };
        let config = TriggerConfig {
            triggers: vec![def],
        };

        let serialized = toml::to_string(&config).expect("Should serialize");
        assert!(serialized.contains("source = \"focus_target\""));

        let parsed: TriggerConfig = toml::from_str(&serialized).expect("Should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_empty_config() {
        let config: TriggerConfig = toml::from_str("").expect("Should parse");
        assert!(config.triggers.is_empty());
    }
}
