//! Memory layout constants for host client structures
//!
//! This module centralizes every offset used when reinterpreting the host
//! process's memory. Constants are organized by structure type. All offsets
//! are relative to a base address resolved by the loader at attach time and
//! are versioned with the host client: a client patch that moves a field
//! means updating this file, nothing else.

/// Layout of the action manager's recast-record array
///
/// # Structure Layout
///
/// ```text
/// Offset   Field         Size    Description
/// ──────────────────────────────────────────────────────
/// 0x00     Active        1       Non-zero while the group is recasting
/// 0x04     ActionId      4       Action that started the recast
/// 0x08     Elapsed       4       Seconds elapsed (f32)
/// 0x0C     Total         4       Total recast length in seconds (f32)
/// ```
pub mod manager {
    /// Start of the recast-record array inside the action manager
    pub const RECAST_ARRAY: usize = 0x80;

    /// Stride of one recast record
    pub const RECORD_SIZE: usize = 0x14;

    pub const ACTIVE: usize = 0x00;
    pub const ACTION_ID: usize = 0x04;
    pub const ELAPSED: usize = 0x08;
    pub const TOTAL: usize = 0x0C;

    /// Number of recast groups the client tracks
    pub const GROUP_COUNT: usize = 80;

    /// Action-kind discriminator passed to the host's action-manager calls
    /// for ordinary player abilities
    pub const KIND_SPELL: i32 = 1;
}

/// Layout of a game object (actor)
pub mod object {
    pub const OBJECT_ID: usize = 0x74;
    pub const KIND: usize = 0x8C;
    pub const TARGET_ID: usize = 0xC0;

    // Object kinds that carry a status list
    pub const KIND_PLAYER: u8 = 1;
    pub const KIND_BATTLE_NPC: u8 = 2;

    /// Object id the client uses for "no object"
    pub const EMPTY_ID: u32 = 0xE000_0000;
}

/// Layout of a battle actor's status list
///
/// Fixed-size array of slots; unused slots hold status id 0.
///
/// ```text
/// Offset   Field         Size    Description
/// ──────────────────────────────────────────────────────
/// 0x00     StatusId      2       Status effect id (0 = empty slot)
/// 0x02     Stacks        1       Current stack count
/// 0x04     Remaining     4       Seconds remaining (f32, may be negative)
/// 0x08     SourceId      4       Object id of the applying actor
/// ```
pub mod status {
    /// Start of the status-slot array inside a battle actor
    pub const LIST: usize = 0x1A8;

    pub const SLOT_COUNT: usize = 30;
    pub const SLOT_SIZE: usize = 0x0C;

    pub const STATUS_ID: usize = 0x00;
    pub const STACKS: usize = 0x02;
    pub const REMAINING: usize = 0x04;
    pub const SOURCE_ID: usize = 0x08;
}

/// Layout of the client's object table (array of object pointers)
pub mod table {
    pub const LEN: usize = 599;

    /// Slot that always holds the local player (null when not logged in)
    pub const LOCAL_PLAYER: usize = 0;
}

/// Layout of the target-system structure (pointer fields)
pub mod target {
    pub const CURRENT: usize = 0x80;
    pub const FOCUS: usize = 0xD0;
}

/// Result codes of the host's range/line-of-sight check
///
/// Only `OUT_OF_RANGE` means the target cannot be reached at all; the
/// other non-zero codes still count as "in range" for display purposes.
pub mod range {
    pub const IN_RANGE: u32 = 0;
    pub const NOT_IN_LOS: u32 = 562;
    pub const NOT_FACING: u32 = 565;
    pub const OUT_OF_RANGE: u32 = 566;
}
