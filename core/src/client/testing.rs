//! Test fixtures for the client layer.
//!
//! Builds little byte buffers shaped like the host's structures so the
//! real raw-pointer views can be exercised without a host process, plus a
//! configurable [`MockRuntime`] for cooldown reads.

use std::collections::HashMap;

use super::layout;
use super::object::GameObject;
use super::runtime::{ActionRuntime, RecastRecord};
use super::state::ClientState;

const OBJECT_SIZE: usize = 0x320;
const TARGET_SYSTEM_SIZE: usize = 0x100;

fn put<T: Copy>(bytes: &mut [u8], offset: usize, value: T) {
    assert!(offset + size_of::<T>() <= bytes.len());
    unsafe { bytes.as_mut_ptr().add(offset).cast::<T>().write_unaligned(value) }
}

/// A byte buffer shaped like one game object
pub(crate) struct FakeObject {
    bytes: Vec<u8>,
}

impl FakeObject {
    pub fn new(object_id: u32, kind: u8) -> Self {
        let mut bytes = vec![0u8; OBJECT_SIZE];
        put(&mut bytes, layout::object::OBJECT_ID, object_id);
        put(&mut bytes, layout::object::KIND, kind);
        Self { bytes }
    }

    pub fn player(object_id: u32) -> Self {
        Self::new(object_id, layout::object::KIND_PLAYER)
    }

    pub fn battle_npc(object_id: u32) -> Self {
        Self::new(object_id, layout::object::KIND_BATTLE_NPC)
    }

    pub fn with_target(mut self, target_id: u32) -> Self {
        put(&mut self.bytes, layout::object::TARGET_ID, target_id);
        self
    }

    pub fn with_status(
        mut self,
        slot: usize,
        status_id: u16,
        stacks: u8,
        remaining: f32,
        source_id: u32,
    ) -> Self {
        assert!(slot < layout::status::SLOT_COUNT);
        let entry = layout::status::LIST + slot * layout::status::SLOT_SIZE;
        put(&mut self.bytes, entry + layout::status::STATUS_ID, status_id);
        put(&mut self.bytes, entry + layout::status::STACKS, stacks);
        put(&mut self.bytes, entry + layout::status::REMAINING, remaining);
        put(&mut self.bytes, entry + layout::status::SOURCE_ID, source_id);
        self
    }

    pub fn as_object(&self) -> GameObject {
        unsafe { GameObject::from_address(self.bytes.as_ptr()) }.expect("non-null")
    }
}

/// An object table plus target system backed by fake objects
pub(crate) struct FakeWorld {
    // Owns the object buffers; `table` points into them, so `objects`
    // must not grow after construction.
    #[allow(dead_code)]
    objects: Vec<FakeObject>,
    table: Vec<*const u8>,
    target_system: Vec<u8>,
}

impl FakeWorld {
    /// Build a world whose object-table slots 0..n hold `objects` in order
    pub fn new(objects: Vec<FakeObject>) -> Self {
        let mut table = vec![std::ptr::null(); layout::table::LEN];
        for (slot, object) in table.iter_mut().zip(&objects) {
            *slot = object.bytes.as_ptr();
        }
        Self {
            objects,
            table,
            target_system: vec![0u8; TARGET_SYSTEM_SIZE],
        }
    }

    /// Point the current target at the object in table slot `index`
    pub fn set_target(&mut self, index: usize) {
        let address = self.table[index];
        put(&mut self.target_system, layout::target::CURRENT, address);
    }

    /// Point the focus target at the object in table slot `index`
    pub fn set_focus(&mut self, index: usize) {
        let address = self.table[index];
        put(&mut self.target_system, layout::target::FOCUS, address);
    }

    pub fn state(&self) -> ClientState {
        unsafe { ClientState::new(self.table.as_ptr(), self.target_system.as_ptr()) }
    }
}

/// Configurable [`ActionRuntime`] for cooldown and snapshot tests
#[derive(Debug, Default)]
pub(crate) struct MockRuntime {
    /// Base action id -> adjusted id (identity when absent)
    pub adjustments: HashMap<u32, u32>,
    /// Action id -> recast group
    pub groups: HashMap<u32, usize>,
    /// Recast group -> active record
    pub records: HashMap<usize, RecastRecord>,
    /// (action id, level) -> charge cap
    pub charges: HashMap<(u32, u32), u16>,
    /// Usability code returned for every action (0 = usable)
    pub status_code: u32,
    /// Range code returned for every check
    pub range_code: u32,
}

impl MockRuntime {
    /// An action with an active recast record and a charge cap that does
    /// not vary with level
    pub fn with_recast(action_id: u32, elapsed: f32, total: f32, max_charges: u16) -> Self {
        let mut runtime = Self::default();
        runtime.groups.insert(action_id, 0);
        runtime.records.insert(
            0,
            RecastRecord {
                action_id,
                elapsed,
                total,
            },
        );
        runtime.charges.insert((action_id, 0), max_charges);
        runtime
            .charges
            .insert((action_id, crate::recast::CHARGE_REFERENCE_LEVEL), max_charges);
        runtime
    }
}

impl ActionRuntime for MockRuntime {
    fn adjusted_action_id(&self, action_id: u32) -> u32 {
        self.adjustments.get(&action_id).copied().unwrap_or(action_id)
    }

    fn recast_group(&self, action_id: u32) -> Option<usize> {
        self.groups.get(&action_id).copied()
    }

    fn recast_record(&self, group: usize) -> Option<RecastRecord> {
        self.records.get(&group).copied()
    }

    fn max_charges(&self, action_id: u32, level: u32) -> u16 {
        self.charges.get(&(action_id, level)).copied().unwrap_or(0)
    }

    fn action_status(&self, _action_id: u32, _target_id: u32) -> u32 {
        self.status_code
    }

    fn range_check(&self, _action_id: u32, _source: &GameObject, _target: &GameObject) -> u32 {
        self.range_code
    }
}
