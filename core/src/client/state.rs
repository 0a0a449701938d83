//! Actor accessors over the host's object table and target system.
//!
//! Every accessor re-reads the underlying pointer slots on call, so a
//! poll always sees the host's current actors. Actors appear and vanish
//! between frames (zoning, login, death); all lookups degrade to `None`.

use sigil_types::TriggerSource;

use super::layout;
use super::object::{GameObject, read_at};

/// Resolved addresses of the host structures actor lookups go through
pub struct ClientState {
    object_table: *const *const u8,
    target_system: *const u8,
}

impl ClientState {
    /// Wrap the resolved object-table and target-system addresses.
    ///
    /// Null addresses are tolerated; the affected accessors return `None`.
    ///
    /// # Safety
    /// Non-null addresses must point at the host's live object table
    /// (array of [`layout::table::LEN`] object pointers) and target-system
    /// structure for the lifetime of the state.
    pub unsafe fn new(object_table: *const *const u8, target_system: *const u8) -> Self {
        Self {
            object_table,
            target_system,
        }
    }

    fn object_at(&self, index: usize) -> Option<GameObject> {
        if self.object_table.is_null() || index >= layout::table::LEN {
            return None;
        }
        let address = unsafe { self.object_table.add(index).read() };
        unsafe { GameObject::from_address(address) }
    }

    fn target_field(&self, offset: usize) -> Option<GameObject> {
        if self.target_system.is_null() {
            return None;
        }
        let address: *const u8 = unsafe { read_at(self.target_system, offset) };
        unsafe { GameObject::from_address(address) }
    }

    /// The local player, `None` when not logged in
    pub fn local_player(&self) -> Option<GameObject> {
        self.object_at(layout::table::LOCAL_PLAYER)
    }

    /// The local player's current target
    pub fn target(&self) -> Option<GameObject> {
        self.target_field(layout::target::CURRENT)
    }

    /// The focus target
    pub fn focus_target(&self) -> Option<GameObject> {
        self.target_field(layout::target::FOCUS)
    }

    /// Linear scan of the object table for an object id
    pub fn find_object(&self, object_id: u32) -> Option<GameObject> {
        if object_id == 0 || object_id == layout::object::EMPTY_ID {
            return None;
        }
        (0..layout::table::LEN)
            .filter_map(|index| self.object_at(index))
            .find(|object| object.object_id() == object_id)
    }

    /// The current target's own target
    pub fn target_of_target(&self) -> Option<GameObject> {
        let target = self.target()?;
        self.find_object(target.target_id())
    }

    /// Map a trigger's source selector to an actor
    pub fn resolve_source(&self, source: TriggerSource) -> Option<GameObject> {
        match source {
            TriggerSource::Player => self.local_player(),
            TriggerSource::Target => self.target(),
            TriggerSource::TargetOfTarget => self.target_of_target(),
            TriggerSource::FocusTarget => self.focus_target(),
        }
    }
}
