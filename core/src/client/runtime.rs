//! The seam between cooldown reads and the host's action manager.
//!
//! [`ActionRuntime`] abstracts the handful of foreign calls the recast
//! reader needs. The production implementation, [`ClientRuntime`], holds
//! the resolved action-manager instance plus host function pointers and
//! confines all `unsafe` dispatch; tests substitute an in-memory fake.
//!
//! Every operation fails soft. The host may tear down or rebuild its
//! structures between polls, so a missing record or an unresolved call
//! yields a zeroed/default result rather than an error.

use tracing::warn;

use super::layout;
use super::object::{GameObject, read_at};

/// One active record of the action manager's recast array
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecastRecord {
    /// Action that started the recast
    pub action_id: u32,
    /// Seconds elapsed since the recast began
    pub elapsed: f32,
    /// Total recast length in seconds
    pub total: f32,
}

/// Foreign calls into the host's action management
pub trait ActionRuntime {
    /// Job/level-scaled substitution of a base action id
    fn adjusted_action_id(&self, action_id: u32) -> u32;

    /// Recast group an action belongs to, `None` when the host reports none
    fn recast_group(&self, action_id: u32) -> Option<usize>;

    /// Active recast record of a group, `None` when the group is idle
    fn recast_record(&self, group: usize) -> Option<RecastRecord>;

    /// Charge cap of an action at `level` (0 = the caller's current level)
    fn max_charges(&self, action_id: u32, level: u32) -> u16;

    /// Host usability code for an action against a target; 0 means usable
    fn action_status(&self, action_id: u32, target_id: u32) -> u32;

    /// Host range/line-of-sight code (see [`layout::range`])
    fn range_check(&self, action_id: u32, source: &GameObject, target: &GameObject) -> u32;
}

/// Host function pointers resolved by the loader at attach time
///
/// How they are resolved (export table, signature scan) is the loader's
/// concern; this layer only dispatches through them.
#[derive(Debug, Clone, Copy)]
pub struct HostFns {
    pub get_adjusted_action_id: unsafe extern "C" fn(manager: *mut u8, action_id: u32) -> u32,
    pub get_recast_group: unsafe extern "C" fn(manager: *mut u8, kind: i32, action_id: u32) -> i32,
    pub get_max_charges: unsafe extern "C" fn(action_id: u32, level: u32) -> u16,
    pub get_action_status: unsafe extern "C" fn(
        manager: *mut u8,
        kind: i32,
        action_id: u32,
        target_id: u32,
        check_recast: u8,
        check_casting: u8,
    ) -> u32,
    pub check_action_range:
        unsafe extern "C" fn(action_id: u32, source: *const u8, target: *const u8) -> u32,
}

/// Production [`ActionRuntime`] backed by the live action manager
pub struct ClientRuntime {
    manager: *mut u8,
    fns: HostFns,
}

impl ClientRuntime {
    /// Wrap the resolved action-manager instance.
    ///
    /// Returns `None` when the manager address is null (host not ready).
    ///
    /// # Safety
    /// `manager` must be the host's live action-manager instance and every
    /// pointer in `fns` must target the matching host function for the
    /// lifetime of the runtime.
    pub unsafe fn new(manager: *mut u8, fns: HostFns) -> Option<Self> {
        if manager.is_null() {
            warn!("action manager not resolved; cooldown reads disabled");
            return None;
        }
        Some(Self { manager, fns })
    }
}

impl ActionRuntime for ClientRuntime {
    fn adjusted_action_id(&self, action_id: u32) -> u32 {
        unsafe { (self.fns.get_adjusted_action_id)(self.manager, action_id) }
    }

    fn recast_group(&self, action_id: u32) -> Option<usize> {
        let group = unsafe {
            (self.fns.get_recast_group)(self.manager, layout::manager::KIND_SPELL, action_id)
        };
        usize::try_from(group)
            .ok()
            .filter(|g| *g < layout::manager::GROUP_COUNT)
    }

    fn recast_record(&self, group: usize) -> Option<RecastRecord> {
        if group >= layout::manager::GROUP_COUNT {
            return None;
        }
        let record = unsafe {
            self.manager
                .cast_const()
                .add(layout::manager::RECAST_ARRAY + group * layout::manager::RECORD_SIZE)
        };
        let active: u8 = unsafe { read_at(record, layout::manager::ACTIVE) };
        if active == 0 {
            return None;
        }
        Some(RecastRecord {
            action_id: unsafe { read_at(record, layout::manager::ACTION_ID) },
            elapsed: unsafe { read_at(record, layout::manager::ELAPSED) },
            total: unsafe { read_at(record, layout::manager::TOTAL) },
        })
    }

    fn max_charges(&self, action_id: u32, level: u32) -> u16 {
        unsafe { (self.fns.get_max_charges)(action_id, level) }
    }

    fn action_status(&self, action_id: u32, target_id: u32) -> u32 {
        // Recast activity excluded, cast state included: a charge action
        // with one charge banked is usable even while its group recasts.
        unsafe {
            (self.fns.get_action_status)(
                self.manager,
                layout::manager::KIND_SPELL,
                action_id,
                target_id,
                0,
                1,
            )
        }
    }

    fn range_check(&self, action_id: u32, source: &GameObject, target: &GameObject) -> u32 {
        unsafe { (self.fns.check_action_range)(action_id, source.address(), target.address()) }
    }
}
