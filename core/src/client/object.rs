//! Raw views over game objects owned by the host process.
//!
//! A [`GameObject`] is a thin wrapper around a base address inside the
//! host; every accessor re-reads memory on call, so values are always the
//! host's current (possibly mid-frame) state. Nothing here allocates or
//! writes.

use super::layout;

/// Read a plain value at `offset` from `base`.
///
/// # Safety
/// `base + offset .. base + offset + size_of::<T>()` must be readable
/// memory owned by the host.
#[inline]
pub(crate) unsafe fn read_at<T: Copy>(base: *const u8, offset: usize) -> T {
    unsafe { base.add(offset).cast::<T>().read_unaligned() }
}

/// One entry of a battle actor's status list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusSnapshot {
    pub status_id: u16,
    pub stacks: u8,
    /// Seconds remaining; the client reports permanent statuses as negative
    pub remaining: f32,
    /// Object id of the actor that applied the status
    pub source_id: u32,
}

/// View over a game object (actor) in host memory
#[derive(Debug, Clone, Copy)]
pub struct GameObject {
    base: *const u8,
}

impl GameObject {
    /// Wrap a raw object address. Returns `None` for null.
    ///
    /// # Safety
    /// A non-null `address` must point at a live game object owned by the
    /// host for as long as the returned view is used.
    pub unsafe fn from_address(address: *const u8) -> Option<Self> {
        (!address.is_null()).then_some(Self { base: address })
    }

    pub(crate) fn address(&self) -> *const u8 {
        self.base
    }

    pub fn object_id(&self) -> u32 {
        unsafe { read_at(self.base, layout::object::OBJECT_ID) }
    }

    pub fn kind(&self) -> u8 {
        unsafe { read_at(self.base, layout::object::KIND) }
    }

    /// Whether this object carries a status list
    pub fn is_battle_actor(&self) -> bool {
        matches!(
            self.kind(),
            layout::object::KIND_PLAYER | layout::object::KIND_BATTLE_NPC
        )
    }

    /// Object id of this actor's current target
    pub fn target_id(&self) -> u32 {
        unsafe { read_at(self.base, layout::object::TARGET_ID) }
    }

    /// Iterate the occupied slots of this actor's status list.
    ///
    /// Empty for objects that are not battle actors.
    pub fn statuses(&self) -> StatusIter {
        let list = if self.is_battle_actor() {
            unsafe { self.base.add(layout::status::LIST) }
        } else {
            std::ptr::null()
        };
        StatusIter { list, slot: 0 }
    }
}

/// Iterator over the occupied status slots of a battle actor
pub struct StatusIter {
    list: *const u8,
    slot: usize,
}

impl Iterator for StatusIter {
    type Item = StatusSnapshot;

    fn next(&mut self) -> Option<StatusSnapshot> {
        if self.list.is_null() {
            return None;
        }
        while self.slot < layout::status::SLOT_COUNT {
            let entry = unsafe { self.list.add(self.slot * layout::status::SLOT_SIZE) };
            self.slot += 1;

            let status_id: u16 = unsafe { read_at(entry, layout::status::STATUS_ID) };
            if status_id == 0 {
                continue; // empty slot
            }
            return Some(StatusSnapshot {
                status_id,
                stacks: unsafe { read_at(entry, layout::status::STACKS) },
                remaining: unsafe { read_at(entry, layout::status::REMAINING) },
                source_id: unsafe { read_at(entry, layout::status::SOURCE_ID) },
            });
        }
        None
    }
}
