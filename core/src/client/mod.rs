//! Foreign-memory client layer
//!
//! Everything that touches the host process's memory lives here: offset
//! tables, raw object views, the action-manager call seam, and actor
//! accessors. The rest of the crate is pure and testable against the
//! fakes in `testing`.
//!
//! The contract of this layer is fail-soft: the host owns every structure
//! we read, and any of them can be absent or mid-rebuild on a given poll.
//! Missing state reads as `None` or zero, never as an error.

pub mod layout;
mod object;
mod runtime;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use object::{GameObject, StatusIter, StatusSnapshot};
pub use runtime::{ActionRuntime, ClientRuntime, HostFns, RecastRecord};
pub use state::ClientState;
