// SPDX-License-Identifier: MIT

use crate::errors::RomResult;

/// Capability to move an object between its closed and loaded states.
///
/// Both transitions are idempotent: loading an open object and unloading
/// a closed one are no-ops.
pub trait Load {
    /// Brings the object's state into memory (file bytes, or a set's
    /// entry list). No-op when already loaded.
    fn load(&mut self) -> RomResult;

    /// Zeroes and discards in-memory state. No-op when already closed.
    fn unload(&mut self);

    /// Whether the object currently holds in-memory state.
    fn is_loaded(&self) -> bool;
}

/// Capability to persist in-memory state back to disk.
pub trait Save {
    /// Writes the current in-memory bytes to disk. No-op while closed.
    fn save(&self) -> RomResult;
}
