// SPDX-License-Identifier: MIT

//! Byte-view primitives for the romset ecosystem.
//!
//! The central type is [`RomView`], a fixed-size in-memory byte buffer
//! with bounds-checked offset reads and writes. [`utils`] carries the
//! diagnostic rendering helpers (byte-to-char mapping, hex dumps).

// Core modules
pub mod errors;
mod macros;
pub mod utils;
mod view;

// Prelude re-exports (central entrypoint)
pub mod prelude {
    pub use super::errors::*;
    pub use super::utils::{HexDump, display_byte, hex_dump, pretty_bytes};
    pub use super::view::RomView;
}

pub use errors::*;
pub use view::RomView;
