// SPDX-License-Identifier: MIT

//! File and ROM set objects with an explicit load/modify/save lifecycle.
//!
//! A [`RomFile`] binds a filesystem path to an optional in-memory
//! [`romio::RomView`]: the buffer's presence *is* the open/closed state.
//! A [`RomSet`] does the same for a directory, holding its immediate
//! children as [`RomNode`] entries and fanning lifecycle calls out to
//! them. The [`open_rom`], [`open_dir`] and [`open_rom_set`] entry points
//! cover the common open-and-read workflows; the `new` constructors defer
//! all I/O until an explicit [`Load::load`].

// Core modules
pub mod errors;
mod macros;
pub mod path;
pub mod traits;

mod file;
mod open;
mod set;

// Prelude re-exports (central entrypoint)
pub mod prelude {
    pub use super::errors::*;
    pub use super::file::RomFile;
    pub use super::open::{open_dir, open_rom, open_rom_set};
    pub use super::path::IntoRomPath;
    pub use super::set::{EntryFilter, RomNode, RomSet};
    pub use super::traits::{Load, Save};
    pub use romio::RomView;
}

pub use errors::*;
pub use file::RomFile;
pub use open::{open_dir, open_rom, open_rom_set};
pub use set::{EntryFilter, RomNode, RomSet};
pub use traits::{Load, Save};
