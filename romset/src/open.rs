// SPDX-License-Identifier: MIT

//! Eager entry points for the common open-and-read workflows.
//!
//! The `new` constructors on [`RomFile`] and [`RomSet`] defer all I/O;
//! the functions here construct *and* load in one call, which is what
//! most callers want.

use crate::errors::{FileResult, SetResult};
use crate::file::RomFile;
use crate::path::IntoRomPath;
use crate::set::{EntryFilter, RomSet};

/// Opens a single ROM file with its bytes loaded.
pub fn open_rom(path: impl IntoRomPath) -> FileResult<RomFile> {
    RomFile::open(path)
}

/// Opens a directory aggregate: entries enumerated, contents left closed.
///
/// Subdirectories become nested (closed) sets.
pub fn open_dir(path: impl IntoRomPath) -> SetResult<RomSet> {
    RomSet::open(path)
}

/// Opens a strict ROM set: immediate regular files only, with every
/// ROM's bytes loaded.
pub fn open_rom_set(path: impl IntoRomPath) -> SetResult<RomSet> {
    let mut set = RomSet::with_filter(path, EntryFilter::FilesOnly)?;
    set.load_all()?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use url::Url;

    #[test]
    fn test_open_rom_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.bin");
        fs::write(&path, [0xCA, 0xFE]).unwrap();

        let rom = open_rom(path.as_path()).unwrap();
        assert!(rom.is_loaded());
        assert_eq!(rom.read_all().unwrap(), vec![0xCA, 0xFE]);
    }

    #[test]
    fn test_open_rom_accepts_uri_and_string() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.bin");
        fs::write(&path, [1]).unwrap();

        let from_str = open_rom(path.to_str().unwrap()).unwrap();
        let url = Url::from_file_path(&path).unwrap();
        let from_url = open_rom(url).unwrap();
        assert_eq!(from_str.path(), from_url.path());
    }

    #[test]
    fn test_open_dir_leaves_contents_closed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("r.bin"), [1]).unwrap();

        let set = open_dir(dir.path()).unwrap();
        assert!(set.is_loaded());
        assert!(!set.entries()[0].as_file().unwrap().is_loaded());
    }

    #[test]
    fn test_open_rom_set_loads_files_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.bin"), [1, 2]).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let set = open_rom_set(dir.path()).unwrap();
        assert_eq!(set.entries().len(), 1);
        let rom = set.entries()[0].as_file().unwrap();
        assert!(rom.is_loaded());
        assert_eq!(rom.read_all().unwrap(), vec![1, 2]);
    }
}
