// SPDX-License-Identifier: MIT

use core::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use romio::utils::pretty_bytes;

use crate::errors::*;
use crate::file::RomFile;
use crate::path::{IntoRomPath, extract_name};
use crate::traits::{Load, Save};

/// Which directory children become entries of a [`RomSet`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryFilter {
    /// Files and subdirectories alike; subdirectories become nested sets.
    #[default]
    All,
    /// Regular files only; subdirectories are skipped.
    FilesOnly,
}

/// One entry of a [`RomSet`]: a single file or a nested set.
#[derive(Debug)]
pub enum RomNode {
    File(RomFile),
    Set(RomSet),
}

impl RomNode {
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            RomNode::File(file) => file.name(),
            RomNode::Set(set) => set.name(),
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            RomNode::File(file) => file.path(),
            RomNode::Set(set) => set.path(),
        }
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self, RomNode::File(_))
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self, RomNode::Set(_))
    }

    #[inline]
    pub fn as_file(&self) -> Option<&RomFile> {
        match self {
            RomNode::File(file) => Some(file),
            RomNode::Set(_) => None,
        }
    }

    #[inline]
    pub fn as_file_mut(&mut self) -> Option<&mut RomFile> {
        match self {
            RomNode::File(file) => Some(file),
            RomNode::Set(_) => None,
        }
    }

    #[inline]
    pub fn as_set(&self) -> Option<&RomSet> {
        match self {
            RomNode::Set(set) => Some(set),
            RomNode::File(_) => None,
        }
    }

    #[inline]
    pub fn as_set_mut(&mut self) -> Option<&mut RomSet> {
        match self {
            RomNode::Set(set) => Some(set),
            RomNode::File(_) => None,
        }
    }
}

impl Load for RomNode {
    fn load(&mut self) -> RomResult {
        match self {
            RomNode::File(file) => Ok(file.load()?),
            RomNode::Set(set) => Ok(set.load()?),
        }
    }

    fn unload(&mut self) {
        match self {
            RomNode::File(file) => file.unload(),
            RomNode::Set(set) => set.unload(),
        }
    }

    fn is_loaded(&self) -> bool {
        match self {
            RomNode::File(file) => file.is_loaded(),
            RomNode::Set(set) => set.is_loaded(),
        }
    }
}

impl Save for RomNode {
    fn save(&self) -> RomResult {
        match self {
            RomNode::File(file) => Ok(file.save()?),
            RomNode::Set(set) => Ok(set.save()?),
        }
    }
}

/// A directory whose immediate children are held as [`RomNode`] entries.
///
/// The entry list is the set's lifecycle state, exactly like a file's
/// byte buffer: `None` until [`RomSet::load`] enumerates the directory,
/// dropped again by [`RomSet::unload`]. Loading enumerates children in
/// directory-iteration order (platform-defined) and never recurses into
/// entry contents; every entry starts closed.
#[derive(Debug)]
pub struct RomSet {
    path: PathBuf,
    name: String,
    filter: EntryFilter,
    entries: Option<Vec<RomNode>>,
}

impl RomSet {
    /// Creates a closed set over `path`. No I/O happens until `load`.
    pub fn new(path: impl IntoRomPath) -> SetResult<Self> {
        Self::with_filter(path, EntryFilter::All)
    }

    /// Creates a closed set with an explicit entry filter.
    pub fn with_filter(path: impl IntoRomPath, filter: EntryFilter) -> SetResult<Self> {
        let path = path.into_rom_path()?;
        let name = extract_name(&path);
        Ok(Self {
            path,
            name,
            filter,
            entries: None,
        })
    }

    /// Creates a set and immediately enumerates its entries.
    pub fn open(path: impl IntoRomPath) -> SetResult<Self> {
        let mut set = Self::new(path)?;
        set.load()?;
        Ok(set)
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path segment.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn filter(&self) -> EntryFilter {
        self.filter
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// Read-only view of the entries; empty while closed.
    pub fn entries(&self) -> &[RomNode] {
        self.entries.as_deref().unwrap_or(&[])
    }

    /// Iterates mutably over the entries.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RomNode> {
        self.entries.iter_mut().flatten()
    }

    /// Enumerates the immediate children of `path` into entries.
    ///
    /// Guarded: loading an already-open set is a no-op, so entries are
    /// never duplicated. Each child becomes a closed [`RomNode`]; nothing
    /// below the entry list is read.
    pub fn load(&mut self) -> SetResult {
        if self.entries.is_some() {
            return Ok(());
        }
        let meta = fs::metadata(&self.path)?;
        crate::ensure!(meta.is_dir(), SetError::NotADirectory);

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            match self.filter {
                EntryFilter::FilesOnly => {
                    if !file_type.is_file() {
                        continue;
                    }
                    entries.push(RomNode::File(RomFile::new(entry.path())?));
                }
                EntryFilter::All => {
                    if file_type.is_dir() {
                        entries.push(RomNode::Set(Self::with_filter(entry.path(), self.filter)?));
                    } else {
                        entries.push(RomNode::File(RomFile::new(entry.path())?));
                    }
                }
            }
        }
        self.entries = Some(entries);
        Ok(())
    }

    /// Loads the set, then the contents of every entry.
    ///
    /// File entries get their bytes; nested sets are enumerated one level
    /// without descending further.
    pub fn load_all(&mut self) -> SetResult {
        self.load()?;
        for entry in self.entries.iter_mut().flatten() {
            match entry {
                RomNode::File(file) => file.load()?,
                RomNode::Set(set) => set.load()?,
            }
        }
        Ok(())
    }

    /// Unloads every entry, then discards the entry list.
    pub fn unload(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            for entry in entries.iter_mut() {
                entry.unload();
            }
        }
        self.entries = None;
    }

    /// Saves every entry, aborting at the first failure.
    ///
    /// The set itself has no bytes to persist. Entries after a failing
    /// one are left untouched; the failure propagates to the caller.
    pub fn save(&self) -> SetResult {
        for entry in self.entries() {
            match entry {
                RomNode::File(file) => file.save()?,
                RomNode::Set(set) => set.save()?,
            }
        }
        Ok(())
    }

    /// Finds the first entry whose name equals `name`, in enumeration
    /// order. Names are compared for exact equality, never as patterns.
    pub fn find(&self, name: &str) -> Option<&RomNode> {
        self.entries().iter().find(|e| e.name() == name)
    }

    /// Mutable variant of [`RomSet::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut RomNode> {
        self.entries.as_mut()?.iter_mut().find(|e| e.name() == name)
    }
}

impl Load for RomSet {
    fn load(&mut self) -> RomResult {
        Ok(RomSet::load(self)?)
    }

    fn unload(&mut self) {
        RomSet::unload(self)
    }

    fn is_loaded(&self) -> bool {
        RomSet::is_loaded(self)
    }
}

impl Save for RomSet {
    fn save(&self) -> RomResult {
        Ok(RomSet::save(self)?)
    }
}

impl fmt::Display for RomSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        let entries = self.entries();
        for (i, entry) in entries.iter().enumerate() {
            let branch = if i + 1 == entries.len() {
                "└── "
            } else {
                "├── "
            };
            match entry {
                RomNode::File(file) if file.is_loaded() => {
                    writeln!(f, "{branch}{} ({})", file.name(), pretty_bytes(file.size() as u64))?
                }
                RomNode::File(file) => writeln!(f, "{branch}{} (not loaded)", file.name())?,
                RomNode::Set(set) => writeln!(f, "{branch}{}/", set.name())?,
            }
        }
        Ok(())
    }
}
