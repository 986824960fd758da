// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};

use romio::RomView;

use crate::errors::*;
use crate::path::{IntoRomPath, extract_name};
use crate::traits::{Load, Save};

/// A single file on disk, held in memory as a byte buffer.
///
/// The presence of the internal [`RomView`] is the lifecycle state: a
/// `RomFile` is *closed* until [`RomFile::load`] reads the whole file
/// into memory, and closed again after [`RomFile::unload`] zeroes and
/// discards the buffer. Byte access requires the loaded state and fails
/// with [`FileError::NotLoaded`] otherwise.
///
/// The path is fixed at construction; [`RomFile::save`] always writes
/// back to it, truncating the on-disk file to the buffer's exact length.
#[derive(Debug)]
pub struct RomFile {
    path: PathBuf,
    name: String,
    view: Option<RomView>,
}

impl RomFile {
    /// Creates a closed `RomFile`. No I/O happens until `load`.
    pub fn new(path: impl IntoRomPath) -> FileResult<Self> {
        let path = path.into_rom_path()?;
        let name = extract_name(&path);
        Ok(Self {
            path,
            name,
            view: None,
        })
    }

    /// Creates a `RomFile` and immediately loads its bytes.
    pub fn open(path: impl IntoRomPath) -> FileResult<Self> {
        let mut file = Self::new(path)?;
        file.load()?;
        Ok(file)
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
    pub fn is_loaded(&self) -> bool {
        self.view.is_some()
    }

    /// The loaded byte view, if any.
    #[inline]
    pub fn view(&self) -> Option<&RomView> {
        self.view.as_ref()
    }

    #[inline]
    pub fn view_mut(&mut self) -> Option<&mut RomView> {
        self.view.as_mut()
    }

    /// Loaded size in bytes; zero while closed.
    #[inline]
    pub fn size(&self) -> usize {
        self.view.as_ref().map_or(0, RomView::len)
    }

    fn require_view(&self) -> FileResult<&RomView> {
        self.view.as_ref().ok_or(FileError::NotLoaded)
    }

    fn require_view_mut(&mut self) -> FileResult<&mut RomView> {
        self.view.as_mut().ok_or(FileError::NotLoaded)
    }

    /// Reads the whole file at `path` into memory.
    ///
    /// No-op when already loaded; the buffer is left untouched.
    pub fn load(&mut self) -> FileResult {
        if self.view.is_some() {
            return Ok(());
        }
        let meta = fs::metadata(&self.path)?;
        crate::ensure!(meta.is_file(), FileError::NotAFile);

        let bytes = fs::read(&self.path)?;
        self.view = Some(RomView::new(bytes));
        Ok(())
    }

    /// Zeroes the buffer, then discards it. No-op when already closed.
    pub fn unload(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.zero_fill();
        }
        self.view = None;
    }

    /// Writes the buffer back to `path`, truncating the on-disk file to
    /// the buffer's exact length. Saving a closed file is a no-op.
    pub fn save(&self) -> FileResult {
        let Some(view) = self.view.as_ref() else {
            return Ok(());
        };
        fs::write(&self.path, view.as_bytes())?;
        Ok(())
    }

    /// Reads the single byte at `offset`.
    pub fn read_byte(&self, offset: u64) -> FileResult<u8> {
        self.require_view()?
            .read_byte(offset)
            .map_err(FileError::Bounds)
    }

    /// Reads `len` bytes starting at `offset` into a fresh buffer.
    pub fn read_n(&self, offset: u64, len: usize) -> FileResult<Vec<u8>> {
        self.require_view()?
            .read_n(offset, len)
            .map_err(FileError::Bounds)
    }

    /// Returns an independent copy of the whole buffer.
    pub fn read_all(&self) -> FileResult<Vec<u8>> {
        Ok(self.require_view()?.read_all())
    }

    /// Writes a single byte at `offset`.
    pub fn write_byte(&mut self, offset: u64, value: u8) -> FileResult {
        self.require_view_mut()?
            .write_byte(offset, value)
            .map_err(FileError::Bounds)
    }

    /// Writes `data` at `offset`.
    pub fn write_at(&mut self, offset: u64, data: &[u8]) -> FileResult {
        self.require_view_mut()?
            .write_at(offset, data)
            .map_err(FileError::Bounds)
    }
}

impl Load for RomFile {
    fn load(&mut self) -> RomResult {
        Ok(RomFile::load(self)?)
    }

    fn unload(&mut self) {
        RomFile::unload(self)
    }

    fn is_loaded(&self) -> bool {
        RomFile::is_loaded(self)
    }
}

impl Save for RomFile {
    fn save(&self) -> RomResult {
        Ok(RomFile::save(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn seed(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_load_reads_disk_bytes() {
        let dir = tempdir().unwrap();
        let path = seed(dir.path(), "pac.bin", &[0x10, 0x20, 0x30]);

        let file = RomFile::open(path.as_path()).unwrap();
        assert!(file.is_loaded());
        assert_eq!(file.name(), "pac.bin");
        assert_eq!(file.read_all().unwrap(), vec![0x10, 0x20, 0x30]);
    }

    #[test]
    fn test_new_defers_io() {
        let dir = tempdir().unwrap();
        // The path does not exist; construction must still succeed.
        let file = RomFile::new(dir.path().join("missing.bin")).unwrap();
        assert!(!file.is_loaded());
        assert_eq!(file.read_all(), Err(FileError::NotLoaded));
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = seed(dir.path(), "r.bin", &[1, 2, 3]);

        let mut file = RomFile::open(path.as_path()).unwrap();
        // Mutate the disk file between loads; the second load must not
        // replace the buffer.
        fs::write(&path, [9, 9, 9, 9]).unwrap();
        file.load().unwrap();
        assert_eq!(file.read_all().unwrap(), vec![1, 2, 3]);
        assert_eq!(file.size(), 3);
    }

    #[test]
    fn test_unload_closes_and_reload_works() {
        let dir = tempdir().unwrap();
        let path = seed(dir.path(), "r.bin", &[5, 6]);

        let mut file = RomFile::open(path.as_path()).unwrap();
        file.unload();
        assert!(!file.is_loaded());
        assert_eq!(file.read_byte(0), Err(FileError::NotLoaded));
        assert_eq!(file.write_byte(0, 1), Err(FileError::NotLoaded));

        // Unloading twice stays closed.
        file.unload();
        assert!(!file.is_loaded());

        file.load().unwrap();
        assert_eq!(file.read_all().unwrap(), vec![5, 6]);
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempdir().unwrap();
        let path = seed(dir.path(), "r.bin", &[0, 0, 0, 0]);

        let mut file = RomFile::open(path.as_path()).unwrap();
        file.write_at(1, &[0xAB, 0xCD]).unwrap();
        file.save().unwrap();

        let fresh = RomFile::open(path.as_path()).unwrap();
        assert_eq!(fresh.read_all().unwrap(), vec![0, 0xAB, 0xCD, 0]);
    }

    #[test]
    fn test_save_truncates_to_buffer_len() {
        let dir = tempdir().unwrap();
        let path = seed(dir.path(), "r.bin", &[1, 2]);

        let file = RomFile::open(path.as_path()).unwrap();
        // Grow the on-disk file behind the object's back.
        fs::write(&path, [7u8; 10]).unwrap();

        file.save().unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_save_while_closed_is_noop() {
        let dir = tempdir().unwrap();
        let path = seed(dir.path(), "r.bin", &[1, 2, 3]);

        let file = RomFile::new(path.as_path()).unwrap();
        file.save().unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_load_failures() {
        let dir = tempdir().unwrap();

        let mut missing = RomFile::new(dir.path().join("nope.bin")).unwrap();
        assert!(matches!(missing.load(), Err(FileError::IO(_))));

        let mut not_a_file = RomFile::new(dir.path()).unwrap();
        assert_eq!(not_a_file.load(), Err(FileError::NotAFile));
    }

    #[test]
    fn test_bounds_errors_are_typed() {
        let dir = tempdir().unwrap();
        let path = seed(dir.path(), "r.bin", &[1, 2]);

        let mut file = RomFile::open(path.as_path()).unwrap();
        assert_eq!(
            file.read_byte(2),
            Err(FileError::Bounds(RomIOError::OutOfBounds))
        );
        // Writes fail the same way reads do.
        assert_eq!(
            file.write_at(1, &[0, 0]),
            Err(FileError::Bounds(RomIOError::OutOfBounds))
        );
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let path = seed(dir.path(), "empty.bin", &[]);

        let file = RomFile::open(path.as_path()).unwrap();
        assert!(file.is_loaded());
        assert_eq!(file.size(), 0);
        assert_eq!(file.read_all().unwrap(), Vec::<u8>::new());
        assert_eq!(
            file.read_byte(0),
            Err(FileError::Bounds(RomIOError::OutOfBounds))
        );
    }
}
