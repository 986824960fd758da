// SPDX-License-Identifier: MIT

//! Path-like input resolution.
//!
//! A ROM file or set can be addressed three ways: a native path, a
//! `file:` URI, or a plain string. Every form funnels through one lexical
//! normalization, so equivalent inputs resolve to the same stored path.
//! Symlinks and case folding are left to the host filesystem API.

use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::errors::{FileError, FileResult};

/// A value that resolves to the path of a ROM file or set.
///
/// Implemented for `&Path`, `PathBuf`, `&str`, `String` and [`Url`].
/// Strings starting with `file:` are parsed as URIs; everything else is
/// treated as a native path.
pub trait IntoRomPath {
    fn into_rom_path(self) -> FileResult<PathBuf>;
}

impl IntoRomPath for &Path {
    fn into_rom_path(self) -> FileResult<PathBuf> {
        normalize_path(self)
    }
}

impl IntoRomPath for PathBuf {
    fn into_rom_path(self) -> FileResult<PathBuf> {
        normalize_path(&self)
    }
}

impl IntoRomPath for &PathBuf {
    fn into_rom_path(self) -> FileResult<PathBuf> {
        normalize_path(self)
    }
}

impl IntoRomPath for &str {
    fn into_rom_path(self) -> FileResult<PathBuf> {
        if self.starts_with("file:") {
            let url = Url::parse(self).map_err(|_| FileError::InvalidPath("malformed file: URI"))?;
            return url.into_rom_path();
        }
        normalize_path(Path::new(self))
    }
}

impl IntoRomPath for String {
    fn into_rom_path(self) -> FileResult<PathBuf> {
        self.as_str().into_rom_path()
    }
}

impl IntoRomPath for Url {
    fn into_rom_path(self) -> FileResult<PathBuf> {
        if self.scheme() != "file" {
            crate::bail!(FileError::InvalidPath("expected a file: URI"));
        }
        let path = self
            .to_file_path()
            .map_err(|_| FileError::InvalidPath("URI has no local path"))?;
        normalize_path(&path)
    }
}

impl IntoRomPath for &Url {
    fn into_rom_path(self) -> FileResult<PathBuf> {
        self.clone().into_rom_path()
    }
}

/// Lexically normalizes `path`.
///
/// Rejects empty input, drops `.` components and resolves `..` against
/// the preceding segment where one exists. No filesystem access.
pub fn normalize_path(path: &Path) -> FileResult<PathBuf> {
    crate::ensure!(
        !path.as_os_str().is_empty(),
        FileError::InvalidPath("empty path")
    );

    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // "/.." is "/", and a leading ".." has nothing to cancel.
                Some(Component::RootDir) => {}
                _ => out.push(".."),
            },
            _ => out.push(comp),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    Ok(out)
}

/// Extracts the final path segment as an owned name; empty for roots.
pub fn extract_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms_resolve_alike() {
        let from_path = Path::new("/tmp/roms/pac.bin").into_rom_path().unwrap();
        let from_str = "/tmp/roms/pac.bin".into_rom_path().unwrap();
        let from_uri = "file:///tmp/roms/pac.bin".into_rom_path().unwrap();
        let from_url = Url::parse("file:///tmp/roms/pac.bin")
            .unwrap()
            .into_rom_path()
            .unwrap();

        assert_eq!(from_path, from_str);
        assert_eq!(from_str, from_uri);
        assert_eq!(from_uri, from_url);
    }

    #[test]
    fn test_lexical_normalization() {
        assert_eq!(
            "/tmp/./roms/../roms/pac.bin".into_rom_path().unwrap(),
            PathBuf::from("/tmp/roms/pac.bin")
        );
        assert_eq!("a/b/..".into_rom_path().unwrap(), PathBuf::from("a"));
        assert_eq!("./x".into_rom_path().unwrap(), PathBuf::from("x"));
        assert_eq!(".".into_rom_path().unwrap(), PathBuf::from("."));
        assert_eq!("/..".into_rom_path().unwrap(), PathBuf::from("/"));
        assert_eq!("../x".into_rom_path().unwrap(), PathBuf::from("../x"));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            "".into_rom_path(),
            Err(FileError::InvalidPath("empty path"))
        );
        assert_eq!(
            Url::parse("http://example.com/rom.bin")
                .unwrap()
                .into_rom_path(),
            Err(FileError::InvalidPath("expected a file: URI"))
        );
        // A file: URI with a remote host has no local path.
        assert_eq!(
            "file://remote-host/rom.bin".into_rom_path(),
            Err(FileError::InvalidPath("URI has no local path"))
        );
    }

    #[test]
    fn test_extract_name() {
        assert_eq!(extract_name(Path::new("/tmp/roms/pac.bin")), "pac.bin");
        assert_eq!(extract_name(Path::new("roms")), "roms");
        assert_eq!(extract_name(Path::new("/")), "");
    }
}
