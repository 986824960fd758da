// SPDX-License-Identifier: MIT

use core::fmt;

pub use romio::errors::*;

/// Errors from single-file lifecycle and byte access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileError {
    IO(RomIOError),
    Bounds(RomIOError),
    NotLoaded,
    NotAFile,
    InvalidPath(&'static str),
    Other(&'static str),
}

impl FileError {
    pub fn msg(&self) -> &'static str {
        match self {
            FileError::IO(_) => "IO error",
            FileError::Bounds(_) => "Offset out of range",
            FileError::NotLoaded => "File is not loaded",
            FileError::NotAFile => "Not a regular file",
            FileError::InvalidPath(msg) => msg,
            FileError::Other(msg) => msg,
        }
    }

    pub fn source(&self) -> Option<RomError> {
        match self {
            FileError::IO(e) => Some(RomError::IO(*e)),
            FileError::Bounds(e) => Some(RomError::IO(*e)),
            _ => None,
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        let mut current = self.source();
        while let Some(src) = current {
            write!(f, "\n  caused by: {}", src.msg())?;
            current = src.source();
        }
        Ok(())
    }
}

/// Errors from directory aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    IO(RomIOError),
    File(FileError),
    NotADirectory,
    Invalid(&'static str),
    Other(&'static str),
}

impl SetError {
    pub fn msg(&self) -> &'static str {
        match self {
            SetError::IO(_) => "IO error",
            SetError::File(_) => "Entry error",
            SetError::NotADirectory => "Not a directory",
            SetError::Invalid(msg) => msg,
            SetError::Other(msg) => msg,
        }
    }

    pub fn source(&self) -> Option<RomError> {
        match self {
            SetError::IO(e) => Some(RomError::IO(*e)),
            SetError::File(e) => Some(RomError::File(*e)),
            _ => None,
        }
    }
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        let mut current = self.source();
        while let Some(src) = current {
            write!(f, "\n  caused by: {}", src.msg())?;
            current = src.source();
        }
        Ok(())
    }
}

/// Top-level error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomError {
    IO(RomIOError),
    File(FileError),
    Set(SetError),
    Other(&'static str),
}

impl RomError {
    pub fn msg(&self) -> &'static str {
        match self {
            RomError::IO(e) => e.msg(),
            RomError::File(e) => e.msg(),
            RomError::Set(e) => e.msg(),
            RomError::Other(msg) => msg,
        }
    }

    pub fn source(&self) -> Option<RomError> {
        match self {
            RomError::File(e) => e.source(),
            RomError::Set(e) => e.source(),
            RomError::IO(_) => None,
            RomError::Other(_) => None,
        }
    }
}

impl fmt::Display for RomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        let mut current = self.source();
        while let Some(src) = current {
            write!(f, "\n  caused by: {}", src.msg())?;
            current = src.source();
        }
        Ok(())
    }
}

impl std::error::Error for FileError {}
impl std::error::Error for SetError {}
impl std::error::Error for RomError {}

// === type *Result ===

pub type RomResult<T = ()> = Result<T, RomError>;
pub type FileResult<T = ()> = Result<T, FileError>;
pub type SetResult<T = ()> = Result<T, SetError>;

crate::rom_error_wiring! {
    top => RomError {
        RomIOError : IO,
        FileError  : File,
        SetError   : Set,
    },
    str_into => [
        FileError,
        SetError,
    ],
    sub => {
        RomIOError => [ FileError::IO, SetError::IO ],
        FileError  => [ SetError::File ],
    },
}

impl From<std::io::Error> for FileError {
    fn from(e: std::io::Error) -> Self {
        FileError::IO(RomIOError::from(e))
    }
}

impl From<std::io::Error> for SetError {
    fn from(e: std::io::Error) -> Self {
        SetError::IO(RomIOError::from(e))
    }
}
