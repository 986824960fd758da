// SPDX-License-Identifier: MIT

use core::fmt;

/// Result type for byte-view operations.
pub type RomIOResult<T = ()> = core::result::Result<T, RomIOError>;

/// Error type for byte-view operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomIOError {
    Other(&'static str),
    OutOfBounds,
    Invalid(&'static str),
}

impl RomIOError {
    pub fn msg(&self) -> &'static str {
        match self {
            RomIOError::Other(msg) => msg,
            RomIOError::OutOfBounds => "Offset out of bounds",
            RomIOError::Invalid(msg) => msg,
        }
    }
}

impl From<&'static str> for RomIOError {
    #[inline]
    fn from(msg: &'static str) -> Self {
        RomIOError::Other(msg)
    }
}

impl fmt::Display for RomIOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        Ok(())
    }
}

impl std::error::Error for RomIOError {}

impl From<std::io::Error> for RomIOError {
    #[cold]
    #[inline(never)]
    fn from(e: std::io::Error) -> Self {
        // Leak the string to produce a 'static str. Acceptable for error mapping.
        let leaked_str: &'static str = Box::leak(e.to_string().into_boxed_str());
        RomIOError::Other(leaked_str)
    }
}
