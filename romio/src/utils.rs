// SPDX-License-Identifier: MIT

//! Diagnostic rendering helpers for raw ROM bytes.
//!
//! Nothing here interprets ROM contents; these are display-only mappings
//! used by dump output and entry listings.

use core::fmt;

/// First printable code point in the ASCII table.
pub const PRINTABLE_MIN: u8 = 0x20;

/// DEL, one past the last printable ASCII code point.
pub const ASCII_DEL: u8 = 0x7F;

/// Placeholder shown for bytes with no printable form.
pub const SUBSTITUTE_CHAR: char = '.';

/// Maps a byte to a displayable character.
///
/// Control bytes (below 0x20), DEL, and everything above it render as
/// [`SUBSTITUTE_CHAR`]; printable ASCII passes through unchanged.
#[inline]
pub fn display_byte(b: u8) -> char {
    if b < PRINTABLE_MIN || b >= ASCII_DEL {
        return SUBSTITUTE_CHAR;
    }
    b as char
}

/// Lazy hex+ASCII renderer over a byte slice, 16 bytes per line.
///
/// Line format: `OOOOOOOO: XX XX .. | ascii`. `base` is added to each
/// line offset so a dump of a sub-range lines up with whole-file dumps.
pub struct HexDump<'a> {
    bytes: &'a [u8],
    base: u64,
}

impl<'a> HexDump<'a> {
    #[inline]
    pub fn new(bytes: &'a [u8], base: u64) -> Self {
        Self { bytes, base }
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.bytes.chunks(16).enumerate() {
            let offset = self.base + (i * 16) as u64;
            write!(f, "{offset:08X}: ")?;
            for b in line {
                write!(f, "{b:02X} ")?;
            }
            for _ in line.len()..16 {
                write!(f, "   ")?;
            }
            write!(f, "| ")?;
            for b in line {
                write!(f, "{}", display_byte(*b))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders `bytes` as hex+ASCII lines into a `String`.
pub fn hex_dump(bytes: &[u8], base: u64) -> String {
    HexDump::new(bytes, base).to_string()
}

/// Human-readable byte count, binary units.
pub fn pretty_bytes(n: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut val = n as f64;
    let mut idx = 0usize;
    while val >= 1024.0 && idx + 1 < UNITS.len() {
        val /= 1024.0;
        idx += 1;
    }
    if idx == 0 {
        format!("{n} {}", UNITS[idx])
    } else {
        format!("{val:.1} {}", UNITS[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_byte_exhaustive() {
        for b in 0u8..=255 {
            let c = display_byte(b);
            if (0x20..0x7F).contains(&b) {
                assert_eq!(c, b as char, "printable byte {b:#04X}");
            } else {
                assert_eq!(c, '.', "non-printable byte {b:#04X}");
            }
        }
    }

    #[test]
    fn test_hex_dump_line_format() {
        let dump = hex_dump(b"AB\x00", 0);
        assert_eq!(
            dump,
            "00000000: 41 42 00                                        | AB.\n"
        );
    }

    #[test]
    fn test_hex_dump_base_offset() {
        let bytes = [0u8; 32];
        let dump = hex_dump(&bytes, 0x100);
        let mut lines = dump.lines();
        assert!(lines.next().unwrap().starts_with("00000100: "));
        assert!(lines.next().unwrap().starts_with("00000110: "));
    }

    #[test]
    fn test_pretty_bytes() {
        assert_eq!(pretty_bytes(0), "0 B");
        assert_eq!(pretty_bytes(1023), "1023 B");
        assert_eq!(pretty_bytes(1024), "1.0 KiB");
        assert_eq!(pretty_bytes(1536), "1.5 KiB");
        assert_eq!(pretty_bytes(8 * 1024 * 1024), "8.0 MiB");
    }
}
