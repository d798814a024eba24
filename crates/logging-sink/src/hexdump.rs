//! crates/logging-sink/src/hexdump.rs
//! Hex and ASCII rendering of byte ranges.
//!
//! Rows follow the familiar `hexdump -C` layout:
//!
//! ```text
//! 00000010  41 42 43 44 45 46 47 48  49 4a 4b 4c 4d 4e 4f 50  |ABCDEFGHIJKLMNOP|
//! ```
//!
//! The offset column is absolute: a dump that starts at offset `0x10` of a
//! buffer labels its first row `00000010`, not `00000000`.

use std::fmt;
use std::ops::Range;

/// Number of bytes rendered per row.
pub const BYTES_PER_ROW: usize = 16;

const GROUP_SIZE: usize = BYTES_PER_ROW / 2;

/// Error returned when a requested dump range does not lie within the buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataRangeError {
    start: usize,
    size: usize,
    len: usize,
}

impl DataRangeError {
    /// Returns the requested start offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the requested number of bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the length of the buffer the range was checked against.
    #[must_use]
    pub const fn buffer_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for DataRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data range of {} bytes at offset {} exceeds buffer of {} bytes",
            self.size, self.start, self.len
        )
    }
}

impl std::error::Error for DataRangeError {}

/// Validates that `[start, start + size)` lies within a buffer of `len` bytes.
pub fn checked_range(len: usize, start: usize, size: usize) -> Result<Range<usize>, DataRangeError> {
    match start.checked_add(size) {
        Some(end) if end <= len => Ok(start..end),
        _ => Err(DataRangeError { start, size, len }),
    }
}

/// A byte range prepared for rendering as hex dump rows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HexDump<'a> {
    bytes: &'a [u8],
    base_offset: usize,
}

impl<'a> HexDump<'a> {
    /// Creates a dump of `bytes` whose first byte is labelled `base_offset`.
    #[must_use]
    pub const fn new(bytes: &'a [u8], base_offset: usize) -> Self {
        Self { bytes, base_offset }
    }

    /// Selects `size` bytes of `buffer` starting at `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::HexDump;
    ///
    /// let dump = HexDump::from_range(b"0123456789", 4, 3)?;
    /// assert_eq!(dump.bytes(), b"456");
    /// assert_eq!(dump.base_offset(), 4);
    ///
    /// assert!(HexDump::from_range(b"0123", 2, 3).is_err());
    /// # Ok::<(), logging_sink::DataRangeError>(())
    /// ```
    pub fn from_range(buffer: &'a [u8], start: usize, size: usize) -> Result<Self, DataRangeError> {
        let range = checked_range(buffer.len(), start, size)?;
        Ok(Self::new(&buffer[range], start))
    }

    /// Returns the bytes covered by the dump.
    #[must_use]
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the offset label of the first byte.
    #[must_use]
    pub const fn base_offset(&self) -> usize {
        self.base_offset
    }

    /// Reports whether the dump renders no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns an iterator over the rendered rows.
    #[must_use]
    pub fn rows(&self) -> HexRows<'a> {
        HexRows {
            chunks: self.bytes.chunks(BYTES_PER_ROW),
            offset: self.base_offset,
        }
    }
}

/// Iterator over the rows of a [`HexDump`].
#[derive(Clone, Debug)]
pub struct HexRows<'a> {
    chunks: std::slice::Chunks<'a, u8>,
    offset: usize,
}

impl<'a> Iterator for HexRows<'a> {
    type Item = HexRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.chunks.next()?;
        let row = HexRow {
            offset: self.offset,
            bytes,
        };
        self.offset = self.offset.wrapping_add(bytes.len());
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for HexRows<'_> {}

/// A single row of at most [`BYTES_PER_ROW`] bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HexRow<'a> {
    offset: usize,
    bytes: &'a [u8],
}

impl<'a> HexRow<'a> {
    /// Returns the absolute offset of the row's first byte.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the bytes rendered by this row.
    #[must_use]
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl fmt::Display for HexRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}  ", self.offset)?;

        for index in 0..BYTES_PER_ROW {
            if index == GROUP_SIZE {
                f.write_str(" ")?;
            }
            match self.bytes.get(index) {
                Some(byte) => write!(f, "{byte:02x}")?,
                None => f.write_str("  ")?,
            }
            if index + 1 < BYTES_PER_ROW {
                f.write_str(" ")?;
            }
        }

        f.write_str("  |")?;
        for &byte in self.bytes {
            let shown = if byte.is_ascii_graphic() || byte == b' ' {
                char::from(byte)
            } else {
                '.'
            };
            write!(f, "{shown}")?;
        }
        f.write_str("|")
    }
}
