//! Memory-mapped I/O dispatch for the Apple II `$C000-$CFFF` region.
//!
//! Soft switches, slot I/O and slot firmware all live in this 4KB window. The
//! window is split into 256 entries of 16 bytes each, indexed by
//! `(addr >> 4) & 0xFF`:
//!
//! - `$C000-$C0FF`: 16 entries of built-in soft switches and slot I/O
//! - `$C100-$CFFF`: slot ROM and expansion ROM, 16 entries per page
//!
//! # Architecture
//!
//! - **IoHandler trait**: one hardware device's view of its registers
//! - **IoTable**: routes each access to the handler registered for its entry
//!
//! # Example
//!
//! ```rust
//! use a2cpu::{FlatMemory, IoHandler, MemoryBus};
//!
//! /// Keyboard latch at $C000, strobe clear at $C010
//! struct Keyboard {
//!     latch: u8,
//! }
//!
//! impl IoHandler for Keyboard {
//!     fn access(&mut self, _pc: u16, addr: u16, _value: u8, _write: bool, _cycles: u32) -> u8 {
//!         if addr & 0xFFF0 == 0xC010 {
//!             self.latch &= 0x7F;
//!         }
//!         self.latch
//!     }
//! }
//!
//! let mut memory = FlatMemory::new();
//! memory
//!     .io_mut()
//!     .map(0xC000, 0xC01F, Box::new(Keyboard { latch: 0xC1 }))
//!     .unwrap();
//!
//! assert_eq!(memory.read_alt(0xC000, 0), 0xC1);
//! assert_eq!(memory.read_alt(0xC010, 0), 0x41);
//! ```

pub mod interrupts;

use thiserror::Error;

/// Number of 16-byte dispatch entries covering `$C000-$CFFF`.
pub const IO_ENTRIES: usize = 256;

/// Abstract interface for a device reachable through I/O dispatch.
///
/// Handlers receive absolute addresses. Reads and writes share one entry
/// point because most Apple II soft switches react to *any* access.
pub trait IoHandler {
    /// Performs one access.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the instruction making the access
    /// * `addr` - Absolute target address in `$C000-$CFFF`
    /// * `value` - Byte being written (0 for reads)
    /// * `write` - True for stores
    /// * `cycles` - Cycles executed so far in the current quantum
    ///
    /// # Returns
    ///
    /// The byte placed on the data bus (ignored for writes)
    fn access(&mut self, pc: u16, addr: u16, value: u8, write: bool, cycles: u32) -> u8;
}

/// Error returned when an I/O handler cannot be mapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoMapError {
    /// Range is not inside `$C000-$CFFF`.
    #[error("I/O range ${first:04X}-${last:04X} is outside $C000-$CFFF")]
    OutOfRange {
        /// First address of the rejected range
        first: u16,
        /// Last address of the rejected range
        last: u16,
    },

    /// Range does not start and end on 16-byte entry boundaries.
    #[error("I/O range ${first:04X}-${last:04X} is not aligned to 16-byte entries")]
    Misaligned {
        /// First address of the rejected range
        first: u16,
        /// Last address of the rejected range
        last: u16,
    },

    /// Range overlaps an entry that already has a handler.
    #[error("I/O entry at ${addr:04X} is already mapped")]
    Overlap {
        /// Base address of the first conflicting entry
        addr: u16,
    },
}

/// 256-entry I/O dispatch table.
pub struct IoTable {
    handlers: Vec<Option<Box<dyn IoHandler>>>,
    entries: [Option<usize>; IO_ENTRIES],
}

impl IoTable {
    /// Creates an empty table. Every entry is unmapped.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            entries: [None; IO_ENTRIES],
        }
    }

    #[inline]
    fn entry(addr: u16) -> usize {
        ((addr >> 4) & 0xFF) as usize
    }

    /// Registers `handler` for every entry in `first..=last`.
    ///
    /// `first` must be 16-byte aligned and `last` must end an entry
    /// (low nibble `F`). Registration fails if any entry in the range
    /// already has a handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use a2cpu::{IoHandler, IoMapError, IoTable};
    ///
    /// struct Null;
    /// impl IoHandler for Null {
    ///     fn access(&mut self, _: u16, _: u16, _: u8, _: bool, _: u32) -> u8 { 0 }
    /// }
    ///
    /// let mut table = IoTable::new();
    /// table.map(0xC600, 0xC6FF, Box::new(Null)).unwrap();
    ///
    /// // This will fail (overlap)
    /// let result = table.map(0xC6F0, 0xC6FF, Box::new(Null));
    /// assert_eq!(result, Err(IoMapError::Overlap { addr: 0xC6F0 }));
    /// ```
    pub fn map(
        &mut self,
        first: u16,
        last: u16,
        handler: Box<dyn IoHandler>,
    ) -> Result<(), IoMapError> {
        if first < 0xC000 || last > 0xCFFF || first > last {
            return Err(IoMapError::OutOfRange { first, last });
        }
        if first & 0x000F != 0 || last & 0x000F != 0x000F {
            return Err(IoMapError::Misaligned { first, last });
        }

        let range = Self::entry(first)..=Self::entry(last);
        if let Some(taken) = range.clone().find(|&e| self.entries[e].is_some()) {
            return Err(IoMapError::Overlap {
                addr: 0xC000 | ((taken as u16) << 4),
            });
        }

        let index = match self.handlers.iter().position(Option::is_none) {
            Some(free) => {
                self.handlers[free] = Some(handler);
                free
            }
            None => {
                self.handlers.push(Some(handler));
                self.handlers.len() - 1
            }
        };
        for e in range {
            self.entries[e] = Some(index);
        }
        Ok(())
    }

    /// Clears the entries covering `first..=last`.
    ///
    /// A handler is dropped once no entry refers to it, and its slot is
    /// reused by the next [`map`](Self::map).
    pub fn unmap(&mut self, first: u16, last: u16) {
        let first = first.clamp(0xC000, 0xCFFF);
        let last = last.clamp(0xC000, 0xCFFF);
        if first > last {
            return;
        }
        for e in Self::entry(first)..=Self::entry(last) {
            if let Some(index) = self.entries[e].take() {
                if !self.entries.contains(&Some(index)) {
                    self.handlers[index] = None;
                }
            }
        }
    }

    /// Returns true if `addr` has a registered handler.
    pub fn is_mapped(&self, addr: u16) -> bool {
        crate::memory::is_io_address(addr) && self.entries[Self::entry(addr)].is_some()
    }

    /// Routes one access to its handler.
    ///
    /// Returns `None` when the address is outside the I/O window or its entry
    /// is unmapped.
    pub fn dispatch(
        &mut self,
        pc: u16,
        addr: u16,
        value: u8,
        write: bool,
        cycles: u32,
    ) -> Option<u8> {
        if !crate::memory::is_io_address(addr) {
            return None;
        }
        let index = self.entries[Self::entry(addr)]?;
        let handler = self.handlers.get_mut(index)?.as_mut()?;
        Some(handler.access(pc, addr, value, write, cycles))
    }
}

impl Default for IoTable {
    fn default() -> Self {
        Self::new()
    }
}
