//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! Apple II memory subsystem. The CPU sees memory in two ways:
//!
//! - A **flat 64KB image** it may read and write directly. This is the fast
//!   path, valid only while the image mirrors the live bank-switched state
//!   ([`MemoryBus::cache_valid`]).
//! - **I/O dispatch** for `$C000-$CFFF`, where soft switches and slot
//!   firmware live. Every entry receives the program counter, the target
//!   address, the value and direction of the access and the cycles executed
//!   so far in the current quantum.
//!
//! When the image cannot be trusted the CPU switches to the alternate path and
//! routes *every* access, opcode fetches included, through
//! [`MemoryBus::read_alt`] / [`MemoryBus::write_alt`].
//!
//! ## Design Principles
//!
//! The bus follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Writes to ROM pages are ignored
//! - All hooks are synchronous and never block

use crate::devices::IoTable;

/// Size of the 6502 address space.
pub const MEMORY_SIZE: usize = 0x10000;

/// Returns true for addresses handled by I/O dispatch (`$C000-$CFFF`).
#[inline]
pub fn is_io_address(addr: u16) -> bool {
    addr & 0xF000 == 0xC000
}

/// Memory subsystem consumed by the CPU core.
///
/// # Examples
///
/// ```
/// use a2cpu::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write_alt(0x1234, 0x42, 0);
/// assert_eq!(mem.read_alt(0x1234, 0), 0x42);
/// assert_eq!(mem.image()[0x1234], 0x42);
/// ```
pub trait MemoryBus {
    /// The flat 64KB image used by the direct access path.
    fn image(&self) -> &[u8; MEMORY_SIZE];

    /// Mutable view of the flat image.
    fn image_mut(&mut self) -> &mut [u8; MEMORY_SIZE];

    /// Whether the flat image is an accurate cache of machine state.
    ///
    /// Sampled once per execution quantum to choose between the direct and the
    /// alternate access path.
    fn cache_valid(&self) -> bool {
        true
    }

    /// Whether direct stores may land in `page` of the image.
    ///
    /// ROM pages return false; stores to them are dropped.
    fn page_writable(&self, _page: u8) -> bool {
        true
    }

    /// Memory-mapped I/O dispatch for `$C000-$CFFF`.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter at the time of the access
    /// * `addr` - Target address
    /// * `value` - Value being written (0 for reads)
    /// * `write` - True for stores
    /// * `cycles` - Cycles executed so far in the current quantum
    ///
    /// Returns the byte read (ignored for writes).
    fn io_access(&mut self, pc: u16, addr: u16, value: u8, write: bool, cycles: u32) -> u8;

    /// Uniform read used by the alternate access path.
    ///
    /// The default behaves like the direct path; shadowing memory systems
    /// override it.
    fn read_alt(&mut self, addr: u16, cycles: u32) -> u8 {
        if is_io_address(addr) {
            self.io_access(addr, addr, 0, false, cycles)
        } else {
            self.image()[addr as usize]
        }
    }

    /// Uniform write used by the alternate access path.
    fn write_alt(&mut self, addr: u16, value: u8, cycles: u32) {
        if is_io_address(addr) {
            self.io_access(addr, addr, value, true, cycles);
        } else if self.page_writable((addr >> 8) as u8) {
            self.image_mut()[addr as usize] = value;
        }
    }
}

/// 64KB flat memory with an attached I/O dispatch table.
///
/// Addresses outside `$C000-$CFFF` map straight onto the image. Inside that
/// range, addresses with a registered handler are dispatched to it and the rest
/// fall back to the image (so slot firmware stored in the image is readable).
///
/// # Examples
///
/// ```
/// use a2cpu::{Cpu, CpuType, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x0800);
/// memory.load(0x0800, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = Cpu::with_model(memory, CpuType::Cmos65C02);
/// assert_eq!(cpu.pc(), 0x0800);
///
/// cpu.step();
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct FlatMemory {
    data: Box<[u8; MEMORY_SIZE]>,
    io: IoTable,
    cache_valid: bool,
    read_only: [bool; 256],
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero,
    /// no I/O handlers and a valid cache.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
            io: IoTable::new(),
            cache_valid: true,
            read_only: [false; 256],
        }
    }

    /// Copies `bytes` into the image starting at `addr` (wrapping at 64KB).
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            self.data[addr.wrapping_add(offset as u16) as usize] = byte;
        }
    }

    /// Stores a little-endian word in the image.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.data[addr as usize] = lo;
        self.data[addr.wrapping_add(1) as usize] = hi;
    }

    /// Reads a byte straight from the image, bypassing I/O dispatch.
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Marks pages `first..=last` as ROM.
    pub fn protect(&mut self, first: u8, last: u8) {
        for page in first..=last {
            self.read_only[page as usize] = true;
        }
    }

    /// Sets whether the image is an accurate cache of machine state.
    pub fn set_cache_valid(&mut self, valid: bool) {
        self.cache_valid = valid;
    }

    /// The I/O dispatch table.
    pub fn io(&self) -> &IoTable {
        &self.io
    }

    /// Mutable access to the I/O dispatch table, for mapping handlers.
    pub fn io_mut(&mut self) -> &mut IoTable {
        &mut self.io
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn image(&self) -> &[u8; MEMORY_SIZE] {
        &self.data
    }

    fn image_mut(&mut self) -> &mut [u8; MEMORY_SIZE] {
        &mut self.data
    }

    fn cache_valid(&self) -> bool {
        self.cache_valid
    }

    fn page_writable(&self, page: u8) -> bool {
        !self.read_only[page as usize]
    }

    fn io_access(&mut self, pc: u16, addr: u16, value: u8, write: bool, cycles: u32) -> u8 {
        match self.io.dispatch(pc, addr, value, write, cycles) {
            Some(byte) => byte,
            None if write => 0,
            None => self.data[addr as usize],
        }
    }
}
