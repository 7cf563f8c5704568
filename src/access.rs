//! # Decoder Strategies
//!
//! The CPU runs one of eight decoder variants, the product of three
//! independent compile-time choices:
//!
//! - [`Model`]: which instruction set (`Nmos` or `Cmos`)
//! - [`Access`]: how memory is reached (`Direct` or `Alternate`)
//! - [`Instrument`]: whether debugger bookkeeping runs (`Production` or
//!   `Debugger`)
//!
//! Each choice is a zero-sized type implementing a trait with associated
//! constants and `#[inline]` functions, so the single generic run loop in
//! the decoder monomorphizes into eight specialised loops with no
//! runtime branching on the strategy.
//!
//! ## Direct vs Alternate access
//!
//! The direct path trusts the flat memory image: opcode and operand bytes and
//! data reads come straight from the image and only `$C000-$CFFF` goes through
//! I/O dispatch (opcode fetches from that range too, since slot firmware may
//! bank-switch on access). Operand bytes are always read from the image.
//!
//! The alternate path sends every access through
//! [`MemoryBus::read_alt`]/[`MemoryBus::write_alt`].

use crate::memory::{is_io_address, MemoryBus, MEMORY_SIZE};
use crate::opcodes::{OpcodeMetadata, CMOS_TABLE, NMOS_TABLE};

/// Instruction-set strategy.
pub trait Model {
    /// True for the 65C02.
    const CMOS: bool;

    /// Opcode metadata for this instruction set.
    fn table() -> &'static [OpcodeMetadata; 256];
}

/// NMOS 6502: documented plus illegal opcodes.
pub struct Nmos;

/// CMOS 65C02: documented opcodes, undefined ones are NOPs.
pub struct Cmos;

impl Model for Nmos {
    const CMOS: bool = false;

    #[inline]
    fn table() -> &'static [OpcodeMetadata; 256] {
        &NMOS_TABLE
    }
}

impl Model for Cmos {
    const CMOS: bool = true;

    #[inline]
    fn table() -> &'static [OpcodeMetadata; 256] {
        &CMOS_TABLE
    }
}

/// Memory-access strategy.
pub trait Access {
    /// True for the alternate (hooked) path.
    const ALTERNATE: bool;

    /// Fetches an opcode byte at `pc`.
    fn fetch<M: MemoryBus>(mem: &mut M, pc: u16, cycles: u32) -> u8;

    /// Fetches an operand byte.
    fn operand<M: MemoryBus>(mem: &mut M, addr: u16, cycles: u32) -> u8;

    /// Data read on behalf of the instruction at `pc`.
    fn read<M: MemoryBus>(mem: &mut M, pc: u16, addr: u16, cycles: u32) -> u8;

    /// Data write on behalf of the instruction at `pc`.
    fn write<M: MemoryBus>(mem: &mut M, pc: u16, addr: u16, value: u8, cycles: u32);
}

/// Fast path over the flat image.
pub struct Direct;

/// Uniform hooked path.
pub struct Alternate;

impl Access for Direct {
    const ALTERNATE: bool = false;

    #[inline]
    fn fetch<M: MemoryBus>(mem: &mut M, pc: u16, cycles: u32) -> u8 {
        if is_io_address(pc) {
            mem.io_access(pc, pc, 0, false, cycles)
        } else {
            mem.image()[pc as usize]
        }
    }

    #[inline]
    fn operand<M: MemoryBus>(mem: &mut M, addr: u16, _cycles: u32) -> u8 {
        mem.image()[addr as usize]
    }

    #[inline]
    fn read<M: MemoryBus>(mem: &mut M, pc: u16, addr: u16, cycles: u32) -> u8 {
        if is_io_address(addr) {
            mem.io_access(pc, addr, 0, false, cycles)
        } else {
            mem.image()[addr as usize]
        }
    }

    #[inline]
    fn write<M: MemoryBus>(mem: &mut M, pc: u16, addr: u16, value: u8, cycles: u32) {
        if is_io_address(addr) {
            mem.io_access(pc, addr, value, true, cycles);
        } else if mem.page_writable((addr >> 8) as u8) {
            mem.image_mut()[addr as usize] = value;
        }
    }
}

impl Access for Alternate {
    const ALTERNATE: bool = true;

    #[inline]
    fn fetch<M: MemoryBus>(mem: &mut M, pc: u16, cycles: u32) -> u8 {
        mem.read_alt(pc, cycles)
    }

    #[inline]
    fn operand<M: MemoryBus>(mem: &mut M, addr: u16, cycles: u32) -> u8 {
        mem.read_alt(addr, cycles)
    }

    #[inline]
    fn read<M: MemoryBus>(mem: &mut M, _pc: u16, addr: u16, cycles: u32) -> u8 {
        mem.read_alt(addr, cycles)
    }

    #[inline]
    fn write<M: MemoryBus>(mem: &mut M, _pc: u16, addr: u16, value: u8, cycles: u32) {
        mem.write_alt(addr, value, cycles)
    }
}

/// Debugger-instrumentation strategy.
pub trait Instrument {
    /// True when the heatmap and per-instruction tracing run.
    const ENABLED: bool;
}

/// No bookkeeping.
pub struct Production;

/// Heatmap counters and per-instruction trace.
pub struct Debugger;

impl Instrument for Production {
    const ENABLED: bool = false;
}

impl Instrument for Debugger {
    const ENABLED: bool = true;
}

/// One decoder variant: a model, an access path and an instrumentation level.
pub trait Variant {
    type Model: Model;
    type Access: Access;
    type Instrument: Instrument;
}

impl<D: Model, A: Access, I: Instrument> Variant for (D, A, I) {
    type Model = D;
    type Access = A;
    type Instrument = I;
}

/// Per-address access counters kept in debugger run modes.
///
/// Storage is allocated on the first recorded access, so production runs
/// never pay for it.
#[derive(Debug, Clone, Default)]
pub struct Heatmap {
    reads: Vec<u32>,
    writes: Vec<u32>,
    executions: Vec<u32>,
}

fn bump(counters: &mut Vec<u32>, addr: u16) {
    if counters.is_empty() {
        counters.resize(MEMORY_SIZE, 0);
    }
    let slot = &mut counters[addr as usize];
    *slot = slot.saturating_add(1);
}

fn count(counters: &[u32], addr: u16) -> u32 {
    counters.get(addr as usize).copied().unwrap_or(0)
}

impl Heatmap {
    pub(crate) fn record_read(&mut self, addr: u16) {
        bump(&mut self.reads, addr);
    }

    pub(crate) fn record_write(&mut self, addr: u16) {
        bump(&mut self.writes, addr);
    }

    pub(crate) fn record_execution(&mut self, addr: u16) {
        bump(&mut self.executions, addr);
    }

    /// Data reads recorded at `addr`.
    pub fn reads(&self, addr: u16) -> u32 {
        count(&self.reads, addr)
    }

    /// Data writes recorded at `addr`.
    pub fn writes(&self, addr: u16) -> u32 {
        count(&self.writes, addr)
    }

    /// Opcode fetches recorded at `addr`.
    pub fn executions(&self, addr: u16) -> u32 {
        count(&self.executions, addr)
    }

    /// Zeroes every counter.
    pub fn clear(&mut self) {
        self.reads.clear();
        self.writes.clear();
        self.executions.clear();
    }
}
