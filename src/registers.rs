//! # Architectural Register File
//!
//! The 6502 programmer-visible state: accumulator, two index registers, the
//! packed processor status byte, the stack pointer and the program counter,
//! plus the `jammed` latch set by the NMOS halt opcodes.
//!
//! ## Status byte layout (NV-BDIZC)
//!
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: reserved, always reads as 1
//! - Bit 4: B (Break, only meaningful in pushed copies)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

/// Carry flag.
pub const FLAG_C: u8 = 0x01;
/// Zero flag.
pub const FLAG_Z: u8 = 0x02;
/// Interrupt-disable flag.
pub const FLAG_I: u8 = 0x04;
/// Decimal-mode flag.
pub const FLAG_D: u8 = 0x08;
/// Break flag.
pub const FLAG_B: u8 = 0x10;
/// Reserved bit, always 1.
pub const FLAG_R: u8 = 0x20;
/// Overflow flag.
pub const FLAG_V: u8 = 0x40;
/// Negative flag.
pub const FLAG_N: u8 = 0x80;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// 6502 register file.
///
/// The stack pointer is stored as its low byte; the effective stack address is
/// always `0x0100 | s`, so pushes and pulls wrap within page one.
///
/// The reserved and break bits of `p` read as 1. Only pushed copies of the
/// status byte distinguish BRK/PHP (B set) from hardware interrupts (B clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Processor status (see module docs for the bit layout)
    pub p: u8,

    /// Stack pointer low byte
    pub s: u8,

    /// Program counter
    pub pc: u16,

    /// Set by a halt opcode; fetch stops until the next reset
    pub jammed: bool,
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            p: FLAG_R | FLAG_B,
            s: 0xFF,
            pc: 0,
            jammed: false,
        }
    }
}

impl Registers {
    /// Returns true if every bit of `mask` is set in the status byte.
    #[inline]
    pub fn flag(&self, mask: u8) -> bool {
        self.p & mask == mask
    }

    /// Sets or clears the status bits in `mask`.
    #[inline]
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        if on {
            self.p |= mask;
        } else {
            self.p &= !mask;
        }
    }

    /// Updates Z and N from a result byte.
    #[inline]
    pub fn set_nz(&mut self, value: u8) {
        self.set_flag(FLAG_Z, value == 0);
        self.set_flag(FLAG_N, value & 0x80 != 0);
    }

    /// Carry as 0 or 1, for arithmetic.
    #[inline]
    pub fn carry(&self) -> u8 {
        self.p & FLAG_C
    }

    /// Full 9-bit stack address (`0x0100 | s`).
    #[inline]
    pub fn stack_addr(&self) -> u16 {
        STACK_PAGE | self.s as u16
    }
}
