//! # Addressing Modes
//!
//! This module defines the addressing modes of the 6502 and 65C02 and the
//! effective-address computation shared by both decoders.
//!
//! Zero-page modes never leave page zero: `$FF,X` with X=1 reads `$00`, and a
//! zero-page pointer at `$FF` takes its high byte from `$00`. Absolute indexed
//! modes carry into the next page and report the crossing so read-class
//! opcodes can charge the extra cycle.

use crate::access::{Model, Variant};
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// 6502/65C02 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY, ZeroPageIndirect
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect,
///   AbsoluteIndexedIndirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wraps within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wraps within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// On the NMOS part a pointer at `$xxFF` takes its high byte from
    /// `$xx00`; the 65C02 reads `$xxFF+1` correctly.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// 65C02 zero page indirect.
    ///
    /// Example: LDA ($40)
    ZeroPageIndirect,

    /// 65C02 absolute indexed indirect. Only used by JMP.
    ///
    /// Example: JMP ($1234,X)
    AbsoluteIndexedIndirect,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::ZeroPageIndirect => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect
            | AddressingMode::AbsoluteIndexedIndirect => 2,
        }
    }
}

/// Resolved operand of one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// No memory operand
    Implied,
    /// The accumulator
    Accumulator,
    /// Address of an immediate operand byte
    Immediate(u16),
    /// Effective address
    Address(u16),
    /// Branch target and whether it lies on a different page than the
    /// following instruction
    Branch { target: u16, crossed: bool },
}

impl Operand {
    /// Effective address, or 0 for register operands.
    #[inline]
    pub(crate) fn addr(self) -> u16 {
        match self {
            Operand::Immediate(addr) | Operand::Address(addr) => addr,
            Operand::Branch { target, .. } => target,
            Operand::Implied | Operand::Accumulator => 0,
        }
    }
}

#[inline]
fn indexed(base: u16, index: u8) -> (u16, bool) {
    let addr = base.wrapping_add(index as u16);
    (addr, (base ^ addr) & 0xFF00 != 0)
}

/// Reads a pointer stored in zero page, wrapping the high byte fetch.
#[inline]
fn zp_pointer<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, zp: u8) -> u16 {
    let lo = cpu.operand_at::<V>(zp as u16);
    let hi = cpu.operand_at::<V>(zp.wrapping_add(1) as u16);
    u16::from_le_bytes([lo, hi])
}

/// Consumes the operand bytes of an instruction and computes its operand.
///
/// `cpu.regs.pc` must point just past the opcode byte; on return it points
/// at the next instruction. The second value reports an indexed page cross.
pub(crate) fn resolve<M: MemoryBus, V: Variant>(
    cpu: &mut Cpu<M>,
    mode: AddressingMode,
) -> (Operand, bool) {
    match mode {
        AddressingMode::Implicit => (Operand::Implied, false),
        AddressingMode::Accumulator => (Operand::Accumulator, false),
        AddressingMode::Immediate => {
            let addr = cpu.regs.pc;
            cpu.regs.pc = addr.wrapping_add(1);
            (Operand::Immediate(addr), false)
        }
        AddressingMode::ZeroPage => {
            let zp = cpu.next_byte::<V>();
            (Operand::Address(zp as u16), false)
        }
        AddressingMode::ZeroPageX => {
            let zp = cpu.next_byte::<V>().wrapping_add(cpu.regs.x);
            (Operand::Address(zp as u16), false)
        }
        AddressingMode::ZeroPageY => {
            let zp = cpu.next_byte::<V>().wrapping_add(cpu.regs.y);
            (Operand::Address(zp as u16), false)
        }
        AddressingMode::Relative => {
            let offset = cpu.next_byte::<V>() as i8;
            let next = cpu.regs.pc;
            let target = next.wrapping_add(offset as u16);
            let crossed = (next ^ target) & 0xFF00 != 0;
            (Operand::Branch { target, crossed }, false)
        }
        AddressingMode::Absolute => (Operand::Address(cpu.next_word::<V>()), false),
        AddressingMode::AbsoluteX => {
            let (addr, crossed) = indexed(cpu.next_word::<V>(), cpu.regs.x);
            (Operand::Address(addr), crossed)
        }
        AddressingMode::AbsoluteY => {
            let (addr, crossed) = indexed(cpu.next_word::<V>(), cpu.regs.y);
            (Operand::Address(addr), crossed)
        }
        AddressingMode::Indirect => {
            let ptr = cpu.next_word::<V>();
            let lo = cpu.operand_at::<V>(ptr);
            let hi_addr = if <V::Model as Model>::CMOS {
                ptr.wrapping_add(1)
            } else {
                (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF)
            };
            let hi = cpu.operand_at::<V>(hi_addr);
            (Operand::Address(u16::from_le_bytes([lo, hi])), false)
        }
        AddressingMode::IndirectX => {
            let zp = cpu.next_byte::<V>().wrapping_add(cpu.regs.x);
            (Operand::Address(zp_pointer::<M, V>(cpu, zp)), false)
        }
        AddressingMode::IndirectY => {
            let zp = cpu.next_byte::<V>();
            let base = zp_pointer::<M, V>(cpu, zp);
            let (addr, crossed) = indexed(base, cpu.regs.y);
            (Operand::Address(addr), crossed)
        }
        AddressingMode::ZeroPageIndirect => {
            let zp = cpu.next_byte::<V>();
            (Operand::Address(zp_pointer::<M, V>(cpu, zp)), false)
        }
        AddressingMode::AbsoluteIndexedIndirect => {
            let ptr = cpu.next_word::<V>().wrapping_add(cpu.regs.x as u16);
            let lo = cpu.operand_at::<V>(ptr);
            let hi = cpu.operand_at::<V>(ptr.wrapping_add(1));
            (Operand::Address(u16::from_le_bytes([lo, hi])), false)
        }
    }
}
