//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, RTI, BRK and NOP.
//!
//! JSR pushes the address of its own last byte (return address minus one),
//! high byte first; RTS pulls it and adds one. BRK skips a padding byte,
//! pushes PC and the status byte with B set, then vectors through `$FFFE`
//! exactly like an IRQ. RTI pulls the status byte and then PC, with no
//! adjustment.

use crate::access::{Model, Variant};
use crate::addressing::Operand;
use crate::cpu::{Cpu, IRQ_VECTOR};
use crate::memory::MemoryBus;
use crate::registers::{FLAG_B, FLAG_D, FLAG_I, FLAG_R};

/// Executes the JMP (Jump) instruction.
///
/// The addressing stage has already dereferenced indirect forms, including
/// the NMOS page-wrap bug in `JMP ($xxFF)`.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.regs.pc = operand.addr();
}

/// Executes the JSR (Jump to Subroutine) instruction.
pub(crate) fn execute_jsr<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let [lo, hi] = cpu.regs.pc.wrapping_sub(1).to_le_bytes();
    cpu.push::<V>(hi);
    cpu.push::<V>(lo);
    cpu.regs.pc = operand.addr();
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    let lo = cpu.pull::<V>();
    let hi = cpu.pull::<V>();
    cpu.regs.pc = u16::from_le_bytes([lo, hi]).wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
pub(crate) fn execute_rti<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    cpu.regs.p = cpu.pull::<V>() | FLAG_R | FLAG_B;
    let lo = cpu.pull::<V>();
    let hi = cpu.pull::<V>();
    cpu.regs.pc = u16::from_le_bytes([lo, hi]);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// The 65C02 also clears D on entry. BRK does not set the
/// interrupt-taken flag reported by [`Cpu::interrupt_in_last_execution`].
pub(crate) fn execute_brk<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    let [lo, hi] = cpu.regs.pc.wrapping_add(1).to_le_bytes();
    cpu.push::<V>(hi);
    cpu.push::<V>(lo);
    cpu.push::<V>(cpu.regs.p | FLAG_B | FLAG_R);
    cpu.regs.p |= FLAG_I;
    if <V::Model as Model>::CMOS {
        cpu.regs.p &= !FLAG_D;
    }
    let lo = cpu.operand_at::<V>(IRQ_VECTOR);
    let hi = cpu.operand_at::<V>(IRQ_VECTOR.wrapping_add(1));
    cpu.regs.pc = u16::from_le_bytes([lo, hi]);
}

/// Executes NOP and its multi-byte variants.
///
/// Forms with a memory operand perform the read (which may touch an I/O
/// soft switch) and discard the value.
pub(crate) fn execute_nop<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    if let Operand::Address(addr) = operand {
        let _ = cpu.read::<V>(addr);
    }
}
