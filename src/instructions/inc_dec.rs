//! # Increment and Decrement Instructions
//!
//! INC/DEC operate on memory (read-modify-write) or, on the 65C02, on the
//! accumulator. INX, INY, DEX and DEY operate on the index registers. All
//! wrap at 8 bits and update N and Z.

use crate::access::Variant;
use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::instructions::{load, store};
use crate::memory::MemoryBus;

/// Executes the INC (Increment) instruction.
pub(crate) fn execute_inc<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = load::<M, V>(cpu, operand).wrapping_add(1);
    cpu.regs.set_nz(result);
    store::<M, V>(cpu, operand, result);
}

/// Executes the DEC (Decrement) instruction.
pub(crate) fn execute_dec<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = load::<M, V>(cpu, operand).wrapping_sub(1);
    cpu.regs.set_nz(result);
    store::<M, V>(cpu, operand, result);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.set_nz(cpu.regs.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.set_nz(cpu.regs.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.set_nz(cpu.regs.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.set_nz(cpu.regs.y);
}
