//! # Load and Store Instructions
//!
//! Loads (LDA, LDX, LDY) set N and Z from the loaded value. Stores (STA,
//! STX, STY and the 65C02's STZ) affect no flags and never take the
//! page-crossing penalty.

use crate::access::Variant;
use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::instructions::load;
use crate::memory::MemoryBus;

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    cpu.regs.a = value;
    cpu.regs.set_nz(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    cpu.regs.x = value;
    cpu.regs.set_nz(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    cpu.regs.y = value;
    cpu.regs.set_nz(value);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.write::<V>(operand.addr(), cpu.regs.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.write::<V>(operand.addr(), cpu.regs.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.write::<V>(operand.addr(), cpu.regs.y);
}

/// Executes the STZ (Store Zero) instruction.
pub(crate) fn execute_stz<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.write::<V>(operand.addr(), 0);
}
