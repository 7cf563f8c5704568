//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR operate on the accumulator or on memory
//! (read-modify-write). C receives the bit shifted out; N and Z follow the
//! result.

use crate::access::Variant;
use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::instructions::{load, store};
use crate::memory::MemoryBus;
use crate::registers::FLAG_C;

#[inline]
pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) -> u8 {
    let result = value << 1;
    cpu.regs.set_flag(FLAG_C, value & 0x80 != 0);
    cpu.regs.set_nz(result);
    result
}

#[inline]
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) -> u8 {
    let result = value >> 1;
    cpu.regs.set_flag(FLAG_C, value & 0x01 != 0);
    cpu.regs.set_nz(result);
    result
}

#[inline]
pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) -> u8 {
    let result = (value << 1) | cpu.regs.carry();
    cpu.regs.set_flag(FLAG_C, value & 0x80 != 0);
    cpu.regs.set_nz(result);
    result
}

#[inline]
pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) -> u8 {
    let result = (value >> 1) | (cpu.regs.carry() << 7);
    cpu.regs.set_flag(FLAG_C, value & 0x01 != 0);
    cpu.regs.set_nz(result);
    result
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let result = asl(cpu, value);
    store::<M, V>(cpu, operand, result);
}

/// Executes the LSR (Logical Shift Right) instruction.
pub(crate) fn execute_lsr<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let result = lsr(cpu, value);
    store::<M, V>(cpu, operand, result);
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let result = rol(cpu, value);
    store::<M, V>(cpu, operand, result);
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let result = ror(cpu, value);
    store::<M, V>(cpu, operand, result);
}
