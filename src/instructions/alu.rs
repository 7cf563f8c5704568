//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC / SBC: binary and decimal (BCD) add and subtract with carry
//! - AND / ORA / EOR: logical operations
//! - CMP / CPX / CPY: comparisons
//! - BIT: bit test
//! - TSB / TRB: 65C02 test-and-set / test-and-reset bits
//!
//! ## Decimal mode
//!
//! The two models disagree in decimal mode:
//!
//! - **NMOS**: Z reflects the *binary* sum, N and V come from the
//!   intermediate result before the high-nibble adjustment, and invalid BCD
//!   inputs give the undocumented results the silicon gives. Decimal ADC/SBC
//!   take one extra cycle.
//! - **CMOS**: N and Z reflect the final decimal result; V follows the
//!   65C02's own (documented-as-undefined but deterministic) sequence.

use crate::access::{Model, Variant};
use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::instructions::load;
use crate::memory::MemoryBus;
use crate::registers::{FLAG_C, FLAG_D, FLAG_N, FLAG_V, FLAG_Z};

/// Executes the ADC (Add with Carry) instruction.
pub(crate) fn execute_adc<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    if cpu.regs.flag(FLAG_D) && !<V::Model as Model>::CMOS {
        cpu.opcode_cycles += 1;
    }
    adc::<M, V>(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
pub(crate) fn execute_sbc<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    if cpu.regs.flag(FLAG_D) && !<V::Model as Model>::CMOS {
        cpu.opcode_cycles += 1;
    }
    sbc::<M, V>(cpu, value);
}

/// Adds `value` plus carry to A, honouring the D flag and the model's
/// decimal behaviour. Shared with the illegal RRA opcode.
pub(crate) fn adc<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, value: u8) {
    let a = cpu.regs.a;
    let carry = cpu.regs.carry();

    if !cpu.regs.flag(FLAG_D) {
        let sum = a as u16 + value as u16 + carry as u16;
        let result = sum as u8;
        cpu.regs.set_flag(FLAG_C, sum > 0xFF);
        // Overflow when both inputs share a sign the result does not
        cpu.regs
            .set_flag(FLAG_V, (a ^ result) & (value ^ result) & 0x80 != 0);
        cpu.regs.set_nz(result);
        cpu.regs.a = result;
        return;
    }

    if <V::Model as Model>::CMOS {
        let mut lo = (a & 0x0F) as i16 + (value & 0x0F) as i16 + carry as i16;
        if lo >= 0x0A {
            lo = ((lo + 0x06) & 0x0F) + 0x10;
        }

        let signed = (a & 0xF0) as i8 as i16 + (value & 0xF0) as i8 as i16 + lo;
        let mut sum = (a & 0xF0) as i16 + (value & 0xF0) as i16 + lo;
        if sum >= 0xA0 {
            sum += 0x60;
        }

        let result = sum as u8;
        cpu.regs.set_flag(FLAG_V, !(-128..=127).contains(&signed));
        cpu.regs.set_flag(FLAG_C, sum >= 0x100);
        cpu.regs.set_nz(result);
        cpu.regs.a = result;
    } else {
        let (a16, v16, c16) = (a as u16, value as u16, carry as u16);
        let mut tmp = (a16 & 0x0F) + (v16 & 0x0F) + c16;
        if tmp > 0x09 {
            tmp += 0x06;
        }
        tmp = if tmp <= 0x0F {
            (tmp & 0x0F) + (a16 & 0xF0) + (v16 & 0xF0)
        } else {
            (tmp & 0x0F) + (a16 & 0xF0) + (v16 & 0xF0) + 0x10
        };

        cpu.regs.set_flag(FLAG_Z, (a16 + v16 + c16) & 0xFF == 0);
        cpu.regs.set_flag(FLAG_N, tmp & 0x80 != 0);
        cpu.regs
            .set_flag(FLAG_V, (a16 ^ tmp) & 0x80 != 0 && (a16 ^ v16) & 0x80 == 0);
        if tmp & 0x1F0 > 0x90 {
            tmp += 0x60;
        }
        cpu.regs.set_flag(FLAG_C, tmp & 0xFF0 > 0xF0);
        cpu.regs.a = tmp as u8;
    }
}

/// Subtracts `value` and the borrow from A, honouring the D flag and the
/// model's decimal behaviour. Shared with the illegal ISC opcode.
pub(crate) fn sbc<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, value: u8) {
    let a = cpu.regs.a;
    let borrow = 1 - cpu.regs.carry() as u32;

    // Binary difference; wraps above 0xFF when a borrow occurs
    let diff = (a as u32).wrapping_sub(value as u32).wrapping_sub(borrow);
    let binary = diff as u8;
    let overflow = (a ^ binary) & 0x80 != 0 && (a ^ value) & 0x80 != 0;

    if !cpu.regs.flag(FLAG_D) {
        cpu.regs.set_flag(FLAG_C, diff < 0x100);
        cpu.regs.set_flag(FLAG_V, overflow);
        cpu.regs.set_nz(binary);
        cpu.regs.a = binary;
        return;
    }

    if <V::Model as Model>::CMOS {
        let lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow as i16;
        let mut result = a as i16 - value as i16 - borrow as i16;
        if result < 0 {
            result -= 0x60;
        }
        if lo < 0 {
            result -= 0x06;
        }
        let result = result as u8;
        cpu.regs.set_flag(FLAG_C, diff < 0x100);
        cpu.regs.set_flag(FLAG_V, overflow);
        cpu.regs.set_nz(result);
        cpu.regs.a = result;
    } else {
        let (a32, v32) = (a as u32, value as u32);
        let mut tmp = (a32 & 0x0F).wrapping_sub(v32 & 0x0F).wrapping_sub(borrow);
        tmp = if tmp & 0x10 != 0 {
            (tmp.wrapping_sub(6) & 0x0F) | (a32 & 0xF0).wrapping_sub(v32 & 0xF0).wrapping_sub(0x10)
        } else {
            (tmp & 0x0F) | (a32 & 0xF0).wrapping_sub(v32 & 0xF0)
        };
        if tmp & 0x100 != 0 {
            tmp = tmp.wrapping_sub(0x60);
        }
        cpu.regs.set_flag(FLAG_C, diff < 0x100);
        cpu.regs.set_flag(FLAG_V, overflow);
        cpu.regs.set_nz(binary);
        cpu.regs.a = tmp as u8;
    }
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = cpu.regs.a & load::<M, V>(cpu, operand);
    cpu.regs.set_nz(result);
    cpu.regs.a = result;
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = cpu.regs.a | load::<M, V>(cpu, operand);
    cpu.regs.set_nz(result);
    cpu.regs.a = result;
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = cpu.regs.a ^ load::<M, V>(cpu, operand);
    cpu.regs.set_nz(result);
    cpu.regs.a = result;
}

/// Sets C, Z and N as for `register - value` without storing the result.
#[inline]
pub(crate) fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, value: u8) {
    cpu.regs.set_flag(FLAG_C, register >= value);
    cpu.regs.set_nz(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let register = cpu.regs.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let register = cpu.regs.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let register = cpu.regs.y;
    compare(cpu, register, value);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z from `A & M`; N and V copied from bits 7 and 6 of M. The 65C02's
/// immediate form only affects Z.
pub(crate) fn execute_bit<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let immediate = matches!(operand, Operand::Immediate(_));
    let value = load::<M, V>(cpu, operand);
    cpu.regs.set_flag(FLAG_Z, cpu.regs.a & value == 0);
    if !immediate {
        cpu.regs.set_flag(FLAG_N, value & 0x80 != 0);
        cpu.regs.set_flag(FLAG_V, value & 0x40 != 0);
    }
}

/// Executes the TSB (Test and Set Bits) instruction.
pub(crate) fn execute_tsb<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    cpu.regs.set_flag(FLAG_Z, cpu.regs.a & value == 0);
    cpu.write::<V>(operand.addr(), value | cpu.regs.a);
}

/// Executes the TRB (Test and Reset Bits) instruction.
pub(crate) fn execute_trb<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    cpu.regs.set_flag(FLAG_Z, cpu.regs.a & value == 0);
    cpu.write::<V>(operand.addr(), value & !cpu.regs.a);
}
