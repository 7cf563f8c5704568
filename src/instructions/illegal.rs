//! # Undocumented NMOS Instructions
//!
//! The NMOS 6502 decodes every opcode byte. The undocumented ones fall into
//! a few families:
//!
//! - **Combined read-modify-write**: SLO, RLA, SRE, RRA, DCP, ISC perform a
//!   shift/rotate/increment/decrement on memory and then feed the result to
//!   ORA, AND, EOR, ADC, CMP or SBC.
//! - **Combined load/store**: LAX loads A and X together; SAX stores `A & X`.
//! - **Immediate oddities**: ANC, ALR, ARR, XAA, LXA, AXS.
//! - **Unstable stores**: SHA, SHX, SHY, TAS store a register ANDed with the
//!   high byte of the base address plus one.
//! - **LAS**: `A = X = S = M & S`.
//! - **KIL**: halts the processor until reset.
//!
//! XAA and LXA depend on analog effects on real silicon; the constant used
//! here (`$EE` for LXA, none for XAA) matches the common emulator
//! convention.

use log::trace;

use crate::access::Variant;
use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::instructions::alu::{adc, compare, sbc};
use crate::instructions::load;
use crate::instructions::shifts::{asl, lsr, rol, ror};
use crate::memory::MemoryBus;
use crate::registers::{FLAG_C, FLAG_D, FLAG_N, FLAG_V, FLAG_Z};

/// ASL memory, then ORA with the result.
pub(crate) fn execute_slo<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let result = asl(cpu, value);
    cpu.write::<V>(operand.addr(), result);
    cpu.regs.a |= result;
    cpu.regs.set_nz(cpu.regs.a);
}

/// ROL memory, then AND with the result.
pub(crate) fn execute_rla<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let result = rol(cpu, value);
    cpu.write::<V>(operand.addr(), result);
    cpu.regs.a &= result;
    cpu.regs.set_nz(cpu.regs.a);
}

/// LSR memory, then EOR with the result.
pub(crate) fn execute_sre<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let result = lsr(cpu, value);
    cpu.write::<V>(operand.addr(), result);
    cpu.regs.a ^= result;
    cpu.regs.set_nz(cpu.regs.a);
}

/// ROR memory, then ADC the result. No decimal-mode cycle is added.
pub(crate) fn execute_rra<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let result = ror(cpu, value);
    cpu.write::<V>(operand.addr(), result);
    adc::<M, V>(cpu, result);
}

/// Stores `A & X`.
pub(crate) fn execute_sax<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.write::<V>(operand.addr(), cpu.regs.a & cpu.regs.x);
}

/// Loads A and X with the same value.
pub(crate) fn execute_lax<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    cpu.regs.a = value;
    cpu.regs.x = value;
    cpu.regs.set_nz(value);
}

/// DEC memory, then CMP against the result.
pub(crate) fn execute_dcp<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = load::<M, V>(cpu, operand).wrapping_sub(1);
    cpu.write::<V>(operand.addr(), result);
    let a = cpu.regs.a;
    compare(cpu, a, result);
}

/// INC memory, then SBC the result. No decimal-mode cycle is added.
pub(crate) fn execute_isc<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = load::<M, V>(cpu, operand).wrapping_add(1);
    cpu.write::<V>(operand.addr(), result);
    sbc::<M, V>(cpu, result);
}

/// AND immediate, copying N into C.
pub(crate) fn execute_anc<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.regs.a & load::<M, V>(cpu, operand);
    cpu.regs.a = value;
    cpu.regs.set_nz(value);
    cpu.regs.set_flag(FLAG_C, cpu.regs.a & 0x80 != 0);
}

/// AND immediate, then LSR A.
pub(crate) fn execute_alr<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.regs.a & load::<M, V>(cpu, operand);
    cpu.regs.a = lsr(cpu, value);
}

/// AND immediate, then ROR A with odd flag behaviour.
///
/// In binary mode C is bit 6 of the result and V is bit 6 XOR bit 5. In
/// decimal mode N mirrors the incoming carry and each nibble of the result
/// is BCD-corrected based on the pre-rotate value.
pub(crate) fn execute_arr<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let anded = cpu.regs.a & load::<M, V>(cpu, operand);
    let carry_in = cpu.regs.carry();
    let mut result = (anded >> 1) | (carry_in << 7);

    if cpu.regs.flag(FLAG_D) {
        cpu.regs.set_flag(FLAG_N, carry_in != 0);
        cpu.regs.set_flag(FLAG_Z, result == 0);
        cpu.regs.set_flag(FLAG_V, (result ^ anded) & 0x40 != 0);

        if (anded & 0x0F) + (anded & 0x01) > 0x05 {
            result = (result & 0xF0) | (result.wrapping_add(0x06) & 0x0F);
        }
        let fix_high = (anded as u16 & 0xF0) + (anded as u16 & 0x10) > 0x50;
        if fix_high {
            result = result.wrapping_add(0x60);
        }
        cpu.regs.set_flag(FLAG_C, fix_high);
    } else {
        cpu.regs.set_nz(result);
        cpu.regs.set_flag(FLAG_C, result & 0x40 != 0);
        cpu.regs
            .set_flag(FLAG_V, ((result >> 6) ^ (result >> 5)) & 0x01 != 0);
    }
    cpu.regs.a = result;
}

/// `A = X & imm`.
pub(crate) fn execute_xaa<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.regs.x & load::<M, V>(cpu, operand);
    cpu.regs.a = value;
    cpu.regs.set_nz(value);
}

/// `A = X = (A | $EE) & imm`.
pub(crate) fn execute_lxa<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = (cpu.regs.a | 0xEE) & load::<M, V>(cpu, operand);
    cpu.regs.a = value;
    cpu.regs.x = value;
    cpu.regs.set_nz(value);
}

/// `X = (A & X) - imm`, setting C like CMP.
pub(crate) fn execute_axs<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand);
    let anded = cpu.regs.a & cpu.regs.x;
    cpu.regs.set_flag(FLAG_C, anded >= value);
    cpu.regs.x = anded.wrapping_sub(value);
    cpu.regs.set_nz(cpu.regs.x);
}

/// Stores `value & (H + 1)` where H is the high byte of the unindexed base
/// address.
fn unstable_store<M: MemoryBus, V: Variant>(
    cpu: &mut Cpu<M>,
    operand: Operand,
    index: u8,
    value: u8,
) {
    let addr = operand.addr();
    let [_, high] = addr.wrapping_sub(index as u16).to_le_bytes();
    cpu.write::<V>(addr, value & high.wrapping_add(1));
}

/// Stores `A & X & (H + 1)`.
pub(crate) fn execute_sha<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let (index, value) = (cpu.regs.y, cpu.regs.a & cpu.regs.x);
    unstable_store::<M, V>(cpu, operand, index, value);
}

/// Stores `X & (H + 1)`.
pub(crate) fn execute_shx<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let (index, value) = (cpu.regs.y, cpu.regs.x);
    unstable_store::<M, V>(cpu, operand, index, value);
}

/// Stores `Y & (H + 1)`.
pub(crate) fn execute_shy<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let (index, value) = (cpu.regs.x, cpu.regs.y);
    unstable_store::<M, V>(cpu, operand, index, value);
}

/// `S = A & X`, then stores `S & (H + 1)`.
pub(crate) fn execute_tas<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.regs.s = cpu.regs.a & cpu.regs.x;
    let (index, value) = (cpu.regs.y, cpu.regs.s);
    unstable_store::<M, V>(cpu, operand, index, value);
}

/// `A = X = S = M & S`.
pub(crate) fn execute_las<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = load::<M, V>(cpu, operand) & cpu.regs.s;
    cpu.regs.a = value;
    cpu.regs.x = value;
    cpu.regs.s = value;
    cpu.regs.set_nz(value);
}

/// Halts the processor. PC is left on the KIL opcode so that the jam is
/// visible at the faulting address; only a reset clears it.
pub(crate) fn execute_kil<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.regs.pc = cpu.regs.pc.wrapping_sub(1);
    cpu.regs.jammed = true;
    trace!("KIL at ${:04X}", cpu.regs.pc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{Direct, Nmos, Production};
    use crate::memory::FlatMemory;
    use crate::model::CpuType;

    type NmosDirect = (Nmos, Direct, Production);

    fn cpu() -> Cpu<FlatMemory> {
        Cpu::with_model(FlatMemory::new(), CpuType::Mos6502)
    }

    #[test]
    fn test_arr_binary_flags() {
        let mut cpu = cpu();
        cpu.memory.load(0x0010, &[0xFF]);
        cpu.regs.a = 0xC0;
        cpu.regs.set_flag(FLAG_C, false);
        execute_arr::<_, NmosDirect>(&mut cpu, Operand::Immediate(0x0010));
        // 0xC0 >> 1 = 0x60: bit 6 set, bit 5 set
        assert_eq!(cpu.regs.a, 0x60);
        assert!(cpu.flag_c());
        assert!(!cpu.flag_v());
    }

    #[test]
    fn test_axs_sets_carry_like_compare() {
        let mut cpu = cpu();
        cpu.memory.load(0x0010, &[0x05]);
        cpu.regs.a = 0x0F;
        cpu.regs.x = 0x3C;
        execute_axs::<_, NmosDirect>(&mut cpu, Operand::Immediate(0x0010));
        assert_eq!(cpu.regs.x, 0x07);
        assert!(cpu.flag_c());
    }

    #[test]
    fn test_sha_masks_with_high_byte_plus_one() {
        let mut cpu = cpu();
        cpu.regs.a = 0xFF;
        cpu.regs.x = 0xFF;
        cpu.regs.y = 0x10;
        execute_sha::<_, NmosDirect>(&mut cpu, Operand::Address(0x1210));
        assert_eq!(cpu.memory.peek(0x1210), 0x13);
    }

    #[test]
    fn test_las() {
        let mut cpu = cpu();
        cpu.memory.load(0x2000, &[0xF0]);
        cpu.regs.s = 0x3F;
        execute_las::<_, NmosDirect>(&mut cpu, Operand::Address(0x2000));
        assert_eq!(cpu.regs.a, 0x30);
        assert_eq!(cpu.regs.x, 0x30);
        assert_eq!(cpu.regs.s, 0x30);
    }

    #[test]
    fn test_kil_parks_pc_on_opcode() {
        let mut cpu = cpu();
        cpu.regs.pc = 0x0301;
        execute_kil(&mut cpu);
        assert!(cpu.is_jammed());
        assert_eq!(cpu.pc(), 0x0300);
    }
}
