//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP and the 65C02's PHX, PHY, PLX, PLY.
//!
//! The stack lives at `$0100-$01FF` and grows downward; the pointer wraps
//! within page one. PHP pushes the status byte with B and the reserved bit
//! set. PLP ignores the pulled B and reserved bits.

use crate::access::Variant;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::registers::{FLAG_B, FLAG_R};

pub(crate) fn execute_pha<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    cpu.push::<V>(cpu.regs.a);
}

pub(crate) fn execute_php<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    cpu.push::<V>(cpu.regs.p | FLAG_B | FLAG_R);
}

pub(crate) fn execute_phx<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    cpu.push::<V>(cpu.regs.x);
}

pub(crate) fn execute_phy<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    cpu.push::<V>(cpu.regs.y);
}

pub(crate) fn execute_pla<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    let value = cpu.pull::<V>();
    cpu.regs.a = value;
    cpu.regs.set_nz(value);
}

pub(crate) fn execute_plx<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    let value = cpu.pull::<V>();
    cpu.regs.x = value;
    cpu.regs.set_nz(value);
}

pub(crate) fn execute_ply<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    let value = cpu.pull::<V>();
    cpu.regs.y = value;
    cpu.regs.set_nz(value);
}

/// Pulls the status byte. Takes effect before the interrupt check that
/// follows this opcode.
pub(crate) fn execute_plp<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>) {
    cpu.regs.p = cpu.pull::<V>() | FLAG_R | FLAG_B;
}
