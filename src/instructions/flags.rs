//! # Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV. Each takes 2 cycles and touches
//! only the named flag.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::Instruction;
use crate::registers::{FLAG_C, FLAG_D, FLAG_I, FLAG_V};

/// Executes a flag set/clear instruction.
///
/// SEI and CLI take effect for the interrupt check that follows this very
/// opcode; there is no one-instruction latency.
pub(crate) fn execute_flag<M: MemoryBus>(cpu: &mut Cpu<M>, instruction: Instruction) {
    let (flag, value) = match instruction {
        Instruction::Clc => (FLAG_C, false),
        Instruction::Sec => (FLAG_C, true),
        Instruction::Cli => (FLAG_I, false),
        Instruction::Sei => (FLAG_I, true),
        Instruction::Cld => (FLAG_D, false),
        Instruction::Sed => (FLAG_D, true),
        Instruction::Clv => (FLAG_V, false),
        _ => return,
    };
    cpu.regs.set_flag(flag, value);
}
