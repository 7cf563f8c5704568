//! # Branch Instructions
//!
//! This module implements the conditional branches (BCC, BCS, BEQ, BNE, BMI,
//! BPL, BVC, BVS) and the 65C02's unconditional BRA.
//!
//! All branches use relative addressing with a signed 8-bit offset; the
//! target has already been computed by the addressing stage. Cycle timing:
//!
//! - 2 cycles if the branch is not taken
//! - 3 cycles if taken to the same page
//! - 4 cycles if taken across a page boundary
//!
//! No flags are affected.

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::Instruction;
use crate::registers::{FLAG_C, FLAG_N, FLAG_V, FLAG_Z};

/// Whether `instruction` branches given the status byte `p`.
fn condition(instruction: Instruction, p: u8) -> bool {
    match instruction {
        Instruction::Bcc => p & FLAG_C == 0,
        Instruction::Bcs => p & FLAG_C != 0,
        Instruction::Bne => p & FLAG_Z == 0,
        Instruction::Beq => p & FLAG_Z != 0,
        Instruction::Bpl => p & FLAG_N == 0,
        Instruction::Bmi => p & FLAG_N != 0,
        Instruction::Bvc => p & FLAG_V == 0,
        Instruction::Bvs => p & FLAG_V != 0,
        Instruction::Bra => true,
        _ => false,
    }
}

/// Executes a branch instruction.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    instruction: Instruction,
    operand: Operand,
) {
    let Operand::Branch { target, crossed } = operand else {
        return;
    };

    if condition(instruction, cpu.regs.p) {
        cpu.regs.pc = target;
        cpu.opcode_cycles += 1 + u32::from(crossed);
    }
}
