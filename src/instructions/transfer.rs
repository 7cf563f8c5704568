//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX update N and Z from the copied value. TXS
//! loads the stack pointer and affects no flags.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::Instruction;

/// Executes a register transfer instruction.
pub(crate) fn execute_transfer<M: MemoryBus>(cpu: &mut Cpu<M>, instruction: Instruction) {
    let regs = &mut cpu.regs;
    match instruction {
        Instruction::Tax => {
            regs.x = regs.a;
            regs.set_nz(regs.x);
        }
        Instruction::Tay => {
            regs.y = regs.a;
            regs.set_nz(regs.y);
        }
        Instruction::Txa => {
            regs.a = regs.x;
            regs.set_nz(regs.a);
        }
        Instruction::Tya => {
            regs.a = regs.y;
            regs.set_nz(regs.a);
        }
        Instruction::Tsx => {
            regs.x = regs.s;
            regs.set_nz(regs.x);
        }
        Instruction::Txs => regs.s = regs.x,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;
    use crate::model::CpuType;

    #[test]
    fn test_txs_leaves_flags_alone() {
        let mut cpu = Cpu::with_model(FlatMemory::new(), CpuType::Mos6502);
        cpu.regs.x = 0x00;
        let before = cpu.regs.p;
        execute_transfer(&mut cpu, Instruction::Txs);
        assert_eq!(cpu.regs.s, 0x00);
        assert_eq!(cpu.regs.p, before);
    }

    #[test]
    fn test_tsx_sets_negative() {
        let mut cpu = Cpu::with_model(FlatMemory::new(), CpuType::Mos6502);
        cpu.regs.s = 0xF0;
        execute_transfer(&mut cpu, Instruction::Tsx);
        assert_eq!(cpu.regs.x, 0xF0);
        assert!(cpu.flag_n());
        assert!(!cpu.flag_z());
    }
}
