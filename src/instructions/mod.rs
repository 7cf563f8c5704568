//! # Instruction Implementations
//!
//! This module contains the implementations of all 6502 and 65C02 operations,
//! organized by category. Each operation is a standalone function that takes
//! the CPU and the already-resolved operand; the decoder has charged the
//! base cycles, so handlers only add conditional extras to
//! `cpu.opcode_cycles`.
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT, TSB, TRB
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS, BRA
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY, STZ
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack**: PHA, PHP, PLA, PLP, PHX, PHY, PLX, PLY
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **illegal**: NMOS undocumented opcodes and the halt opcodes

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod illegal;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::access::Variant;
use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::opcodes::Instruction;

/// Reads the operand value: the accumulator, an immediate byte or a byte of
/// memory. Immediate bytes are operand bytes, not data reads.
#[inline]
pub(crate) fn load<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    match operand {
        Operand::Accumulator => cpu.regs.a,
        Operand::Immediate(addr) => cpu.operand_at::<V>(addr),
        _ => cpu.read::<V>(operand.addr()),
    }
}

/// Writes a result back to the operand: the accumulator or memory.
#[inline]
pub(crate) fn store<M: MemoryBus, V: Variant>(cpu: &mut Cpu<M>, operand: Operand, value: u8) {
    match operand {
        Operand::Accumulator => cpu.regs.a = value,
        _ => cpu.write::<V>(operand.addr(), value),
    }
}

/// Dispatches one decoded instruction.
pub(crate) fn execute<M: MemoryBus, V: Variant>(
    cpu: &mut Cpu<M>,
    instruction: Instruction,
    operand: Operand,
) {
    use Instruction::*;

    match instruction {
        Adc => alu::execute_adc::<M, V>(cpu, operand),
        Sbc => alu::execute_sbc::<M, V>(cpu, operand),
        And => alu::execute_and::<M, V>(cpu, operand),
        Ora => alu::execute_ora::<M, V>(cpu, operand),
        Eor => alu::execute_eor::<M, V>(cpu, operand),
        Cmp => alu::execute_cmp::<M, V>(cpu, operand),
        Cpx => alu::execute_cpx::<M, V>(cpu, operand),
        Cpy => alu::execute_cpy::<M, V>(cpu, operand),
        Bit => alu::execute_bit::<M, V>(cpu, operand),
        Tsb => alu::execute_tsb::<M, V>(cpu, operand),
        Trb => alu::execute_trb::<M, V>(cpu, operand),

        Bcc | Bcs | Beq | Bne | Bmi | Bpl | Bvc | Bvs | Bra => {
            branches::execute_branch(cpu, instruction, operand)
        }

        Asl => shifts::execute_asl::<M, V>(cpu, operand),
        Lsr => shifts::execute_lsr::<M, V>(cpu, operand),
        Rol => shifts::execute_rol::<M, V>(cpu, operand),
        Ror => shifts::execute_ror::<M, V>(cpu, operand),

        Lda => load_store::execute_lda::<M, V>(cpu, operand),
        Ldx => load_store::execute_ldx::<M, V>(cpu, operand),
        Ldy => load_store::execute_ldy::<M, V>(cpu, operand),
        Sta => load_store::execute_sta::<M, V>(cpu, operand),
        Stx => load_store::execute_stx::<M, V>(cpu, operand),
        Sty => load_store::execute_sty::<M, V>(cpu, operand),
        Stz => load_store::execute_stz::<M, V>(cpu, operand),

        Inc => inc_dec::execute_inc::<M, V>(cpu, operand),
        Dec => inc_dec::execute_dec::<M, V>(cpu, operand),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Jmp => control::execute_jmp(cpu, operand),
        Jsr => control::execute_jsr::<M, V>(cpu, operand),
        Rts => control::execute_rts::<M, V>(cpu),
        Rti => control::execute_rti::<M, V>(cpu),
        Brk => control::execute_brk::<M, V>(cpu),
        Nop => control::execute_nop::<M, V>(cpu, operand),

        Pha => stack::execute_pha::<M, V>(cpu),
        Php => stack::execute_php::<M, V>(cpu),
        Pla => stack::execute_pla::<M, V>(cpu),
        Plp => stack::execute_plp::<M, V>(cpu),
        Phx => stack::execute_phx::<M, V>(cpu),
        Phy => stack::execute_phy::<M, V>(cpu),
        Plx => stack::execute_plx::<M, V>(cpu),
        Ply => stack::execute_ply::<M, V>(cpu),

        Clc | Sec | Cli | Sei | Cld | Sed | Clv => flags::execute_flag(cpu, instruction),

        Tax | Tay | Txa | Tya | Tsx | Txs => transfer::execute_transfer(cpu, instruction),

        Slo => illegal::execute_slo::<M, V>(cpu, operand),
        Rla => illegal::execute_rla::<M, V>(cpu, operand),
        Sre => illegal::execute_sre::<M, V>(cpu, operand),
        Rra => illegal::execute_rra::<M, V>(cpu, operand),
        Sax => illegal::execute_sax::<M, V>(cpu, operand),
        Lax => illegal::execute_lax::<M, V>(cpu, operand),
        Dcp => illegal::execute_dcp::<M, V>(cpu, operand),
        Isc => illegal::execute_isc::<M, V>(cpu, operand),
        Anc => illegal::execute_anc::<M, V>(cpu, operand),
        Alr => illegal::execute_alr::<M, V>(cpu, operand),
        Arr => illegal::execute_arr::<M, V>(cpu, operand),
        Xaa => illegal::execute_xaa::<M, V>(cpu, operand),
        Lxa => illegal::execute_lxa::<M, V>(cpu, operand),
        Axs => illegal::execute_axs::<M, V>(cpu, operand),
        Sha => illegal::execute_sha::<M, V>(cpu, operand),
        Shx => illegal::execute_shx::<M, V>(cpu, operand),
        Shy => illegal::execute_shy::<M, V>(cpu, operand),
        Tas => illegal::execute_tas::<M, V>(cpu, operand),
        Las => illegal::execute_las::<M, V>(cpu, operand),
        Kil => illegal::execute_kil(cpu),
    }
}
