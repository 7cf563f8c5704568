//! # Opcode Metadata Tables
//!
//! This module contains the two 256-entry opcode metadata tables that serve as
//! the single source of truth for decoding: [`NMOS_TABLE`] for the 6502 and
//! [`CMOS_TABLE`] for the 65C02.
//!
//! The NMOS table covers:
//! - **151 documented instructions**
//! - **105 illegal opcodes**, including the twelve halt (`KIL`) opcodes that
//!   jam the processor
//!
//! The CMOS table covers the 65C02 instruction set. Its undefined opcodes are
//! NOPs: the `$x2` column takes two bytes, `$44`/`$x4`/`$5C`/`$DC`/`$FC` read an
//! operand, and the `$x3`/`$x7`/`$xB`/`$xF` columns are one-byte, one-cycle
//! NOPs.
//!
//! Each opcode entry includes:
//! - Instruction
//! - Addressing mode
//! - Base cycle cost
//! - Instruction size in bytes
//! - Whether an indexed page cross adds a cycle
//! - Whether the opcode is undocumented

use crate::addressing::AddressingMode::{self, *};
use self::Instruction::*;

/// Every operation either decoder can execute.
///
/// Mnemonics follow common 6502 usage for the illegal NMOS opcodes
/// (`SLO`, `RLA`, `SRE`, `RRA`, `SAX`, `LAX`, `DCP`, `ISC`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc,
    Alr,
    Anc,
    And,
    Arr,
    Asl,
    Axs,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Bra,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dcp,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Isc,
    Jmp,
    Jsr,
    Kil,
    Las,
    Lax,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Lxa,
    Nop,
    Ora,
    Pha,
    Php,
    Phx,
    Phy,
    Pla,
    Plp,
    Plx,
    Ply,
    Rla,
    Rol,
    Ror,
    Rra,
    Rti,
    Rts,
    Sax,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sha,
    Shx,
    Shy,
    Slo,
    Sre,
    Sta,
    Stx,
    Sty,
    Stz,
    Tas,
    Tax,
    Tay,
    Trb,
    Tsb,
    Tsx,
    Txa,
    Txs,
    Tya,
    Xaa,
}

impl Instruction {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Adc => "ADC",
            Instruction::Alr => "ALR",
            Instruction::Anc => "ANC",
            Instruction::And => "AND",
            Instruction::Arr => "ARR",
            Instruction::Asl => "ASL",
            Instruction::Axs => "AXS",
            Instruction::Bcc => "BCC",
            Instruction::Bcs => "BCS",
            Instruction::Beq => "BEQ",
            Instruction::Bit => "BIT",
            Instruction::Bmi => "BMI",
            Instruction::Bne => "BNE",
            Instruction::Bpl => "BPL",
            Instruction::Bra => "BRA",
            Instruction::Brk => "BRK",
            Instruction::Bvc => "BVC",
            Instruction::Bvs => "BVS",
            Instruction::Clc => "CLC",
            Instruction::Cld => "CLD",
            Instruction::Cli => "CLI",
            Instruction::Clv => "CLV",
            Instruction::Cmp => "CMP",
            Instruction::Cpx => "CPX",
            Instruction::Cpy => "CPY",
            Instruction::Dcp => "DCP",
            Instruction::Dec => "DEC",
            Instruction::Dex => "DEX",
            Instruction::Dey => "DEY",
            Instruction::Eor => "EOR",
            Instruction::Inc => "INC",
            Instruction::Inx => "INX",
            Instruction::Iny => "INY",
            Instruction::Isc => "ISC",
            Instruction::Jmp => "JMP",
            Instruction::Jsr => "JSR",
            Instruction::Kil => "KIL",
            Instruction::Las => "LAS",
            Instruction::Lax => "LAX",
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Lsr => "LSR",
            Instruction::Lxa => "LXA",
            Instruction::Nop => "NOP",
            Instruction::Ora => "ORA",
            Instruction::Pha => "PHA",
            Instruction::Php => "PHP",
            Instruction::Phx => "PHX",
            Instruction::Phy => "PHY",
            Instruction::Pla => "PLA",
            Instruction::Plp => "PLP",
            Instruction::Plx => "PLX",
            Instruction::Ply => "PLY",
            Instruction::Rla => "RLA",
            Instruction::Rol => "ROL",
            Instruction::Ror => "ROR",
            Instruction::Rra => "RRA",
            Instruction::Rti => "RTI",
            Instruction::Rts => "RTS",
            Instruction::Sax => "SAX",
            Instruction::Sbc => "SBC",
            Instruction::Sec => "SEC",
            Instruction::Sed => "SED",
            Instruction::Sei => "SEI",
            Instruction::Sha => "SHA",
            Instruction::Shx => "SHX",
            Instruction::Shy => "SHY",
            Instruction::Slo => "SLO",
            Instruction::Sre => "SRE",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Stz => "STZ",
            Instruction::Tas => "TAS",
            Instruction::Tax => "TAX",
            Instruction::Tay => "TAY",
            Instruction::Trb => "TRB",
            Instruction::Tsb => "TSB",
            Instruction::Tsx => "TSX",
            Instruction::Txa => "TXA",
            Instruction::Txs => "TXS",
            Instruction::Tya => "TYA",
            Instruction::Xaa => "XAA",
        }
    }
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use a2cpu::{AddressingMode, Instruction, CMOS_TABLE, NMOS_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &NMOS_TABLE[0xA9];
/// assert_eq!(lda_imm.instruction.mnemonic(), "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// // $B2 jams the 6502 but is LDA (zp) on the 65C02
/// assert_eq!(NMOS_TABLE[0xB2].instruction, Instruction::Kil);
/// assert_eq!(CMOS_TABLE[0xB2].instruction, Instruction::Lda);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Operation performed.
    pub instruction: Instruction,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost, before page-cross, branch and decimal-mode additions.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether an indexed page cross adds one cycle.
    ///
    /// Set for read-class opcodes on both models and for the 65C02's
    /// absolute,X read-modify-write opcodes, whose base cost is one below the
    /// NMOS cost.
    pub page_penalty: bool,

    /// Whether the opcode is undocumented.
    pub illegal: bool,
}

const fn entry(
    instruction: Instruction,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    page_penalty: bool,
    illegal: bool,
) -> OpcodeMetadata {
    OpcodeMetadata {
        instruction,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
        page_penalty,
        illegal,
    }
}

const fn op(i: Instruction, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
    entry(i, mode, cycles, false, false)
}

const fn op_x(i: Instruction, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
    entry(i, mode, cycles, true, false)
}

const fn il(i: Instruction, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
    entry(i, mode, cycles, false, true)
}

const fn il_x(i: Instruction, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
    entry(i, mode, cycles, true, true)
}

/// NMOS 6502 opcode table, indexed by opcode byte.
#[rustfmt::skip]
pub static NMOS_TABLE: [OpcodeMetadata; 256] = [
    op(Brk, Implicit, 7), // 0x00
    op(Ora, IndirectX, 6), // 0x01
    il(Kil, Implicit, 2), // 0x02
    il(Slo, IndirectX, 8), // 0x03
    il(Nop, ZeroPage, 3), // 0x04
    op(Ora, ZeroPage, 3), // 0x05
    op(Asl, ZeroPage, 5), // 0x06
    il(Slo, ZeroPage, 5), // 0x07
    op(Php, Implicit, 3), // 0x08
    op(Ora, Immediate, 2), // 0x09
    op(Asl, Accumulator, 2), // 0x0A
    il(Anc, Immediate, 2), // 0x0B
    il(Nop, Absolute, 4), // 0x0C
    op(Ora, Absolute, 4), // 0x0D
    op(Asl, Absolute, 6), // 0x0E
    il(Slo, Absolute, 6), // 0x0F
    op(Bpl, Relative, 2), // 0x10
    op_x(Ora, IndirectY, 5), // 0x11
    il(Kil, Implicit, 2), // 0x12
    il(Slo, IndirectY, 8), // 0x13
    il(Nop, ZeroPageX, 4), // 0x14
    op(Ora, ZeroPageX, 4), // 0x15
    op(Asl, ZeroPageX, 6), // 0x16
    il(Slo, ZeroPageX, 6), // 0x17
    op(Clc, Implicit, 2), // 0x18
    op_x(Ora, AbsoluteY, 4), // 0x19
    il(Nop, Implicit, 2), // 0x1A
    il(Slo, AbsoluteY, 7), // 0x1B
    il_x(Nop, AbsoluteX, 4), // 0x1C
    op_x(Ora, AbsoluteX, 4), // 0x1D
    op(Asl, AbsoluteX, 7), // 0x1E
    il(Slo, AbsoluteX, 7), // 0x1F
    op(Jsr, Absolute, 6), // 0x20
    op(And, IndirectX, 6), // 0x21
    il(Kil, Implicit, 2), // 0x22
    il(Rla, IndirectX, 8), // 0x23
    op(Bit, ZeroPage, 3), // 0x24
    op(And, ZeroPage, 3), // 0x25
    op(Rol, ZeroPage, 5), // 0x26
    il(Rla, ZeroPage, 5), // 0x27
    op(Plp, Implicit, 4), // 0x28
    op(And, Immediate, 2), // 0x29
    op(Rol, Accumulator, 2), // 0x2A
    il(Anc, Immediate, 2), // 0x2B
    op(Bit, Absolute, 4), // 0x2C
    op(And, Absolute, 4), // 0x2D
    op(Rol, Absolute, 6), // 0x2E
    il(Rla, Absolute, 6), // 0x2F
    op(Bmi, Relative, 2), // 0x30
    op_x(And, IndirectY, 5), // 0x31
    il(Kil, Implicit, 2), // 0x32
    il(Rla, IndirectY, 8), // 0x33
    il(Nop, ZeroPageX, 4), // 0x34
    op(And, ZeroPageX, 4), // 0x35
    op(Rol, ZeroPageX, 6), // 0x36
    il(Rla, ZeroPageX, 6), // 0x37
    op(Sec, Implicit, 2), // 0x38
    op_x(And, AbsoluteY, 4), // 0x39
    il(Nop, Implicit, 2), // 0x3A
    il(Rla, AbsoluteY, 7), // 0x3B
    il_x(Nop, AbsoluteX, 4), // 0x3C
    op_x(And, AbsoluteX, 4), // 0x3D
    op(Rol, AbsoluteX, 7), // 0x3E
    il(Rla, AbsoluteX, 7), // 0x3F
    op(Rti, Implicit, 6), // 0x40
    op(Eor, IndirectX, 6), // 0x41
    il(Kil, Implicit, 2), // 0x42
    il(Sre, IndirectX, 8), // 0x43
    il(Nop, ZeroPage, 3), // 0x44
    op(Eor, ZeroPage, 3), // 0x45
    op(Lsr, ZeroPage, 5), // 0x46
    il(Sre, ZeroPage, 5), // 0x47
    op(Pha, Implicit, 3), // 0x48
    op(Eor, Immediate, 2), // 0x49
    op(Lsr, Accumulator, 2), // 0x4A
    il(Alr, Immediate, 2), // 0x4B
    op(Jmp, Absolute, 3), // 0x4C
    op(Eor, Absolute, 4), // 0x4D
    op(Lsr, Absolute, 6), // 0x4E
    il(Sre, Absolute, 6), // 0x4F
    op(Bvc, Relative, 2), // 0x50
    op_x(Eor, IndirectY, 5), // 0x51
    il(Kil, Implicit, 2), // 0x52
    il(Sre, IndirectY, 8), // 0x53
    il(Nop, ZeroPageX, 4), // 0x54
    op(Eor, ZeroPageX, 4), // 0x55
    op(Lsr, ZeroPageX, 6), // 0x56
    il(Sre, ZeroPageX, 6), // 0x57
    op(Cli, Implicit, 2), // 0x58
    op_x(Eor, AbsoluteY, 4), // 0x59
    il(Nop, Implicit, 2), // 0x5A
    il(Sre, AbsoluteY, 7), // 0x5B
    il_x(Nop, AbsoluteX, 4), // 0x5C
    op_x(Eor, AbsoluteX, 4), // 0x5D
    op(Lsr, AbsoluteX, 7), // 0x5E
    il(Sre, AbsoluteX, 7), // 0x5F
    op(Rts, Implicit, 6), // 0x60
    op(Adc, IndirectX, 6), // 0x61
    il(Kil, Implicit, 2), // 0x62
    il(Rra, IndirectX, 8), // 0x63
    il(Nop, ZeroPage, 3), // 0x64
    op(Adc, ZeroPage, 3), // 0x65
    op(Ror, ZeroPage, 5), // 0x66
    il(Rra, ZeroPage, 5), // 0x67
    op(Pla, Implicit, 4), // 0x68
    op(Adc, Immediate, 2), // 0x69
    op(Ror, Accumulator, 2), // 0x6A
    il(Arr, Immediate, 2), // 0x6B
    op(Jmp, Indirect, 5), // 0x6C
    op(Adc, Absolute, 4), // 0x6D
    op(Ror, Absolute, 6), // 0x6E
    il(Rra, Absolute, 6), // 0x6F
    op(Bvs, Relative, 2), // 0x70
    op_x(Adc, IndirectY, 5), // 0x71
    il(Kil, Implicit, 2), // 0x72
    il(Rra, IndirectY, 8), // 0x73
    il(Nop, ZeroPageX, 4), // 0x74
    op(Adc, ZeroPageX, 4), // 0x75
    op(Ror, ZeroPageX, 6), // 0x76
    il(Rra, ZeroPageX, 6), // 0x77
    op(Sei, Implicit, 2), // 0x78
    op_x(Adc, AbsoluteY, 4), // 0x79
    il(Nop, Implicit, 2), // 0x7A
    il(Rra, AbsoluteY, 7), // 0x7B
    il_x(Nop, AbsoluteX, 4), // 0x7C
    op_x(Adc, AbsoluteX, 4), // 0x7D
    op(Ror, AbsoluteX, 7), // 0x7E
    il(Rra, AbsoluteX, 7), // 0x7F
    il(Nop, Immediate, 2), // 0x80
    op(Sta, IndirectX, 6), // 0x81
    il(Nop, Immediate, 2), // 0x82
    il(Sax, IndirectX, 6), // 0x83
    op(Sty, ZeroPage, 3), // 0x84
    op(Sta, ZeroPage, 3), // 0x85
    op(Stx, ZeroPage, 3), // 0x86
    il(Sax, ZeroPage, 3), // 0x87
    op(Dey, Implicit, 2), // 0x88
    il(Nop, Immediate, 2), // 0x89
    op(Txa, Implicit, 2), // 0x8A
    il(Xaa, Immediate, 2), // 0x8B
    op(Sty, Absolute, 4), // 0x8C
    op(Sta, Absolute, 4), // 0x8D
    op(Stx, Absolute, 4), // 0x8E
    il(Sax, Absolute, 4), // 0x8F
    op(Bcc, Relative, 2), // 0x90
    op(Sta, IndirectY, 6), // 0x91
    il(Kil, Implicit, 2), // 0x92
    il(Sha, IndirectY, 6), // 0x93
    op(Sty, ZeroPageX, 4), // 0x94
    op(Sta, ZeroPageX, 4), // 0x95
    op(Stx, ZeroPageY, 4), // 0x96
    il(Sax, ZeroPageY, 4), // 0x97
    op(Tya, Implicit, 2), // 0x98
    op(Sta, AbsoluteY, 5), // 0x99
    op(Txs, Implicit, 2), // 0x9A
    il(Tas, AbsoluteY, 5), // 0x9B
    il(Shy, AbsoluteX, 5), // 0x9C
    op(Sta, AbsoluteX, 5), // 0x9D
    il(Shx, AbsoluteY, 5), // 0x9E
    il(Sha, AbsoluteY, 5), // 0x9F
    op(Ldy, Immediate, 2), // 0xA0
    op(Lda, IndirectX, 6), // 0xA1
    op(Ldx, Immediate, 2), // 0xA2
    il(Lax, IndirectX, 6), // 0xA3
    op(Ldy, ZeroPage, 3), // 0xA4
    op(Lda, ZeroPage, 3), // 0xA5
    op(Ldx, ZeroPage, 3), // 0xA6
    il(Lax, ZeroPage, 3), // 0xA7
    op(Tay, Implicit, 2), // 0xA8
    op(Lda, Immediate, 2), // 0xA9
    op(Tax, Implicit, 2), // 0xAA
    il(Lxa, Immediate, 2), // 0xAB
    op(Ldy, Absolute, 4), // 0xAC
    op(Lda, Absolute, 4), // 0xAD
    op(Ldx, Absolute, 4), // 0xAE
    il(Lax, Absolute, 4), // 0xAF
    op(Bcs, Relative, 2), // 0xB0
    op_x(Lda, IndirectY, 5), // 0xB1
    il(Kil, Implicit, 2), // 0xB2
    il_x(Lax, IndirectY, 5), // 0xB3
    op(Ldy, ZeroPageX, 4), // 0xB4
    op(Lda, ZeroPageX, 4), // 0xB5
    op(Ldx, ZeroPageY, 4), // 0xB6
    il(Lax, ZeroPageY, 4), // 0xB7
    op(Clv, Implicit, 2), // 0xB8
    op_x(Lda, AbsoluteY, 4), // 0xB9
    op(Tsx, Implicit, 2), // 0xBA
    il_x(Las, AbsoluteY, 4), // 0xBB
    op_x(Ldy, AbsoluteX, 4), // 0xBC
    op_x(Lda, AbsoluteX, 4), // 0xBD
    op_x(Ldx, AbsoluteY, 4), // 0xBE
    il_x(Lax, AbsoluteY, 4), // 0xBF
    op(Cpy, Immediate, 2), // 0xC0
    op(Cmp, IndirectX, 6), // 0xC1
    il(Nop, Immediate, 2), // 0xC2
    il(Dcp, IndirectX, 8), // 0xC3
    op(Cpy, ZeroPage, 3), // 0xC4
    op(Cmp, ZeroPage, 3), // 0xC5
    op(Dec, ZeroPage, 5), // 0xC6
    il(Dcp, ZeroPage, 5), // 0xC7
    op(Iny, Implicit, 2), // 0xC8
    op(Cmp, Immediate, 2), // 0xC9
    op(Dex, Implicit, 2), // 0xCA
    il(Axs, Immediate, 2), // 0xCB
    op(Cpy, Absolute, 4), // 0xCC
    op(Cmp, Absolute, 4), // 0xCD
    op(Dec, Absolute, 6), // 0xCE
    il(Dcp, Absolute, 6), // 0xCF
    op(Bne, Relative, 2), // 0xD0
    op_x(Cmp, IndirectY, 5), // 0xD1
    il(Kil, Implicit, 2), // 0xD2
    il(Dcp, IndirectY, 8), // 0xD3
    il(Nop, ZeroPageX, 4), // 0xD4
    op(Cmp, ZeroPageX, 4), // 0xD5
    op(Dec, ZeroPageX, 6), // 0xD6
    il(Dcp, ZeroPageX, 6), // 0xD7
    op(Cld, Implicit, 2), // 0xD8
    op_x(Cmp, AbsoluteY, 4), // 0xD9
    il(Nop, Implicit, 2), // 0xDA
    il(Dcp, AbsoluteY, 7), // 0xDB
    il_x(Nop, AbsoluteX, 4), // 0xDC
    op_x(Cmp, AbsoluteX, 4), // 0xDD
    op(Dec, AbsoluteX, 7), // 0xDE
    il(Dcp, AbsoluteX, 7), // 0xDF
    op(Cpx, Immediate, 2), // 0xE0
    op(Sbc, IndirectX, 6), // 0xE1
    il(Nop, Immediate, 2), // 0xE2
    il(Isc, IndirectX, 8), // 0xE3
    op(Cpx, ZeroPage, 3), // 0xE4
    op(Sbc, ZeroPage, 3), // 0xE5
    op(Inc, ZeroPage, 5), // 0xE6
    il(Isc, ZeroPage, 5), // 0xE7
    op(Inx, Implicit, 2), // 0xE8
    op(Sbc, Immediate, 2), // 0xE9
    op(Nop, Implicit, 2), // 0xEA
    il(Sbc, Immediate, 2), // 0xEB
    op(Cpx, Absolute, 4), // 0xEC
    op(Sbc, Absolute, 4), // 0xED
    op(Inc, Absolute, 6), // 0xEE
    il(Isc, Absolute, 6), // 0xEF
    op(Beq, Relative, 2), // 0xF0
    op_x(Sbc, IndirectY, 5), // 0xF1
    il(Kil, Implicit, 2), // 0xF2
    il(Isc, IndirectY, 8), // 0xF3
    il(Nop, ZeroPageX, 4), // 0xF4
    op(Sbc, ZeroPageX, 4), // 0xF5
    op(Inc, ZeroPageX, 6), // 0xF6
    il(Isc, ZeroPageX, 6), // 0xF7
    op(Sed, Implicit, 2), // 0xF8
    op_x(Sbc, AbsoluteY, 4), // 0xF9
    il(Nop, Implicit, 2), // 0xFA
    il(Isc, AbsoluteY, 7), // 0xFB
    il_x(Nop, AbsoluteX, 4), // 0xFC
    op_x(Sbc, AbsoluteX, 4), // 0xFD
    op(Inc, AbsoluteX, 7), // 0xFE
    il(Isc, AbsoluteX, 7), // 0xFF
];

/// CMOS 65C02 opcode table, indexed by opcode byte.
#[rustfmt::skip]
pub static CMOS_TABLE: [OpcodeMetadata; 256] = [
    op(Brk, Implicit, 7), // 0x00
    op(Ora, IndirectX, 6), // 0x01
    il(Nop, Immediate, 2), // 0x02
    il(Nop, Implicit, 1), // 0x03
    op(Tsb, ZeroPage, 5), // 0x04
    op(Ora, ZeroPage, 3), // 0x05
    op(Asl, ZeroPage, 5), // 0x06
    il(Nop, Implicit, 1), // 0x07
    op(Php, Implicit, 3), // 0x08
    op(Ora, Immediate, 2), // 0x09
    op(Asl, Accumulator, 2), // 0x0A
    il(Nop, Implicit, 1), // 0x0B
    op(Tsb, Absolute, 6), // 0x0C
    op(Ora, Absolute, 4), // 0x0D
    op(Asl, Absolute, 6), // 0x0E
    il(Nop, Implicit, 1), // 0x0F
    op(Bpl, Relative, 2), // 0x10
    op_x(Ora, IndirectY, 5), // 0x11
    op(Ora, ZeroPageIndirect, 5), // 0x12
    il(Nop, Implicit, 1), // 0x13
    op(Trb, ZeroPage, 5), // 0x14
    op(Ora, ZeroPageX, 4), // 0x15
    op(Asl, ZeroPageX, 6), // 0x16
    il(Nop, Implicit, 1), // 0x17
    op(Clc, Implicit, 2), // 0x18
    op_x(Ora, AbsoluteY, 4), // 0x19
    op(Inc, Accumulator, 2), // 0x1A
    il(Nop, Implicit, 1), // 0x1B
    op(Trb, Absolute, 6), // 0x1C
    op_x(Ora, AbsoluteX, 4), // 0x1D
    op_x(Asl, AbsoluteX, 6), // 0x1E
    il(Nop, Implicit, 1), // 0x1F
    op(Jsr, Absolute, 6), // 0x20
    op(And, IndirectX, 6), // 0x21
    il(Nop, Immediate, 2), // 0x22
    il(Nop, Implicit, 1), // 0x23
    op(Bit, ZeroPage, 3), // 0x24
    op(And, ZeroPage, 3), // 0x25
    op(Rol, ZeroPage, 5), // 0x26
    il(Nop, Implicit, 1), // 0x27
    op(Plp, Implicit, 4), // 0x28
    op(And, Immediate, 2), // 0x29
    op(Rol, Accumulator, 2), // 0x2A
    il(Nop, Implicit, 1), // 0x2B
    op(Bit, Absolute, 4), // 0x2C
    op(And, Absolute, 4), // 0x2D
    op(Rol, Absolute, 6), // 0x2E
    il(Nop, Implicit, 1), // 0x2F
    op(Bmi, Relative, 2), // 0x30
    op_x(And, IndirectY, 5), // 0x31
    op(And, ZeroPageIndirect, 5), // 0x32
    il(Nop, Implicit, 1), // 0x33
    op(Bit, ZeroPageX, 4), // 0x34
    op(And, ZeroPageX, 4), // 0x35
    op(Rol, ZeroPageX, 6), // 0x36
    il(Nop, Implicit, 1), // 0x37
    op(Sec, Implicit, 2), // 0x38
    op_x(And, AbsoluteY, 4), // 0x39
    op(Dec, Accumulator, 2), // 0x3A
    il(Nop, Implicit, 1), // 0x3B
    op_x(Bit, AbsoluteX, 4), // 0x3C
    op_x(And, AbsoluteX, 4), // 0x3D
    op_x(Rol, AbsoluteX, 6), // 0x3E
    il(Nop, Implicit, 1), // 0x3F
    op(Rti, Implicit, 6), // 0x40
    op(Eor, IndirectX, 6), // 0x41
    il(Nop, Immediate, 2), // 0x42
    il(Nop, Implicit, 1), // 0x43
    il(Nop, ZeroPage, 3), // 0x44
    op(Eor, ZeroPage, 3), // 0x45
    op(Lsr, ZeroPage, 5), // 0x46
    il(Nop, Implicit, 1), // 0x47
    op(Pha, Implicit, 3), // 0x48
    op(Eor, Immediate, 2), // 0x49
    op(Lsr, Accumulator, 2), // 0x4A
    il(Nop, Implicit, 1), // 0x4B
    op(Jmp, Absolute, 3), // 0x4C
    op(Eor, Absolute, 4), // 0x4D
    op(Lsr, Absolute, 6), // 0x4E
    il(Nop, Implicit, 1), // 0x4F
    op(Bvc, Relative, 2), // 0x50
    op_x(Eor, IndirectY, 5), // 0x51
    op(Eor, ZeroPageIndirect, 5), // 0x52
    il(Nop, Implicit, 1), // 0x53
    il(Nop, ZeroPageX, 4), // 0x54
    op(Eor, ZeroPageX, 4), // 0x55
    op(Lsr, ZeroPageX, 6), // 0x56
    il(Nop, Implicit, 1), // 0x57
    op(Cli, Implicit, 2), // 0x58
    op_x(Eor, AbsoluteY, 4), // 0x59
    op(Phy, Implicit, 3), // 0x5A
    il(Nop, Implicit, 1), // 0x5B
    il(Nop, Absolute, 8), // 0x5C
    op_x(Eor, AbsoluteX, 4), // 0x5D
    op_x(Lsr, AbsoluteX, 6), // 0x5E
    il(Nop, Implicit, 1), // 0x5F
    op(Rts, Implicit, 6), // 0x60
    op(Adc, IndirectX, 6), // 0x61
    il(Nop, Immediate, 2), // 0x62
    il(Nop, Implicit, 1), // 0x63
    op(Stz, ZeroPage, 3), // 0x64
    op(Adc, ZeroPage, 3), // 0x65
    op(Ror, ZeroPage, 5), // 0x66
    il(Nop, Implicit, 1), // 0x67
    op(Pla, Implicit, 4), // 0x68
    op(Adc, Immediate, 2), // 0x69
    op(Ror, Accumulator, 2), // 0x6A
    il(Nop, Implicit, 1), // 0x6B
    op(Jmp, Indirect, 6), // 0x6C
    op(Adc, Absolute, 4), // 0x6D
    op(Ror, Absolute, 6), // 0x6E
    il(Nop, Implicit, 1), // 0x6F
    op(Bvs, Relative, 2), // 0x70
    op_x(Adc, IndirectY, 5), // 0x71
    op(Adc, ZeroPageIndirect, 5), // 0x72
    il(Nop, Implicit, 1), // 0x73
    op(Stz, ZeroPageX, 4), // 0x74
    op(Adc, ZeroPageX, 4), // 0x75
    op(Ror, ZeroPageX, 6), // 0x76
    il(Nop, Implicit, 1), // 0x77
    op(Sei, Implicit, 2), // 0x78
    op_x(Adc, AbsoluteY, 4), // 0x79
    op(Ply, Implicit, 4), // 0x7A
    il(Nop, Implicit, 1), // 0x7B
    op(Jmp, AbsoluteIndexedIndirect, 6), // 0x7C
    op_x(Adc, AbsoluteX, 4), // 0x7D
    op_x(Ror, AbsoluteX, 6), // 0x7E
    il(Nop, Implicit, 1), // 0x7F
    op(Bra, Relative, 2), // 0x80
    op(Sta, IndirectX, 6), // 0x81
    il(Nop, Immediate, 2), // 0x82
    il(Nop, Implicit, 1), // 0x83
    op(Sty, ZeroPage, 3), // 0x84
    op(Sta, ZeroPage, 3), // 0x85
    op(Stx, ZeroPage, 3), // 0x86
    il(Nop, Implicit, 1), // 0x87
    op(Dey, Implicit, 2), // 0x88
    op(Bit, Immediate, 2), // 0x89
    op(Txa, Implicit, 2), // 0x8A
    il(Nop, Implicit, 1), // 0x8B
    op(Sty, Absolute, 4), // 0x8C
    op(Sta, Absolute, 4), // 0x8D
    op(Stx, Absolute, 4), // 0x8E
    il(Nop, Implicit, 1), // 0x8F
    op(Bcc, Relative, 2), // 0x90
    op(Sta, IndirectY, 6), // 0x91
    op(Sta, ZeroPageIndirect, 5), // 0x92
    il(Nop, Implicit, 1), // 0x93
    op(Sty, ZeroPageX, 4), // 0x94
    op(Sta, ZeroPageX, 4), // 0x95
    op(Stx, ZeroPageY, 4), // 0x96
    il(Nop, Implicit, 1), // 0x97
    op(Tya, Implicit, 2), // 0x98
    op(Sta, AbsoluteY, 5), // 0x99
    op(Txs, Implicit, 2), // 0x9A
    il(Nop, Implicit, 1), // 0x9B
    op(Stz, Absolute, 4), // 0x9C
    op(Sta, AbsoluteX, 5), // 0x9D
    op(Stz, AbsoluteX, 5), // 0x9E
    il(Nop, Implicit, 1), // 0x9F
    op(Ldy, Immediate, 2), // 0xA0
    op(Lda, IndirectX, 6), // 0xA1
    op(Ldx, Immediate, 2), // 0xA2
    il(Nop, Implicit, 1), // 0xA3
    op(Ldy, ZeroPage, 3), // 0xA4
    op(Lda, ZeroPage, 3), // 0xA5
    op(Ldx, ZeroPage, 3), // 0xA6
    il(Nop, Implicit, 1), // 0xA7
    op(Tay, Implicit, 2), // 0xA8
    op(Lda, Immediate, 2), // 0xA9
    op(Tax, Implicit, 2), // 0xAA
    il(Nop, Implicit, 1), // 0xAB
    op(Ldy, Absolute, 4), // 0xAC
    op(Lda, Absolute, 4), // 0xAD
    op(Ldx, Absolute, 4), // 0xAE
    il(Nop, Implicit, 1), // 0xAF
    op(Bcs, Relative, 2), // 0xB0
    op_x(Lda, IndirectY, 5), // 0xB1
    op(Lda, ZeroPageIndirect, 5), // 0xB2
    il(Nop, Implicit, 1), // 0xB3
    op(Ldy, ZeroPageX, 4), // 0xB4
    op(Lda, ZeroPageX, 4), // 0xB5
    op(Ldx, ZeroPageY, 4), // 0xB6
    il(Nop, Implicit, 1), // 0xB7
    op(Clv, Implicit, 2), // 0xB8
    op_x(Lda, AbsoluteY, 4), // 0xB9
    op(Tsx, Implicit, 2), // 0xBA
    il(Nop, Implicit, 1), // 0xBB
    op_x(Ldy, AbsoluteX, 4), // 0xBC
    op_x(Lda, AbsoluteX, 4), // 0xBD
    op_x(Ldx, AbsoluteY, 4), // 0xBE
    il(Nop, Implicit, 1), // 0xBF
    op(Cpy, Immediate, 2), // 0xC0
    op(Cmp, IndirectX, 6), // 0xC1
    il(Nop, Immediate, 2), // 0xC2
    il(Nop, Implicit, 1), // 0xC3
    op(Cpy, ZeroPage, 3), // 0xC4
    op(Cmp, ZeroPage, 3), // 0xC5
    op(Dec, ZeroPage, 5), // 0xC6
    il(Nop, Implicit, 1), // 0xC7
    op(Iny, Implicit, 2), // 0xC8
    op(Cmp, Immediate, 2), // 0xC9
    op(Dex, Implicit, 2), // 0xCA
    il(Nop, Implicit, 1), // 0xCB
    op(Cpy, Absolute, 4), // 0xCC
    op(Cmp, Absolute, 4), // 0xCD
    op(Dec, Absolute, 6), // 0xCE
    il(Nop, Implicit, 1), // 0xCF
    op(Bne, Relative, 2), // 0xD0
    op_x(Cmp, IndirectY, 5), // 0xD1
    op(Cmp, ZeroPageIndirect, 5), // 0xD2
    il(Nop, Implicit, 1), // 0xD3
    il(Nop, ZeroPageX, 4), // 0xD4
    op(Cmp, ZeroPageX, 4), // 0xD5
    op(Dec, ZeroPageX, 6), // 0xD6
    il(Nop, Implicit, 1), // 0xD7
    op(Cld, Implicit, 2), // 0xD8
    op_x(Cmp, AbsoluteY, 4), // 0xD9
    op(Phx, Implicit, 3), // 0xDA
    il(Nop, Implicit, 1), // 0xDB
    il(Nop, Absolute, 4), // 0xDC
    op_x(Cmp, AbsoluteX, 4), // 0xDD
    op_x(Dec, AbsoluteX, 6), // 0xDE
    il(Nop, Implicit, 1), // 0xDF
    op(Cpx, Immediate, 2), // 0xE0
    op(Sbc, IndirectX, 6), // 0xE1
    il(Nop, Immediate, 2), // 0xE2
    il(Nop, Implicit, 1), // 0xE3
    op(Cpx, ZeroPage, 3), // 0xE4
    op(Sbc, ZeroPage, 3), // 0xE5
    op(Inc, ZeroPage, 5), // 0xE6
    il(Nop, Implicit, 1), // 0xE7
    op(Inx, Implicit, 2), // 0xE8
    op(Sbc, Immediate, 2), // 0xE9
    op(Nop, Implicit, 2), // 0xEA
    il(Nop, Implicit, 1), // 0xEB
    op(Cpx, Absolute, 4), // 0xEC
    op(Sbc, Absolute, 4), // 0xED
    op(Inc, Absolute, 6), // 0xEE
    il(Nop, Implicit, 1), // 0xEF
    op(Beq, Relative, 2), // 0xF0
    op_x(Sbc, IndirectY, 5), // 0xF1
    op(Sbc, ZeroPageIndirect, 5), // 0xF2
    il(Nop, Implicit, 1), // 0xF3
    il(Nop, ZeroPageX, 4), // 0xF4
    op(Sbc, ZeroPageX, 4), // 0xF5
    op(Inc, ZeroPageX, 6), // 0xF6
    il(Nop, Implicit, 1), // 0xF7
    op(Sed, Implicit, 2), // 0xF8
    op_x(Sbc, AbsoluteY, 4), // 0xF9
    op(Plx, Implicit, 4), // 0xFA
    il(Nop, Implicit, 1), // 0xFB
    il(Nop, Absolute, 4), // 0xFC
    op_x(Sbc, AbsoluteX, 4), // 0xFD
    op_x(Inc, AbsoluteX, 6), // 0xFE
    il(Nop, Implicit, 1), // 0xFF
];
