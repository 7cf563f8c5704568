//! Disassembler used by the debugger-variant trace output.
//!
//! Decodes instructions straight out of a memory image using either opcode
//! table, so the same bytes show NMOS undocumented mnemonics or 65C02
//! extensions depending on the model being traced. Reads never go through
//! I/O dispatch.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::memory::MEMORY_SIZE;
use crate::opcodes::{Instruction, OpcodeMetadata};

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembled {
    /// Address of the opcode byte
    pub address: u16,

    /// The opcode byte
    pub opcode: u8,

    /// Decoded operation
    pub instruction: Instruction,

    /// Addressing mode of the opcode
    pub addressing_mode: AddressingMode,

    /// Operand bytes, little-endian (0-2 bytes)
    pub operand_bytes: Vec<u8>,
}

impl Disassembled {
    /// Total size in bytes, opcode included.
    pub fn size_bytes(&self) -> u8 {
        1 + self.operand_bytes.len() as u8
    }

    fn byte(&self) -> u8 {
        self.operand_bytes.first().copied().unwrap_or(0)
    }

    fn word(&self) -> u16 {
        match self.operand_bytes.as_slice() {
            [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
            _ => 0,
        }
    }
}

impl fmt::Display for Disassembled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AddressingMode::*;

        let mnemonic = self.instruction.mnemonic();
        match self.addressing_mode {
            Implicit => write!(f, "{}", mnemonic),
            Accumulator => write!(f, "{} A", mnemonic),
            Immediate => write!(f, "{} #${:02X}", mnemonic, self.byte()),
            ZeroPage => write!(f, "{} ${:02X}", mnemonic, self.byte()),
            ZeroPageX => write!(f, "{} ${:02X},X", mnemonic, self.byte()),
            ZeroPageY => write!(f, "{} ${:02X},Y", mnemonic, self.byte()),
            Relative => {
                let target = self
                    .address
                    .wrapping_add(2)
                    .wrapping_add(self.byte() as i8 as u16);
                write!(f, "{} ${:04X}", mnemonic, target)
            }
            Absolute => write!(f, "{} ${:04X}", mnemonic, self.word()),
            AbsoluteX => write!(f, "{} ${:04X},X", mnemonic, self.word()),
            AbsoluteY => write!(f, "{} ${:04X},Y", mnemonic, self.word()),
            Indirect => write!(f, "{} (${:04X})", mnemonic, self.word()),
            IndirectX => write!(f, "{} (${:02X},X)", mnemonic, self.byte()),
            IndirectY => write!(f, "{} (${:02X}),Y", mnemonic, self.byte()),
            ZeroPageIndirect => write!(f, "{} (${:02X})", mnemonic, self.byte()),
            AbsoluteIndexedIndirect => write!(f, "{} (${:04X},X)", mnemonic, self.word()),
        }
    }
}

/// Decodes the instruction at `pc`. Operand bytes wrap at `$FFFF`.
///
/// # Examples
///
/// ```
/// use a2cpu::disassembler::disassemble_one;
/// use a2cpu::{CMOS_TABLE, NMOS_TABLE};
///
/// let mut image = [0u8; 65536];
/// image[0x0300..0x0303].copy_from_slice(&[0x7C, 0x00, 0x20]);
///
/// assert_eq!(disassemble_one(&CMOS_TABLE, &image, 0x0300).to_string(), "JMP ($2000,X)");
/// assert_eq!(disassemble_one(&NMOS_TABLE, &image, 0x0300).to_string(), "NOP $2000,X");
/// ```
pub fn disassemble_one(
    table: &[OpcodeMetadata; 256],
    image: &[u8; MEMORY_SIZE],
    pc: u16,
) -> Disassembled {
    let opcode = image[pc as usize];
    decode_fetched(&table[opcode as usize], opcode, image, pc)
}

/// Decodes an opcode that was already fetched from `pc`.
///
/// The opcode may differ from the image byte when it came from an I/O
/// handler or the alternate path. Operand bytes are taken from the image.
pub fn decode_fetched(
    meta: &OpcodeMetadata,
    opcode: u8,
    image: &[u8; MEMORY_SIZE],
    pc: u16,
) -> Disassembled {
    let operand_bytes = (1..meta.size_bytes as u16)
        .map(|offset| image[pc.wrapping_add(offset) as usize])
        .collect();

    Disassembled {
        address: pc,
        opcode,
        instruction: meta.instruction,
        addressing_mode: meta.addressing_mode,
        operand_bytes,
    }
}

/// Decodes `count` consecutive instructions starting at `start`.
pub fn disassemble(
    table: &[OpcodeMetadata; 256],
    image: &[u8; MEMORY_SIZE],
    start: u16,
    count: usize,
) -> Vec<Disassembled> {
    let mut pc = start;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let instr = disassemble_one(table, image, pc);
        pc = pc.wrapping_add(instr.size_bytes() as u16);
        out.push(instr);
    }
    out
}
