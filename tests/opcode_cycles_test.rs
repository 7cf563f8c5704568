//! Cycle cost of every opcode on both models.
//!
//! Each opcode runs once on a fresh CPU from two fixed states: one where no
//! index or branch crosses a page, and one where every index and every taken
//! branch does. Read-class indexed opcodes and taken branches pay the extra
//! cycle only in the crossing state. Stores and NMOS read-modify-write
//! opcodes cost the same in both.
//!
//! Both states have only I set, so BPL, BVC, BCC, BNE (and BRA) are taken
//! while BMI, BVS, BCS and BEQ fall through.

use a2cpu::{Cpu, CpuType, FlatMemory, FLAG_I};

/// Operand bytes following every opcode: `$2010` absolute, `$10` zero page,
/// `+$10` relative.
const OPERAND: [u8; 2] = [0x10, 0x20];

/// NMOS 6502, X = Y = $01, PC = $0300
#[rustfmt::skip]
const NMOS_CYCLES: [u32; 256] = [
    7, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6, // 0x00
    3, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 0x10
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6, // 0x20
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 0x30
    6, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6, // 0x40
    3, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 0x50
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6, // 0x60
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 0x70
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // 0x80
    3, 6, 2, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5, // 0x90
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // 0xA0
    2, 5, 2, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4, // 0xB0
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // 0xC0
    3, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 0xD0
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // 0xE0
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 0xF0
];

/// NMOS 6502, X = Y = $F0, PC = $03F0
#[rustfmt::skip]
const NMOS_CYCLES_CROSSED: [u32; 256] = [
    7, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6, // 0x00
    4, 6, 2, 8, 4, 4, 6, 6, 2, 5, 2, 7, 5, 5, 7, 7, // 0x10
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6, // 0x20
    2, 6, 2, 8, 4, 4, 6, 6, 2, 5, 2, 7, 5, 5, 7, 7, // 0x30
    6, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6, // 0x40
    4, 6, 2, 8, 4, 4, 6, 6, 2, 5, 2, 7, 5, 5, 7, 7, // 0x50
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6, // 0x60
    2, 6, 2, 8, 4, 4, 6, 6, 2, 5, 2, 7, 5, 5, 7, 7, // 0x70
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // 0x80
    4, 6, 2, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5, // 0x90
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // 0xA0
    2, 6, 2, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5, // 0xB0
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // 0xC0
    4, 6, 2, 8, 4, 4, 6, 6, 2, 5, 2, 7, 5, 5, 7, 7, // 0xD0
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // 0xE0
    2, 6, 2, 8, 4, 4, 6, 6, 2, 5, 2, 7, 5, 5, 7, 7, // 0xF0
];

/// 65C02, X = Y = $01, PC = $0300
#[rustfmt::skip]
const CMOS_CYCLES: [u32; 256] = [
    7, 6, 2, 1, 5, 3, 5, 1, 3, 2, 2, 1, 6, 4, 6, 1, // 0x00
    3, 5, 5, 1, 5, 4, 6, 1, 2, 4, 2, 1, 6, 4, 6, 1, // 0x10
    6, 6, 2, 1, 3, 3, 5, 1, 4, 2, 2, 1, 4, 4, 6, 1, // 0x20
    2, 5, 5, 1, 4, 4, 6, 1, 2, 4, 2, 1, 4, 4, 6, 1, // 0x30
    6, 6, 2, 1, 3, 3, 5, 1, 3, 2, 2, 1, 3, 4, 6, 1, // 0x40
    3, 5, 5, 1, 4, 4, 6, 1, 2, 4, 3, 1, 8, 4, 6, 1, // 0x50
    6, 6, 2, 1, 3, 3, 5, 1, 4, 2, 2, 1, 6, 4, 6, 1, // 0x60
    2, 5, 5, 1, 4, 4, 6, 1, 2, 4, 4, 1, 6, 4, 6, 1, // 0x70
    3, 6, 2, 1, 3, 3, 3, 1, 2, 2, 2, 1, 4, 4, 4, 1, // 0x80
    3, 6, 5, 1, 4, 4, 4, 1, 2, 5, 2, 1, 4, 5, 5, 1, // 0x90
    2, 6, 2, 1, 3, 3, 3, 1, 2, 2, 2, 1, 4, 4, 4, 1, // 0xA0
    2, 5, 5, 1, 4, 4, 4, 1, 2, 4, 2, 1, 4, 4, 4, 1, // 0xB0
    2, 6, 2, 1, 3, 3, 5, 1, 2, 2, 2, 1, 4, 4, 6, 1, // 0xC0
    3, 5, 5, 1, 4, 4, 6, 1, 2, 4, 3, 1, 4, 4, 6, 1, // 0xD0
    2, 6, 2, 1, 3, 3, 5, 1, 2, 2, 2, 1, 4, 4, 6, 1, // 0xE0
    2, 5, 5, 1, 4, 4, 6, 1, 2, 4, 4, 1, 4, 4, 6, 1, // 0xF0
];

/// 65C02, X = Y = $F0, PC = $03F0
#[rustfmt::skip]
const CMOS_CYCLES_CROSSED: [u32; 256] = [
    7, 6, 2, 1, 5, 3, 5, 1, 3, 2, 2, 1, 6, 4, 6, 1, // 0x00
    4, 6, 5, 1, 5, 4, 6, 1, 2, 5, 2, 1, 6, 5, 7, 1, // 0x10
    6, 6, 2, 1, 3, 3, 5, 1, 4, 2, 2, 1, 4, 4, 6, 1, // 0x20
    2, 6, 5, 1, 4, 4, 6, 1, 2, 5, 2, 1, 5, 5, 7, 1, // 0x30
    6, 6, 2, 1, 3, 3, 5, 1, 3, 2, 2, 1, 3, 4, 6, 1, // 0x40
    4, 6, 5, 1, 4, 4, 6, 1, 2, 5, 3, 1, 8, 5, 7, 1, // 0x50
    6, 6, 2, 1, 3, 3, 5, 1, 4, 2, 2, 1, 6, 4, 6, 1, // 0x60
    2, 6, 5, 1, 4, 4, 6, 1, 2, 5, 4, 1, 6, 5, 7, 1, // 0x70
    4, 6, 2, 1, 3, 3, 3, 1, 2, 2, 2, 1, 4, 4, 4, 1, // 0x80
    4, 6, 5, 1, 4, 4, 4, 1, 2, 5, 2, 1, 4, 5, 5, 1, // 0x90
    2, 6, 2, 1, 3, 3, 3, 1, 2, 2, 2, 1, 4, 4, 4, 1, // 0xA0
    2, 6, 5, 1, 4, 4, 4, 1, 2, 5, 2, 1, 5, 5, 5, 1, // 0xB0
    2, 6, 2, 1, 3, 3, 5, 1, 2, 2, 2, 1, 4, 4, 6, 1, // 0xC0
    4, 6, 5, 1, 4, 4, 6, 1, 2, 5, 3, 1, 4, 5, 7, 1, // 0xD0
    2, 6, 2, 1, 3, 3, 5, 1, 2, 2, 2, 1, 4, 4, 6, 1, // 0xE0
    2, 6, 5, 1, 4, 4, 6, 1, 2, 5, 4, 1, 4, 5, 7, 1, // 0xF0
];

/// Runs `opcode` once at `pc` with both index registers set to `index` and
/// returns the cycles it took.
fn cycles_for(model: CpuType, opcode: u8, pc: u16, index: u8) -> u32 {
    let mut memory = FlatMemory::new();
    memory.load(pc, &[opcode, OPERAND[0], OPERAND[1]]);
    // ($10) and ($10),Y point at $2010
    memory.load(0x0010, &[0x10, 0x20]);

    let mut cpu = Cpu::with_model(memory, model);
    cpu.set_pc(pc);
    cpu.set_sp(0xFD);
    cpu.set_status(FLAG_I);
    cpu.set_x(index);
    cpu.set_y(index);
    cpu.step()
}

fn assert_cycles(model: CpuType, pc: u16, index: u8, expected: &[u32; 256]) {
    let mismatches: Vec<String> = (0..=0xFFu8)
        .filter_map(|opcode| {
            let cycles = cycles_for(model, opcode, pc, index);
            (cycles != expected[opcode as usize]).then(|| {
                format!(
                    "${:02X}: {} cycles, expected {}",
                    opcode, cycles, expected[opcode as usize]
                )
            })
        })
        .collect();
    assert!(mismatches.is_empty(), "{:?}: {:#?}", model, mismatches);
}

#[test]
fn test_nmos_cycles_without_page_cross() {
    assert_cycles(CpuType::Mos6502, 0x0300, 0x01, &NMOS_CYCLES);
}

#[test]
fn test_nmos_cycles_with_page_cross() {
    assert_cycles(CpuType::Mos6502, 0x03F0, 0xF0, &NMOS_CYCLES_CROSSED);
}

#[test]
fn test_cmos_cycles_without_page_cross() {
    assert_cycles(CpuType::Cmos65C02, 0x0300, 0x01, &CMOS_CYCLES);
}

#[test]
fn test_cmos_cycles_with_page_cross() {
    assert_cycles(CpuType::Cmos65C02, 0x03F0, 0xF0, &CMOS_CYCLES_CROSSED);
}

#[test]
fn test_indexed_reads_pay_for_page_cross() {
    // ORA AND EOR ADC LDA CMP SBC in each indexed mode, then LDX abs,Y and LDY abs,X
    let reads: [u8; 24] = [
        0x19, 0x39, 0x59, 0x79, 0xB9, 0xD9, 0xF9, 0xBE, // abs,Y
        0x11, 0x31, 0x51, 0x71, 0xB1, 0xD1, 0xF1, // (zp),Y
        0x1D, 0x3D, 0x5D, 0x7D, 0xBD, 0xDD, 0xFD, 0xBC, // abs,X
        0x3C, // 65C02 BIT abs,X
    ];
    for model in [CpuType::Mos6502, CpuType::Cmos65C02] {
        for &opcode in reads.iter().filter(|&&op| op != 0x3C || model == CpuType::Cmos65C02) {
            let flat = cycles_for(model, opcode, 0x0300, 0x01);
            let crossed = cycles_for(model, opcode, 0x03F0, 0xF0);
            assert_eq!(crossed, flat + 1, "{:?} ${:02X}", model, opcode);
        }
    }
}

#[test]
fn test_indexed_stores_cost_the_same_across_pages() {
    // STA abs,Y abs,X (zp),Y, then 65C02 STZ abs,X
    let cases: [(CpuType, &[u8]); 2] = [
        (CpuType::Mos6502, &[0x99, 0x9D, 0x91]),
        (CpuType::Cmos65C02, &[0x99, 0x9D, 0x91, 0x9E]),
    ];
    for (model, stores) in cases {
        for &opcode in stores {
            assert_eq!(
                cycles_for(model, opcode, 0x0300, 0x01),
                cycles_for(model, opcode, 0x03F0, 0xF0),
                "{:?} ${:02X}",
                model,
                opcode
            );
        }
    }
}
