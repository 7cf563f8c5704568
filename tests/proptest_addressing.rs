//! Property-based tests for addressing mode calculations.
//!
//! These tests verify that the effective-address modes compute the right
//! address, wrap within zero page where the hardware does, and charge the
//! page-crossing cycle only to read-class opcodes.

use a2cpu::{Cpu, CpuType, FlatMemory};
use proptest::prelude::*;

/// Helper function to create a CPU with the program at 0x0300
fn setup_cpu(model: CpuType, program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x0300);
    memory.load(0x0300, program);
    Cpu::with_model(memory, model)
}

fn any_model() -> impl Strategy<Value = CpuType> {
    prop_oneof![Just(CpuType::Mos6502), Just(CpuType::Cmos65C02)]
}

// ========== Zero Page ==========

proptest! {
    /// Property: zero page,X stays within page zero
    #[test]
    fn prop_zero_page_x_wraps(model in any_model(), base: u8, x: u8, value: u8) {
        let mut cpu = setup_cpu(model, &[0xB5, base]); // LDA $base,X
        cpu.set_x(x);
        let effective = base.wrapping_add(x) as u16;
        cpu.memory_mut().load(effective, &[value]);

        prop_assert_eq!(cpu.step(), 4);
        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: zero page,Y stays within page zero (LDX)
    #[test]
    fn prop_zero_page_y_wraps(model in any_model(), base: u8, y: u8, value: u8) {
        let mut cpu = setup_cpu(model, &[0xB6, base]); // LDX $base,Y
        cpu.set_y(y);
        cpu.memory_mut().load(base.wrapping_add(y) as u16, &[value]);

        prop_assert_eq!(cpu.step(), 4);
        prop_assert_eq!(cpu.x(), value);
    }

    /// Property: (zp,X) reads the pointer from page zero, wrapping at $FF
    #[test]
    fn prop_indexed_indirect_pointer_wraps(
        model in any_model(),
        zp: u8,
        x: u8,
        target in 0x1000u16..0xBFFF,
        value: u8,
    ) {
        let mut cpu = setup_cpu(model, &[0xA1, zp]); // LDA ($zp,X)
        cpu.set_x(x);
        let ptr = zp.wrapping_add(x);
        let [lo, hi] = target.to_le_bytes();
        cpu.memory_mut().load(ptr as u16, &[lo]);
        cpu.memory_mut().load(ptr.wrapping_add(1) as u16, &[hi]);
        cpu.memory_mut().load(target, &[value]);

        prop_assert_eq!(cpu.step(), 6);
        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: (zp),Y adds Y after the pointer fetch and charges a cycle
    /// when that carries into the next page
    #[test]
    fn prop_indirect_indexed_page_cross(
        model in any_model(),
        zp: u8,
        y: u8,
        base in 0x1000u16..0xBF00,
        value: u8,
    ) {
        let mut cpu = setup_cpu(model, &[0xB1, zp]); // LDA ($zp),Y
        cpu.set_y(y);
        let [lo, hi] = base.to_le_bytes();
        cpu.memory_mut().load(zp as u16, &[lo]);
        cpu.memory_mut().load(zp.wrapping_add(1) as u16, &[hi]);
        let effective = base + y as u16;
        cpu.memory_mut().load(effective, &[value]);

        let crossed = (base & 0xFF00) != (effective & 0xFF00);
        prop_assert_eq!(cpu.step(), 5 + u32::from(crossed));
        prop_assert_eq!(cpu.a(), value);
    }
}

// ========== Absolute Indexed ==========

proptest! {
    /// Property: absolute,X reads charge one cycle on a page crossing
    #[test]
    fn prop_absolute_x_read_penalty(
        model in any_model(),
        base in 0x1000u16..0xBF00,
        x: u8,
        value: u8,
    ) {
        let [lo, hi] = base.to_le_bytes();
        let mut cpu = setup_cpu(model, &[0xBD, lo, hi]); // LDA base,X
        cpu.set_x(x);
        let effective = base + x as u16;
        cpu.memory_mut().load(effective, &[value]);

        let crossed = (base & 0xFF00) != (effective & 0xFF00);
        prop_assert_eq!(cpu.step(), 4 + u32::from(crossed));
        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: absolute,Y stores never charge the crossing cycle
    #[test]
    fn prop_absolute_y_store_fixed_cost(
        model in any_model(),
        base in 0x1000u16..0xBF00,
        y: u8,
        value: u8,
    ) {
        let [lo, hi] = base.to_le_bytes();
        let mut cpu = setup_cpu(model, &[0x99, lo, hi]); // STA base,Y
        cpu.set_y(y);
        cpu.set_a(value);

        prop_assert_eq!(cpu.step(), 5);
        prop_assert_eq!(cpu.memory().peek(base + y as u16), value);
    }
}

proptest! {
    /// Property: read-modify-write absolute,X costs 7 on the 6502 either
    /// way, and one cycle less on the 65C02 unless it crosses a page
    #[test]
    fn prop_rmw_absolute_x_timing(
        opcode in prop::sample::select(vec![0x1Eu8, 0x3E, 0x5E, 0x7E, 0xDE, 0xFE]),
        base in 0x1000u16..0xBF00,
        x: u8,
    ) {
        let [lo, hi] = base.to_le_bytes();
        let crossed = (base & 0xFF00) != ((base + x as u16) & 0xFF00);

        let mut nmos = setup_cpu(CpuType::Mos6502, &[opcode, lo, hi]);
        nmos.set_x(x);
        prop_assert_eq!(nmos.step(), 7);

        let mut cmos = setup_cpu(CpuType::Cmos65C02, &[opcode, lo, hi]);
        cmos.set_x(x);
        prop_assert_eq!(cmos.step(), 6 + u32::from(crossed));
    }
}

// ========== Indirect Jumps ==========

proptest! {
    /// Property: JMP ($xxFF) takes the high byte from $xx00 on the 6502 and
    /// from the next page on the 65C02
    #[test]
    fn prop_jmp_indirect_page_wrap(page in 0x10u8..0xBF) {
        let ptr = u16::from_le_bytes([0xFF, page]);
        for (model, cycles) in [(CpuType::Mos6502, 5), (CpuType::Cmos65C02, 6)] {
            let mut cpu = setup_cpu(model, &[0x6C, 0xFF, page]);
            cpu.memory_mut().load(ptr, &[0x34]);
            cpu.memory_mut().load(ptr & 0xFF00, &[0x12]);
            cpu.memory_mut().load(ptr + 1, &[0x56]);

            prop_assert_eq!(cpu.step(), cycles);
            let expected = if model == CpuType::Mos6502 { 0x1234 } else { 0x5634 };
            prop_assert_eq!(cpu.pc(), expected);
        }
    }

    /// Property: the 65C02's JMP (abs,X) adds X before the pointer fetch
    #[test]
    fn prop_jmp_absolute_indexed_indirect(base in 0x1000u16..0xBE00, x: u8, target: u16) {
        let [lo, hi] = base.to_le_bytes();
        let mut cpu = setup_cpu(CpuType::Cmos65C02, &[0x7C, lo, hi]);
        cpu.set_x(x);
        let ptr = base + x as u16;
        let [tlo, thi] = target.to_le_bytes();
        cpu.memory_mut().load(ptr, &[tlo, thi]);

        prop_assert_eq!(cpu.step(), 6);
        prop_assert_eq!(cpu.pc(), target);
    }
}
