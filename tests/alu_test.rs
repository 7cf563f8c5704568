//! Tests for the arithmetic and logic instructions on both models.
//!
//! Tests cover:
//! - Binary ADC/SBC flags
//! - Decimal ADC/SBC on NMOS (binary Z flag, extra cycle) and CMOS
//!   (valid N/Z, no extra cycle)
//! - Compare instructions
//! - BIT including the 65C02 immediate form
//! - TSB/TRB

use a2cpu::{Cpu, CpuType, FlatMemory};

/// Helper function to create a CPU running `program` at 0x0300
fn setup_cpu(model: CpuType, program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x0300);
    memory.load(0x0300, program);
    Cpu::with_model(memory, model)
}

// ========== Binary ADC/SBC ==========

#[test]
fn test_adc_signed_overflow() {
    let mut cpu = setup_cpu(CpuType::Mos6502, &[0x69, 0x50]); // ADC #$50
    cpu.set_a(0x50);
    cpu.set_flag_c(false);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_carry_out_and_zero() {
    let mut cpu = setup_cpu(CpuType::Cmos65C02, &[0x69, 0x01]);
    cpu.set_a(0xFF);
    cpu.set_flag_c(false);

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_borrow() {
    let mut cpu = setup_cpu(CpuType::Mos6502, &[0xE9, 0x01]); // SBC #$01
    cpu.set_a(0x00);
    cpu.set_flag_c(true);

    cpu.step();
    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_signed_overflow() {
    let mut cpu = setup_cpu(CpuType::Mos6502, &[0xE9, 0x01]);
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.step();
    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
}

// ========== Decimal mode ==========

#[test]
fn test_decimal_adc_simple_carry_between_digits() {
    for (model, cycles) in [(CpuType::Mos6502, 3), (CpuType::Cmos65C02, 2)] {
        let mut cpu = setup_cpu(model, &[0x69, 0x01]);
        cpu.set_a(0x09);
        cpu.set_flag_d(true);
        cpu.set_flag_c(false);

        assert_eq!(cpu.step(), cycles, "{model:?}");
        assert_eq!(cpu.a(), 0x10, "{model:?}");
        assert!(!cpu.flag_c(), "{model:?}");
        assert!(!cpu.flag_z(), "{model:?}");
    }
}

#[test]
fn test_decimal_adc_99_plus_1_nmos_flags() {
    let mut cpu = setup_cpu(CpuType::Mos6502, &[0x69, 0x01]);
    cpu.set_a(0x99);
    cpu.set_flag_d(true);
    cpu.set_flag_c(false);

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    // Z follows the binary sum 0x9A, N the intermediate 0xA0
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_decimal_adc_99_plus_1_cmos_flags() {
    let mut cpu = setup_cpu(CpuType::Cmos65C02, &[0x69, 0x01]);
    cpu.set_a(0x99);
    cpu.set_flag_d(true);
    cpu.set_flag_c(false);

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}

#[test]
fn test_decimal_sbc_both_models() {
    for (model, cycles) in [(CpuType::Mos6502, 3), (CpuType::Cmos65C02, 2)] {
        let mut cpu = setup_cpu(model, &[0xE9, 0x25]); // SBC #$25
        cpu.set_a(0x50);
        cpu.set_flag_d(true);
        cpu.set_flag_c(true);

        assert_eq!(cpu.step(), cycles, "{model:?}");
        assert_eq!(cpu.a(), 0x25, "{model:?}");
        assert!(cpu.flag_c(), "{model:?}");
    }
}

#[test]
fn test_decimal_sbc_wraps_to_99() {
    for model in [CpuType::Mos6502, CpuType::Cmos65C02] {
        let mut cpu = setup_cpu(model, &[0xE9, 0x01]);
        cpu.set_a(0x00);
        cpu.set_flag_d(true);
        cpu.set_flag_c(true);

        cpu.step();
        assert_eq!(cpu.a(), 0x99, "{model:?}");
        assert!(!cpu.flag_c(), "{model:?}");
        assert!(cpu.flag_n(), "{model:?}");
    }
}

#[test]
fn test_decimal_cycle_applies_to_every_adc_mode_on_nmos() {
    // ADC $10 (zero page): 3 base cycles + 1
    let mut cpu = setup_cpu(CpuType::Mos6502, &[0x65, 0x10]);
    cpu.memory_mut().load(0x0010, &[0x01]);
    cpu.set_a(0x01);
    cpu.set_flag_d(true);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.a(), 0x02);
}

// ========== Logic and compare ==========

#[test]
fn test_and_ora_eor() {
    let mut cpu = setup_cpu(
        CpuType::Mos6502,
        &[0x29, 0x0F, 0x09, 0x80, 0x49, 0x8F], // AND #$0F ; ORA #$80 ; EOR #$8F
    );
    cpu.set_a(0x3C);

    cpu.step();
    assert_eq!(cpu.a(), 0x0C);
    cpu.step();
    assert_eq!(cpu.a(), 0x8C);
    assert!(cpu.flag_n());
    cpu.step();
    assert_eq!(cpu.a(), 0x03);
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less_than() {
    let mut cpu = setup_cpu(CpuType::Mos6502, &[0xC9, 0x41]); // CMP #$41
    cpu.set_a(0x40);

    cpu.step();
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
    assert_eq!(cpu.a(), 0x40);
}

#[test]
fn test_cpx_cpy_equal() {
    let mut cpu = setup_cpu(CpuType::Mos6502, &[0xE0, 0x10, 0xC0, 0x20]);
    cpu.set_x(0x10);
    cpu.set_y(0x20);

    cpu.step();
    assert!(cpu.flag_z() && cpu.flag_c());
    cpu.set_flag_z(false);
    cpu.step();
    assert!(cpu.flag_z() && cpu.flag_c());
}

// ========== BIT ==========

#[test]
fn test_bit_zero_page_copies_n_and_v() {
    let mut cpu = setup_cpu(CpuType::Mos6502, &[0x24, 0x10]); // BIT $10
    cpu.memory_mut().load(0x0010, &[0xC0]);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(), 3);
    assert!(cpu.flag_z());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
}

#[test]
fn test_bit_immediate_only_touches_z_on_cmos() {
    let mut cpu = setup_cpu(CpuType::Cmos65C02, &[0x89, 0xC0]); // BIT #$C0
    cpu.set_a(0x01);
    cpu.set_flag_n(false);
    cpu.set_flag_v(false);

    assert_eq!(cpu.step(), 2);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}

// ========== TSB / TRB ==========

#[test]
fn test_tsb_sets_bits() {
    let mut cpu = setup_cpu(CpuType::Cmos65C02, &[0x04, 0x10]); // TSB $10
    cpu.memory_mut().load(0x0010, &[0x33]);
    cpu.set_a(0x0F);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().peek(0x0010), 0x3F);
    assert!(!cpu.flag_z());
}

#[test]
fn test_trb_clears_bits() {
    let mut cpu = setup_cpu(CpuType::Cmos65C02, &[0x14, 0x10]); // TRB $10
    cpu.memory_mut().load(0x0010, &[0x30]);
    cpu.set_a(0x0F);

    cpu.step();
    assert_eq!(cpu.memory().peek(0x0010), 0x30);
    assert!(cpu.flag_z());
}
