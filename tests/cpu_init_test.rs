//! Tests for power-on, reset and model selection.

use a2cpu::{Apple2Model, Cpu, CpuConfig, CpuType, FlatMemory, RunMode, FLAG_B, FLAG_R};

/// Helper function to create memory with the reset vector at 0x0300
fn memory() -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x0300);
    memory
}

// ========== Power-on ==========

#[test]
fn test_power_on_register_pattern() {
    for model in [CpuType::Mos6502, CpuType::Cmos65C02] {
        let cpu = Cpu::with_model(memory(), model);

        assert_eq!(cpu.a(), 0xFF, "{model:?}");
        assert_eq!(cpu.x(), 0xFF, "{model:?}");
        assert_eq!(cpu.y(), 0xFF, "{model:?}");
        assert_eq!(cpu.sp(), 0xFC, "{model:?}");
        assert_eq!(cpu.pc(), 0x0300, "{model:?}");
        assert!(cpu.flag_i(), "{model:?}");
        assert_eq!(cpu.status() & (FLAG_R | FLAG_B), FLAG_R | FLAG_B);
        assert_eq!(cpu.cycles(), 0);
    }
}

#[test]
fn test_power_on_clears_interrupt_lines() {
    let cpu = Cpu::with_model(memory(), CpuType::Mos6502);
    assert!(!cpu.is_irq_asserted());
    assert_eq!(cpu.interrupt_lines().nmi_mask(), 0);
    assert!(!cpu.irq_deferred());
}

#[test]
fn test_default_cpu_is_enhanced_iie() {
    let cpu = Cpu::new(memory());
    assert_eq!(cpu.main_cpu(), CpuType::Cmos65C02);
    assert!(cpu.is_65c02());
    assert_eq!(cpu.run_mode(), RunMode::Running);
}

// ========== Reset ==========

#[test]
fn test_reset_moves_stack_without_writing() {
    let mut cpu = Cpu::with_model(memory(), CpuType::Mos6502);
    cpu.set_sp(0xF0);
    cpu.reset();

    assert_eq!(cpu.sp(), 0xED);
    for addr in 0x01ED..=0x01F0u16 {
        assert_eq!(cpu.memory().peek(addr), 0x00);
    }
}

#[test]
fn test_reset_preserves_registers_and_sets_i() {
    let mut cpu = Cpu::with_model(memory(), CpuType::Cmos65C02);
    cpu.set_a(0x12);
    cpu.set_x(0x34);
    cpu.set_y(0x56);
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);

    cpu.reset();

    assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0x12, 0x34, 0x56));
    assert!(cpu.flag_i());
    assert!(cpu.flag_c());
}

#[test]
fn test_reset_clears_jam() {
    let mut mem = memory();
    mem.load(0x0300, &[0x02]); // KIL
    let mut cpu = Cpu::with_model(mem, CpuType::Mos6502);

    cpu.step();
    assert!(cpu.is_jammed());

    cpu.reset();
    assert!(!cpu.is_jammed());
    assert_eq!(cpu.pc(), 0x0300);
}

#[test]
fn test_set_status_forces_reserved_and_break() {
    let mut cpu = Cpu::with_model(memory(), CpuType::Mos6502);
    cpu.set_status(0x00);
    assert_eq!(cpu.status(), FLAG_R | FLAG_B);
}

// ========== Configuration ==========

#[test]
fn test_with_config_probes_model() {
    let config = CpuConfig {
        model: None,
        apple2: Apple2Model::AppleIIPlus,
        run_mode: RunMode::Debug,
    };
    let cpu = Cpu::with_config(memory(), &config);
    assert_eq!(cpu.main_cpu(), CpuType::Mos6502);
    assert_eq!(cpu.active_cpu(), CpuType::Mos6502);
    assert_eq!(cpu.run_mode(), RunMode::Debug);
}

#[test]
fn test_with_config_from_toml() {
    let config = CpuConfig::from_toml_str(
        r#"
        apple2 = "apple_iic"
        run_mode = "stepping"
        "#,
    )
    .unwrap();
    let cpu = Cpu::with_config(memory(), &config);
    assert_eq!(cpu.main_cpu(), CpuType::Cmos65C02);
    assert_eq!(cpu.run_mode(), RunMode::Stepping);
}

#[test]
fn test_model_switch_takes_effect_next_quantum() {
    let mut mem = memory();
    mem.load(0x0300, &[0x80, 0x02]); // BRA +2 on 65C02, NOP #imm on 6502
    let mut cpu = Cpu::with_model(mem, CpuType::Mos6502);

    cpu.set_main_cpu(CpuType::Cmos65C02);
    let cycles = cpu.step();

    assert_eq!(cycles, 3);
    assert_eq!(cpu.pc(), 0x0304);
}
