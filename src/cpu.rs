//! # CPU State and Execution
//!
//! This module contains the `Cpu` context object for the 6502/65C02 and the
//! execution driver that runs it for a cycle budget.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: A, X, Y, status, stack pointer, program counter and the
//!   jammed latch ([`Registers`])
//! - **Cycle clock**: cumulative and per-quantum counters ([`CycleClock`])
//! - **Models**: the configured *main* CPU and the currently *active* one
//! - **Interrupt lines**: an `Arc<InterruptLines>` shared with devices
//! - **IRQ deferral**: the one-opcode deferral latch
//! - **Heatmap**: per-address access counters kept in debugger run modes
//!
//! ## Execution Model
//!
//! [`Cpu::execute`] picks one of eight decoder variants (model × memory path ×
//! instrumentation) and runs opcodes until the requested cycle budget is met:
//! - `execute(0, ..)` runs exactly one opcode (single step)
//! - `execute(n, ..)` runs until at least `n` cycles have elapsed
//!
//! After every opcode the synchronous peripherals are updated, then a pending
//! NMI and then a pending IRQ are serviced at the opcode boundary.

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::access::{
    Access, Alternate, Cmos, Debugger, Direct, Heatmap, Instrument, Nmos, Production, Variant,
};
use crate::clock::{CycleClock, Peripherals};
use crate::config::CpuConfig;
use crate::decoder;
use crate::devices::interrupts::{InterruptLines, IrqSource};
use crate::memory::MemoryBus;
use crate::model::{CpuType, RunMode};
use crate::registers::{Registers, FLAG_B, FLAG_C, FLAG_D, FLAG_I, FLAG_N, FLAG_R, FLAG_V, FLAG_Z};

/// NMI vector address.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector address.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector address.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles taken to enter an IRQ or NMI handler.
pub const INTERRUPT_CYCLES: u32 = 7;

/// Benchmark opcodes: the first `SHORT_BENCH_OPCODES` take a one-byte
/// operand, the rest a two-byte operand.
const BENCH_OPCODES: [u8; 33] = [
    0x06, 0x16, 0x24, 0x45, 0x48, 0x65, 0x68, 0x76, 0x84, 0x85, 0x86, 0x91, 0x94, 0xA4, 0xA5,
    0xA6, 0xB1, 0xB4, 0xC0, 0xC4, 0xC5, 0xE6, 0x19, 0x6D, 0x8D, 0x99, 0x9D, 0xAD, 0xB9, 0xBD,
    0xDD, 0xED, 0xEE,
];
const SHORT_BENCH_OPCODES: usize = 22;
const BENCH_ORIGIN: u16 = 0x0300;

/// 6502/65C02 CPU context.
///
/// The CPU is generic over the memory implementation via the `MemoryBus`
/// trait. Several independent instances may coexist.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use a2cpu::{Cpu, CpuType, FlatMemory};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
///
/// // Power on - loads PC from the reset vector
/// let cpu = Cpu::with_model(memory, CpuType::Mos6502);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFC);
/// assert_eq!(cpu.a(), 0xFF);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct Cpu<M: MemoryBus> {
    pub(crate) regs: Registers,
    pub(crate) clock: CycleClock,
    pub(crate) lines: Arc<InterruptLines>,
    main_cpu: CpuType,
    active_cpu: CpuType,
    run_mode: RunMode,
    pub(crate) irq_defer_1_opcode: bool,
    interrupt_in_last_execution: bool,
    /// Cycle cost of the opcode being executed, base plus penalties
    pub(crate) opcode_cycles: u32,
    heatmap: Heatmap,
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU for the default machine (an Enhanced //e, so a 65C02)
    /// and powers it on.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, &CpuConfig::default())
    }

    /// Creates a CPU with an explicit main model and powers it on.
    ///
    /// `CpuType::Z80` cannot be the main CPU; it falls back to the 6502.
    pub fn with_model(memory: M, model: CpuType) -> Self {
        let main = if model == CpuType::Z80 {
            warn!("Z80 cannot be the main CPU, using 6502");
            CpuType::Mos6502
        } else {
            model
        };

        let mut cpu = Self {
            regs: Registers::default(),
            clock: CycleClock::new(),
            lines: Arc::new(InterruptLines::new()),
            main_cpu: main,
            active_cpu: main,
            run_mode: RunMode::default(),
            irq_defer_1_opcode: false,
            interrupt_in_last_execution: false,
            opcode_cycles: 0,
            heatmap: Heatmap::default(),
            memory,
        };
        cpu.initialize();
        cpu
    }

    /// Creates a CPU from a configuration and powers it on.
    pub fn with_config(memory: M, config: &CpuConfig) -> Self {
        let mut cpu = Self::with_model(memory, config.main_cpu());
        cpu.run_mode = config.run_mode;
        cpu
    }

    /// Power-on: A, X and Y take the documented $FF pattern, the stack
    /// pointer starts at $FF, the CPU is reset and both interrupt lines are
    /// cleared.
    pub fn initialize(&mut self) {
        self.regs.a = 0xFF;
        self.regs.x = 0xFF;
        self.regs.y = 0xFF;
        self.regs.s = 0xFF;

        self.reset();

        self.lines.reset_irq();
        self.lines.reset_nmi();
        debug!("CPU initialized as {:?}", self.main_cpu);
    }

    /// Hardware reset.
    ///
    /// Loads PC from the reset vector, sets I, clears D on the 65C02 and moves
    /// the stack pointer down by three without writing to the stack. Also
    /// clears the jammed latch and any pending IRQ deferral, and makes the
    /// main CPU active again.
    pub fn reset(&mut self) {
        self.regs.p |= FLAG_I | FLAG_R | FLAG_B;
        if self.main_cpu.is_cmos() {
            self.regs.p &= !FLAG_D;
        }

        self.regs.pc = self.read_vector(RESET_VECTOR);
        self.regs.s = self.regs.s.wrapping_sub(3);
        self.regs.jammed = false;
        self.irq_defer_1_opcode = false;
        self.active_cpu = self.main_cpu;

        debug!(
            "CPU reset: PC=${:04X} SP=$01{:02X}",
            self.regs.pc, self.regs.s
        );
    }

    fn read_vector(&mut self, vector: u16) -> u16 {
        let (lo, hi) = if self.memory.cache_valid() {
            let image = self.memory.image();
            (image[vector as usize], image[vector.wrapping_add(1) as usize])
        } else {
            let cycles = self.clock.batch;
            (
                self.memory.read_alt(vector, cycles),
                self.memory.read_alt(vector.wrapping_add(1), cycles),
            )
        };
        u16::from_le_bytes([lo, hi])
    }

    // ========== Execution Driver ==========

    /// Runs the CPU for at least `cycles` cycles (one opcode when 0).
    ///
    /// `peripherals` is updated after every opcode and, when `video_update`
    /// is set, told how many cycles each opcode plus any interrupt entry took.
    /// At the end of the quantum `peripherals.update_cycles` sees the executed
    /// count before it is folded into the cumulative counter.
    ///
    /// Returns the number of cycles executed, which may overshoot the budget
    /// by the cost of the final opcode. A jammed CPU executes nothing and
    /// returns 0.
    pub fn execute<P: Peripherals>(
        &mut self,
        cycles: u32,
        video_update: bool,
        peripherals: &mut P,
    ) -> u32 {
        if self.regs.jammed {
            return 0;
        }

        self.clock.begin_quantum();
        self.interrupt_in_last_execution = false;

        let cmos = self.main_cpu.is_cmos();
        let direct = self.memory.cache_valid();
        let debugger = self.run_mode.is_debugger();

        let executed = match (cmos, direct, debugger) {
            (false, true, false) => self.run::<(Nmos, Direct, Production), P>(cycles, video_update, peripherals),
            (false, false, false) => self.run::<(Nmos, Alternate, Production), P>(cycles, video_update, peripherals),
            (false, true, true) => self.run::<(Nmos, Direct, Debugger), P>(cycles, video_update, peripherals),
            (false, false, true) => self.run::<(Nmos, Alternate, Debugger), P>(cycles, video_update, peripherals),
            (true, true, false) => self.run::<(Cmos, Direct, Production), P>(cycles, video_update, peripherals),
            (true, false, false) => self.run::<(Cmos, Alternate, Production), P>(cycles, video_update, peripherals),
            (true, true, true) => self.run::<(Cmos, Direct, Debugger), P>(cycles, video_update, peripherals),
            (true, false, true) => self.run::<(Cmos, Alternate, Debugger), P>(cycles, video_update, peripherals),
        };

        peripherals.update_cycles(executed);
        self.clock.end_quantum(executed);
        executed
    }

    #[inline]
    fn run<V: Variant, P: Peripherals>(
        &mut self,
        cycles: u32,
        video_update: bool,
        peripherals: &mut P,
    ) -> u32 {
        decoder::run::<M, V, P>(self, cycles, video_update, peripherals)
    }

    /// Executes a single instruction and returns its cycle cost.
    ///
    /// # Examples
    ///
    /// ```
    /// use a2cpu::{Cpu, CpuType, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write_word(0xFFFC, 0x0300);
    /// memory.load(0x0300, &[0xEA]); // NOP
    ///
    /// let mut cpu = Cpu::with_model(memory, CpuType::Mos6502);
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.pc(), 0x0301);
    /// ```
    pub fn step(&mut self) -> u32 {
        self.execute(0, false, &mut ())
    }

    /// Runs for at least `cycles` cycles with no peripherals attached.
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.execute(cycles, false, &mut ())
    }

    // ========== Interrupt Servicing ==========

    /// Services a pending NMI flank. Returns the cycles taken.
    pub(crate) fn check_nmi<V: Variant>(&mut self) -> u32 {
        if !self.lines.take_nmi_flank() {
            return 0;
        }
        self.enter_interrupt::<V>(NMI_VECTOR);
        trace!(
            "NMI ({}) mask=${:08X} -> ${:04X}",
            self.cycle_stamp(),
            self.lines.nmi_mask(),
            self.regs.pc
        );
        INTERRUPT_CYCLES
    }

    /// Services a pending IRQ, honouring the one-opcode deferral rule.
    /// Returns the cycles taken.
    pub(crate) fn check_irq<V: Variant>(&mut self) -> u32 {
        let on_last_cycle = self.lines.take_irq_on_last_opcode_cycle();
        let mask = self.lines.irq_mask();

        if mask == 0 || self.regs.flag(FLAG_I) {
            self.irq_defer_1_opcode = false;
            return 0;
        }

        if on_last_cycle && !self.irq_defer_1_opcode {
            self.irq_defer_1_opcode = true;
            return 0;
        }
        self.irq_defer_1_opcode = false;

        self.enter_interrupt::<V>(IRQ_VECTOR);
        trace!(
            "IRQ ({}) ({}) -> ${:04X}",
            self.cycle_stamp(),
            IrqSource::name(mask),
            self.regs.pc
        );
        INTERRUPT_CYCLES
    }

    // Cumulative cycle count at the current point of the quantum
    fn cycle_stamp(&self) -> u64 {
        self.clock.cumulative + u64::from(self.clock.batch.saturating_sub(self.clock.synced))
    }

    fn enter_interrupt<V: Variant>(&mut self, vector: u16) {
        let [lo, hi] = self.regs.pc.to_le_bytes();
        self.push::<V>(hi);
        self.push::<V>(lo);
        self.push::<V>((self.regs.p | FLAG_R) & !FLAG_B);
        self.regs.p |= FLAG_I;
        if self.main_cpu.is_cmos() {
            self.regs.p &= !FLAG_D;
        }
        let lo = self.operand_at::<V>(vector);
        let hi = self.operand_at::<V>(vector.wrapping_add(1));
        self.regs.pc = u16::from_le_bytes([lo, hi]);
        self.interrupt_in_last_execution = true;
    }

    // ========== Memory Access Helpers ==========

    #[inline]
    pub(crate) fn fetch_opcode<V: Variant>(&mut self) -> u8 {
        let pc = self.regs.pc;
        if <V::Instrument as Instrument>::ENABLED {
            self.heatmap.record_execution(pc);
        }
        let opcode = V::Access::fetch(&mut self.memory, pc, self.clock.batch);
        self.regs.pc = pc.wrapping_add(1);
        opcode
    }

    #[inline]
    pub(crate) fn operand_at<V: Variant>(&mut self, addr: u16) -> u8 {
        V::Access::operand(&mut self.memory, addr, self.clock.batch)
    }

    #[inline]
    pub(crate) fn next_byte<V: Variant>(&mut self) -> u8 {
        let byte = self.operand_at::<V>(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }

    #[inline]
    pub(crate) fn next_word<V: Variant>(&mut self) -> u16 {
        let lo = self.next_byte::<V>();
        let hi = self.next_byte::<V>();
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(crate) fn read<V: Variant>(&mut self, addr: u16) -> u8 {
        if <V::Instrument as Instrument>::ENABLED {
            self.heatmap.record_read(addr);
        }
        V::Access::read(&mut self.memory, self.regs.pc, addr, self.clock.batch)
    }

    #[inline]
    pub(crate) fn write<V: Variant>(&mut self, addr: u16, value: u8) {
        if <V::Instrument as Instrument>::ENABLED {
            self.heatmap.record_write(addr);
        }
        V::Access::write(&mut self.memory, self.regs.pc, addr, value, self.clock.batch)
    }

    #[inline]
    pub(crate) fn push<V: Variant>(&mut self, value: u8) {
        let addr = self.regs.stack_addr();
        self.write::<V>(addr, value);
        self.regs.s = self.regs.s.wrapping_sub(1);
    }

    #[inline]
    pub(crate) fn pull<V: Variant>(&mut self) -> u8 {
        self.regs.s = self.regs.s.wrapping_add(1);
        let addr = self.regs.stack_addr();
        self.read::<V>(addr)
    }

    /// Reads a byte on behalf of another bus master (e.g. a Z80 card).
    ///
    /// I/O addresses are dispatched; in debugger run modes the access is
    /// counted in the heatmap. `executed` is the caller's quantum-relative
    /// cycle count.
    pub fn read_byte(&mut self, addr: u16, executed: u32) -> u8 {
        if self.run_mode != RunMode::Running {
            self.heatmap.record_read(addr);
        }
        if self.memory.cache_valid() {
            Direct::read(&mut self.memory, self.regs.pc, addr, executed)
        } else {
            Alternate::read(&mut self.memory, self.regs.pc, addr, executed)
        }
    }

    /// Writes a byte on behalf of another bus master. See [`Cpu::read_byte`].
    pub fn write_byte(&mut self, addr: u16, value: u8, executed: u32) {
        if self.run_mode != RunMode::Running {
            self.heatmap.record_write(addr);
        }
        if self.memory.cache_valid() {
            Direct::write(&mut self.memory, self.regs.pc, addr, value, executed)
        } else {
            Alternate::write(&mut self.memory, self.regs.pc, addr, value, executed)
        }
    }

    // ========== Benchmark ==========

    /// Loads the built-in benchmark loop at $0300 and points the CPU at it.
    ///
    /// Each of 33 common opcodes is emitted with its own value as the low
    /// operand byte. Groups are padded to 16-byte lines chained by `JMP`,
    /// and the final line jumps back to $0300.
    pub fn setup_benchmark(&mut self) {
        self.regs.a = 0;
        self.regs.x = 0;
        self.regs.y = 0;
        self.regs.pc = BENCH_ORIGIN;
        self.regs.s = 0xFF;

        let image = self.memory.image_mut();
        let mut addr = BENCH_ORIGIN as usize;
        let mut index = 0;
        while index < BENCH_OPCODES.len() {
            // The opcode doubles as its own operand (low byte for absolute)
            let opcode = BENCH_OPCODES[index];
            image[addr] = opcode;
            image[addr + 1] = opcode;
            addr += 2;
            if index >= SHORT_BENCH_OPCODES {
                image[addr] = 0;
                addr += 1;
            }
            index += 1;

            if index >= BENCH_OPCODES.len() || addr & 0x0F >= 0x0B {
                let target = if index >= BENCH_OPCODES.len() {
                    BENCH_ORIGIN
                } else {
                    ((((addr + 1) >> 4) + 1) << 4) as u16
                };
                let [lo, hi] = target.to_le_bytes();
                image[addr] = 0x4C;
                image[addr + 1] = lo;
                image[addr + 2] = hi;
                addr += 3;
                addr = (addr + 0x0F) & !0x0F;
            }
        }
        debug!("benchmark code loaded at ${:04X}-${:04X}", BENCH_ORIGIN, addr - 1);
    }

    // ========== Cycle Bookkeeping ==========

    /// Total cycles executed since power-on.
    pub fn cycles(&self) -> u64 {
        self.clock.cumulative()
    }

    /// The cycle clock.
    pub fn clock(&self) -> &CycleClock {
        &self.clock
    }

    /// Folds cycles executed since the last call into the cumulative count.
    ///
    /// I/O handlers call this with the `cycles` argument they were given when
    /// they need an exact time stamp. Safe to call repeatedly.
    pub fn calc_cycles(&mut self, executed: u32) {
        self.clock.calc_cycles(executed);
    }

    /// Frame-relative cycle count at quantum-relative time `executed`.
    pub fn cycles_this_video_frame(&mut self, executed: u32) -> u32 {
        self.clock.cycles_this_video_frame(executed)
    }

    /// Records how many cycles of the current video frame elapsed before the
    /// next quantum.
    pub fn set_cycles_this_frame(&mut self, cycles: u32) {
        self.clock.set_cycles_this_frame(cycles);
    }

    /// Forgets the partial-quantum sync point, for a debugger that executes
    /// opcodes outside `execute`.
    pub fn reset_cycles_executed_for_debugger(&mut self) {
        self.clock.synced = 0;
    }

    // ========== Interrupt Lines ==========

    /// Shared interrupt lines. Clone the `Arc` to hand them to a device.
    pub fn interrupt_lines(&self) -> &Arc<InterruptLines> {
        &self.lines
    }

    /// Replaces the interrupt lines with a set shared with other components.
    pub fn attach_interrupt_lines(&mut self, lines: Arc<InterruptLines>) {
        self.lines = lines;
    }

    /// Raises `source`'s IRQ bit.
    pub fn assert_irq(&self, source: IrqSource) {
        self.lines.assert_irq(source);
    }

    /// Clears `source`'s IRQ bit.
    pub fn deassert_irq(&self, source: IrqSource) {
        self.lines.deassert_irq(source);
    }

    /// Raises `source`'s NMI bit.
    pub fn assert_nmi(&self, source: IrqSource) {
        self.lines.assert_nmi(source);
    }

    /// Clears `source`'s NMI bit.
    pub fn deassert_nmi(&self, source: IrqSource) {
        self.lines.deassert_nmi(source);
    }

    /// Clears every IRQ source.
    pub fn reset_irq_lines(&self) {
        self.lines.reset_irq();
    }

    /// Clears every NMI source and any pending flank.
    pub fn reset_nmi_lines(&self) {
        self.lines.reset_nmi();
    }

    /// Returns true if any IRQ source is asserted.
    pub fn is_irq_asserted(&self) -> bool {
        self.lines.is_irq_asserted()
    }

    /// Returns true if the I flag is clear.
    pub fn interrupts_enabled(&self) -> bool {
        !self.regs.flag(FLAG_I)
    }

    /// Returns true if an IRQ or NMI was serviced during the last `execute`.
    pub fn interrupt_in_last_execution(&self) -> bool {
        self.interrupt_in_last_execution
    }

    /// Returns true if an IRQ is being held off for one opcode.
    pub fn irq_deferred(&self) -> bool {
        self.irq_defer_1_opcode
    }

    /// Marks the IRQ just raised as having fired on the last cycle of the
    /// current opcode. Ignored while interrupts are disabled.
    pub fn set_irq_on_last_opcode_cycle(&self) {
        if self.interrupts_enabled() {
            self.lines.set_irq_on_last_opcode_cycle();
        }
    }

    // ========== Models and Run Mode ==========

    /// The configured CPU.
    pub fn main_cpu(&self) -> CpuType {
        self.main_cpu
    }

    /// Sets the configured CPU. `CpuType::Z80` is rejected and ignored.
    pub fn set_main_cpu(&mut self, cpu: CpuType) {
        if cpu == CpuType::Z80 {
            warn!("ignoring request to make the Z80 the main CPU");
            return;
        }
        if cpu != self.main_cpu {
            debug!("main CPU changed from {:?} to {:?}", self.main_cpu, cpu);
        }
        self.main_cpu = cpu;
    }

    /// The CPU currently driving the bus.
    pub fn active_cpu(&self) -> CpuType {
        self.active_cpu
    }

    /// Sets the CPU currently driving the bus.
    pub fn set_active_cpu(&mut self, cpu: CpuType) {
        self.active_cpu = cpu;
    }

    /// Returns true if the main CPU is a 65C02.
    pub fn is_65c02(&self) -> bool {
        self.main_cpu.is_cmos()
    }

    /// The emulator run mode.
    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    /// Sets the emulator run mode.
    pub fn set_run_mode(&mut self, mode: RunMode) {
        self.run_mode = mode;
    }

    /// Debugger access counters.
    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }

    /// Mutable debugger access counters (for clearing).
    pub fn heatmap_mut(&mut self) -> &mut Heatmap {
        &mut self.heatmap
    }

    // ========== Register Accessors ==========

    /// The register file.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Mutable register file.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    /// Returns the accumulator value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer low byte (stack lives at 0x0100 | sp).
    pub fn sp(&self) -> u8 {
        self.regs.s
    }

    /// Returns the packed status byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.regs.p
    }

    /// Returns true if a halt opcode stopped the CPU.
    pub fn is_jammed(&self) -> bool {
        self.regs.jammed
    }

    /// Returns the N (negative) flag.
    pub fn flag_n(&self) -> bool {
        self.regs.flag(FLAG_N)
    }

    /// Returns the V (overflow) flag.
    pub fn flag_v(&self) -> bool {
        self.regs.flag(FLAG_V)
    }

    /// Returns the D (decimal) flag.
    pub fn flag_d(&self) -> bool {
        self.regs.flag(FLAG_D)
    }

    /// Returns the I (interrupt disable) flag.
    pub fn flag_i(&self) -> bool {
        self.regs.flag(FLAG_I)
    }

    /// Returns the Z (zero) flag.
    pub fn flag_z(&self) -> bool {
        self.regs.flag(FLAG_Z)
    }

    /// Returns the C (carry) flag.
    pub fn flag_c(&self) -> bool {
        self.regs.flag(FLAG_C)
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer low byte.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.s = value;
    }

    /// Sets the status byte. The reserved and break bits always read as 1.
    pub fn set_status(&mut self, value: u8) {
        self.regs.p = value | FLAG_R | FLAG_B;
    }

    /// Sets the N flag.
    pub fn set_flag_n(&mut self, on: bool) {
        self.regs.set_flag(FLAG_N, on);
    }

    /// Sets the V flag.
    pub fn set_flag_v(&mut self, on: bool) {
        self.regs.set_flag(FLAG_V, on);
    }

    /// Sets the D flag.
    pub fn set_flag_d(&mut self, on: bool) {
        self.regs.set_flag(FLAG_D, on);
    }

    /// Sets the I flag.
    pub fn set_flag_i(&mut self, on: bool) {
        self.regs.set_flag(FLAG_I, on);
    }

    /// Sets the Z flag.
    pub fn set_flag_z(&mut self, on: bool) {
        self.regs.set_flag(FLAG_Z, on);
    }

    /// Sets the C flag.
    pub fn set_flag_c(&mut self, on: bool) {
        self.regs.set_flag(FLAG_C, on);
    }

    // ========== Memory ==========

    /// Returns an immutable reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    fn memory_with_reset(vector: u16) -> FlatMemory {
        let mut memory = FlatMemory::new();
        memory.write_word(RESET_VECTOR, vector);
        memory
    }

    #[test]
    fn test_initialize_pattern() {
        let cpu = Cpu::with_model(memory_with_reset(0xC600), CpuType::Mos6502);
        assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0xFF, 0xFF, 0xFF));
        assert_eq!(cpu.sp(), 0xFC);
        assert_eq!(cpu.pc(), 0xC600);
        assert!(cpu.flag_i());
        assert!(!cpu.is_jammed());
    }

    #[test]
    fn test_reset_keeps_d_on_nmos_clears_on_cmos() {
        for (model, d_after) in [(CpuType::Mos6502, true), (CpuType::Cmos65C02, false)] {
            let mut cpu = Cpu::with_model(memory_with_reset(0x0400), model);
            cpu.set_flag_d(true);
            cpu.reset();
            assert_eq!(cpu.flag_d(), d_after, "{model:?}");
        }
    }

    #[test]
    fn test_reset_stack_wraps() {
        let mut cpu = Cpu::with_model(memory_with_reset(0x0400), CpuType::Mos6502);
        cpu.set_sp(0x01);
        cpu.reset();
        assert_eq!(cpu.sp(), 0xFE);
    }

    #[test]
    fn test_with_model_rejects_z80() {
        let cpu = Cpu::with_model(memory_with_reset(0x0400), CpuType::Z80);
        assert_eq!(cpu.main_cpu(), CpuType::Mos6502);
    }

    #[test]
    fn test_set_main_cpu_ignores_z80() {
        let mut cpu = Cpu::with_model(memory_with_reset(0x0400), CpuType::Cmos65C02);
        cpu.set_main_cpu(CpuType::Z80);
        assert_eq!(cpu.main_cpu(), CpuType::Cmos65C02);

        cpu.set_active_cpu(CpuType::Z80);
        assert_eq!(cpu.active_cpu(), CpuType::Z80);
        cpu.reset();
        assert_eq!(cpu.active_cpu(), CpuType::Cmos65C02);
    }

    #[test]
    fn test_set_irq_on_last_cycle_ignored_when_masked() {
        let cpu = Cpu::with_model(memory_with_reset(0x0400), CpuType::Mos6502);
        assert!(!cpu.interrupts_enabled());
        cpu.set_irq_on_last_opcode_cycle();
        assert!(!cpu.lines.take_irq_on_last_opcode_cycle());
    }

    #[test]
    fn test_benchmark_layout() {
        let mut cpu = Cpu::with_model(memory_with_reset(0x0400), CpuType::Mos6502);
        cpu.setup_benchmark();
        assert_eq!(cpu.pc(), 0x0300);
        assert_eq!(cpu.sp(), 0xFF);

        let mem = cpu.memory();
        // First line: six two-byte groups then JMP $0310
        assert_eq!(
            &mem.image()[0x0300..0x030F],
            &[
                0x06, 0x06, 0x16, 0x16, 0x24, 0x24, 0x45, 0x45, 0x48, 0x48, 0x65, 0x65, 0x4C,
                0x10, 0x03
            ]
        );
        // Three-byte groups start after the short opcodes
        let image = mem.image();
        let first_long = (0x0300..0x0400)
            .position(|a| image[a] == 0x19 && image[a + 1] == 0x19)
            .map(|p| p + 0x0300)
            .unwrap();
        assert_eq!(image[first_long + 2], 0x00);
    }
}
