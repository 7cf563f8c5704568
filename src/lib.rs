//! # Apple II 6502 / 65C02 CPU Core
//!
//! A cycle-counting MOS 6502 and WDC 65C02 core for Apple II emulation.
//!
//! This crate provides the CPU context object, a trait-based memory bus with
//! Apple II I/O dispatch at `$C000-$CFFF`, table-driven decoders for both
//! processor models, the shared IRQ/NMI lines devices use to interrupt the
//! CPU, and a save-state record for the architectural state.
//!
//! ## Quick Start
//!
//! ```rust
//! use a2cpu::{Cpu, CpuType, FlatMemory};
//!
//! // 64KB flat memory with a reset vector pointing at $0300
//! let mut memory = FlatMemory::new();
//! memory.write_word(0xFFFC, 0x0300);
//! memory.load(0x0300, &[0xA9, 0x42, 0xEA]); // LDA #$42 ; NOP
//!
//! // Power on - loads PC from the reset vector
//! let mut cpu = Cpu::with_model(memory, CpuType::Cmos65C02);
//! assert_eq!(cpu.pc(), 0x0300);
//! assert_eq!(cpu.sp(), 0xFC);
//! assert!(cpu.flag_i());
//!
//! // Run at least 4 cycles
//! let executed = cpu.run_for_cycles(4);
//! assert_eq!(executed, 4);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Context object**: all CPU state lives in [`Cpu`], so several
//!   independent CPUs can coexist.
//! - **Memory**: [`MemoryBus`] abstracts the flat image, page write-enables,
//!   the alternate (bank-switched) access path and I/O dispatch.
//! - **Decoders**: one generic run loop is monomorphized per model, memory
//!   path and instrumentation level; [`Cpu::execute`] picks the variant.
//! - **Interrupts**: [`InterruptLines`] is shared via `Arc` and may be
//!   asserted from any thread.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, execution driver and interrupt servicing
//! - `memory` - MemoryBus trait and FlatMemory
//! - `devices` - I/O dispatch table and interrupt lines
//! - `opcodes` - Opcode metadata tables for both models
//! - `addressing` - Addressing modes
//! - `snapshot` - Save-state record
//! - `config` - TOML configuration

pub mod access;
pub mod addressing;
pub mod clock;
pub mod config;
pub mod cpu;
pub mod devices;
pub mod disassembler;
pub mod memory;
pub mod model;
pub mod opcodes;
pub mod registers;
pub mod snapshot;

// Internal run loop and instruction implementations (not part of public API)
mod decoder;
mod instructions;

// Re-export public API
pub use access::Heatmap;
pub use addressing::AddressingMode;
pub use clock::{CycleClock, Peripherals};
pub use config::{ConfigError, CpuConfig};
pub use cpu::{Cpu, INTERRUPT_CYCLES, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use devices::interrupts::{InterruptLines, IrqSource};
pub use devices::{IoHandler, IoMapError, IoTable};
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use model::{Apple2Model, CpuType, RunMode};
pub use opcodes::{Instruction, OpcodeMetadata, CMOS_TABLE, NMOS_TABLE};
pub use registers::{
    Registers, FLAG_B, FLAG_C, FLAG_D, FLAG_I, FLAG_N, FLAG_R, FLAG_V, FLAG_Z,
};
pub use snapshot::{CpuSnapshot, SnapshotError};
