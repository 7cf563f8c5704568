//! # Save-State Record
//!
//! [`CpuSnapshot`] is the CPU section of a save-state. It is a plain serde
//! record whose field names match the save-state keys; the surrounding
//! document format is up to the caller.
//!
//! Register values are stored as hex strings (`"0x1F"`, `"0xC600"`) and the
//! CPU type as `"6502"` or `"65C02"`. Loading validates the whole record
//! before touching the CPU, so a rejected snapshot leaves no partial state.
//!
//! ```
//! use a2cpu::{Cpu, CpuType, FlatMemory};
//!
//! let mut cpu = Cpu::with_model(FlatMemory::new(), CpuType::Cmos65C02);
//! cpu.set_a(0x42);
//! let snap = cpu.save_snapshot();
//! assert_eq!(snap.a, "0x42");
//!
//! let mut other = Cpu::with_model(FlatMemory::new(), CpuType::Mos6502);
//! other.load_snapshot(&snap, 5).unwrap();
//! assert_eq!(other.a(), 0x42);
//! assert_eq!(other.main_cpu(), CpuType::Cmos65C02);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::model::CpuType;
use crate::registers::{FLAG_B, FLAG_R};

/// First save-state version that records the IRQ deferral latch.
pub const DEFER_IRQ_MIN_VERSION: u32 = 5;

/// Errors raised while loading a snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Load: Unknown main CPU type: {0}")]
    UnknownCpuType(String),

    #[error("Load: malformed value for key '{key}': {value}")]
    BadValue { key: &'static str, value: String },

    #[error("Load: value for key '{key}' out of range: {value}")]
    OutOfRange { key: &'static str, value: String },

    #[error("Load: missing key '{0}'")]
    MissingKey(&'static str),
}

/// CPU section of a save-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSnapshot {
    #[serde(rename = "Type")]
    pub cpu_type: String,
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "X")]
    pub x: String,
    #[serde(rename = "Y")]
    pub y: String,
    #[serde(rename = "P")]
    pub p: String,
    #[serde(rename = "S")]
    pub s: String,
    #[serde(rename = "PC")]
    pub pc: String,
    #[serde(rename = "Cumulative Cycles")]
    pub cumulative_cycles: String,
    /// Absent in records older than [`DEFER_IRQ_MIN_VERSION`].
    #[serde(
        rename = "Defer IRQ By 1 Opcode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub defer_irq_by_1_opcode: Option<bool>,
}

fn cpu_type_tag(cpu: CpuType) -> &'static str {
    match cpu {
        CpuType::Mos6502 => "6502",
        _ => "65C02",
    }
}

fn parse_cpu_type(tag: &str) -> Result<CpuType, SnapshotError> {
    match tag {
        "6502" => Ok(CpuType::Mos6502),
        "65C02" => Ok(CpuType::Cmos65C02),
        other => Err(SnapshotError::UnknownCpuType(other.to_string())),
    }
}

/// Parses a hex value with an optional `0x` prefix, rejecting anything
/// above `max`.
fn parse_hex(key: &'static str, value: &str, max: u64) -> Result<u64, SnapshotError> {
    let digits = value
        .trim()
        .strip_prefix("0x")
        .or_else(|| value.trim().strip_prefix("0X"))
        .unwrap_or(value.trim());

    let parsed = u64::from_str_radix(digits, 16).map_err(|_| SnapshotError::BadValue {
        key,
        value: value.to_string(),
    })?;

    if parsed > max {
        return Err(SnapshotError::OutOfRange {
            key,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

impl<M: MemoryBus> Cpu<M> {
    /// Captures the CPU section of a save-state.
    ///
    /// The reserved and break bits are forced on in the live status byte
    /// before it is recorded.
    pub fn save_snapshot(&mut self) -> CpuSnapshot {
        self.regs.p |= FLAG_R | FLAG_B;

        let snap = CpuSnapshot {
            cpu_type: cpu_type_tag(self.main_cpu()).to_string(),
            a: format!("0x{:02X}", self.regs.a),
            x: format!("0x{:02X}", self.regs.x),
            y: format!("0x{:02X}", self.regs.y),
            p: format!("0x{:02X}", self.regs.p),
            s: format!("0x{:02X}", self.regs.s),
            pc: format!("0x{:04X}", self.regs.pc),
            cumulative_cycles: format!("0x{:016X}", self.clock.cumulative),
            defer_irq_by_1_opcode: Some(self.irq_defer_1_opcode),
        };
        debug!(
            "CPU snapshot saved: {} PC=${:04X} cycles={}",
            snap.cpu_type, self.regs.pc, self.clock.cumulative
        );
        snap
    }

    /// Restores the CPU from a save-state record of the given `version`.
    ///
    /// Sets the main CPU from the record, restores the registers and the
    /// cumulative cycle count, and clears all asserted IRQ and NMI lines. The
    /// deferral latch is restored from version 5 records, where it is
    /// mandatory; older records leave it untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] for an unknown CPU type, a malformed or
    /// out-of-range value, or a missing deferral key. The CPU is unchanged
    /// when an error is returned.
    pub fn load_snapshot(&mut self, snap: &CpuSnapshot, version: u32) -> Result<(), SnapshotError> {
        let cpu_type = parse_cpu_type(&snap.cpu_type)?;
        let a = parse_hex("A", &snap.a, 0xFF)? as u8;
        let x = parse_hex("X", &snap.x, 0xFF)? as u8;
        let y = parse_hex("Y", &snap.y, 0xFF)? as u8;
        let p = parse_hex("P", &snap.p, 0xFF)? as u8;
        // Older records stored the full 9-bit stack address
        let s = (parse_hex("S", &snap.s, 0xFFFF)? & 0xFF) as u8;
        let pc = parse_hex("PC", &snap.pc, 0xFFFF)? as u16;
        let cycles = parse_hex("Cumulative Cycles", &snap.cumulative_cycles, u64::MAX)?;

        let defer = if version >= DEFER_IRQ_MIN_VERSION {
            Some(
                snap.defer_irq_by_1_opcode
                    .ok_or(SnapshotError::MissingKey("Defer IRQ By 1 Opcode"))?,
            )
        } else {
            None
        };

        self.set_main_cpu(cpu_type);
        self.regs.a = a;
        self.regs.x = x;
        self.regs.y = y;
        self.regs.p = p | FLAG_R | FLAG_B;
        self.regs.s = s;
        self.regs.pc = pc;

        self.lines.reset_irq();
        self.lines.reset_nmi();
        self.clock.set_cumulative(cycles);

        if let Some(defer) = defer {
            self.irq_defer_1_opcode = defer;
        }

        debug!(
            "CPU snapshot loaded (v{}): {} PC=${:04X} cycles={}",
            version, snap.cpu_type, pc, cycles
        );
        Ok(())
    }
}
