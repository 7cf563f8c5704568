//! Interrupt lines shared between devices and the CPU.
//!
//! The 6502 has one level-sensitive IRQ input and one edge-sensitive NMI
//! input. On the Apple II several cards drive each line, so the lines are
//! modelled as 32-bit masks with one bit per source.
//!
//! # Hardware-Accurate Interrupt Model
//!
//! ## IRQ Line Behavior
//!
//! - **Level-sensitive**: the line is active while any source bit is set
//! - **Device-owned**: a bit stays set until *its* device deasserts it,
//!   normally when the ISR touches the device's registers
//! - **No queuing**: if the line is still active after RTI the CPU re-enters
//!   the ISR immediately
//!
//! ## NMI Line Behavior
//!
//! - **Edge-triggered**: the mask going from zero to non-zero records a
//!   *flank*; the CPU services one NMI per flank
//! - Asserting a second source while another is still asserted does not
//!   produce a new flank
//!
//! ## Last-cycle IRQ deferral
//!
//! A device whose interrupt fires on the final cycle of the current opcode
//! calls [`InterruptLines::set_irq_on_last_opcode_cycle`]. The CPU then lets
//! one more opcode run before taking the IRQ, like the real part which samples
//! the line one cycle before the opcode ends.
//!
//! # Threading
//!
//! Device timer threads may assert and deassert lines while the CPU thread
//! runs. Every mutation holds one short-lived lock; the CPU samples the masks
//! without it.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use a2cpu::{InterruptLines, IrqSource};
//!
//! let lines = Arc::new(InterruptLines::new());
//! let device = Arc::clone(&lines);
//!
//! device.assert_irq(IrqSource::SSC);
//! assert!(lines.is_irq_asserted());
//!
//! device.deassert_irq(IrqSource::SSC);
//! assert!(!lines.is_irq_asserted());
//! ```

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Identifies one interrupt source (bit `0..32` of a line mask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IrqSource(u8);

impl IrqSource {
    /// 6522 VIA on a Mockingboard / Phasor
    pub const SY6522: IrqSource = IrqSource(0);
    /// Speech chip
    pub const SPEECH: IrqSource = IrqSource(1);
    /// Super Serial Card
    pub const SSC: IrqSource = IrqSource(2);
    /// Mouse card
    pub const MOUSE: IrqSource = IrqSource(3);

    /// Creates a source id, or `None` if `id` does not fit in the mask.
    pub const fn new(id: u8) -> Option<IrqSource> {
        if id < 32 {
            Some(IrqSource(id))
        } else {
            None
        }
    }

    /// Bit index of this source.
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Mask with only this source's bit set.
    pub const fn mask(self) -> u32 {
        1 << self.0
    }

    /// Short name used in IRQ trace output.
    pub fn name(mask: u32) -> &'static str {
        if mask & Self::SY6522.mask() != 0 {
            "6522"
        } else if mask & Self::SPEECH.mask() != 0 {
            "SPEECH"
        } else if mask & Self::SSC.mask() != 0 {
            "SSC"
        } else if mask & Self::MOUSE.mask() != 0 {
            "MOUSE"
        } else {
            "UNKNOWN"
        }
    }
}

/// IRQ and NMI line state.
///
/// Create one per machine and hand an `Arc` clone to every device that can
/// interrupt; see [`Cpu::attach_interrupt_lines`](crate::Cpu::attach_interrupt_lines).
#[derive(Debug, Default)]
pub struct InterruptLines {
    lock: Mutex<()>,
    irq: AtomicU32,
    nmi: AtomicU32,
    nmi_flank: AtomicBool,
    irq_on_last_opcode_cycle: AtomicBool,
}

impl InterruptLines {
    /// Creates lines with no source asserted.
    pub fn new() -> Self {
        Self::default()
    }

    // A device thread that panicked mid-update leaves the masks consistent
    // (each mutation is a single store), so a poisoned lock is still usable.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Raises `source`'s IRQ bit.
    pub fn assert_irq(&self, source: IrqSource) {
        let _guard = self.guard();
        self.irq.fetch_or(source.mask(), Ordering::SeqCst);
    }

    /// Clears `source`'s IRQ bit.
    pub fn deassert_irq(&self, source: IrqSource) {
        let _guard = self.guard();
        self.irq.fetch_and(!source.mask(), Ordering::SeqCst);
    }

    /// Clears every IRQ bit.
    pub fn reset_irq(&self) {
        let _guard = self.guard();
        self.irq.store(0, Ordering::SeqCst);
    }

    /// Raises `source`'s NMI bit, recording a flank if the line was idle.
    pub fn assert_nmi(&self, source: IrqSource) {
        let _guard = self.guard();
        if self.nmi.load(Ordering::SeqCst) == 0 {
            self.nmi_flank.store(true, Ordering::SeqCst);
        }
        self.nmi.fetch_or(source.mask(), Ordering::SeqCst);
    }

    /// Clears `source`'s NMI bit.
    pub fn deassert_nmi(&self, source: IrqSource) {
        let _guard = self.guard();
        self.nmi.fetch_and(!source.mask(), Ordering::SeqCst);
    }

    /// Clears every NMI bit and any pending flank.
    pub fn reset_nmi(&self) {
        let _guard = self.guard();
        self.nmi.store(0, Ordering::SeqCst);
        self.nmi_flank.store(false, Ordering::SeqCst);
    }

    /// Current IRQ source mask.
    pub fn irq_mask(&self) -> u32 {
        self.irq.load(Ordering::Relaxed)
    }

    /// Current NMI source mask.
    pub fn nmi_mask(&self) -> u32 {
        self.nmi.load(Ordering::Relaxed)
    }

    /// Returns true if any IRQ source is asserted.
    pub fn is_irq_asserted(&self) -> bool {
        self.irq_mask() != 0
    }

    /// Returns true if an NMI flank is waiting to be serviced.
    pub fn nmi_pending(&self) -> bool {
        self.nmi_flank.load(Ordering::Relaxed)
    }

    /// Marks the IRQ just raised as having fired on the current opcode's
    /// last cycle. The marker is consumed by the next IRQ check.
    pub fn set_irq_on_last_opcode_cycle(&self) {
        self.irq_on_last_opcode_cycle.store(true, Ordering::SeqCst);
    }

    pub(crate) fn take_nmi_flank(&self) -> bool {
        if !self.nmi_flank.load(Ordering::Relaxed) {
            return false;
        }
        let _guard = self.guard();
        self.nmi_flank.swap(false, Ordering::SeqCst)
    }

    pub(crate) fn take_irq_on_last_opcode_cycle(&self) -> bool {
        self.irq_on_last_opcode_cycle.swap(false, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_irq_sources_are_independent() {
        let lines = InterruptLines::new();
        lines.assert_irq(IrqSource::SY6522);
        lines.assert_irq(IrqSource::MOUSE);
        assert_eq!(lines.irq_mask(), 0b1001);

        lines.deassert_irq(IrqSource::SY6522);
        assert!(lines.is_irq_asserted());
        assert_eq!(lines.irq_mask(), 0b1000);

        lines.deassert_irq(IrqSource::MOUSE);
        assert!(!lines.is_irq_asserted());
    }

    #[test]
    fn test_deassert_unasserted_source_is_noop() {
        let lines = InterruptLines::new();
        lines.assert_irq(IrqSource::SSC);
        lines.deassert_irq(IrqSource::SPEECH);
        assert_eq!(lines.irq_mask(), IrqSource::SSC.mask());
    }

    #[test]
    fn test_nmi_flank_only_on_first_source() {
        let lines = InterruptLines::new();
        lines.assert_nmi(IrqSource::SY6522);
        lines.assert_nmi(IrqSource::SSC);

        assert!(lines.take_nmi_flank());
        assert!(!lines.take_nmi_flank());

        lines.deassert_nmi(IrqSource::SY6522);
        lines.assert_nmi(IrqSource::SY6522);
        assert!(!lines.take_nmi_flank(), "line never went idle");

        lines.deassert_nmi(IrqSource::SY6522);
        lines.deassert_nmi(IrqSource::SSC);
        lines.assert_nmi(IrqSource::MOUSE);
        assert!(lines.take_nmi_flank());
    }

    #[test]
    fn test_reset_nmi_clears_flank() {
        let lines = InterruptLines::new();
        lines.assert_nmi(IrqSource::SPEECH);
        lines.reset_nmi();
        assert_eq!(lines.nmi_mask(), 0);
        assert!(!lines.nmi_pending());
    }

    #[test]
    fn test_last_cycle_marker_is_consumed() {
        let lines = InterruptLines::new();
        lines.set_irq_on_last_opcode_cycle();
        assert!(lines.take_irq_on_last_opcode_cycle());
        assert!(!lines.take_irq_on_last_opcode_cycle());
    }

    #[test]
    fn test_source_ids() {
        assert_eq!(IrqSource::new(31).map(IrqSource::mask), Some(0x8000_0000));
        assert_eq!(IrqSource::new(32), None);
        assert_eq!(IrqSource::name(0b0100), "SSC");
        assert_eq!(IrqSource::name(0b0011), "6522");
        assert_eq!(IrqSource::name(1 << 20), "UNKNOWN");
    }

    #[test]
    fn test_concurrent_assert_deassert() {
        let lines = Arc::new(InterruptLines::new());
        let handles: Vec<_> = (0..8u8)
            .map(|id| {
                let lines = Arc::clone(&lines);
                thread::spawn(move || {
                    let source = IrqSource::new(id).unwrap();
                    for _ in 0..1000 {
                        lines.assert_irq(source);
                        lines.deassert_irq(source);
                    }
                    lines.assert_irq(source);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(lines.irq_mask(), 0xFF);
    }
}
