//! # Cycle Accounting
//!
//! `CycleClock` is the global time base shared with every synchronous
//! peripheral. It tracks:
//!
//! - **cumulative**: total cycles since power-on (only ever increases)
//! - **batch**: cycles executed so far in the current `execute` quantum
//! - **synced**: the part of `batch` already folded into `cumulative` by
//!   [`CycleClock::calc_cycles`] (I/O handlers that need an exact time stamp
//!   fold early, the driver folds the remainder at the end of the quantum)
//! - **frame**: cycles of the current video frame completed before this quantum
//!
//! The [`Peripherals`] trait is how the execution driver reports elapsed time
//! to the synchronous event manager, the video scanner and cycle-synced chips.

/// Cumulative and per-quantum cycle counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleClock {
    pub(crate) cumulative: u64,
    pub(crate) batch: u32,
    pub(crate) synced: u32,
    pub(crate) frame: u32,
}

impl CycleClock {
    /// Creates a clock at cycle zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total cycles executed since emulation start.
    pub fn cumulative(&self) -> u64 {
        self.cumulative
    }

    /// Cycles executed so far in the current quantum.
    pub fn batch(&self) -> u32 {
        self.batch
    }

    /// Folds the cycles executed since the last call into the cumulative count.
    ///
    /// `executed` is the quantum-relative cycle count. Calling this repeatedly
    /// with the same value is harmless: the second call adds nothing.
    pub fn calc_cycles(&mut self, executed: u32) {
        debug_assert!(executed >= self.synced, "cycle count went backwards");
        let delta = executed.saturating_sub(self.synced);
        self.cumulative += delta as u64;
        self.synced = executed;
    }

    /// Frame-relative cycle count at quantum-relative time `executed`.
    pub fn cycles_this_video_frame(&mut self, executed: u32) -> u32 {
        self.calc_cycles(executed);
        self.frame + self.synced
    }

    /// Records how many cycles of the current video frame elapsed before
    /// this quantum started.
    pub fn set_cycles_this_frame(&mut self, cycles: u32) {
        self.frame = cycles;
    }

    /// Starts a new quantum.
    pub(crate) fn begin_quantum(&mut self) {
        self.batch = 0;
        self.synced = 0;
    }

    /// Ends a quantum of `executed` cycles, folding whatever `calc_cycles`
    /// has not already accounted for.
    pub(crate) fn end_quantum(&mut self, executed: u32) {
        let remaining = executed.saturating_sub(self.synced);
        self.cumulative += remaining as u64;
    }

    pub(crate) fn set_cumulative(&mut self, cycles: u64) {
        self.cumulative = cycles;
    }
}

/// Time-sensitive collaborators driven by the execution loop.
///
/// Every method has a no-op default, and `()` implements the trait, so a bare
/// CPU can run without any peripherals attached.
pub trait Peripherals {
    /// Called once per opcode with that opcode's cycle cost and the
    /// quantum-relative cycle count after it. Devices whose interrupt fires
    /// on the opcode's final cycle should call
    /// [`InterruptLines::set_irq_on_last_opcode_cycle`](crate::InterruptLines::set_irq_on_last_opcode_cycle)
    /// from here.
    fn update(&mut self, _cycles: u32, _executed: u32) {}

    /// Called once per opcode (including any interrupt entry that followed it)
    /// when the caller asked for inline video updates.
    fn video_update(&mut self, _cycles: u32) {}

    /// Called once at the end of each quantum, before the cumulative counter
    /// absorbs the quantum.
    fn update_cycles(&mut self, _executed: u32) {}
}

impl Peripherals for () {}
