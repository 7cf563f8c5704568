//! The fetch-decode-execute loop shared by every decoder variant.
//!
//! One opcode per iteration:
//!
//! 1. Fetch the opcode (through I/O dispatch if PC is in `$Cxxx`)
//! 2. Resolve the addressing mode and charge base cycles plus any page-cross
//!    penalty
//! 3. Execute the operation (branches and decimal arithmetic may add cycles)
//! 4. Report the opcode's cycles to the synchronous peripherals
//! 5. Service a pending NMI, then a pending IRQ
//! 6. Report opcode plus interrupt-entry cycles to the video scanner
//!
//! The loop always runs at least one opcode and stops once the executed
//! cycle count reaches the budget, or when the CPU jams.

use log::{trace, warn};

use crate::access::{Instrument, Model, Variant};
use crate::addressing;
use crate::clock::Peripherals;
use crate::cpu::Cpu;
use crate::disassembler;
use crate::instructions;
use crate::memory::MemoryBus;

pub(crate) fn run<M: MemoryBus, V: Variant, P: Peripherals>(
    cpu: &mut Cpu<M>,
    total: u32,
    video_update: bool,
    peripherals: &mut P,
) -> u32 {
    let mut executed: u32 = 0;

    loop {
        let previous = executed;
        let pc = cpu.regs.pc;

        let opcode = cpu.fetch_opcode::<V>();
        let meta = &<V::Model as Model>::table()[opcode as usize];

        if <V::Instrument as Instrument>::ENABLED {
            trace!(
                "{:04X}  {:<14} A={:02X} X={:02X} Y={:02X} P={:02X} S={:02X}",
                pc,
                disassembler::decode_fetched(meta, opcode, cpu.memory.image(), pc).to_string(),
                cpu.regs.a,
                cpu.regs.x,
                cpu.regs.y,
                cpu.regs.p,
                cpu.regs.s
            );
        }

        let (operand, crossed) = addressing::resolve::<M, V>(cpu, meta.addressing_mode);
        cpu.opcode_cycles = meta.base_cycles as u32 + u32::from(crossed && meta.page_penalty);
        instructions::execute::<M, V>(cpu, meta.instruction, operand);

        executed += cpu.opcode_cycles;
        cpu.clock.batch = executed;
        peripherals.update(executed - previous, executed);

        if cpu.regs.jammed {
            warn!("CPU jammed by opcode ${:02X} at ${:04X}", opcode, pc);
            if video_update {
                peripherals.video_update(executed - previous);
            }
            break;
        }

        executed += cpu.check_nmi::<V>();
        cpu.clock.batch = executed;
        executed += cpu.check_irq::<V>();
        cpu.clock.batch = executed;

        if video_update {
            peripherals.video_update(executed - previous);
        }

        if executed >= total {
            break;
        }
    }

    executed
}
