//! The RP2A03 CPU core.
//!
//! Instruction-level emulation: one `tick()` fetches, decodes and executes
//! a whole machine instruction against the bus the CPU was built with.
//! Submodules split the implementation by concern:
//!
//! ```text
//! status.rs       - P register bitfield.
//! state.rs        - register snapshot type.
//! mem.rs          - bus fetch helpers, word reads, stack page.
//! addressing.rs   - addressing-mode tags and operand resolution.
//! opcode.rs       - the 256-entry dispatch table.
//! alu.rs          - arithmetic, compares, logical ops, BIT.
//! load_store.rs   - LDA/LDX/LDY, STA/STX/STY.
//! shift.rs        - ASL/LSR/ROL/ROR.
//! unary.rs        - INC/DEC, transfers, flag instructions, NOP.
//! stack.rs        - PHA/PHP/PLA/PLP, BRK, RTI, interrupt entry.
//! branch.rs       - conditional branches, JMP, JSR, RTS.
//! undocumented.rs - stable undocumented opcodes and JAM.
//! ```

pub mod addressing;
mod alu;
mod branch;
mod load_store;
mod mem;
pub mod opcode;
mod shift;
mod stack;
pub mod state;
pub mod status;
mod unary;
mod undocumented;

pub use addressing::AddrMode;
pub use opcode::Opcode;
pub use state::CpuState;
pub use status::{Status, StatusFlag};

use log::debug;

use crate::bus::{Bus, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
use crate::trace::{TraceEvent, TraceSink};

/// Externally observable execution state. A JAM opcode moves the CPU to
/// `Jammed`, where ticks are no-ops; only `reset()` brings it back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Jammed,
}

pub struct Cpu<B: Bus> {
    // Registers
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub p: Status,
    /// Base cycles retired since reset.
    pub cycles: u64,

    pub bus: B,

    // Working state of the instruction in flight: the resolved effective
    // address and the decoded entry. Both are overwritten on every tick;
    // execute routines query the entry for its addressing mode.
    pub(crate) op: u16,
    pub(crate) cmd: Opcode<B>,

    pub(crate) state: RunState,
    table: Box<[Opcode<B>; 256]>,
    trace: Option<Box<dyn TraceSink>>,
}

impl<B: Bus> Cpu<B> {
    /// Build a CPU around a bus. Registers come up zeroed; call `reset()`
    /// to load PC from the reset vector before ticking.
    pub fn new(bus: B) -> Self {
        let table = opcode::build_table();
        let cmd = table[0xEA]; // NOP until the first decode
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0,
            pc: 0,
            p: Status::new(),
            cycles: 0,
            bus,
            op: 0,
            cmd,
            state: RunState::Running,
            table,
            trace: None,
        }
    }

    /// Clear registers and flags, load PC from $FFFC/$FFFD, and leave the
    /// `Jammed` state if a halt opcode got us there.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0;
        self.p = Status::new();
        self.cycles = 0;
        self.pc = self.read_vector(RESET_VECTOR);
        self.state = RunState::Running;
        debug!("reset, pc = {:#06x}", self.pc);
    }

    /// Execute one instruction: fetch the opcode at PC, resolve its
    /// addressing mode (consuming operand bytes), run its semantics, and
    /// hand the retired instruction to the trace sink. Does nothing while
    /// jammed.
    pub fn tick(&mut self) {
        if self.state == RunState::Jammed {
            return;
        }

        let pc = self.pc;
        let code = self.fetch_byte();
        let cmd = self.table[code as usize];
        self.cmd = cmd;

        self.resolve(cmd.mode);
        (cmd.exec)(self);
        self.cycles += cmd.cycles as u64;

        let state = self.snapshot();
        if let Some(sink) = self.trace.as_mut() {
            sink.record(&TraceEvent {
                pc,
                code,
                mnemonic: cmd.mnemonic,
                mode: cmd.mode,
                state,
            });
        }
    }

    /// Maskable interrupt line. Ignored while I is set or the CPU is
    /// jammed; otherwise pushes a hardware frame and vectors to $FFFE.
    pub fn irq(&mut self) {
        if self.state == RunState::Jammed || self.p.interrupt_disabled() {
            return;
        }
        self.interrupt(IRQ_VECTOR);
    }

    /// Non-maskable interrupt line. Only a jammed CPU ignores it.
    pub fn nmi(&mut self) {
        if self.state == RunState::Jammed {
            return;
        }
        self.interrupt(NMI_VECTOR);
    }

    pub fn is_jammed(&self) -> bool {
        self.state == RunState::Jammed
    }

    /// Copy out the register file.
    pub fn snapshot(&self) -> CpuState {
        CpuState {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            sp: self.sp,
            p: self.p.bits(),
            cycles: self.cycles,
        }
    }

    /// Install a trace sink; it receives one event per retired
    /// instruction from then on.
    pub fn attach_trace(&mut self, sink: Box<dyn TraceSink>) {
        self.trace = Some(sink);
    }

    /// Look up a dispatch entry, e.g. for a disassembler front-end.
    pub fn decode(&self, code: u8) -> &Opcode<B> {
        &self.table[code as usize]
    }

    // ---- Operand access ----
    //
    // Instructions read and write "the operand" without caring where it
    // lives; accumulator-mode entries route to A, everything else goes to
    // the bus at the resolved effective address.

    #[inline]
    pub(crate) fn read_operand(&mut self) -> u8 {
        if self.cmd.mode == AddrMode::Acc {
            self.a
        } else {
            self.bus.read(self.op)
        }
    }

    #[inline]
    pub(crate) fn write_operand(&mut self, data: u8) {
        if self.cmd.mode == AddrMode::Acc {
            self.a = data;
        } else {
            self.bus.write(self.op, data);
        }
    }
}
