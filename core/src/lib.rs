pub mod bus;
pub mod cpu;
pub mod trace;

pub mod prelude {
    pub use crate::bus::Bus;
    pub use crate::cpu::{AddrMode, Cpu, CpuState, Opcode, RunState, Status, StatusFlag};
    pub use crate::trace::{TraceEvent, TraceSink};
}
