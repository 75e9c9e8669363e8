//! CPU register snapshot.

/// Register state at a point in time, as handed to trace sinks and test
/// assertions. Plain data; taking one never touches the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,   // Accumulator
    pub x: u8,   // X index register
    pub y: u8,   // Y index register
    pub pc: u16, // Program counter
    pub sp: u8,  // Stack pointer (page 1 offset)
    pub p: u8,   // Status register (flags)
    /// Base cycles retired since the last reset.
    pub cycles: u64,
}
