//! Validation support for the RP2A03 core: a bus that records every
//! access in order, and serde types for the SingleStepTests/65x02 JSON
//! vector format.

use rp2a03_core::bus::Bus;
use serde::{Deserialize, Serialize};

// --- TracingBus: flat 64KB memory with access recording ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusOp {
    Read,
    Write,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusCycle {
    pub addr: u16,
    pub data: u8,
    pub op: BusOp,
}

/// Flat 64KB memory that logs each read and write in the order the CPU
/// issued them. The log is the observable form of the core's bus-access
/// ordering contract (fetch, operand fetches, operand reads, writes).
pub struct TracingBus {
    pub memory: [u8; 0x10000],
    pub cycles: Vec<BusCycle>,
}

impl TracingBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
            cycles: Vec::new(),
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }

    pub fn clear_cycles(&mut self) {
        self.cycles.clear();
    }
}

impl Default for TracingBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for TracingBus {
    fn read(&mut self, addr: u16) -> u8 {
        let data = self.memory[addr as usize];
        self.cycles.push(BusCycle {
            addr,
            data,
            op: BusOp::Read,
        });
        data
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
        self.cycles.push(BusCycle {
            addr,
            data,
            op: BusOp::Write,
        });
    }
}

// --- JSON test vector types (SingleStepTests/65x02 format) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub initial: TestCpuState,
    #[serde(rename = "final")]
    pub final_state: TestCpuState,
    pub cycles: Vec<(u16, u8, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCpuState {
    pub pc: u16,
    pub s: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    pub ram: Vec<(u16, u8)>,
}
