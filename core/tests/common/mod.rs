// Each integration test binary compiles its own copy; not every binary
// uses every helper.
#![allow(dead_code)]

use rp2a03_core::bus::Bus;
use rp2a03_core::cpu::Cpu;

/// Minimal bus for testing: flat 64KB read/write memory, no peripherals.
pub struct TestBus {
    pub memory: [u8; 0x10000],
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }
}

impl Bus for TestBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
    }
}

/// CPU over a fresh TestBus with `program` loaded at address 0.
/// PC starts at 0, so the first tick executes the first program byte.
pub fn cpu_with(program: &[u8]) -> Cpu<TestBus> {
    let mut bus = TestBus::new();
    bus.load(0, program);
    Cpu::new(bus)
}
