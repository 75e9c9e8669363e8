mod common;
use common::{cpu_with, TestBus};
use rp2a03_core::cpu::{Cpu, StatusFlag};

// =============================================================================
// Conditional branches
// =============================================================================

#[test]
fn test_bne_not_taken() {
    let mut cpu = cpu_with(&[0xD0, 0x10]); // BNE +16
    cpu.p.set(StatusFlag::Z, true);
    cpu.tick();
    assert_eq!(cpu.pc, 2); // falls through to the next instruction
}

#[test]
fn test_bne_taken_forward() {
    let mut cpu = cpu_with(&[0xD0, 0x10]); // BNE +16
    cpu.tick();
    assert_eq!(cpu.pc, 0x12); // 2 + 0x10
}

#[test]
fn test_beq_taken_backward() {
    let mut bus = TestBus::new();
    bus.load(0x0200, &[0xF0, 0xFC]); // BEQ -4
    let mut cpu = Cpu::new(bus);
    cpu.pc = 0x0200;
    cpu.p.set(StatusFlag::Z, true);
    cpu.tick();
    assert_eq!(cpu.pc, 0x01FE); // 0x0202 - 4
}

#[test]
fn test_branch_leaves_flags_alone() {
    let mut cpu = cpu_with(&[0xD0, 0x10]); // BNE
    cpu.p.set(StatusFlag::C, true);
    cpu.p.set(StatusFlag::N, true);
    cpu.tick();
    assert!(cpu.p.carry());
    assert!(cpu.p.negative());
}

#[test]
fn test_bpl_bmi() {
    let mut cpu = cpu_with(&[0x10, 0x02, 0x00, 0x00, 0x30, 0x02]); // BPL +2 ... BMI +2
    cpu.tick();
    assert_eq!(cpu.pc, 4); // taken: N clear
    cpu.p.set(StatusFlag::N, true);
    cpu.tick();
    assert_eq!(cpu.pc, 8); // taken: N set
}

#[test]
fn test_bvc_bvs() {
    let mut cpu = cpu_with(&[0x50, 0x02]); // BVC +2
    cpu.p.set_overflow(true);
    cpu.tick();
    assert_eq!(cpu.pc, 2); // not taken

    let mut cpu = cpu_with(&[0x70, 0x02]); // BVS +2
    cpu.p.set_overflow(true);
    cpu.tick();
    assert_eq!(cpu.pc, 4); // taken
}

#[test]
fn test_bcc_bcs() {
    let mut cpu = cpu_with(&[0x90, 0x02]); // BCC +2
    cpu.tick();
    assert_eq!(cpu.pc, 4); // taken: C clear

    let mut cpu = cpu_with(&[0xB0, 0x02]); // BCS +2
    cpu.tick();
    assert_eq!(cpu.pc, 2); // not taken
}

#[test]
fn test_countdown_loop() {
    // DEX; BNE -3 spins until X hits zero.
    let mut bus = TestBus::new();
    bus.load(0x8000, &[0xCA, 0xD0, 0xFD, 0x00]);
    let mut cpu = Cpu::new(bus);
    cpu.pc = 0x8000;
    cpu.x = 3;

    let mut ticks = 0;
    while cpu.pc != 0x8003 {
        cpu.tick();
        ticks += 1;
        assert!(ticks < 100, "loop never terminated");
    }
    assert_eq!(cpu.x, 0);
    assert!(cpu.p.zero());
    assert_eq!(ticks, 6); // 3x DEX, 2 taken BNE, 1 fall-through
}

// =============================================================================
// JMP
// =============================================================================

#[test]
fn test_jmp_abs() {
    let mut cpu = cpu_with(&[0x4C, 0x34, 0x12]); // JMP $1234
    cpu.tick();
    assert_eq!(cpu.pc, 0x1234);
}

#[test]
fn test_jmp_ind() {
    let mut cpu = cpu_with(&[0x6C, 0x00, 0x30]); // JMP ($3000)
    cpu.bus.memory[0x3000] = 0x78;
    cpu.bus.memory[0x3001] = 0x56;
    cpu.tick();
    assert_eq!(cpu.pc, 0x5678);
}

#[test]
fn test_jmp_ind_page_wrap_quirk() {
    // Pointer at $10FF: high byte comes from $1000, not $1100.
    let mut cpu = cpu_with(&[0x6C, 0xFF, 0x10]); // JMP ($10FF)
    cpu.bus.memory[0x10FF] = 0x34;
    cpu.bus.memory[0x1000] = 0x12;
    cpu.bus.memory[0x1100] = 0xEE; // would be read without the quirk
    cpu.tick();
    assert_eq!(cpu.pc, 0x1234);
}

// =============================================================================
// JSR / RTS
// =============================================================================

#[test]
fn test_jsr() {
    let mut bus = TestBus::new();
    bus.load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
    let mut cpu = Cpu::new(bus);
    cpu.pc = 0x8000;
    cpu.sp = 0xFD;
    cpu.tick();
    assert_eq!(cpu.pc, 0x9000);
    assert_eq!(cpu.sp, 0xFB);
    // Pushed address is the operand's last byte: $8002, high byte first.
    assert_eq!(cpu.bus.memory[0x01FD], 0x80);
    assert_eq!(cpu.bus.memory[0x01FC], 0x02);
}

#[test]
fn test_jsr_rts_pair() {
    let mut bus = TestBus::new();
    bus.load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
    bus.load(0x9000, &[0x60]); // RTS
    let mut cpu = Cpu::new(bus);
    cpu.pc = 0x8000;
    cpu.sp = 0xFD;
    cpu.tick(); // JSR
    cpu.tick(); // RTS
    assert_eq!(cpu.pc, 0x8003); // instruction after the JSR
    assert_eq!(cpu.sp, 0xFD); // stack balanced
}

#[test]
fn test_nested_jsr() {
    let mut bus = TestBus::new();
    bus.load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
    bus.load(0x9000, &[0x20, 0x00, 0xA0, 0x60]); // JSR $A000; RTS
    bus.load(0xA000, &[0x60]); // RTS
    let mut cpu = Cpu::new(bus);
    cpu.pc = 0x8000;
    cpu.sp = 0xFD;
    cpu.tick(); // JSR $9000
    cpu.tick(); // JSR $A000
    assert_eq!(cpu.pc, 0xA000);
    assert_eq!(cpu.sp, 0xF9);
    cpu.tick(); // RTS -> $9003
    assert_eq!(cpu.pc, 0x9003);
    cpu.tick(); // RTS -> $8003
    assert_eq!(cpu.pc, 0x8003);
    assert_eq!(cpu.sp, 0xFD);
}
