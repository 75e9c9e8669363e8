//! Undocumented opcodes.
//!
//! The stable ones are mostly read-modify-write composites that chain two
//! documented operations on the same effective address, so they lean on
//! the perform_* helpers from the shift and ALU modules. The handful that
//! depend on analog chip behavior (ANE, LXA, SHA, SHX, SHY, TAS) decode
//! and advance PC like the real entries but change no state.

use log::warn;

use crate::bus::Bus;
use crate::cpu::{Cpu, RunState, StatusFlag};

impl<B: Bus> Cpu<B> {
    // ---- Stable loads/stores ----

    /// LAX - LDA then TAX: M goes to both A and X. Sets N, Z.
    pub(crate) fn lax(&mut self) {
        let value = self.read_operand();
        self.a = value;
        self.x = value;
        self.p.update_nz(value);
    }

    /// SAX - store A & X. Flags unchanged.
    pub(crate) fn sax(&mut self) {
        let value = self.a & self.x;
        self.write_operand(value);
    }

    /// LAS - M & SP into A, X and SP. Sets N, Z.
    pub(crate) fn las(&mut self) {
        let value = self.read_operand() & self.sp;
        self.a = value;
        self.x = value;
        self.sp = value;
        self.p.update_nz(value);
    }

    // ---- Read-modify-write composites ----

    /// DCP - DEC then CMP against A.
    pub(crate) fn dcp(&mut self) {
        let result = self.read_operand().wrapping_sub(1);
        self.write_operand(result);
        self.perform_compare(self.a, result);
    }

    /// ISC - INC then SBC.
    pub(crate) fn isc(&mut self) {
        let result = self.read_operand().wrapping_add(1);
        self.write_operand(result);
        self.perform_adc(!result);
    }

    /// SLO - ASL then ORA.
    pub(crate) fn slo(&mut self) {
        let value = self.read_operand();
        let result = self.perform_asl(value);
        self.write_operand(result);
        self.a |= result;
        self.p.update_nz(self.a);
    }

    /// SRE - LSR then EOR.
    pub(crate) fn sre(&mut self) {
        let value = self.read_operand();
        let result = self.perform_lsr(value);
        self.write_operand(result);
        self.a ^= result;
        self.p.update_nz(self.a);
    }

    /// RLA - ROL then AND.
    pub(crate) fn rla(&mut self) {
        let value = self.read_operand();
        let result = self.perform_rol(value);
        self.write_operand(result);
        self.a &= result;
        self.p.update_nz(self.a);
    }

    /// RRA - ROR then ADC of the rotated value.
    pub(crate) fn rra(&mut self) {
        let value = self.read_operand();
        let result = self.perform_ror(value);
        self.write_operand(result);
        self.perform_adc(result);
    }

    // ---- Immediate-mode combos ----

    /// ALR - AND then LSR A. C takes bit 0 of the AND result.
    pub(crate) fn alr(&mut self) {
        let value = self.a & self.read_operand();
        self.a = self.perform_lsr(value);
    }

    /// ANC - AND, then C mirrors N.
    pub(crate) fn anc(&mut self) {
        self.a &= self.read_operand();
        self.p.update_nz(self.a);
        let negative = self.p.negative();
        self.p.set_carry(negative);
    }

    /// ARR - AND then ROR A, with the adder's quirks: C comes from bit 6
    /// of the result and V from bit 6 xor bit 5.
    pub(crate) fn arr(&mut self) {
        let and = self.a & self.read_operand();
        let result = and >> 1 | (self.p.carry() as u8) << 7;
        self.a = result;
        self.p.update_nz(result);
        self.p.set(StatusFlag::C, result & 0x40 != 0);
        self.p
            .set(StatusFlag::V, (result >> 6 ^ result >> 5) & 0x01 != 0);
    }

    /// SBX - X = (A & X) - M, with compare-style carry.
    pub(crate) fn sbx(&mut self) {
        let operand = self.read_operand();
        let base = self.a & self.x;
        self.p.set_carry(base >= operand);
        self.x = base.wrapping_sub(operand);
        self.p.update_nz(self.x);
    }

    // ---- Halt ----

    /// JAM - freeze the CPU. Every later tick is a no-op until reset.
    pub(crate) fn jam(&mut self) {
        if self.state == RunState::Running {
            warn!("jam opcode at {:#06x}, cpu halted", self.pc.wrapping_sub(1));
            self.state = RunState::Jammed;
        }
    }
}
