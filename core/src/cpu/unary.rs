use crate::bus::Bus;
use crate::cpu::{Cpu, StatusFlag};

impl<B: Bus> Cpu<B> {
    // ---- Memory increment/decrement ----

    /// INC - Increment Memory by One. Sets N, Z.
    pub(crate) fn inc(&mut self) {
        let result = self.read_operand().wrapping_add(1);
        self.p.update_nz(result);
        self.write_operand(result);
    }

    /// DEC - Decrement Memory by One. Sets N, Z.
    pub(crate) fn dec(&mut self) {
        let result = self.read_operand().wrapping_sub(1);
        self.p.update_nz(result);
        self.write_operand(result);
    }

    // ---- Register increment/decrement ----

    /// INX - Increment Index X. Sets N, Z.
    pub(crate) fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.p.update_nz(self.x);
    }

    /// INY - Increment Index Y. Sets N, Z.
    pub(crate) fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.p.update_nz(self.y);
    }

    /// DEX - Decrement Index X. Sets N, Z.
    pub(crate) fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.p.update_nz(self.x);
    }

    /// DEY - Decrement Index Y. Sets N, Z.
    pub(crate) fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.p.update_nz(self.y);
    }

    // ---- Register transfers ----

    /// TAX - Transfer A to X. Sets N, Z.
    pub(crate) fn tax(&mut self) {
        self.x = self.a;
        self.p.update_nz(self.x);
    }

    /// TAY - Transfer A to Y. Sets N, Z.
    pub(crate) fn tay(&mut self) {
        self.y = self.a;
        self.p.update_nz(self.y);
    }

    /// TSX - Transfer SP to X. Sets N, Z.
    pub(crate) fn tsx(&mut self) {
        self.x = self.sp;
        self.p.update_nz(self.x);
    }

    /// TXA - Transfer X to A. Sets N, Z.
    pub(crate) fn txa(&mut self) {
        self.a = self.x;
        self.p.update_nz(self.a);
    }

    /// TYA - Transfer Y to A. Sets N, Z.
    pub(crate) fn tya(&mut self) {
        self.a = self.y;
        self.p.update_nz(self.a);
    }

    /// TXS - Transfer X to SP. The one transfer that leaves flags alone.
    pub(crate) fn txs(&mut self) {
        self.sp = self.x;
    }

    // ---- Flag instructions ----

    /// CLC - Clear Carry.
    pub(crate) fn clc(&mut self) {
        self.p.set(StatusFlag::C, false);
    }

    /// SEC - Set Carry.
    pub(crate) fn sec(&mut self) {
        self.p.set(StatusFlag::C, true);
    }

    /// CLI - Clear Interrupt Disable.
    pub(crate) fn cli(&mut self) {
        self.p.set(StatusFlag::I, false);
    }

    /// SEI - Set Interrupt Disable.
    pub(crate) fn sei(&mut self) {
        self.p.set(StatusFlag::I, true);
    }

    /// CLD - Clear Decimal. Bookkeeping only: D never alters arithmetic here.
    pub(crate) fn cld(&mut self) {
        self.p.set(StatusFlag::D, false);
    }

    /// SED - Set Decimal. Bookkeeping only.
    pub(crate) fn sed(&mut self) {
        self.p.set(StatusFlag::D, true);
    }

    /// CLV - Clear Overflow.
    pub(crate) fn clv(&mut self) {
        self.p.set(StatusFlag::V, false);
    }

    /// NOP - No Operation.
    pub(crate) fn nop(&mut self) {}

    /// NOP variants with an operand: the addressing routine already
    /// consumed the operand bytes; mirror the hardware's operand read.
    pub(crate) fn nop_read(&mut self) {
        let _ = self.read_operand();
    }
}
