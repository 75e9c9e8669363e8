use crate::bus::Bus;
use crate::cpu::Cpu;

impl<B: Bus> Cpu<B> {
    // ---- Loads ----

    /// LDA - Load Accumulator with Memory. Sets N, Z.
    pub(crate) fn lda(&mut self) {
        self.a = self.read_operand();
        self.p.update_nz(self.a);
    }

    /// LDX - Load Index X with Memory. Sets N, Z.
    pub(crate) fn ldx(&mut self) {
        self.x = self.read_operand();
        self.p.update_nz(self.x);
    }

    /// LDY - Load Index Y with Memory. Sets N, Z.
    pub(crate) fn ldy(&mut self) {
        self.y = self.read_operand();
        self.p.update_nz(self.y);
    }

    // ---- Stores (flags unchanged) ----

    /// STA - Store Accumulator in Memory.
    pub(crate) fn sta(&mut self) {
        let a = self.a;
        self.write_operand(a);
    }

    /// STX - Store Index X in Memory.
    pub(crate) fn stx(&mut self) {
        let x = self.x;
        self.write_operand(x);
    }

    /// STY - Store Index Y in Memory.
    pub(crate) fn sty(&mut self) {
        let y = self.y;
        self.write_operand(y);
    }
}
