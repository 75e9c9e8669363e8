use crate::bus::Bus;
use crate::cpu::{Cpu, StatusFlag};

impl<B: Bus> Cpu<B> {
    // ---- Shift/rotate helpers ----
    //
    // The perform_* helpers take the old value and return the shifted one
    // so the undocumented read-modify-write composites can reuse them.

    /// Shift left. C takes bit 8 of the widened result (the old bit 7).
    #[inline]
    pub(crate) fn perform_asl(&mut self, value: u8) -> u8 {
        let wide = (value as u16) << 1;
        let result = wide as u8;
        self.p.set_carry_wide(wide);
        self.p.update_nz(result);
        result
    }

    /// Shift right. C takes the old bit 0; N is always clear.
    #[inline]
    pub(crate) fn perform_lsr(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.p.set(StatusFlag::C, value & 0x01 != 0);
        self.p.update_nz(result);
        result
    }

    /// Rotate left through carry: old C enters bit 0, old bit 7 exits to C.
    #[inline]
    pub(crate) fn perform_rol(&mut self, value: u8) -> u8 {
        let result = value << 1 | self.p.carry() as u8;
        self.p.set(StatusFlag::C, value & 0x80 != 0);
        self.p.update_nz(result);
        result
    }

    /// Rotate right through carry: old C enters bit 7, old bit 0 exits to C.
    #[inline]
    pub(crate) fn perform_ror(&mut self, value: u8) -> u8 {
        let result = value >> 1 | (self.p.carry() as u8) << 7;
        self.p.set(StatusFlag::C, value & 0x01 != 0);
        self.p.update_nz(result);
        result
    }

    // ---- Instructions (memory or accumulator per the entry's mode) ----

    /// ASL - Shift Left One Bit.
    pub(crate) fn asl(&mut self) {
        let value = self.read_operand();
        let result = self.perform_asl(value);
        self.write_operand(result);
    }

    /// LSR - Shift One Bit Right.
    pub(crate) fn lsr(&mut self) {
        let value = self.read_operand();
        let result = self.perform_lsr(value);
        self.write_operand(result);
    }

    /// ROL - Rotate One Bit Left.
    pub(crate) fn rol(&mut self) {
        let value = self.read_operand();
        let result = self.perform_rol(value);
        self.write_operand(result);
    }

    /// ROR - Rotate One Bit Right.
    pub(crate) fn ror(&mut self) {
        let value = self.read_operand();
        let result = self.perform_ror(value);
        self.write_operand(result);
    }
}
