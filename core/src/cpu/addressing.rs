//! Addressing-mode resolution.
//!
//! Each opcode entry carries one of these tags. Resolving a mode consumes
//! the instruction's operand bytes (advancing PC) and leaves the effective
//! address in the CPU's `op` scratch register; the execute routine then
//! goes through `read_operand`/`write_operand`, which route to the
//! accumulator instead of the bus when the mode says so.

use crate::bus::Bus;
use crate::cpu::Cpu;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddrMode {
    /// No operand; the opcode names everything it touches.
    Imp,
    /// Operates on A directly. One-byte instruction.
    Acc,
    /// `op` holds the address of the immediate byte.
    Imm,
    /// One-byte address into page zero.
    Zpg,
    /// Zero page plus X, wrapping within page zero.
    ZpgX,
    /// Zero page plus Y, wrapping within page zero.
    ZpgY,
    /// Two-byte little-endian address.
    Abs,
    /// Absolute plus X, with carry across pages.
    AbsX,
    /// Absolute plus Y, with carry across pages.
    AbsY,
    /// JMP only: the operand points at a two-byte target address.
    Ind,
    /// ($LL,X): X-indexed pointer in page zero.
    IndX,
    /// ($LL),Y: page-zero pointer, then Y added to the target.
    IndY,
    /// Branches: same layout as Imm, target computed at execute time.
    Rel,
}

impl<B: Bus> Cpu<B> {
    /// Run the addressing routine for `mode`: advance PC past the operand
    /// bytes and set `op` to the effective address.
    pub(crate) fn resolve(&mut self, mode: AddrMode) {
        use AddrMode::*;
        self.op = match mode {
            Imp => 0,
            Acc => self.a as u16,
            Imm | Rel => {
                let at = self.pc;
                self.pc = self.pc.wrapping_add(1);
                at
            }
            Zpg => self.fetch_byte() as u16,
            ZpgX => {
                let base = self.fetch_byte();
                base.wrapping_add(self.x) as u16
            }
            ZpgY => {
                let base = self.fetch_byte();
                base.wrapping_add(self.y) as u16
            }
            Abs => self.fetch_word(),
            AbsX => self.fetch_word().wrapping_add(self.x as u16),
            AbsY => self.fetch_word().wrapping_add(self.y as u16),
            Ind => {
                let ptr = self.fetch_word();
                self.read_word_wrapped(ptr)
            }
            IndX => {
                let ptr = self.fetch_byte().wrapping_add(self.x);
                self.read_word_zp(ptr)
            }
            IndY => {
                let ptr = self.fetch_byte();
                self.read_word_zp(ptr).wrapping_add(self.y as u16)
            }
        };
    }
}
