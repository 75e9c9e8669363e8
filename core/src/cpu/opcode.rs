//! The opcode dispatch table.
//!
//! One entry per opcode byte, built once at CPU construction and immutable
//! afterwards. An entry is a value type: mnemonic for the trace, the
//! addressing-mode tag, the execute function, and the base cycle count.
//! The table is total over u8: the twelve halt opcodes carry the JAM
//! entry, and every undocumented position decodes to something defined.

use crate::bus::Bus;
use crate::cpu::{AddrMode, Cpu};

pub type ExecFn<B> = fn(&mut Cpu<B>);

pub struct Opcode<B: Bus> {
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    pub(crate) exec: ExecFn<B>,
    /// Base cycles, not counting page-cross or branch-taken penalties.
    pub cycles: u8,
}

impl<B: Bus> Clone for Opcode<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Bus> Copy for Opcode<B> {}

fn entry<B: Bus>(
    mnemonic: &'static str,
    mode: AddrMode,
    exec: ExecFn<B>,
    cycles: u8,
) -> Opcode<B> {
    Opcode {
        mnemonic,
        mode,
        exec,
        cycles,
    }
}

pub(crate) fn build_table<B: Bus>() -> Box<[Opcode<B>; 256]> {
    use AddrMode::*;

    // Seed the whole table with JAM; the halt positions ($02, $12, ...,
    // $F2) are exactly the ones never overwritten below.
    let mut t = Box::new([entry("JAM", Imp, Cpu::jam as ExecFn<B>, 2); 256]);

    // --- LDA ---
    t[0xA9] = entry("LDA", Imm, Cpu::lda, 2);
    t[0xA5] = entry("LDA", Zpg, Cpu::lda, 3);
    t[0xB5] = entry("LDA", ZpgX, Cpu::lda, 4);
    t[0xAD] = entry("LDA", Abs, Cpu::lda, 4);
    t[0xBD] = entry("LDA", AbsX, Cpu::lda, 4);
    t[0xB9] = entry("LDA", AbsY, Cpu::lda, 4);
    t[0xA1] = entry("LDA", IndX, Cpu::lda, 6);
    t[0xB1] = entry("LDA", IndY, Cpu::lda, 5);

    // --- LDX ---
    t[0xA2] = entry("LDX", Imm, Cpu::ldx, 2);
    t[0xA6] = entry("LDX", Zpg, Cpu::ldx, 3);
    t[0xB6] = entry("LDX", ZpgY, Cpu::ldx, 4);
    t[0xAE] = entry("LDX", Abs, Cpu::ldx, 4);
    t[0xBE] = entry("LDX", AbsY, Cpu::ldx, 4);

    // --- LDY ---
    t[0xA0] = entry("LDY", Imm, Cpu::ldy, 2);
    t[0xA4] = entry("LDY", Zpg, Cpu::ldy, 3);
    t[0xB4] = entry("LDY", ZpgX, Cpu::ldy, 4);
    t[0xAC] = entry("LDY", Abs, Cpu::ldy, 4);
    t[0xBC] = entry("LDY", AbsX, Cpu::ldy, 4);

    // --- STA ---
    t[0x85] = entry("STA", Zpg, Cpu::sta, 3);
    t[0x95] = entry("STA", ZpgX, Cpu::sta, 4);
    t[0x8D] = entry("STA", Abs, Cpu::sta, 4);
    t[0x9D] = entry("STA", AbsX, Cpu::sta, 5);
    t[0x99] = entry("STA", AbsY, Cpu::sta, 5);
    t[0x81] = entry("STA", IndX, Cpu::sta, 6);
    t[0x91] = entry("STA", IndY, Cpu::sta, 6);

    // --- STX ---
    t[0x86] = entry("STX", Zpg, Cpu::stx, 3);
    t[0x96] = entry("STX", ZpgY, Cpu::stx, 4);
    t[0x8E] = entry("STX", Abs, Cpu::stx, 4);

    // --- STY ---
    t[0x84] = entry("STY", Zpg, Cpu::sty, 3);
    t[0x94] = entry("STY", ZpgX, Cpu::sty, 4);
    t[0x8C] = entry("STY", Abs, Cpu::sty, 4);

    // --- ADC ---
    t[0x69] = entry("ADC", Imm, Cpu::adc, 2);
    t[0x65] = entry("ADC", Zpg, Cpu::adc, 3);
    t[0x75] = entry("ADC", ZpgX, Cpu::adc, 4);
    t[0x6D] = entry("ADC", Abs, Cpu::adc, 4);
    t[0x7D] = entry("ADC", AbsX, Cpu::adc, 4);
    t[0x79] = entry("ADC", AbsY, Cpu::adc, 4);
    t[0x61] = entry("ADC", IndX, Cpu::adc, 6);
    t[0x71] = entry("ADC", IndY, Cpu::adc, 5);

    // --- SBC ---
    t[0xE9] = entry("SBC", Imm, Cpu::sbc, 2);
    t[0xE5] = entry("SBC", Zpg, Cpu::sbc, 3);
    t[0xF5] = entry("SBC", ZpgX, Cpu::sbc, 4);
    t[0xED] = entry("SBC", Abs, Cpu::sbc, 4);
    t[0xFD] = entry("SBC", AbsX, Cpu::sbc, 4);
    t[0xF9] = entry("SBC", AbsY, Cpu::sbc, 4);
    t[0xE1] = entry("SBC", IndX, Cpu::sbc, 6);
    t[0xF1] = entry("SBC", IndY, Cpu::sbc, 5);

    // --- CMP ---
    t[0xC9] = entry("CMP", Imm, Cpu::cmp, 2);
    t[0xC5] = entry("CMP", Zpg, Cpu::cmp, 3);
    t[0xD5] = entry("CMP", ZpgX, Cpu::cmp, 4);
    t[0xCD] = entry("CMP", Abs, Cpu::cmp, 4);
    t[0xDD] = entry("CMP", AbsX, Cpu::cmp, 4);
    t[0xD9] = entry("CMP", AbsY, Cpu::cmp, 4);
    t[0xC1] = entry("CMP", IndX, Cpu::cmp, 6);
    t[0xD1] = entry("CMP", IndY, Cpu::cmp, 5);

    // --- CPX / CPY ---
    t[0xE0] = entry("CPX", Imm, Cpu::cpx, 2);
    t[0xE4] = entry("CPX", Zpg, Cpu::cpx, 3);
    t[0xEC] = entry("CPX", Abs, Cpu::cpx, 4);
    t[0xC0] = entry("CPY", Imm, Cpu::cpy, 2);
    t[0xC4] = entry("CPY", Zpg, Cpu::cpy, 3);
    t[0xCC] = entry("CPY", Abs, Cpu::cpy, 4);

    // --- AND ---
    t[0x29] = entry("AND", Imm, Cpu::and, 2);
    t[0x25] = entry("AND", Zpg, Cpu::and, 3);
    t[0x35] = entry("AND", ZpgX, Cpu::and, 4);
    t[0x2D] = entry("AND", Abs, Cpu::and, 4);
    t[0x3D] = entry("AND", AbsX, Cpu::and, 4);
    t[0x39] = entry("AND", AbsY, Cpu::and, 4);
    t[0x21] = entry("AND", IndX, Cpu::and, 6);
    t[0x31] = entry("AND", IndY, Cpu::and, 5);

    // --- ORA ---
    t[0x09] = entry("ORA", Imm, Cpu::ora, 2);
    t[0x05] = entry("ORA", Zpg, Cpu::ora, 3);
    t[0x15] = entry("ORA", ZpgX, Cpu::ora, 4);
    t[0x0D] = entry("ORA", Abs, Cpu::ora, 4);
    t[0x1D] = entry("ORA", AbsX, Cpu::ora, 4);
    t[0x19] = entry("ORA", AbsY, Cpu::ora, 4);
    t[0x01] = entry("ORA", IndX, Cpu::ora, 6);
    t[0x11] = entry("ORA", IndY, Cpu::ora, 5);

    // --- EOR ---
    t[0x49] = entry("EOR", Imm, Cpu::eor, 2);
    t[0x45] = entry("EOR", Zpg, Cpu::eor, 3);
    t[0x55] = entry("EOR", ZpgX, Cpu::eor, 4);
    t[0x4D] = entry("EOR", Abs, Cpu::eor, 4);
    t[0x5D] = entry("EOR", AbsX, Cpu::eor, 4);
    t[0x59] = entry("EOR", AbsY, Cpu::eor, 4);
    t[0x41] = entry("EOR", IndX, Cpu::eor, 6);
    t[0x51] = entry("EOR", IndY, Cpu::eor, 5);

    // --- BIT ---
    t[0x24] = entry("BIT", Zpg, Cpu::bit, 3);
    t[0x2C] = entry("BIT", Abs, Cpu::bit, 4);

    // --- ASL ---
    t[0x0A] = entry("ASL", Acc, Cpu::asl, 2);
    t[0x06] = entry("ASL", Zpg, Cpu::asl, 5);
    t[0x16] = entry("ASL", ZpgX, Cpu::asl, 6);
    t[0x0E] = entry("ASL", Abs, Cpu::asl, 6);
    t[0x1E] = entry("ASL", AbsX, Cpu::asl, 7);

    // --- LSR ---
    t[0x4A] = entry("LSR", Acc, Cpu::lsr, 2);
    t[0x46] = entry("LSR", Zpg, Cpu::lsr, 5);
    t[0x56] = entry("LSR", ZpgX, Cpu::lsr, 6);
    t[0x4E] = entry("LSR", Abs, Cpu::lsr, 6);
    t[0x5E] = entry("LSR", AbsX, Cpu::lsr, 7);

    // --- ROL ---
    t[0x2A] = entry("ROL", Acc, Cpu::rol, 2);
    t[0x26] = entry("ROL", Zpg, Cpu::rol, 5);
    t[0x36] = entry("ROL", ZpgX, Cpu::rol, 6);
    t[0x2E] = entry("ROL", Abs, Cpu::rol, 6);
    t[0x3E] = entry("ROL", AbsX, Cpu::rol, 7);

    // --- ROR ---
    t[0x6A] = entry("ROR", Acc, Cpu::ror, 2);
    t[0x66] = entry("ROR", Zpg, Cpu::ror, 5);
    t[0x76] = entry("ROR", ZpgX, Cpu::ror, 6);
    t[0x6E] = entry("ROR", Abs, Cpu::ror, 6);
    t[0x7E] = entry("ROR", AbsX, Cpu::ror, 7);

    // --- INC / DEC (memory) ---
    t[0xE6] = entry("INC", Zpg, Cpu::inc, 5);
    t[0xF6] = entry("INC", ZpgX, Cpu::inc, 6);
    t[0xEE] = entry("INC", Abs, Cpu::inc, 6);
    t[0xFE] = entry("INC", AbsX, Cpu::inc, 7);
    t[0xC6] = entry("DEC", Zpg, Cpu::dec, 5);
    t[0xD6] = entry("DEC", ZpgX, Cpu::dec, 6);
    t[0xCE] = entry("DEC", Abs, Cpu::dec, 6);
    t[0xDE] = entry("DEC", AbsX, Cpu::dec, 7);

    // --- Register increment/decrement ---
    t[0xE8] = entry("INX", Imp, Cpu::inx, 2);
    t[0xC8] = entry("INY", Imp, Cpu::iny, 2);
    t[0xCA] = entry("DEX", Imp, Cpu::dex, 2);
    t[0x88] = entry("DEY", Imp, Cpu::dey, 2);

    // --- Transfers ---
    t[0xAA] = entry("TAX", Imp, Cpu::tax, 2);
    t[0xA8] = entry("TAY", Imp, Cpu::tay, 2);
    t[0xBA] = entry("TSX", Imp, Cpu::tsx, 2);
    t[0x8A] = entry("TXA", Imp, Cpu::txa, 2);
    t[0x98] = entry("TYA", Imp, Cpu::tya, 2);
    t[0x9A] = entry("TXS", Imp, Cpu::txs, 2);

    // --- Flag instructions ---
    t[0x18] = entry("CLC", Imp, Cpu::clc, 2);
    t[0x38] = entry("SEC", Imp, Cpu::sec, 2);
    t[0x58] = entry("CLI", Imp, Cpu::cli, 2);
    t[0x78] = entry("SEI", Imp, Cpu::sei, 2);
    t[0xD8] = entry("CLD", Imp, Cpu::cld, 2);
    t[0xF8] = entry("SED", Imp, Cpu::sed, 2);
    t[0xB8] = entry("CLV", Imp, Cpu::clv, 2);

    // --- Branches ---
    t[0x10] = entry("BPL", Rel, Cpu::bpl, 2);
    t[0x30] = entry("BMI", Rel, Cpu::bmi, 2);
    t[0x50] = entry("BVC", Rel, Cpu::bvc, 2);
    t[0x70] = entry("BVS", Rel, Cpu::bvs, 2);
    t[0x90] = entry("BCC", Rel, Cpu::bcc, 2);
    t[0xB0] = entry("BCS", Rel, Cpu::bcs, 2);
    t[0xD0] = entry("BNE", Rel, Cpu::bne, 2);
    t[0xF0] = entry("BEQ", Rel, Cpu::beq, 2);

    // --- Jumps & subroutines ---
    t[0x4C] = entry("JMP", Abs, Cpu::jmp, 3);
    t[0x6C] = entry("JMP", Ind, Cpu::jmp, 5);
    t[0x20] = entry("JSR", Abs, Cpu::jsr, 6);
    t[0x60] = entry("RTS", Imp, Cpu::rts, 6);
    t[0x40] = entry("RTI", Imp, Cpu::rti, 6);

    // --- Stack ---
    t[0x48] = entry("PHA", Imp, Cpu::pha, 3);
    t[0x68] = entry("PLA", Imp, Cpu::pla, 4);
    t[0x08] = entry("PHP", Imp, Cpu::php, 3);
    t[0x28] = entry("PLP", Imp, Cpu::plp, 4);

    // --- System ---
    t[0x00] = entry("BRK", Imp, Cpu::brk, 7);
    t[0xEA] = entry("NOP", Imp, Cpu::nop, 2);

    // --- Undocumented: NOP variants ---
    t[0x1A] = entry("NOP", Imp, Cpu::nop, 2);
    t[0x3A] = entry("NOP", Imp, Cpu::nop, 2);
    t[0x5A] = entry("NOP", Imp, Cpu::nop, 2);
    t[0x7A] = entry("NOP", Imp, Cpu::nop, 2);
    t[0xDA] = entry("NOP", Imp, Cpu::nop, 2);
    t[0xFA] = entry("NOP", Imp, Cpu::nop, 2);
    t[0x80] = entry("NOP", Imm, Cpu::nop_read, 2);
    t[0x82] = entry("NOP", Imm, Cpu::nop_read, 2);
    t[0x89] = entry("NOP", Imm, Cpu::nop_read, 2);
    t[0xC2] = entry("NOP", Imm, Cpu::nop_read, 2);
    t[0xE2] = entry("NOP", Imm, Cpu::nop_read, 2);
    t[0x04] = entry("NOP", Zpg, Cpu::nop_read, 3);
    t[0x44] = entry("NOP", Zpg, Cpu::nop_read, 3);
    t[0x64] = entry("NOP", Zpg, Cpu::nop_read, 3);
    t[0x14] = entry("NOP", ZpgX, Cpu::nop_read, 4);
    t[0x34] = entry("NOP", ZpgX, Cpu::nop_read, 4);
    t[0x54] = entry("NOP", ZpgX, Cpu::nop_read, 4);
    t[0x74] = entry("NOP", ZpgX, Cpu::nop_read, 4);
    t[0xD4] = entry("NOP", ZpgX, Cpu::nop_read, 4);
    t[0xF4] = entry("NOP", ZpgX, Cpu::nop_read, 4);
    t[0x0C] = entry("NOP", Abs, Cpu::nop_read, 4);
    t[0x1C] = entry("NOP", AbsX, Cpu::nop_read, 4);
    t[0x3C] = entry("NOP", AbsX, Cpu::nop_read, 4);
    t[0x5C] = entry("NOP", AbsX, Cpu::nop_read, 4);
    t[0x7C] = entry("NOP", AbsX, Cpu::nop_read, 4);
    t[0xDC] = entry("NOP", AbsX, Cpu::nop_read, 4);
    t[0xFC] = entry("NOP", AbsX, Cpu::nop_read, 4);

    // --- Undocumented: LAX / SAX / LAS ---
    t[0xA7] = entry("LAX", Zpg, Cpu::lax, 3);
    t[0xB7] = entry("LAX", ZpgY, Cpu::lax, 4);
    t[0xAF] = entry("LAX", Abs, Cpu::lax, 4);
    t[0xBF] = entry("LAX", AbsY, Cpu::lax, 4);
    t[0xA3] = entry("LAX", IndX, Cpu::lax, 6);
    t[0xB3] = entry("LAX", IndY, Cpu::lax, 5);
    t[0x87] = entry("SAX", Zpg, Cpu::sax, 3);
    t[0x97] = entry("SAX", ZpgY, Cpu::sax, 4);
    t[0x8F] = entry("SAX", Abs, Cpu::sax, 4);
    t[0x83] = entry("SAX", IndX, Cpu::sax, 6);
    t[0xBB] = entry("LAS", AbsY, Cpu::las, 4);

    // --- Undocumented: RMW composites ---
    t[0xC7] = entry("DCP", Zpg, Cpu::dcp, 5);
    t[0xD7] = entry("DCP", ZpgX, Cpu::dcp, 6);
    t[0xCF] = entry("DCP", Abs, Cpu::dcp, 6);
    t[0xDF] = entry("DCP", AbsX, Cpu::dcp, 7);
    t[0xDB] = entry("DCP", AbsY, Cpu::dcp, 7);
    t[0xC3] = entry("DCP", IndX, Cpu::dcp, 8);
    t[0xD3] = entry("DCP", IndY, Cpu::dcp, 8);
    t[0xE7] = entry("ISC", Zpg, Cpu::isc, 5);
    t[0xF7] = entry("ISC", ZpgX, Cpu::isc, 6);
    t[0xEF] = entry("ISC", Abs, Cpu::isc, 6);
    t[0xFF] = entry("ISC", AbsX, Cpu::isc, 7);
    t[0xFB] = entry("ISC", AbsY, Cpu::isc, 7);
    t[0xE3] = entry("ISC", IndX, Cpu::isc, 8);
    t[0xF3] = entry("ISC", IndY, Cpu::isc, 8);
    t[0x07] = entry("SLO", Zpg, Cpu::slo, 5);
    t[0x17] = entry("SLO", ZpgX, Cpu::slo, 6);
    t[0x0F] = entry("SLO", Abs, Cpu::slo, 6);
    t[0x1F] = entry("SLO", AbsX, Cpu::slo, 7);
    t[0x1B] = entry("SLO", AbsY, Cpu::slo, 7);
    t[0x03] = entry("SLO", IndX, Cpu::slo, 8);
    t[0x13] = entry("SLO", IndY, Cpu::slo, 8);
    t[0x47] = entry("SRE", Zpg, Cpu::sre, 5);
    t[0x57] = entry("SRE", ZpgX, Cpu::sre, 6);
    t[0x4F] = entry("SRE", Abs, Cpu::sre, 6);
    t[0x5F] = entry("SRE", AbsX, Cpu::sre, 7);
    t[0x5B] = entry("SRE", AbsY, Cpu::sre, 7);
    t[0x43] = entry("SRE", IndX, Cpu::sre, 8);
    t[0x53] = entry("SRE", IndY, Cpu::sre, 8);
    t[0x27] = entry("RLA", Zpg, Cpu::rla, 5);
    t[0x37] = entry("RLA", ZpgX, Cpu::rla, 6);
    t[0x2F] = entry("RLA", Abs, Cpu::rla, 6);
    t[0x3F] = entry("RLA", AbsX, Cpu::rla, 7);
    t[0x3B] = entry("RLA", AbsY, Cpu::rla, 7);
    t[0x23] = entry("RLA", IndX, Cpu::rla, 8);
    t[0x33] = entry("RLA", IndY, Cpu::rla, 8);
    t[0x67] = entry("RRA", Zpg, Cpu::rra, 5);
    t[0x77] = entry("RRA", ZpgX, Cpu::rra, 6);
    t[0x6F] = entry("RRA", Abs, Cpu::rra, 6);
    t[0x7F] = entry("RRA", AbsX, Cpu::rra, 7);
    t[0x7B] = entry("RRA", AbsY, Cpu::rra, 7);
    t[0x63] = entry("RRA", IndX, Cpu::rra, 8);
    t[0x73] = entry("RRA", IndY, Cpu::rra, 8);

    // --- Undocumented: immediate combos ---
    t[0x4B] = entry("ALR", Imm, Cpu::alr, 2);
    t[0x0B] = entry("ANC", Imm, Cpu::anc, 2);
    t[0x2B] = entry("ANC", Imm, Cpu::anc, 2);
    t[0x6B] = entry("ARR", Imm, Cpu::arr, 2);
    t[0xCB] = entry("SBX", Imm, Cpu::sbx, 2);
    t[0xEB] = entry("USB", Imm, Cpu::sbc, 2);

    // --- Undocumented: unstable (decode only, no state change) ---
    t[0x8B] = entry("ANE", Imm, Cpu::nop, 2);
    t[0xAB] = entry("LXA", Imm, Cpu::nop, 2);
    t[0x93] = entry("SHA", IndY, Cpu::nop, 6);
    t[0x9F] = entry("SHA", AbsY, Cpu::nop, 5);
    t[0x9E] = entry("SHX", AbsY, Cpu::nop, 5);
    t[0x9C] = entry("SHY", AbsX, Cpu::nop, 5);
    t[0x9B] = entry("TAS", AbsY, Cpu::nop, 5);

    t
}
