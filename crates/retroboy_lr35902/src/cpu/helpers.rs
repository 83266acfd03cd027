use crate::instruction::{Cond, Indirect, Operand16, Operand8};

use super::{Bus, Cpu, Flags};

impl Cpu {
    /// Read an 8-bit register or (HL).
    #[inline]
    pub(super) fn read_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand8) -> u8 {
        match operand.reg() {
            Some(reg) => self.regs.get(reg),
            None => bus.read8(self.regs.hl()),
        }
    }

    /// Write an 8-bit register or (HL).
    #[inline]
    pub(super) fn write_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand8, value: u8) {
        match operand.reg() {
            Some(reg) => self.regs.set(reg, value),
            None => bus.write8(self.regs.hl(), value),
        }
    }

    #[inline]
    pub(super) fn read_operand16(&self, operand: Operand16) -> u16 {
        match operand {
            Operand16::BC => self.regs.bc(),
            Operand16::DE => self.regs.de(),
            Operand16::HL => self.regs.hl(),
            Operand16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_operand16(&mut self, operand: Operand16, value: u16) {
        match operand {
            Operand16::BC => self.regs.set_bc(value),
            Operand16::DE => self.regs.set_de(value),
            Operand16::HL => self.regs.set_hl(value),
            Operand16::SP => self.regs.sp = value,
        }
    }

    /// Address for `LD (rr),A` / `LD A,(rr)`, applying the HL post-step.
    #[inline]
    pub(super) fn indirect_addr(&mut self, indirect: Indirect) -> u16 {
        match indirect {
            Indirect::BC => self.regs.bc(),
            Indirect::DE => self.regs.de(),
            Indirect::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Indirect::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    #[inline]
    pub(super) fn condition(&self, cond: Cond) -> bool {
        match cond {
            Cond::NZ => !self.flag(Flags::Z),
            Cond::Z => self.flag(Flags::Z),
            Cond::NC => !self.flag(Flags::C),
            Cond::C => self.flag(Flags::C),
        }
    }

    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        if self.halt_bug {
            // PC stays on this byte once; the next fetch reads it again.
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        value
    }

    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Push a word: SP is decremented, then the high byte is written
    /// first, then the low byte. Memory ends up with `[SP] = low`.
    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    /// Pop a word: low byte first, then high byte.
    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }
}
