use crate::cpu::{Bus, Cpu};
use crate::instruction::{Operand16, Operand8};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, r: Operand8) {
        let value = self.read_operand(bus, r);
        let result = self.alu_inc8(value);
        self.write_operand(bus, r, result);
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, r: Operand8) {
        let value = self.read_operand(bus, r);
        let result = self.alu_dec8(value);
        self.write_operand(bus, r, result);
    }

    /// INC rr affects no flags.
    pub(super) fn exec_inc16(&mut self, rr: Operand16) {
        let value = self.read_operand16(rr).wrapping_add(1);
        self.write_operand16(rr, value);
    }

    /// DEC rr affects no flags.
    pub(super) fn exec_dec16(&mut self, rr: Operand16) {
        let value = self.read_operand16(rr).wrapping_sub(1);
        self.write_operand16(rr, value);
    }
}
