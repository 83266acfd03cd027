use crate::cpu::{Bus, Cpu};
use crate::instruction::{Operand8, RotOp};

impl Cpu {
    pub(super) fn exec_rot<B: Bus>(&mut self, bus: &mut B, op: RotOp, r: Operand8) {
        let value = self.read_operand(bus, r);
        let result = self.alu_rot(op, value);
        self.write_operand(bus, r, result);
    }

    pub(super) fn exec_bit<B: Bus>(&mut self, bus: &mut B, bit: u8, r: Operand8) {
        let value = self.read_operand(bus, r);
        self.alu_bit(bit, value);
    }

    /// RES and SET affect no flags.
    pub(super) fn exec_res<B: Bus>(&mut self, bus: &mut B, bit: u8, r: Operand8) {
        let value = self.read_operand(bus, r);
        self.write_operand(bus, r, value & !(1 << bit));
    }

    pub(super) fn exec_set<B: Bus>(&mut self, bus: &mut B, bit: u8, r: Operand8) {
        let value = self.read_operand(bus, r);
        self.write_operand(bus, r, value | (1 << bit));
    }
}
