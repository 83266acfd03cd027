use crate::cpu::{Bus, Cpu};
use crate::instruction::{Indirect, Operand8};

impl Cpu {
    pub(super) fn exec_ld<B: Bus>(&mut self, bus: &mut B, dst: Operand8, src: Operand8) {
        debug_assert!(
            !(dst.is_memory() && src.is_memory()),
            "LD (HL),(HL) decodes as HALT"
        );
        let value = self.read_operand(bus, src);
        self.write_operand(bus, dst, value);
    }

    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, indirect: Indirect) {
        let addr = self.indirect_addr(indirect);
        bus.write8(addr, self.regs.a());
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, indirect: Indirect) {
        let addr = self.indirect_addr(indirect);
        let value = bus.read8(addr);
        self.regs.set_a(value);
    }

    /// LDH (a8),A and LD (C),A: store A into the `$FF00` page.
    pub(super) fn exec_ldh_store<B: Bus>(&mut self, bus: &mut B, offset: u8) {
        let addr = 0xFF00 | offset as u16;
        bus.write8(addr, self.regs.a());
    }

    /// LDH A,(a8) and LD A,(C): load A from the `$FF00` page.
    pub(super) fn exec_ldh_load<B: Bus>(&mut self, bus: &mut B, offset: u8) {
        let addr = 0xFF00 | offset as u16;
        let value = bus.read8(addr);
        self.regs.set_a(value);
    }

    /// LD (a16),SP stores the low byte first, then the high byte.
    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B, addr: u16) {
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
    }

    pub(super) fn exec_ld_hl_sp_r8(&mut self, imm: u8) {
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
    }
}
