use crate::cpu::{Bus, Cpu, Reg16};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, rr: Reg16) {
        let value = self.regs.pair(rr);
        self.push_u16(bus, value);
    }

    /// POP AF drops the low nibble of F through the register file mask.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, rr: Reg16) {
        let value = self.pop_u16(bus);
        self.regs.set_pair(rr, value);
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, target: u8) {
        debug_assert!(target & !0x38 == 0, "invalid RST target {target:#04x}");
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = target as u16;
    }

    /// RETI enables IME immediately, without the EI delay.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
    }
}
