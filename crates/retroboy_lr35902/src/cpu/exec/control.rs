use crate::cpu::{Bus, Cpu};
use crate::instruction::Cond;

impl Cpu {
    #[inline]
    fn taken(&self, cond: Option<Cond>) -> bool {
        cond.map_or(true, |cc| self.condition(cc))
    }

    /// JP a16 / JP cc,a16.
    pub(super) fn exec_jp(&mut self, cond: Option<Cond>, addr: u16) -> bool {
        let taken = self.taken(cond);
        if taken {
            self.regs.pc = addr;
        }
        taken
    }

    /// JR r8 / JR cc,r8.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand.
    pub(super) fn exec_jr(&mut self, cond: Option<Cond>, offset: u8) -> bool {
        let taken = self.taken(cond);
        if taken {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i8 as u16);
        }
        taken
    }

    /// CALL a16 / CALL cc,a16. The pushed address is the one following
    /// the operand.
    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>, addr: u16) -> bool {
        let taken = self.taken(cond);
        if taken {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
        }
        taken
    }

    /// RET / RET cc.
    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>) -> bool {
        let taken = self.taken(cond);
        if taken {
            self.regs.pc = self.pop_u16(bus);
        }
        taken
    }
}
