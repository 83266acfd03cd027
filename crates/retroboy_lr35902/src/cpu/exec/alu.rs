use crate::cpu::{Cpu, Flags};
use crate::instruction::{Op, Operand16, RotOp};

impl Cpu {
    pub(super) fn exec_rotate_a(&mut self, op: Op) {
        let rot = match op {
            Op::Rlca => RotOp::Rlc,
            Op::Rrca => RotOp::Rrc,
            Op::Rla => RotOp::Rl,
            Op::Rra => RotOp::Rr,
            _ => unreachable!("not an accumulator rotate: {op:?}"),
        };
        self.alu_rot_a(rot);
    }

    pub(super) fn exec_add_hl_rr(&mut self, rr: Operand16) {
        let value = self.read_operand16(rr);
        self.alu_add16_hl(value);
    }

    pub(super) fn exec_add_sp_r8(&mut self, imm: u8) {
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.sp = result;
    }

    pub(super) fn exec_cpl(&mut self) {
        let a = self.regs.a();
        self.regs.set_a(!a);
        self.regs.set_flags(None, Some(true), Some(true), None);
    }

    pub(super) fn exec_scf(&mut self) {
        self.regs.set_flags(None, Some(false), Some(false), Some(true));
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.flag(Flags::C);
        self.regs.set_flags(None, Some(false), Some(false), Some(!carry));
    }
}
