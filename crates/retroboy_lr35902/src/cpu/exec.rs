mod alu;
mod cb;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use crate::instruction::Op;

use super::{Bus, Cpu, Reg8};

impl Cpu {
    /// Apply the semantic action of `op`.
    ///
    /// `imm` holds the immediate operand already fetched by the driver
    /// (little-endian for two-byte operands, low byte for one-byte ones).
    /// Returns whether a conditional branch was taken; unconditional
    /// instructions report `true`.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, op: Op, imm: u16) -> bool {
        let imm8 = imm as u8;

        match op {
            Op::Nop => {}
            Op::Stop => self.exec_stop(),
            Op::Halt => self.exec_halt(bus),
            Op::Di => self.exec_di(),
            Op::Ei => self.exec_ei(),
            // The driver resolves the prefix before dispatching here.
            Op::PrefixCb => unreachable!("CB prefix reached the executor"),

            Op::Ld(dst, src) => self.exec_ld(bus, dst, src),
            Op::LdImm(dst) => self.write_operand(bus, dst, imm8),
            Op::LdIndirectA(ind) => self.exec_ld_indirect_a(bus, ind),
            Op::LdAIndirect(ind) => self.exec_ld_a_indirect(bus, ind),
            Op::LdA16A => bus.write8(imm, self.regs.a()),
            Op::LdAA16 => {
                let value = bus.read8(imm);
                self.regs.set_a(value);
            }
            Op::LdhA8A => self.exec_ldh_store(bus, imm8),
            Op::LdhAA8 => self.exec_ldh_load(bus, imm8),
            Op::LdhCA => self.exec_ldh_store(bus, self.regs.get(Reg8::C)),
            Op::LdhAC => self.exec_ldh_load(bus, self.regs.get(Reg8::C)),

            Op::Ld16Imm(rr) => self.write_operand16(rr, imm),
            Op::LdA16Sp => self.exec_ld_a16_sp(bus, imm),
            Op::LdSpHl => self.regs.sp = self.regs.hl(),
            Op::LdHlSpImm => self.exec_ld_hl_sp_r8(imm8),
            Op::Push(rr) => self.exec_push(bus, rr),
            Op::Pop(rr) => self.exec_pop(bus, rr),

            Op::Alu(op, src) => {
                let value = self.read_operand(bus, src);
                self.alu(op, value);
            }
            Op::AluImm(op) => self.alu(op, imm8),
            Op::Inc(r) => self.exec_inc8(bus, r),
            Op::Dec(r) => self.exec_dec8(bus, r),
            Op::Inc16(rr) => self.exec_inc16(rr),
            Op::Dec16(rr) => self.exec_dec16(rr),
            Op::AddHl(rr) => self.exec_add_hl_rr(rr),
            Op::AddSpImm => self.exec_add_sp_r8(imm8),

            Op::Rlca | Op::Rrca | Op::Rla | Op::Rra => self.exec_rotate_a(op),
            Op::Daa => self.alu_daa(),
            Op::Cpl => self.exec_cpl(),
            Op::Scf => self.exec_scf(),
            Op::Ccf => self.exec_ccf(),

            Op::Jp(cond) => return self.exec_jp(cond, imm),
            Op::JpHl => self.regs.pc = self.regs.hl(),
            Op::Jr(cond) => return self.exec_jr(cond, imm8),
            Op::Call(cond) => return self.exec_call(bus, cond, imm),
            Op::Ret(cond) => return self.exec_ret(bus, cond),
            Op::Reti => self.exec_reti(bus),
            Op::Rst(target) => self.exec_rst(bus, target),

            Op::Rot(op, r) => self.exec_rot(bus, op, r),
            Op::Bit(bit, r) => self.exec_bit(bus, bit, r),
            Op::Res(bit, r) => self.exec_res(bus, bit, r),
            Op::Set(bit, r) => self.exec_set(bus, bit, r),
        }

        true
    }
}
