use crate::instruction::{AluOp, RotOp};

use super::{Cpu, Flags};

impl Cpu {
    /// Dispatch one of the eight accumulator ALU operations.
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a();
        let carry_in = (use_carry && self.flag(Flags::C)) as u8;

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.set_a(result);
        self.regs.set_flags(
            Some(result == 0),
            Some(false),
            Some(half > 0x0F),
            Some(full > 0xFF),
        );
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.sub_flags(value, use_carry && self.flag(Flags::C));
        self.regs.set_a(result);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    fn sub_flags(&mut self, value: u8, borrow_in: bool) -> u8 {
        let a = self.regs.a();
        let borrow = borrow_in as i16;

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
        let full = a as i16 - value as i16 - borrow;
        let result = full as u8;

        self.regs.set_flags(
            Some(result == 0),
            Some(true),
            Some(half < 0),
            Some(full < 0),
        );
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a() & value;
        self.regs.set_a(result);
        self.regs
            .set_flags(Some(result == 0), Some(false), Some(true), Some(false));
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a() | value;
        self.regs.set_a(result);
        self.regs
            .set_flags(Some(result == 0), Some(false), Some(false), Some(false));
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a() ^ value;
        self.regs.set_a(result);
        self.regs
            .set_flags(Some(result == 0), Some(false), Some(false), Some(false));
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// - Uses C, H, N, and A to compute a correction value.
    /// - Updates A, Z, H, C; leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a();
        let mut adjust: u8 = if self.flag(Flags::C) { 0x60 } else { 0x00 };
        if self.flag(Flags::H) {
            adjust |= 0x06;
        }

        if !self.flag(Flags::N) {
            // After an addition.
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            // After a subtraction.
            a = a.wrapping_sub(adjust);
        }

        self.regs.set_a(a);
        self.regs
            .set_flags(Some(a == 0), None, Some(false), Some(adjust >= 0x60));
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.set_flags(
            Some(result == 0),
            Some(false),
            Some((value & 0x0F) == 0x0F),
            None,
        );
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.set_flags(
            Some(result == 0),
            Some(true),
            Some((value & 0x0F) == 0),
            None,
        );
        result
    }

    /// 16-bit add helper for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H and C come from bits 11 and 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.regs.set_flags(
            None,
            Some(false),
            Some((hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF),
            Some(hl as u32 + value as u32 > 0xFFFF),
        );
        self.regs.set_hl(result);
    }

    /// 16-bit add helper for instructions that add a signed 8-bit immediate
    /// to SP (ADD SP,r8 and LD HL,SP+r8).
    ///
    /// Z and N are cleared; H and C come from an unsigned add of the raw
    /// immediate byte to SP's low byte.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.regs.set_flags(
            Some(false),
            Some(false),
            Some((base & 0x000F) + (imm8 as u16 & 0x000F) > 0x000F),
            Some((base & 0x00FF) + imm8 as u16 > 0x00FF),
        );
        base.wrapping_add(offset)
    }

    /// CB-prefixed rotate/shift. Z is set from the result.
    pub(super) fn alu_rot(&mut self, op: RotOp, value: u8) -> u8 {
        let carry_in = self.flag(Flags::C);
        let (result, carry) = match op {
            RotOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            RotOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            RotOp::Rl => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            RotOp::Rr => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            RotOp::Sla => (value << 1, value & 0x80 != 0),
            RotOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            RotOp::Swap => (value.rotate_left(4), false),
            RotOp::Srl => (value >> 1, value & 0x01 != 0),
        };

        self.regs
            .set_flags(Some(result == 0), Some(false), Some(false), Some(carry));
        result
    }

    /// Unprefixed accumulator rotates (RLCA/RRCA/RLA/RRA).
    ///
    /// Same bit movement as the CB forms, but Z is always cleared.
    pub(super) fn alu_rot_a(&mut self, op: RotOp) {
        let result = self.alu_rot(op, self.regs.a());
        self.regs.set_a(result);
        self.set_flag(Flags::Z, false);
    }

    /// BIT n,value: Z from the inverted bit, H set, N cleared, C preserved.
    pub(super) fn alu_bit(&mut self, bit: u8, value: u8) {
        let bit_set = value & (1 << bit) != 0;
        self.regs
            .set_flags(Some(!bit_set), Some(false), Some(true), None);
    }
}
