use std::fmt;

use crate::cpu::{Reg16, Reg8};

/// 8-bit operand as encoded in the low three bits of most opcodes:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlInd,
    A,
}

impl Operand8 {
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Operand8::B,
            1 => Operand8::C,
            2 => Operand8::D,
            3 => Operand8::E,
            4 => Operand8::H,
            5 => Operand8::L,
            6 => Operand8::HlInd,
            _ => Operand8::A,
        }
    }

    /// Backing register, or `None` for the `(HL)` memory operand.
    pub fn reg(self) -> Option<Reg8> {
        match self {
            Operand8::B => Some(Reg8::B),
            Operand8::C => Some(Reg8::C),
            Operand8::D => Some(Reg8::D),
            Operand8::E => Some(Reg8::E),
            Operand8::H => Some(Reg8::H),
            Operand8::L => Some(Reg8::L),
            Operand8::HlInd => None,
            Operand8::A => Some(Reg8::A),
        }
    }

    #[inline]
    pub fn is_memory(self) -> bool {
        self == Operand8::HlInd
    }
}

impl fmt::Display for Operand8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand8::B => "B",
            Operand8::C => "C",
            Operand8::D => "D",
            Operand8::E => "E",
            Operand8::H => "H",
            Operand8::L => "L",
            Operand8::HlInd => "(HL)",
            Operand8::A => "A",
        };
        f.write_str(name)
    }
}

/// 16-bit operand of the `rp` group (LD rr,d16, INC/DEC rr, ADD HL,rr).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand16 {
    BC,
    DE,
    HL,
    SP,
}

impl Operand16 {
    pub fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Operand16::BC,
            1 => Operand16::DE,
            2 => Operand16::HL,
            _ => Operand16::SP,
        }
    }
}

impl fmt::Display for Operand16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand16::BC => "BC",
            Operand16::DE => "DE",
            Operand16::HL => "HL",
            Operand16::SP => "SP",
        };
        f.write_str(name)
    }
}

/// Register pair of the `rp2` group used by PUSH/POP.
pub fn stack_pair(index: u8) -> Reg16 {
    match index & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::AF,
    }
}

/// Address operand of `LD (rr),A` / `LD A,(rr)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indirect {
    BC,
    DE,
    /// `(HL+)`: HL is incremented after the access.
    HlInc,
    /// `(HL-)`: HL is decremented after the access.
    HlDec,
}

impl Indirect {
    pub fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Indirect::BC,
            1 => Indirect::DE,
            2 => Indirect::HlInc,
            _ => Indirect::HlDec,
        }
    }
}

impl fmt::Display for Indirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indirect::BC => "(BC)",
            Indirect::DE => "(DE)",
            Indirect::HlInc => "(HL+)",
            Indirect::HlDec => "(HL-)",
        };
        f.write_str(name)
    }
}

/// Branch condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cond {
    NZ,
    Z,
    NC,
    C,
}

impl Cond {
    pub const ALL: [Cond; 4] = [Cond::NZ, Cond::Z, Cond::NC, Cond::C];

    pub fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Cond::NZ,
            1 => Cond::Z,
            2 => Cond::NC,
            _ => Cond::C,
        }
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cond::NZ => "NZ",
            Cond::Z => "Z",
            Cond::NC => "NC",
            Cond::C => "C",
        };
        f.write_str(name)
    }
}

/// 8-bit ALU operation on A (`y` field of the 0x80–0xBF block).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }

    /// Mnemonic prefix including the implicit `A,` where the assembler
    /// syntax spells it out.
    fn prefix(self) -> &'static str {
        match self {
            AluOp::Add => "ADD A,",
            AluOp::Adc => "ADC A,",
            AluOp::Sub => "SUB ",
            AluOp::Sbc => "SBC A,",
            AluOp::And => "AND ",
            AluOp::Xor => "XOR ",
            AluOp::Or => "OR ",
            AluOp::Cp => "CP ",
        }
    }
}

/// Rotate/shift operation of the CB table (`y` field when `x == 0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl RotOp {
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => RotOp::Rlc,
            1 => RotOp::Rrc,
            2 => RotOp::Rl,
            3 => RotOp::Rr,
            4 => RotOp::Sla,
            5 => RotOp::Sra,
            6 => RotOp::Swap,
            _ => RotOp::Srl,
        }
    }
}

impl fmt::Display for RotOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotOp::Rlc => "RLC",
            RotOp::Rrc => "RRC",
            RotOp::Rl => "RL",
            RotOp::Rr => "RR",
            RotOp::Sla => "SLA",
            RotOp::Sra => "SRA",
            RotOp::Swap => "SWAP",
            RotOp::Srl => "SRL",
        };
        f.write_str(name)
    }
}

/// Semantic action of an instruction, with its decoded parameters.
///
/// Immediate operands are not part of the variant; the driver fetches
/// them according to the descriptor's operand byte count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Nop,
    /// STOP (two bytes, the second is padding).
    Stop,
    Halt,
    Di,
    Ei,
    /// 0xCB: redirects to the secondary table.
    PrefixCb,

    /// LD r,r' (including the (HL) forms).
    Ld(Operand8, Operand8),
    /// LD r,d8
    LdImm(Operand8),
    /// LD (rr),A
    LdIndirectA(Indirect),
    /// LD A,(rr)
    LdAIndirect(Indirect),
    /// LD (a16),A
    LdA16A,
    /// LD A,(a16)
    LdAA16,
    /// LDH (a8),A
    LdhA8A,
    /// LDH A,(a8)
    LdhAA8,
    /// LD (C),A
    LdhCA,
    /// LD A,(C)
    LdhAC,

    /// LD rr,d16
    Ld16Imm(Operand16),
    /// LD (a16),SP
    LdA16Sp,
    /// LD SP,HL
    LdSpHl,
    /// LD HL,SP+r8
    LdHlSpImm,
    Push(Reg16),
    Pop(Reg16),

    /// ALU op on A with a register/(HL) operand.
    Alu(AluOp, Operand8),
    /// ALU op on A with an immediate operand.
    AluImm(AluOp),
    Inc(Operand8),
    Dec(Operand8),
    Inc16(Operand16),
    Dec16(Operand16),
    AddHl(Operand16),
    /// ADD SP,r8
    AddSpImm,

    Rlca,
    Rrca,
    Rla,
    Rra,
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jp(Option<Cond>),
    JpHl,
    Jr(Option<Cond>),
    Call(Option<Cond>),
    Ret(Option<Cond>),
    Reti,
    /// RST with the target address (0x00, 0x08, ..., 0x38).
    Rst(u8),

    /// CB-prefixed rotates and shifts.
    Rot(RotOp, Operand8),
    Bit(u8, Operand8),
    Res(u8, Operand8),
    Set(u8, Operand8),
}

impl Op {
    /// Number of immediate bytes following the opcode.
    ///
    /// CB-prefixed ops report 0: their second byte is the secondary opcode,
    /// not an operand.
    pub fn operand_bytes(self) -> u8 {
        match self {
            Op::Stop
            | Op::LdImm(_)
            | Op::LdhA8A
            | Op::LdhAA8
            | Op::LdHlSpImm
            | Op::AluImm(_)
            | Op::AddSpImm
            | Op::Jr(_) => 1,
            Op::LdA16A
            | Op::LdAA16
            | Op::Ld16Imm(_)
            | Op::LdA16Sp
            | Op::Jp(_)
            | Op::Call(_) => 2,
            _ => 0,
        }
    }

    /// Branch condition, for ops whose timing depends on it.
    pub fn condition(self) -> Option<Cond> {
        match self {
            Op::Jp(cond) | Op::Jr(cond) | Op::Call(cond) | Op::Ret(cond) => cond,
            _ => None,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Op::Nop => write!(f, "NOP"),
            Op::Stop => write!(f, "STOP"),
            Op::Halt => write!(f, "HALT"),
            Op::Di => write!(f, "DI"),
            Op::Ei => write!(f, "EI"),
            Op::PrefixCb => write!(f, "PREFIX CB"),

            Op::Ld(dst, src) => write!(f, "LD {dst},{src}"),
            Op::LdImm(dst) => write!(f, "LD {dst},d8"),
            Op::LdIndirectA(ind) => write!(f, "LD {ind},A"),
            Op::LdAIndirect(ind) => write!(f, "LD A,{ind}"),
            Op::LdA16A => write!(f, "LD (a16),A"),
            Op::LdAA16 => write!(f, "LD A,(a16)"),
            Op::LdhA8A => write!(f, "LDH (a8),A"),
            Op::LdhAA8 => write!(f, "LDH A,(a8)"),
            Op::LdhCA => write!(f, "LD (C),A"),
            Op::LdhAC => write!(f, "LD A,(C)"),

            Op::Ld16Imm(rr) => write!(f, "LD {rr},d16"),
            Op::LdA16Sp => write!(f, "LD (a16),SP"),
            Op::LdSpHl => write!(f, "LD SP,HL"),
            Op::LdHlSpImm => write!(f, "LD HL,SP+r8"),
            Op::Push(rr) => write!(f, "PUSH {rr:?}"),
            Op::Pop(rr) => write!(f, "POP {rr:?}"),

            Op::Alu(op, src) => write!(f, "{}{src}", op.prefix()),
            Op::AluImm(op) => write!(f, "{}d8", op.prefix()),
            Op::Inc(r) => write!(f, "INC {r}"),
            Op::Dec(r) => write!(f, "DEC {r}"),
            Op::Inc16(rr) => write!(f, "INC {rr}"),
            Op::Dec16(rr) => write!(f, "DEC {rr}"),
            Op::AddHl(rr) => write!(f, "ADD HL,{rr}"),
            Op::AddSpImm => write!(f, "ADD SP,r8"),

            Op::Rlca => write!(f, "RLCA"),
            Op::Rrca => write!(f, "RRCA"),
            Op::Rla => write!(f, "RLA"),
            Op::Rra => write!(f, "RRA"),
            Op::Daa => write!(f, "DAA"),
            Op::Cpl => write!(f, "CPL"),
            Op::Scf => write!(f, "SCF"),
            Op::Ccf => write!(f, "CCF"),

            Op::Jp(None) => write!(f, "JP a16"),
            Op::Jp(Some(cc)) => write!(f, "JP {cc},a16"),
            Op::JpHl => write!(f, "JP (HL)"),
            Op::Jr(None) => write!(f, "JR r8"),
            Op::Jr(Some(cc)) => write!(f, "JR {cc},r8"),
            Op::Call(None) => write!(f, "CALL a16"),
            Op::Call(Some(cc)) => write!(f, "CALL {cc},a16"),
            Op::Ret(None) => write!(f, "RET"),
            Op::Ret(Some(cc)) => write!(f, "RET {cc}"),
            Op::Reti => write!(f, "RETI"),
            Op::Rst(target) => write!(f, "RST {target:02X}H"),

            Op::Rot(op, r) => write!(f, "{op} {r}"),
            Op::Bit(bit, r) => write!(f, "BIT {bit},{r}"),
            Op::Res(bit, r) => write!(f, "RES {bit},{r}"),
            Op::Set(bit, r) => write!(f, "SET {bit},{r}"),
        }
    }
}
