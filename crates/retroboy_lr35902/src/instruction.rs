//! Instruction descriptors for the primary and CB-prefixed opcode spaces.
//!
//! Both tables are built once from the opcode bit fields and then shared
//! read-only for the lifetime of the process. The primary table has no
//! entry for the eleven opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4,
//! FC, FD); the CB table is complete.

mod op;

use lazy_static::lazy_static;

pub use op::{stack_pair, AluOp, Cond, Indirect, Op, Operand16, Operand8, RotOp};

/// Opcodes with no instruction. Executing one hard-locks the CPU.
pub const UNDEFINED_OPCODES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

/// Prefix byte that selects the secondary opcode table.
pub const CB_PREFIX: u8 = 0xCB;

/// Cost of an instruction in T-cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cycles {
    Fixed(u32),
    /// Conditional control transfer: the cost depends on whether the
    /// condition held.
    Branch { taken: u32, not_taken: u32 },
}

impl Cycles {
    #[inline]
    pub fn cost(self, taken: bool) -> u32 {
        match self {
            Cycles::Fixed(cycles) => cycles,
            Cycles::Branch { taken: t, not_taken: n } => {
                if taken {
                    t
                } else {
                    n
                }
            }
        }
    }

    #[inline]
    pub fn is_branch(self) -> bool {
        matches!(self, Cycles::Branch { .. })
    }
}

/// Immutable descriptor of one opcode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    /// True for entries of the CB table.
    pub prefixed: bool,
    /// Assembler form with operand placeholders (`d8`, `d16`, `a8`, `a16`,
    /// `r8`), for disassembly and tracing.
    pub mnemonic: String,
    /// Immediate bytes following the opcode (0, 1 or 2).
    pub operand_bytes: u8,
    pub cycles: Cycles,
    pub op: Op,
}

impl Instruction {
    fn new(opcode: u8, prefixed: bool, op: Op) -> Self {
        Self {
            opcode,
            prefixed,
            mnemonic: op.to_string(),
            operand_bytes: op.operand_bytes(),
            cycles: cycles_of(op),
            op,
        }
    }

    /// Encoded length in bytes, prefix included.
    pub fn length(&self) -> u16 {
        1 + self.prefixed as u16 + self.operand_bytes as u16
    }
}

lazy_static! {
    static ref PRIMARY: [Option<Instruction>; 256] =
        std::array::from_fn(|i| decode(i as u8).map(|op| Instruction::new(i as u8, false, op)));
    static ref SECONDARY: [Instruction; 256] =
        std::array::from_fn(|i| Instruction::new(i as u8, true, decode_cb(i as u8)));
}

/// Descriptor for a primary opcode, or `None` for an opcode hole.
pub fn lookup(opcode: u8) -> Option<&'static Instruction> {
    PRIMARY[opcode as usize].as_ref()
}

/// Descriptor for the byte following a 0xCB prefix.
pub fn lookup_cb(opcode: u8) -> &'static Instruction {
    &SECONDARY[opcode as usize]
}

/// Decode a primary opcode using the x/y/z/p/q field split:
/// `x = op[7:6]`, `y = op[5:3]`, `z = op[2:0]`, `p = y[2:1]`, `q = y[0]`.
pub fn decode(opcode: u8) -> Option<Op> {
    let x = opcode >> 6;
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let p = y >> 1;
    let q = y & 0x01;

    let op = match (x, z) {
        (0, 0) => match y {
            0 => Op::Nop,
            1 => Op::LdA16Sp,
            2 => Op::Stop,
            3 => Op::Jr(None),
            _ => Op::Jr(Some(Cond::from_index(y - 4))),
        },
        (0, 1) if q == 0 => Op::Ld16Imm(Operand16::from_index(p)),
        (0, 1) => Op::AddHl(Operand16::from_index(p)),
        (0, 2) if q == 0 => Op::LdIndirectA(Indirect::from_index(p)),
        (0, 2) => Op::LdAIndirect(Indirect::from_index(p)),
        (0, 3) if q == 0 => Op::Inc16(Operand16::from_index(p)),
        (0, 3) => Op::Dec16(Operand16::from_index(p)),
        (0, 4) => Op::Inc(Operand8::from_index(y)),
        (0, 5) => Op::Dec(Operand8::from_index(y)),
        (0, 6) => Op::LdImm(Operand8::from_index(y)),
        (0, _) => match y {
            0 => Op::Rlca,
            1 => Op::Rrca,
            2 => Op::Rla,
            3 => Op::Rra,
            4 => Op::Daa,
            5 => Op::Cpl,
            6 => Op::Scf,
            _ => Op::Ccf,
        },

        // LD (HL),(HL) is the slot HALT occupies.
        (1, 6) if y == 6 => Op::Halt,
        (1, _) => Op::Ld(Operand8::from_index(y), Operand8::from_index(z)),

        (2, _) => Op::Alu(AluOp::from_index(y), Operand8::from_index(z)),

        (_, 0) => match y {
            0..=3 => Op::Ret(Some(Cond::from_index(y))),
            4 => Op::LdhA8A,
            5 => Op::AddSpImm,
            6 => Op::LdhAA8,
            _ => Op::LdHlSpImm,
        },
        (_, 1) if q == 0 => Op::Pop(stack_pair(p)),
        (_, 1) => match p {
            0 => Op::Ret(None),
            1 => Op::Reti,
            2 => Op::JpHl,
            _ => Op::LdSpHl,
        },
        (_, 2) => match y {
            0..=3 => Op::Jp(Some(Cond::from_index(y))),
            4 => Op::LdhCA,
            5 => Op::LdA16A,
            6 => Op::LdhAC,
            _ => Op::LdAA16,
        },
        (_, 3) => match y {
            0 => Op::Jp(None),
            1 => Op::PrefixCb,
            6 => Op::Di,
            7 => Op::Ei,
            _ => return None,
        },
        (_, 4) => match y {
            0..=3 => Op::Call(Some(Cond::from_index(y))),
            _ => return None,
        },
        (_, 5) if q == 0 => Op::Push(stack_pair(p)),
        (_, 5) => match p {
            0 => Op::Call(None),
            _ => return None,
        },
        (_, 6) => Op::AluImm(AluOp::from_index(y)),
        _ => Op::Rst(y * 8),
    };

    Some(op)
}

/// Decode the byte following a 0xCB prefix. Every value is defined.
pub fn decode_cb(opcode: u8) -> Op {
    let x = opcode >> 6;
    let y = (opcode >> 3) & 0x07;
    let r = Operand8::from_index(opcode);

    match x {
        0 => Op::Rot(RotOp::from_index(y), r),
        1 => Op::Bit(y, r),
        2 => Op::Res(y, r),
        _ => Op::Set(y, r),
    }
}

/// T-cycle cost of an op. CB ops include the prefix fetch.
pub fn cycles_of(op: Op) -> Cycles {
    let mem = |r: Operand8, with: u32, without: u32| if r.is_memory() { with } else { without };

    let fixed = match op {
        Op::Nop | Op::Stop | Op::Halt | Op::Di | Op::Ei | Op::PrefixCb => 4,

        Op::Ld(dst, src) => {
            if dst.is_memory() || src.is_memory() {
                8
            } else {
                4
            }
        }
        Op::LdImm(dst) => mem(dst, 12, 8),
        Op::LdIndirectA(_) | Op::LdAIndirect(_) => 8,
        Op::LdA16A | Op::LdAA16 => 16,
        Op::LdhA8A | Op::LdhAA8 => 12,
        Op::LdhCA | Op::LdhAC => 8,

        Op::Ld16Imm(_) => 12,
        Op::LdA16Sp => 20,
        Op::LdSpHl => 8,
        Op::LdHlSpImm => 12,
        Op::Push(_) => 16,
        Op::Pop(_) => 12,

        Op::Alu(_, src) => mem(src, 8, 4),
        Op::AluImm(_) => 8,
        Op::Inc(r) | Op::Dec(r) => mem(r, 12, 4),
        Op::Inc16(_) | Op::Dec16(_) | Op::AddHl(_) => 8,
        Op::AddSpImm => 16,

        Op::Rlca | Op::Rrca | Op::Rla | Op::Rra => 4,
        Op::Daa | Op::Cpl | Op::Scf | Op::Ccf => 4,

        Op::Jp(Some(_)) => {
            return Cycles::Branch {
                taken: 16,
                not_taken: 12,
            }
        }
        Op::Jr(Some(_)) => {
            return Cycles::Branch {
                taken: 12,
                not_taken: 8,
            }
        }
        Op::Call(Some(_)) => {
            return Cycles::Branch {
                taken: 24,
                not_taken: 12,
            }
        }
        Op::Ret(Some(_)) => {
            return Cycles::Branch {
                taken: 20,
                not_taken: 8,
            }
        }
        Op::Jp(None) => 16,
        Op::JpHl => 4,
        Op::Jr(None) => 12,
        Op::Call(None) => 24,
        Op::Ret(None) | Op::Reti | Op::Rst(_) => 16,

        Op::Rot(_, r) | Op::Res(_, r) | Op::Set(_, r) => mem(r, 16, 8),
        // BIT n,(HL) only reads memory.
        Op::Bit(_, r) => mem(r, 12, 8),
    };

    Cycles::Fixed(fixed)
}

#[cfg(test)]
mod tests;
