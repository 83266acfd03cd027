use super::*;
use crate::cpu::Reg16;

// Taken cost for conditional control transfers, 0 for opcode holes.
#[rustfmt::skip]
const PRIMARY_CYCLES: [u32; 256] = [
//  x0  x1  x2  x3  x4  x5  x6  x7  x8  x9  xA  xB  xC  xD  xE  xF
     4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x
     4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 1x
    12, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 2x
    12, 12,  8,  8, 12, 12, 12,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 3x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 4x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 5x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 6x
     8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 7x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 8x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 9x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Ax
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Bx
    20, 12, 16, 16, 24, 16,  8, 16, 20, 16, 16,  4, 24, 24,  8, 16, // Cx
    20, 12, 16,  0, 24, 16,  8, 16, 20, 16, 16,  0, 24,  0,  8, 16, // Dx
    12, 12,  8,  0,  0, 16,  8, 16, 16,  4, 16,  0,  0,  0,  8, 16, // Ex
    12, 12,  8,  4,  0, 16,  8, 16, 12,  8, 16,  4,  0,  0,  8, 16, // Fx
];

#[rustfmt::skip]
const PRIMARY_LENGTHS: [u16; 256] = [
//  x0 x1 x2 x3 x4 x5 x6 x7 x8 x9 xA xB xC xD xE xF
    1, 3, 1, 1, 1, 1, 2, 1, 3, 1, 1, 1, 1, 1, 2, 1, // 0x
    2, 3, 1, 1, 1, 1, 2, 1, 2, 1, 1, 1, 1, 1, 2, 1, // 1x
    2, 3, 1, 1, 1, 1, 2, 1, 2, 1, 1, 1, 1, 1, 2, 1, // 2x
    2, 3, 1, 1, 1, 1, 2, 1, 2, 1, 1, 1, 1, 1, 2, 1, // 3x
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 4x
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 5x
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 6x
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 7x
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 8x
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 9x
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // Ax
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // Bx
    1, 1, 3, 3, 3, 1, 2, 1, 1, 1, 3, 1, 3, 3, 2, 1, // Cx
    1, 1, 3, 0, 3, 1, 2, 1, 1, 1, 3, 0, 3, 0, 2, 1, // Dx
    2, 1, 1, 0, 0, 1, 2, 1, 2, 1, 3, 0, 0, 0, 2, 1, // Ex
    2, 1, 1, 1, 0, 1, 2, 1, 2, 1, 3, 1, 0, 0, 2, 1, // Fx
];

#[test]
fn holes_are_exactly_the_undefined_opcodes() {
    for opcode in 0..=0xFFu8 {
        let undefined = UNDEFINED_OPCODES.contains(&opcode);
        assert_eq!(
            lookup(opcode).is_none(),
            undefined,
            "opcode {opcode:#04x}"
        );
    }
    assert_eq!((0..=0xFFu8).filter_map(lookup).count(), 245);
}

#[test]
fn descriptors_know_their_opcode() {
    for opcode in 0..=0xFFu8 {
        if let Some(instr) = lookup(opcode) {
            assert_eq!(instr.opcode, opcode);
            assert!(!instr.prefixed);
        }
        let cb = lookup_cb(opcode);
        assert_eq!(cb.opcode, opcode);
        assert!(cb.prefixed);
        assert_eq!(cb.operand_bytes, 0);
    }
}

#[test]
fn tables_are_shared() {
    let a = lookup(0x00).unwrap() as *const Instruction;
    let b = lookup(0x00).unwrap() as *const Instruction;
    assert_eq!(a, b);
    assert!(std::ptr::eq(lookup_cb(0x7C), lookup_cb(0x7C)));
}

#[test]
fn primary_cycle_table() {
    for opcode in 0..=0xFFu8 {
        let expected = PRIMARY_CYCLES[opcode as usize];
        match lookup(opcode) {
            Some(instr) => assert_eq!(
                instr.cycles.cost(true),
                expected,
                "{:#04x} {}",
                opcode,
                instr.mnemonic
            ),
            None => assert_eq!(expected, 0, "{opcode:#04x}"),
        }
    }
}

#[test]
fn conditional_branches_have_two_costs() {
    let cases: [(u8, u32, u32); 4] = [
        (0x20, 12, 8),  // JR NZ
        (0xC2, 16, 12), // JP NZ
        (0xC4, 24, 12), // CALL NZ
        (0xC0, 20, 8),  // RET NZ
    ];

    for (base, taken, not_taken) in cases {
        for (cc, cond) in Cond::ALL.into_iter().enumerate() {
            let instr = lookup(base | ((cc as u8) << 3)).unwrap();
            assert_eq!(instr.cycles, Cycles::Branch { taken, not_taken });
            assert_eq!(instr.op.condition(), Some(cond));
        }
    }

    let branches = (0..=0xFFu8)
        .filter_map(lookup)
        .filter(|instr| instr.cycles.is_branch())
        .count();
    assert_eq!(branches, 16);

    // Unconditional forms are fixed.
    assert_eq!(lookup(0x18).unwrap().cycles, Cycles::Fixed(12));
    assert_eq!(lookup(0xC3).unwrap().cycles, Cycles::Fixed(16));
    assert_eq!(lookup(0xCD).unwrap().cycles, Cycles::Fixed(24));
    assert_eq!(lookup(0xC9).unwrap().cycles, Cycles::Fixed(16));
    assert_eq!(lookup(0xC9).unwrap().op.condition(), None);
}

#[test]
fn cb_cycle_table() {
    for opcode in 0..=0xFFu8 {
        let instr = lookup_cb(opcode);
        let expected = match (opcode & 0x07 == 6, opcode >> 6) {
            (false, _) => 8,
            (true, 1) => 12,
            (true, _) => 16,
        };
        assert_eq!(
            instr.cycles,
            Cycles::Fixed(expected),
            "CB {:#04x} {}",
            opcode,
            instr.mnemonic
        );
    }
}

#[test]
fn primary_lengths() {
    for opcode in 0..=0xFFu8 {
        let expected = PRIMARY_LENGTHS[opcode as usize];
        match lookup(opcode) {
            Some(instr) => {
                assert_eq!(instr.length(), expected, "{opcode:#04x}");
                assert_eq!(instr.operand_bytes as u16, expected - 1);
            }
            None => assert_eq!(expected, 0),
        }
    }
    assert!((0..=0xFFu8).all(|op| lookup_cb(op).length() == 2));
}

#[test]
fn decode_uses_bit_fields() {
    assert_eq!(decode(0x41), Some(Op::Ld(Operand8::B, Operand8::C)));
    assert_eq!(decode(0x76), Some(Op::Halt));
    assert_eq!(decode(0x36), Some(Op::LdImm(Operand8::HlInd)));
    assert_eq!(decode(0x2A), Some(Op::LdAIndirect(Indirect::HlInc)));
    assert_eq!(decode(0xF1), Some(Op::Pop(Reg16::AF)));
    assert_eq!(decode(0x31), Some(Op::Ld16Imm(Operand16::SP)));
    assert_eq!(decode(0x38), Some(Op::Jr(Some(Cond::C))));
    assert_eq!(decode(0xBE), Some(Op::Alu(AluOp::Cp, Operand8::HlInd)));
    assert_eq!(decode(0xEF), Some(Op::Rst(0x28)));
    assert_eq!(decode(0xD3), None);

    assert_eq!(decode_cb(0x7C), Op::Bit(7, Operand8::H));
    assert_eq!(decode_cb(0x37), Op::Rot(RotOp::Swap, Operand8::A));
    assert_eq!(decode_cb(0x86), Op::Res(0, Operand8::HlInd));
    assert_eq!(decode_cb(0xFF), Op::Set(7, Operand8::A));
}

#[test]
fn mnemonics() {
    let cases: &[(u8, &str)] = &[
        (0x00, "NOP"),
        (0x01, "LD BC,d16"),
        (0x08, "LD (a16),SP"),
        (0x10, "STOP"),
        (0x20, "JR NZ,r8"),
        (0x22, "LD (HL+),A"),
        (0x3A, "LD A,(HL-)"),
        (0x46, "LD B,(HL)"),
        (0x76, "HALT"),
        (0x80, "ADD A,B"),
        (0x8E, "ADC A,(HL)"),
        (0x96, "SUB (HL)"),
        (0xC5, "PUSH BC"),
        (0xCB, "PREFIX CB"),
        (0xCD, "CALL a16"),
        (0xD8, "RET C"),
        (0xE0, "LDH (a8),A"),
        (0xE2, "LD (C),A"),
        (0xE8, "ADD SP,r8"),
        (0xE9, "JP (HL)"),
        (0xF8, "LD HL,SP+r8"),
        (0xFE, "CP d8"),
        (0xFF, "RST 38H"),
    ];

    for &(opcode, text) in cases {
        assert_eq!(lookup(opcode).unwrap().mnemonic, text, "{opcode:#04x}");
    }

    assert_eq!(lookup_cb(0x00).mnemonic, "RLC B");
    assert_eq!(lookup_cb(0x7C).mnemonic, "BIT 7,H");
    assert_eq!(lookup_cb(0xDE).mnemonic, "SET 3,(HL)");
    assert_eq!(lookup_cb(0x3F).mnemonic, "SRL A");
}
