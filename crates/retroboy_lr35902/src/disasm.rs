use std::fmt;

use crate::cpu::Bus;
use crate::instruction::{lookup, lookup_cb, Op, CB_PREFIX};

/// One decoded instruction in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disassembly {
    pub addr: u16,
    /// Raw encoding, prefix and operands included.
    pub bytes: Vec<u8>,
    /// Assembler text with operand values substituted.
    pub text: String,
    /// Encoded length in bytes.
    pub len: u16,
}

impl Disassembly {
    /// Address of the instruction that follows this one.
    #[inline]
    pub fn next_addr(&self) -> u16 {
        self.addr.wrapping_add(self.len)
    }
}

impl fmt::Display for Disassembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex: Vec<String> = self.bytes.iter().map(|b| format!("{b:02X}")).collect();
        write!(f, "{:04X}  {:<9} {}", self.addr, hex.join(" "), self.text)
    }
}

/// Disassemble the instruction at `addr`.
///
/// Reads go through the bus, so only use this on collaborators whose reads
/// have no side effects. Opcode holes render as `DB $xx`.
pub fn disassemble<B: Bus>(bus: &mut B, addr: u16) -> Disassembly {
    let opcode = bus.read8(addr);
    let mut bytes = vec![opcode];

    let instr = if opcode == CB_PREFIX {
        let cb = bus.read8(addr.wrapping_add(1));
        bytes.push(cb);
        lookup_cb(cb)
    } else {
        match lookup(opcode) {
            Some(instr) => instr,
            None => {
                return Disassembly {
                    addr,
                    bytes,
                    text: format!("DB ${opcode:02X}"),
                    len: 1,
                }
            }
        }
    };

    let operand_addr = addr.wrapping_add(bytes.len() as u16);
    for i in 0..instr.operand_bytes as u16 {
        bytes.push(bus.read8(operand_addr.wrapping_add(i)));
    }

    let len = bytes.len() as u16;
    let operands = &bytes[bytes.len() - instr.operand_bytes as usize..];
    let text = substitute(instr.op, &instr.mnemonic, operands, addr.wrapping_add(len));
    Disassembly {
        addr,
        bytes,
        text,
        len,
    }
}

/// Replace the operand placeholder of `mnemonic` with the actual value.
fn substitute(op: Op, mnemonic: &str, operands: &[u8], next_pc: u16) -> String {
    match (op, operands) {
        // STOP's operand byte is padding.
        (Op::Stop, _) => mnemonic.to_string(),
        (Op::Jr(_), [offset]) => {
            let target = next_pc.wrapping_add(*offset as i8 as u16);
            mnemonic.replace("r8", &format!("${target:04X}"))
        }
        (Op::AddSpImm | Op::LdHlSpImm, [offset]) => {
            let offset = *offset as i8;
            let magnitude = format!("${:02X}", offset.unsigned_abs());
            if offset < 0 {
                let signed = format!("-{magnitude}");
                mnemonic.replace("+r8", &signed).replace("r8", &signed)
            } else {
                mnemonic.replace("r8", &magnitude)
            }
        }
        (_, [value]) => {
            let text = format!("${value:02X}");
            mnemonic.replace("d8", &text).replace("a8", &format!("$FF{value:02X}"))
        }
        (_, [lo, hi]) => {
            let text = format!("${:04X}", u16::from_le_bytes([*lo, *hi]));
            mnemonic.replace("d16", &text).replace("a16", &text)
        }
        _ => mnemonic.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    fn disasm(program: &[u8]) -> String {
        let mut mem = FlatMemory::new();
        mem.load(0x0100, program).unwrap();
        disassemble(&mut mem, 0x0100).text
    }

    #[test]
    fn substitutes_immediates() {
        assert_eq!(disasm(&[0x3E, 0x42]), "LD A,$42");
        assert_eq!(disasm(&[0x01, 0x34, 0x12]), "LD BC,$1234");
        assert_eq!(disasm(&[0xEA, 0x00, 0xC0]), "LD ($C000),A");
        assert_eq!(disasm(&[0xE0, 0x44]), "LDH ($FF44),A");
        assert_eq!(disasm(&[0xC3, 0x50, 0x01]), "JP $0150");
    }

    #[test]
    fn relative_jumps_show_their_target() {
        // JR -2 at 0x0100 jumps back onto itself.
        assert_eq!(disasm(&[0x18, 0xFE]), "JR $0100");
        assert_eq!(disasm(&[0x20, 0x05]), "JR NZ,$0107");
    }

    #[test]
    fn signed_sp_offsets() {
        assert_eq!(disasm(&[0xE8, 0x05]), "ADD SP,$05");
        assert_eq!(disasm(&[0xF8, 0xFF]), "LD HL,SP-$01");
        assert_eq!(disasm(&[0xF8, 0x02]), "LD HL,SP+$02");
    }

    #[test]
    fn cb_and_holes() {
        let mut mem = FlatMemory::new();
        mem.load(0x0000, &[0xCB, 0x7C, 0xD3]).unwrap();
        let bit = disassemble(&mut mem, 0x0000);
        assert_eq!(bit.text, "BIT 7,H");
        assert_eq!(bit.len, 2);
        assert_eq!(bit.next_addr(), 0x0002);

        let hole = disassemble(&mut mem, 0x0002);
        assert_eq!(hole.text, "DB $D3");
        assert_eq!(hole.len, 1);
    }

    #[test]
    fn stop_consumes_its_padding_byte() {
        let mut mem = FlatMemory::new();
        mem.load(0x0000, &[0x10, 0x00]).unwrap();
        let stop = disassemble(&mut mem, 0x0000);
        assert_eq!(stop.text, "STOP");
        assert_eq!(stop.len, 2);
    }
}
