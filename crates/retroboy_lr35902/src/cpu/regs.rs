use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 always read as zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

/// An 8-bit register, numbered by its slot in the register file.
///
/// Pairs are consecutive slots (high byte first), so `BC` covers slots 0
/// and 1 and `AF` covers slots 6 and 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    B = 0,
    C = 1,
    D = 2,
    E = 3,
    H = 4,
    L = 5,
    A = 6,
    F = 7,
}

/// A 16-bit register pair view over two 8-bit registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    BC = 0,
    DE = 2,
    HL = 4,
    AF = 6,
}

impl Reg16 {
    #[inline]
    pub fn high(self) -> Reg8 {
        match self {
            Reg16::BC => Reg8::B,
            Reg16::DE => Reg8::D,
            Reg16::HL => Reg8::H,
            Reg16::AF => Reg8::A,
        }
    }

    #[inline]
    pub fn low(self) -> Reg8 {
        match self {
            Reg16::BC => Reg8::C,
            Reg16::DE => Reg8::E,
            Reg16::HL => Reg8::L,
            Reg16::AF => Reg8::F,
        }
    }
}

/// Registers for the Game Boy CPU (LR35902).
///
/// The eight 8-bit registers live in one byte array; the 16-bit pairs are
/// computed from it, so a pair can never disagree with its halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    bytes: [u8; 8],
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn get(&self, reg: Reg8) -> u8 {
        self.bytes[reg as usize]
    }

    #[inline]
    pub fn set(&mut self, reg: Reg8, value: u8) {
        let value = match reg {
            // Lower 4 bits of F are always zero.
            Reg8::F => value & 0xF0,
            _ => value,
        };
        self.bytes[reg as usize] = value;
    }

    #[inline]
    pub fn pair(&self, pair: Reg16) -> u16 {
        u16::from_be_bytes([self.get(pair.high()), self.get(pair.low())])
    }

    #[inline]
    pub fn set_pair(&mut self, pair: Reg16, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.set(pair.high(), hi);
        self.set(pair.low(), lo);
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.get(Reg8::A)
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.set(Reg8::A, value);
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.pair(Reg16::AF)
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        self.set_pair(Reg16::AF, value);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.pair(Reg16::BC)
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        self.set_pair(Reg16::BC, value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.pair(Reg16::DE)
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        self.set_pair(Reg16::DE, value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.pair(Reg16::HL)
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.set_pair(Reg16::HL, value);
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.get(Reg8::F))
    }

    #[inline]
    pub fn set_flags_raw(&mut self, flags: Flags) {
        self.set(Reg8::F, flags.bits());
    }

    #[inline]
    pub fn test_flag(&self, flag: Flags) -> bool {
        self.flags().contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        let mut flags = self.flags();
        flags.set(flag, value);
        self.set_flags_raw(flags);
    }

    /// Batch flag update used after most ALU operations.
    ///
    /// `None` leaves the corresponding flag unchanged.
    #[inline]
    pub fn set_flags(
        &mut self,
        z: Option<bool>,
        n: Option<bool>,
        h: Option<bool>,
        c: Option<bool>,
    ) {
        let mut flags = self.flags();
        for (flag, value) in [(Flags::Z, z), (Flags::N, n), (Flags::H, h), (Flags::C, c)] {
            if let Some(value) = value {
                flags.set(flag, value);
            }
        }
        self.set_flags_raw(flags);
    }
}
