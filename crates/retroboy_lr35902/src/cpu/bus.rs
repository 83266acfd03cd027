/// Interrupt enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt flag register (IF).
pub const IF_ADDR: u16 = 0xFF0F;
/// Joypad register (P1/JOYP).
pub const P1_ADDR: u16 = 0xFF00;

/// The five maskable interrupt sources, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    /// Bit of this interrupt in IE/IF.
    #[inline]
    pub fn mask(self) -> u8 {
        1 << (self as u8)
    }

    /// Address the CPU jumps to when servicing this interrupt.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }

    /// Highest-priority interrupt among the set bits of `pending`.
    pub fn highest(pending: u8) -> Option<Interrupt> {
        let pending = pending & 0x1F;
        if pending == 0 {
            return None;
        }
        Interrupt::ALL
            .get(pending.trailing_zeros() as usize)
            .copied()
    }
}

/// Abstraction over the Game Boy bus (memory, IO and interrupt lines).
///
/// Only `read8`/`write8` are required. The interrupt and wake hooks default
/// to the DMG register convention (IE at `$FFFF`, IF at `$FF0F`, joypad at
/// `$FF00`), so a plain 64 KiB memory works as a collaborator. Machines with
/// a dedicated interrupt controller can override them.
///
/// Accesses are synchronous and total. An implementation that panics
/// unwinds through `Cpu::step` to whoever drives the core.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Highest-priority interrupt that is both requested and enabled.
    ///
    /// The core consults this regardless of IME (HALT wake-up needs it);
    /// IME gating is the core's job.
    fn pending_interrupt(&mut self) -> Option<Interrupt> {
        let ie = self.read8(IE_ADDR);
        let iflags = self.read8(IF_ADDR);
        Interrupt::highest(ie & iflags)
    }

    /// Called once the core has committed to servicing `interrupt` so the
    /// request can be cleared.
    fn acknowledge_interrupt(&mut self, interrupt: Interrupt) {
        let iflags = self.read8(IF_ADDR);
        self.write8(IF_ADDR, iflags & !interrupt.mask());
    }

    /// Whether the STOP low-power state should end.
    ///
    /// On hardware STOP is left when a joypad input line (P10–P13) goes
    /// low; the default polls the lower nibble of P1.
    fn stop_wake(&mut self) -> bool {
        (self.read8(P1_ADDR) & 0x0F) != 0x0F
    }
}
