use super::{Cpu, CpuState, Reg16, Registers};

/// Register values applied by `Cpu::new` and `Cpu::reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PowerOn {
    /// DMG state after the boot ROM hands control to the cartridge.
    #[default]
    Dmg,
    /// CGB state after the boot ROM, running a CGB cartridge.
    Cgb,
    /// Everything zero, PC at 0x0000: the state a boot ROM starts from.
    Cleared,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_power_on(PowerOn::default())
    }

    pub fn with_power_on(power_on: PowerOn) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            state: CpuState::Running,
            power_on,
            halt_bug: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            cycles: 0,
        };
        cpu.apply_power_on_state();
        cpu
    }

    /// Reset the CPU to its power-on state.
    ///
    /// This is the only way out of `CpuState::Locked`.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.state = CpuState::Running;
        self.halt_bug = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.cycles = 0;
        self.apply_power_on_state();
    }

    /// Initialize registers to the configured power-on values.
    ///
    /// The post-boot values follow Pan Docs ("Power Up Sequence").
    fn apply_power_on_state(&mut self) {
        let (af, bc, de, hl, sp, pc) = match self.power_on {
            PowerOn::Dmg => (0x01B0, 0x0013, 0x00D8, 0x014D, 0xFFFE, 0x0100),
            PowerOn::Cgb => (0x1180, 0x0000, 0xFF56, 0x000D, 0xFFFE, 0x0100),
            PowerOn::Cleared => (0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000),
        };
        self.regs.set_pair(Reg16::AF, af);
        self.regs.set_pair(Reg16::BC, bc);
        self.regs.set_pair(Reg16::DE, de);
        self.regs.set_pair(Reg16::HL, hl);
        self.regs.sp = sp;
        self.regs.pc = pc;

        // IME is clear when control is handed to the cartridge at 0x0100.
        self.ime = false;
    }
}
