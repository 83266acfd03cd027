mod alu;
mod bus;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;

pub use bus::{Bus, Interrupt, IE_ADDR, IF_ADDR, P1_ADDR};
pub use init::PowerOn;
pub use regs::{Flags, Reg16, Reg8, Registers};

/// Execution state of the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CpuState {
    Running,
    /// HALT: no fetches until an interrupt is pending.
    Halted,
    /// STOP: no fetches until the bus reports a wake condition.
    Stopped,
    /// An undefined opcode was executed. Terminal until `reset`.
    Locked,
}

/// Sharp LR35902 instruction core.
///
/// The CPU owns its registers and mode state and only mutates them from
/// `step`; memory and interrupt lines are reached through a [`Bus`] passed
/// to each call.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub(crate) regs: Registers,
    /// Interrupt master enable.
    pub(crate) ime: bool,
    state: CpuState,
    power_on: PowerOn,
    /// HALT bug armed: the next opcode fetch does not advance PC.
    halt_bug: bool,
    /// EI executed; IME is armed once the current instruction finishes.
    ime_enable_pending: bool,
    /// IME becomes 1 after the instruction following EI completes.
    ime_enable_delay: bool,
    /// Total T-cycles consumed since the last reset.
    cycles: u64,
}

impl Cpu {
    /// Read-only view of the register file.
    #[inline]
    pub fn regs(&self) -> &Registers {
        &self.regs
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Set IME directly, cancelling any EI still in flight.
    #[inline]
    pub fn set_ime(&mut self, enabled: bool) {
        self.ime = enabled;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
    }

    #[inline]
    pub fn state(&self) -> CpuState {
        self.state
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.state == CpuState::Locked
    }

    #[inline]
    pub fn power_on(&self) -> PowerOn {
        self.power_on
    }

    /// Total T-cycles consumed since the last reset.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether an EI is waiting to take effect.
    #[inline]
    pub fn ime_scheduled(&self) -> bool {
        self.ime_enable_pending || self.ime_enable_delay
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.regs.test_flag(flag)
    }

    #[inline]
    pub(crate) fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.set_flag(flag, value);
    }
}
