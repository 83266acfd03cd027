use crate::cpu::{Bus, Cpu, CpuState};

impl Cpu {
    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) {
        if !self.ime && bus.pending_interrupt().is_some() {
            // HALT bug: with IME clear and an interrupt already pending the
            // CPU does not halt, and the next opcode fetch does not
            // increment PC.
            log::debug!(
                "GB CPU HALT bug at PC=0x{pc:04X}",
                pc = self.regs.pc.wrapping_sub(1)
            );
            self.halt_bug = true;
            return;
        }

        log::debug!("GB CPU halted at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.state = CpuState::Halted;
    }

    /// STOP. The padding byte was consumed by the driver as an operand.
    pub(super) fn exec_stop(&mut self) {
        // The CPU ignores maskable interrupts in this state and stays idle
        // until the bus reports a wake condition (see `Bus::stop_wake`).
        log::debug!("GB CPU stopped at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        self.state = CpuState::Stopped;
    }

    pub(super) fn exec_di(&mut self) {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
    }

    pub(super) fn exec_ei(&mut self) {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
    }
}
