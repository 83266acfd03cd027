use super::{Bus, Cpu, CpuState};

impl Cpu {
    /// Advance an EI issued earlier. Called once per executed instruction:
    /// the first call after EI moves it to `ime_enable_delay`, the second
    /// sets IME.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        match (self.ime_enable_pending, self.ime_enable_delay) {
            (_, true) => {
                self.ime = true;
                self.ime_enable_delay = false;
            }
            (true, false) => {
                self.ime_enable_pending = false;
                self.ime_enable_delay = true;
            }
            (false, false) => {}
        }
    }

    /// Service a maskable interrupt if IME is set and one is pending.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken, or `None` otherwise.
    pub(super) fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if !self.ime {
            return None;
        }
        bus.pending_interrupt()?;

        // IME is cleared immediately, then the current PC is pushed, and
        // only after that is the request acknowledged and PC redirected.
        self.ime = false;
        self.state = CpuState::Running;

        // EI; HALT with a request already pending arms the HALT bug, but the
        // request is taken before the repeated fetch. The handler returns to
        // the HALT itself.
        let pc = if self.halt_bug {
            self.halt_bug = false;
            self.regs.pc.wrapping_sub(1)
        } else {
            self.regs.pc
        };
        let [hi, lo] = pc.to_be_bytes();

        // The high-byte push may land on IE (SP was 0), so the interrupt to
        // dispatch is chosen after this write.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);

        let selection = bus.pending_interrupt();

        // Writes performed by the low-byte push are too late to affect the
        // current dispatch.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);

        match selection {
            Some(interrupt) => {
                log::debug!(
                    "GB CPU interrupt: {interrupt:?} vector=0x{vector:04X} pc=0x{pc:04X} sp=0x{sp:04X}",
                    vector = interrupt.vector(),
                    sp = self.regs.sp,
                );
                bus.acknowledge_interrupt(interrupt);
                self.regs.pc = interrupt.vector();
            }
            None => {
                // No interrupt line remained pending after the high-byte
                // push: the dispatch is cancelled and PC falls to 0x0000.
                log::debug!("GB CPU interrupt dispatch cancelled at pc=0x{pc:04X}");
                self.regs.pc = 0x0000;
            }
        }

        Some(20)
    }
}
