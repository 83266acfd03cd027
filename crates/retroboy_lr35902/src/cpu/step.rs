use crate::instruction::{lookup, lookup_cb, CB_PREFIX};
use crate::TCYCLES_PER_MCYCLE;

use super::{Bus, Cpu, CpuState};

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// While halted or stopped this advances by one idle M-cycle (4
    /// T-cycles). Once locked it returns 0 until `reset`.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cycles = self.step_inner(bus);
        self.cycles += cycles as u64;
        cycles
    }

    fn step_inner<B: Bus>(&mut self, bus: &mut B) -> u32 {
        match self.state {
            // CPU has executed an invalid opcode. On hardware the CPU is
            // dead until power-off.
            CpuState::Locked => return 0,
            CpuState::Stopped => {
                if bus.stop_wake() {
                    log::debug!("GB CPU leaving STOP at PC=0x{:04X}", self.regs.pc);
                    self.state = CpuState::Running;
                }
                return TCYCLES_PER_MCYCLE;
            }
            CpuState::Halted => {
                if bus.pending_interrupt().is_none() {
                    return TCYCLES_PER_MCYCLE;
                }
                // With IME clear the CPU wakes up without servicing the
                // interrupt and carries on with the next instruction.
                log::debug!("GB CPU leaving HALT at PC=0x{:04X}", self.regs.pc);
                self.state = CpuState::Running;
            }
            CpuState::Running => {}
        }

        if let Some(cycles) = self.service_interrupt(bus) {
            return cycles;
        }

        let cycles = self.execute_next(bus);
        self.apply_ime_delay();
        cycles
    }

    /// Fetch, decode and execute the instruction at PC.
    fn execute_next<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);

        let instr = if opcode == CB_PREFIX {
            let cb = self.fetch8(bus);
            lookup_cb(cb)
        } else {
            match lookup(opcode) {
                Some(instr) => instr,
                None => {
                    self.lock(opcode, pc);
                    // The opcode fetch itself still took one M-cycle.
                    return TCYCLES_PER_MCYCLE;
                }
            }
        };

        log::trace!("GB CPU 0x{pc:04X}: {}", instr.mnemonic);

        let imm = match instr.operand_bytes {
            0 => 0,
            1 => self.fetch8(bus) as u16,
            _ => self.fetch16(bus),
        };

        let taken = self.execute(bus, instr.op, imm);
        instr.cycles.cost(taken)
    }

    /// Opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD) hard-lock
    /// the CPU until power-off.
    fn lock(&mut self, opcode: u8, pc: u16) {
        log::error!(
            "GB CPU locked: invalid opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.state = CpuState::Locked;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
    }
}
