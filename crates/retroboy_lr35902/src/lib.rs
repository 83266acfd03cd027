pub mod cpu;
pub mod disasm;
pub mod instruction;
pub mod memory;

pub use cpu::{Bus, Cpu, CpuState, Flags, Interrupt, PowerOn, Reg16, Reg8, Registers};
pub use disasm::{disassemble, Disassembly};
pub use instruction::{lookup, lookup_cb, Cycles, Instruction, Op};
pub use memory::FlatMemory;

/// T-cycles per machine (M) cycle.
pub const TCYCLES_PER_MCYCLE: u32 = 4;
