use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use retroboy_lr35902::{disassemble, Cpu, CpuState, FlatMemory, PowerOn};

const USAGE: &str = "Usage: lr35902_trace <program_path> [steps] [--boot]";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let power_on = if args.iter().any(|arg| arg == "--boot") {
        PowerOn::Cleared
    } else {
        PowerOn::Dmg
    };

    let mut positional = args.iter().filter(|arg| *arg != "--boot");
    let program_path = positional
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!(USAGE))?;
    let steps: u64 = match positional.next() {
        Some(count) => count
            .parse()
            .with_context(|| format!("invalid step count '{count}'\n{USAGE}"))?,
        None => 1_000,
    };

    let program = std::fs::read(&program_path)
        .with_context(|| format!("failed to read program '{}'", program_path.display()))?;
    if program.is_empty() {
        bail!("program '{}' is empty", program_path.display());
    }

    let mut memory = FlatMemory::new();
    memory
        .load(0x0000, &program)
        .with_context(|| format!("failed to load '{}'", program_path.display()))?;

    let mut cpu = Cpu::with_power_on(power_on);

    for _ in 0..steps {
        let regs = *cpu.regs();
        let line = match cpu.state() {
            CpuState::Running => disassemble(&mut memory, regs.pc).to_string(),
            state => format!("{:04X}  <{state:?}>", regs.pc),
        };

        let cycles = cpu.step(&mut memory);
        println!(
            "{line:<32} AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} +{cycles}",
            regs.af(),
            regs.bc(),
            regs.de(),
            regs.hl(),
            regs.sp,
        );

        if cpu.is_locked() {
            bail!(
                "CPU locked at PC={:04X} after {} cycles",
                regs.pc,
                cpu.cycles()
            );
        }
    }

    println!("{} steps, {} cycles", steps, cpu.cycles());
    Ok(())
}
