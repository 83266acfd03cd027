use anyhow::{bail, Result};

use crate::cpu::Bus;

const MEMORY_SIZE: usize = 0x10000;

/// Flat 64 KiB RAM covering the whole address space.
///
/// No mapping, no IO side effects. Interrupt and wake lines use the default
/// `Bus` hooks, i.e. IE/IF/P1 are plain bytes at their usual addresses.
#[derive(Clone)]
pub struct FlatMemory {
    memory: Box<[u8; MEMORY_SIZE]>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory").finish_non_exhaustive()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            memory: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Copy `data` into memory starting at `addr`.
    pub fn load(&mut self, addr: u16, data: &[u8]) -> Result<()> {
        let start = addr as usize;
        let end = start + data.len();
        if end > MEMORY_SIZE {
            bail!(
                "image of {} bytes does not fit at 0x{:04X} ({} bytes available)",
                data.len(),
                addr,
                MEMORY_SIZE - start
            );
        }
        self.memory[start..end].copy_from_slice(data);
        log::debug!("Loaded {} bytes at 0x{:04X}", data.len(), addr);
        Ok(())
    }

    #[inline]
    pub fn get(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    #[inline]
    pub fn set(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

impl Bus for FlatMemory {
    fn read8(&mut self, addr: u16) -> u8 {
        self.get(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.set(addr, value);
    }
}
