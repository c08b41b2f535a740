//! Emulated machine state seen by the debug console
//!
//! The expression evaluator only needs two narrow views of the machine:
//!
//! - **RegisterFile**: read a 32-bit register by its canonical name
//! - **MemoryBus**: read a little-endian value from the emulated address space
//!
//! `Machine` bundles the concrete `Registers` and `Memory` used by the
//! console and implements both.

pub mod memory;
pub mod registers;

pub use memory::Memory;
pub use registers::{Registers, EIP_NAME, GPR_NAMES};

pub trait RegisterFile {
    /// Current value of the register called `name` (no `$` prefix), or `None`
    /// if the register file has no such register.
    fn read_register(&self, name: &str) -> Option<u32>;
}

pub trait MemoryBus {
    /// Reads `width` bytes (1..=4) at `address`, little-endian.
    fn read_memory(&self, address: u32, width: usize) -> u32;
}

#[derive(Debug, Clone)]
pub struct Machine {
    pub registers: Registers,
    pub memory: Memory,
}

impl Machine {
    pub fn new(memory_size: usize, entry: u32) -> Self {
        let mut registers = Registers::default();
        registers.eip = entry;
        Self {
            registers,
            memory: Memory::new(memory_size),
        }
    }
}

impl RegisterFile for Machine {
    fn read_register(&self, name: &str) -> Option<u32> {
        self.registers.read(name)
    }
}

impl MemoryBus for Machine {
    fn read_memory(&self, address: u32, width: usize) -> u32 {
        self.memory.read(address, width)
    }
}
