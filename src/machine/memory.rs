use tracing::warn;

/// Flat byte-addressed physical memory.
///
/// Bytes past the end of the backing store read as zero; writes there are
/// dropped. Both cases are logged.
#[derive(Debug, Clone)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Copies `data` in starting at `address`.
    pub fn load(&mut self, address: u32, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            self.write_byte(address.wrapping_add(offset as u32), byte);
        }
    }

    /// Little-endian read of `width` bytes, clamped to 1..=4.
    pub fn read(&self, address: u32, width: usize) -> u32 {
        (0..width.clamp(1, 4)).rev().fold(0u32, |value, offset| {
            (value << 8) | self.read_byte(address.wrapping_add(offset as u32)) as u32
        })
    }

    /// Little-endian write of the low `width` bytes of `value`.
    pub fn write(&mut self, address: u32, width: usize, value: u32) {
        for offset in 0..width.clamp(1, 4) {
            let byte = (value >> (offset * 8)) as u8;
            self.write_byte(address.wrapping_add(offset as u32), byte);
        }
    }

    fn read_byte(&self, address: u32) -> u8 {
        match self.bytes.get(address as usize) {
            Some(&byte) => byte,
            None => {
                warn!(address, "read outside physical memory");
                0
            }
        }
    }

    fn write_byte(&mut self, address: u32, byte: u8) {
        match self.bytes.get_mut(address as usize) {
            Some(slot) => *slot = byte,
            None => warn!(address, "write outside physical memory dropped"),
        }
    }
}
