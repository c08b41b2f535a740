/// General-purpose register names in encoding order.
pub const GPR_NAMES: [&str; 8] = ["eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi"];

pub const EIP_NAME: &str = "eip";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    pub gpr: [u32; 8],
    pub eip: u32,
}

impl Registers {
    /// Case-sensitive lookup by canonical name.
    pub fn read(&self, name: &str) -> Option<u32> {
        if name == EIP_NAME {
            return Some(self.eip);
        }
        GPR_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|index| self.gpr[index])
    }

    /// Returns false if `name` is not a register.
    pub fn write(&mut self, name: &str, value: u32) -> bool {
        if name == EIP_NAME {
            self.eip = value;
            return true;
        }
        match GPR_NAMES.iter().position(|&n| n == name) {
            Some(index) => {
                self.gpr[index] = value;
                true
            }
            None => false,
        }
    }

    /// All registers in display order, `eip` last.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        GPR_NAMES
            .iter()
            .copied()
            .zip(self.gpr.iter().copied())
            .chain(std::iter::once((EIP_NAME, self.eip)))
    }
}
