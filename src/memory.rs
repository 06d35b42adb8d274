use itertools::Itertools;

use crate::error::{Error, Result};

pub const ADDR_SPACE_SIZE: usize = 0x10000;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Where the functional test's code begins once the padded image sits at $0000.
pub const CODE_START: u16 = 0x0400;

/*
  _______________ $10000
 | Vectors       |
 |_ _ _ _ _ _ _ _| $FFFA
 |               |
 | Test code     |
 |_ _ _ _ _ _ _ _| $0400
 | Data          |
 |_ _ _ _ _ _ _ _| $0200
 | Stack         |
 |_ _ _ _ _ _ _ _| $0100
 | Zero Page     |
 |_______________| $0000
*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vectors {
    pub nmi: u16,
    pub reset: u16,
    pub irq: u16,
}

/// A flat 16-bit address space with no mirroring or memory-mapped I/O.
pub struct Memory {
    ram: Box<[u8; ADDR_SPACE_SIZE]>,
    image_len: usize,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            ram: Box::new([0; ADDR_SPACE_SIZE]),
            image_len: 0,
        }
    }

    /// Copies `image` to $0000. Memory past the end of the image is cleared.
    pub fn load_image(&mut self, image: &[u8]) -> Result<()> {
        if image.len() > ADDR_SPACE_SIZE {
            return Err(Error::ImageTooLarge(image.len()));
        }
        self.ram.fill(0);
        self.ram[..image.len()].copy_from_slice(image);
        self.image_len = image.len();
        Ok(())
    }

    pub fn image_len(&self) -> usize {
        self.image_len
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        self.ram[addr as usize] = data;
    }

    // little endian
    pub fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub fn vectors(&self) -> Vectors {
        Vectors {
            nmi: self.read_u16(NMI_VECTOR),
            reset: self.read_u16(RESET_VECTOR),
            irq: self.read_u16(IRQ_VECTOR),
        }
    }

    /// Renders `len` bytes from `start` as rows of 16, e.g. `0400: D8 A2 FF ...`.
    /// Stops at the end of the address space.
    pub fn hex_dump(&self, start: u16, len: usize) -> String {
        let end = (start as usize + len).min(ADDR_SPACE_SIZE);
        (start as usize..end)
            .chunks(16)
            .into_iter()
            .map(|row| {
                let row: Vec<usize> = row.collect();
                format!(
                    "{:04X}: {}",
                    row[0],
                    row.iter().map(|a| format!("{:02X}", self.ram[*a])).join(" ")
                )
            })
            .join("\n")
    }
}

impl Default for Memory {
    fn default() -> Self {
        Memory::new()
    }
}
