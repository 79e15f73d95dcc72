//! Paged Register Access
//!
//! B53 switches expose thousands of registers through a paging scheme: a
//! register is addressed by `(page, offset)` and has a fixed width of 8, 16,
//! 32, 48 or 64 bits. This module defines the width-generic access trait every
//! transport implements, plus the small value types it is built from.
//!
//! # Implementations
//!
//! - [`MdioRegisterAccess`]: the page/strobe/poll protocol over an
//!   [`MdioBus`](crate::hal::MdioBus) pseudo-PHY window
//! - [`B53Device`](crate::B53Device): forwards to its transport and carries
//!   the chip identity resolved at discovery
//!
//! Callers normally use the fixed-width helpers (`read16`, `write48`, ...);
//! the width-generic [`RegisterAccess::read`] and [`RegisterAccess::write`]
//! are what an implementation provides.

pub mod mdio;

pub use mdio::MdioRegisterAccess;

use crate::error::Result;

// =============================================================================
// Register Address
// =============================================================================

/// A logical switch register: one of 256 offsets on one of 256 pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterAddress {
    /// Register page
    pub page: u8,
    /// Register offset within the page
    pub offset: u8,
}

impl RegisterAddress {
    /// Create a register address
    pub const fn new(page: u8, offset: u8) -> Self {
        Self { page, offset }
    }
}

// =============================================================================
// Register Width
// =============================================================================

/// Logical register width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Width {
    /// 8-bit register
    W8,
    /// 16-bit register
    W16,
    /// 32-bit register
    W32,
    /// 48-bit register (MAC addresses, ARL entries)
    W48,
    /// 64-bit register (MIB counters, port masks on large chips)
    W64,
}

impl Width {
    /// Width in bits
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W48 => 48,
            Width::W64 => 64,
        }
    }

    /// Number of 16-bit data registers one value occupies
    pub const fn words(self) -> u8 {
        match self {
            Width::W8 | Width::W16 => 1,
            Width::W32 => 2,
            Width::W48 => 3,
            Width::W64 => 4,
        }
    }

    /// Mask covering the significant bits of a value of this width
    pub const fn mask(self) -> u64 {
        match self {
            Width::W64 => u64::MAX,
            _ => (1u64 << self.bits()) - 1,
        }
    }
}

// =============================================================================
// Register Access Trait
// =============================================================================

/// Width-generic access to paged switch registers
///
/// Implementors provide [`read`](Self::read) and [`write`](Self::write); the
/// fixed-width helpers are built on top of them. Values wider than the
/// register are truncated to the register width.
pub trait RegisterAccess {
    /// Read a register of the given width, zero-extended to 64 bits
    fn read(&mut self, addr: RegisterAddress, width: Width) -> Result<u64>;

    /// Write the low `width` bits of `value` to a register
    fn write(&mut self, addr: RegisterAddress, width: Width, value: u64) -> Result<()>;

    /// Read an 8-bit register
    fn read8(&mut self, page: u8, offset: u8) -> Result<u8> {
        self.read(RegisterAddress::new(page, offset), Width::W8)
            .map(|v| v as u8)
    }

    /// Read a 16-bit register
    fn read16(&mut self, page: u8, offset: u8) -> Result<u16> {
        self.read(RegisterAddress::new(page, offset), Width::W16)
            .map(|v| v as u16)
    }

    /// Read a 32-bit register
    fn read32(&mut self, page: u8, offset: u8) -> Result<u32> {
        self.read(RegisterAddress::new(page, offset), Width::W32)
            .map(|v| v as u32)
    }

    /// Read a 48-bit register into the low bits of a `u64`
    fn read48(&mut self, page: u8, offset: u8) -> Result<u64> {
        self.read(RegisterAddress::new(page, offset), Width::W48)
    }

    /// Read a 64-bit register
    fn read64(&mut self, page: u8, offset: u8) -> Result<u64> {
        self.read(RegisterAddress::new(page, offset), Width::W64)
    }

    /// Write an 8-bit register
    fn write8(&mut self, page: u8, offset: u8, value: u8) -> Result<()> {
        self.write(RegisterAddress::new(page, offset), Width::W8, value as u64)
    }

    /// Write a 16-bit register
    fn write16(&mut self, page: u8, offset: u8, value: u16) -> Result<()> {
        self.write(RegisterAddress::new(page, offset), Width::W16, value as u64)
    }

    /// Write a 32-bit register
    fn write32(&mut self, page: u8, offset: u8, value: u32) -> Result<()> {
        self.write(RegisterAddress::new(page, offset), Width::W32, value as u64)
    }

    /// Write a 48-bit register from the low bits of `value`
    fn write48(&mut self, page: u8, offset: u8, value: u64) -> Result<()> {
        self.write(RegisterAddress::new(page, offset), Width::W48, value)
    }

    /// Write a 64-bit register
    fn write64(&mut self, page: u8, offset: u8, value: u64) -> Result<()> {
        self.write(RegisterAddress::new(page, offset), Width::W64, value)
    }
}

impl<A: RegisterAccess + ?Sized> RegisterAccess for &mut A {
    #[inline]
    fn read(&mut self, addr: RegisterAddress, width: Width) -> Result<u64> {
        (**self).read(addr, width)
    }

    #[inline]
    fn write(&mut self, addr: RegisterAddress, width: Width, value: u64) -> Result<()> {
        (**self).write(addr, width, value)
    }
}
