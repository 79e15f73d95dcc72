//! MDIO (Management Data Input/Output) transport
//!
//! The B53 register window is reached through ordinary Clause 22 register
//! accesses on the switch's pseudo-PHY address. This module defines the
//! transport contract the register engine consumes; the bus controller that
//! actually clocks MDC/MDIO (or tunnels the same accesses over SPI or I2C)
//! lives in the platform HAL.

use crate::error::Result;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// This trait can be implemented by different backends, allowing the
/// register engine to work with any bus that can move 16-bit words to and
/// from a `(phy_addr, reg_addr)` pair. Implementations report a failed
/// transfer as [`IoError::Bus`](crate::IoError::Bus).
///
/// # Example Implementation
///
/// ```ignore
/// struct HalMdio<'d> {
///     smi: esp_hal::Smi<'d>,
/// }
///
/// impl MdioBus for HalMdio<'_> {
///     fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
///         self.smi.read(phy_addr, reg_addr).map_err(|_| IoError::Bus.into())
///     }
///
///     fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
///         self.smi.write(phy_addr, reg_addr, value).map_err(|_| IoError::Bus.into())
///     }
/// }
/// ```
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    #[inline]
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    #[inline]
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}
