//! ISR-safe switch and bus wrappers using critical sections.
//!
//! Provides [`SharedB53Device`] for sharing one attached switch between
//! execution contexts and [`SharedMdioBus`] for sharing one MDIO bus between
//! several register engines.

use super::primitives::CriticalSectionCell;
use crate::access::{RegisterAccess, RegisterAddress, Width};
use crate::device::{B53Device, ChipId};
use crate::error::Result;
use crate::hal::mdio::MdioBus;

/// ISR-safe B53 device wrapper using critical sections.
///
/// Every access runs inside one `critical_section::with()`, so the page
/// select, the data words and the strobe of one register access are never
/// interleaved with another context's access to the same switch.
///
/// # Example
///
/// ```ignore
/// static SWITCH: StaticCell<SharedB53Device<Regs>> = StaticCell::new();
///
/// let switch = SWITCH.init(SharedB53Device::new(B53Device::probe(mdio, delay, 0x1E, cfg)?));
///
/// // From any context
/// let link = switch.read16(0x01, 0x00)?;
/// switch.with(|dev| dev.write8(0x00, 0x0B, 0x07))?;
/// ```
pub struct SharedB53Device<A> {
    inner: CriticalSectionCell<B53Device<A>>,
}

impl<A: RegisterAccess> SharedB53Device<A> {
    /// Wrap a probed device (const, suitable for static initialization).
    pub const fn new(device: B53Device<A>) -> Self {
        Self {
            inner: CriticalSectionCell::new(device),
        }
    }

    /// Execute a closure with exclusive access to the device.
    ///
    /// Interrupts are disabled for the duration of the closure. Use this to
    /// group several accesses into one uninterrupted sequence.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut B53Device<A>) -> R,
    {
        self.inner.with(f)
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut B53Device<A>) -> R,
    {
        self.inner.try_with(f)
    }

    /// Detach the device from the wrapper.
    pub fn into_inner(self) -> B53Device<A> {
        self.inner.into_inner()
    }

    /// Chip identified at discovery.
    pub fn chip(&self) -> ChipId {
        self.inner.with(|dev| dev.chip())
    }

    /// Read a register of the given width.
    #[inline]
    pub fn read(&self, addr: RegisterAddress, width: Width) -> Result<u64> {
        self.inner.with(|dev| dev.read(addr, width))
    }

    /// Write the low `width` bits of `value` to a register.
    #[inline]
    pub fn write(&self, addr: RegisterAddress, width: Width, value: u64) -> Result<()> {
        self.inner.with(|dev| dev.write(addr, width, value))
    }

    /// Read an 8-bit register.
    pub fn read8(&self, page: u8, offset: u8) -> Result<u8> {
        self.inner.with(|dev| dev.read8(page, offset))
    }

    /// Read a 16-bit register.
    pub fn read16(&self, page: u8, offset: u8) -> Result<u16> {
        self.inner.with(|dev| dev.read16(page, offset))
    }

    /// Read a 32-bit register.
    pub fn read32(&self, page: u8, offset: u8) -> Result<u32> {
        self.inner.with(|dev| dev.read32(page, offset))
    }

    /// Read a 48-bit register.
    pub fn read48(&self, page: u8, offset: u8) -> Result<u64> {
        self.inner.with(|dev| dev.read48(page, offset))
    }

    /// Read a 64-bit register.
    pub fn read64(&self, page: u8, offset: u8) -> Result<u64> {
        self.inner.with(|dev| dev.read64(page, offset))
    }

    /// Write an 8-bit register.
    pub fn write8(&self, page: u8, offset: u8, value: u8) -> Result<()> {
        self.inner.with(|dev| dev.write8(page, offset, value))
    }

    /// Write a 16-bit register.
    pub fn write16(&self, page: u8, offset: u8, value: u16) -> Result<()> {
        self.inner.with(|dev| dev.write16(page, offset, value))
    }

    /// Write a 32-bit register.
    pub fn write32(&self, page: u8, offset: u8, value: u32) -> Result<()> {
        self.inner.with(|dev| dev.write32(page, offset, value))
    }

    /// Write a 48-bit register.
    pub fn write48(&self, page: u8, offset: u8, value: u64) -> Result<()> {
        self.inner.with(|dev| dev.write48(page, offset, value))
    }

    /// Write a 64-bit register.
    pub fn write64(&self, page: u8, offset: u8, value: u64) -> Result<()> {
        self.inner.with(|dev| dev.write64(page, offset, value))
    }
}

impl<A: RegisterAccess> RegisterAccess for &SharedB53Device<A> {
    #[inline]
    fn read(&mut self, addr: RegisterAddress, width: Width) -> Result<u64> {
        SharedB53Device::read(self, addr, width)
    }

    #[inline]
    fn write(&mut self, addr: RegisterAddress, width: Width, value: u64) -> Result<()> {
        SharedB53Device::write(self, addr, width, value)
    }
}

/// ISR-safe MDIO bus wrapper using critical sections.
///
/// Lets several [`MdioRegisterAccess`](crate::access::MdioRegisterAccess)
/// engines share one bus through `&SharedMdioBus`. Each word transfer is one
/// critical section. Engines must sit on distinct bus addresses, since each
/// keeps its own page cache for its own pseudo-PHY.
pub struct SharedMdioBus<M> {
    inner: CriticalSectionCell<M>,
}

impl<M: MdioBus> SharedMdioBus<M> {
    /// Wrap a bus (const, suitable for static initialization).
    pub const fn new(bus: M) -> Self {
        Self {
            inner: CriticalSectionCell::new(bus),
        }
    }

    /// Execute a closure with exclusive access to the bus.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut M) -> R,
    {
        self.inner.with(f)
    }

    /// Detach the bus from the wrapper.
    pub fn into_inner(self) -> M {
        self.inner.into_inner()
    }
}

impl<M: MdioBus> MdioBus for &SharedMdioBus<M> {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        self.inner.with(|bus| bus.read(phy_addr, reg_addr))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.inner.with(|bus| bus.write(phy_addr, reg_addr, value))
    }
}
