//! Pseudo-PHY register engine
//!
//! The switch answers on one MDIO address (the pseudo-PHY, normally 0x1E) with
//! a tiny register window:
//!
//! | MII reg     | Function                                      |
//! |-------------|-----------------------------------------------|
//! | 0x10        | Page select: `page << 8 \| PAGE_ENABLE`        |
//! | 0x11        | Address strobe: `offset << 8 \| op bit`        |
//! | 0x18 - 0x1B | Data words, least-significant first           |
//!
//! A read strobes the address with the read bit, waits for the chip to clear
//! it, then collects the data words. A write stages the data words first and
//! strobes last, because the chip latches the data registers at strobe time.
//!
//! The engine caches the selected page so back-to-back accesses to one page
//! cost a single page-select transfer.

use embedded_hal::delay::DelayNs;

use crate::config::{B53Config, PollConfig};
use crate::constants::{
    ADDR_BUSY_MASK, ADDR_READ, ADDR_WRITE, PAGE_ENABLE, REG_MII_ADDR, REG_MII_DATA0, REG_MII_PAGE,
};
use crate::error::{IoError, Result};
use crate::hal::mdio::MdioBus;

use super::{RegisterAccess, RegisterAddress, Width};

/// Direction of one address strobe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Op {
    /// Load the register into the data window
    Read,
    /// Commit the data window into the register
    Write,
}

impl Op {
    /// Address register bit requesting this operation
    pub const fn bit(self) -> u16 {
        match self {
            Op::Read => ADDR_READ,
            Op::Write => ADDR_WRITE,
        }
    }
}

/// Register engine over an MDIO pseudo-PHY
///
/// Owns the bus, the delay used between handshake polls, and the page cache.
/// Exclusive access (`&mut self`) keeps a multi-word transaction from
/// interleaving with another; see [`SharedB53Device`](crate::sync::SharedB53Device)
/// for sharing one engine between contexts.
///
/// # Example
///
/// ```ignore
/// let mut regs = MdioRegisterAccess::new(mdio, delay, B53Config::default())?;
///
/// let port_ctrl = regs.read8(0x00, 0x00)?;
/// regs.write48(0x02, 0x10, 0x0200_0012_3456)?;
/// ```
#[derive(Debug)]
pub struct MdioRegisterAccess<M, D> {
    bus: M,
    delay: D,
    phy_addr: u8,
    poll: PollConfig,
    /// Last page written to the page register; `None` forces a page select
    current_page: Option<u8>,
}

impl<M: MdioBus, D: DelayNs> MdioRegisterAccess<M, D> {
    /// Create an engine after validating `config`
    ///
    /// The page cache starts out unknown, so the first access always selects
    /// its page.
    pub fn new(bus: M, delay: D, config: B53Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bus,
            delay,
            phy_addr: config.phy_addr,
            poll: config.poll,
            current_page: None,
        })
    }

    /// Page the chip is known to have selected, if any
    pub fn current_page(&self) -> Option<u8> {
        self.current_page
    }

    /// Forget the cached page so the next access selects it again
    ///
    /// Call this after the switch was reset or reattached behind the driver's
    /// back.
    pub fn invalidate_page(&mut self) {
        self.current_page = None;
    }

    /// Bus address of the pseudo-PHY
    pub fn phy_addr(&self) -> u8 {
        self.phy_addr
    }

    /// Active configuration
    pub fn config(&self) -> B53Config {
        B53Config {
            phy_addr: self.phy_addr,
            poll: self.poll,
        }
    }

    /// Borrow the underlying bus
    pub fn bus(&self) -> &M {
        &self.bus
    }

    /// Mutably borrow the underlying bus
    ///
    /// Raw accesses to the page register through this borrow desynchronize
    /// the page cache; call [`invalidate_page`](Self::invalidate_page) after.
    pub fn bus_mut(&mut self) -> &mut M {
        &mut self.bus
    }

    /// Borrow the delay provider
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Tear down the engine, returning the bus and delay
    pub fn release(self) -> (M, D) {
        (self.bus, self.delay)
    }

    /// Perform one page-select / address-strobe / poll handshake
    ///
    /// For [`Op::Read`] this leaves the register value in the data window;
    /// for [`Op::Write`] the data window must already be staged.
    pub fn handshake(&mut self, addr: RegisterAddress, op: Op) -> Result<()> {
        self.select_page(addr.page)?;

        self.bus.write(
            self.phy_addr,
            REG_MII_ADDR,
            ((addr.offset as u16) << 8) | op.bit(),
        )?;

        self.wait_strobe_done(addr)
    }

    fn select_page(&mut self, page: u8) -> Result<()> {
        if self.current_page == Some(page) {
            return Ok(());
        }

        self.bus
            .write(self.phy_addr, REG_MII_PAGE, ((page as u16) << 8) | PAGE_ENABLE)?;
        self.current_page = Some(page);

        #[cfg(feature = "defmt")]
        defmt::debug!("B53 page select: {:#04x}", page);

        Ok(())
    }

    /// Poll the address register until the chip clears both op bits
    fn wait_strobe_done(&mut self, addr: RegisterAddress) -> Result<()> {
        for _ in 0..self.poll.attempts {
            let status = self.bus.read(self.phy_addr, REG_MII_ADDR)?;
            if status & ADDR_BUSY_MASK == 0 {
                return Ok(());
            }
            self.delay.delay_us(self.poll.min_delay_us);
        }

        #[cfg(feature = "defmt")]
        defmt::warn!(
            "B53 access to page {:#04x} offset {:#04x} still busy after {} polls",
            addr.page,
            addr.offset,
            self.poll.attempts
        );
        #[cfg(not(feature = "defmt"))]
        let _ = addr;

        Err(IoError::Timeout.into())
    }

    fn read_word(&mut self, slot: u8) -> Result<u16> {
        self.bus.read(self.phy_addr, REG_MII_DATA0 + slot)
    }

    fn write_word(&mut self, slot: u8, word: u16) -> Result<()> {
        self.bus.write(self.phy_addr, REG_MII_DATA0 + slot, word)
    }
}

impl<M: MdioBus, D: DelayNs> RegisterAccess for MdioRegisterAccess<M, D> {
    fn read(&mut self, addr: RegisterAddress, width: Width) -> Result<u64> {
        self.handshake(addr, Op::Read)?;

        let value = match width {
            Width::W8 => (self.read_word(0)? & 0xFF) as u64,
            Width::W16 => self.read_word(0)? as u64,
            Width::W32 => {
                let low = self.read_word(0)? as u64;
                let high = self.read_word(1)? as u64;
                low | (high << 16)
            }
            // Most-significant word first so each shift moves earlier words up.
            Width::W48 | Width::W64 => {
                let mut acc = 0u64;
                for slot in (0..width.words()).rev() {
                    acc = (acc << 16) | self.read_word(slot)? as u64;
                }
                acc
            }
        };

        Ok(value)
    }

    fn write(&mut self, addr: RegisterAddress, width: Width, value: u64) -> Result<()> {
        let mut remaining = value & width.mask();
        for slot in 0..width.words() {
            self.write_word(slot, remaining as u16)?;
            remaining >>= 16;
        }

        self.handshake(addr, Op::Write)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
