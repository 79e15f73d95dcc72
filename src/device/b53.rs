//! B53 device handle
//!
//! A [`B53Device`] is created once per attached switch, at discovery, and
//! lives for as long as the switch stays attached. It owns the register
//! transport and remembers which chip sits behind it.

use embedded_hal::delay::DelayNs;

use crate::access::{MdioRegisterAccess, RegisterAccess, RegisterAddress, Width};
use crate::config::B53Config;
use crate::constants::{
    DEVICE_ID, MGMT_PAGE, PSEUDO_PHY_ADDR, REV_ID, REV_ID_25, STAT_PAGE, VLAN_PAGE,
    VLAN_TABLE_ACCESS_25, VLAN_TABLE_ACCESS_25_PROBE,
};
use crate::error::{ConfigError, Result};
use crate::hal::mdio::MdioBus;

use super::chip::{ChipFamily, ChipId};

/// An attached B53 switch
///
/// Register access goes through the [`RegisterAccess`] implementation, which
/// forwards to the owned transport.
///
/// # Example
///
/// ```ignore
/// use ph_b53_mdio::{B53Config, B53Device, RegisterAccess};
///
/// let mut switch = B53Device::probe(mdio, delay, 0x1E, B53Config::default())?;
/// defmt::info!("found {} rev {}", switch.chip().name(), switch.core_rev());
///
/// let mac = switch.read48(0x02, 0x10)?;
/// ```
#[derive(Debug)]
pub struct B53Device<A> {
    regs: A,
    chip: ChipId,
    core_rev: u8,
}

impl<M: MdioBus, D: DelayNs> B53Device<MdioRegisterAccess<M, D>> {
    /// Claim and identify the switch behind an MDIO port
    ///
    /// Only the pseudo-PHY address (0x1E) and address 0 are claimed; any
    /// other port is left to a generic PHY driver with
    /// [`ConfigError::InvalidPhyAddress`]. Register accesses always go to the
    /// address in `config`.
    pub fn probe(bus: M, delay: D, phy_addr: u8, config: B53Config) -> Result<Self> {
        if phy_addr != PSEUDO_PHY_ADDR && phy_addr != 0 {
            return Err(ConfigError::InvalidPhyAddress.into());
        }

        let regs = MdioRegisterAccess::new(bus, delay, config)?;
        Self::detect(regs)
    }

    /// Forget the cached page so the next access selects it again
    pub fn invalidate_page(&mut self) {
        self.regs.invalidate_page();
    }
}

impl<A: RegisterAccess> B53Device<A> {
    /// Identify the switch behind `regs` and build a handle for it
    pub fn detect(mut regs: A) -> Result<Self> {
        let chip = detect_chip(&mut regs)?;
        let core_rev = match chip {
            ChipId::Bcm5325 => regs.read8(STAT_PAGE, REV_ID_25)?,
            _ => regs.read8(MGMT_PAGE, REV_ID)?,
        };

        #[cfg(feature = "defmt")]
        defmt::info!("B53 switch detected: {} rev {}", chip.name(), core_rev);

        Ok(Self {
            regs,
            chip,
            core_rev,
        })
    }

    /// Build a handle for a chip identified by other means
    pub const fn new(regs: A, chip: ChipId, core_rev: u8) -> Self {
        Self {
            regs,
            chip,
            core_rev,
        }
    }

    /// Chip behind this handle
    pub fn chip(&self) -> ChipId {
        self.chip
    }

    /// Family of the chip behind this handle
    pub fn family(&self) -> ChipFamily {
        self.chip.family()
    }

    /// Core revision read at discovery
    pub fn core_rev(&self) -> u8 {
        self.core_rev
    }

    /// Borrow the register transport
    pub fn regs(&self) -> &A {
        &self.regs
    }

    /// Mutably borrow the register transport
    pub fn regs_mut(&mut self) -> &mut A {
        &mut self.regs
    }

    /// Detach the switch, returning its transport
    pub fn into_inner(self) -> A {
        self.regs
    }
}

impl<A: RegisterAccess> RegisterAccess for B53Device<A> {
    #[inline]
    fn read(&mut self, addr: RegisterAddress, width: Width) -> Result<u64> {
        self.regs.read(addr, width)
    }

    #[inline]
    fn write(&mut self, addr: RegisterAddress, width: Width, value: u64) -> Result<()> {
        self.regs.write(addr, width, value)
    }
}

/// Work out which chip answers on `regs`
///
/// BCM5325 and BCM5365 have no device id register, so a read of it returns 0.
/// They are told apart by whether the VLAN table access register keeps a
/// written pattern. Everything else reports its id in 8 bits (BCM539x) or
/// 32 bits (BCM531x5, BCM5301x).
fn detect_chip<A: RegisterAccess>(regs: &mut A) -> Result<ChipId> {
    let id8 = regs.read8(MGMT_PAGE, DEVICE_ID)?;

    let chip = match id8 {
        0 => {
            regs.write16(VLAN_PAGE, VLAN_TABLE_ACCESS_25, VLAN_TABLE_ACCESS_25_PROBE)?;
            let readback = regs.read16(VLAN_PAGE, VLAN_TABLE_ACCESS_25)?;
            if readback == VLAN_TABLE_ACCESS_25_PROBE {
                ChipId::Bcm5325
            } else {
                ChipId::Bcm5365
            }
        }
        0x95 => ChipId::Bcm5395,
        0x97 => ChipId::Bcm5397,
        0x98 => ChipId::Bcm5398,
        _ => {
            let id32 = regs.read32(MGMT_PAGE, DEVICE_ID)?;
            match ChipId::from_device_id(id32) {
                Some(chip)
                    if matches!(chip.family(), ChipFamily::Bcm531x5 | ChipFamily::Bcm5301x) =>
                {
                    chip
                }
                _ => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("unsupported switch detected (BCM53{:02x}/BCM{:x})", id8, id32);
                    return Err(ConfigError::UnsupportedChip.into());
                }
            }
        }
    };

    Ok(chip)
}
