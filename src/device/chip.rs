//! B53 chip identification
//!
//! Chips are identified once, at discovery, and the result is kept in the
//! device handle. Per-family properties hang off [`ChipFamily`] instead of
//! being re-derived from raw ids at every call site.

use crate::constants::{PHYIDR1, PHYIDR2};
use crate::error::Result;
use crate::hal::mdio::MdioBus;

// =============================================================================
// Chip Ids
// =============================================================================

/// A supported B53 switch chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipId {
    /// BCM5325 (5+1 port Fast Ethernet)
    Bcm5325,
    /// BCM5365 (5+1 port Fast Ethernet)
    Bcm5365,
    /// BCM5395
    Bcm5395,
    /// BCM5397
    Bcm5397,
    /// BCM5398
    Bcm5398,
    /// BCM53115
    Bcm53115,
    /// BCM53125
    Bcm53125,
    /// BCM53128
    Bcm53128,
    /// BCM63xx integrated switch
    Bcm63xx,
    /// BCM53010 (Northstar)
    Bcm53010,
    /// BCM53011 (Northstar)
    Bcm53011,
    /// BCM53012 (Northstar)
    Bcm53012,
    /// BCM53018 (Northstar)
    Bcm53018,
    /// BCM53019 (Northstar)
    Bcm53019,
}

impl ChipId {
    /// Every supported chip
    pub const ALL: [ChipId; 14] = [
        ChipId::Bcm5325,
        ChipId::Bcm5365,
        ChipId::Bcm5395,
        ChipId::Bcm5397,
        ChipId::Bcm5398,
        ChipId::Bcm53115,
        ChipId::Bcm53125,
        ChipId::Bcm53128,
        ChipId::Bcm63xx,
        ChipId::Bcm53010,
        ChipId::Bcm53011,
        ChipId::Bcm53012,
        ChipId::Bcm53018,
        ChipId::Bcm53019,
    ];

    /// Device id as reported by the switch's device id register
    pub const fn device_id(self) -> u32 {
        match self {
            ChipId::Bcm5325 => 0x25,
            ChipId::Bcm5365 => 0x65,
            ChipId::Bcm5395 => 0x95,
            ChipId::Bcm5397 => 0x97,
            ChipId::Bcm5398 => 0x98,
            ChipId::Bcm53115 => 0x53115,
            ChipId::Bcm53125 => 0x53125,
            ChipId::Bcm53128 => 0x53128,
            ChipId::Bcm63xx => 0x6300,
            ChipId::Bcm53010 => 0x53010,
            ChipId::Bcm53011 => 0x53011,
            ChipId::Bcm53012 => 0x53012,
            ChipId::Bcm53018 => 0x53018,
            ChipId::Bcm53019 => 0x53019,
        }
    }

    /// Look up a chip by device id
    pub const fn from_device_id(id: u32) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i].device_id() == id {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Family this chip belongs to
    pub const fn family(self) -> ChipFamily {
        match self {
            ChipId::Bcm5325 => ChipFamily::Bcm5325,
            ChipId::Bcm5365 => ChipFamily::Bcm5365,
            ChipId::Bcm5395 | ChipId::Bcm5397 | ChipId::Bcm5398 => ChipFamily::Bcm539x,
            ChipId::Bcm53115 | ChipId::Bcm53125 | ChipId::Bcm53128 => ChipFamily::Bcm531x5,
            ChipId::Bcm63xx => ChipFamily::Bcm63xx,
            ChipId::Bcm53010
            | ChipId::Bcm53011
            | ChipId::Bcm53012
            | ChipId::Bcm53018
            | ChipId::Bcm53019 => ChipFamily::Bcm5301x,
        }
    }

    /// Marketing name
    pub const fn name(self) -> &'static str {
        match self {
            ChipId::Bcm5325 => "BCM5325",
            ChipId::Bcm5365 => "BCM5365",
            ChipId::Bcm5395 => "BCM5395",
            ChipId::Bcm5397 => "BCM5397",
            ChipId::Bcm5398 => "BCM5398",
            ChipId::Bcm53115 => "BCM53115",
            ChipId::Bcm53125 => "BCM53125",
            ChipId::Bcm53128 => "BCM53128",
            ChipId::Bcm63xx => "BCM63xx",
            ChipId::Bcm53010 => "BCM53010",
            ChipId::Bcm53011 => "BCM53011",
            ChipId::Bcm53012 => "BCM53012",
            ChipId::Bcm53018 => "BCM53018",
            ChipId::Bcm53019 => "BCM53019",
        }
    }
}

impl core::fmt::Display for ChipId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Chip Families
// =============================================================================

/// Maximum port speed of a switch family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 100 Mbps
    Mbps100,
    /// 1000 Mbps
    Mbps1000,
}

impl Speed {
    /// Speed in Mbps
    pub const fn mbps(self) -> u32 {
        match self {
            Speed::Mbps100 => 100,
            Speed::Mbps1000 => 1000,
        }
    }
}

/// Group of chips sharing register layout and capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipFamily {
    /// BCM5325
    Bcm5325,
    /// BCM5365
    Bcm5365,
    /// BCM5395 / BCM5397 / BCM5398
    Bcm539x,
    /// BCM53115 / BCM53125 / BCM53128
    Bcm531x5,
    /// BCM63xx integrated switches
    Bcm63xx,
    /// BCM5301x (Northstar)
    Bcm5301x,
}

impl ChipFamily {
    /// True for the older Fast Ethernet parts with the 5325-style layout
    pub const fn is_fast_ethernet(self) -> bool {
        matches!(self, ChipFamily::Bcm5325 | ChipFamily::Bcm5365)
    }

    /// Number of switch ports, CPU port included
    pub const fn port_count(self) -> u8 {
        if self.is_fast_ethernet() { 6 } else { 9 }
    }

    /// Index of the port wired to the host CPU
    pub const fn cpu_port(self) -> u8 {
        if self.is_fast_ethernet() { 5 } else { 8 }
    }

    /// Fastest speed the CPU port negotiates
    pub const fn max_speed(self) -> Speed {
        if self.is_fast_ethernet() {
            Speed::Mbps100
        } else {
            Speed::Mbps1000
        }
    }
}

// =============================================================================
// PHY Identifier Matching
// =============================================================================

/// Mask applied to a PHY identifier before matching (ignores revision bits)
pub const B53_PHY_ID_MASK: u32 = 0x1FFF_FC00;

/// PHY identifier under which a group of B53 chips shows up on MDIO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyIdMatch {
    /// Identifier, compared under [`B53_PHY_ID_MASK`]
    pub phy_id: u32,
    /// Chips reporting this identifier
    pub name: &'static str,
}

/// Identifiers the B53 switches report in PHYIDR1/PHYIDR2
pub static B53_PHY_IDS: [PhyIdMatch; 3] = [
    PhyIdMatch {
        phy_id: 0x0143_BC00,
        name: "BCM5325/BCM539x",
    },
    PhyIdMatch {
        phy_id: 0x0362_5C00,
        name: "BCM53125/BCM53128",
    },
    PhyIdMatch {
        phy_id: 0x0040_6000,
        name: "BCM5365",
    },
];

/// Find the B53 entry matching a PHY identifier, if any
pub fn matches_phy_id(phy_id: u32) -> Option<&'static PhyIdMatch> {
    B53_PHY_IDS
        .iter()
        .find(|m| (phy_id & B53_PHY_ID_MASK) == (m.phy_id & B53_PHY_ID_MASK))
}

/// Read the 32-bit PHY identifier from the standard ID registers
pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
    let id1 = mdio.read(phy_addr, PHYIDR1)? as u32;
    let id2 = mdio.read(phy_addr, PHYIDR2)? as u32;
    Ok((id1 << 16) | id2)
}

/// Read the PHY identifier at `phy_addr` and match it against the B53 ids
pub fn identify_phy<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
) -> Result<Option<&'static PhyIdMatch>> {
    read_phy_id(mdio, phy_addr).map(matches_phy_id)
}
