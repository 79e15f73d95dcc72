//! Centralized Constants
//!
//! Single source of truth for the B53 pseudo-PHY register map, the switch
//! registers used during discovery, and the handshake timing defaults.
//!
//! # Organization
//!
//! - **Pseudo-PHY register map**: MII registers that carry the paged access
//! - **Switch registers**: Pages and offsets read while identifying the chip
//! - **Timing**: Handshake poll cap and delay range

// =============================================================================
// Pseudo-PHY Register Map
// =============================================================================

/// MDIO address of the register access pseudo-PHY
pub const PSEUDO_PHY_ADDR: u8 = 0x1E;

/// Maximum valid MDIO bus address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Standard PHY identifier register 1 (OUI bits)
pub const PHYIDR1: u8 = 0x02;

/// Standard PHY identifier register 2 (OUI, model and revision)
pub const PHYIDR2: u8 = 0x03;

/// MII page register: page number in the high byte plus [`PAGE_ENABLE`]
pub const REG_MII_PAGE: u8 = 0x10;

/// MII address register: register offset in the high byte plus an op bit
pub const REG_MII_ADDR: u8 = 0x11;

/// First MII data register (least-significant word)
pub const REG_MII_DATA0: u8 = 0x18;

/// Second MII data register
pub const REG_MII_DATA1: u8 = 0x19;

/// Third MII data register
pub const REG_MII_DATA2: u8 = 0x1A;

/// Fourth MII data register (most-significant word of a 64-bit value)
pub const REG_MII_DATA3: u8 = 0x1B;

/// Number of 16-bit data registers in the access window
pub const DATA_SLOTS: u8 = 4;

/// Page register enable bit, required on every page select
pub const PAGE_ENABLE: u16 = 1 << 0;

/// Address register write-op bit
pub const ADDR_WRITE: u16 = 1 << 0;

/// Address register read-op bit
pub const ADDR_READ: u16 = 1 << 1;

/// Bits that stay set in the address register while an access is in flight
pub const ADDR_BUSY_MASK: u16 = ADDR_WRITE | ADDR_READ;

// =============================================================================
// Switch Registers (discovery)
// =============================================================================

/// Status page
pub const STAT_PAGE: u8 = 0x01;

/// Management page
pub const MGMT_PAGE: u8 = 0x02;

/// VLAN page
pub const VLAN_PAGE: u8 = 0x34;

/// Device id register (8-bit on BCM539x, 32-bit on BCM531x5/BCM5301x)
pub const DEVICE_ID: u8 = 0x30;

/// Core revision register on the management page
pub const REV_ID: u8 = 0x40;

/// Core revision register on the status page (BCM5325 only)
pub const REV_ID_25: u8 = 0x50;

/// VLAN table access register on BCM5325/BCM5365 (16-bit)
pub const VLAN_TABLE_ACCESS_25: u8 = 0x06;

/// Probe pattern written to [`VLAN_TABLE_ACCESS_25`]; only BCM5325 keeps it
pub const VLAN_TABLE_ACCESS_25_PROBE: u16 = 0x000F;

// =============================================================================
// Timing Constants
// =============================================================================

/// Number of address register polls before a handshake times out
pub const HANDSHAKE_POLL_ATTEMPTS: u8 = 5;

/// Lower bound of the pause between handshake polls, in microseconds
pub const HANDSHAKE_POLL_MIN_US: u32 = 10;

/// Upper bound of the pause between handshake polls, in microseconds
pub const HANDSHAKE_POLL_MAX_US: u32 = 100;
