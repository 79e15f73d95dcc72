//! Attached switch handling
//!
//! - [`chip`]: chip ids, families and PHY identifier matching
//! - [`b53`]: the device handle created at discovery

pub mod b53;
pub mod chip;

pub use b53::B53Device;
pub use chip::{
    B53_PHY_ID_MASK, B53_PHY_IDS, ChipFamily, ChipId, PhyIdMatch, Speed, identify_phy,
    matches_phy_id, read_phy_id,
};
