//! B53 Switch Register Access over MDIO
//!
//! A `no_std`, `no_alloc` Rust implementation of paged register access for
//! Broadcom B53 managed Ethernet switches attached through an MDIO
//! pseudo-PHY.
//!
//! B53 switches expose their register file as 256 pages of 256 byte offsets.
//! Over MDIO the whole file is reached through a small window of MII
//! registers on one bus address: a page select, an address strobe that the
//! chip acknowledges by clearing its op bits, and four 16-bit data registers.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **Device Layer** ([`device`]): chip discovery and the [`B53Device`] handle
//! 2. **Access Layer** ([`access`]): the [`RegisterAccess`] trait and the
//!    MDIO pseudo-PHY engine [`MdioRegisterAccess`]
//! 3. **HAL Layer** ([`hal`]): the [`MdioBus`] transport trait
//!
//! # Supported Chips
//!
//! - BCM5325, BCM5365 (Fast Ethernet)
//! - BCM5395, BCM5397, BCM5398
//! - BCM53115, BCM53125, BCM53128
//! - BCM53010, BCM53011, BCM53012, BCM53018, BCM53019
//!
//! # Features
//!
//! - `critical-section` (default): Enable the ISR-safe [`sync`] wrappers
//! - `defmt`: Enable defmt formatting for public types and driver logging
//!
//! # Example
//!
//! ```ignore
//! use ph_b53_mdio::{B53Config, B53Device, RegisterAccess};
//!
//! // `mdio` is any MdioBus implementation, `delay` any DelayNs
//! let mut switch = B53Device::probe(mdio, delay, 0x1E, B53Config::default())?;
//!
//! // Enable forwarding on the management port
//! let ctrl = switch.read8(0x00, 0x0B)?;
//! switch.write8(0x00, 0x0B, ctrl | 0x02)?;
//!
//! // 48-bit registers come back in the low bits of a u64
//! let mac = switch.read48(0x02, 0x10)?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod access;
pub mod config;
pub mod constants;
pub mod device;
pub mod hal;

mod error;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use access::{MdioRegisterAccess, RegisterAccess, RegisterAddress, Width};
pub use config::{B53Config, PollConfig};
pub use device::{B53Device, ChipFamily, ChipId, PhyIdMatch, Speed};
pub use error::{ConfigError, ConfigResult, Error, IoError, IoResult, Result};
pub use hal::MdioBus;

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::{SharedB53Device, SharedMdioBus};
