//! Synchronization and Concurrency Support
//!
//! Register accesses are multi-transfer sequences that must not interleave on
//! one pseudo-PHY. Exclusive `&mut` borrows already guarantee that within one
//! context; this module covers sharing between contexts:
//!
//! - **Primitives** (`primitives`): Low-level synchronization types
//!   - [`CriticalSectionCell`] - ISR-safe interior mutability
//!
//! - **Shared Wrappers** (`shared`): ISR-safe switch and bus wrappers
//!   - [`SharedB53Device`] - one switch, accessed from several contexts
//!   - [`SharedMdioBus`] - one bus, driven by several register engines
//!
//! # Feature Flags
//!
//! - `critical-section` (default): Enables this module
//!
//! # Example
//!
//! ```ignore
//! use ph_b53_mdio::sync::SharedB53Device;
//!
//! let switch = SharedB53Device::new(B53Device::probe(mdio, delay, 0x1E, config)?);
//!
//! // One access, one critical section
//! let status = switch.read16(0x01, 0x00)?;
//!
//! // Several accesses grouped into one critical section
//! switch.with(|dev| {
//!     dev.write8(0x00, 0x0B, 0x07)?;
//!     dev.write16(0x00, 0x08, 0x0000)
//! })?;
//! ```

mod primitives;

pub use primitives::CriticalSectionCell;

mod shared;

pub use shared::{SharedB53Device, SharedMdioBus};
