//! Hardware Abstraction Layer
//!
//! The register engine never touches hardware directly. It rides on two
//! collaborator traits:
//!
//! - [`mdio::MdioBus`]: 16-bit register reads and writes on a management bus
//! - `embedded_hal::delay::DelayNs`: the pause between handshake polls
//!
//! Pass any delay implementation from your HAL (e.g., `esp_hal::delay::Delay`).

pub mod mdio;

pub use mdio::MdioBus;
