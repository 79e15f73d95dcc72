//! Configuration types for the B53 register access driver

use crate::constants::{
    HANDSHAKE_POLL_ATTEMPTS, HANDSHAKE_POLL_MAX_US, HANDSHAKE_POLL_MIN_US, MAX_PHY_ADDR,
    PSEUDO_PHY_ADDR,
};
use crate::error::{ConfigError, ConfigResult};

/// Handshake polling parameters
///
/// After every address strobe the chip needs a short, bounded settle time.
/// The engine polls the address register at most `attempts` times and pauses
/// between polls. The pause is a range: the engine asks the delay provider for
/// `min_delay_us`, and `max_delay_us` bounds how long a host scheduler may
/// stretch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollConfig {
    /// Maximum number of address register polls
    pub attempts: u8,
    /// Minimum pause between polls in microseconds
    pub min_delay_us: u32,
    /// Maximum pause between polls in microseconds
    pub max_delay_us: u32,
}

impl PollConfig {
    /// Hardware defaults: 5 polls, 10-100 µs apart
    pub const fn new() -> Self {
        Self {
            attempts: HANDSHAKE_POLL_ATTEMPTS,
            min_delay_us: HANDSHAKE_POLL_MIN_US,
            max_delay_us: HANDSHAKE_POLL_MAX_US,
        }
    }

    /// Set the poll cap
    #[must_use]
    pub const fn with_attempts(mut self, attempts: u8) -> Self {
        self.attempts = attempts;
        self
    }

    /// Set the pause range between polls
    #[must_use]
    pub const fn with_delay_range_us(mut self, min: u32, max: u32) -> Self {
        self.min_delay_us = min;
        self.max_delay_us = max;
        self
    }

    /// Check the parameters for consistency
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.attempts == 0 || self.min_delay_us > self.max_delay_us {
            return Err(ConfigError::InvalidConfig);
        }
        Ok(())
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Register access configuration
///
/// # Example
///
/// ```ignore
/// let config = B53Config::new()
///     .with_poll(PollConfig::new().with_delay_range_us(20, 200));
/// let regs = MdioRegisterAccess::new(bus, delay, config)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct B53Config {
    /// MDIO address of the pseudo-PHY carrying the register window
    pub phy_addr: u8,
    /// Handshake polling parameters
    pub poll: PollConfig,
}

impl B53Config {
    /// Default configuration: pseudo-PHY at 0x1E, hardware poll defaults
    pub const fn new() -> Self {
        Self {
            phy_addr: PSEUDO_PHY_ADDR,
            poll: PollConfig::new(),
        }
    }

    /// Set the pseudo-PHY bus address
    #[must_use]
    pub const fn with_phy_addr(mut self, phy_addr: u8) -> Self {
        self.phy_addr = phy_addr;
        self
    }

    /// Set the handshake polling parameters
    #[must_use]
    pub const fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Check the configuration for consistency
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.phy_addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress);
        }
        self.poll.validate()
    }
}

impl Default for B53Config {
    fn default() -> Self {
        Self::new()
    }
}
