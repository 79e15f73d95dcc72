//! Error types for the B53 register access driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Configuration and discovery failures
//! - [`IoError`]: Runtime register access failures
//!
//! The unified [`Error`] enum wraps both domains and is returned by every
//! register access method. [`IoError`] deliberately separates a failed bus
//! transfer from a chip that never finished its handshake, so callers can tell
//! wiring problems apart from chip-state problems.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and discovery errors
///
/// These errors occur while validating a [`B53Config`](crate::B53Config) or
/// while probing and identifying an attached switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid configuration parameter
    InvalidConfig,
    /// Bus address is not one the B53 pseudo-PHY answers on
    InvalidPhyAddress,
    /// The device id read from the switch is not a known B53 chip
    UnsupportedChip,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfig => "invalid configuration",
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::UnsupportedChip => "unsupported switch chip",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Runtime register access errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// The underlying bus transport failed a word read or write
    Bus,
    /// The chip did not clear its busy bits within the poll window
    Timeout,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Bus => "bus transfer failed",
            IoError::Timeout => "device did not respond in time",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match switch.read16(page, reg) {
///     Err(Error::Io(IoError::Timeout)) => { /* chip stuck, reset it */ }
///     Err(Error::Io(IoError::Bus)) => { /* check the MDIO wiring */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl Error {
    /// True if the bus transport itself failed
    pub const fn is_bus_error(&self) -> bool {
        matches!(self, Error::Io(IoError::Bus))
    }

    /// True if the chip did not complete its handshake in time
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Error::Io(IoError::Timeout))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for register access operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for I/O operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
