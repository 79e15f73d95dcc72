//! Testing utilities and mock implementations
//!
//! This module provides a host-side model of the B53 pseudo-PHY so the
//! register engine can be exercised without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::vec::Vec;

use crate::constants::{
    ADDR_BUSY_MASK, ADDR_READ, ADDR_WRITE, DATA_SLOTS, PAGE_ENABLE, REG_MII_ADDR, REG_MII_DATA0,
    REG_MII_PAGE,
};
use crate::error::{IoError, Result};
use crate::hal::mdio::MdioBus;

// =============================================================================
// Mock Pseudo-PHY
// =============================================================================

/// One transfer observed on the mock bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    Read { phy: u8, reg: u8 },
    Write { phy: u8, reg: u8, value: u16 },
}

/// Register state of one switch behind one bus address
#[derive(Debug, Default)]
struct SwitchModel {
    /// Raw MII registers (page, address and data window)
    mii: [u16; 32],
    /// Page latched by the last enabled page select
    page: u8,
    /// Switch register file keyed by (page, offset)
    registers: HashMap<(u8, u8), u64>,
    /// Registers that ignore committed writes
    read_only: HashSet<(u8, u8)>,
    /// Remaining polls that report the current strobe as busy
    busy_left: usize,
}

impl SwitchModel {
    fn data_window(&self) -> u64 {
        (0..DATA_SLOTS).rev().fold(0u64, |acc, slot| {
            (acc << 16) | self.mii[(REG_MII_DATA0 + slot) as usize] as u64
        })
    }

    fn load_data_window(&mut self, mut value: u64) {
        for slot in 0..DATA_SLOTS {
            self.mii[(REG_MII_DATA0 + slot) as usize] = value as u16;
            value >>= 16;
        }
    }

    fn strobe(&mut self, word: u16, busy_polls: usize) {
        let key = (self.page, (word >> 8) as u8);
        if word & ADDR_WRITE != 0 {
            if !self.read_only.contains(&key) {
                let value = self.data_window();
                self.registers.insert(key, value);
            }
        } else if word & ADDR_READ != 0 {
            let value = self.registers.get(&key).copied().unwrap_or(0);
            self.load_data_window(value);
        }
        self.busy_left = busy_polls;
    }
}

/// Mock MDIO bus modelling B53 switches behind their pseudo-PHY
///
/// Page selects latch the page, a write strobe commits the four data words
/// into the addressed register, and a read strobe loads the register into the
/// data window. Every successful transfer is logged; injected faults fail one
/// transfer without logging or applying it.
///
/// # Example
///
/// ```ignore
/// let mut bus = MockPseudoPhy::new();
/// bus.set_switch_register(0x1E, 0x02, 0x30, 0x53125);
///
/// let mut regs = MdioRegisterAccess::new(bus, MockDelay::new(), B53Config::default())?;
/// assert_eq!(regs.read32(0x02, 0x30)?, 0x53125);
/// ```
#[derive(Debug, Default)]
pub struct MockPseudoPhy {
    switches: BTreeMap<u8, SwitchModel>,
    log: Vec<BusOp>,
    busy_polls: usize,
    fail_write: Option<u8>,
    fail_read: Option<u8>,
}

impl MockPseudoPhy {
    pub fn new() -> Self {
        Self::default()
    }

    fn switch(&mut self, phy: u8) -> &mut SwitchModel {
        self.switches.entry(phy).or_default()
    }

    /// Preset a switch register value
    pub fn set_switch_register(&mut self, phy: u8, page: u8, offset: u8, value: u64) {
        self.switch(phy).registers.insert((page, offset), value);
    }

    /// Current value of a switch register (0 if never written)
    pub fn switch_register(&self, phy: u8, page: u8, offset: u8) -> u64 {
        self.switches
            .get(&phy)
            .and_then(|s| s.registers.get(&(page, offset)).copied())
            .unwrap_or(0)
    }

    /// Make a switch register ignore writes
    pub fn set_read_only(&mut self, phy: u8, page: u8, offset: u8) {
        self.switch(phy).read_only.insert((page, offset));
    }

    /// Current content of one data window slot
    pub fn data_slot(&self, phy: u8, slot: u8) -> u16 {
        self.switches
            .get(&phy)
            .map_or(0, |s| s.mii[(REG_MII_DATA0 + slot) as usize])
    }

    /// Number of polls each strobe reports as still busy
    pub fn set_busy_polls(&mut self, polls: usize) {
        self.busy_polls = polls;
    }

    /// Fail the next write to an MII register
    pub fn fail_next_write_to(&mut self, reg: u8) {
        self.fail_write = Some(reg);
    }

    /// Fail the next read from an MII register
    pub fn fail_next_read_from(&mut self, reg: u8) {
        self.fail_read = Some(reg);
    }

    /// All logged transfers, oldest first
    pub fn log(&self) -> &[BusOp] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Values written to one MII register, oldest first
    pub fn writes_to(&self, phy: u8, reg: u8) -> Vec<u16> {
        self.log
            .iter()
            .filter_map(|op| match *op {
                BusOp::Write { phy: p, reg: r, value } if p == phy && r == reg => Some(value),
                _ => None,
            })
            .collect()
    }

    /// Number of reads from one MII register
    pub fn reads_from(&self, phy: u8, reg: u8) -> usize {
        self.log
            .iter()
            .filter(|op| **op == BusOp::Read { phy, reg })
            .count()
    }
}

impl MdioBus for MockPseudoPhy {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        if self.fail_read == Some(reg_addr) {
            self.fail_read = None;
            return Err(IoError::Bus.into());
        }
        if reg_addr > 31 {
            return Err(IoError::Bus.into());
        }
        self.log.push(BusOp::Read {
            phy: phy_addr,
            reg: reg_addr,
        });

        let switch = self.switch(phy_addr);
        let value = switch.mii[reg_addr as usize];
        if reg_addr == REG_MII_ADDR {
            if switch.busy_left > 0 {
                switch.busy_left -= 1;
                return Ok(value);
            }
            return Ok(value & !ADDR_BUSY_MASK);
        }
        Ok(value)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        if self.fail_write == Some(reg_addr) {
            self.fail_write = None;
            return Err(IoError::Bus.into());
        }
        if reg_addr > 31 {
            return Err(IoError::Bus.into());
        }
        self.log.push(BusOp::Write {
            phy: phy_addr,
            reg: reg_addr,
            value,
        });

        let busy_polls = self.busy_polls;
        let switch = self.switch(phy_addr);
        switch.mii[reg_addr as usize] = value;
        match reg_addr {
            REG_MII_PAGE if value & PAGE_ENABLE != 0 => switch.page = (value >> 8) as u8,
            REG_MII_ADDR => switch.strobe(value, busy_polls),
            _ => {}
        }
        Ok(())
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    total_ns: u64,
    calls: usize,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total microseconds that were "delayed"
    pub fn total_us(&self) -> u64 {
        self.total_ns / 1_000
    }

    /// Number of delay requests
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.total_ns += us as u64 * 1_000;
        self.calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{REG_MII_DATA1, REG_MII_DATA3};

    #[test]
    fn write_strobe_commits_data_window() {
        let mut bus = MockPseudoPhy::new();
        bus.write(0x1E, REG_MII_PAGE, 0x0201).unwrap();
        bus.write(0x1E, REG_MII_DATA0, 0x3333).unwrap();
        bus.write(0x1E, REG_MII_DATA1, 0x2222).unwrap();
        bus.write(0x1E, REG_MII_ADDR, 0x1001).unwrap();

        assert_eq!(bus.switch_register(0x1E, 0x02, 0x10), 0x2222_3333);
    }

    #[test]
    fn page_select_without_enable_is_ignored() {
        let mut bus = MockPseudoPhy::new();
        bus.write(0x1E, REG_MII_PAGE, 0x0500).unwrap();
        bus.write(0x1E, REG_MII_DATA0, 0x0001).unwrap();
        bus.write(0x1E, REG_MII_ADDR, 0x0001).unwrap();

        assert_eq!(bus.switch_register(0x1E, 0x00, 0x00), 1);
        assert_eq!(bus.switch_register(0x1E, 0x05, 0x00), 0);
    }

    #[test]
    fn read_strobe_loads_data_window() {
        let mut bus = MockPseudoPhy::new();
        bus.set_switch_register(0x1E, 0x00, 0x08, 0x4444_0000_0000_1111);
        bus.write(0x1E, REG_MII_ADDR, 0x0802).unwrap();

        assert_eq!(bus.read(0x1E, REG_MII_DATA0).unwrap(), 0x1111);
        assert_eq!(bus.read(0x1E, REG_MII_DATA3).unwrap(), 0x4444);
    }

    #[test]
    fn busy_polls_count_down_per_strobe() {
        let mut bus = MockPseudoPhy::new();
        bus.set_busy_polls(2);
        bus.write(0x1E, REG_MII_ADDR, 0x0002).unwrap();

        assert_eq!(bus.read(0x1E, REG_MII_ADDR).unwrap(), 0x0002);
        assert_eq!(bus.read(0x1E, REG_MII_ADDR).unwrap(), 0x0002);
        assert_eq!(bus.read(0x1E, REG_MII_ADDR).unwrap(), 0x0000);
    }

    #[test]
    fn injected_fault_is_one_shot_and_unlogged() {
        let mut bus = MockPseudoPhy::new();
        bus.fail_next_write_to(REG_MII_DATA0);

        assert!(bus.write(0x1E, REG_MII_DATA0, 1).is_err());
        assert!(bus.log().is_empty());
        assert!(bus.write(0x1E, REG_MII_DATA0, 1).is_ok());
        assert_eq!(bus.writes_to(0x1E, REG_MII_DATA0), [1]);
    }

    #[test]
    fn switches_are_independent_per_address() {
        let mut bus = MockPseudoPhy::new();
        bus.write(0x1E, REG_MII_PAGE, 0x0101).unwrap();
        bus.write(0x00, REG_MII_PAGE, 0x0201).unwrap();
        bus.write(0x1E, REG_MII_DATA0, 0xAAAA).unwrap();
        bus.write(0x1E, REG_MII_ADDR, 0x0001).unwrap();

        assert_eq!(bus.switch_register(0x1E, 0x01, 0x00), 0xAAAA);
        assert_eq!(bus.switch_register(0x00, 0x02, 0x00), 0);
    }

    #[test]
    fn mock_delay_accumulates() {
        use embedded_hal::delay::DelayNs;

        let mut delay = MockDelay::new();
        delay.delay_us(10);
        delay.delay_us(15);
        assert_eq!(delay.total_us(), 25);
        assert_eq!(delay.calls(), 2);
    }
}
