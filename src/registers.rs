//! NXP PCF85063TP register map

use core::ops::RangeInclusive;

pub const ADDRESS: u8 = 0x51_u8;
/// Time registers start right after the four control registers
pub const TIME_REGISTER_OFFSET: u8 = 0x04_u8;
pub const TIME_REGISTER_COUNT: usize = 7_usize;
/// Bit 7 of the seconds register
pub const OSCILLATOR_STOP: u8 = 0b10000000_u8;

/// Control register 2 on startup: minute interrupt, CLKOUT at 1 Hz
pub const CONTROL_2_DEFAULT: u8 = 0x26_u8;

/// The seven time registers, in chip order
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Seconds = 0_u8,
    Minutes = 1_u8,
    Hours = 2_u8,
    Day = 3_u8,
    /// 0 is Sunday
    Weekday = 4_u8,
    Month = 5_u8,
    /// Two digits only, the century is not stored
    Year = 6_u8,
}

impl Field {
    pub const ALL: [Field; TIME_REGISTER_COUNT] = [
        Field::Seconds,
        Field::Minutes,
        Field::Hours,
        Field::Day,
        Field::Weekday,
        Field::Month,
        Field::Year,
    ];

    /// Position within the register buffer
    pub fn index(self) -> usize {
        self as usize
    }

    /// Address of the register on the chip
    pub fn register(self) -> u8 {
        self as u8 + TIME_REGISTER_OFFSET
    }

    /// Legal decimal values
    pub fn range(self) -> RangeInclusive<u8> {
        match self {
            Field::Seconds | Field::Minutes => 0..=59,
            Field::Hours => 0..=23,
            Field::Day => 1..=31,
            Field::Weekday => 0..=6,
            Field::Month => 1..=12,
            Field::Year => 0..=99,
        }
    }
}

/// Control, offset and RAM registers in front of the time registers
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Control1 = 0x00_u8,
    Control2 = 0x01_u8,
    Offset = 0x02_u8,
    RamByte = 0x03_u8,
}

impl Control {
    pub fn register(self) -> u8 {
        self as u8
    }
}
