//! Driver for the NXP PCF85063TP real-time clock over I2C, plus a binary
//! clock on a 5x5 LED matrix.
//!
//! The time registers are read into a local buffer with
//! [`Rtc::read_date_time`]; everything else (decimal values, text, the binary
//! clock) works off that buffer without touching the bus.

#![cfg_attr(not(test), no_std)]

pub mod console;

pub mod bcd;
pub mod binary_clock;
pub mod buffer;
pub mod bus;
pub mod registers;
pub mod rtc;
pub mod shared;
pub mod shift_register;
mod text;

pub use bcd::Format;
pub use binary_clock::{LedMatrix, View, ViewSelector};
pub use bus::Error;
pub use registers::{Control, Field, ADDRESS};
pub use rtc::Rtc;
pub use text::{CENTURY, WEEKDAYS};
