//! I2C access with a latched error code
//!
//! Every write remembers its outcome. With error checking enabled only the
//! first fault is kept, and from then on nothing is sent to the bus until the
//! latch is reset, so a dead device can't keep hogging a bus it shares with
//! other peripherals. Plain reads never touch the latch.

use embedded_hal::blocking::i2c::{Read, Write, WriteRead};

use crate::{debug, println, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The transfer failed on the bus
    I2c(E),
    /// Error checking is enabled and an earlier fault is still latched, so
    /// the transfer was never started
    Suppressed,
}

pub struct Bus<I2C, E> {
    i2c: I2C,
    latch: Option<E>,
    check: bool,
}

impl<I2C, E> Bus<I2C, E> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            latch: None,
            check: false,
        }
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// The latched error, `None` if the last latching transfer went through
    pub fn error(&self) -> Option<&E> {
        self.latch.as_ref()
    }

    /// Clear the latch, leaving error checking as it is
    pub fn reset(&mut self) {
        trace!("[TRACE] [I2C] Latch reset");
        self.latch = None;
    }

    /// Enable or disable suppression after the first fault. The latch itself
    /// is left alone.
    pub fn set_check(&mut self, check: bool) {
        self.check = check;
    }

    /// Whether transfers are currently being held back
    pub fn is_suppressed(&self) -> bool {
        self.check && self.latch.is_some()
    }
}

impl<I2C, E> Bus<I2C, E>
where
    I2C: Write<Error = E> + Read<Error = E> + WriteRead<Error = E>,
    E: Clone,
{
    pub fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Error<E>> {
        if self.is_suppressed() {
            trace!("[TRACE] [I2C] Write to {} suppressed", address);
            return Err(Error::Suppressed);
        }

        let result = self.i2c.write(address, bytes);
        self.latch(address, result)
    }

    /// Write, then read back with a repeated start. Latches like a write;
    /// when suppressed the buffer comes back zeroed.
    pub fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), Error<E>> {
        if self.is_suppressed() {
            trace!("[TRACE] [I2C] Write-read from {} suppressed", address);
            buffer.fill(0_u8);
            return Err(Error::Suppressed);
        }

        let result = self.i2c.write_read(address, bytes, buffer);
        self.latch(address, result)
    }

    /// Read without touching the latch. When suppressed no transfer happens
    /// and the buffer is zeroed instead, so callers can carry on regardless.
    pub fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), E> {
        if self.is_suppressed() {
            trace!("[TRACE] [I2C] Read from {} suppressed", address);
            buffer.fill(0_u8);
            return Ok(());
        }

        self.i2c.read(address, buffer)
    }

    fn latch(&mut self, address: u8, result: Result<(), E>) -> Result<(), Error<E>> {
        match result {
            Ok(()) => {
                if !self.check {
                    self.latch = None;
                }
                Ok(())
            }
            Err(error) => {
                if self.check {
                    // Only reachable while the latch is clear
                    println!("I2C error at address {}, bus suppressed", address);
                } else {
                    debug!("[DEBUG] [I2C] Error at address {}", address);
                }
                self.latch = Some(error.clone());
                Err(Error::I2c(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::{
        i2c::{Mock as I2cMock, Transaction as I2cTransaction},
        MockError,
    };
    use std::{io::ErrorKind, vec};

    const DEVICE: u8 = 0x51;

    fn fault() -> MockError {
        MockError::Io(ErrorKind::Other)
    }

    #[test]
    fn unchecked_latch_follows_every_write() {
        let expectations = [
            I2cTransaction::write(DEVICE, vec![0x00]).with_error(fault()),
            I2cTransaction::write(DEVICE, vec![0x01]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = Bus::new(i2c.clone());

        assert_eq!(bus.write(DEVICE, &[0x00]), Err(Error::I2c(fault())));
        assert_eq!(bus.error(), Some(&fault()));

        // Still attempted, and success clears the latch again
        assert_eq!(bus.write(DEVICE, &[0x01]), Ok(()));
        assert_eq!(bus.error(), None);

        i2c.done();
    }

    #[test]
    fn checked_latch_suppresses_until_reset() {
        let expectations = [
            I2cTransaction::write(DEVICE, vec![0x00]).with_error(fault()),
            I2cTransaction::write(DEVICE, vec![0x02]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = Bus::new(i2c.clone());
        bus.set_check(true);

        assert_eq!(bus.write(DEVICE, &[0x00]), Err(Error::I2c(fault())));
        assert_eq!(bus.error(), Some(&fault()));
        assert!(bus.is_suppressed());

        // Nothing reaches the bus now
        assert_eq!(bus.write(DEVICE, &[0x01]), Err(Error::Suppressed));
        let mut buffer = [0xAA_u8; 7];
        assert_eq!(bus.read(DEVICE, &mut buffer), Ok(()));
        assert_eq!(buffer, [0_u8; 7]);
        let mut buffer = [0xAA_u8; 7];
        assert_eq!(
            bus.write_read(DEVICE, &[0x04], &mut buffer),
            Err(Error::Suppressed)
        );
        assert_eq!(buffer, [0_u8; 7]);
        assert_eq!(bus.error(), Some(&fault()));

        bus.reset();
        assert_eq!(bus.error(), None);
        assert_eq!(bus.write(DEVICE, &[0x02]), Ok(()));

        i2c.done();
    }

    #[test]
    fn reads_never_latch() {
        let expectations = [I2cTransaction::read(DEVICE, vec![0x00]).with_error(fault())];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = Bus::new(i2c.clone());
        bus.set_check(true);

        let mut buffer = [0_u8; 1];
        assert_eq!(bus.read(DEVICE, &mut buffer), Err(fault()));
        assert_eq!(bus.error(), None);
        assert!(!bus.is_suppressed());

        i2c.done();
    }

    #[test]
    fn write_read_latches() {
        let expectations = [
            I2cTransaction::write_read(DEVICE, vec![0x04], vec![0x00]).with_error(fault()),
            I2cTransaction::write_read(DEVICE, vec![0x04], vec![0x12]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = Bus::new(i2c.clone());

        let mut buffer = [0_u8; 1];
        assert_eq!(
            bus.write_read(DEVICE, &[0x04], &mut buffer),
            Err(Error::I2c(fault()))
        );
        assert_eq!(bus.error(), Some(&fault()));

        assert_eq!(bus.write_read(DEVICE, &[0x04], &mut buffer), Ok(()));
        assert_eq!(buffer, [0x12]);
        assert_eq!(bus.error(), None);

        i2c.done();
    }

    #[test]
    fn toggling_check_keeps_latch() {
        let expectations = [I2cTransaction::write(DEVICE, vec![0x00]).with_error(fault())];
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = Bus::new(i2c.clone());

        let _ = bus.write(DEVICE, &[0x00]);
        bus.set_check(true);
        assert_eq!(bus.error(), Some(&fault()));
        assert!(bus.is_suppressed());
        bus.set_check(false);
        assert_eq!(bus.error(), Some(&fault()));
        assert!(!bus.is_suppressed());

        i2c.done();
    }
}
