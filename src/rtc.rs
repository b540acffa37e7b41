//! NXP PCF85063TP RTC

use embedded_hal::blocking::i2c::{Read, Write, WriteRead};
use heapless::Vec;

use crate::{
    bcd::{self, Format},
    buffer::RegisterBuffer,
    bus::{Bus, Error},
    debug,
    registers::{Control, Field, ADDRESS, CONTROL_2_DEFAULT, TIME_REGISTER_COUNT},
    trace,
};

pub struct Rtc<I2C, E> {
    bus: Bus<I2C, E>,
    address: u8,
    registers: RegisterBuffer,
}

impl<I2C, E> Rtc<I2C, E> {
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            bus: Bus::new(i2c),
            address,
            registers: RegisterBuffer::new(),
        }
    }

    pub fn destroy(self) -> I2C {
        self.bus.destroy()
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Error latched from the last write (or the first one, with error
    /// checking enabled)
    pub fn bus_error(&self) -> Option<&E> {
        self.bus.error()
    }

    pub fn reset_bus_error(&mut self) {
        self.bus.reset();
    }

    /// With error checking enabled the first bus fault stops all further
    /// traffic to the chip until [`Rtc::reset_bus_error`] is called
    pub fn set_error_check(&mut self, check: bool) {
        self.bus.set_check(check);
    }

    /// Raw register byte for a field from the last read. The seconds come
    /// without the oscillator-stop flag.
    pub fn byte(&self, field: Field) -> u8 {
        self.registers.byte(field)
    }

    pub fn field(&self, field: Field, format: Format) -> u8 {
        format.apply(self.byte(field))
    }

    pub fn oscillator_stop(&self) -> bool {
        self.registers.oscillator_stop()
    }

    /// Whether the last read changed this field
    pub fn is_changed(&self, field: Field) -> bool {
        self.registers.is_changed(field)
    }

    /// All seven time registers as read, BCD and oscillator-stop flag included
    pub fn date_time_array(&self) -> [u8; TIME_REGISTER_COUNT] {
        self.registers.bytes()
    }
}

impl<I2C, E> Rtc<I2C, E>
where
    I2C: Write<Error = E> + Read<Error = E> + WriteRead<Error = E>,
    E: Clone,
{
    /// Read all time registers into the local buffer. If anything goes wrong
    /// the previous contents are kept.
    pub fn read_date_time(&mut self) -> Result<(), Error<E>> {
        let mut time_buffer = [0_u8; TIME_REGISTER_COUNT];

        trace!("[TRACE] [RTC] Reading time");

        self.bus.write_read(
            self.address,
            &[Field::Seconds.register()],
            &mut time_buffer,
        )?;
        self.registers.update(time_buffer);

        Ok(())
    }

    /// Write decimal values to consecutive time registers, starting at
    /// `start`. Nothing is range checked and the local buffer is left as is;
    /// read again to see the result. Values past the year are dropped.
    pub fn write_date_time(&mut self, start: Field, values: &[u8]) -> Result<(), Error<E>> {
        debug!("[DEBUG] [RTC] Setting time from register {}", start.register());

        let mut bytes: Vec<u8, { TIME_REGISTER_COUNT + 1 }> = Vec::new();
        let _ = bytes.push(start.register());
        for value in values.iter().take(TIME_REGISTER_COUNT - start.index()) {
            let _ = bytes.push(bcd::to_bcd(*value));
        }

        self.bus.write(self.address, &bytes)
    }

    /// Move a field by `delta` based on the last read. Results outside the
    /// field's range are dropped without touching the bus.
    ///
    /// The seconds keep their oscillator-stop flag here. While it's set they
    /// decode to 80 or more, so a step of up to 20 either way lands out of
    /// range and the flag stays. Write the time with
    /// [`Rtc::write_date_time`] instead.
    pub fn adjust(&mut self, field: Field, delta: i8) -> Result<(), Error<E>> {
        let current = bcd::to_decimal(self.registers.bytes()[field.index()]);
        let value = i16::from(current) + i16::from(delta);
        let value = match u8::try_from(value) {
            Ok(value) if field.range().contains(&value) => value,
            _ => {
                trace!("[TRACE] [RTC] Adjusted value out of range, ignored");
                return Ok(());
            }
        };

        self.bus
            .write(self.address, &[field.register(), bcd::to_bcd(value)])
    }

    /// Control register 1 cleared, control register 2 set to a minute
    /// interrupt with a 1 Hz clock output
    pub fn init_registers(&mut self) -> Result<(), Error<E>> {
        debug!("[DEBUG] [RTC] Initializing control registers");

        self.bus.write(
            self.address,
            &[Control::Control1.register(), 0x00_u8, CONTROL_2_DEFAULT],
        )
    }

    pub fn read_control(&mut self, control: Control) -> Result<u8, Error<E>> {
        let mut buffer = [0_u8; 1];
        self.bus
            .write_read(self.address, &[control.register()], &mut buffer)?;
        Ok(buffer[0])
    }

    pub fn write_control(&mut self, control: Control, byte: u8) -> Result<(), Error<E>> {
        self.bus.write(self.address, &[control.register(), byte])
    }
}
