//! An arbitrarily-lengthed latching shift register that updates all output
//! drains at once. Daisy-chained TPIC6595s drive the 25 LEDs of the binary
//! clock matrix, one output per LED.

use embedded_hal::{blocking::delay::DelayUs, digital::v2::OutputPin};

use crate::{
    binary_clock::{LedMatrix, COLUMNS, ROWS},
    shared::PinState::{PinState, LOW},
    trace,
};

// Defined on page 4 of https://www.ti.com/lit/ds/symlink/tpic6595.pdf
// Every setup, hold and pulse width there is 20ns or less, a microsecond
// covers all of them
const SERIAL_SETUP_US: u32 = 1_u32; // Tsu
const SERIAL_HOLD_US: u32 = SERIAL_SETUP_US; // Th
const CLOCK_WIDTH_US: u32 = 1_u32; // Tw
const LATCH_WIDTH_US: u32 = CLOCK_WIDTH_US;

/// Enough outputs for the whole matrix
pub const MATRIX_OUTPUTS: usize = 4 * 8_usize;

pub struct ShiftRegisterPins<SerialInput, Clock, Latch>
where
    SerialInput: OutputPin,
    Clock: OutputPin,
    Latch: OutputPin,
{
    pub serial_input: SerialInput,
    pub clock: Clock,
    pub latch: Latch,
}

/// TPIC6595 shift register chain with N outputs
pub struct ShiftRegister<const N: usize, SerialInput, Clock, Latch, Delay>
where
    SerialInput: OutputPin,
    Clock: OutputPin,
    Latch: OutputPin,
    Delay: DelayUs<u32>,
{
    serial_input_pin: SerialInput,
    clock_pin: Clock,
    latch_pin: Latch,
    delay: Delay,
    bit_array: [PinState; N],
}

impl<const N: usize, SerialInput, Clock, Latch, Delay>
    ShiftRegister<N, SerialInput, Clock, Latch, Delay>
where
    SerialInput: OutputPin,
    Clock: OutputPin,
    Latch: OutputPin,
    Delay: DelayUs<u32>,
{
    pub fn new(serial_input_pin: SerialInput, clock_pin: Clock, latch_pin: Latch, delay: Delay) -> Self {
        Self {
            serial_input_pin,
            clock_pin,
            latch_pin,
            delay,
            bit_array: [LOW; N],
        }
    }

    pub fn from_pins(
        shift_register_pins: ShiftRegisterPins<SerialInput, Clock, Latch>,
        delay: Delay,
    ) -> Self {
        Self::new(
            shift_register_pins.serial_input,
            shift_register_pins.clock,
            shift_register_pins.latch,
            delay,
        )
    }

    /// What the outputs show after the next latch
    pub fn bit_array(&self) -> &[PinState; N] {
        &self.bit_array
    }

    /// Change one output without shifting anything out yet
    pub fn set(&mut self, idx: usize, state: PinState) {
        if let Some(bit) = self.bit_array.get_mut(idx) {
            *bit = state;
        }
    }

    /// Shift one bit in
    fn shift_out(&mut self, state: PinState) {
        // Rising edge of serial in pin (setup)
        if state {
            let _ = self.serial_input_pin.set_high();
        } else {
            let _ = self.serial_input_pin.set_low();
        }
        self.delay.delay_us(SERIAL_SETUP_US);

        // Rising edge of clock pulse
        let _ = self.clock_pin.set_high();

        // Falling edge of serial in pin (tie to GND again)
        self.delay.delay_us(SERIAL_HOLD_US);
        let _ = self.serial_input_pin.set_low();

        // Falling edge of clock pulse
        self.delay.delay_us(CLOCK_WIDTH_US);
        let _ = self.clock_pin.set_low();
    }

    /// Move the shifted bits to the output drains
    fn latch(&mut self) {
        let _ = self.latch_pin.set_high();
        self.delay.delay_us(LATCH_WIDTH_US);
        let _ = self.latch_pin.set_low();
    }

    /// Shift the whole bit array out and latch, so that the first output on
    /// the first shift register is equal to the first bit in the array
    pub fn flush(&mut self) {
        trace!("[TRACE] [SHIFT] Shifting out {} bits", N as u32);

        let bit_array = self.bit_array;
        for state in bit_array.iter().rev() {
            self.shift_out(*state);
        }
        self.latch();
    }
}

impl<const N: usize, SerialInput, Clock, Latch, Delay> LedMatrix
    for ShiftRegister<N, SerialInput, Clock, Latch, Delay>
where
    SerialInput: OutputPin,
    Clock: OutputPin,
    Latch: OutputPin,
    Delay: DelayUs<u32>,
{
    /// Output `row * 5 + col` drives the LED
    fn set_pixel(&mut self, col: u8, row: u8, on: bool) {
        if col < COLUMNS && row < ROWS {
            self.set((row * COLUMNS + col) as usize, on);
        }
    }

    fn refresh(&mut self) {
        self.flush();
    }
}
