#![no_std]
#![no_main]

use arduino_hal::{default_serial, delay_ms, Delay, I2c};
use pcf85063tp_clock::{
    binary_clock::{View, ViewSelector},
    console::set_console,
    debug, println,
    shared::{BAUD_RATE, UPDATE_DELTATIME},
    shift_register::{ShiftRegister, ShiftRegisterPins, MATRIX_OUTPUTS},
    Rtc,
};

mod panic;
mod pins;

/// Clock rate of the RTC's I2C bus
const IIC_SPEED: u32 = 50_000_u32;

#[arduino_hal::entry]
fn main() -> ! {
    // Only ever None on a second call
    let peripherals = match arduino_hal::Peripherals::take() {
        Some(peripherals) => peripherals,
        None => loop {},
    };
    let pins = arduino_hal::pins!(peripherals);
    let serial = default_serial!(peripherals, pins, BAUD_RATE);
    set_console(serial);

    println!("Hello from the binary clock!");

    // Set up pin handles
    let matrix_shift_register_pins = ShiftRegisterPins {
        serial_input: pins.d2.into_output() as pins::matrix::SerialIn,
        clock: pins.d3.into_output() as pins::matrix::Clock,
        latch: pins.d4.into_output() as pins::matrix::Latch,
    };
    let view_button = pins.d11.into_pull_up_input() as pins::view_button::Button;
    let iic_pins = pins::IICPins {
        sda: pins.a4.into_pull_up_input(),
        scl: pins.a5.into_pull_up_input(),
    };

    // Time initialization
    debug!("[DEBUG] I2C & RTC initialization");
    let i2c = I2c::new(peripherals.TWI, iic_pins.sda, iic_pins.scl, IIC_SPEED);
    let mut rtc = Rtc::new(i2c);
    // The RTC shares its bus, don't keep hammering it once it's gone quiet
    rtc.set_error_check(true);
    if rtc.init_registers().is_err() {
        println!("RTC not responding at address {}", rtc.address());
    }

    // Display initialization
    debug!("[DEBUG] LED matrix initialization");
    let mut matrix =
        ShiftRegister::<MATRIX_OUTPUTS, _, _, _, _>::from_pins(matrix_shift_register_pins, Delay::new());

    let mut selector = ViewSelector::new(View::Time);
    let mut warned_oscillator_stop = false;

    // Main loop
    loop {
        delay_ms(UPDATE_DELTATIME);
        debug!("[DEBUG] Loop iteration");

        // Pressed is tied to GND
        selector.button(view_button.is_low());

        // Update time
        if rtc.read_date_time().is_err() {
            println!("RTC error when reading time, retrying");
            rtc.reset_bus_error();
            continue;
        }

        if rtc.oscillator_stop() {
            if !warned_oscillator_stop {
                println!("RTC oscillator stopped, check the battery and set the time");
                warned_oscillator_stop = true;
            }
        } else {
            warned_oscillator_stop = false;
        }

        if selector.update(&mut matrix, &rtc) {
            debug!(
                "[DEBUG] [RTC] {} {}",
                rtc.date_text(true, true).as_str(),
                rtc.time_text(true).as_str()
            );
        }
    }
}
