//! Print where we panicked, then halt

use core::panic::PanicInfo;

use pcf85063tp_clock::println;

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    avr_device::interrupt::disable();

    match info.location() {
        Some(location) => println!(
            "Panicked at {}:{}",
            location.file(),
            location.line()
        ),
        None => println!("Panicked"),
    }

    loop {
        avr_device::asm::sleep();
    }
}
