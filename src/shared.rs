#[cfg(feature = "board")]
use arduino_hal::{
    hal::port::{PD0, PD1},
    pac::USART0,
    port::{
        mode::{Input, Output},
        Pin,
    },
    Usart,
};

pub const BAUD_RATE: u32 = 57_600;
/// Milliseconds between two reads of the RTC
pub const UPDATE_DELTATIME: u16 = 200_u16;

#[cfg(feature = "board")]
pub type UsbSerial = Usart<USART0, Pin<Input, PD0>, Pin<Output, PD1>>;

#[allow(non_snake_case)]
pub mod PinState {
    pub type PinState = bool;
    pub const LOW: bool = false;
}
