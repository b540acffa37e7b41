//! Pin types to improve type safety

use arduino_hal::{
    hal::port,
    port::{
        mode::{Input, Output, PullUp},
        Pin,
    },
};

pub mod matrix {
    use super::*;
    pub type SerialIn = Pin<Output, port::PD2>;
    pub type Clock = Pin<Output, port::PD3>;
    pub type Latch = Pin<Output, port::PD4>;
}

pub mod view_button {
    use super::*;
    pub type Button = Pin<Input<PullUp>, port::PB3>;
}

pub mod iic {
    use super::*;
    pub type Sda = Pin<Input<PullUp>, port::PC4>;
    pub type Scl = Pin<Input<PullUp>, port::PC5>;
}

pub struct IICPins {
    pub sda: iic::Sda,
    pub scl: iic::Scl,
}
