//! 5x5 LED matrix as a binary clock
//!
//! Every column is one number in binary with the least significant bit at the
//! bottom. Only five bits fit in a column, anything above is cut off.

use crate::{bcd::Format, registers::Field, rtc::Rtc, trace};

pub const COLUMNS: u8 = 5_u8;
pub const ROWS: u8 = 5_u8;

/// Something with a 5x5 grid of LEDs. Column 0 is on the left and row 0 at
/// the top.
pub trait LedMatrix {
    fn set_pixel(&mut self, col: u8, row: u8, on: bool);

    /// Push the pixels set so far out to the LEDs, for matrices that buffer
    fn refresh(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Day, blank, month, year / 32, year
    Date,
    /// Hours, minute tens, minute ones, second tens, second ones
    Time,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Date => View::Time,
            View::Time => View::Date,
        }
    }

    /// The field whose change means the view needs to be redrawn
    pub fn trigger(self) -> Field {
        match self {
            View::Date => Field::Day,
            View::Time => Field::Seconds,
        }
    }
}

/// Light column `x` with the binary representation of `value`. Columns
/// outside the matrix are ignored.
pub fn plot_column<M: LedMatrix>(matrix: &mut M, x: u8, value: u8) {
    if x >= COLUMNS {
        return;
    }
    for bit in 0..ROWS {
        matrix.set_pixel(x, ROWS - 1 - bit, (value >> bit) & 1 != 0);
    }
}

/// The five column values for a view, from the last read
pub fn columns<I2C, E>(rtc: &Rtc<I2C, E>, view: View) -> [u8; COLUMNS as usize] {
    match view {
        View::Date => {
            let year = rtc.field(Field::Year, Format::Decimal);
            [
                rtc.field(Field::Day, Format::Decimal),
                0_u8,
                rtc.field(Field::Month, Format::Decimal),
                year >> 5,
                year,
            ]
        }
        View::Time => [
            rtc.field(Field::Hours, Format::Decimal),
            rtc.field(Field::Minutes, Format::Tens),
            rtc.field(Field::Minutes, Format::Ones),
            rtc.field(Field::Seconds, Format::Tens),
            rtc.field(Field::Seconds, Format::Ones),
        ],
    }
}

pub fn show<M: LedMatrix, I2C, E>(matrix: &mut M, rtc: &Rtc<I2C, E>, view: View) {
    trace!("[TRACE] [LED] Drawing binary clock");

    for (x, value) in columns(rtc, view).iter().enumerate() {
        plot_column(matrix, x as u8, *value);
    }
    matrix.refresh();
}

/// Tracks the view button and whether the matrix is out of date. A view
/// change stays pending until it has actually been drawn, so a failed read
/// in between doesn't leave the old view up.
pub struct ViewSelector {
    view: View,
    button_was_pressed: bool,
    redraw_pending: bool,
}

impl ViewSelector {
    pub fn new(view: View) -> Self {
        Self {
            view,
            button_was_pressed: false,
            redraw_pending: true,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Feed the current button level; a press flips the view
    pub fn button(&mut self, pressed: bool) {
        if pressed && !self.button_was_pressed {
            self.view = self.view.toggled();
            self.redraw_pending = true;
        }
        self.button_was_pressed = pressed;
    }

    /// Call after a successful read. Draws when the view changed or its
    /// trigger field did, and returns whether it drew.
    pub fn update<M: LedMatrix, I2C, E>(&mut self, matrix: &mut M, rtc: &Rtc<I2C, E>) -> bool {
        if !self.redraw_pending && !rtc.is_changed(self.view.trigger()) {
            return false;
        }
        show(matrix, rtc, self.view);
        self.redraw_pending = false;
        true
    }
}
