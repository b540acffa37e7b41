//! Date and time as text, built from the last read

use heapless::String;

use crate::{
    bcd::Format,
    registers::Field,
    rtc::Rtc,
};

/// Sunday first, matching the weekday register
pub const WEEKDAYS: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];
/// The chip only stores two year digits
pub const CENTURY: &str = "20";

/// `yyMMddHHmmss`
const TIMESTAMP_FIELDS: [Field; 6] = [
    Field::Year,
    Field::Month,
    Field::Day,
    Field::Hours,
    Field::Minutes,
    Field::Seconds,
];

/// A BCD nibble as an ASCII digit. Nibbles above 9 aren't BCD and come out
/// as lowercase hex, e.g. a year register of 0xAB renders as "ab".
fn digit(x: u8) -> char {
    char::from_digit(x as u32, 16).unwrap_or('?')
}

impl<I2C, E> Rtc<I2C, E> {
    /// Two digits, or the weekday abbreviation for [`Field::Weekday`]
    pub fn field_text(&self, field: Field) -> String<2> {
        let mut text = String::new();
        match field {
            Field::Weekday => {
                let name = WEEKDAYS
                    .get(self.field(field, Format::Ones) as usize)
                    .copied()
                    .unwrap_or("--");
                let _ = text.push_str(name);
            }
            _ => {
                let _ = text.push(digit(self.field(field, Format::Tens)));
                let _ = text.push(digit(self.field(field, Format::Ones)));
            }
        }
        text
    }

    /// `HH:MM` or `HH:MM:SS`
    pub fn time_text(&self, with_seconds: bool) -> String<8> {
        let mut text = String::new();
        let _ = text.push_str(&self.field_text(Field::Hours));
        let _ = text.push(':');
        let _ = text.push_str(&self.field_text(Field::Minutes));
        if with_seconds {
            let _ = text.push(':');
            let _ = text.push_str(&self.field_text(Field::Seconds));
        }
        text
    }

    /// `DD.MM.YY`, optionally with the weekday in front and the century
    pub fn date_text(&self, with_weekday: bool, with_century: bool) -> String<13> {
        let mut text = String::new();
        if with_weekday {
            let _ = text.push_str(&self.field_text(Field::Weekday));
            let _ = text.push(' ');
        }
        let _ = text.push_str(&self.field_text(Field::Day));
        let _ = text.push('.');
        let _ = text.push_str(&self.field_text(Field::Month));
        let _ = text.push('.');
        if with_century {
            let _ = text.push_str(CENTURY);
        }
        let _ = text.push_str(&self.field_text(Field::Year));
        text
    }

    /// Part of `yyMMddHHmmss`, clamped to what's there
    pub fn timestamp_text(&self, start: usize, length: usize) -> String<12> {
        let mut full: String<12> = String::new();
        for field in TIMESTAMP_FIELDS {
            let _ = full.push_str(&self.field_text(field));
        }

        let start = start.min(full.len());
        let end = start.saturating_add(length).min(full.len());
        let mut text = String::new();
        let _ = text.push_str(&full[start..end]);
        text
    }
}
