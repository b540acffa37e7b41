//! In-memory mirror of the seven time registers

use crate::registers::{Field, OSCILLATOR_STOP, TIME_REGISTER_COUNT};

/// The last successfully read time registers and which of them changed with
/// that read. Before the first read the bytes are all zero and every field
/// counts as changed.
#[derive(Clone, Debug)]
pub struct RegisterBuffer {
    snapshot: Option<[u8; TIME_REGISTER_COUNT]>,
    changed: [bool; TIME_REGISTER_COUNT],
}

impl Default for RegisterBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBuffer {
    pub const fn new() -> Self {
        Self {
            snapshot: None,
            changed: [true; TIME_REGISTER_COUNT],
        }
    }

    /// Replace the whole buffer with a freshly read one
    pub fn update(&mut self, bytes: [u8; TIME_REGISTER_COUNT]) {
        self.changed = match self.snapshot {
            Some(old) => {
                let mut changed = [false; TIME_REGISTER_COUNT];
                for (idx, state) in changed.iter_mut().enumerate() {
                    *state = old[idx] != bytes[idx];
                }
                changed
            }
            None => [true; TIME_REGISTER_COUNT],
        };
        self.snapshot = Some(bytes);
    }

    /// Raw register bytes, oscillator-stop flag included
    pub fn bytes(&self) -> [u8; TIME_REGISTER_COUNT] {
        self.snapshot.unwrap_or([0_u8; TIME_REGISTER_COUNT])
    }

    /// The register byte for a field, without the oscillator-stop flag
    pub fn byte(&self, field: Field) -> u8 {
        let byte = self.bytes()[field.index()];
        match field {
            Field::Seconds => byte & !OSCILLATOR_STOP,
            _ => byte,
        }
    }

    /// Set when the chip's oscillator stopped, e.g. because the battery was
    /// swapped. The time isn't trustworthy until it's written again.
    pub fn oscillator_stop(&self) -> bool {
        self.bytes()[Field::Seconds.index()] & OSCILLATOR_STOP != 0
    }

    pub fn is_changed(&self, field: Field) -> bool {
        self.changed[field.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_read_is_zero_and_changed() {
        let buffer = RegisterBuffer::new();
        assert_eq!(buffer.bytes(), [0_u8; 7]);
        for field in Field::ALL {
            assert!(buffer.is_changed(field));
        }
    }

    #[test]
    fn first_read_marks_everything_changed() {
        // Even an all-zero payload that matches the default bytes
        let mut buffer = RegisterBuffer::new();
        buffer.update([0_u8; 7]);
        for field in Field::ALL {
            assert!(buffer.is_changed(field));
        }
    }

    #[test]
    fn identical_reads_mark_nothing_changed() {
        let mut buffer = RegisterBuffer::new();
        let payload = [0x30, 0x15, 0x12, 0x15, 0x05, 0x09, 0x23];
        buffer.update(payload);
        buffer.update(payload);
        for field in Field::ALL {
            assert!(!buffer.is_changed(field));
        }
    }

    #[test]
    fn only_differing_bytes_change() {
        let mut buffer = RegisterBuffer::new();
        buffer.update([0x30, 0x15, 0x12, 0x15, 0x05, 0x09, 0x23]);
        buffer.update([0x31, 0x15, 0x12, 0x15, 0x05, 0x09, 0x24]);
        assert!(buffer.is_changed(Field::Seconds));
        assert!(!buffer.is_changed(Field::Minutes));
        assert!(!buffer.is_changed(Field::Month));
        assert!(buffer.is_changed(Field::Year));
    }

    #[test]
    fn seconds_hide_oscillator_stop() {
        let mut buffer = RegisterBuffer::new();
        buffer.update([0x80 | 0x42, 0, 0, 0, 0, 0, 0]);
        assert!(buffer.oscillator_stop());
        assert_eq!(buffer.byte(Field::Seconds), 0x42);
        assert_eq!(buffer.bytes()[0], 0xC2);

        buffer.update([0x42, 0, 0, 0, 0, 0, 0]);
        assert!(!buffer.oscillator_stop());
        assert_eq!(buffer.byte(Field::Seconds), 0x42);
    }
}
