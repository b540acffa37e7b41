//! Serial console for logging
//!
//! With the `board` feature everything goes out of the USART installed with
//! [`set_console`]. Without it the macros still check their arguments but the
//! output is thrown away, which keeps the driver testable on the host.
//!
//! `debug!` is only compiled in with the `debug` feature and `trace!` with the
//! `trace` feature.

#[cfg(feature = "board")]
mod backend {
    use crate::shared::UsbSerial;
    use avr_device::interrupt::{self, Mutex};
    use core::cell::RefCell;

    pub type Console = UsbSerial;

    static CONSOLE: Mutex<RefCell<Option<Console>>> = Mutex::new(RefCell::new(None));

    pub fn set_console(console: Console) {
        interrupt::free(|critical_section| {
            CONSOLE.borrow(critical_section).replace(Some(console));
        });
    }

    pub fn with_console<F: FnOnce(&mut Console)>(f: F) {
        interrupt::free(|critical_section| {
            if let Some(console) = CONSOLE.borrow(critical_section).borrow_mut().as_mut() {
                f(console);
            }
        });
    }
}

#[cfg(not(feature = "board"))]
mod backend {
    use core::convert::Infallible;

    /// Swallows everything
    pub struct Console;

    impl ufmt::uWrite for Console {
        type Error = Infallible;

        fn write_str(&mut self, _s: &str) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    pub fn with_console<F: FnOnce(&mut Console)>(f: F) {
        f(&mut Console);
    }
}

#[cfg(feature = "board")]
pub use backend::set_console;
pub use backend::{with_console, Console};

#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => {
        $crate::console::with_console(|console| {
            let _ = ufmt::uwriteln!(console, $($arg)*);
        })
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug")]
        {
            $crate::println!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        {
            $crate::println!($($arg)*);
        }
    };
}
