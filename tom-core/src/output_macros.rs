//! Output macros for the tom CLI.
//!
//! Command results go to stdout through `tom_println!` so they can be piped.
//! Everything addressed to the user but not part of the result (warnings,
//! hints, errors) goes to stderr.

#[macro_export]
macro_rules! tom_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! tom_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! tom_error_hint {
    ($($arg:tt)*) => {
        eprintln!("💡 {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! tom_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    };
}
