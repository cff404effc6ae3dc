extern crate termcolor;

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

/// Writes a right-aligned, colored status label followed by `": "`.
pub fn write_label(stdout: &mut StandardStream, color: Color, label: &str) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true))?;
    write!(stdout, "{:>7}: ", label)?;
    stdout.set_color(ColorSpec::new().set_fg(None).set_intense(true))
}

macro_rules! write_color {
    ($dest:expr, $color:expr, $typ:expr, $($arg:tt)*) => {{
        let _ = $crate::color::write_label($dest, $color, $typ);
        let _ = writeln!($dest, $($arg)*);
    }};
}

macro_rules! write_error {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Red, $typ, $($arg)*)
    };
}

macro_rules! write_warn {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Yellow, $typ, $($arg)*)
    };
}

macro_rules! write_info {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Blue, $typ, $($arg)*)
    };
}

macro_rules! write_ok {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Green, $typ, $($arg)*)
    };
}
