// src/printer/printers.rs

//! Colored and plain printing to stdout and stderr.

use crate::debug::printers::de_err;

use std::io::Write;

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// Color for printing errors in `--summary`
pub const COLOR_ERROR: Color = Color::Red;
/// Color for printing warnings in `--summary`
pub const COLOR_WARNING: Color = Color::Yellow;
/// Color for printing a successfully written table in `--summary`
pub const COLOR_OK: Color = Color::Green;

/// Print colored output to terminal if possible using passed stream,
/// otherwise, print plain output.
///
/// See an example <https://docs.rs/termcolor/1.1.2/termcolor/#detecting-presence-of-a-terminal>.
pub fn print_colored(
    color: Color,
    value: &[u8],
    out: &mut termcolor::StandardStream,
) -> std::io::Result<()> {
    if let Err(err) = out.set_color(ColorSpec::new().set_fg(Some(color))) {
        de_err!("print_colored: out.set_color({:?}) returned error {}", color, err);
        return Err(err);
    }
    if let Err(err) = out.write_all(value) {
        de_err!("print_colored: out.write_all(…) returned error {}", err);
        return Err(err);
    }
    if let Err(err) = out.reset() {
        de_err!("print_colored: out.reset() returned error {}", err);
        return Err(err);
    }
    out.flush()?;

    Ok(())
}

/// Print colored output to terminal on stderr.
pub fn print_colored_stderr(
    color: Color,
    color_choice_opt: Option<ColorChoice>,
    value: &[u8],
) -> std::io::Result<()> {
    let choice: ColorChoice = color_choice_opt.unwrap_or(ColorChoice::Auto);
    let mut stderr = termcolor::StandardStream::stderr(choice);
    let _stdout_lock = std::io::stdout().lock();

    print_colored(color, value, &mut stderr)
}

/// Safely write the `buffer` to stdout with help of [`StdoutLock`].
///
/// [`StdoutLock`]: std::io::StdoutLock
pub fn write_stdout(buffer: &[u8]) {
    let stdout = std::io::stdout();
    let mut stdout_lock = stdout.lock();
    if let Err(_err) = stdout_lock.write_all(buffer) {
        // XXX: this will print when stdout is truncated, like due to `head`
        de_err!("stdout_lock.write_all(buffer (len {})) error {}", buffer.len(), _err);
    }
    if let Err(_err) = stdout_lock.flush() {
        de_err!("stdout_lock.flush() error {}", _err);
    }
}

/// Safely write the `buffer` to stderr with help of [`StderrLock`].
///
/// [`StderrLock`]: std::io::StderrLock
pub fn write_stderr(buffer: &[u8]) {
    let mut stderr_lock = std::io::stderr().lock();
    if let Err(_err) = stderr_lock.write_all(buffer) {
        de_err!("stderr_lock.write_all(buffer (len {})) error {}", buffer.len(), _err);
    }
    if let Err(_err) = stderr_lock.flush() {
        de_err!("stderr_lock.flush() error {}", _err);
    }
}
