//! Terminal output for the operator. This is the only thing written to stdout;
//! `tracing` goes to stderr.

use std::io::Write;

use colored::Colorize;

pub fn startup_line(port: u16) -> String {
    format!("listening for requests on port {}", port)
}

pub fn write_startup(out: &mut impl Write, port: u16) -> std::io::Result<()> {
    writeln!(out, "{}", startup_line(port).white().bold())
}

pub fn print_startup(port: u16) {
    let stdout = std::io::stdout();
    if let Err(err) = write_startup(&mut stdout.lock(), port) {
        tracing::warn!(error = %err, "failed to write startup line");
    }
}
