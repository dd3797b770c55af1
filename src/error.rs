use std::fmt::{self, Display};
use std::io::Write;

use crate::object::Object;
use crate::token::{Token, Type};

/// The shared diagnostics sink. Every phase reports through a `Reporter`
/// instead of writing to the process streams directly, so the REPL, the
/// binary and the test harness can each decide where output ends up.
///
/// `out` receives the program's `print` output, `err` receives diagnostics.
pub struct Reporter<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    had_error: bool,
    had_runtime_error: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Reporter {
            out,
            err,
            had_error: false,
            had_runtime_error: false,
        }
    }

    /// Writes one line of program output.
    pub fn print(&mut self, value: &impl Display) {
        writeln!(self.out, "{value}").expect("output stream to be writable");
    }

    /// Writes a compile-time diagnostic line and raises the error flag.
    fn error(&mut self, line: fmt::Arguments) {
        writeln!(self.err, "{line}").expect("diagnostic stream to be writable");
        self.had_error = true;
    }

    /// Writes a runtime diagnostic line and raises the runtime error flag.
    fn runtime_error(&mut self, line: fmt::Arguments) {
        writeln!(self.err, "{line}").expect("diagnostic stream to be writable");
        self.had_runtime_error = true;
    }

    /// Checks if an error occurred during scanning, parsing or resolution.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Checks if an error occurred during interpretation.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Resets the error flags between prompt lines.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

/// Every error type must implement this trait.
pub trait Throw {
    /// Reports the error through the given sink.
    fn throw(&self, reporter: &mut Reporter);
}

/// Represents an error that occurs during scanning.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Throw for ScanError {
    fn throw(&self, reporter: &mut Reporter) {
        reporter.error(format_args!(
            "[Line {line}] Error: {message}",
            line = self.line,
            message = self.message,
        ));
    }
}

/// Represents an error that occurs during parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Throw for ParseError {
    fn throw(&self, reporter: &mut Reporter) {
        let lexeme = match self.token.r#type {
            Type::EOF => "end",
            _ => self.token.lexeme.as_str(),
        };

        reporter.error(format_args!(
            "[Line {line}] Error at '{lexeme}': {message}",
            line = self.token.line,
            message = self.message,
        ));
    }
}

/// Represents an error that occurs during resolution.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Throw for ResolveError {
    fn throw(&self, reporter: &mut Reporter) {
        reporter.error(format_args!(
            "[Line {line}] Error at '{lexeme}': {message}",
            line = self.token.line,
            lexeme = self.token.lexeme,
            message = self.message,
        ));
    }
}

/// Represents an error that occurs during runtime.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Throw for RuntimeError {
    fn throw(&self, reporter: &mut Reporter) {
        reporter.runtime_error(format_args!(
            "[Line {line}] {message}",
            line = self.token.line,
            message = self.message,
        ));
    }
}

/// Anything that unwinds the interpreter rides this channel. A return
/// statement is not an error but it propagates up the execution stack the
/// same way, so both share the type. `Return` must only ever be caught by
/// the function call that triggered the body; it never reaches the sink.
#[derive(Debug)]
pub enum Interrupt {
    Return(Object),
    Error(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Interrupt::Error(error)
    }
}

pub type RuntimeResult<T> = Result<T, Interrupt>;
