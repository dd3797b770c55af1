//! rlox is a tree-walk interpreter for the Lox programming language written
//! in Rust. Lox is a dynamically typed language with lexical scoping,
//! first-class functions, closures and single-inheritance classes. The
//! language and the shape of the interpreter follow the
//! [Crafting Interpreters](https://craftinginterpreters.com/) book by Bob
//! Nystrom; the implementation is its own.
//!
//! ## Scanning
//! The first step is scanning. The [`scanner`](scanner) walks the source
//! text left to right and turns it into a list of tokens. A token is a
//! single unit of the language; the string `1 + 2` becomes
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! Problems at this stage are trivial ones like an unterminated string or a
//! character the language has no use for. The scanner reports them and keeps
//! going, so one run surfaces every lexical mistake in the file at once.
//!
//! ## Parsing
//! The [`parser`](parser) is a hand-written recursive descent parser that
//! turns the token list into an abstract syntax tree. [`Expressions`](expr::Expr)
//! are pieces of code that produce a value, an [`Object`](object::Object).
//! [`Statements`](stmt::Stmt) do not produce a value but perform some
//! action instead. On a syntax error the parser reports, synchronizes to the
//! next statement boundary and continues, for the same reason the scanner
//! does.
//!
//! ## Resolving
//! The [`resolver`](resolver) walks the finished tree once and binds every
//! use of a variable to the scope that defines it, recording how many
//! environment frames sit between the two. That distance is what makes
//! closures behave: a function body always reads the binding that was in
//! scope where it was written, no matter what has been declared since. The
//! resolver also rejects code that parses fine but means nothing, like a
//! `return` at the top level or `this` outside of a class.
//!
//! ## Interpreting
//! The [`interpreter`](interpreter) walks the resolved tree and evaluates
//! it. Variables live in [`environments`](environment::Environment), a chain
//! of frames from the innermost scope out to the globals. Functions capture
//! the frame they were declared in, which the frames' shared ownership makes
//! safe and cheap. Errors at this stage are [`RuntimeErrors`](error::RuntimeError);
//! the first one aborts the program and is reported through the shared
//! [`Reporter`](error::Reporter) sink.

use std::fs;
use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod error;
pub mod token;
pub mod scanner;
pub mod expr;
pub mod stmt;
pub mod environment;
pub mod parser;
pub mod ast;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod function;
pub mod resolver;
pub mod class;

use error::Reporter;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// The interpreter façade. It is created around the two output streams
/// (program output and diagnostics) and keeps the interpreter alive between
/// runs, which is how the prompt carries globals from one line to the next.
#[allow(non_camel_case_types)]
pub struct rlox<'a> {
    interpreter: Interpreter<'a>,
}

impl<'a> rlox<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        rlox {
            interpreter: Interpreter::new(Reporter::new(out, err)),
        }
    }

    /// Runs a whole program: scan, parse, resolve, interpret. Each phase
    /// only runs when the previous ones reported nothing.
    pub fn run(&mut self, source: &str) {
        let scanner = Scanner::new(source, &mut self.interpreter.reporter);
        let tokens = scanner.scan_tokens();

        if self.interpreter.reporter.had_error() {
            return;
        }

        let mut parser = Parser::new(tokens, &mut self.interpreter.reporter);
        let statements = parser.parse();

        if self.interpreter.reporter.had_error() {
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter);
        resolver.resolve(&statements);

        if self.interpreter.reporter.had_error() {
            return;
        }

        self.interpreter.interpret(&statements);
    }

    /// Reads the file and runs it as a single program.
    pub fn run_file(&mut self, path: &str) {
        let contents = fs::read_to_string(path)
            .expect("Should have been able to read the file");

        self.run(&contents);
    }

    /// Reads lines until EOF and runs each one as a complete program.
    /// Globals survive between lines; error flags do not.
    pub fn run_prompt(&mut self) {
        let mut editor = DefaultEditor::new().expect("line editor to initialize");

        let history = home::home_dir().map(|path| path.join(".rlox_history"));
        if let Some(path) = &history {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());

                    self.run(&line);

                    self.interpreter.reporter.reset();
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("{error}");
                    break;
                },
            }
        }

        if let Some(path) = &history {
            let _ = editor.save_history(path);
        }
    }

    /// Checks if the last run hit a scan, parse or resolve error.
    pub fn had_error(&self) -> bool {
        self.interpreter.reporter.had_error()
    }

    /// Checks if the last run hit a runtime error.
    pub fn had_runtime_error(&self) -> bool {
        self.interpreter.reporter.had_runtime_error()
    }
}
