use std::{env, io, process};

use rlox_lang::rlox;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut out = io::stdout();
    let mut err = io::stderr();
    let mut rlox = rlox::new(&mut out, &mut err);

    match args.len() {
        n if n > 2 => {
            println!("Usage: rlox [script]");
            process::exit(64);
        },
        2 => {
            rlox.run_file(&args[1]);

            if rlox.had_error() {
                process::exit(65);
            }
            if rlox.had_runtime_error() {
                process::exit(70);
            }
        },
        _ => rlox.run_prompt(),
    };
}
