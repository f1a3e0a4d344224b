mod repl;

use clap::Parser;
use pyrite_core::ctx::Context;
use pyrite_core::exe::Interpreter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pyrite", version, about = "The PyRite language interpreter")]
struct Cli {
	/// The script to execute. Omit it for an interactive session.
	script: Option<PathBuf>,
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();
	let cli = Cli::parse();
	match cli.script {
		Some(path) => run_file(&path),
		None => repl::run(),
	}
}

/// Execute a script file in one shot.
///
/// Parse errors and unreadable files exit with status 1. An uncaught
/// runtime error has already been reported by the interpreter and still
/// exits cleanly.
fn run_file(path: &Path) -> ExitCode {
	let source = match std::fs::read_to_string(path) {
		Ok(source) => source,
		Err(e) => {
			eprintln!("Error: cannot open file '{}': {e}", path.display());
			return ExitCode::FAILURE;
		}
	};
	let script = match pyrite_core::syn::parse(&source) {
		Ok(script) => script,
		Err(errors) => {
			for error in errors {
				eprintln!("{}", error.render_on(&source));
			}
			return ExitCode::FAILURE;
		}
	};
	let mut interpreter = Interpreter::new();
	let _ = interpreter.interpret(&Context::background(), &script);
	ExitCode::SUCCESS
}
