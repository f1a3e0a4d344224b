//! The interactive session: a line-oriented loop accumulating code into a
//! buffer until `run(…)` executes it.

use pyrite_core::ctx::Context;
use pyrite_core::exe::Interpreter;
use pyrite_core::syn;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::{Command, ExitCode};
use std::time::{Duration, Instant};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width of the `(env) N|` prompt column.
const PROMPT_WIDTH: usize = 12;

/// Block keywords tracked for the prompt's environment display.
const OPENERS: &[&str] = &["if", "while", "def", "await", "try", "ins"];

pub fn run() -> ExitCode {
	let mut interpreter = Interpreter::new();
	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();
	let mut buffer = String::new();
	let mut line_number: usize = 1;
	let mut env_stack: Vec<String> = vec![String::from("void")];
	println!("PyRite interpreter {VERSION} (tags/v{VERSION}).");
	println!(
		"Type 'run()' to execute the buffer, 'compile()' to compile it, 'halt()' to exit, 'about()' for version info."
	);
	println!();
	loop {
		prompt(env_stack.last().map(String::as_str).unwrap_or("void"), line_number);
		let Some(Ok(line)) = lines.next() else {
			break;
		};
		let trimmed = line.trim().to_owned();
		if trimmed == "halt()" {
			break;
		}
		if trimmed == "about()" {
			println!("----------------------------------------");
			println!(" PyRite Language Interpreter v{VERSION}");
			println!(" (c) 2024-2025. DarkstarXD. All rights reserved.");
			println!(" A simple interpreted scripting language!");
			println!("----------------------------------------");
			continue;
		}
		if trimmed.starts_with("compile(") && trimmed.ends_with(')') {
			if let Err(e) = compile(&buffer, &trimmed) {
				eprintln!("[compile error] {e}");
			}
			continue;
		}
		if is_simple_identifier(&trimmed) {
			if let Some(value) = interpreter.globals.get(&trimmed) {
				println!("{}", value.repr());
				continue;
			}
		}
		if trimmed.starts_with("run(") && trimmed.ends_with(')') {
			if buffer.is_empty() {
				println!("There is no code to execute.");
				continue;
			}
			execute(&mut interpreter, &buffer, &trimmed);
			buffer.clear();
			line_number = 1;
			env_stack = vec![String::from("void")];
			println!();
			continue;
		}
		track_blocks(&mut env_stack, &trimmed);
		// A `$` prefix evaluates the rest of the line immediately; `$#`
		// appends it commented out so a later run skips it.
		if let Some(rest) = trimmed.strip_prefix('$') {
			let (code, temporary) = match rest.strip_prefix('#') {
				Some(code) => (code, true),
				None => (rest, false),
			};
			match syn::parse(code) {
				Ok(script) => {
					let _ = interpreter.interpret(&Context::background(), &script);
				}
				Err(errors) => {
					for error in errors {
						eprintln!("{}", error.render_on(code));
					}
				}
			}
			if temporary {
				buffer.push('#');
				buffer.push_str(code);
				buffer.push_str("#\n");
			} else {
				buffer.push_str(&line);
				buffer.push('\n');
			}
			line_number += 1;
			continue;
		}
		buffer.push_str(&line);
		buffer.push('\n');
		line_number += 1;
	}
	println!("Interpreter stopped.");
	ExitCode::SUCCESS
}

fn prompt(env: &str, line_number: usize) {
	let env_display = format!("({env})");
	let number = line_number.to_string();
	let padding = PROMPT_WIDTH.saturating_sub(env_display.len() + number.len()).max(1);
	print!("{env_display}{}{number}| ", " ".repeat(padding));
	let _ = io::stdout().flush();
}

/// Maintain the stack of open blocks shown in the prompt.
fn track_blocks(env_stack: &mut Vec<String>, line: &str) {
	let first_word = line.split(['(', ' ', '\t']).next().unwrap_or_default();
	if OPENERS.contains(&first_word) {
		env_stack.push(first_word.to_owned());
		return;
	}
	if let Some(opener) = first_word.strip_prefix("end") {
		if env_stack.len() > 1 && env_stack.last().map(String::as_str) == Some(opener) {
			env_stack.pop();
		}
	}
}

fn is_simple_identifier(s: &str) -> bool {
	let mut chars = s.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Execute the buffer for a `run([tick=…][,limit=…])` command.
fn execute(interpreter: &mut Interpreter, buffer: &str, call: &str) {
	let args = match parse_call_args(call) {
		Ok(args) => args,
		Err(e) => {
			eprintln!("[runtime error] {e}");
			return;
		}
	};
	let mut tick = false;
	if let Some(value) = args.get("tick") {
		match value.as_str() {
			"1" | "true" => tick = true,
			"0" | "false" => {}
			_ => {
				eprintln!("[runtime error] The tick argument of run() must be a boolean (0/1, false/true).");
				return;
			}
		}
	}
	let mut limit: i64 = 0;
	if let Some(value) = args.get("limit") {
		let numeric =
			!value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '-');
		match numeric.then(|| value.parse::<i64>().ok()).flatten() {
			Some(ms) => limit = ms,
			None => {
				eprintln!("[runtime error] The limit argument of run() must be an integer number of milliseconds.");
				return;
			}
		}
	}
	let script = match syn::parse(buffer) {
		Ok(script) => script,
		Err(errors) => {
			for error in errors {
				eprintln!("{}", error.render_on(buffer));
			}
			return;
		}
	};
	let ctx = match limit > 0 {
		true => Context::with_timeout(Duration::from_millis(limit as u64)),
		false => Context::background(),
	};
	let start = Instant::now();
	let _ = interpreter.interpret(&ctx, &script);
	if tick {
		println!("Program execution took: {}ms.", start.elapsed().as_millis());
	}
}

/// Delegate `compile([route=…][,args=…])` to the bundled C++ toolchain.
///
/// The toolchain ships next to the executable: a `template.cpp` the source
/// is substituted into, and a `compilers/MinGW64/bin/g++` to build it.
fn compile(buffer: &str, call: &str) -> Result<(), String> {
	let started = Instant::now();
	let args = parse_call_args(call)?;
	let base = std::env::current_exe()
		.ok()
		.and_then(|p| p.parent().map(PathBuf::from))
		.unwrap_or_else(|| PathBuf::from("."));
	let route = args.get("route").cloned().unwrap_or_default();
	let extra = args.get("args").cloned().unwrap_or_default();
	// Pick the source text and the output location.
	let (source, out_dir, stem, display) = match route.is_empty() {
		true => {
			if buffer.is_empty() {
				return Err(String::from("The buffer is empty, there is nothing to compile."));
			}
			(buffer.to_owned(), base.clone(), String::from("buffer"), String::from("buffer"))
		}
		false => {
			let path = PathBuf::from(&route);
			let source = std::fs::read_to_string(&path)
				.map_err(|e| format!("Cannot open source file '{route}': {e}"))?;
			let dir = path.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
			let stem = path
				.file_stem()
				.map(|s| s.to_string_lossy().into_owned())
				.unwrap_or_else(|| String::from("buffer"));
			(source, dir, stem, route.clone())
		}
	};
	let template_path = base.join("template.cpp");
	let template = std::fs::read_to_string(&template_path)
		.map_err(|e| format!("Cannot open the compiler template '{}': {e}", template_path.display()))?;
	let placeholder = "WRITE_SRC_CODE_HERE";
	if !template.contains(placeholder) {
		return Err(format!("Placeholder {placeholder} not found in template.cpp."));
	}
	let generated = template.replacen(placeholder, &source, 1);
	let cpp_path = out_dir.join(format!("{stem}.cpp"));
	println!("Translation target: {}", cpp_path.display());
	std::fs::write(&cpp_path, generated)
		.map_err(|e| format!("Cannot write the temporary file '{}': {e}", cpp_path.display()))?;
	let exe_name = match cfg!(windows) {
		true => format!("{stem}.exe"),
		false => stem.clone(),
	};
	let exe_path = out_dir.join(exe_name);
	let compiler = base.join("compilers").join("MinGW64").join("bin").join(match cfg!(windows) {
		true => "g++.exe",
		false => "g++",
	});
	let mut command = Command::new(&compiler);
	command.arg(&cpp_path).arg("-o").arg(&exe_path).args(["-I.", "-std=c++11", "-O2"]);
	for flag in extra.split_whitespace() {
		command.arg(flag);
	}
	println!("Compiler invocation: {command:?}");
	let status = command
		.status()
		.map_err(|e| format!("Cannot run the compiler '{}': {e}", compiler.display()));
	let _ = std::fs::remove_file(&cpp_path);
	match status?.success() {
		true => {
			let seconds = started.elapsed().as_secs_f64();
			println!("Compiled {display} successfully ({seconds:.2}s) into {}", exe_path.display());
			Ok(())
		}
		false => Err(format!("Compiling {display} failed (see the compiler output).")),
	}
}

/// Parse the `key=value` arguments of a session command, handling quoted
/// values and nested parentheses.
fn parse_call_args(call: &str) -> Result<HashMap<String, String>, String> {
	let open = call.find('(').ok_or("Syntax error: the command is missing '()'.")?;
	let close = call.rfind(')').ok_or("Syntax error: the command is missing '()'.")?;
	let inner = call[open + 1..close].trim();
	let mut out = HashMap::new();
	if inner.is_empty() {
		return Ok(out);
	}
	let mut in_quotes = false;
	let mut paren_level = 0usize;
	let mut start = 0;
	let chars: Vec<char> = inner.chars().collect();
	for i in 0..=chars.len() {
		let c = chars.get(i).copied().unwrap_or(',');
		match c {
			'"' => in_quotes = !in_quotes,
			'(' if !in_quotes => paren_level += 1,
			')' if !in_quotes => paren_level = paren_level.saturating_sub(1),
			',' if !in_quotes && paren_level == 0 => {
				let pair: String = chars[start..i.min(chars.len())].iter().collect();
				let pair = pair.trim();
				if !pair.is_empty() {
					let (key, value) = pair
						.split_once('=')
						.ok_or("Syntax error: arguments must use the key=value form.")?;
					out.insert(key.trim().to_owned(), unquote(value.trim()));
				}
				start = i + 1;
			}
			_ => {}
		}
	}
	Ok(out)
}

fn unquote(value: &str) -> String {
	let stripped = value
		.strip_prefix('"')
		.and_then(|v| v.strip_suffix('"'))
		.or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
	stripped.unwrap_or(value).to_owned()
}
