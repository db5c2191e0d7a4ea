use std::env;
use std::io::{self, BufRead, Write};

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::Rich;
use chumsky::Parser;

use diceydice::dice::roller::FastRand;
use diceydice::format::{format_computation, Formatter};

fn main() {
	let args = env::args();
	let mut roller = FastRand::default();

	if args.len() > 1 {
		// Obtain the expression by combining all args passed to the executable, so that it can
		// be left unquoted even with spaces. The first argument is ignored since it is
		// typically the name of the executable itself.
		let input = args.skip(1).collect::<Vec<String>>().join(" ");
		roll_and_print(&input, Formatter::Ansi, &mut roller);
	} else {
		repl(&mut roller);
	}
}

/// Reads expressions from stdin a line at a time and prints their rolled results until EOF or
/// an "exit"/"quit" line.
fn repl(roller: &mut FastRand) {
	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();

	loop {
		print!("> ");
		io::stdout().flush().ok();

		let Some(Ok(line)) = lines.next() else { break };
		let line = line.trim();
		if line.is_empty() {
			continue;
		}
		if line == "exit" || line == "quit" {
			break;
		}

		roll_and_print(line, Formatter::Ansi, roller);
	}
}

/// Parses an expression, rolls it, and prints the formatted result, reporting any errors to
/// stderr.
fn roll_and_print(input: &str, formatter: Formatter, roller: &mut FastRand) {
	let input = input.trim().to_lowercase();

	match diceydice::parser().parse(&input).into_result() {
		Ok(expr) => {
			let rolled = expr.eval(roller);
			match format_computation(&rolled, formatter) {
				Ok(text) => println!("{text}"),
				Err(err) => eprintln!("Calculation error: {err}"),
			}
		}
		Err(errs) => report_parse_errors(&input, &errs),
	};
}

/// Prints each parse error as a span-annotated report on the offending expression.
fn report_parse_errors(input: &str, errs: &[Rich<'_, char>]) {
	for err in errs {
		let span = err.span().into_range();
		Report::build(ReportKind::Error, ("expression", span.clone()))
			.with_message(err.to_string())
			.with_label(
				Label::new(("expression", span))
					.with_message(err.reason().to_string())
					.with_color(Color::Red),
			)
			.finish()
			.eprint(("expression", Source::from(input)))
			.ok();
	}
}
