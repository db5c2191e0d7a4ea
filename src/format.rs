//! Rendering of evaluated pools as `total <arrow> expanded rolls` in plain text, Markdown, or
//! ANSI terminal styling.

#[cfg(feature = "parse")]
use crate::dice::Roller;
use crate::eval::{CalcError, Computation, Rolled};

/// Output styles for formatted roll results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[expect(clippy::exhaustive_enums, reason = "A new style would be a new formatter")]
pub enum Formatter {
	/// Unstyled text with an ASCII `<=` arrow
	Plain,

	/// `**bold**` markup and a `⇐` arrow, suitable for chat clients
	#[default]
	Markdown,

	/// SGR bold escapes and a `⬅` arrow, suitable for terminals
	Ansi,
}

impl Formatter {
	/// Emboldens a piece of text in this style.
	#[must_use]
	pub fn bold(self, text: &str) -> String {
		match self {
			Self::Plain => text.to_owned(),
			Self::Markdown => format!("**{text}**"),
			Self::Ansi => format!("\x1b[1m{text}\x1b[0m"),
		}
	}

	/// Gets the arrow drawn between the total and the expanded rolls.
	#[must_use]
	pub const fn arrow(self) -> &'static str {
		match self {
			Self::Plain => "<=",
			Self::Markdown => "\u{21d0}",
			Self::Ansi => "\u{2b05}",
		}
	}
}

/// Formats an evaluated pool as `total <arrow> expanded rolls`. The total is bold, as are any
/// critical dice the pool's filter selected.
///
/// # Errors
/// If the pool's total cannot be calculated, an error variant is returned.
pub fn format_computation(rolled: &Rolled, formatter: Formatter) -> Result<String, CalcError> {
	let total = rolled.value()?;
	Ok(format!(
		"{} {} {}",
		formatter.bold(&total.to_string()),
		formatter.arrow(),
		format_roll(rolled, formatter),
	))
}

/// Formats the expanded-rolls side of a pool. Filtered pools render as
/// `label(member, [member], ...)` with the kept dice and constants bracketed; unfiltered pools
/// join their members with ` + ` (` - ` for negated members).
pub(crate) fn format_roll(rolled: &Rolled, formatter: Formatter) -> String {
	match &rolled.filter {
		Some(filter) => {
			let kept = rolled.kept_indexes();
			let members = rolled
				.items
				.iter()
				.enumerate()
				.map(|(idx, item)| format_member(item, kept.contains(&idx), formatter))
				.collect::<Vec<_>>()
				.join(", ");
			format!("{}({})", filter.label(), members)
		}
		None => {
			let mut out = String::new();
			for (idx, item) in rolled.items.iter().enumerate() {
				if idx == 0 {
					out.push_str(&item.to_string());
				} else if let Computation::Neg(inner) = item {
					out.push_str(&format!(" - {inner}"));
				} else {
					out.push_str(&format!(" + {item}"));
				}
			}
			out
		}
	}
}

/// Formats a single member of a filtered pool. Kept dice and constants are bracketed (nested
/// pools are not), and kept critical dice are emboldened.
fn format_member(item: &Computation, kept: bool, formatter: Formatter) -> String {
	let bracket = kept && matches!(item, Computation::Die(..) | Computation::Combat(..) | Computation::Num(..));
	let text = if bracket {
		format!("[{item}]")
	} else {
		item.to_string()
	};

	if kept && item.as_die().is_some_and(|die| die.is_crit()) {
		formatter.bold(&text)
	} else {
		text
	}
}

/// Parses, rolls, and formats a dice expression in one call.
///
/// ```
/// use diceydice::{dice::roller::Max, format::Formatter, eval_expr};
///
/// let out = eval_expr("1d20 + (1d2 + 1d4 + 1d6)h", Formatter::Plain, &mut Max)?;
/// assert_eq!(out, "26 <= 20 + high(2, 4, [6])");
/// # Ok::<(), diceydice::format::Error>(())
/// ```
///
/// # Errors
/// If the expression cannot be parsed or its total cannot be calculated, an error variant is
/// returned.
#[cfg(feature = "parse")]
pub fn eval_expr(input: &str, formatter: Formatter, roller: &mut impl Roller) -> Result<String, Error> {
	let expr: crate::Expr = input.parse()?;
	let rolled = expr.eval(roller);
	Ok(format_computation(&rolled, formatter)?)
}

/// Error that can occur during [`eval_expr()`]
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// The expression could not be parsed
	#[cfg(feature = "parse")]
	#[error(transparent)]
	Parse(#[from] crate::parse::Error),

	/// The total of the rolled pool could not be calculated
	#[error(transparent)]
	Calc(#[from] CalcError),
}
