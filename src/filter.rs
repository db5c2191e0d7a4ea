//! Filters that can be applied to evaluated dice pools: keep highest/lowest and threshold
//! (success-counting) comparisons, including the crit-aware `->`/`<-` variants.

use std::fmt;

use crate::dice::DieRoll;
use crate::eval::{CalcError, Computation, Value};

/// Routines that can be applied to an evaluated pool of dice ([`Rolled`]) to select or rescore
/// its members. A filter maps every member of the pool to a transformed [`Value`]; the pool's
/// total is the sum of the transformed values.
///
/// [`Rolled`]: crate::eval::Rolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Filter {
	/// Keeps only the highest x members, zeroing the rest. Notation: `h`/`kh` (`h3`, `kh3`)
	KeepHigh(u8),

	/// Keeps only the lowest x members, zeroing the rest. Notation: `l`/`kl` (`l3`, `kl3`)
	KeepLow(u8),

	/// Counts the members that pass a comparison; each hit scores 1.
	///
	/// With `crit` set, a die that hits on its best possible roll scores 2, and a die that
	/// misses on its worst possible roll scores an effect. "Best" and "worst" follow the
	/// direction of the comparison: for at-least conditions the die's max is best, for at-most
	/// conditions its 1 is best.
	Cond {
		/// Condition that member values are checked against
		cond: Condition,

		/// Whether critical rolls score double / produce effects
		crit: bool,
	},
}

impl Filter {
	/// Creates a plain (non-crit) threshold filter from a condition.
	#[must_use]
	pub const fn cond(cond: Condition) -> Self {
		Self::Cond { cond, crit: false }
	}

	/// Creates a crit-aware threshold filter from a condition.
	#[must_use]
	pub const fn crit(cond: Condition) -> Self {
		Self::Cond { cond, crit: true }
	}

	/// Maps each member of a pool to its transformed value under this filter.
	///
	/// Keep filters give the selected members their full value and everyone else zero, with
	/// ties going to the earlier member. Threshold filters score each member independently.
	///
	/// # Errors
	/// If a member's own total cannot be calculated, the error is passed along.
	pub fn transform(&self, items: &[Computation]) -> Result<Vec<Value>, CalcError> {
		let vals = items.iter().map(Computation::value).collect::<Result<Vec<_>, _>>()?;

		Ok(match self {
			Self::KeepHigh(count) => keep(&vals, *count, true),
			Self::KeepLow(count) => keep(&vals, *count, false),
			Self::Cond { cond, crit } => items
				.iter()
				.zip(&vals)
				.map(|(item, val)| cond.score(item.as_die(), val.result, *crit))
				.collect(),
		})
	}

	/// Gets the label used when rendering a filtered pool, e.g. `high` for keep-highest or
	/// `≥10` for both `>=10` and `->10`.
	#[must_use]
	pub fn label(&self) -> String {
		match self {
			Self::KeepHigh(..) => "high".to_owned(),
			Self::KeepLow(..) => "low".to_owned(),
			Self::Cond { cond, .. } => format!("{}{}", cond.pretty_symbol(), cond.threshold()),
		}
	}
}

impl fmt::Display for Filter {
	/// Formats the filter in its parseable notation: `h`/`h2`/`l`/`l2` (counts of 1 are
	/// elided), `>=10`, `->10`, and so on.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::KeepHigh(count) => {
				write!(f, "h{}", if *count > 1 { count.to_string() } else { String::new() })
			}
			Self::KeepLow(count) => {
				write!(f, "l{}", if *count > 1 { count.to_string() } else { String::new() })
			}
			Self::Cond { cond, crit: false } => write!(f, "{}{}", cond.symbol(), cond.threshold()),
			Self::Cond { cond, crit: true } => write!(
				f,
				"{}{}",
				match cond {
					Condition::Gt(..) | Condition::Gte(..) => "->",
					Condition::Lt(..) | Condition::Lte(..) => "<-",
				},
				cond.threshold()
			),
		}
	}
}

/// Test that pool member values can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Unlikely to change, no logical fallback")]
pub enum Condition {
	/// Checks whether values are greater than its own value. Symbol: `>`
	Gt(u8),

	/// Checks whether values are greater than or equal to its own value. Symbol: `>=`
	Gte(u8),

	/// Checks whether values are less than its own value. Symbol: `<`
	Lt(u8),

	/// Checks whether values are less than or equal to its own value. Symbol: `<=`
	Lte(u8),
}

impl Condition {
	/// Checks a value against the condition.
	#[must_use]
	pub const fn check(&self, val: i32) -> bool {
		match self {
			Self::Gt(expected) => val > *expected as i32,
			Self::Gte(expected) => val >= *expected as i32,
			Self::Lt(expected) => val < *expected as i32,
			Self::Lte(expected) => val <= *expected as i32,
		}
	}

	/// Gets the threshold value of the condition.
	#[must_use]
	pub const fn threshold(&self) -> u8 {
		match self {
			Self::Gt(expected) | Self::Gte(expected) | Self::Lt(expected) | Self::Lte(expected) => *expected,
		}
	}

	/// Gets the parseable symbol that represents the condition.
	#[must_use]
	pub const fn symbol(&self) -> &'static str {
		match self {
			Self::Gt(..) => ">",
			Self::Gte(..) => ">=",
			Self::Lt(..) => "<",
			Self::Lte(..) => "<=",
		}
	}

	/// Gets the symbol used when rendering results (`≥`/`≤` for the inclusive comparisons).
	#[must_use]
	pub const fn pretty_symbol(&self) -> &'static str {
		match self {
			Self::Gt(..) => ">",
			Self::Gte(..) => "\u{2265}",
			Self::Lt(..) => "<",
			Self::Lte(..) => "\u{2264}",
		}
	}

	/// Indicates whether the condition favors high rolls (`>`/`>=`).
	const fn is_upward(&self) -> bool {
		matches!(self, Self::Gt(..) | Self::Gte(..))
	}

	/// Scores a single pool member against the condition. Crit scoring only ever applies to
	/// plain dice; groups and constants score 1 or 0 regardless of `crit`.
	fn score(&self, die: Option<&DieRoll>, val: i32, crit: bool) -> Value {
		let hit = self.check(val);
		if !crit {
			return Value::new(i32::from(hit), 0);
		}

		match (hit, die) {
			(true, Some(die)) if self.is_crit_success(die) => Value::new(2, 0),
			(true, _) => Value::new(1, 0),
			(false, Some(die)) if self.is_crit_failure(die) => Value::new(0, 1),
			(false, _) => Value::ZERO,
		}
	}

	/// Checks whether a die roll is the best possible one for this condition's direction.
	fn is_crit_success(&self, die: &DieRoll) -> bool {
		if self.is_upward() {
			die.val == die.sides
		} else {
			die.val == 1
		}
	}

	/// Checks whether a die roll is the worst possible one for this condition's direction.
	fn is_crit_failure(&self, die: &DieRoll) -> bool {
		if self.is_upward() {
			die.val == 1
		} else {
			die.val == die.sides
		}
	}
}

impl fmt::Display for Condition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.symbol(), self.threshold())
	}
}

/// Keeps the `count` highest (or lowest) values, zeroing the rest. Stable: equal values are
/// kept in pool order.
fn keep(vals: &[Value], count: u8, highest: bool) -> Vec<Value> {
	let mut order: Vec<usize> = (0..vals.len()).collect();
	order.sort_by(|&a, &b| {
		let by_val = if highest {
			vals[b].result.cmp(&vals[a].result)
		} else {
			vals[a].result.cmp(&vals[b].result)
		};
		by_val.then(a.cmp(&b))
	});

	let mut transformed = vec![Value::ZERO; vals.len()];
	for &idx in order.iter().take(count as usize) {
		transformed[idx] = vals[idx];
	}
	transformed
}
