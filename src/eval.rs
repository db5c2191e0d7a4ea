//! Evaluated dice pools and their totals.

use std::fmt;

use crate::dice::{CombatRoll, DieRoll};
use crate::filter::Filter;
use crate::format::{self, Formatter};

/// Representation of the result from evaluating an [`Expr`]: a pool of members and an optional
/// filter that selects or rescores them when totalling.
///
/// [`Expr`]: crate::expr::Expr
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs)]
pub struct Rolled {
	/// Each member of the pool
	pub items: Vec<Computation>,

	/// Filter applied to the pool when totalling, if any
	pub filter: Option<Filter>,
}

impl Rolled {
	/// Creates an unfiltered pool from its members.
	#[must_use]
	pub const fn plain(items: Vec<Computation>) -> Self {
		Self { items, filter: None }
	}

	/// Creates a filtered pool from its members.
	#[must_use]
	pub const fn filtered(items: Vec<Computation>, filter: Filter) -> Self {
		Self {
			items,
			filter: Some(filter),
		}
	}

	/// Applies a filter to the pool. A pool that is already filtered becomes the single member
	/// of a new pool, so that e.g. `(2d20h)l` selects among one candidate rather than
	/// re-filtering the inner pool.
	#[must_use]
	pub fn with_filter(self, filter: Filter) -> Self {
		if self.filter.is_some() {
			Self::filtered(vec![Computation::Group(Box::new(self))], filter)
		} else {
			Self::filtered(self.items, filter)
		}
	}

	/// Number of members in the pool.
	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Checks whether the pool has no members.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Calculates the total of the pool: the sum of all member values, or of the filter's
	/// transformed values when a filter is present.
	///
	/// # Errors
	/// If there is an integer overflow while summing, an error variant is returned.
	pub fn value(&self) -> Result<Value, CalcError> {
		let vals = match &self.filter {
			Some(filter) => filter.transform(&self.items)?,
			None => self
				.items
				.iter()
				.map(Computation::value)
				.collect::<Result<Vec<_>, _>>()?,
		};

		vals.into_iter().try_fold(Value::ZERO, |acc, val| {
			acc.checked_add(val).ok_or_else(|| CalcError::Overflow(self.clone()))
		})
	}

	/// Gets the indexes of the members the filter selected (those with a nonzero transformed
	/// result). For an unfiltered pool, every member is kept.
	#[must_use]
	pub fn kept_indexes(&self) -> Vec<usize> {
		match &self.filter {
			Some(filter) => filter
				.transform(&self.items)
				.map(|vals| {
					vals.iter()
						.enumerate()
						.filter(|(_, val)| val.result != 0)
						.map(|(idx, _)| idx)
						.collect()
				})
				.unwrap_or_default(),
			None => (0..self.items.len()).collect(),
		}
	}

	/// Breaks the pool into members that can be spliced into an enclosing pool. An unfiltered
	/// pool contributes its members individually; a filtered pool stays together as a single
	/// nested member.
	pub(crate) fn into_terms(self) -> Vec<Computation> {
		if self.filter.is_none() {
			self.items
		} else {
			vec![Computation::Group(Box::new(self))]
		}
	}

	/// Collapses the pool into a single member, unwrapping a lone unfiltered member.
	pub(crate) fn into_term(mut self) -> Computation {
		if self.filter.is_none() && self.items.len() == 1 {
			self.items.remove(0)
		} else {
			Computation::Group(Box::new(self))
		}
	}
}

impl fmt::Display for Rolled {
	/// Formats the pool the way the [`Plain`](Formatter::Plain) formatter renders rolls:
	/// members joined with ` + ` (` - ` for negated members), or `label(a, [b], c)` with the
	/// kept members bracketed when a filter is present.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", format::format_roll(self, Formatter::Plain))
	}
}

/// Individual member of an evaluated dice pool
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Computation {
	/// Single rolled die
	Die(DieRoll),

	/// Single rolled combat die
	Combat(CombatRoll),

	/// Standalone integer
	Num(i32),

	/// Negation of a member (makes the result of it negative)
	Neg(Box<Computation>),

	/// Nested pool, produced by parenthesized groups and filtered terms
	Group(Box<Rolled>),
}

impl Computation {
	/// Calculates the value of this member.
	///
	/// # Errors
	/// If there is an integer overflow in a nested pool or negation, an error variant is
	/// returned.
	pub fn value(&self) -> Result<Value, CalcError> {
		match self {
			Self::Die(roll) => Ok(Value::new(i32::from(roll.val), 0)),
			Self::Combat(roll) => Ok(Value::new(i32::from(roll.val), i32::from(roll.effect))),
			Self::Num(num) => Ok(Value::new(*num, 0)),
			Self::Neg(inner) => {
				let val = inner.value()?;
				val.checked_neg()
					.ok_or_else(|| CalcError::Overflow(Rolled::plain(vec![self.clone()])))
			}
			Self::Group(rolled) => rolled.value(),
		}
	}

	/// Gets the die roll this member is, if it is one.
	#[must_use]
	pub const fn as_die(&self) -> Option<&DieRoll> {
		match self {
			Self::Die(roll) => Some(roll),
			_ => None,
		}
	}
}

impl fmt::Display for Computation {
	/// Dice and constants format as their value, negated members with a leading `-`, and
	/// nested pools as their own formatting - parenthesized when they are a plain pool of more
	/// than one member.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Die(roll) => write!(f, "{roll}"),
			Self::Combat(roll) => write!(f, "{roll}"),
			Self::Num(num) => write!(f, "{num}"),
			Self::Neg(inner) => write!(f, "-{inner}"),
			Self::Group(rolled) => {
				if rolled.filter.is_none() && rolled.len() > 1 {
					write!(f, "({rolled})")
				} else {
					write!(f, "{rolled}")
				}
			}
		}
	}
}

/// Total of an evaluated pool: the numeric result along with the number of effects that
/// occurred (combat-die effects and crit-failure effects from `->`/`<-` filters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::exhaustive_structs)]
pub struct Value {
	/// Numeric result
	pub result: i32,

	/// Number of effects
	pub effects: i32,
}

impl Value {
	/// A zero value with no effects.
	pub const ZERO: Self = Self::new(0, 0);

	/// Creates a value from a result and an effect count.
	#[must_use]
	pub const fn new(result: i32, effects: i32) -> Self {
		Self { result, effects }
	}

	/// Adds two values componentwise, returning `None` on overflow.
	#[must_use]
	pub const fn checked_add(self, other: Self) -> Option<Self> {
		match (
			self.result.checked_add(other.result),
			self.effects.checked_add(other.effects),
		) {
			(Some(result), Some(effects)) => Some(Self { result, effects }),
			_ => None,
		}
	}

	/// Negates the numeric result, returning `None` on overflow. Effects stay positive; a
	/// subtracted combat pool still produced its effects.
	#[must_use]
	pub const fn checked_neg(self) -> Option<Self> {
		match self.result.checked_neg() {
			Some(result) => Some(Self {
				result,
				effects: self.effects,
			}),
			None => None,
		}
	}
}

impl fmt::Display for Value {
	/// The result, followed by the effect count in braces when there are any effects,
	/// e.g. `4{2}`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.result)?;
		if self.effects > 0 {
			write!(f, "{{{}}}", self.effects)?;
		}
		Ok(())
	}
}

/// Error that can occur while totalling an evaluated pool
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CalcError {
	/// Integer overflow while summing member values.
	/// This normally should not ever happen given the types used for die counts and sides.
	#[error("integer overflow while totalling {0}")]
	Overflow(Rolled),
}
