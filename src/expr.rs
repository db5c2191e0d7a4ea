//! AST-like data structures for evaluating full dice expressions and working with their results.

use std::fmt;

use crate::dice::{Dice, Roller};
use crate::eval::{Computation, Rolled};
use crate::filter::Filter;

/// Individual elements of a full dice expression
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Expr {
	/// Standalone integer
	Num(i32),

	/// Dice literal
	Dice(Dice),

	/// Combat dice literal (`Nc`) - the count of combat dice to roll
	Combat(u8),

	/// Parenthesized subexpression. Grouping is kept in the AST because it changes evaluation:
	/// a grouped term joins an enclosing pool as one member with its total as its value, while
	/// a bare dice term contributes each die individually.
	Group(Box<Self>),

	/// Sum of two expressions
	Add(Box<Self>, Box<Self>),

	/// Difference of two expressions
	Sub(Box<Self>, Box<Self>),

	/// Filter applied to the preceding term or group (e.g. `2d20h`, `(1d2 + 1d4)kh1`,
	/// `3d20->10`)
	Filter(Filter, Box<Self>),
}

impl Expr {
	/// Evaluates the expression into a pool of rolled dice, rolling every dice term with the
	/// given roller. Rolling cannot fail; totalling the resulting pool can
	/// (see [`Rolled::value()`]).
	pub fn eval(&self, roller: &mut impl Roller) -> Rolled {
		match self {
			Self::Num(num) => Rolled::plain(vec![Computation::Num(*num)]),

			Self::Dice(dice) => Rolled::plain(
				roller
					.roll_dice(dice)
					.into_iter()
					.map(Computation::Die)
					.collect(),
			),

			Self::Combat(count) => Rolled::plain(
				(0..*count)
					.map(|_| Computation::Combat(roller.roll_combat_die()))
					.collect(),
			),

			Self::Group(inner) => Rolled::plain(vec![Computation::Group(Box::new(inner.eval(roller)))]),

			Self::Add(a, b) => {
				let mut items = a.eval(roller).into_terms();
				items.extend(b.eval(roller).into_terms());
				Rolled::plain(items)
			}

			Self::Sub(a, b) => {
				let mut items = a.eval(roller).into_terms();
				items.push(Computation::Neg(Box::new(b.eval(roller).into_term())));
				Rolled::plain(items)
			}

			// A filter peels one layer of grouping so that it selects among the group's
			// members rather than treating the whole group as a single candidate.
			Self::Filter(filter, inner) => match inner.as_ref() {
				Self::Group(grouped) => grouped.eval(roller).with_filter(*filter),
				other => other.eval(roller).with_filter(*filter),
			},
		}
	}

	/// Checks whether the expression is deterministic (will always yield the same value with
	/// every evaluation). A [`Self::Num`] will always return `true`, dice terms return `false`
	/// unless the dice they contain only have one side, and all other expressions forward the
	/// check to their children.
	#[must_use]
	pub fn is_deterministic(&self) -> bool {
		match self {
			Self::Num(..) => true,
			Self::Dice(dice) => dice.sides == 1 || dice.count == 0,
			Self::Combat(count) => *count == 0,
			Self::Group(x) | Self::Filter(_, x) => x.is_deterministic(),
			Self::Add(a, b) | Self::Sub(a, b) => a.is_deterministic() && b.is_deterministic(),
		}
	}
}

impl fmt::Display for Expr {
	/// Builds a full usable expression string from the expression. Strings output from this
	/// parse back to the exact same expression layout, e.g. `1d20 + (1d2 + 1d4)h`, `4d20<-10`,
	/// `2c`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Num(num) => write!(f, "{num}"),
			Self::Dice(dice) => write!(f, "{dice}"),
			Self::Combat(count) => write!(f, "{count}c"),
			Self::Group(inner) => write!(f, "({inner})"),
			Self::Add(a, b) => write!(f, "{a} + {b}"),
			Self::Sub(a, b) => write!(f, "{a} - {b}"),
			Self::Filter(filter, inner) => write!(f, "{inner}{filter}"),
		}
	}
}
