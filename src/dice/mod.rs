//! Dice primitives: dice sets, individual die rolls, and combat dice.
//!
//! For using dice as part of a larger expression, see [`Expr::Dice`].
//!
//! [`Expr::Dice`]: crate::expr::Expr::Dice

pub mod roller;

use std::{cmp, fmt};

pub use self::roller::Roller;

/// Symbol rendered for a combat die that rolled an effect (U+1F4A5, the collision emoji).
pub const EFFECT_SYMBOL: char = '\u{1f4a5}';

/// A set of one or more rollable dice with a specific number of sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs)]
pub struct Dice {
	/// Number of dice to roll
	pub count: u8,

	/// Number of sides for each die
	pub sides: u8,
}

impl Dice {
	/// Creates a new set of dice with a given count and number of sides.
	#[must_use]
	pub const fn new(count: u8, sides: u8) -> Self {
		Self { count, sides }
	}
}

impl Default for Dice {
	/// Creates the default dice (1d20).
	#[inline]
	fn default() -> Self {
		Self::new(1, 20)
	}
}

impl fmt::Display for Dice {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}d{}", self.count, self.sides)
	}
}

/// Single die produced from rolling [`Dice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs)]
pub struct DieRoll {
	/// Value that was rolled
	pub val: u8,

	/// Number of sides of the die the value was rolled on
	pub sides: u8,
}

impl DieRoll {
	/// Creates a new die roll with the given value and die sides.
	#[must_use]
	pub const fn new(val: u8, sides: u8) -> Self {
		Self { val, sides }
	}

	/// Indicates whether this roll is a critical one - the best or worst value the die can land
	/// on. Crit-aware threshold filters count these double or turn them into effects, and
	/// formatters embolden them.
	#[must_use]
	pub const fn is_crit(&self) -> bool {
		self.val == self.sides || self.val == 1
	}
}

impl PartialOrd for DieRoll {
	fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for DieRoll {
	fn cmp(&self, other: &Self) -> cmp::Ordering {
		self.val.cmp(&other.val)
	}
}

impl fmt::Display for DieRoll {
	/// The format of a die roll is simply the plain numeric value of the roll.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.val)
	}
}

/// Single combat die produced from rolling combat dice (`Nc`).
///
/// A combat die is a d6 scored as 1, 2, 0, 0, 1 + effect, 1 + effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs)]
pub struct CombatRoll {
	/// Value the die scored
	pub val: u8,

	/// Whether the die also produced an effect
	pub effect: bool,
}

impl CombatRoll {
	/// Creates a combat roll from the underlying d6 value.
	#[must_use]
	pub const fn from_d6(roll: u8) -> Self {
		match roll {
			1 => Self { val: 1, effect: false },
			2 => Self { val: 2, effect: false },
			3 | 4 => Self { val: 0, effect: false },
			_ => Self { val: 1, effect: true },
		}
	}
}

impl fmt::Display for CombatRoll {
	/// An effect die is rendered as [`EFFECT_SYMBOL`]; any other combat die as its plain value.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.effect {
			write!(f, "{EFFECT_SYMBOL}")
		} else {
			write!(f, "{}", self.val)
		}
	}
}
