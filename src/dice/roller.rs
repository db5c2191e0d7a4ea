//! Abstractions for rolling [`DieRoll`]s using various means.

use std::iter::Peekable;

#[cfg(feature = "fastrand")]
use fastrand::Rng;

use super::{CombatRoll, Dice, DieRoll};

/// Rolls dice - what else is there to say?
pub trait Roller {
	/// Rolls a single die.
	#[must_use]
	fn roll_die(&mut self, sides: u8) -> DieRoll;

	/// Rolls a full set of dice.
	#[must_use]
	fn roll_dice(&mut self, dice: &Dice) -> Vec<DieRoll> {
		let mut rolls = Vec::with_capacity(dice.count as usize);
		for _ in 0..dice.count {
			rolls.push(self.roll_die(dice.sides));
		}
		rolls
	}

	/// Rolls a single combat die (a d6 mapped to its combat score).
	#[must_use]
	fn roll_combat_die(&mut self) -> CombatRoll {
		CombatRoll::from_d6(self.roll_die(6).val)
	}
}

/// Generates rolls with random values using [fastrand]. Requires the `fastrand` feature
/// (enabled by default).
///
/// # Examples
///
/// ## Default fastrand roller
/// ```
/// use diceydice::dice::{roller::{FastRand, Roller}, Dice};
///
/// let mut roller = FastRand::default();
/// let rolls = roller.roll_dice(&Dice::new(4, 6));
/// assert!(rolls.iter().all(|roll| (1..=6).contains(&roll.val)));
/// ```
///
/// ## Manually seeded fastrand roller
/// ```
/// use diceydice::dice::{roller::{FastRand, Roller}, Dice};
///
/// let mut roller = FastRand::with_seed(0x750c38d574400);
/// let _ = roller.roll_dice(&Dice::new(4, 6));
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone, Default)]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand roller that uses the given RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand roller that uses a pre-seeded RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Roller for FastRand {
	/// Rolls a single die using the [`fastrand::Rng`] the roller was created with.
	#[inline]
	fn roll_die(&mut self, sides: u8) -> DieRoll {
		if sides > 0 {
			DieRoll::new(self.0.u8(1..=sides), sides)
		} else {
			DieRoll::new(0, 0)
		}
	}
}

/// Generates rolls that always have a specific value.
///
/// # Examples
/// ```
/// use diceydice::dice::{roller::{Roller, Val}, Dice};
///
/// let mut roller = Val(42);
/// let rolls = roller.roll_dice(&Dice::new(4, 6));
/// assert!(rolls.iter().all(|roll| roll.val == 42));
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Val(pub u8);

impl Roller for Val {
	/// Rolls a single die, always with one specific value.
	#[inline]
	fn roll_die(&mut self, sides: u8) -> DieRoll {
		DieRoll::new(self.0, sides)
	}
}

/// Generates rolls that always have their max value.
///
/// # Examples
/// ```
/// use diceydice::dice::{roller::{Max, Roller}, Dice};
///
/// let mut roller = Max;
/// let rolls = roller.roll_dice(&Dice::new(2, 20));
/// assert!(rolls.iter().all(|roll| roll.val == 20));
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl Roller for Max {
	/// Rolls a single die, always with the max value (same as the number of sides).
	#[inline]
	fn roll_die(&mut self, sides: u8) -> DieRoll {
		DieRoll::new(sides, sides)
	}
}

/// Generates rolls from an iterator of values. Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use diceydice::dice::{roller::{Iter, Roller}, Dice, DieRoll};
///
/// let mut roller = Iter::new(vec![1, 2, 3, 4, 10]);
/// assert_eq!(
/// 	roller.roll_dice(&Dice::new(5, 6)),
/// 	vec![
/// 		DieRoll::new(1, 6),
/// 		DieRoll::new(2, 6),
/// 		DieRoll::new(3, 6),
/// 		DieRoll::new(4, 6),
/// 		DieRoll::new(10, 6),
/// 	]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = u8>>(Peekable<I>);

impl<I: Iterator<Item = u8>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_roll(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new roller that uses the given iterator to provide roll values.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = u8>> Roller for Iter<I> {
	/// Rolls a die with the value from the next iteration.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[inline]
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of can_roll() is expected"
	)]
	fn roll_die(&mut self, sides: u8) -> DieRoll {
		DieRoll::new(self.0.next().expect("iterator is finished"), sides)
	}
}
