use crate::dice::roller::{Iter, Max, Val};
use crate::dice::{CombatRoll, DieRoll};
use crate::eval::{CalcError, Computation, Rolled, Value};
use crate::expr::Expr;
use crate::filter::{Condition, Filter};

fn eval_max(input: &str) -> Rolled {
	input.parse::<Expr>().unwrap().eval(&mut Max)
}

fn die(val: u8, sides: u8) -> Computation {
	Computation::Die(DieRoll::new(val, sides))
}

fn d20s(vals: &[u8]) -> Vec<Computation> {
	vals.iter().map(|&val| die(val, 20)).collect()
}

#[test]
fn pool_sizes() {
	assert_eq!(eval_max("1d6").len(), 1);
	assert_eq!(eval_max("2d20").len(), 2);
	assert_eq!(eval_max("1d20 + 2d4").len(), 3);
}

#[test]
fn max_roll_totals() {
	let expected = [
		("1d6", 6),
		("2d20", 40),
		("1d20 + 2d4", 28),
		("1d20 + (1d2 + 1d4 + 1d6)", 32),
		// Postfix filters
		("2d20 h1", 20),
		("1d20 + (1d2 + 1d4 + 1d6)kh1", 26),
		// Funny groupings: bare dice flatten into the filtered pool, while an inner
		// parenthesized group stays together as one member
		("1d20 + (1d2 + 2d6)kh1", 26),
		("1d20 + (1d2 + 1d4 + 2d6)kh1", 26),
		("1d20 + (1d2 + (2d6))kh1", 32),
		("1d20 + (1d2 + 1d4 + (2d6))kh1", 32),
		// Constant modifiers
		("2d20 + 2", 42),
		("3d20 - 42", 18),
		("(1d6 + 10) + 2", 18),
		("(1d9 + (1d8 + 2))h", 10),
	];

	for (input, total) in expected {
		assert_eq!(eval_max(input).value().unwrap().result, total, "total of {input}");
	}
}

#[test]
fn kept_indexes() {
	let expected: [(&str, &[usize]); 3] = [
		("2d20 h1", &[0]),
		("(1d2 + 1d4 + 1d6 + 1d8)kh2", &[2, 3]),
		// Ties go to the earlier member
		("(1d2 + 1d8 + 1d4 + 1d6 + 1d6)kh2", &[1, 3]),
	];

	for (input, kept) in expected {
		assert_eq!(eval_max(input).kept_indexes(), kept, "kept members of {input}");
	}
}

#[test]
fn filtered_groups_stay_nested() {
	let result = eval_max("2d20 + (1d2 + 1d4) kh1");
	let expected = Rolled::plain(vec![
		die(20, 20),
		die(20, 20),
		Computation::Group(Box::new(Rolled::filtered(
			vec![die(2, 2), die(4, 4)],
			Filter::KeepHigh(1),
		))),
	]);
	assert_eq!(result, expected);
}

#[test]
fn keep_highest() {
	let rolls = Rolled::filtered(d20s(&[2, 1, 1]), Filter::KeepHigh(1));
	assert_eq!(rolls.value().unwrap().result, 2);

	let rolls = Rolled::filtered(d20s(&[2, 3, 1]), Filter::KeepHigh(2));
	assert_eq!(rolls.value().unwrap().result, 5);
}

#[test]
fn keep_lowest() {
	let rolls = Rolled::filtered(d20s(&[2, 1, 5]), Filter::KeepLow(1));
	assert_eq!(rolls.value().unwrap().result, 1);

	let rolls = Rolled::filtered(d20s(&[2, 1, 5]), Filter::KeepLow(2));
	assert_eq!(rolls.value().unwrap().result, 3);
}

#[test]
fn keep_count_beyond_pool_keeps_everything() {
	let rolls = Rolled::filtered(d20s(&[2, 3]), Filter::KeepHigh(5));
	assert_eq!(rolls.value().unwrap().result, 5);
	assert_eq!(rolls.kept_indexes(), vec![0, 1]);
}

#[test]
fn combat_dice_sum() {
	let rolls = Rolled::plain(vec![
		Computation::Combat(CombatRoll { val: 2, effect: false }),
		Computation::Combat(CombatRoll { val: 1, effect: true }),
		Computation::Combat(CombatRoll { val: 0, effect: false }),
		Computation::Combat(CombatRoll { val: 1, effect: true }),
	]);
	assert_eq!(rolls.value().unwrap(), Value::new(4, 2));
}

#[test]
fn combat_dice_from_premade_rolls() {
	let mut roller = Iter::new(vec![1, 2, 3, 4, 5, 6]);
	let rolls = "6c".parse::<Expr>().unwrap().eval(&mut roller);
	assert_eq!(rolls.value().unwrap(), Value::new(5, 2));
}

#[test]
fn threshold_counts_hits() {
	let pool = d20s(&[5, 15, 10, 20, 1]);
	let rolls = Rolled::filtered(pool, Filter::cond(Condition::Lte(10)));
	assert_eq!(rolls.value().unwrap(), Value::new(3, 0));
}

#[test]
fn crit_threshold_counts_crits_double() {
	let pool = d20s(&[5, 15, 10, 20, 1]);
	let rolls = Rolled::filtered(pool, Filter::crit(Condition::Lte(10)));
	// The natural 1 counts double; the natural 20 misses and becomes an effect
	assert_eq!(rolls.value().unwrap(), Value::new(4, 1));
}

#[test]
fn crit_threshold_extremes() {
	assert_eq!(eval_max("3d20->10").value().unwrap(), Value::new(6, 0));
	assert_eq!(eval_max("3d20<-10").value().unwrap(), Value::new(0, 3));

	let mut low = Val(1);
	let expr = "3d20->10".parse::<Expr>().unwrap();
	assert_eq!(expr.eval(&mut low).value().unwrap(), Value::new(0, 3));
	let expr = "3d20<-10".parse::<Expr>().unwrap();
	assert_eq!(expr.eval(&mut low).value().unwrap(), Value::new(6, 0));
}

#[test]
fn subtraction_negates_the_right_side() {
	let rolls = eval_max("20 - 1d4");
	assert_eq!(rolls.value().unwrap().result, 16);
	assert_eq!(rolls.to_string(), "20 - 4");
}

#[test]
fn negated_groups_keep_their_effects() {
	// Roll order is left to right: the d20 first, then the two combat d6s
	let mut roller = Iter::new(vec![10, 6, 6]);
	let rolls = "1d20 - 2c".parse::<Expr>().unwrap().eval(&mut roller);
	assert_eq!(rolls.value().unwrap(), Value::new(8, 2));
}

#[test]
fn totalling_overflow() {
	let rolls = Rolled::plain(vec![Computation::Num(i32::MAX), Computation::Num(1)]);
	let result = rolls.value();
	assert!(matches!(result, Err(CalcError::Overflow(..))));
}

#[test]
fn value_display() {
	assert_eq!(Value::new(4, 0).to_string(), "4");
	assert_eq!(Value::new(4, 2).to_string(), "4{2}");
	assert_eq!(Value::new(0, 3).to_string(), "0{3}");
}
