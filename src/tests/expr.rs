use crate::dice::roller::Max;
use crate::dice::Dice;
use crate::expr::Expr;
use crate::filter::Filter;

fn num(n: i32) -> Expr {
	Expr::Num(n)
}

fn add(a: Expr, b: Expr) -> Expr {
	Expr::Add(Box::new(a), Box::new(b))
}

fn sub(a: Expr, b: Expr) -> Expr {
	Expr::Sub(Box::new(a), Box::new(b))
}

#[test]
fn basic_addition() {
	let expr = add(num(42), num(69));
	let result = expr.eval(&mut Max).value().unwrap();
	assert_eq!(result.result, 111);
}

#[test]
fn basic_subtraction() {
	let expr = sub(num(42), num(69));
	let result = expr.eval(&mut Max).value().unwrap();
	assert_eq!(result.result, -27);
}

#[test]
fn basic_dice_math() {
	let expr = add(Expr::Dice(Dice::new(4, 6)), num(8));
	let result = expr.eval(&mut Max).value().unwrap();
	assert_eq!(result.result, 32);
}

#[test]
fn deterministic_exprs() {
	assert!(num(42).is_deterministic());
	assert!(Expr::Dice(Dice::new(4, 1)).is_deterministic());
	assert!(!Expr::Dice(Dice::new(4, 6)).is_deterministic());
	assert!(!Expr::Combat(2).is_deterministic());
	assert!(add(num(1), num(2)).is_deterministic());
	assert!(!add(num(1), Expr::Dice(Dice::new(1, 6))).is_deterministic());
	assert!(Expr::Filter(Filter::KeepHigh(1), Box::new(Expr::Dice(Dice::new(2, 1)))).is_deterministic());
}

#[test]
fn display_of_built_exprs() {
	let expr = add(
		Expr::Dice(Dice::new(1, 20)),
		Expr::Filter(
			Filter::KeepHigh(1),
			Box::new(Expr::Group(Box::new(add(
				Expr::Dice(Dice::new(1, 2)),
				Expr::Dice(Dice::new(1, 4)),
			)))),
		),
	);
	assert_eq!(expr.to_string(), "1d20 + (1d2 + 1d4)h");
}
