#![cfg(feature = "parse")]

//! Parser generators for dice notation, built on [chumsky].

use chumsky::prelude::*;

use crate::{
	dice::Dice,
	expr::Expr,
	filter::{Condition, Filter},
};

/// Generates a parser that specifically handles dice terms like "d20", "2d20", "3d6", etc.
pub fn dice_part<'src>() -> impl Parser<'src, &'src str, Dice, extra::Err<Rich<'src, char>>> + Clone {
	text::int::<&'src str, _, _>(10)
		.or_not()
		.then_ignore(just('d'))
		.then(text::int(10))
		.try_map(|(count, sides): (Option<&str>, &str), span| {
			let count = count
				.unwrap_or("1")
				.parse()
				.map_err(|err| Rich::custom(span, format!("Dice count: {}", err)))?;
			let sides = sides
				.parse()
				.map_err(|err| Rich::custom(span, format!("Dice sides: {}", err)))?;

			Ok(Dice::new(count, sides))
		})
}

/// Generates a parser that specifically handles dice terms like "d20", "2d20", "3d6", etc.
/// and expects end of input
pub fn dice<'src>() -> impl Parser<'src, &'src str, Dice, extra::Err<Rich<'src, char>>> + Clone {
	dice_part().then_ignore(end())
}

/// Generates a parser that handles postfix pool filters: keeps ("h", "kh2", "l", "kl2"),
/// thresholds (">=10", "<5"), and crit-aware thresholds ("->10", "<-10").
pub fn filter_part<'src>() -> impl Parser<'src, &'src str, Filter, extra::Err<Rich<'src, char>>> + Clone {
	// Optional count for keep filters, defaulting to 1 (e.g. kh == kh1)
	let keep_count = text::int::<&'src str, _, _>(10).or_not().try_map(|count, span| {
		count
			.unwrap_or("1")
			.parse::<u8>()
			.map_err(|err| Rich::custom(span, format!("Keep count: {}", err)))
	});

	// Threshold value for condition filters
	let threshold = text::int::<&'src str, _, _>(10).try_map(|val: &str, span| {
		val.parse::<u8>()
			.map_err(|err| Rich::custom(span, format!("Threshold: {}", err)))
	});

	choice((
		// Keep highest (e.g. h, kh, kh2)
		just('k')
			.or_not()
			.then_ignore(just('h'))
			.ignore_then(keep_count.clone())
			.map(Filter::KeepHigh),
		// Keep lowest (e.g. l, kl, kl2)
		just('k')
			.or_not()
			.then_ignore(just('l'))
			.ignore_then(keep_count)
			.map(Filter::KeepLow),
		// Crit-aware thresholds (e.g. ->10, <-10)
		just("->")
			.ignore_then(threshold.clone())
			.map(|val| Filter::crit(Condition::Gte(val))),
		just("<-")
			.ignore_then(threshold.clone())
			.map(|val| Filter::crit(Condition::Lte(val))),
		// Plain thresholds (e.g. >=10, <=10, >10, <10)
		just(">=")
			.ignore_then(threshold.clone())
			.map(|val| Filter::cond(Condition::Gte(val))),
		just("<=")
			.ignore_then(threshold.clone())
			.map(|val| Filter::cond(Condition::Lte(val))),
		just('>')
			.ignore_then(threshold.clone())
			.map(|val| Filter::cond(Condition::Gt(val))),
		just('<')
			.ignore_then(threshold)
			.map(|val| Filter::cond(Condition::Lt(val))),
	))
}

/// Generates a parser that handles full expressions including addition, subtraction, grouping
/// with parentheses, dice terms, combat dice, and postfix filters.
pub fn expr_part<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	// Helper function for operators
	let op = |c| just(c).padded();

	recursive(|expr| {
		// Parser for numbers
		let int = text::int(10).try_map(|s: &str, span| {
			s.parse()
				.map(Expr::Num)
				.map_err(|e| Rich::custom(span, format!("{}", e)))
		});

		// Parser for dice terms
		let dice = dice_part().map(Expr::Dice);

		// Parser for combat dice (e.g. c, 2c)
		let combat = text::int::<&'src str, _, _>(10)
			.or_not()
			.then_ignore(just('c'))
			.try_map(|count, span| {
				count
					.unwrap_or("1")
					.parse()
					.map(Expr::Combat)
					.map_err(|err| Rich::custom(span, format!("Combat dice count: {}", err)))
			});

		// Parser for expressions enclosed in parentheses
		let group = expr
			.delimited_by(just('('), just(')'))
			.map(|inner| Expr::Group(Box::new(inner)));

		let atom = dice.or(combat).or(int).or(group).padded();

		// Parser for postfix filters, which bind tighter than addition/subtraction and may be
		// separated from their term by whitespace (e.g. "2d20 h1")
		let filtered = atom.foldl(filter_part().padded().repeated(), |inner, filter| {
			Expr::Filter(filter, Box::new(inner))
		});

		// Parser for addition and subtraction operators
		filtered.clone().foldl(
			choice((
				op('+').to(Expr::Add as fn(_, _) -> _),
				op('-').to(Expr::Sub as fn(_, _) -> _),
			))
			.then(filtered)
			.repeated(),
			|lhs, (op, rhs)| op(Box::new(lhs), Box::new(rhs)),
		)
	})
}

/// Generates a parser that handles full expressions including addition, subtraction, grouping
/// with parentheses, dice terms, combat dice, and postfix filters, and expects end of input
pub fn expr<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	expr_part().then_ignore(end())
}

/// Error that can occur while parsing a dice term or expression from a string
#[derive(thiserror::Error, Debug, Clone)]
#[error("{details}")]
pub struct Error {
	/// Aggregated messages from the underlying parse errors
	pub details: String,
}

impl std::str::FromStr for Dice {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_lowercase();
		let result = dice().parse(&lc).into_result().map_err(|errs| Error {
			details: errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "),
		});
		result
	}
}

impl std::str::FromStr for Expr {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_lowercase();
		let result = expr().parse(&lc).into_result().map_err(|errs| Error {
			details: errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "),
		});
		result
	}
}
