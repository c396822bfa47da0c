use tracing::{debug, warn};

use crate::context::{Context, Pass};
use crate::error::{Error, Range};
use crate::expr::Evaluate;
use crate::output::Memory;
use crate::tokens::Tokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch {
	Short,
	Long,
}

impl Branch {
	fn len(self) -> i64 {
		match self {
			Branch::Short => 2,
			Branch::Long => 3,
		}
	}

	fn range(self) -> Range {
		match self {
			Branch::Short => Range::Branch,
			Branch::Long => Range::LongBranch,
		}
	}

	fn mask(self) -> i64 {
		match self {
			Branch::Short => 0xFF,
			Branch::Long => 0xFFFF,
		}
	}
}

/// Evaluate one expression.
///
/// On the first pass an unresolved expression is replaced by `0` and the rest of the operand
/// is discarded; on the second pass the failure is returned.
pub(crate) fn value(
	ctx: &Context,
	tokens: &mut dyn Tokens,
	eval: &mut dyn Evaluate,
) -> Result<i64, Error> {
	match eval.evaluate(tokens) {
		Ok(value) => Ok(value),
		Err(e) if ctx.pass == Pass::First => {
			warn!("deferring unresolved operand: {e}");
			skip_operand(tokens);
			Ok(0)
		}
		Err(e) => Err(e.into()),
	}
}

/// Discard tokens up to the end of the current operand expression.
///
/// Stops in front of a top-level `,`, an unmatched `)` or `]`, or the end of line.
pub(crate) fn skip_operand(tokens: &mut dyn Tokens) {
	let mut depth = 0usize;
	loop {
		let tok = tokens.next_token();
		if tok.is_eol() {
			tokens.push_back(tok);
			break;
		}
		if tok.is('(') || tok.is('[') {
			depth += 1;
		} else if tok.is(')') || tok.is(']') || tok.is(',') {
			if depth == 0 {
				tokens.push_back(tok);
				break;
			}
			if !tok.is(',') {
				depth -= 1;
			}
		}
	}
}

/// PC-relative displacement, computed only once addresses are final.
pub(crate) fn branch(ctx: &Context, target: i64, kind: Branch) -> Result<i64, Error> {
	if !ctx.pass.is_final() {
		return Ok(target);
	}
	let disp = target - (ctx.pc() + kind.len());
	let disp = kind.range().check(disp)?;
	Ok(disp & kind.mask())
}

/// Forward-label heuristic: on the second pass, three zero bytes following the opcode are
/// taken as the placeholder left by the first pass for a label that was not yet defined.
///
/// A genuine reference to address zero is indistinguishable from this.
pub(crate) fn is_forward(ctx: &Context, memory: &dyn Memory) -> bool {
	if !ctx.pass.is_final() {
		return false;
	}
	let forward = (1..=3)
		.all(|offset| memory.read_byte(ctx.address.wrapping_add(offset)) == 0);
	if forward {
		debug!("forward label assumed at ${:06X}", ctx.address);
	}
	forward
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::ExprError;
	use crate::testing::{Image, Line};
	use crate::tokens::Token;

	struct Fails;

	impl Evaluate for Fails {
		fn evaluate(&mut self, tokens: &mut dyn Tokens) -> Result<i64, ExprError> {
			let tok = tokens.next_token();
			Err(ExprError::Undefined(tok.text))
		}
	}

	fn rest(line: &mut Line) -> Vec<String> {
		let mut out = vec![];
		loop {
			let tok: Token = line.next_token();
			if tok.is_eol() {
				break out;
			}
			out.push(tok.text.to_string());
		}
	}

	#[test]
	fn skip_stops_at_comma() {
		let mut line = Line::lex("lbl + 2 * (3, 4)), x").unwrap();
		skip_operand(&mut line);
		assert_eq!(rest(&mut line), [")", ",", "x"]);
	}

	#[test]
	fn skip_stops_at_bracket() {
		let mut line = Line::lex("a + b], y").unwrap();
		skip_operand(&mut line);
		assert_eq!(rest(&mut line), ["]", ",", "y"]);
	}

	#[test]
	fn skip_to_eol() {
		let mut line = Line::lex("a b c").unwrap();
		skip_operand(&mut line);
		assert!(rest(&mut line).is_empty());
	}

	#[test]
	fn first_pass_tolerates_failure() {
		let ctx = Context::new(Pass::First, 0);
		let mut line = Line::lex("fwd + 1, x").unwrap();
		assert_eq!(value(&ctx, &mut line, &mut Fails), Ok(0));
		assert_eq!(rest(&mut line), [",", "x"]);
	}

	#[test]
	fn second_pass_fails() {
		let ctx = Context::new(Pass::Second, 0);
		let mut line = Line::lex("fwd").unwrap();
		assert_eq!(
			value(&ctx, &mut line, &mut Fails),
			Err(Error::Expression(ExprError::Undefined("fwd".into())))
		);
	}

	#[test]
	fn branch_offsets() {
		let ctx = Context::new(Pass::Second, 0x1000);
		assert_eq!(branch(&ctx, 0x1002, Branch::Short), Ok(0x00));
		assert_eq!(branch(&ctx, 0x1000, Branch::Short), Ok(0xFE));
		assert_eq!(branch(&ctx, 0x1081, Branch::Short), Ok(0x7F));
		assert_eq!(branch(&ctx, 0x0F82, Branch::Short), Ok(0x80));
		assert_eq!(branch(&ctx, 0x1082, Branch::Short), Err(Error::Range(Range::Branch, 128)));
		assert_eq!(branch(&ctx, 0x0F81, Branch::Short), Err(Error::Range(Range::Branch, -129)));
		assert_eq!(branch(&ctx, 0x0FFF, Branch::Long), Ok(0xFFFC));
		assert_eq!(branch(&ctx, 0x9002, Branch::Long), Ok(0x7FFF));
		assert_eq!(branch(&ctx, 0x9003, Branch::Long), Err(Error::Range(Range::LongBranch, 0x8000)));
	}

	#[test]
	fn branch_untouched_on_first_pass() {
		let ctx = Context::new(Pass::First, 0x1000);
		assert_eq!(branch(&ctx, 0x9000, Branch::Short), Ok(0x9000));
	}

	#[test]
	fn forward_needs_three_zero_bytes() {
		let mut image = Image::default();
		image.write(0x200, &[0xAD, 0x00, 0x00, 0x00]);
		image.write(0x300, &[0xAD, 0x00, 0x00, 0x60]);
		assert!(is_forward(&Context::new(Pass::Second, 0x200), &image));
		assert!(!is_forward(&Context::new(Pass::Second, 0x300), &image));
		assert!(!is_forward(&Context::new(Pass::First, 0x200), &image));
	}
}
