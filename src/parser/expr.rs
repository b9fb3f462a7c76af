use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryOperator, ComparisonOperator, Condition, Identifier, NumberExpr},
    },
    errors::errors::Error,
    grammar::grammar::{Nonterminal, Rule, GRAMMAR},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Grammar level a subexpression has reached.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
enum Level {
    Factor,
    Term,
    Expr,
}

impl Level {
    /// Level of an operator's left operand and of its result.
    fn of_operator(bp: BindingPower) -> Level {
        match bp {
            BindingPower::Default | BindingPower::Additive => Level::Expr,
            BindingPower::Multiplicative => Level::Term,
            BindingPower::Power => Level::Factor,
        }
    }

    /// Level the caller of `parse_expr(bp)` gets back.
    fn wanted_by(bp: BindingPower) -> Level {
        match bp {
            BindingPower::Default => Level::Expr,
            BindingPower::Additive => Level::Term,
            BindingPower::Multiplicative | BindingPower::Power => Level::Factor,
        }
    }
}

// Unit productions `<term> ::= <factor>` and `<expr> ::= <term>`
fn promote(parser: &mut Parser, mut level: Level, target: Level) -> Level {
    while level < target {
        level = match level {
            Level::Factor => {
                parser.reduce(Rule::TermFactor);
                Level::Term
            }
            Level::Term | Level::Expr => {
                parser.reduce(Rule::ExprTerm);
                Level::Expr
            }
        };
    }

    level
}

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter()?;

    // First parse NUD
    let token_kind = parser.current_token_kind()?;
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let token = parser.current_token()?;
        return Err(Error::unexpected(token, GRAMMAR.first(Nonterminal::Exp).to_vec()));
    };

    let mut left = nud(parser)?;
    parser.reduce(Rule::FactorExp);
    let mut level = Level::Factor;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind()?;
        let token_bp = match parser.get_bp_lookup().get(&token_kind) {
            Some(token_bp) if *token_bp > bp => *token_bp,
            _ => break,
        };

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            let token = parser.current_token()?;
            return Err(Error::unexpected(token, GRAMMAR.first(Nonterminal::Exp).to_vec()));
        };

        promote(parser, level, Level::of_operator(token_bp));
        left = led(parser, left, token_bp)?;
        level = Level::of_operator(token_bp);
    }

    promote(parser, level, Level::wanted_by(bp));
    parser.exit();

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    match token.kind {
        TokenKind::Number => {
            parser.reduce(Rule::Digit);
            parser.reduce(Rule::ExpDigit);

            Ok(Expr::Number(NumberExpr { value: token.value }))
        }
        TokenKind::Identifier => {
            parser.reduce(Rule::Id);
            parser.reduce(Rule::ExpId);

            Ok(Expr::Symbol(Identifier { value: token.value }))
        }
        _ => Err(Error::unexpected(
            &token,
            vec![TokenKind::Number, TokenKind::Identifier],
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.reduce(Rule::ExpParen);

    Ok(expr)
}

/// Left associative `+ - * /`.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let Some(operator) = BinaryOperator::from_token(operator_token.kind) else {
        return Err(Error::unexpected(
            &operator_token,
            vec![TokenKind::Dash, TokenKind::Star, TokenKind::Slash, TokenKind::Plus],
        ));
    };

    let right = parse_expr(parser, bp)?;
    parser.reduce(match operator {
        BinaryOperator::Add => Rule::ExprAdd,
        BinaryOperator::Sub => Rule::ExprSub,
        BinaryOperator::Mul => Rule::TermMul,
        BinaryOperator::Div => Rule::TermDiv,
        BinaryOperator::Pow => Rule::FactorPow,
    });

    Ok(Expr::binary(left, operator, right))
}

/// `**` binds its right operand at one level lower, so `a ** b ** c`
/// groups as `a ** (b ** c)`.
pub fn parse_power_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::StarStar)?;
    let right = parse_expr(parser, BindingPower::Multiplicative)?;
    parser.reduce(Rule::FactorPow);

    Ok(Expr::binary(left, BinaryOperator::Pow, right))
}

/// `<expr> <op> <expr>`. Comparisons never chain and never nest inside
/// arithmetic, so they sit outside the Pratt tables.
pub fn parse_condition(parser: &mut Parser) -> Result<Condition, Error> {
    let left = parse_expr(parser, BindingPower::Default)?;

    let token = parser.current_token()?;
    let Some(operator) = ComparisonOperator::from_token(token.kind) else {
        return Err(Error::unexpected(token, GRAMMAR.first(Nonterminal::Op).to_vec()));
    };
    parser.advance()?;
    parser.reduce(match operator {
        ComparisonOperator::Lt => Rule::OpLt,
        ComparisonOperator::Gt => Rule::OpGt,
        ComparisonOperator::Eq => Rule::OpEq,
        ComparisonOperator::Neq => Rule::OpNeq,
    });

    let right = parse_expr(parser, BindingPower::Default)?;
    parser.reduce(Rule::Condition);

    Ok(Condition {
        left,
        operator,
        right,
    })
}
