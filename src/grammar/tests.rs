use crate::lexer::tokens::TokenKind;

use super::grammar::{Nonterminal, Rule, Symbol, GRAMMAR};

#[test]
fn test_production_ids_match_table_order() {
    let productions = GRAMMAR.productions();

    assert_eq!(productions.len(), 44);
    for (index, production) in productions.iter().enumerate() {
        assert_eq!(production.rule.id(), index);
        assert_eq!(GRAMMAR.production(production.rule), production);
    }
}

#[test]
fn test_production_display() {
    assert_eq!(
        GRAMMAR.production(Rule::Program).to_string(),
        "<program> ::= Start <body> End"
    );
    assert_eq!(
        GRAMMAR.production(Rule::ExprAdd).to_string(),
        "<expr> ::= <expr> '+' <term>"
    );
    assert_eq!(
        GRAMMAR.production(Rule::FactorPow).to_string(),
        "<factor> ::= <factor> '**' <exp>"
    );
    assert_eq!(GRAMMAR.production(Rule::Digit).to_string(), "<digit> ::= Digit");
    assert_eq!(GRAMMAR.production(Rule::Id).to_string(), "<id> ::= Id");
    assert_eq!(
        GRAMMAR.production(Rule::StepIncrement).to_string(),
        "<step> ::= '++' <id>"
    );
}

#[test]
fn test_first_sets() {
    assert_eq!(
        GRAMMAR.first(Nonterminal::Exp),
        &[TokenKind::Number, TokenKind::Identifier, TokenKind::OpenParen]
    );
    assert_eq!(GRAMMAR.first(Nonterminal::Expr), GRAMMAR.first(Nonterminal::Exp));
    assert_eq!(
        GRAMMAR.first(Nonterminal::Concept),
        &[
            TokenKind::Identifier,
            TokenKind::Float,
            TokenKind::Func,
            TokenKind::If,
            TokenKind::Int,
            TokenKind::Rep,
            TokenKind::String,
        ]
    );
    assert_eq!(GRAMMAR.first(Nonterminal::Body), GRAMMAR.first(Nonterminal::Concept));
    assert_eq!(
        GRAMMAR.first(Nonterminal::Step),
        &[TokenKind::Identifier, TokenKind::MinusMinus, TokenKind::PlusPlus]
    );
    assert_eq!(GRAMMAR.first(Nonterminal::Program), &[TokenKind::Start]);
}

#[test]
fn test_every_nonterminal_has_rules() {
    for nonterminal in Nonterminal::ALL {
        assert!(
            GRAMMAR.rules_for(nonterminal).count() > 0,
            "{} has no productions",
            nonterminal.name()
        );
        assert!(!GRAMMAR.first(nonterminal).is_empty());
    }

    assert_eq!(GRAMMAR.rules_for(Nonterminal::Op).count(), 4);
    assert_eq!(GRAMMAR.rules_for(Nonterminal::Concept).count(), 6);
}

#[test]
fn test_terminals() {
    let terminals = GRAMMAR.terminals();

    assert!(terminals.contains(&TokenKind::StarStar));
    assert!(terminals.contains(&TokenKind::Ret));
    assert!(!terminals.contains(&TokenKind::EOF));
    // Every token kind but EOF is used somewhere in the grammar
    assert_eq!(terminals.len(), 30);
}

#[test]
fn test_symbol_display() {
    assert_eq!(Symbol::Terminal(TokenKind::If).to_string(), "if");
    assert_eq!(Symbol::Terminal(TokenKind::Semicolon).to_string(), "';'");
    assert_eq!(Symbol::Nonterminal(Nonterminal::Repeat).to_string(), "<repeat>");
}
