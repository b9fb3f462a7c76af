//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! The parser pulls tokens on demand, uses a Pratt parser with NUD/LED
//! handlers for arithmetic and dispatches statements on their first token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for expression leaves
//! - LED (left denotation) handlers for infix operators
//! - Binding powers for operator precedence
//! - Data type handlers

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    grammar::grammar::{Nonterminal, Rule, GRAMMAR},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_body,
    types::{create_token_type_lookups, TypeHandler, TypeLookup},
};

/// How many expressions, bodies and `if` links may be open at once.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Source of tokens for the parser, usually a [`Lexer`].
pub type TokenStream<'a> = Box<dyn Iterator<Item = Result<Token, Error>> + 'a>;

/// The main parser structure that maintains parsing state.
///
/// Tokens are pulled from the stream only when the parser looks at them,
/// so a lexical error surfaces exactly when the parser reaches it.
pub struct Parser<'a> {
    /// Where tokens come from
    tokens: TokenStream<'a>,
    /// Tokens pulled but not yet consumed, at most two
    lookahead: VecDeque<Token>,
    /// Span of the last token pulled, used to place a synthesized EOF
    last_span: Span,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (leaf) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for data type keywords
    type_lookup: TypeLookup,
    /// Productions recognized so far, in bottom-up reduction order
    reductions: Vec<Rule>,
    /// Constructs currently open, bounded by [`MAX_NESTING_DEPTH`]
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser over any token source.
    ///
    /// The lookup tables start empty; [`parse`] and [`parse_source`] fill
    /// them before parsing.
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Result<Token, Error>>,
        I::IntoIter: 'a,
    {
        Parser {
            tokens: Box::new(tokens.into_iter()),
            lookahead: VecDeque::new(),
            last_span: Span::default(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_lookup: HashMap::new(),
            reductions: Vec::new(),
            depth: 0,
        }
    }

    /// Creates a Parser that lexes `source` lazily.
    pub fn from_source(source: &'a str) -> Self {
        Parser::new(Lexer::new(source))
    }

    fn pull(&mut self) -> Result<Token, Error> {
        let token = match self.tokens.next() {
            Some(token) => token?,
            None => MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: self.last_span.end,
                    end: self.last_span.end
                }
            ),
        };

        self.last_span = token.span;
        Ok(token)
    }

    /// Returns the token `n` positions ahead without consuming anything.
    pub fn peek(&mut self, n: usize) -> Result<&Token, Error> {
        while self.lookahead.len() <= n {
            let token = self.pull()?;
            self.lookahead.push_back(token);
        }

        Ok(&self.lookahead[n])
    }

    /// Returns the current token without advancing.
    pub fn current_token(&mut self) -> Result<&Token, Error> {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&mut self) -> Result<TokenKind, Error> {
        Ok(self.peek(0)?.kind)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        match self.lookahead.pop_front() {
            Some(token) => Ok(token),
            None => self.pull(),
        }
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// UnexpectedToken (or UnexpectedEndOfInput) error naming `expected_kind`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token()?;
        if token.kind != expected_kind {
            return Err(Error::unexpected(token, vec![expected_kind]));
        }

        self.advance()
    }

    /// Expects the token closing a body.
    ///
    /// A body stops at the first token that cannot start a statement, so a
    /// mismatch here means either another statement or `closing` was wanted.
    pub fn expect_body_end(&mut self, closing: TokenKind) -> Result<Token, Error> {
        let token = self.current_token()?;
        if token.kind != closing {
            let mut expected = GRAMMAR.first(Nonterminal::Concept).to_vec();
            expected.push(closing);
            expected.sort();
            return Err(Error::unexpected(token, expected));
        }

        self.advance()
    }

    /// Whether the current token can begin a statement.
    pub fn starts_concept(&mut self) -> Result<bool, Error> {
        let kind = self.current_token_kind()?;
        Ok(self.stmt_lookup.contains_key(&kind))
    }

    /// Opens a nested construct at the current token.
    ///
    /// # Errors
    ///
    /// Returns `NestingTooDeep` once [`MAX_NESTING_DEPTH`] constructs are
    /// already open.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.current_token()?;
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                token.span.start,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    /// Closes the construct opened by the matching [`Parser::enter`].
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Records that `rule` has been recognized.
    pub fn reduce(&mut self, rule: Rule) {
        trace!(rule = rule.id(), production = %GRAMMAR.production(rule), "reduce");
        self.reductions.push(rule);
    }

    /// Productions recognized so far, in the order a bottom-up parse of
    /// the same input would reduce them, unit productions included.
    pub fn reductions(&self) -> &[Rule] {
        &self.reductions
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Returns a reference to the data type lookup table.
    pub fn get_type_lookup(&self) -> &TypeLookup {
        &self.type_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation handler for a token.
    ///
    /// Leaves get no binding power: a token that can only start an
    /// expression ends the one before it.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a data type handler for a keyword.
    pub fn type_nud(&mut self, kind: TokenKind, type_fn: TypeHandler) {
        self.type_lookup.insert(kind, type_fn);
    }
}

fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    parser.expect(TokenKind::Start)?;
    let body = parse_body(parser)?;
    parser.expect_body_end(TokenKind::End)?;
    parser.expect(TokenKind::EOF)?;
    parser.reduce(Rule::Program);

    Ok(Program { body })
}

fn run(mut parser: Parser<'_>) -> (Parser<'_>, Result<Program, Error>) {
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    debug!("parsing program");
    let program = parse_program(&mut parser);

    match &program {
        Ok(program) => debug!(
            statements = program.body.len(),
            reductions = parser.reductions().len(),
            "parsed program"
        ),
        Err(error) => debug!(%error, "parse failed"),
    }

    (parser, program)
}

/// Parses a token vector into an Abstract Syntax Tree.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the Program or the first Error
pub fn parse(tokens: Vec<Token>) -> (Parser<'static>, Result<Program, Error>) {
    run(Parser::new(tokens.into_iter().map(Ok)))
}

/// Lexes and parses `source` in a single pass.
pub fn parse_source(source: &str) -> (Parser<'_>, Result<Program, Error>) {
    run(Parser::from_source(source))
}
