use std::{
    collections::{BTreeSet, HashMap},
    fmt::Display,
};

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

lazy_static! {
    /// The language's production table, built on first use.
    pub static ref GRAMMAR: Grammar = Grammar::new();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nonterminal {
    Program,
    Body,
    Concept,
    Assign,
    Id,
    Expr,
    Term,
    Factor,
    Exp,
    Digit,
    If,
    Condition,
    Op,
    Repeat,
    Data,
    Step,
    Declaration,
    FunctionDecl,
    Name,
    DataType,
    Parameter,
    FunctionCall,
}

impl Nonterminal {
    pub const ALL: [Nonterminal; 22] = [
        Nonterminal::Program,
        Nonterminal::Body,
        Nonterminal::Concept,
        Nonterminal::Assign,
        Nonterminal::Id,
        Nonterminal::Expr,
        Nonterminal::Term,
        Nonterminal::Factor,
        Nonterminal::Exp,
        Nonterminal::Digit,
        Nonterminal::If,
        Nonterminal::Condition,
        Nonterminal::Op,
        Nonterminal::Repeat,
        Nonterminal::Data,
        Nonterminal::Step,
        Nonterminal::Declaration,
        Nonterminal::FunctionDecl,
        Nonterminal::Name,
        Nonterminal::DataType,
        Nonterminal::Parameter,
        Nonterminal::FunctionCall,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Nonterminal::Program => "<program>",
            Nonterminal::Body => "<body>",
            Nonterminal::Concept => "<concept>",
            Nonterminal::Assign => "<assign>",
            Nonterminal::Id => "<id>",
            Nonterminal::Expr => "<expr>",
            Nonterminal::Term => "<term>",
            Nonterminal::Factor => "<factor>",
            Nonterminal::Exp => "<exp>",
            Nonterminal::Digit => "<digit>",
            Nonterminal::If => "<if>",
            Nonterminal::Condition => "<condition>",
            Nonterminal::Op => "<op>",
            Nonterminal::Repeat => "<repeat>",
            Nonterminal::Data => "<data>",
            Nonterminal::Step => "<step>",
            Nonterminal::Declaration => "<declaration>",
            Nonterminal::FunctionDecl => "<function_decl>",
            Nonterminal::Name => "<name>",
            Nonterminal::DataType => "<data_type>",
            Nonterminal::Parameter => "<parameter>",
            Nonterminal::FunctionCall => "<function_call>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(TokenKind),
    Nonterminal(Nonterminal),
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Nonterminal(nonterminal) => write!(f, "{}", nonterminal.name()),
            Symbol::Terminal(TokenKind::EOF) => write!(f, "(EOF)"),
            Symbol::Terminal(TokenKind::Identifier) => write!(f, "Id"),
            Symbol::Terminal(TokenKind::Number) => write!(f, "Digit"),
            Symbol::Terminal(kind) if kind.is_reserved() => {
                write!(f, "{}", kind.lexeme().unwrap_or_default())
            }
            Symbol::Terminal(kind) => write!(f, "'{}'", kind.lexeme().unwrap_or_default()),
        }
    }
}

/// One variant per production, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Program,
    BodySingle,
    BodyCons,
    ConceptAssign,
    ConceptDeclaration,
    ConceptIf,
    ConceptRepeat,
    ConceptFunctionDecl,
    ConceptFunctionCall,
    Assign,
    Id,
    ExprAdd,
    ExprSub,
    ExprTerm,
    TermMul,
    TermDiv,
    TermFactor,
    FactorPow,
    FactorExp,
    ExpParen,
    ExpId,
    ExpDigit,
    Digit,
    IfThen,
    IfElse,
    Condition,
    OpLt,
    OpGt,
    OpEq,
    OpNeq,
    Repeat,
    DataInt,
    DataString,
    DataFloat,
    StepDecrement,
    StepIncrement,
    StepAssign,
    Declaration,
    FunctionDecl,
    Name,
    DataType,
    ParameterLast,
    ParameterCons,
    FunctionCall,
}

impl Rule {
    pub const ALL: [Rule; 44] = [
        Rule::Program,
        Rule::BodySingle,
        Rule::BodyCons,
        Rule::ConceptAssign,
        Rule::ConceptDeclaration,
        Rule::ConceptIf,
        Rule::ConceptRepeat,
        Rule::ConceptFunctionDecl,
        Rule::ConceptFunctionCall,
        Rule::Assign,
        Rule::Id,
        Rule::ExprAdd,
        Rule::ExprSub,
        Rule::ExprTerm,
        Rule::TermMul,
        Rule::TermDiv,
        Rule::TermFactor,
        Rule::FactorPow,
        Rule::FactorExp,
        Rule::ExpParen,
        Rule::ExpId,
        Rule::ExpDigit,
        Rule::Digit,
        Rule::IfThen,
        Rule::IfElse,
        Rule::Condition,
        Rule::OpLt,
        Rule::OpGt,
        Rule::OpEq,
        Rule::OpNeq,
        Rule::Repeat,
        Rule::DataInt,
        Rule::DataString,
        Rule::DataFloat,
        Rule::StepDecrement,
        Rule::StepIncrement,
        Rule::StepAssign,
        Rule::Declaration,
        Rule::FunctionDecl,
        Rule::Name,
        Rule::DataType,
        Rule::ParameterLast,
        Rule::ParameterCons,
        Rule::FunctionCall,
    ];

    /// Index of the rule in the production table.
    pub fn id(&self) -> usize {
        *self as usize
    }

    /// Head and body of the production.
    pub fn production(&self) -> (Nonterminal, Vec<Symbol>) {
        use Nonterminal as N;
        use Symbol::{Nonterminal as Nt, Terminal as T};

        match self {
            Rule::Program => (N::Program, vec![T(TokenKind::Start), Nt(N::Body), T(TokenKind::End)]),
            Rule::BodySingle => (N::Body, vec![Nt(N::Concept)]),
            Rule::BodyCons => (N::Body, vec![Nt(N::Concept), Nt(N::Body)]),
            Rule::ConceptAssign => (N::Concept, vec![Nt(N::Assign)]),
            Rule::ConceptDeclaration => (N::Concept, vec![Nt(N::Declaration)]),
            Rule::ConceptIf => (N::Concept, vec![Nt(N::If)]),
            Rule::ConceptRepeat => (N::Concept, vec![Nt(N::Repeat)]),
            Rule::ConceptFunctionDecl => (N::Concept, vec![Nt(N::FunctionDecl)]),
            Rule::ConceptFunctionCall => (N::Concept, vec![Nt(N::FunctionCall)]),
            Rule::Assign => (N::Assign, vec![Nt(N::Id), T(TokenKind::Assignment), Nt(N::Expr)]),
            Rule::Id => (N::Id, vec![T(TokenKind::Identifier)]),
            Rule::ExprAdd => (N::Expr, vec![Nt(N::Expr), T(TokenKind::Plus), Nt(N::Term)]),
            Rule::ExprSub => (N::Expr, vec![Nt(N::Expr), T(TokenKind::Dash), Nt(N::Term)]),
            Rule::ExprTerm => (N::Expr, vec![Nt(N::Term)]),
            Rule::TermMul => (N::Term, vec![Nt(N::Term), T(TokenKind::Star), Nt(N::Factor)]),
            Rule::TermDiv => (N::Term, vec![Nt(N::Term), T(TokenKind::Slash), Nt(N::Factor)]),
            Rule::TermFactor => (N::Term, vec![Nt(N::Factor)]),
            Rule::FactorPow => (N::Factor, vec![Nt(N::Factor), T(TokenKind::StarStar), Nt(N::Exp)]),
            Rule::FactorExp => (N::Factor, vec![Nt(N::Exp)]),
            Rule::ExpParen => (
                N::Exp,
                vec![T(TokenKind::OpenParen), Nt(N::Expr), T(TokenKind::CloseParen)],
            ),
            Rule::ExpId => (N::Exp, vec![Nt(N::Id)]),
            Rule::ExpDigit => (N::Exp, vec![Nt(N::Digit)]),
            Rule::Digit => (N::Digit, vec![T(TokenKind::Number)]),
            Rule::IfThen => (
                N::If,
                vec![
                    T(TokenKind::If),
                    T(TokenKind::OpenParen),
                    Nt(N::Condition),
                    T(TokenKind::CloseParen),
                    Nt(N::Body),
                ],
            ),
            Rule::IfElse => (
                N::If,
                vec![
                    T(TokenKind::If),
                    T(TokenKind::OpenParen),
                    Nt(N::Condition),
                    T(TokenKind::CloseParen),
                    Nt(N::Body),
                    T(TokenKind::Else),
                    Nt(N::If),
                ],
            ),
            Rule::Condition => (N::Condition, vec![Nt(N::Expr), Nt(N::Op), Nt(N::Expr)]),
            Rule::OpLt => (N::Op, vec![T(TokenKind::Less)]),
            Rule::OpGt => (N::Op, vec![T(TokenKind::Greater)]),
            Rule::OpEq => (N::Op, vec![T(TokenKind::Equals)]),
            Rule::OpNeq => (N::Op, vec![T(TokenKind::NotEquals)]),
            Rule::Repeat => (
                N::Repeat,
                vec![
                    T(TokenKind::Rep),
                    T(TokenKind::OpenParen),
                    Nt(N::Data),
                    Nt(N::Assign),
                    T(TokenKind::Semicolon),
                    Nt(N::Condition),
                    T(TokenKind::Semicolon),
                    Nt(N::Step),
                    T(TokenKind::CloseParen),
                    T(TokenKind::OpenCurly),
                    Nt(N::Body),
                    T(TokenKind::CloseCurly),
                ],
            ),
            Rule::DataInt => (N::Data, vec![T(TokenKind::Int)]),
            Rule::DataString => (N::Data, vec![T(TokenKind::String)]),
            Rule::DataFloat => (N::Data, vec![T(TokenKind::Float)]),
            Rule::StepDecrement => (N::Step, vec![T(TokenKind::MinusMinus), Nt(N::Id)]),
            Rule::StepIncrement => (N::Step, vec![T(TokenKind::PlusPlus), Nt(N::Id)]),
            Rule::StepAssign => (N::Step, vec![Nt(N::Assign)]),
            Rule::Declaration => (N::Declaration, vec![Nt(N::Data), Nt(N::Assign)]),
            Rule::FunctionDecl => (
                N::FunctionDecl,
                vec![
                    T(TokenKind::Func),
                    Nt(N::DataType),
                    Nt(N::Name),
                    T(TokenKind::OpenParen),
                    Nt(N::Parameter),
                    T(TokenKind::CloseParen),
                    T(TokenKind::OpenCurly),
                    Nt(N::Body),
                    T(TokenKind::Ret),
                    Nt(N::Id),
                    T(TokenKind::CloseCurly),
                ],
            ),
            Rule::Name => (N::Name, vec![Nt(N::Id)]),
            Rule::DataType => (N::DataType, vec![Nt(N::Data)]),
            Rule::ParameterLast => (N::Parameter, vec![Nt(N::Data), Nt(N::Id)]),
            Rule::ParameterCons => (
                N::Parameter,
                vec![Nt(N::Data), Nt(N::Id), T(TokenKind::Comma), Nt(N::Parameter)],
            ),
            Rule::FunctionCall => (
                N::FunctionCall,
                vec![
                    Nt(N::Name),
                    T(TokenKind::OpenParen),
                    Nt(N::Parameter),
                    T(TokenKind::CloseParen),
                ],
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub rule: Rule,
    pub head: Nonterminal,
    pub body: Vec<Symbol>,
}

impl Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ::=", self.head.name())?;
        for symbol in &self.body {
            write!(f, " {}", symbol)?;
        }
        Ok(())
    }
}

/// Static grammar data: the production table and the FIRST set of every
/// nonterminal.
#[derive(Debug)]
pub struct Grammar {
    productions: Vec<Production>,
    first: HashMap<Nonterminal, Vec<TokenKind>>,
}

impl Grammar {
    fn new() -> Grammar {
        let productions = Rule::ALL
            .iter()
            .map(|rule| {
                let (head, body) = rule.production();
                Production {
                    rule: *rule,
                    head,
                    body,
                }
            })
            .collect::<Vec<_>>();

        let first = compute_first_sets(&productions);

        Grammar { productions, first }
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn production(&self, rule: Rule) -> &Production {
        &self.productions[rule.id()]
    }

    pub fn rules_for(&self, head: Nonterminal) -> impl Iterator<Item = &Production> {
        self.productions
            .iter()
            .filter(move |production| production.head == head)
    }

    /// Tokens that can begin a phrase derived from `nonterminal`, in
    /// `TokenKind` order.
    pub fn first(&self, nonterminal: Nonterminal) -> &[TokenKind] {
        self.first
            .get(&nonterminal)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every terminal that appears in some production.
    pub fn terminals(&self) -> BTreeSet<TokenKind> {
        self.productions
            .iter()
            .flat_map(|production| production.body.iter())
            .filter_map(|symbol| match symbol {
                Symbol::Terminal(kind) => Some(*kind),
                Symbol::Nonterminal(_) => None,
            })
            .collect()
    }
}

// No production derives the empty string, so FIRST of a body is FIRST of
// its leading symbol.
fn compute_first_sets(productions: &[Production]) -> HashMap<Nonterminal, Vec<TokenKind>> {
    let mut first: HashMap<Nonterminal, BTreeSet<TokenKind>> = HashMap::new();

    loop {
        let mut changed = false;

        for production in productions {
            let additions = match production.body.first() {
                Some(Symbol::Terminal(kind)) => BTreeSet::from([*kind]),
                Some(Symbol::Nonterminal(nonterminal)) => {
                    first.get(nonterminal).cloned().unwrap_or_default()
                }
                None => BTreeSet::new(),
            };

            let entry = first.entry(production.head).or_default();
            for kind in additions {
                changed |= entry.insert(kind);
            }
        }

        if !changed {
            break;
        }
    }

    first
        .into_iter()
        .map(|(nonterminal, kinds)| (nonterminal, kinds.into_iter().collect()))
        .collect()
}
