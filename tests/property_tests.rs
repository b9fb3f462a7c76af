//! Property-based tests for the parser.
//!
//! These tests use `proptest` to check parser invariants over generated inputs:
//!
//! 1. **Parser never panics** on arbitrary or near-valid input
//! 2. **Error positions lie within the input**
//! 3. **Rendered trees parse back** to the same tree

use proptest::prelude::*;

use startlang::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{BinaryOperator, ComparisonOperator, Condition, Identifier},
        statements::{
            AssignStmt, BlockStmt, DeclarationStmt, FnCallStmt, FnDeclStmt, IfStmt, Parameter,
            RepeatStmt, Step,
        },
        types::DataType,
    },
    parse,
};

// ============================================================================
// Near-valid generators
// ============================================================================

const FRAGMENTS: &[&str] = &[
    "Start",
    "End",
    "x = 1",
    "int y = x + 2 * 3",
    "z = (a - b) ** 2 ** c",
    "if (x < y) { x = y }",
    "if (x == 1) x = 2 else if (x != 1) x = 3",
    "rep (int i = 0; i < 10; ++i) { x = i }",
    "func int f(int a, float b) { c = a ret c }",
    "f(int a)",
    "{",
    "}",
    "(",
    ")",
    "else",
    "ret",
    ";",
    "**",
    "@",
];

fn near_valid_program() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..12)
        .prop_map(|fragments| fragments.join(" "))
}

// ============================================================================
// Tree generators
// ============================================================================

const RESERVED: &[&str] = &["else", "float", "func", "if", "int", "rep", "ret", "string"];

fn identifier() -> impl Strategy<Value = Identifier> {
    "[a-z_][a-z0-9_]{0,6}"
        .prop_filter("keywords are not identifiers", |name| {
            !RESERVED.contains(&name.as_str())
        })
        .prop_map(Identifier::new)
}

fn data_type() -> impl Strategy<Value = DataType> {
    prop_oneof![Just(DataType::Int), Just(DataType::String), Just(DataType::Float)]
}

fn binary_operator() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![
        Just(BinaryOperator::Add),
        Just(BinaryOperator::Sub),
        Just(BinaryOperator::Mul),
        Just(BinaryOperator::Div),
        Just(BinaryOperator::Pow),
    ]
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        identifier().prop_map(Expr::Symbol),
        "[0-9]{1,30}".prop_map(|digits| Expr::number(digits)),
    ];

    leaf.prop_recursive(4, 24, 2, |inner| {
        (inner.clone(), binary_operator(), inner)
            .prop_map(|(left, operator, right)| Expr::binary(left, operator, right))
    })
}

fn condition() -> impl Strategy<Value = Condition> {
    let operator = prop_oneof![
        Just(ComparisonOperator::Lt),
        Just(ComparisonOperator::Gt),
        Just(ComparisonOperator::Eq),
        Just(ComparisonOperator::Neq),
    ];

    (expr(), operator, expr()).prop_map(|(left, operator, right)| Condition {
        left,
        operator,
        right,
    })
}

fn assign() -> impl Strategy<Value = AssignStmt> {
    (identifier(), expr()).prop_map(|(target, value)| AssignStmt { target, value })
}

fn parameters() -> impl Strategy<Value = Vec<Parameter>> {
    prop::collection::vec(
        (data_type(), identifier()).prop_map(|(data_type, name)| Parameter { data_type, name }),
        1..4,
    )
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        identifier().prop_map(Step::Increment),
        identifier().prop_map(Step::Decrement),
        assign().prop_map(Step::Assign),
    ]
}

fn stmt() -> impl Strategy<Value = Stmt> {
    let leaf = prop_oneof![
        assign().prop_map(Stmt::Assign),
        (data_type(), assign())
            .prop_map(|(data_type, assign)| Stmt::Declaration(DeclarationStmt { data_type, assign })),
        (identifier(), parameters())
            .prop_map(|(name, arguments)| Stmt::FnCall(FnCallStmt { name, arguments })),
    ];

    leaf.prop_recursive(3, 24, 3, |inner| {
        let block = prop::collection::vec(inner, 1..3).prop_map(|body| BlockStmt { body });

        prop_oneof![
            prop::collection::vec((condition(), block.clone()), 1..3).prop_map(|arms| {
                let mut chain: Option<Box<IfStmt>> = None;
                for (condition, then_body) in arms.into_iter().rev() {
                    chain = Some(Box::new(IfStmt {
                        condition,
                        then_body,
                        else_body: chain,
                    }));
                }
                match chain {
                    Some(if_stmt) => Stmt::If(*if_stmt),
                    None => unreachable!("at least one arm is generated"),
                }
            }),
            (data_type(), assign(), condition(), step(), block.clone()).prop_map(
                |(data_type, init, condition, step, body)| {
                    Stmt::Repeat(RepeatStmt {
                        data_type,
                        init,
                        condition,
                        step,
                        body,
                    })
                }
            ),
            (data_type(), identifier(), parameters(), block, identifier()).prop_map(
                |(return_type, name, parameters, body, return_id)| {
                    Stmt::FnDecl(FnDeclStmt {
                        return_type,
                        name,
                        parameters,
                        body,
                        return_id,
                    })
                }
            ),
        ]
    })
}

fn program() -> impl Strategy<Value = Program> {
    prop::collection::vec(stmt(), 1..5).prop_map(|body| Program {
        body: BlockStmt { body },
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Parser never panics on arbitrary string input.
    #[test]
    fn parser_never_panics(input in "\\PC{0,300}") {
        let _ = parse(&input);
    }

    /// Parser never panics on mixtures of valid fragments and stray tokens.
    #[test]
    fn parser_never_panics_near_valid(input in near_valid_program()) {
        let _ = parse(&input);
    }

    /// Errors point at a position inside the input.
    #[test]
    fn error_positions_within_input(input in near_valid_program()) {
        if let Err(error) = parse(&input) {
            let position = error.get_position();
            prop_assert!(position.offset as usize <= input.len());
            prop_assert!(position.line as usize <= input.lines().count().max(1));
        }
    }

    /// Rendering a tree and parsing the text gives the tree back.
    #[test]
    fn rendered_program_round_trips(program in program()) {
        let source = program.to_string();
        let parsed = parse(&source);

        prop_assert!(parsed.is_ok(), "failed to parse rendered source:\n{}", source);
        prop_assert_eq!(parsed.unwrap(), program);
    }
}
