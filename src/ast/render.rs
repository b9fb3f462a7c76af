//! Canonical source printer.
//!
//! Turns a [`Program`] back into source text that parses to an identical
//! tree. Output is normalized: two-space indentation, one statement per
//! line, braces around every `if` body and the minimum parentheses needed
//! to keep the tree's grouping.

use super::{
    ast::{Expr, Program, Stmt},
    expressions::{BinaryOperator, Condition},
    statements::{AssignStmt, BlockStmt, IfStmt, Parameter, Step},
};

pub fn render(program: &Program) -> String {
    let mut renderer = Renderer::default();
    renderer.line("Start");
    renderer.block(&program.body);
    renderer.line("End");
    renderer.out
}

pub fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Symbol(identifier) => identifier.value.clone(),
        Expr::Number(number) => number.value.clone(),
        Expr::Binary(binary) => format!(
            "{} {} {}",
            render_operand(&binary.left, binary.operator, false),
            binary.operator.symbol(),
            render_operand(&binary.right, binary.operator, true)
        ),
    }
}

fn render_operand(operand: &Expr, parent: BinaryOperator, is_right: bool) -> String {
    let text = render_expr(operand);
    let Expr::Binary(child) = operand else {
        return text;
    };

    let needs_parens = child.operator.precedence() < parent.precedence()
        || (child.operator.precedence() == parent.precedence()
            && is_right != parent.is_right_associative());

    if needs_parens {
        format!("({})", text)
    } else {
        text
    }
}

pub fn render_condition(condition: &Condition) -> String {
    format!(
        "{} {} {}",
        render_expr(&condition.left),
        condition.operator.symbol(),
        render_expr(&condition.right)
    )
}

fn render_assign(assign: &AssignStmt) -> String {
    format!("{} = {}", assign.target.value, render_expr(&assign.value))
}

fn render_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|parameter| format!("{} {}", parameter.data_type, parameter.name.value))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Default)]
struct Renderer {
    out: String,
    indent: usize,
}

impl Renderer {
    fn line(&mut self, text: &str) {
        self.out.push_str(&"  ".repeat(self.indent));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn block(&mut self, block: &BlockStmt) {
        self.indent += 1;
        for stmt in block.iter() {
            self.stmt(stmt);
        }
        self.indent -= 1;
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Assign(assign) => self.line(&render_assign(assign)),
            Stmt::Declaration(declaration) => self.line(&format!(
                "{} {}",
                declaration.data_type,
                render_assign(&declaration.assign)
            )),
            Stmt::If(if_stmt) => self.if_chain(if_stmt),
            Stmt::Repeat(repeat) => {
                let step = match &repeat.step {
                    Step::Increment(identifier) => format!("++{}", identifier.value),
                    Step::Decrement(identifier) => format!("--{}", identifier.value),
                    Step::Assign(assign) => render_assign(assign),
                };
                self.line(&format!(
                    "rep ({} {}; {}; {}) {{",
                    repeat.data_type,
                    render_assign(&repeat.init),
                    render_condition(&repeat.condition),
                    step
                ));
                self.block(&repeat.body);
                self.line("}");
            }
            Stmt::FnDecl(function) => {
                self.line(&format!(
                    "func {} {}({}) {{",
                    function.return_type,
                    function.name.value,
                    render_parameters(&function.parameters)
                ));
                self.block(&function.body);
                self.indent += 1;
                self.line(&format!("ret {}", function.return_id.value));
                self.indent -= 1;
                self.line("}");
            }
            Stmt::FnCall(call) => self.line(&format!(
                "{}({})",
                call.name.value,
                render_parameters(&call.arguments)
            )),
        }
    }

    fn if_chain(&mut self, if_stmt: &IfStmt) {
        self.line(&format!("if ({}) {{", render_condition(&if_stmt.condition)));
        self.block(&if_stmt.then_body);

        let mut current = if_stmt;
        while let Some(else_if) = &current.else_body {
            self.line(&format!(
                "}} else if ({}) {{",
                render_condition(&else_if.condition)
            ));
            self.block(&else_if.then_body);
            current = else_if.as_ref();
        }

        self.line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::expressions::Identifier;

    #[test]
    fn test_render_keeps_required_parens_only() {
        // (1 + 2) * 3
        let expr = Expr::binary(
            Expr::binary(Expr::number(1), BinaryOperator::Add, Expr::number(2)),
            BinaryOperator::Mul,
            Expr::number(3),
        );
        assert_eq!(render_expr(&expr), "(1 + 2) * 3");

        // 1 + 2 * 3
        let expr = Expr::binary(
            Expr::number(1),
            BinaryOperator::Add,
            Expr::binary(Expr::number(2), BinaryOperator::Mul, Expr::number(3)),
        );
        assert_eq!(render_expr(&expr), "1 + 2 * 3");
    }

    #[test]
    fn test_render_associativity() {
        // a - (b - c)
        let expr = Expr::binary(
            Expr::symbol("a"),
            BinaryOperator::Sub,
            Expr::binary(Expr::symbol("b"), BinaryOperator::Sub, Expr::symbol("c")),
        );
        assert_eq!(render_expr(&expr), "a - (b - c)");

        // (a ** b) ** c
        let expr = Expr::binary(
            Expr::binary(Expr::symbol("a"), BinaryOperator::Pow, Expr::symbol("b")),
            BinaryOperator::Pow,
            Expr::symbol("c"),
        );
        assert_eq!(render_expr(&expr), "(a ** b) ** c");

        // a ** b ** c
        let expr = Expr::binary(
            Expr::symbol("a"),
            BinaryOperator::Pow,
            Expr::binary(Expr::symbol("b"), BinaryOperator::Pow, Expr::symbol("c")),
        );
        assert_eq!(render_expr(&expr), "a ** b ** c");
    }

    #[test]
    fn test_render_program_layout() {
        let program = Program {
            body: BlockStmt {
                body: vec![Stmt::Assign(AssignStmt {
                    target: Identifier::new("x"),
                    value: Expr::number(1),
                })],
            },
        };

        assert_eq!(render(&program), "Start\n  x = 1\nEnd\n");
        assert_eq!(program.to_string(), render(&program));
    }
}
