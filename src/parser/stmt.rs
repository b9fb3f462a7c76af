use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{
            AssignStmt, BlockStmt, DeclarationStmt, FnCallStmt, FnDeclStmt, IfStmt, Parameter,
            RepeatStmt, Step,
        },
    },
    errors::errors::Error,
    grammar::grammar::{Nonterminal, Rule, GRAMMAR},
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_condition, parse_expr},
        lookups::BindingPower,
    },
};

use super::{parser::Parser, types::parse_data_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind()?;
    let Some(handler) = parser.get_stmt_lookup().get(&token_kind).copied() else {
        let token = parser.current_token()?;
        return Err(Error::unexpected(
            token,
            GRAMMAR.first(Nonterminal::Concept).to_vec(),
        ));
    };

    let stmt = handler(parser)?;
    parser.reduce(match &stmt {
        Stmt::Assign(_) => Rule::ConceptAssign,
        Stmt::Declaration(_) => Rule::ConceptDeclaration,
        Stmt::If(_) => Rule::ConceptIf,
        Stmt::Repeat(_) => Rule::ConceptRepeat,
        Stmt::FnDecl(_) => Rule::ConceptFunctionDecl,
        Stmt::FnCall(_) => Rule::ConceptFunctionCall,
    });

    Ok(stmt)
}

/// One or more statements, ending at the first token that cannot start one.
pub fn parse_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.enter()?;

    let mut body = vec![parse_stmt(parser)?];
    while parser.starts_concept()? {
        body.push(parse_stmt(parser)?);
    }

    parser.reduce(Rule::BodySingle);
    for _ in 1..body.len() {
        parser.reduce(Rule::BodyCons);
    }
    parser.exit();

    Ok(BlockStmt { body })
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    parser.reduce(Rule::Id);

    Ok(Identifier { value: token.value })
}

/// Assignment or call, told apart by the token after the name.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let next = parser.peek(1)?.kind;
    match next {
        TokenKind::Assignment => Ok(Stmt::Assign(parse_assign(parser)?)),
        TokenKind::OpenParen => Ok(Stmt::FnCall(parse_fn_call(parser)?)),
        _ => {
            let token = parser.peek(1)?;
            Err(Error::unexpected(
                token,
                vec![TokenKind::OpenParen, TokenKind::Assignment],
            ))
        }
    }
}

pub fn parse_assign(parser: &mut Parser) -> Result<AssignStmt, Error> {
    let target = parse_identifier(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.reduce(Rule::Assign);

    Ok(AssignStmt { target, value })
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let data_type = parse_data_type(parser)?;
    let assign = parse_assign(parser)?;
    parser.reduce(Rule::Declaration);

    Ok(Stmt::Declaration(DeclarationStmt { data_type, assign }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::If(parse_if(parser)?))
}

fn parse_if(parser: &mut Parser) -> Result<IfStmt, Error> {
    parser.enter()?;
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = parse_if_body(parser)?;

    // `else` only ever continues the chain with another `if`
    let else_body = if parser.current_token_kind()? == TokenKind::Else {
        parser.advance()?;
        Some(Box::new(parse_if(parser)?))
    } else {
        None
    };

    parser.reduce(if else_body.is_some() {
        Rule::IfElse
    } else {
        Rule::IfThen
    });
    parser.exit();

    Ok(IfStmt {
        condition,
        then_body,
        else_body,
    })
}

/// Braces are optional around an `if` body and produce the same tree.
fn parse_if_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    if parser.current_token_kind()? != TokenKind::OpenCurly {
        return parse_body(parser);
    }

    parser.advance()?;
    let body = parse_body(parser)?;
    parser.expect_body_end(TokenKind::CloseCurly)?;

    Ok(body)
}

pub fn parse_repeat_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Rep)?;
    parser.expect(TokenKind::OpenParen)?;
    let data_type = parse_data_type(parser)?;
    let init = parse_assign(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    let step = parse_step(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_body(parser)?;
    parser.expect_body_end(TokenKind::CloseCurly)?;
    parser.reduce(Rule::Repeat);

    Ok(Stmt::Repeat(RepeatStmt {
        data_type,
        init,
        condition,
        step,
        body,
    }))
}

fn parse_step(parser: &mut Parser) -> Result<Step, Error> {
    match parser.current_token_kind()? {
        TokenKind::PlusPlus => {
            parser.advance()?;
            let identifier = parse_identifier(parser)?;
            parser.reduce(Rule::StepIncrement);
            Ok(Step::Increment(identifier))
        }
        TokenKind::MinusMinus => {
            parser.advance()?;
            let identifier = parse_identifier(parser)?;
            parser.reduce(Rule::StepDecrement);
            Ok(Step::Decrement(identifier))
        }
        TokenKind::Identifier => {
            let assign = parse_assign(parser)?;
            parser.reduce(Rule::StepAssign);
            Ok(Step::Assign(assign))
        }
        _ => {
            let token = parser.current_token()?;
            Err(Error::unexpected(token, GRAMMAR.first(Nonterminal::Step).to_vec()))
        }
    }
}

fn parse_name(parser: &mut Parser) -> Result<Identifier, Error> {
    let name = parse_identifier(parser)?;
    parser.reduce(Rule::Name);

    Ok(name)
}

/// `<datatype> Id` pairs separated by commas, at least one.
fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    let mut parameters = Vec::new();

    loop {
        let data_type = parse_data_type(parser)?;
        let name = parse_identifier(parser)?;
        parameters.push(Parameter { data_type, name });

        if parser.current_token_kind()? != TokenKind::Comma {
            break;
        }
        parser.advance()?;
    }

    parser.reduce(Rule::ParameterLast);
    for _ in 1..parameters.len() {
        parser.reduce(Rule::ParameterCons);
    }

    Ok(parameters)
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Func)?;
    let return_type = parse_data_type(parser)?;
    parser.reduce(Rule::DataType);
    let name = parse_name(parser)?;

    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_parameters(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_body(parser)?;
    parser.expect_body_end(TokenKind::Ret)?;
    let return_id = parse_identifier(parser)?;
    parser.expect(TokenKind::CloseCurly)?;
    parser.reduce(Rule::FunctionDecl);

    Ok(Stmt::FnDecl(FnDeclStmt {
        return_type,
        name,
        parameters,
        body,
        return_id,
    }))
}

fn parse_fn_call(parser: &mut Parser) -> Result<FnCallStmt, Error> {
    let name = parse_name(parser)?;
    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_parameters(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.reduce(Rule::FunctionCall);

    Ok(FnCallStmt { name, arguments })
}
