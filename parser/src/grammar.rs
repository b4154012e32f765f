#![allow(clippy::redundant_closure_call)]

use crate::token::Token;
use ast::{
    AssignmentStmt, BinOp, BinaryOp, Block, CodeItem, Decl, Expr, FuncCall, FuncDecl, Identifier,
    IfStmt, Literal, Parameter, Primitive, PrintStmt, Program, ReturnStmt, Stmt, Type, UnaryOp,
    VarDecl, WhileStmt,
};

fn binary(lhs: Expr, op: BinOp, rhs: Expr) -> Expr {
    BinaryOp::new(lhs, op, rhs).into()
}

peg::parser! { pub grammar parser() for [Token] {
    use Token::*;

    rule ty() -> Type
        = [IntTy] { Type::new(Primitive::Int) }
        / [FloatTy] { Type::new(Primitive::Float) }
        / [BoolTy] { Type::new(Primitive::Bool) }

    rule name() -> String
        = [Ident(name)] { name }

    // expression

    rule expr() -> Expr
        = precedence! {
            l:(@) [EqEq] r:@  { binary(l, BinOp::Eq, r) }
            l:(@) [NotEq] r:@ { binary(l, BinOp::Neq, r) }
            l:(@) [Leq] r:@   { binary(l, BinOp::Leq, r) }
            l:(@) [Geq] r:@   { binary(l, BinOp::Geq, r) }
            l:(@) [Lt] r:@    { binary(l, BinOp::Lt, r) }
            l:(@) [Gt] r:@    { binary(l, BinOp::Gt, r) }
            --
            l:(@) [Plus] r:@  { binary(l, BinOp::Add, r) }
            l:(@) [Minus] r:@ { binary(l, BinOp::Sub, r) }
            --
            l:(@) [Star] r:@  { binary(l, BinOp::Mul, r) }
            l:(@) [Slash] r:@ { binary(l, BinOp::Div, r) }
            --
            [Minus] e:@ { UnaryOp::neg(e).into() }
            --
            [Int(n)] { Literal::int(n).into() }
            [Float(x)] { Literal::float(x).into() }
            [True] { Literal::bool(true).into() }
            [False] { Literal::bool(false).into() }

            callee:name() [LParen] args:(expr() ** [Comma]) [RParen] {
                FuncCall::new(callee, args).into()
            }
            n:name() { Identifier::new(n).into() }

            [LParen] e:expr() [RParen] { e }
        }

    // statement

    rule block() -> Block
        = [LBrace] items:code_item()* [RBrace]
        {
            // "{}" has no item list at all
            Block::new(if items.is_empty() { None } else { Some(items) })
        }

    rule code_item() -> CodeItem
        = v:var_decl() { CodeItem::Decl(v.into()) }
        / s:stmt() { CodeItem::Stmt(s) }

    rule stmt() -> Stmt
        = target:name() [Equal] value:expr() [SemiColon]
        { AssignmentStmt::new(target, value).into() }
        / [If] [LParen] cond:expr() [RParen] then_block:block()
          else_block:([Else] b:block() { b })?
        { IfStmt::new(cond, then_block, else_block).into() }
        / [While] [LParen] cond:expr() [RParen] body:block()
        { WhileStmt::new(cond, body).into() }
        / [Print] [LParen] e:expr() [RParen] [SemiColon]
        { PrintStmt::new(e).into() }
        / [Return] e:expr() [SemiColon]
        { ReturnStmt::new(e).into() }

    // declaration

    rule param() -> Parameter
        = n:name() [Colon] ty:ty() { Parameter::new(n, ty) }

    rule var_decl() -> VarDecl
        = immutable:([Var] { false } / [Const] { true })
          n:name() [Colon] ty:ty() [Equal] init:expr() [SemiColon]
        { VarDecl::new(n, ty, init, immutable) }

    rule func_decl() -> FuncDecl
        = [Func] n:name()
          [LParen] params:(param() ** [Comma]) [RParen]
          [Arrow] ret_ty:ty() body:block()
        { FuncDecl::new(n, params, ret_ty, body) }

    rule decl() -> Decl
        = f:func_decl() { f.into() }
        / v:var_decl() { v.into() }

    pub rule program() -> Program
        = decls:decl()* { Program::new(decls) }
} }
