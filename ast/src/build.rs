use crate::node::*;

impl Program {
    pub fn new(decls: Vec<Decl>) -> Self {
        Self { decls }
    }
}

impl FuncDecl {
    /// # Panics
    /// If `name` is empty.
    pub fn new(name: impl Into<String>, params: Vec<Parameter>, ret_ty: Type, body: Block) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "function declaration without a name");
        Self {
            name,
            params,
            ret_ty,
            body,
        }
    }
}

impl VarDecl {
    pub fn new(name: impl Into<String>, ty: Type, init: impl Into<Expr>, immutable: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            init: Box::new(init.into()),
            immutable,
        }
    }
}

impl Type {
    pub fn new(prim: Primitive) -> Self {
        Self { prim }
    }
}

impl From<Primitive> for Type {
    fn from(prim: Primitive) -> Self {
        Self::new(prim)
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl Block {
    pub fn new(items: Option<Vec<CodeItem>>) -> Self {
        Self { items }
    }
}

impl AssignmentStmt {
    pub fn new(target: impl Into<String>, value: impl Into<Expr>) -> Self {
        Self {
            target: target.into(),
            value: Box::new(value.into()),
        }
    }
}

impl IfStmt {
    pub fn new(cond: impl Into<Expr>, then_block: Block, else_block: Option<Block>) -> Self {
        Self {
            cond: Box::new(cond.into()),
            then_block,
            else_block,
        }
    }
}

impl WhileStmt {
    pub fn new(cond: impl Into<Expr>, body: Block) -> Self {
        Self {
            cond: Box::new(cond.into()),
            body,
        }
    }
}

impl PrintStmt {
    pub fn new(expr: impl Into<Expr>) -> Self {
        Self {
            expr: Box::new(expr.into()),
        }
    }
}

impl ReturnStmt {
    pub fn new(expr: impl Into<Expr>) -> Self {
        Self {
            expr: Box::new(expr.into()),
        }
    }
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Literal {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
    pub fn int(x: i64) -> Self {
        Self::new(Value::Int(x))
    }
    pub fn float(x: f64) -> Self {
        Self::new(Value::Float(x))
    }
    pub fn bool(x: bool) -> Self {
        Self::new(Value::Bool(x))
    }
}

impl FuncCall {
    pub fn new(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            callee: callee.into(),
            args,
        }
    }
}

impl UnaryOp {
    pub fn neg(operand: impl Into<Expr>) -> Self {
        Self {
            op: UnOp::Neg,
            operand: Box::new(operand.into()),
        }
    }
}

impl BinaryOp {
    pub fn new(lhs: impl Into<Expr>, op: BinOp, rhs: impl Into<Expr>) -> Self {
        Self {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
    }
}

macro_rules! impl_lift {
    ($t:ty => $class:ident :: $var:ident) => {
        impl From<$t> for $class {
            fn from(node: $t) -> Self {
                $class::$var(node)
            }
        }
    };
}
impl_lift! {FuncDecl => Decl::Func}
impl_lift! {VarDecl => Decl::Var}
impl_lift! {AssignmentStmt => Stmt::Assign}
impl_lift! {IfStmt => Stmt::If}
impl_lift! {WhileStmt => Stmt::While}
impl_lift! {PrintStmt => Stmt::Print}
impl_lift! {ReturnStmt => Stmt::Return}
impl_lift! {Identifier => Expr::Ident}
impl_lift! {Literal => Expr::Literal}
impl_lift! {FuncCall => Expr::Call}
impl_lift! {UnaryOp => Expr::Unary}
impl_lift! {BinaryOp => Expr::Binary}
impl_lift! {Decl => CodeItem::Decl}
impl_lift! {Stmt => CodeItem::Stmt}

macro_rules! impl_code_item {
    ($t:ty => $class:ident) => {
        impl From<$t> for CodeItem {
            fn from(node: $t) -> Self {
                CodeItem::from($class::from(node))
            }
        }
    };
}
impl_code_item! {FuncDecl => Decl}
impl_code_item! {VarDecl => Decl}
impl_code_item! {AssignmentStmt => Stmt}
impl_code_item! {IfStmt => Stmt}
impl_code_item! {WhileStmt => Stmt}
impl_code_item! {PrintStmt => Stmt}
impl_code_item! {ReturnStmt => Stmt}
