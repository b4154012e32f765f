use strum::{Display, EnumIter, IntoStaticStr};

/// Grammar position a node can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Position {
    Program,
    Declaration,
    Statement,
    Expression,
    Type,
    Parameter,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum NodeKind {
    #[strum(serialize = "ProgramNode")]
    Program,
    #[strum(serialize = "FuncDeclNode")]
    FuncDecl,
    #[strum(serialize = "VarDeclNode")]
    VarDecl,
    #[strum(serialize = "TypeNode")]
    Type,
    #[strum(serialize = "ParameterNode")]
    Parameter,
    #[strum(serialize = "BlockNode")]
    Block,
    #[strum(serialize = "AssignmentStmtNode")]
    AssignmentStmt,
    #[strum(serialize = "IfStmtNode")]
    IfStmt,
    #[strum(serialize = "WhileStmtNode")]
    WhileStmt,
    #[strum(serialize = "PrintStmtNode")]
    PrintStmt,
    #[strum(serialize = "ReturnStmtNode")]
    ReturnStmt,
    #[strum(serialize = "IdentifierNode")]
    Identifier,
    #[strum(serialize = "LiteralNode")]
    Literal,
    #[strum(serialize = "FuncCallNode")]
    FuncCall,
    #[strum(serialize = "UnaryOpNode")]
    UnaryOp,
    #[strum(serialize = "BinaryOpNode")]
    BinaryOp,
}

impl NodeKind {
    pub fn position(self) -> Position {
        match self {
            NodeKind::Program => Position::Program,
            NodeKind::FuncDecl | NodeKind::VarDecl => Position::Declaration,
            NodeKind::Type => Position::Type,
            NodeKind::Parameter => Position::Parameter,
            NodeKind::Block => Position::Block,
            NodeKind::AssignmentStmt
            | NodeKind::IfStmt
            | NodeKind::WhileStmt
            | NodeKind::PrintStmt
            | NodeKind::ReturnStmt => Position::Statement,
            NodeKind::Identifier
            | NodeKind::Literal
            | NodeKind::FuncCall
            | NodeKind::UnaryOp
            | NodeKind::BinaryOp => Position::Expression,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Primitive {
    #[strum(serialize = "int")]
    Int,
    #[strum(serialize = "float")]
    Float,
    #[strum(serialize = "bool")]
    Bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum BinOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Neq,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = "<=")]
    Leq,
    #[strum(serialize = ">=")]
    Geq,
}

/// The only unary operator the language has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum UnOp {
    #[strum(serialize = "-")]
    Neg,
}

/// Literal payload. Exactly one variant is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub(crate) decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Func(FuncDecl),
    Var(VarDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub(crate) name: String,
    pub(crate) params: Vec<Parameter>,
    pub(crate) ret_ty: Type,
    pub(crate) body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub(crate) name: String,
    pub(crate) ty: Type,
    pub(crate) init: Box<Expr>,
    pub(crate) immutable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Type {
    pub(crate) prim: Primitive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub(crate) name: String,
    pub(crate) ty: Type,
}

/// `items == None` is an absent list and behaves like an empty one.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub(crate) items: Option<Vec<CodeItem>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CodeItem {
    Decl(Decl),
    Stmt(Stmt),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignmentStmt),
    If(IfStmt),
    While(WhileStmt),
    Print(PrintStmt),
    Return(ReturnStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub(crate) target: String,
    pub(crate) value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub(crate) cond: Box<Expr>,
    pub(crate) then_block: Block,
    pub(crate) else_block: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub(crate) cond: Box<Expr>,
    pub(crate) body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub(crate) expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub(crate) expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Identifier),
    Literal(Literal),
    Call(FuncCall),
    Unary(UnaryOp),
    Binary(BinaryOp),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub(crate) name: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal {
    pub(crate) value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    pub(crate) callee: String,
    pub(crate) args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub(crate) op: UnOp,
    pub(crate) operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub(crate) lhs: Box<Expr>,
    pub(crate) op: BinOp,
    pub(crate) rhs: Box<Expr>,
}

// read-only accessors

impl Program {
    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }
}

impl FuncDecl {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
    pub fn ret_ty(&self) -> &Type {
        &self.ret_ty
    }
    pub fn body(&self) -> &Block {
        &self.body
    }
}

impl VarDecl {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn ty(&self) -> &Type {
        &self.ty
    }
    pub fn init(&self) -> &Expr {
        &self.init
    }
    pub fn is_immutable(&self) -> bool {
        self.immutable
    }
}

impl Type {
    pub fn primitive(&self) -> Primitive {
        self.prim
    }
}

impl Parameter {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

impl Block {
    /// `None` when the item list is absent.
    pub fn items(&self) -> Option<&[CodeItem]> {
        self.items.as_deref()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodeItem> {
        self.items.as_deref().unwrap_or(&[]).iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.as_ref().map_or(true, Vec::is_empty)
    }
}

impl AssignmentStmt {
    pub fn target(&self) -> &str {
        &self.target
    }
    pub fn value(&self) -> &Expr {
        &self.value
    }
}

impl IfStmt {
    pub fn cond(&self) -> &Expr {
        &self.cond
    }
    pub fn then_block(&self) -> &Block {
        &self.then_block
    }
    pub fn else_block(&self) -> Option<&Block> {
        self.else_block.as_ref()
    }
}

impl WhileStmt {
    pub fn cond(&self) -> &Expr {
        &self.cond
    }
    pub fn body(&self) -> &Block {
        &self.body
    }
}

impl PrintStmt {
    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl ReturnStmt {
    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl Identifier {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Literal {
    pub fn value(&self) -> Value {
        self.value
    }
}

impl FuncCall {
    pub fn callee(&self) -> &str {
        &self.callee
    }
    pub fn args(&self) -> &[Expr] {
        &self.args
    }
}

impl UnaryOp {
    pub fn op(&self) -> UnOp {
        self.op
    }
    pub fn operand(&self) -> &Expr {
        &self.operand
    }
}

impl BinaryOp {
    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }
    pub fn op(&self) -> BinOp {
        self.op
    }
    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }
}

/// Borrowed view of any node, one variant per kind.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    FuncDecl(&'a FuncDecl),
    VarDecl(&'a VarDecl),
    Type(&'a Type),
    Parameter(&'a Parameter),
    Block(&'a Block),
    AssignmentStmt(&'a AssignmentStmt),
    IfStmt(&'a IfStmt),
    WhileStmt(&'a WhileStmt),
    PrintStmt(&'a PrintStmt),
    ReturnStmt(&'a ReturnStmt),
    Identifier(&'a Identifier),
    Literal(&'a Literal),
    FuncCall(&'a FuncCall),
    UnaryOp(&'a UnaryOp),
    BinaryOp(&'a BinaryOp),
}

impl<'a> NodeRef<'a> {
    pub fn kind(self) -> NodeKind {
        match self {
            NodeRef::Program(_) => NodeKind::Program,
            NodeRef::FuncDecl(_) => NodeKind::FuncDecl,
            NodeRef::VarDecl(_) => NodeKind::VarDecl,
            NodeRef::Type(_) => NodeKind::Type,
            NodeRef::Parameter(_) => NodeKind::Parameter,
            NodeRef::Block(_) => NodeKind::Block,
            NodeRef::AssignmentStmt(_) => NodeKind::AssignmentStmt,
            NodeRef::IfStmt(_) => NodeKind::IfStmt,
            NodeRef::WhileStmt(_) => NodeKind::WhileStmt,
            NodeRef::PrintStmt(_) => NodeKind::PrintStmt,
            NodeRef::ReturnStmt(_) => NodeKind::ReturnStmt,
            NodeRef::Identifier(_) => NodeKind::Identifier,
            NodeRef::Literal(_) => NodeKind::Literal,
            NodeRef::FuncCall(_) => NodeKind::FuncCall,
            NodeRef::UnaryOp(_) => NodeKind::UnaryOp,
            NodeRef::BinaryOp(_) => NodeKind::BinaryOp,
        }
    }

    pub fn position(self) -> Position {
        self.kind().position()
    }

    /// Owned structural children, in print order.
    pub fn children(self) -> Vec<NodeRef<'a>> {
        match self {
            NodeRef::Program(p) => p.decls.iter().map(NodeRef::from).collect(),
            NodeRef::FuncDecl(f) => {
                let mut children: Vec<NodeRef> = f.params.iter().map(NodeRef::from).collect();
                children.push((&f.ret_ty).into());
                children.push((&f.body).into());
                children
            }
            NodeRef::VarDecl(v) => vec![(&v.ty).into(), (&*v.init).into()],
            NodeRef::Parameter(p) => vec![(&p.ty).into()],
            NodeRef::Block(b) => b.iter().map(NodeRef::from).collect(),
            NodeRef::AssignmentStmt(s) => vec![(&*s.value).into()],
            NodeRef::IfStmt(s) => {
                let mut children: Vec<NodeRef> = vec![(&*s.cond).into(), (&s.then_block).into()];
                children.extend(s.else_block.as_ref().map(NodeRef::from));
                children
            }
            NodeRef::WhileStmt(s) => vec![(&*s.cond).into(), (&s.body).into()],
            NodeRef::PrintStmt(s) => vec![(&*s.expr).into()],
            NodeRef::ReturnStmt(s) => vec![(&*s.expr).into()],
            NodeRef::FuncCall(c) => c.args.iter().map(NodeRef::from).collect(),
            NodeRef::UnaryOp(u) => vec![(&*u.operand).into()],
            NodeRef::BinaryOp(b) => vec![(&*b.lhs).into(), (&*b.rhs).into()],
            NodeRef::Type(_) | NodeRef::Identifier(_) | NodeRef::Literal(_) => vec![],
        }
    }
}

/// Number of nodes in the subtree rooted at `node`, including itself.
pub fn count_nodes<'a>(node: impl Into<NodeRef<'a>>) -> usize {
    let node = node.into();
    1 + node.children().into_iter().map(count_nodes).sum::<usize>()
}

macro_rules! impl_node_ref {
    ($t:ident) => {
        impl<'a> From<&'a $t> for NodeRef<'a> {
            fn from(node: &'a $t) -> Self {
                NodeRef::$t(node)
            }
        }
    };
}
impl_node_ref! {Program}
impl_node_ref! {FuncDecl}
impl_node_ref! {VarDecl}
impl_node_ref! {Type}
impl_node_ref! {Parameter}
impl_node_ref! {Block}
impl_node_ref! {AssignmentStmt}
impl_node_ref! {IfStmt}
impl_node_ref! {WhileStmt}
impl_node_ref! {PrintStmt}
impl_node_ref! {ReturnStmt}
impl_node_ref! {Identifier}
impl_node_ref! {Literal}
impl_node_ref! {FuncCall}
impl_node_ref! {UnaryOp}
impl_node_ref! {BinaryOp}

impl<'a> From<&'a Decl> for NodeRef<'a> {
    fn from(decl: &'a Decl) -> Self {
        match decl {
            Decl::Func(f) => f.into(),
            Decl::Var(v) => v.into(),
        }
    }
}

impl<'a> From<&'a Stmt> for NodeRef<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        match stmt {
            Stmt::Assign(s) => s.into(),
            Stmt::If(s) => s.into(),
            Stmt::While(s) => s.into(),
            Stmt::Print(s) => s.into(),
            Stmt::Return(s) => s.into(),
        }
    }
}

impl<'a> From<&'a CodeItem> for NodeRef<'a> {
    fn from(item: &'a CodeItem) -> Self {
        match item {
            CodeItem::Decl(d) => d.into(),
            CodeItem::Stmt(s) => s.into(),
        }
    }
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Ident(e) => e.into(),
            Expr::Literal(e) => e.into(),
            Expr::Call(e) => e.into(),
            Expr::Unary(e) => e.into(),
            Expr::Binary(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kind_names() {
        for kind in NodeKind::iter() {
            let name: &'static str = kind.into();
            assert!(name.ends_with("Node"), "{}", name);
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn positions() {
        assert_eq!(NodeKind::Program.position(), Position::Program);
        assert_eq!(NodeKind::VarDecl.position(), Position::Declaration);
        assert_eq!(NodeKind::WhileStmt.position(), Position::Statement);
        assert_eq!(NodeKind::FuncCall.position(), Position::Expression);
        assert_eq!(NodeKind::Parameter.position(), Position::Parameter);

        // every position class is occupied by some kind
        for pos in Position::iter() {
            assert!(NodeKind::iter().any(|k| k.position() == pos), "{}", pos);
        }
    }

    #[test]
    fn operator_symbols() {
        let symbols: Vec<String> = BinOp::iter().map(|op| op.to_string()).collect();
        assert_eq!(
            symbols,
            ["+", "-", "*", "/", "==", "!=", "<", ">", "<=", ">="]
        );
        assert_eq!(UnOp::Neg.to_string(), "-");
    }

    #[test]
    fn children_and_count() {
        // if (x < 1) { print(f()); } else { }
        let cond = BinaryOp::new(Identifier::new("x"), BinOp::Lt, Literal::int(1));
        let then_block = Block::new(Some(vec![PrintStmt::new(FuncCall::new("f", vec![])).into()]));
        let stmt = IfStmt::new(cond, then_block, Some(Block::new(None)));

        let node = NodeRef::from(&stmt);
        let kinds: Vec<NodeKind> = node.children().into_iter().map(NodeRef::kind).collect();
        assert_eq!(kinds, [NodeKind::BinaryOp, NodeKind::Block, NodeKind::Block]);
        // if, binop, ident, literal, block, print, call, block
        assert_eq!(count_nodes(&stmt), 8);
    }

    #[test]
    fn absent_and_empty_block() {
        let absent = Block::new(None);
        let empty = Block::new(Some(vec![]));
        assert!(absent.items().is_none());
        assert_eq!(empty.items().map(<[CodeItem]>::len), Some(0));
        assert!(absent.is_empty() && empty.is_empty());
        assert_eq!(absent.iter().count(), 0);
        assert_ne!(absent, empty);
    }
}
