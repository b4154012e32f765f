use crate::node::*;
use std::fmt::{self, Write};

const NONE_MARKER: &str = "(none)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    indent_width: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Self { indent_width: 1 }
    }
}

impl Printer {
    /// `indent_width` is the number of spaces per indentation level.
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    pub fn print<'a, W: Write>(
        &self,
        out: &mut W,
        node: impl Into<NodeRef<'a>>,
        indent: usize,
    ) -> fmt::Result {
        let node = node.into();
        let kind = node.kind();
        match node {
            NodeRef::Program(p) => {
                self.line(out, indent, format_args!("{}:", kind))?;
                for decl in p.decls() {
                    self.print(out, decl, indent + 1)?;
                }
            }
            NodeRef::FuncDecl(f) => {
                self.line(out, indent, format_args!("{}: {}", kind, f.name()))?;
                self.list(out, indent + 1, "Params:", f.params())?;
                self.section(out, indent + 1, "Return Type:", f.ret_ty())?;
                self.section(out, indent + 1, "Body:", f.body())?;
            }
            NodeRef::VarDecl(v) => {
                let suffix = if v.is_immutable() { " (const)" } else { "" };
                self.line(out, indent, format_args!("{}: {}{}", kind, v.name(), suffix))?;
                self.section(out, indent + 1, "Type:", v.ty())?;
                self.section(out, indent + 1, "Init:", v.init())?;
            }
            NodeRef::Type(t) => {
                self.line(out, indent, format_args!("{}: {}", kind, t.primitive()))?;
            }
            NodeRef::Parameter(p) => {
                self.line(out, indent, format_args!("{}: {}", kind, p.name()))?;
                self.print(out, p.ty(), indent + 1)?;
            }
            NodeRef::Block(b) => {
                self.line(out, indent, format_args!("{}:", kind))?;
                for item in b.iter() {
                    self.print(out, item, indent + 1)?;
                }
            }
            NodeRef::AssignmentStmt(s) => {
                self.line(out, indent, format_args!("{}: {}", kind, s.target()))?;
                self.print(out, s.value(), indent + 1)?;
            }
            NodeRef::IfStmt(s) => {
                self.line(out, indent, format_args!("{}:", kind))?;
                self.section(out, indent + 1, "Condition:", s.cond())?;
                self.section(out, indent + 1, "Then Block:", s.then_block())?;
                if let Some(else_block) = s.else_block() {
                    self.section(out, indent + 1, "Else Block:", else_block)?;
                }
            }
            NodeRef::WhileStmt(s) => {
                self.line(out, indent, format_args!("{}:", kind))?;
                self.section(out, indent + 1, "Condition:", s.cond())?;
                self.section(out, indent + 1, "Body:", s.body())?;
            }
            NodeRef::PrintStmt(s) => {
                self.line(out, indent, format_args!("{}:", kind))?;
                self.print(out, s.expr(), indent + 1)?;
            }
            NodeRef::ReturnStmt(s) => {
                self.line(out, indent, format_args!("{}:", kind))?;
                self.print(out, s.expr(), indent + 1)?;
            }
            NodeRef::Identifier(i) => {
                self.line(out, indent, format_args!("{}: {}", kind, i.name()))?;
            }
            NodeRef::Literal(l) => {
                self.line(out, indent, format_args!("{}: {}", kind, value_text(l.value())))?;
            }
            NodeRef::FuncCall(c) => {
                self.line(out, indent, format_args!("{}: {}", kind, c.callee()))?;
                self.list(out, indent + 1, "Arguments:", c.args())?;
            }
            NodeRef::UnaryOp(u) => {
                self.line(out, indent, format_args!("{}:", kind))?;
                self.line(out, indent + 1, "Operator:")?;
                self.line(out, indent + 2, u.op())?;
                self.section(out, indent + 1, "Operand:", u.operand())?;
            }
            NodeRef::BinaryOp(b) => {
                self.line(out, indent, format_args!("{}:", kind))?;
                self.section(out, indent + 1, "LHS:", b.lhs())?;
                self.line(out, indent + 1, "Operator:")?;
                self.line(out, indent + 2, b.op())?;
                self.section(out, indent + 1, "RHS:", b.rhs())?;
            }
        }
        Ok(())
    }

    fn line<W: Write>(&self, out: &mut W, indent: usize, text: impl fmt::Display) -> fmt::Result {
        writeln!(out, "{:width$}{}", "", text, width = indent * self.indent_width)
    }

    fn section<'a, W: Write>(
        &self,
        out: &mut W,
        indent: usize,
        heading: &str,
        child: impl Into<NodeRef<'a>>,
    ) -> fmt::Result {
        self.line(out, indent, heading)?;
        self.print(out, child, indent + 1)
    }

    fn list<'a, W: Write, T>(
        &self,
        out: &mut W,
        indent: usize,
        heading: &str,
        items: &'a [T],
    ) -> fmt::Result
    where
        &'a T: Into<NodeRef<'a>>,
    {
        self.line(out, indent, heading)?;
        if items.is_empty() {
            return self.line(out, indent + 1, NONE_MARKER);
        }
        for item in items {
            self.print(out, item, indent + 1)?;
        }
        Ok(())
    }

    pub fn dump<'a>(&self, node: impl Into<NodeRef<'a>>) -> String {
        let mut buf = String::new();
        // writing into a String cannot fail
        let _ = self.print(&mut buf, node, 0);
        buf
    }
}

/// Prints `node` at `indent` with the default one-space indentation.
pub fn print<'a, W: Write>(out: &mut W, node: impl Into<NodeRef<'a>>, indent: usize) -> fmt::Result {
    Printer::default().print(out, node, indent)
}

pub fn dump<'a>(node: impl Into<NodeRef<'a>>) -> String {
    Printer::default().dump(node)
}

/// Native text of a literal value.
///
/// Floats use the shortest representation that reads back to the same value
/// and always carry a fractional part, so `3.0` stays `3.0` and never looks
/// like an integer literal.
pub fn value_text(value: Value) -> String {
    match value {
        Value::Int(x) => x.to_string(),
        Value::Bool(x) => x.to_string(),
        Value::Float(x) => {
            let text = x.to_string();
            if x.is_finite() && !text.contains('.') {
                format!("{}.0", text)
            } else {
                text
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print(f, self, 0)
    }
}
