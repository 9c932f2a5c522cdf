//! Serializer from path trees to the textual JSONPath grammar

use crate::ast::{Operand, Path, PathExpression, PathFunction, PathSegment, Predicate};
use serde_json::Value;

/// Render a path tree into query text plus its parameter list
///
/// The grammar embeds every literal inline, so the parameter list is always
/// empty; it is part of the signature because callers splice the result into
/// a `(sql, params)` pipeline. The outermost path is wrapped in single
/// quotes and addressed from `$`; paths nested inside filter predicates or
/// function arguments render bare, addressed from `@`.
///
/// String literals are embedded between double quotes without escaping, so
/// text containing `"` or `\` produces a query that no longer parses.
/// Callers feeding untrusted input must sanitize it first.
pub fn render(path: &Path) -> (String, Vec<Value>) {
    let mut serializer = Serializer::default();
    serializer.path(path, false);
    (serializer.out, Vec::new())
}

#[derive(Default)]
struct Serializer {
    out: String,
}

impl Serializer {
    /// Render one path; `nested` is false only for the outermost call
    fn path(&mut self, path: &Path, nested: bool) {
        self.out.push_str(if nested { "@" } else { "'$" });
        for segment in path.segments() {
            self.segment(segment);
        }
        if !nested {
            self.out.push('\'');
        }
    }

    fn segment(&mut self, segment: &PathSegment) {
        match segment {
            PathSegment::Key(name) => {
                // Keys containing a space need the quoted member form.
                if name.contains(' ') {
                    self.out.push_str(&format!(".\"{name}\""));
                } else {
                    self.out.push_str(&format!(".{name}"));
                }
            }
            PathSegment::Index(index) => self.out.push_str(&format!("[{index}]")),
            PathSegment::Wildcard => self.out.push_str("[*]"),
            PathSegment::FunctionCall(func) => self.function(func),
            PathSegment::Filter(predicate) => {
                self.out.push_str(" ? ");
                match predicate {
                    Predicate::Expr(expr) => self.expression(expr),
                    Predicate::Func(func) => self.function(func),
                }
            }
        }
    }

    /// Filter-form functions parenthesize themselves; call-form functions
    /// attach to the preceding path with a dot and are never wrapped
    fn function(&mut self, func: &PathFunction) {
        if func.as_filter {
            self.out.push('(');
        } else {
            self.out.push('.');
        }
        self.out.push_str(&func.name);
        self.out.push('(');
        if let Some(arg) = &func.arg {
            self.operand(arg);
        }
        self.out.push(')');
        if func.as_filter {
            self.out.push(')');
        }
    }

    /// Expressions are always parenthesized; combined predicates nest
    fn expression(&mut self, expr: &PathExpression) {
        let op = expr.op.as_str();
        self.out.push('(');
        self.operand(&expr.lhs);
        self.out.push_str(&format!(" {op} "));
        self.operand(&expr.rhs);
        self.out.push(')');
    }

    fn operand(&mut self, operand: &Operand) {
        match operand {
            Operand::Str(value) => self.out.push_str(&format!("\"{value}\"")),
            Operand::Int(value) => self.out.push_str(&value.to_string()),
            Operand::Float(value) => self.out.push_str(&value.to_string()),
            Operand::Bool(value) => self.out.push_str(if *value { "true" } else { "false" }),
            Operand::Null => self.out.push_str("null"),
            Operand::Path(path) => self.path(path, true),
            Operand::Expr(expr) => self.expression(expr),
            Operand::Func(func) => self.function(func),
        }
    }
}
