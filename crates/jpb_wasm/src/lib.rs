use jpb_core::{Any, BuildError, Op, Operand, Path, PathExpression, render, root};
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Fluent JSONPath builder exposed to JavaScript
#[wasm_bindgen]
pub struct PathBuilder {
    inner: Path,
}

#[wasm_bindgen]
impl PathBuilder {
    /// Start at the document root (`$`)
    #[wasm_bindgen(constructor)]
    pub fn new() -> PathBuilder {
        PathBuilder { inner: root() }
    }

    /// Append a key access
    pub fn key(&self, name: &str) -> Result<PathBuilder, String> {
        wrap(self.inner.at(name))
    }

    /// Append an array index access
    pub fn index(&self, index: i32) -> Result<PathBuilder, String> {
        wrap(self.inner.at(index))
    }

    /// Append a wildcard access
    pub fn any(&self) -> Result<PathBuilder, String> {
        wrap(self.inner.at(Any))
    }

    /// Re-express the trailing key as a function call
    pub fn call(&self) -> Result<PathBuilder, String> {
        wrap(self.inner.call())
    }

    /// Attach a comparison filter on the current element
    ///
    /// `op` is one of `==`, `!=`, `>`, `>=`, `<`, `<=`, `like_regex`,
    /// `starts with`; `value` is a JSON literal (string, integer, or null).
    pub fn compare(&self, op: &str, value: &str) -> Result<PathBuilder, String> {
        let op = parse_op(op)?;
        let rhs = parse_literal(value)?;
        let expr = PathExpression::new(root(), op, rhs).map_err(|e| e.to_string())?;
        wrap(self.inner.filter(expr))
    }

    /// Render the query text
    pub fn render(&self) -> String {
        render(&self.inner).0
    }
}

fn wrap(result: Result<Path, BuildError>) -> Result<PathBuilder, String> {
    result
        .map(|inner| PathBuilder { inner })
        .map_err(|e| e.to_string())
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_op(op: &str) -> Result<Op, String> {
    match op {
        "==" => Ok(Op::Eq),
        "!=" => Ok(Op::Ne),
        ">" => Ok(Op::Gt),
        ">=" => Ok(Op::Ge),
        "<" => Ok(Op::Lt),
        "<=" => Ok(Op::Le),
        "like_regex" => Ok(Op::LikeRegex),
        "starts with" => Ok(Op::StartsWith),
        other => Err(format!("unknown operator: {other}")),
    }
}

fn parse_literal(value: &str) -> Result<Operand, String> {
    let json: Value = serde_json::from_str(value).map_err(|e| format!("JSON parse error: {e}"))?;
    match json {
        Value::Null => Ok(Operand::Null),
        Value::String(text) => Ok(Operand::Str(text)),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => Ok(Operand::Int(integer)),
            None => Err(format!("unsupported literal: {number}")),
        },
        other => Err(format!("unsupported literal: {other}")),
    }
}
