//! Fluent construction of path trees
//!
//! Every operation derives a new value from its receiver; no path,
//! expression, or function is mutated after construction. A failed step
//! reports immediately and leaves previously built values valid and
//! reusable.

use crate::ast::{Elem, Op, Operand, Path, PathExpression, PathFunction, PathSegment, Predicate};

/// Error raised by a failed construction step
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The source value cannot be classified as a path segment
    InvalidPathElement(Elem),
    /// Function-call syntax applied to a segment that is not a plain key
    UnsupportedOperation(PathSegment),
    /// Function-call syntax applied to a path with no segments
    EmptyPathCall,
    /// A filter argument that is neither an expression nor a function node
    InvalidFilterPredicate(Elem),
    /// An expression right-hand literal that is not a string, integer, or null
    InvalidRhsValue(Operand),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::InvalidPathElement(elem) => {
                write!(f, "invalid path element: {elem:?}")
            }
            BuildError::UnsupportedOperation(segment) => {
                write!(f, "path segment does not support function call: {segment:?}")
            }
            BuildError::EmptyPathCall => {
                write!(f, "cannot emulate function call on an empty path")
            }
            BuildError::InvalidFilterPredicate(elem) => {
                write!(f, "filter predicate must be an expression or function, got: {elem:?}")
            }
            BuildError::InvalidRhsValue(operand) => {
                write!(f, "invalid right-hand side for filter expression: {operand:?}")
            }
        }
    }
}

impl std::error::Error for BuildError {}

impl PathSegment {
    /// Classify a source value into its segment form
    ///
    /// Strings become key accesses, integers become index accesses, the
    /// [`Any`](crate::Any) sentinel becomes a wildcard, expression nodes and
    /// filter-form functions become filter predicates, and plain functions
    /// become dotted method invocations. Anything else is rejected with the
    /// offending value.
    pub fn new(elem: impl Into<Elem>) -> Result<PathSegment, BuildError> {
        match elem.into() {
            Elem::Str(name) => Ok(PathSegment::Key(name)),
            Elem::Int(index) => Ok(PathSegment::Index(index)),
            Elem::Any => Ok(PathSegment::Wildcard),
            Elem::Func(func) if func.as_filter => Ok(PathSegment::Filter(Predicate::Func(func))),
            Elem::Func(func) => Ok(PathSegment::FunctionCall(*func)),
            Elem::Expr(expr) => Ok(PathSegment::Filter(Predicate::Expr(expr))),
            elem @ Elem::Float(_) => Err(BuildError::InvalidPathElement(elem)),
        }
    }

    /// Re-express a key segment as a dotted method invocation
    ///
    /// Only plain keys have a call form; every other segment kind is
    /// rejected.
    pub fn into_call(self) -> Result<PathSegment, BuildError> {
        match self {
            PathSegment::Key(name) => Ok(PathSegment::FunctionCall(PathFunction::new(name))),
            segment => Err(BuildError::UnsupportedOperation(segment)),
        }
    }
}

impl Path {
    /// The root seed (`$`): the empty path every expression derives from
    pub fn root() -> Path {
        Path::default()
    }

    /// Append one addressing step, returning a new path
    ///
    /// A single operation covers all three addressing modes: `at("key")`,
    /// `at(0)`, and `at(Any)`.
    pub fn at(&self, elem: impl Into<Elem>) -> Result<Path, BuildError> {
        let segment = PathSegment::new(elem)?;
        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(Path { segments })
    }

    /// Re-express the trailing key as a method invocation
    ///
    /// `root().at("follow")?.at("size")?.call()?` renders as
    /// `.follow.size()`; the rest of the path is untouched.
    pub fn call(&self) -> Result<Path, BuildError> {
        let mut segments = self.segments.clone();
        let last = segments.pop().ok_or(BuildError::EmptyPathCall)?;
        segments.push(last.into_call()?);
        Ok(Path { segments })
    }

    /// Attach a filter predicate at the current position
    ///
    /// Accepts an expression or function node only. Chained calls append
    /// successive ` ? (..)` clauses in order; they are never merged into a
    /// single predicate.
    pub fn filter(&self, pred: impl Into<Elem>) -> Result<Path, BuildError> {
        let elem = pred.into();
        if !matches!(elem, Elem::Expr(_) | Elem::Func(_)) {
            return Err(BuildError::InvalidFilterPredicate(elem));
        }
        self.at(elem)
    }

    /// The `exists(..)` filter function over a sub-path or expression
    pub fn exists(arg: impl Into<Operand>) -> PathFunction {
        PathFunction::new("exists").with_arg(arg).filter_form()
    }

    fn compare(&self, op: Op, rhs: impl Into<Operand>) -> Result<PathExpression, BuildError> {
        PathExpression::new(self.clone(), op, rhs)
    }

    /// `==` comparison against a path, expression, or literal
    pub fn equal(&self, rhs: impl Into<Operand>) -> Result<PathExpression, BuildError> {
        self.compare(Op::Eq, rhs)
    }

    /// `!=` comparison
    pub fn not_equal(&self, rhs: impl Into<Operand>) -> Result<PathExpression, BuildError> {
        self.compare(Op::Ne, rhs)
    }

    /// `>` comparison
    pub fn greater_than(&self, rhs: impl Into<Operand>) -> Result<PathExpression, BuildError> {
        self.compare(Op::Gt, rhs)
    }

    /// `>=` comparison
    pub fn greater_or_equal(&self, rhs: impl Into<Operand>) -> Result<PathExpression, BuildError> {
        self.compare(Op::Ge, rhs)
    }

    /// `<` comparison
    pub fn less_than(&self, rhs: impl Into<Operand>) -> Result<PathExpression, BuildError> {
        self.compare(Op::Lt, rhs)
    }

    /// `<=` comparison
    pub fn less_or_equal(&self, rhs: impl Into<Operand>) -> Result<PathExpression, BuildError> {
        self.compare(Op::Le, rhs)
    }

    /// `like_regex` predicate; the pattern is embedded verbatim
    pub fn like_regex(&self, pattern: impl Into<Operand>) -> Result<PathExpression, BuildError> {
        self.compare(Op::LikeRegex, pattern)
    }

    /// `starts with` predicate
    pub fn starts_with(&self, prefix: impl Into<Operand>) -> Result<PathExpression, BuildError> {
        self.compare(Op::StartsWith, prefix)
    }
}

impl PathExpression {
    /// Build a comparison node, validating the right-hand literal
    ///
    /// When `rhs` is not itself a tree node it must be a string, integer, or
    /// null; float and bool literals are rejected with the offending value.
    pub fn new(
        lhs: impl Into<Operand>,
        op: Op,
        rhs: impl Into<Operand>,
    ) -> Result<PathExpression, BuildError> {
        let rhs = rhs.into();
        if matches!(rhs, Operand::Float(_) | Operand::Bool(_)) {
            return Err(BuildError::InvalidRhsValue(rhs));
        }
        Ok(PathExpression {
            lhs: lhs.into(),
            op,
            rhs,
        })
    }

    /// Combine with `&&`, rendering as `((self) && (rhs))`
    pub fn and(self, rhs: PathExpression) -> PathExpression {
        PathExpression {
            lhs: Operand::Expr(Box::new(self)),
            op: Op::And,
            rhs: Operand::Expr(Box::new(rhs)),
        }
    }

    /// Combine with `||`, rendering as `((self) || (rhs))`
    pub fn or(self, rhs: PathExpression) -> PathExpression {
        PathExpression {
            lhs: Operand::Expr(Box::new(self)),
            op: Op::Or,
            rhs: Operand::Expr(Box::new(rhs)),
        }
    }
}

impl PathFunction {
    /// A named function in plain call form with no argument
    pub fn new(name: impl Into<String>) -> PathFunction {
        PathFunction {
            name: name.into(),
            arg: None,
            as_filter: false,
        }
    }

    /// Attach the function argument
    pub fn with_arg(mut self, arg: impl Into<Operand>) -> PathFunction {
        self.arg = Some(Box::new(arg.into()));
        self
    }

    /// Mark the function as a filter predicate, rendered `(name(arg))`
    pub fn filter_form(mut self) -> PathFunction {
        self.as_filter = true;
        self
    }
}
