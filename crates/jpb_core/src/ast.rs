//! AST definitions for builder-constructed JSONPath queries

use smallvec::SmallVec;

/// Inline-stored segment sequence; typical paths stay within a few steps
pub(crate) type Segments = SmallVec<[PathSegment; 4]>;

/// Wildcard sentinel: selects any element (`[*]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Any;

/// An ordered, immutable sequence of segments addressing a location (or set
/// of locations) within a JSON value
///
/// The empty path denotes the document root (`$`). Builder operations never
/// mutate an existing path; each one returns a new value, so a single root
/// seed can be shared across threads and derivation chains without
/// synchronization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub(crate) segments: Segments,
}

impl Path {
    /// The segments of this path, in address order
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

/// One addressing step in a path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Key access: `.name`, or `."a name"` when the key contains a space
    Key(String),
    /// Array index access: `[0]`
    Index(i64),
    /// Wildcard access: `[*]`
    Wildcard,
    /// Dotted method invocation: `.name(arg)`
    FunctionCall(PathFunction),
    /// Filter predicate applied at this position: ` ? (expr)`
    Filter(Predicate),
}

/// The predicate carried by a filter segment
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Comparison or logical expression
    Expr(Box<PathExpression>),
    /// Filter-form function such as `exists(..)`
    Func(Box<PathFunction>),
}

/// A named function invocation, optionally acting as a filter predicate
///
/// `as_filter` selects the rendering: `(name(arg))` as a predicate, or
/// `.name(arg)` as a method call on the preceding path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFunction {
    pub(crate) name: String,
    pub(crate) arg: Option<Box<Operand>>,
    pub(crate) as_filter: bool,
}

/// A binary comparison or logical combination between two operands
#[derive(Debug, Clone, PartialEq)]
pub struct PathExpression {
    pub(crate) lhs: Operand,
    pub(crate) op: Op,
    pub(crate) rhs: Operand,
}

/// Operators usable in a filter expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Equal: `==`
    Eq,
    /// Greater than or equal: `>=`
    Ge,
    /// Greater than: `>`
    Gt,
    /// Less than or equal: `<=`
    Le,
    /// Less than: `<`
    Lt,
    /// Not equal: `!=`
    Ne,
    /// Regular-expression match: `like_regex`
    LikeRegex,
    /// Prefix match: `starts with`
    StartsWith,
    /// Logical AND: `&&`
    And,
    /// Logical OR: `||`
    Or,
}

impl Op {
    /// Grammar spelling of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ge => ">=",
            Op::Gt => ">",
            Op::Le => "<=",
            Op::Lt => "<",
            Op::Ne => "!=",
            Op::LikeRegex => "like_regex",
            Op::StartsWith => "starts with",
            Op::And => "&&",
            Op::Or => "||",
        }
    }
}

/// A source value for one path-building step
///
/// Segment classification is total over the accepted kinds; `Float` is
/// representable only so that rejection can hand the value back to the
/// caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Elem {
    /// Key name
    Str(String),
    /// Array index
    Int(i64),
    /// Floating-point input; never a valid path element
    Float(f64),
    /// Wildcard sentinel
    Any,
    /// Function node
    Func(Box<PathFunction>),
    /// Expression node
    Expr(Box<PathExpression>),
}

impl From<&str> for Elem {
    fn from(name: &str) -> Self {
        Elem::Str(name.to_string())
    }
}

impl From<String> for Elem {
    fn from(name: String) -> Self {
        Elem::Str(name)
    }
}

impl From<i64> for Elem {
    fn from(index: i64) -> Self {
        Elem::Int(index)
    }
}

impl From<i32> for Elem {
    fn from(index: i32) -> Self {
        Elem::Int(i64::from(index))
    }
}

impl From<f64> for Elem {
    fn from(value: f64) -> Self {
        Elem::Float(value)
    }
}

impl From<Any> for Elem {
    fn from(_: Any) -> Self {
        Elem::Any
    }
}

impl From<PathFunction> for Elem {
    fn from(func: PathFunction) -> Self {
        Elem::Func(Box::new(func))
    }
}

impl From<PathExpression> for Elem {
    fn from(expr: PathExpression) -> Self {
        Elem::Expr(Box::new(expr))
    }
}

/// A node or literal in operand position: the side of an expression, or a
/// function argument
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// String literal, rendered double-quoted
    Str(String),
    /// Integer literal
    Int(i64),
    /// Floating-point literal; rejected as an expression right-hand side
    Float(f64),
    /// Boolean literal; rejected as an expression right-hand side
    Bool(bool),
    /// The `null` literal
    Null,
    /// Nested path, rendered with `@` addressing
    Path(Box<Path>),
    /// Nested expression
    Expr(Box<PathExpression>),
    /// Nested function
    Func(Box<PathFunction>),
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Str(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Str(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Int(i64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<Path> for Operand {
    fn from(path: Path) -> Self {
        Operand::Path(Box::new(path))
    }
}

impl From<&Path> for Operand {
    fn from(path: &Path) -> Self {
        Operand::Path(Box::new(path.clone()))
    }
}

impl From<PathExpression> for Operand {
    fn from(expr: PathExpression) -> Self {
        Operand::Expr(Box::new(expr))
    }
}

impl From<PathFunction> for Operand {
    fn from(func: PathFunction) -> Self {
        Operand::Func(Box::new(func))
    }
}
