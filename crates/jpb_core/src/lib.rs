//! jpb_core - fluent JSONPath query builder
//!
//! This library builds the textual JSONPath queries used to address and
//! filter JSON-typed SQL columns (for example `'$.items[*] ? (@ > 50)'`)
//! from immutable expression trees instead of string concatenation.
//!
//! Construction is one-directional: trees are built through chained calls
//! and rendered once; query text is never parsed back into a tree, and no
//! query is ever evaluated against a document.

pub mod ast;
pub mod builder;
pub mod render;

pub use ast::{Any, Elem, Op, Operand, Path, PathExpression, PathFunction, PathSegment, Predicate};
pub use builder::BuildError;
pub use render::render;

/// The shared root seed (`$`) every path derives from
///
/// The root is never mutated: each builder operation returns a new value,
/// so the same root may be used concurrently from any number of derivation
/// chains.
///
/// # Example
/// ```
/// use jpb_core::{Any, render, root};
///
/// let base = root();
/// let path = base.at("items")?.at(Any)?.filter(base.greater_than(50)?)?;
/// let (text, params) = render(&path);
/// assert_eq!(text, "'$.items[*] ? (@ > 50)'");
/// assert!(params.is_empty());
/// # Ok::<(), jpb_core::BuildError>(())
/// ```
pub fn root() -> Path {
    Path::root()
}
