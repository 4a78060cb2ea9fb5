//! Invocation expressions supplied by the advice-declaration collaborator.

use std::fmt;

/// A collaborator-provided expression describing an advice invocation or
/// one of its arguments.
///
/// The variant set is closed: lowering into an invocation descriptor
/// dispatches exhaustively over it, so a grammar gap is a compile error
/// here rather than a logged "unsupported type" at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A literal value, e.g. `200` or `"GET"`.
    Literal(String),
    /// A bare identifier, e.g. `verbose`.
    Identifier(String),
    /// A qualified reference, e.g. `http.StatusText`.
    QualifiedName { qualifier: String, name: String },
    /// A composite literal of the given type, e.g. `model.Person{}`.
    Composite(Box<Expression>),
    /// An address-of expression, e.g. `&model.Person{}`.
    AddressOf(Box<Expression>),
    /// A nested call, e.g. `logging.WithLevel(1)`.
    Call {
        callee: Box<Expression>,
        args: Vec<Expression>,
    },
}

impl Expression {
    pub fn literal(value: impl Into<String>) -> Self {
        Expression::Literal(value.into())
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Expression::QualifiedName {
            qualifier: qualifier.into(),
            name: name.into(),
        }
    }

    pub fn composite(ty: Expression) -> Self {
        Expression::Composite(Box::new(ty))
    }

    pub fn address_of(inner: Expression) -> Self {
        Expression::AddressOf(Box::new(inner))
    }

    pub fn call(callee: Expression, args: Vec<Expression>) -> Self {
        Expression::Call {
            callee: Box::new(callee),
            args,
        }
    }
}

impl fmt::Display for Expression {
    /// Render the expression back to its textual form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(value) => f.write_str(value),
            Expression::Identifier(name) => f.write_str(name),
            Expression::QualifiedName { qualifier, name } => {
                write!(f, "{qualifier}.{name}")
            }
            Expression::Composite(ty) => write!(f, "{ty}{{}}"),
            Expression::AddressOf(inner) => write!(f, "&{inner}"),
            Expression::Call { callee, args } => {
                write!(f, "{callee}(")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
