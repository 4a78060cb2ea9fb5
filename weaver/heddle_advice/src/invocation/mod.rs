//! Lowering collaborator expressions into invocation descriptors.

use crate::expr::Expression;
use crate::imports::ImportTable;

/// One argument of an advice invocation: a literal value, a qualified
/// reference (optionally address-of), or nested-call text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationArg {
    pkg: String,
    value: String,
    pointer: bool,
}

impl InvocationArg {
    fn plain(value: impl Into<String>) -> Self {
        InvocationArg {
            pkg: String::new(),
            value: value.into(),
            pointer: false,
        }
    }

    /// Package path of a qualified reference; empty for plain values and
    /// unresolved qualifiers.
    pub fn pkg(&self) -> &str {
        &self.pkg
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the argument takes the address of its value.
    pub fn is_pointer(&self) -> bool {
        self.pointer
    }
}

/// The call an advice performs, lowered from a collaborator expression.
///
/// Metadata carried alongside the compiled matcher; matching never reads
/// it, the downstream weaver does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    function: String,
    pkg: String,
    args: Vec<InvocationArg>,
    imports: Vec<String>,
    is_call: bool,
}

impl Invocation {
    /// Lower a target expression into an invocation descriptor.
    ///
    /// Unsupported target shapes are reported and produce an empty
    /// descriptor; the declaration is later discarded by the exported-name
    /// gate instead of aborting the run.
    pub fn from_expression(target: &Expression, imports: &ImportTable) -> Self {
        let mut invocation = Invocation::default();

        match target {
            Expression::Identifier(name) => invocation.function.clone_from(name),
            Expression::QualifiedName { qualifier, name } => {
                invocation.function.clone_from(name);
                let path = imports.resolve(qualifier);
                invocation.record_import(&path);
                invocation.pkg = path;
            }
            Expression::Call { callee, args } => {
                invocation.lower_call(callee, args, imports);
                invocation.is_call = true;
            }
            Expression::Literal(_) | Expression::Composite(_) | Expression::AddressOf(_) => {
                tracing::error!("unexpected advice target `{target}`");
            }
        }

        invocation
    }

    /// The function the advice calls.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Package path owning the function; empty when unresolved or local.
    pub fn pkg(&self) -> &str {
        &self.pkg
    }

    pub fn args(&self) -> &[InvocationArg] {
        &self.args
    }

    /// Packages the woven output must import to perform this call.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Whether the target was written as a call with arguments rather
    /// than a bare function reference.
    pub fn is_call(&self) -> bool {
        self.is_call
    }

    fn lower_call(&mut self, callee: &Expression, args: &[Expression], imports: &ImportTable) {
        for arg in args {
            let lowered = self.lower_arg(arg, imports);
            self.args.push(lowered);
        }

        match callee {
            Expression::QualifiedName { qualifier, name } => {
                self.function.clone_from(name);
                self.pkg = imports.resolve(qualifier);
            }
            other => tracing::error!("unexpected callee `{other}` in advice target"),
        }
    }

    /// Classify one invocation argument.
    ///
    /// Nested calls keep their rendered text; qualified references (plain,
    /// composite, or address-of) resolve their package and are recorded as
    /// required imports; anything else keeps its literal text.
    fn lower_arg(&mut self, arg: &Expression, imports: &ImportTable) -> InvocationArg {
        match arg {
            Expression::Call { .. } => InvocationArg::plain(arg.to_string()),
            Expression::Literal(value) => InvocationArg::plain(value.clone()),
            Expression::Identifier(name) => InvocationArg::plain(name.clone()),
            Expression::QualifiedName { .. } | Expression::Composite(_) => {
                match qualified_value(arg) {
                    Some((qualifier, value)) => self.qualified_arg(qualifier, value, false, imports),
                    None => {
                        tracing::error!("unsupported composite type `{arg}` in advice argument");
                        InvocationArg::plain(arg.to_string())
                    }
                }
            }
            Expression::AddressOf(inner) => match qualified_value(inner) {
                Some((qualifier, value)) => self.qualified_arg(qualifier, value, true, imports),
                None => {
                    tracing::error!("unsupported address-of target `{inner}` in advice argument");
                    InvocationArg::plain(arg.to_string())
                }
            },
        }
    }

    fn qualified_arg(
        &mut self,
        qualifier: &str,
        value: String,
        pointer: bool,
        imports: &ImportTable,
    ) -> InvocationArg {
        let pkg = imports.resolve(qualifier);
        self.record_import(&pkg);
        InvocationArg {
            pkg,
            value,
            pointer,
        }
    }

    /// Record a package the woven output must import. Empty paths are not
    /// recorded and duplicates collapse.
    fn record_import(&mut self, path: &str) {
        if !path.is_empty() && !self.imports.iter().any(|p| p == path) {
            self.imports.push(path.to_owned());
        }
    }
}

/// A qualified reference, possibly wrapped as a composite literal:
/// `pkg.Name` or `pkg.Name{}`.
fn qualified_value(expr: &Expression) -> Option<(&str, String)> {
    match expr {
        Expression::QualifiedName { qualifier, name } => Some((qualifier, name.clone())),
        Expression::Composite(ty) => match ty.as_ref() {
            Expression::QualifiedName { qualifier, name } => {
                Some((qualifier, format!("{name}{{}}")))
            }
            _ => None,
        },
        _ => None,
    }
}
