//! Resolution of qualified names against the declaring file's imports.

/// One import declaration from the file declaring the advice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    alias: Option<String>,
    path: String,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Import {
            alias: None,
            path: path.into(),
        }
    }

    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Import {
            alias: Some(alias.into()),
            path: path.into(),
        }
    }

    /// The name the import is referred to by: its alias when present,
    /// otherwise the last segment of its path.
    fn local_name(&self) -> &str {
        match &self.alias {
            Some(alias) if !alias.is_empty() => alias,
            _ => self.path.rsplit('/').next().unwrap_or(&self.path),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// The imports in scope where an advice is declared.
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    items: Vec<Import>,
}

impl ImportTable {
    pub fn new(items: Vec<Import>) -> Self {
        ImportTable { items }
    }

    /// Resolve a qualifier to its package path.
    ///
    /// An import whose local name equals the qualifier wins outright;
    /// otherwise the last import whose path ends in `/<qualifier>` is
    /// used. An unresolved qualifier yields the empty path, a low-severity
    /// condition that never blocks advice creation.
    pub fn resolve(&self, name: &str) -> String {
        let suffix = format!("/{name}");
        let mut fallback = "";

        for import in &self.items {
            if import.local_name() == name {
                return import.path.clone();
            }

            if import.path.ends_with(&suffix) {
                fallback = &import.path;
            }
        }

        if fallback.is_empty() {
            tracing::debug!("no import found for qualifier `{name}`");
        }

        fallback.to_owned()
    }
}

#[cfg(test)]
mod tests;
