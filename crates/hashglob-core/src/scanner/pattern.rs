//! Glob pattern parsing

use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern, PatternError};
use thiserror::Error;

/// Errors that can occur while parsing glob patterns
#[derive(Debug, Error)]
pub enum GlobError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("Glob pattern '{0}' is empty after negation")]
    EmptyNegation(String),

    #[error("Failed to determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// One line of a pattern list, anchored to an absolute path
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    negate: bool,
    search_root: PathBuf,
    pattern: Pattern,
    // `<pattern>/**/*`, so a matched directory brings its contents along
    descendants: Pattern,
}

impl GlobPattern {
    /// Parse one pattern line, anchoring relative patterns at `base`
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments. Each leading
    /// `!` toggles negation.
    ///
    /// # Errors
    /// Returns an error if the pattern is empty after negation or is not
    /// valid glob syntax.
    pub fn parse(line: &str, base: &Path) -> Result<Option<Self>, GlobError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut negate = false;
        let mut body = line;
        while let Some(rest) = body.strip_prefix('!') {
            negate = !negate;
            body = rest;
        }
        if body.is_empty() {
            return Err(GlobError::EmptyNegation(line.to_string()));
        }

        let path = Path::new(body);
        let mut search_root = if path.is_absolute() {
            PathBuf::new()
        } else {
            base.to_path_buf()
        };
        let mut tail: Vec<String> = Vec::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(name) if tail.is_empty() && !has_magic(&name.to_string_lossy()) => {
                    search_root.push(name);
                }
                Component::Prefix(_) | Component::RootDir | Component::ParentDir
                    if tail.is_empty() =>
                {
                    search_root.push(component.as_os_str());
                }
                other => tail.push(other.as_os_str().to_string_lossy().into_owned()),
            }
        }

        let glob_text = join_glob(
            &Pattern::escape(&search_root.to_string_lossy()),
            &tail.join("/"),
        );
        let pattern = compile(&glob_text)?;
        let descendants = compile(&join_glob(&glob_text, "**/*"))?;

        Ok(Some(Self {
            raw: line.to_string(),
            negate,
            search_root,
            pattern,
            descendants,
        }))
    }

    /// Check whether a path matches the pattern or lies below a match
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        self.pattern.matches_path_with(path, MATCH_OPTIONS)
            || self.descendants.matches_path_with(path, MATCH_OPTIONS)
    }

    /// Whether this is an exclusion (`!`) pattern
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negate
    }

    /// The literal directory prefix the pattern can only match below
    #[must_use]
    pub fn search_root(&self) -> &Path {
        &self.search_root
    }

    /// The pattern line as written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn has_magic(component: &str) -> bool {
    component.contains(['*', '?', '['])
}

fn join_glob(head: &str, tail: &str) -> String {
    if tail.is_empty() {
        head.to_string()
    } else if head.ends_with(std::path::MAIN_SEPARATOR) {
        format!("{head}{tail}")
    } else {
        format!("{head}{}{tail}", std::path::MAIN_SEPARATOR)
    }
}

fn compile(text: &str) -> Result<Pattern, GlobError> {
    Pattern::new(text).map_err(|source| GlobError::Invalid {
        pattern: text.to_string(),
        source,
    })
}
