//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// All path-derived token values (basename, dirname, extension, relative
/// path) are computed on this normalized form, so the same configuration
/// document resolves identically regardless of the host platform's native
/// separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Get the final path segment.
    ///
    /// `/a/b/c.ts` -> `c.ts`, `c.ts` -> `c.ts`, `/` -> ``.
    pub fn basename(&self) -> &str {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) => &trimmed[idx + 1..],
            None => trimmed,
        }
    }

    /// Get the directory portion of the path.
    ///
    /// `/a/b/c.ts` -> `/a/b`, `src/c.ts` -> `src`, `c.ts` -> `.`,
    /// `/c.ts` -> `/`.
    pub fn dirname(&self) -> Self {
        let trimmed = self.inner.trim_end_matches('/');
        if trimmed.is_empty() {
            let inner = if self.inner.starts_with('/') { "/" } else { "." };
            return Self {
                inner: inner.to_string(),
            };
        }
        match trimmed.rfind('/') {
            Some(0) => Self {
                inner: "/".to_string(),
            },
            Some(idx) => Self {
                inner: trimmed[..idx].to_string(),
            },
            None => Self {
                inner: ".".to_string(),
            },
        }
    }

    /// Get the extension including the leading dot.
    ///
    /// Returns an empty string when the basename has no dot, or when its
    /// only dot is the leading character (`Makefile` -> ``, `.bashrc` -> ``).
    pub fn extension(&self) -> &str {
        let name = self.basename();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[idx..],
            _ => "",
        }
    }

    /// Get the basename with its extension stripped.
    pub fn basename_no_extension(&self) -> &str {
        let name = self.basename();
        let ext = self.extension();
        &name[..name.len() - ext.len()]
    }

    /// Compute the relative path from `base` to this path.
    ///
    /// Compares segment-by-segment and emits `..` components for the part
    /// of `base` that does not overlap. Returns an empty string when the
    /// paths are identical.
    pub fn relative_to(&self, base: &NormalizedPath) -> String {
        let target: Vec<&str> = self.inner.split('/').filter(|s| !s.is_empty()).collect();
        let from: Vec<&str> = base.inner.split('/').filter(|s| !s.is_empty()).collect();

        let common = target
            .iter()
            .zip(from.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = Vec::with_capacity(from.len() - common + target.len() - common);
        for _ in common..from.len() {
            parts.push("..");
        }
        parts.extend(&target[common..]);
        parts.join("/")
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}
