use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Names the rewrite agrees on with the MDX compiler and the component resolver.
///
/// The defaults match what `@mdx-js/mdx` emits for a `createElement`-style JSX
/// runtime and what the component-resolution build plugin looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveOptions {
    /// Import sources ending with this suffix receive the resolver import.
    pub runtime_suffix: String,
    /// Top-level render function emitted by the compiler.
    pub render_function: String,
    /// Function nested in the render function that holds the component checks.
    pub content_function: String,
    /// Helper the compiler calls when a component is missing at runtime.
    pub missing_reference_helper: String,
    /// Export name of the resolver in the JSX runtime module.
    pub resolver_import: String,
    /// Local binding the resolver is imported under.
    pub resolver_local: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            runtime_suffix: "jsx-runtime".to_string(),
            render_function: "MDXContent".to_string(),
            content_function: "_createMdxContent".to_string(),
            missing_reference_helper: "_missingMdxReference".to_string(),
            resolver_import: "resolveComponent".to_string(),
            resolver_local: "_resolveComponent".to_string(),
        }
    }
}

impl ResolveOptions {
    /// Reads options from JSON. Missing fields fall back to their defaults and an
    /// empty (or whitespace-only) string yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, TransformError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| TransformError::InvalidOptions {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        assert_eq!(ResolveOptions::from_json("").unwrap(), ResolveOptions::default());
        assert_eq!(ResolveOptions::from_json("  ").unwrap(), ResolveOptions::default());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let options = ResolveOptions::from_json(r#"{ "runtimeSuffix": "jsx-dev-runtime" }"#).unwrap();
        assert_eq!(options.runtime_suffix, "jsx-dev-runtime");
        assert_eq!(options.resolver_local, "_resolveComponent");
        assert_eq!(options.render_function, "MDXContent");
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = ResolveOptions::from_json("{ runtimeSuffix: ").unwrap_err();
        assert!(matches!(err, TransformError::InvalidOptions { .. }));
        assert!(err.to_string().starts_with("Invalid options"));
    }
}
