//! Source-level entry points: parse compiled MDX, rewrite it, print it back.

#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_allocator::Allocator;
use oxc_ast::AstBuilder;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::TransformError;
use crate::options::ResolveOptions;
use crate::resolve::{resolve_missing_components, RewriteStats};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct TransformOutput {
    pub code: String,
    pub stats: RewriteStats,
}

fn mdx_source_type() -> SourceType {
    SourceType::default().with_module(true).with_jsx(true)
}

/// Parses `code` as an ES module with JSX, rewrites its missing-component
/// checks and prints the result.
pub fn resolve_missing_components_source(
    code: &str,
    options: &ResolveOptions,
) -> Result<TransformOutput, TransformError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, code, mdx_source_type()).parse();
    if !ret.errors.is_empty() || ret.panicked {
        let messages: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
        warn!(errors = messages.len(), "compiled MDX failed to parse");
        return Err(TransformError::Parse { messages });
    }

    let mut program = ret.program;
    let stats = resolve_missing_components(&mut program, AstBuilder::new(&allocator), options);
    debug!(?stats, "resolved missing components");

    Ok(TransformOutput {
        code: Codegen::new().build(&program).code,
        stats,
    })
}

/// Rewrites several compiled modules in parallel. Each module gets its own
/// arena, so the results are independent of one another and keep input order.
pub fn resolve_missing_components_batch(
    sources: &[String],
    options: &ResolveOptions,
) -> Vec<Result<TransformOutput, TransformError>> {
    sources
        .par_iter()
        .map(|code| resolve_missing_components_source(code, options))
        .collect()
}

#[cfg(feature = "napi")]
#[napi]
pub fn resolve_missing_components_native(
    code: String,
    options_json: Option<String>,
) -> napi::Result<TransformOutput> {
    let options = ResolveOptions::from_json(options_json.as_deref().unwrap_or_default())?;
    Ok(resolve_missing_components_source(&code, &options)?)
}
