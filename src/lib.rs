//! # MDX Component Resolution (native)
//!
//! Prepares the output of the MDX compiler for build-time component resolution.
//!
//! ## Rewrite Invariants
//!
//! 1. **Runtime Import**: Every import whose source ends with `jsx-runtime` gains
//!    `resolveComponent as _resolveComponent`, unless it already binds
//!    `_resolveComponent`, in which case it is left as is.
//!
//! 2. **Reassignable Bindings**: The leading declarations of `_createMdxContent`
//!    are `let`, so a resolved component can be assigned to them.
//!
//! 3. **Resolver Assignments**: `if (!Foo) _missingMdxReference("Foo", true)`
//!    becomes `if (!Foo) Foo = _resolveComponent("Foo")`. The second argument is
//!    dropped so the resolver call can be replaced statically.
//!
//! 4. **Contiguous Checks**: Only the leading run of declarations and checks is
//!    rewritten. The first other statement ends the scan.
//!
//! 5. **Dead Helper**: The top-level `_missingMdxReference` function is removed,
//!    which also makes a second pass a no-op.
//!
//! Shapes that do not match are left untouched; the tree rewrite never fails.

mod component_refs;
mod error;
mod options;
mod resolve;
mod transform;
mod visitor;

#[cfg(test)]
mod test_utils;

pub use component_refs::{
    match_component_binding, match_missing_reference_check, rewrite_component_references,
    MissingReferenceCheck,
};
pub use error::TransformError;
pub use options::ResolveOptions;
pub use resolve::{resolve_missing_components, ResolveComponents, RewriteStats};
pub use transform::{
    resolve_missing_components_batch, resolve_missing_components_source, TransformOutput,
};
pub use visitor::{
    walk_children, walk_program, walk_statement_slot, walk_statements, Directive, StatementRule,
};

#[cfg(feature = "napi")]
pub use transform::resolve_missing_components_native;
