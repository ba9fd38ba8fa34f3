//! Statement rules that prepare compiled MDX for static component resolution.

#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_ast::ast::{
    Function, ImportDeclaration, ImportDeclarationSpecifier, ImportOrExportKind, Program,
    Statement,
};
use oxc_ast::AstBuilder;
use oxc_span::SPAN;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::component_refs::rewrite_component_references;
use crate::options::ResolveOptions;
use crate::visitor::{walk_program, Directive, StatementRule};

/// Tally of the edits made by one rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct RewriteStats {
    pub imports_augmented: u32,
    pub bindings_made_reassignable: u32,
    pub references_rewritten: u32,
    pub helpers_removed: u32,
}

impl RewriteStats {
    pub fn is_unchanged(&self) -> bool {
        *self == RewriteStats::default()
    }
}

pub struct ResolveComponents<'o, 'a> {
    pub ast: AstBuilder<'a>,
    pub options: &'o ResolveOptions,
    pub stats: RewriteStats,
}

impl<'o, 'a> ResolveComponents<'o, 'a> {
    pub fn new(ast: AstBuilder<'a>, options: &'o ResolveOptions) -> Self {
        ResolveComponents {
            ast,
            options,
            stats: RewriteStats::default(),
        }
    }

    fn augment_runtime_import(&mut self, decl: &mut ImportDeclaration<'a>) {
        if !decl.source.value.as_str().ends_with(&self.options.runtime_suffix) {
            return;
        }

        let resolver_local = self.options.resolver_local.as_str();
        let specifiers = decl.specifiers.get_or_insert_with(|| self.ast.vec());
        let already_imported = specifiers.iter().any(|specifier| match specifier {
            ImportDeclarationSpecifier::ImportSpecifier(s) => s.local.name.as_str() == resolver_local,
            _ => false,
        });
        if already_imported {
            trace!(source = %decl.source.value, "resolver already imported");
            return;
        }

        let imported: &'a str = self.ast.allocator.alloc_str(&self.options.resolver_import);
        let local: &'a str = self.ast.allocator.alloc_str(resolver_local);
        specifiers.push(self.ast.import_declaration_specifier_import_specifier(
            SPAN,
            self.ast.module_export_name_identifier_name(SPAN, imported),
            self.ast.binding_identifier(SPAN, local),
            ImportOrExportKind::Value,
        ));

        self.stats.imports_augmented += 1;
        debug!(source = %decl.source.value, "added resolver import");
    }

    fn enter_function(&mut self, func: &mut Function<'a>) -> Directive {
        let Some(name) = func.id.as_ref().map(|id| id.name.as_str()) else {
            return Directive::Skip;
        };

        if name == self.options.render_function {
            self.rewrite_render_function(func);
            return Directive::Skip;
        }

        if name == self.options.missing_reference_helper {
            // Every call site has been rewritten to the resolver
            self.stats.helpers_removed += 1;
            debug!(helper = name, "removed missing reference helper");
            return Directive::Remove;
        }

        Directive::Skip
    }

    fn rewrite_render_function(&mut self, func: &mut Function<'a>) {
        let content_function = self.options.content_function.as_str();
        let content_body = func.body.as_mut().and_then(|body| {
            body.statements.iter_mut().find_map(|stmt| match stmt {
                Statement::FunctionDeclaration(inner)
                    if inner
                        .id
                        .as_ref()
                        .is_some_and(|id| id.name.as_str() == content_function) =>
                {
                    inner.body.as_mut()
                }
                _ => None,
            })
        });

        match content_body {
            Some(body) => rewrite_component_references(
                &mut body.statements,
                self.ast,
                self.options,
                &mut self.stats,
            ),
            None => debug!(
                render_function = %self.options.render_function,
                "no content function found"
            ),
        }
    }
}

impl<'o, 'a> StatementRule<'a> for ResolveComponents<'o, 'a> {
    fn enter_statement(&mut self, stmt: &mut Statement<'a>) -> Directive {
        match stmt {
            Statement::ImportDeclaration(decl) => {
                self.augment_runtime_import(decl);
                Directive::Skip
            }
            Statement::FunctionDeclaration(func) => self.enter_function(func),
            _ => Directive::Skip,
        }
    }
}

/// Rewrites the missing-component assertions of a compiled MDX program into
/// resolver assignments, in place.
///
/// The caller holds the only reference to `program` for the duration of the
/// call. Shapes that do not match are left as they are.
pub fn resolve_missing_components<'a>(
    program: &mut Program<'a>,
    ast: AstBuilder<'a>,
    options: &ResolveOptions,
) -> RewriteStats {
    let mut rule = ResolveComponents::new(ast, options);
    walk_program(&mut rule, program, ast);
    rule.stats
}
