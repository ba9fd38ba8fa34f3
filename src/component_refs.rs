//! Component reference rewriting for `_createMdxContent`.
//!
//! The MDX compiler opens the content function with the component bindings and
//! one runtime assertion per component that has no local binding:
//!
//! ```js
//! const _components = Object.assign({}, props.components), {Foo} = _components;
//! if (!Foo) _missingMdxReference("Foo", true);
//! ```
//!
//! which becomes
//!
//! ```js
//! let _components = Object.assign({}, props.components), {Foo} = _components;
//! if (!Foo) Foo = _resolveComponent("Foo");
//! ```
//!
//! Only the leading run of declarations and assertions is inspected. The first
//! statement that is neither ends the scan.

use oxc_allocator::Vec;
use oxc_ast::ast::{
    AssignmentTarget, Expression, IdentifierReference, IfStatement, Statement,
    VariableDeclaration, VariableDeclarationKind,
};
use oxc_ast::AstBuilder;
use oxc_span::SPAN;
use oxc_syntax::operator::{AssignmentOperator, UnaryOperator};
use tracing::{debug, trace};

use crate::options::ResolveOptions;
use crate::resolve::RewriteStats;

/// An `if (!Ident) <expression>;` assertion with its parts borrowed out.
pub struct MissingReferenceCheck<'s, 'a> {
    /// The component binding under test.
    pub binding: &'s IdentifierReference<'a>,
    /// The consequent's expression, rewritten in place.
    pub expression: &'s mut Expression<'a>,
}

impl<'s, 'a> MissingReferenceCheck<'s, 'a> {
    /// Turns `helper(name, source, ...rest)` into `binding = resolver(name, ...rest)`.
    /// Returns false, leaving the expression untouched, when it is not a call with
    /// a plain identifier callee.
    pub fn rewrite(self, ast: AstBuilder<'a>, options: &ResolveOptions) -> bool {
        let MissingReferenceCheck {
            binding,
            expression,
        } = self;

        {
            let Expression::CallExpression(call) = &mut *expression else {
                return false;
            };
            let Expression::Identifier(callee) = &mut call.callee else {
                return false;
            };
            let resolver: &'a str = ast.allocator.alloc_str(&options.resolver_local);
            callee.name = resolver.into();

            // The resolver plugin only replaces calls it can read statically
            if call.arguments.len() > 1 {
                call.arguments.remove(1);
            }
        }

        let call = std::mem::replace(&mut *expression, ast.expression_null_literal(SPAN));
        let left = AssignmentTarget::AssignmentTargetIdentifier(
            ast.alloc_identifier_reference(binding.span, binding.name.clone()),
        );
        *expression = ast.expression_assignment(SPAN, AssignmentOperator::Assign, left, call);

        debug!(component = %binding.name, "rewrote missing component check");
        true
    }
}

/// Matches a variable declaration at the head of the content function.
pub fn match_component_binding<'s, 'a>(
    statement: &'s mut Statement<'a>,
) -> Option<&'s mut VariableDeclaration<'a>> {
    match statement {
        Statement::VariableDeclaration(decl) => Some(decl),
        _ => None,
    }
}

/// Matches `if (!Ident) expr;`, also accepting `if (!Ident) { expr; }`.
pub fn match_missing_reference_check<'s, 'a>(
    statement: &'s mut Statement<'a>,
) -> Option<MissingReferenceCheck<'s, 'a>> {
    let Statement::IfStatement(if_stmt) = statement else {
        return None;
    };
    let IfStatement {
        test, consequent, ..
    } = &mut **if_stmt;

    let test: &'s Expression<'a> = test;
    let binding = match test {
        Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::LogicalNot => {
            match &unary.argument {
                Expression::Identifier(ident) => &**ident,
                _ => return None,
            }
        }
        _ => return None,
    };

    let expression = single_expression(consequent)?;
    Some(MissingReferenceCheck {
        binding,
        expression,
    })
}

fn single_expression<'s, 'a>(statement: &'s mut Statement<'a>) -> Option<&'s mut Expression<'a>> {
    match statement {
        Statement::ExpressionStatement(stmt) => Some(&mut stmt.expression),
        Statement::BlockStatement(block) if block.body.len() == 1 => match block.body.first_mut() {
            Some(Statement::ExpressionStatement(stmt)) => Some(&mut stmt.expression),
            _ => None,
        },
        _ => None,
    }
}

/// Rewrites the leading component declarations and missing-component checks of
/// `statements`.
pub fn rewrite_component_references<'a>(
    statements: &mut Vec<'a, Statement<'a>>,
    ast: AstBuilder<'a>,
    options: &ResolveOptions,
    stats: &mut RewriteStats,
) {
    for (index, statement) in statements.iter_mut().enumerate() {
        // Resolved components get assigned later, so the bindings must be reassignable
        if let Some(decl) = match_component_binding(statement) {
            decl.kind = VariableDeclarationKind::Let;
            stats.bindings_made_reassignable += 1;
            continue;
        }

        if let Some(check) = match_missing_reference_check(statement) {
            if check.rewrite(ast, options) {
                stats.references_rewritten += 1;
            }
            continue;
        }

        trace!(index, "component check prefix ends");
        break;
    }
}
