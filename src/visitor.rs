use oxc_allocator::Vec;
use oxc_ast::ast::Statement;
use oxc_ast::AstBuilder;
use oxc_span::SPAN;

/// What the walker does after a rule has looked at a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Descend into nested statements, then move on to the next sibling.
    Continue,
    /// Leave this statement's children alone and move on to the next sibling.
    Skip,
    /// Excise this statement from its parent and move on to the next sibling.
    Remove,
}

/// A rule applied to every statement reached by the walker.
///
/// Rules:
/// 1. Traversal is pre-order, parent before children, siblings in source order.
/// 2. The program root is never handed to a rule.
/// 3. The returned `Directive` is the only way a rule steers the walk.
pub trait StatementRule<'a> {
    fn enter_statement(&mut self, stmt: &mut Statement<'a>) -> Directive;
}

pub fn walk_program<'a, R: StatementRule<'a> + ?Sized>(
    rule: &mut R,
    program: &mut oxc_ast::ast::Program<'a>,
    ast: AstBuilder<'a>,
) {
    walk_statements(rule, &mut program.body, ast);
}

pub fn walk_statements<'a, R: StatementRule<'a> + ?Sized>(
    rule: &mut R,
    statements: &mut Vec<'a, Statement<'a>>,
    ast: AstBuilder<'a>,
) {
    let mut index = 0;
    while index < statements.len() {
        match rule.enter_statement(&mut statements[index]) {
            Directive::Remove => {
                statements.remove(index);
                continue;
            }
            Directive::Continue => walk_children(rule, &mut statements[index], ast),
            Directive::Skip => {}
        }
        index += 1;
    }
}

/// Walks a slot that holds exactly one statement (`if` branches, loop bodies).
/// A removed statement leaves an empty statement behind.
pub fn walk_statement_slot<'a, R: StatementRule<'a> + ?Sized>(
    rule: &mut R,
    statement: &mut Statement<'a>,
    ast: AstBuilder<'a>,
) {
    match rule.enter_statement(statement) {
        Directive::Remove => *statement = ast.statement_empty(SPAN),
        Directive::Continue => walk_children(rule, statement, ast),
        Directive::Skip => {}
    }
}

/// Descends into block, function, `if`, loop, labeled, `try` and `switch` bodies.
pub fn walk_children<'a, R: StatementRule<'a> + ?Sized>(
    rule: &mut R,
    statement: &mut Statement<'a>,
    ast: AstBuilder<'a>,
) {
    match statement {
        Statement::BlockStatement(block) => walk_statements(rule, &mut block.body, ast),
        Statement::FunctionDeclaration(func) => {
            if let Some(body) = &mut func.body {
                walk_statements(rule, &mut body.statements, ast);
            }
        }
        Statement::IfStatement(if_stmt) => {
            walk_statement_slot(rule, &mut if_stmt.consequent, ast);
            if let Some(alternate) = &mut if_stmt.alternate {
                walk_statement_slot(rule, alternate, ast);
            }
        }
        Statement::WhileStatement(stmt) => walk_statement_slot(rule, &mut stmt.body, ast),
        Statement::DoWhileStatement(stmt) => walk_statement_slot(rule, &mut stmt.body, ast),
        Statement::ForStatement(stmt) => walk_statement_slot(rule, &mut stmt.body, ast),
        Statement::ForInStatement(stmt) => walk_statement_slot(rule, &mut stmt.body, ast),
        Statement::ForOfStatement(stmt) => walk_statement_slot(rule, &mut stmt.body, ast),
        Statement::LabeledStatement(stmt) => walk_statement_slot(rule, &mut stmt.body, ast),
        Statement::TryStatement(stmt) => {
            walk_statements(rule, &mut stmt.block.body, ast);
            if let Some(handler) = &mut stmt.handler {
                walk_statements(rule, &mut handler.body.body, ast);
            }
            if let Some(finalizer) = &mut stmt.finalizer {
                walk_statements(rule, &mut finalizer.body, ast);
            }
        }
        Statement::SwitchStatement(stmt) => {
            for case in stmt.cases.iter_mut() {
                walk_statements(rule, &mut case.consequent, ast);
            }
        }
        // Leaf statements as far as statement-level rules are concerned
        _ => {}
    }
}
