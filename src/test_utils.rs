use oxc_allocator::{Allocator, Vec};
use oxc_ast::ast::{Program, Statement};
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;

pub fn parse_program<'a>(allocator: &'a Allocator, code: &'a str) -> Program<'a> {
    let source_type = SourceType::default().with_module(true).with_jsx(true);
    let ret = Parser::new(allocator, code, source_type).parse();
    assert!(ret.errors.is_empty(), "test input failed to parse: {:?}", ret.errors);
    ret.program
}

pub fn print_program(program: &Program<'_>) -> String {
    Codegen::new().build(program).code
}

/// Body of the first top-level function's first nested function declaration.
/// Imports and other statements ahead of that function are passed over.
pub fn content_function_body<'p, 'a>(program: &'p mut Program<'a>) -> &'p mut Vec<'a, Statement<'a>> {
    let outer = program
        .body
        .iter_mut()
        .find_map(|stmt| match stmt {
            Statement::FunctionDeclaration(outer) => Some(outer),
            _ => None,
        })
        .expect("expected a top-level function");
    let outer_body = outer.body.as_mut().expect("outer function has a body");
    let inner = outer_body
        .statements
        .iter_mut()
        .find_map(|stmt| match stmt {
            Statement::FunctionDeclaration(inner) => Some(inner),
            _ => None,
        })
        .expect("expected a nested function");
    &mut inner.body.as_mut().expect("nested function has a body").statements
}
