use oxc_allocator::Vec as ArenaVec;
use oxc_ast::ast::{ExportDefaultDeclarationKind, Expression, Statement};
use oxc_ast::AstBuilder;
use oxc_span::Span;

/// What happens to one top-level statement when its module is flattened into a bundle
#[derive(Debug)]
pub enum Rewrite<'a> {
    Keep(Statement<'a>),
    Replace(Statement<'a>),
    Remove,
    /// Dropped import; carries the source specifier
    Import(String),
}

/// A module body with import/export syntax stripped
#[derive(Debug)]
pub struct RewrittenBody<'a> {
    pub body: ArenaVec<'a, Statement<'a>>,
    pub specifiers: Vec<String>,
}

/// Import and export statements only occur at the top level of a module,
/// so a single pass over the body reaches all of them.
pub fn rewrite_body<'a>(ast: AstBuilder<'a>, body: ArenaVec<'a, Statement<'a>>) -> RewrittenBody<'a> {
    let mut rewritten = ast.vec_with_capacity(body.len());
    let mut specifiers = Vec::new();

    for statement in body {
        match rewrite_statement(ast, statement) {
            Rewrite::Keep(statement) | Rewrite::Replace(statement) => rewritten.push(statement),
            Rewrite::Remove => {}
            Rewrite::Import(specifier) => specifiers.push(specifier),
        }
    }

    RewrittenBody {
        body: rewritten,
        specifiers,
    }
}

pub fn rewrite_statement<'a>(ast: AstBuilder<'a>, statement: Statement<'a>) -> Rewrite<'a> {
    match statement {
        Statement::ImportDeclaration(import) => Rewrite::Import(import.source.value.to_string()),
        Statement::ExportNamedDeclaration(export) if export.source.is_some() => {
            Rewrite::Keep(Statement::ExportNamedDeclaration(export))
        }
        Statement::ExportNamedDeclaration(export) => match export.unbox().declaration {
            Some(declaration) => Rewrite::Replace(Statement::from(declaration)),
            // `export { a, b }` names bindings that are already declared
            None => Rewrite::Remove,
        },
        Statement::ExportDefaultDeclaration(export) => {
            let export = export.unbox();
            rewrite_default_export(ast, export.span, export.declaration)
        }
        other => Rewrite::Keep(other),
    }
}

fn rewrite_default_export<'a>(
    ast: AstBuilder<'a>,
    span: Span,
    declaration: ExportDefaultDeclarationKind<'a>,
) -> Rewrite<'a> {
    // `export default name;` repeats a declaration the module already has
    let is_reference = declaration
        .as_expression()
        .is_some_and(|expression| matches!(expression.without_parentheses(), Expression::Identifier(_)));
    if is_reference {
        return Rewrite::Remove;
    }

    match declaration {
        ExportDefaultDeclarationKind::FunctionDeclaration(function) => {
            Rewrite::Replace(Statement::FunctionDeclaration(function))
        }
        ExportDefaultDeclarationKind::ClassDeclaration(class) => {
            Rewrite::Replace(Statement::ClassDeclaration(class))
        }
        ExportDefaultDeclarationKind::TSInterfaceDeclaration(interface) => {
            Rewrite::Replace(Statement::TSInterfaceDeclaration(interface))
        }
        expression => Rewrite::Replace(ast.statement_expression(span, expression.into_expression())),
    }
}

/// Module syntax that survives rewriting unchanged and usually breaks the bundle
pub fn unsupported_construct(statement: &Statement<'_>) -> Option<&'static str> {
    match statement {
        Statement::ExportAllDeclaration(_) => Some("`export * from` declaration"),
        Statement::ExportNamedDeclaration(export) if export.source.is_some() => {
            Some("`export { .. } from` re-export")
        }
        _ => None,
    }
}
