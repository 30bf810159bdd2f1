use crate::core::interfaces::{ModuleProcessor, ProcessedModule};
use crate::core::models::ModulePath;
use crate::infrastructure::processors::rewrite::{rewrite_body, unsupported_construct};
use crate::utils::{KnitError, Logger, Result};
use oxc_allocator::Allocator;
use oxc_ast::AstBuilder;
use oxc_codegen::{Codegen, CodegenOptions, IndentChar};
use oxc_parser::Parser;
use oxc_span::SourceType;
use std::path::Path;

/// Parses a module with oxc, strips its import/export syntax and prints it back
#[derive(Debug, Clone, Default)]
pub struct OxcModuleProcessor {
    single_quote: bool,
}

impl ModuleProcessor for OxcModuleProcessor {
    fn process_module(&self, path: &ModulePath, source: &str) -> Result<ProcessedModule> {
        let allocator = Allocator::default();
        let source_type = Self::source_type(path.as_path());

        let parsed = Parser::new(&allocator, source, source_type).parse();
        if parsed.panicked || !parsed.errors.is_empty() {
            let mut messages: Vec<String> = parsed.errors.iter().map(|e| e.to_string()).collect();
            if messages.is_empty() {
                messages.push("parser aborted".to_string());
            }
            return Err(KnitError::parse(path.as_path(), messages));
        }

        let mut program = parsed.program;
        for statement in &program.body {
            if let Some(construct) = unsupported_construct(statement) {
                Logger::unsupported_syntax(path, construct);
            }
        }

        let ast = AstBuilder::new(&allocator);
        let body = std::mem::replace(&mut program.body, ast.vec());
        let rewritten = rewrite_body(ast, body);
        program.body = rewritten.body;

        let mut code = Codegen::new()
            .with_options(self.codegen_options())
            .build(&program)
            .code;
        code.truncate(code.trim_end().len());

        Ok(ProcessedModule {
            code,
            specifiers: rewritten.specifiers,
        })
    }
}

impl OxcModuleProcessor {
    pub fn new(single_quote: bool) -> Self {
        Self { single_quote }
    }

    /// Latest syntax, always in module mode; TypeScript/JSX follow the extension
    fn source_type(path: &Path) -> SourceType {
        SourceType::from_path(path)
            .unwrap_or_else(|_| SourceType::mjs())
            .with_module(true)
    }

    /// Two-space indentation
    fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            single_quote: self.single_quote,
            indent_char: IndentChar::Space,
            indent_width: 2,
            ..CodegenOptions::default()
        }
    }
}
