//! Java syntax front end.
//!
//! Wraps tree-sitter parsing of a single source unit. The front end only
//! answers one question the rest of the pipeline cares about: did this unit
//! parse without any lexical or syntactic error? Units with errors are left
//! to javac; checking never runs on them.

use tree_sitter::{Language, Parser, Tree};

/// Canonical extension for units this pipeline analyzes.
pub const JAVA_EXTENSION: &str = ".java";

/// A parsed, error-free source unit.
///
/// Owned by one pipeline invocation and discarded when it returns; units are
/// never cached across invocations.
pub struct SourceUnit {
    /// The tree-sitter parse tree.
    pub tree: Tree,
    /// The original source code (kept for node text extraction).
    pub source: Vec<u8>,
    /// Simple file name of the unit (for diagnostic scoping).
    pub file: String,
}

impl SourceUnit {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: tree_sitter::Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }

    /// 1-based line of a node's first character.
    pub fn line_of(&self, node: tree_sitter::Node) -> usize {
        node.start_position().row + 1
    }
}

/// Outcome of parsing one unit.
pub enum ParseOutcome {
    /// The unit parsed with no lexical or syntactic errors.
    Clean(SourceUnit),
    /// At least one error was found; the unit must be skipped.
    SyntaxErrors,
}

/// The Java grammar used for all parsing and queries.
pub fn language() -> Language {
    tree_sitter_java::LANGUAGE.into()
}

fn create_parser() -> anyhow::Result<Parser> {
    let mut parser = Parser::new();
    parser.set_language(&language())?;
    Ok(parser)
}

/// Parse one unit of Java source.
///
/// Errors are recorded, not printed: a tree containing any ERROR or MISSING
/// node yields `SyntaxErrors` with no further detail. Only a parser
/// misconfiguration surfaces as `Err`.
pub fn parse_unit(file: &str, source: &[u8]) -> anyhow::Result<ParseOutcome> {
    let mut parser = create_parser()?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| anyhow::anyhow!("parser returned no tree for {}", file))?;

    if tree.root_node().has_error() {
        return Ok(ParseOutcome::SyntaxErrors);
    }

    Ok(ParseOutcome::Clean(SourceUnit {
        tree,
        source: source.to_vec(),
        file: file.to_string(),
    }))
}
