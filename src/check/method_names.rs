//! Method naming conventions.
//!
//! Two student mistakes: capitalized method names, and a "constructor"
//! that silently became an ordinary method because it declares a return
//! type. javac accepts both without comment.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Query, QueryCursor};

use crate::diagnostics::DiagnosticSink;
use crate::syntax::{self, SourceUnit};

use super::{enclosing_class_name, Check};

const METHOD_QUERY: &str = r#"
(method_declaration
  name: (identifier) @method_name
) @method
"#;

pub struct MethodNames;

impl Check for MethodNames {
    fn name(&self) -> &'static str {
        "method_names"
    }

    fn description(&self) -> &'static str {
        "capitalized method names, and methods that shadow their class name"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut DiagnosticSink) -> anyhow::Result<()> {
        let language = syntax::language();
        let query = Query::new(&language, METHOD_QUERY)?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, unit.tree.root_node(), &unit.source[..]);

        while let Some(m) = matches.next() {
            let mut name = "";
            let mut method_node = None;

            for capture in m.captures {
                let capture_name = query.capture_names()[capture.index as usize];
                match capture_name {
                    "method_name" => name = unit.node_text(capture.node),
                    "method" => method_node = Some(capture.node),
                    _ => {}
                }
            }

            let Some(node) = method_node else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            let line = unit.line_of(node);

            // `public void Point()` inside class Point parses as a method,
            // not a constructor, because of the return type.
            if enclosing_class_name(unit, node) == Some(name) {
                sink.record(
                    line,
                    format!(
                        "method '{}' has the same name as its class; if this was meant to be a constructor, remove the return type",
                        name
                    ),
                );
                continue;
            }

            if name.chars().next().is_some_and(|c| c.is_uppercase()) {
                sink.record(
                    line,
                    format!("method '{}' should begin with a lowercase letter", name),
                );
            }
        }
        Ok(())
    }
}
