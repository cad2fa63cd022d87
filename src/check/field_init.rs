//! Constructors that declare a new local instead of assigning a field.
//!
//! `public Point(int x) { int x = ...; }` compiles, but the field named x
//! is never initialized. Seen constantly in beginner constructors.

use tree_sitter::Node;

use crate::diagnostics::DiagnosticSink;
use crate::syntax::SourceUnit;

use super::shadowing::{declarator_names, field_names};
use super::{walk_tree, Check};

pub struct FieldInit;

impl Check for FieldInit {
    fn name(&self) -> &'static str {
        "field_init"
    }

    fn description(&self) -> &'static str {
        "a constructor declares a local where it should assign a field"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut DiagnosticSink) -> anyhow::Result<()> {
        walk_tree(unit.tree.root_node(), &mut |node| {
            if node.kind() == "class_declaration" {
                check_class(unit, node, sink);
            }
        });
        Ok(())
    }
}

fn check_class(unit: &SourceUnit, class: Node, sink: &mut DiagnosticSink) {
    let fields = field_names(unit, class);
    if fields.is_empty() {
        return;
    }

    let Some(body) = class.child_by_field_name("body") else {
        return;
    };
    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        if member.kind() != "constructor_declaration" {
            continue;
        }
        let Some(ctor_body) = member.child_by_field_name("body") else {
            continue;
        };
        walk_tree(ctor_body, &mut |node| {
            if node.kind() != "local_variable_declaration" {
                return;
            }
            for (name, declarator) in declarator_names(unit, node) {
                if fields.contains(name) {
                    sink.record(
                        unit.line_of(declarator),
                        format!(
                            "this declares a new variable '{}' instead of initializing the field; drop the type to assign the existing field",
                            name
                        ),
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::run_check;
    use super::*;

    #[test]
    fn test_redeclared_field_in_constructor() {
        let diagnostics = run_check(
            &FieldInit,
            r#"
public class Point {
    private int x;

    public Point(int startX) {
        int x = startX;
    }
}
"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 6);
        assert!(diagnostics[0].message.contains("drop the type"));
    }

    #[test]
    fn test_proper_field_assignment_is_clean() {
        let diagnostics = run_check(
            &FieldInit,
            r#"
public class Point {
    private int x;

    public Point(int startX) {
        x = startX;
    }
}
"#,
        );
        assert!(diagnostics.is_empty(), "got {:?}", diagnostics);
    }

    #[test]
    fn test_unrelated_locals_are_clean() {
        let diagnostics = run_check(
            &FieldInit,
            r#"
public class Point {
    private int x;

    public Point(int startX) {
        int clamped = Math.max(0, startX);
        x = clamped;
    }
}
"#,
        );
        assert!(diagnostics.is_empty(), "got {:?}", diagnostics);
    }
}
