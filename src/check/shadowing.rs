//! Local variables that shadow a field of the enclosing class.

use std::collections::HashSet;

use tree_sitter::Node;

use crate::diagnostics::DiagnosticSink;
use crate::syntax::SourceUnit;

use super::{walk_tree, Check};

pub struct Shadowing;

impl Check for Shadowing {
    fn name(&self) -> &'static str {
        "shadowing"
    }

    fn description(&self) -> &'static str {
        "a local variable hides a field of the same name"
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

/// Collect the declared names out of `field_declaration` /
/// `local_variable_declaration` declarators.
pub(crate) fn declarator_names<'a>(unit: &'a SourceUnit, decl: Node<'a>) -> Vec<(&'a str, Node<'a>)> {
    let mut cursor = decl.walk();
    decl.named_children(&mut cursor)
        .filter(|n| n.kind() == "variable_declarator")
        .filter_map(|d| {
            d.child_by_field_name("name")
                .map(|name| (unit.node_text(name), d))
        })
        .collect()
}

/// Field names declared directly in a class body.
pub(crate) fn field_names<'a>(unit: &'a SourceUnit, class: Node<'a>) -> HashSet<&'a str> {
    let mut fields = HashSet::new();
    if let Some(body) = class.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if member.kind() == "field_declaration" {
                for (name, _) in declarator_names(unit, member) {
                    fields.insert(name);
                }
            }
        }
    }
    fields
}

fn check_class(unit: &SourceUnit, class: Node, sink: &mut DiagnosticSink) {
    let fields = field_names(unit, class);
    if fields.is_empty() {
        return;
    }
    let class_name = class
        .child_by_field_name("name")
        .map(|n| unit.node_text(n))
        .unwrap_or("");

    let Some(body) = class.child_by_field_name("body") else {
        return;
    };
    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        // Constructors are the field_init check's territory.
        if member.kind() != "method_declaration" {
            continue;
        }
        let Some(method_body) = member.child_by_field_name("body") else {
            continue;
        };
        walk_tree(method_body, &mut |node| {
            if node.kind() != "local_variable_declaration" {
                return;
            }
            for (name, declarator) in declarator_names(unit, node) {
                if fields.contains(name) {
                    sink.record(
                        unit.line_of(declarator),
                        format!(
                            "local variable '{}' hides the field of the same name in class {}",
                            name, class_name
                        ),
                    );
                }
            }
        });
    }
}
