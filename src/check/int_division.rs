//! Integer division mistakes: dividing by a constant zero, and integer
//! division whose truncated result initializes a floating-point variable.

use tree_sitter::Node;

use crate::diagnostics::DiagnosticSink;
use crate::syntax::SourceUnit;

use super::{integer_literal_value, is_integer_literal, unwrap_parens, walk_tree, Check};

pub struct IntDivision;

impl Check for IntDivision {
    fn name(&self) -> &'static str {
        "int_division"
    }

    fn description(&self) -> &'static str {
        "division by a constant zero, or integer division stored in a double"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut DiagnosticSink) -> anyhow::Result<()> {
        walk_tree(unit.tree.root_node(), &mut |node| match node.kind() {
            "binary_expression" => check_zero_divisor(unit, node, sink),
            "local_variable_declaration" => check_truncated_initializer(unit, node, sink),
            _ => {}
        });
        Ok(())
    }
}

fn division_operator<'a>(unit: &'a SourceUnit, node: Node) -> Option<&'a str> {
    let op = node.child_by_field_name("operator")?;
    let text = unit.node_text(op);
    matches!(text, "/" | "%").then_some(text)
}

fn check_zero_divisor(unit: &SourceUnit, node: Node, sink: &mut DiagnosticSink) {
    let Some(op) = division_operator(unit, node) else {
        return;
    };
    let Some(right) = node.child_by_field_name("right") else {
        return;
    };
    let right = unwrap_parens(right);
    if !is_integer_literal(right) {
        return;
    }
    if integer_literal_value(unit.node_text(right)) == Some(0) {
        let message = if op == "/" {
            "this expression divides by zero"
        } else {
            "this expression takes a remainder by zero"
        };
        sink.record(unit.line_of(node), message);
    }
}

fn check_truncated_initializer(unit: &SourceUnit, decl: Node, sink: &mut DiagnosticSink) {
    let is_floating = decl
        .child_by_field_name("type")
        .map(|t| t.kind() == "floating_point_type")
        .unwrap_or(false);
    if !is_floating {
        return;
    }

    let mut cursor = decl.walk();
    for declarator in decl
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "variable_declarator")
    {
        let Some(value) = declarator.child_by_field_name("value") else {
            continue;
        };
        let value = unwrap_parens(value);
        if value.kind() != "binary_expression" {
            continue;
        }
        if division_operator(unit, value) != Some("/") {
            continue;
        }
        let both_integer = [
            value.child_by_field_name("left"),
            value.child_by_field_name("right"),
        ]
        .into_iter()
        .flatten()
        .all(|side| is_integer_literal(unwrap_parens(side)));

        if both_integer {
            sink.record(
                unit.line_of(declarator),
                "both operands are integers, so the division truncates before it is stored in a floating-point variable",
            );
        }
    }
}
