//! Assignments of a variable to itself.
//!
//! Almost always a constructor that meant `this.x = x` and wrote `x = x`,
//! leaving the field untouched.

use crate::diagnostics::DiagnosticSink;
use crate::syntax::SourceUnit;

use super::{walk_tree, Check};

pub struct SelfAssignment;

impl Check for SelfAssignment {
    fn name(&self) -> &'static str {
        "self_assignment"
    }

    fn description(&self) -> &'static str {
        "x = x has no effect; this.x = x was probably intended"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut DiagnosticSink) -> anyhow::Result<()> {
        walk_tree(unit.tree.root_node(), &mut |node| {
            if node.kind() != "assignment_expression" {
                return;
            }
            let plain_assign = node
                .child_by_field_name("operator")
                .map(|op| op.kind() == "=")
                .unwrap_or(false);
            if !plain_assign {
                return;
            }
            let (Some(left), Some(right)) = (
                node.child_by_field_name("left"),
                node.child_by_field_name("right"),
            ) else {
                return;
            };
            let left_text = unit.node_text(left).trim();
            let right_text = unit.node_text(right).trim();
            if left_text != right_text {
                return;
            }

            let message = if left.kind() == "identifier" {
                format!(
                    "'{0} = {0}' assigns the variable to itself; did you mean 'this.{0} = {0}'?",
                    left_text
                )
            } else {
                format!("'{0} = {0}' assigns a value to itself and has no effect", left_text)
            };
            sink.record(unit.line_of(node), message);
        });
        Ok(())
    }
}
