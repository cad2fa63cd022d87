//! Switch cases that fall through into the next case.

use tree_sitter::Node;

use crate::diagnostics::DiagnosticSink;
use crate::syntax::SourceUnit;

use super::{walk_tree, Check};

/// Statement kinds that end a case group without falling through.
const TERMINATORS: &[&str] = &[
    "break_statement",
    "continue_statement",
    "return_statement",
    "throw_statement",
    "yield_statement",
];

pub struct SwitchFallthrough;

impl Check for SwitchFallthrough {
    fn name(&self) -> &'static str {
        "switch_fallthrough"
    }

    fn description(&self) -> &'static str {
        "a switch case without a break runs straight into the next case"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut DiagnosticSink) -> anyhow::Result<()> {
        walk_tree(unit.tree.root_node(), &mut |node| {
            if node.kind() == "switch_block" {
                check_block(unit, node, sink);
            }
        });
        Ok(())
    }
}

fn check_block(unit: &SourceUnit, block: Node, sink: &mut DiagnosticSink) {
    let mut cursor = block.walk();
    let groups: Vec<Node> = block
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "switch_block_statement_group")
        .collect();

    // The last group has nothing to fall into. Arrow-style `case ->` rules
    // are `switch_rule` nodes and cannot fall through at all.
    for group in groups.iter().take(groups.len().saturating_sub(1)) {
        let mut cursor = group.walk();
        let statements: Vec<Node> = group
            .named_children(&mut cursor)
            .filter(|n| n.kind() != "switch_label")
            .collect();

        // A label with no statements is a deliberately stacked case.
        let Some(last) = statements.last() else {
            continue;
        };

        if !TERMINATORS.contains(&last.kind()) {
            sink.record(
                unit.line_of(*group),
                "this case falls through into the next one; end it with a break, return, or throw",
            );
        }
    }
}
