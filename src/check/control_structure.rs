//! Control-structure traps: stray semicolons and assignment-as-condition.

use tree_sitter::Node;

use crate::diagnostics::DiagnosticSink;
use crate::syntax::SourceUnit;

use super::{walk_tree, Check};

pub struct ControlStructure;

impl Check for ControlStructure {
    fn name(&self) -> &'static str {
        "control_structure"
    }

    fn description(&self) -> &'static str {
        "a stray ';' after if/while/for, or '=' used where '==' was meant"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut DiagnosticSink) -> anyhow::Result<()> {
        walk_tree(unit.tree.root_node(), &mut |node| {
            match node.kind() {
                "if_statement" => {
                    check_empty_body(unit, node, "consequence", "if", sink);
                    check_assignment_condition(unit, node, "if", sink);
                }
                "while_statement" => {
                    check_empty_body(unit, node, "body", "while", sink);
                    check_assignment_condition(unit, node, "while", sink);
                }
                "do_statement" => {
                    check_assignment_condition(unit, node, "do-while", sink);
                }
                "for_statement" | "enhanced_for_statement" => {
                    check_empty_body(unit, node, "body", "for", sink);
                }
                _ => {}
            }
        });
        Ok(())
    }
}

fn check_empty_body(
    unit: &SourceUnit,
    node: Node,
    field: &str,
    keyword: &str,
    sink: &mut DiagnosticSink,
) {
    let Some(body) = node.child_by_field_name(field) else {
        return;
    };
    if body.kind() == ";" || unit.node_text(body) == ";" {
        sink.record(
            unit.line_of(node),
            format!(
                "this ';' ends the '{}' immediately; the statements after it always run",
                keyword
            ),
        );
    }
}

fn check_assignment_condition(
    unit: &SourceUnit,
    node: Node,
    keyword: &str,
    sink: &mut DiagnosticSink,
) {
    let Some(condition) = node.child_by_field_name("condition") else {
        return;
    };
    let inner = if condition.kind() == "parenthesized_expression" {
        condition.named_child(0)
    } else {
        Some(condition)
    };
    if let Some(expr) = inner {
        if expr.kind() == "assignment_expression" {
            sink.record(
                unit.line_of(condition),
                format!(
                    "'=' assigns inside this '{}' condition; use '==' to compare",
                    keyword
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::run_check;
    use super::*;

    #[test]
    fn test_stray_semicolon_after_if() {
        let diagnostics = run_check(
            &ControlStructure,
            r#"
public class T {
    void m(int n) {
        if (n > 0);
        {
            System.out.println("always");
        }
    }
}
"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 4);
        assert!(diagnostics[0].message.contains("';'"));
    }

    #[test]
    fn test_stray_semicolon_after_while_and_for() {
        let diagnostics = run_check(
            &ControlStructure,
            r#"
public class T {
    void m(int n) {
        while (n > 0);
        for (int i = 0; i < n; i++);
    }
}
"#,
        );
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].line, 4);
        assert_eq!(diagnostics[1].line, 5);
    }

    #[test]
    fn test_assignment_in_condition() {
        let diagnostics = run_check(
            &ControlStructure,
            r#"
public class T {
    void m(boolean done) {
        if (done = true) {
            System.out.println("oops");
        }
    }
}
"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 4);
        assert!(diagnostics[0].message.contains("'=='"));
    }

    #[test]
    fn test_normal_control_flow_is_clean() {
        let diagnostics = run_check(
            &ControlStructure,
            r#"
public class T {
    void m(int n) {
        if (n == 0) {
            return;
        }
        while (n > 0) {
            n--;
        }
        for (int i = 0; i < n; i++) {
            System.out.println(i);
        }
    }
}
"#,
        );
        assert!(diagnostics.is_empty(), "got {:?}", diagnostics);
    }
}
