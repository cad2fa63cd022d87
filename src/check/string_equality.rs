//! String comparisons with `==` / `!=`.

use tree_sitter::Node;

use crate::diagnostics::DiagnosticSink;
use crate::syntax::SourceUnit;

use super::{unwrap_parens, walk_tree, Check};

pub struct StringEquality;

impl Check for StringEquality {
    fn name(&self) -> &'static str {
        "string_equality"
    }

    fn description(&self) -> &'static str {
        "strings compared with == are compared by reference, not by contents"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut DiagnosticSink) -> anyhow::Result<()> {
        walk_tree(unit.tree.root_node(), &mut |node| {
            if node.kind() != "binary_expression" {
                return;
            }
            let Some(op) = node.child_by_field_name("operator") else {
                return;
            };
            let op_text = unit.node_text(op);
            if op_text != "==" && op_text != "!=" {
                return;
            }

            let string_operand = [node.child_by_field_name("left"), node.child_by_field_name("right")]
                .into_iter()
                .flatten()
                .any(|side| is_string_valued(side));

            if string_operand {
                sink.record(
                    unit.line_of(node),
                    format!(
                        "'{}' compares string references, not contents; use .equals instead",
                        op_text
                    ),
                );
            }
        });
        Ok(())
    }
}

/// Syntactically string-valued: a string literal, possibly parenthesized,
/// or a `+` concatenation that contains one.
fn is_string_valued(node: Node) -> bool {
    let node = unwrap_parens(node);
    match node.kind() {
        "string_literal" => true,
        "binary_expression" => {
            let is_concat = node
                .child_by_field_name("operator")
                .map(|op| op.kind() == "+")
                .unwrap_or(false);
            if !is_concat {
                return false;
            }
            [node.child_by_field_name("left"), node.child_by_field_name("right")]
                .into_iter()
                .flatten()
                .any(is_string_valued)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::run_check;
    use super::*;

    #[test]
    fn test_literal_comparison_is_flagged() {
        let diagnostics = run_check(
            &StringEquality,
            r#"
public class T {
    boolean check(String name) {
        return name == "admin";
    }
}
"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 4);
        assert!(diagnostics[0].message.contains(".equals"));
    }

    #[test]
    fn test_not_equals_is_flagged() {
        let diagnostics = run_check(
            &StringEquality,
            r#"
public class T {
    boolean check(String name) {
        return "guest" != name;
    }
}
"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'!='"));
    }

    #[test]
    fn test_concatenation_operand_is_flagged() {
        let diagnostics = run_check(
            &StringEquality,
            r#"
public class T {
    boolean check(String name, int id) {
        return name == ("user" + id);
    }
}
"#,
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_equals_call_is_clean() {
        let diagnostics = run_check(
            &StringEquality,
            r#"
public class T {
    boolean check(String name) {
        return name.equals("admin") && 1 == 1;
    }
}
"#,
        );
        assert!(diagnostics.is_empty(), "got {:?}", diagnostics);
    }
}
