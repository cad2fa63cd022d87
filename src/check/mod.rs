//! The checks that run against a parsed unit.
//!
//! Each check is one independent pass over the syntax tree; checks are
//! unaware of each other and write into the shared [`DiagnosticSink`].
//! The set is closed and known at build time: [`registry`] returns the
//! fixed, ordered list, so diagnostic ordering is stable run to run.

mod control_structure;
mod field_init;
mod int_division;
mod method_names;
mod self_assignment;
mod shadowing;
mod string_equality;
mod switch_fallthrough;

pub use control_structure::ControlStructure;
pub use field_init::FieldInit;
pub use int_division::IntDivision;
pub use method_names::MethodNames;
pub use self_assignment::SelfAssignment;
pub use shadowing::Shadowing;
pub use string_equality::StringEquality;
pub use switch_fallthrough::SwitchFallthrough;

use once_cell::sync::Lazy;
use tree_sitter::Node;

use crate::diagnostics::DiagnosticSink;
use crate::syntax::SourceUnit;

/// One analysis pass over a syntax tree.
///
/// A check reads the tree (never mutates it) and reports zero or more
/// diagnostics. Faults travel in the return value; the pipeline driver
/// absorbs them so a broken check cannot suppress the others. Checks hold
/// no state between invocations.
pub trait Check: Send + Sync {
    /// Stable registry name (used in config and failure reports).
    fn name(&self) -> &'static str;

    /// One-line description for `stylegate checks`.
    fn description(&self) -> &'static str;

    /// Traverse the unit and record diagnostics into the sink.
    fn run(&self, unit: &SourceUnit, sink: &mut DiagnosticSink) -> anyhow::Result<()>;
}

/// Fixed registration order; consumers rely on it only for stability.
static REGISTRY: Lazy<Vec<Box<dyn Check>>> = Lazy::new(|| {
    vec![
        Box::new(SwitchFallthrough),
        Box::new(StringEquality),
        Box::new(IntDivision),
        Box::new(MethodNames),
        Box::new(Shadowing),
        Box::new(SelfAssignment),
        Box::new(FieldInit),
        Box::new(ControlStructure),
    ]
});

/// All registered checks, in registration order.
pub fn registry() -> Vec<&'static dyn Check> {
    REGISTRY.iter().map(|c| c.as_ref()).collect()
}

/// Whether `name` is a registered check name.
pub fn is_known(name: &str) -> bool {
    REGISTRY.iter().any(|c| c.name() == name)
}

/// Preorder walk over every node, named and anonymous.
pub(crate) fn walk_tree(node: Node, visit: &mut dyn FnMut(Node)) {
    visit(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk_tree(child, visit);
    }
}

/// Strip parentheses: `((x))` -> `x`.
pub(crate) fn unwrap_parens(mut node: Node) -> Node {
    while node.kind() == "parenthesized_expression" {
        match node.named_child(0) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Whether a node is an integer literal of any base.
pub(crate) fn is_integer_literal(node: Node) -> bool {
    matches!(
        node.kind(),
        "decimal_integer_literal"
            | "hex_integer_literal"
            | "octal_integer_literal"
            | "binary_integer_literal"
    )
}

/// Numeric value of an integer literal, if it fits.
pub(crate) fn integer_literal_value(text: &str) -> Option<i128> {
    let t = text
        .trim_end_matches(['l', 'L'])
        .replace('_', "");
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        return i128::from_str_radix(hex, 16).ok();
    }
    if let Some(bin) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
        return i128::from_str_radix(bin, 2).ok();
    }
    if t.len() > 1 && t.starts_with('0') {
        return i128::from_str_radix(&t[1..], 8).ok();
    }
    t.parse().ok()
}

/// Name of the class enclosing `node`, if any.
pub(crate) fn enclosing_class_name<'a>(unit: &'a SourceUnit, node: Node) -> Option<&'a str> {
    let mut current = node.parent();
    while let Some(n) = current {
        if n.kind() == "class_declaration" {
            return n.child_by_field_name("name").map(|name| unit.node_text(name));
        }
        current = n.parent();
    }
    None
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_is_fixed() {
        let names: Vec<&str> = registry().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "switch_fallthrough",
                "string_equality",
                "int_division",
                "method_names",
                "shadowing",
                "self_assignment",
                "field_init",
                "control_structure",
            ]
        );
    }

    #[test]
    fn test_integer_literal_value() {
        assert_eq!(integer_literal_value("0"), Some(0));
        assert_eq!(integer_literal_value("0x0"), Some(0));
        assert_eq!(integer_literal_value("0b0"), Some(0));
        assert_eq!(integer_literal_value("00"), Some(0));
        assert_eq!(integer_literal_value("10L"), Some(10));
        assert_eq!(integer_literal_value("1_000"), Some(1000));
    }

    #[test]
    fn test_is_known() {
        assert!(is_known("shadowing"));
        assert!(!is_known("no_such_check"));
    }
}
