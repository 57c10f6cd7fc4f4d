/**
 * Unparser Tests
 *
 * Serializing parsed trees back to text and parsing that text again
 */

#[path = "utils/mod.rs"]
#[allow(dead_code)]
mod utils;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::utils::{assert_roundtrip, parse, parse_mode};
    use binding_expression::expression_parser::ast::*;
    use binding_expression::expression_parser::Unparser;
    use binding_expression::{unparse, GrammarMode};

    const PROPERTY_CORPUS: &[&str] = &[
        "a",
        "a.b.c",
        "a[b][0]",
        "$this",
        "$parent",
        "$parent.$parent.a",
        "this.a",
        "'it\\'s'",
        "1.5",
        "true && !false",
        "a + b * c - d / e % f",
        "a ** b ** c",
        "typeof a === 'string' ? a : String(a)",
        "a ?? b ?? c",
        "a in b && c instanceof d",
        "a = b = c",
        "a.b += c[d] -= 1",
        "++a + b--",
        "void 0",
        "a(b, c)",
        "a.b(c)(d)",
        "Math.max(a, b)",
        "parseFloat(a)",
        "new Date(a)",
        "new (a.b())",
        "new (a().b)()",
        "new (a?.b)()",
        "new a.b[c]()",
        "$this.Math",
        "$this.Math()",
        "$this.true",
        "$this.import",
        "$this.$parent",
        "[a, [b, c], {d: e}]",
        "[a, , b]",
        "{a, 'b-c': d, 1: e}",
        "`a${b}c${d}`",
        "`a\\`b`",
        "tag`a\\n${b}`",
        "a?.b?.c",
        "a?.[b]",
        "a?.b?.()",
        "a?.()",
        "$this?.a",
        "x => x.y",
        "(a, b) => a + b",
        "(...rest) => rest.length",
        "() => $parent.a",
        "items.map(x => x * 2)",
        "x => y => $parent.x + y",
        "a | b",
        "a | b:c:1 & d:e",
        "(a | b).c",
        "(a & b)(c)",
        "[a, b] = c",
        "{a, b: c = 1} = d",
        "[a, [b]] = c",
    ];

    #[test]
    fn should_roundtrip_property_expressions() {
        for text in PROPERTY_CORPUS {
            assert_roundtrip(text, GrammarMode::IsProperty);
        }
    }

    #[test]
    fn should_roundtrip_iterators() {
        for text in [
            "item of items",
            "[key, value] of map | entries",
            "[a, , b] of items",
            "{a, b: c} of items",
            "[a = 1, [b]] of items",
            "{a: {b}} of items",
        ] {
            assert_roundtrip(text, GrammarMode::IsIterator);
        }
    }

    #[test]
    fn should_roundtrip_interpolations() {
        for text in [
            "plain",
            "Hello ${name}!",
            "${a}${b | upper}",
            "\\${not a hole} ${a}",
            "back\\\\slash ${a}",
        ] {
            assert_roundtrip(text, GrammarMode::Interpolation);
        }
    }

    #[test]
    fn should_unparse_assignment_destructuring() {
        assert_eq!(unparse(&parse("[a, b] = c")), "([a,b] = c)");
        assert_eq!(unparse(&parse("{a, b: c} = d")), "({a,b:c} = d)");
    }

    #[test]
    fn should_unparse_iterator_declarations() {
        let ast = parse_mode("{a, b: c} of items", GrammarMode::IsIterator);
        assert_eq!(unparse(&ast), "{a,b:c} of items");
        let ast = parse_mode("[a, , ] of items", GrammarMode::IsIterator);
        assert_eq!(unparse(&ast), "[a,,] of items");
    }

    #[test]
    fn should_unparse_interpolation_text() {
        let ast = parse_mode("a ${b} \\${c}", GrammarMode::Interpolation);
        assert_eq!(unparse(&ast), "a ${b} \\${c}");
    }

    #[test]
    fn should_parenthesize_pipelines_in_operands() {
        assert_eq!(unparse(&parse("(a | b) + c")), "((a|b) + c)");
        assert_eq!(unparse(&parse("f(a | b)")), "f((a|b))");
    }

    #[test]
    fn should_keep_this_prefix_for_reserved_names() {
        assert_eq!(unparse(&parse("$this.Math")), "$this.Math");
        assert_eq!(unparse(&parse("$this.Math(1)")), "$this.Math(1)");
        assert_eq!(unparse(&parse("$this.true")), "$this.true");
        assert_eq!(unparse(&parse("$this.import")), "$this.import");
        assert_eq!(unparse(&parse("$this.name")), "name");
    }

    #[test]
    fn should_parenthesize_new_callee_with_calls() {
        assert_eq!(unparse(&parse("new (a().b)()")), "new (a().b)()");
        assert_eq!(unparse(&parse("new (a?.b)")), "new (a?.b)()");
        assert_eq!(unparse(&parse("new a.b[0]")), "new a.b[0]()");
    }

    #[test]
    fn should_bound_array_destructuring_slots() {
        let item = |index: f64| {
            Arc::new(Expr::DestructuringAssignmentSingle(DestructuringAssignmentSingle {
                target: Arc::new(Expr::AccessMember(AccessMember {
                    object: Expr::this_scope(),
                    name: "a".to_string(),
                    optional: false,
                    access_global: false,
                })),
                source: Arc::new(Expr::AccessKeyed(AccessKeyed {
                    object: Expr::this_scope(),
                    key: Expr::number(index),
                    optional: false,
                    access_global: false,
                })),
                initializer: None,
            }))
        };
        let ast = Expr::ArrayDestructuring(Destructuring {
            list: vec![item(1e15), item(-1.0), item(0.5)],
            source: None,
            initializer: None,
        });
        assert_eq!(unparse(&ast), "[a,a,a]");

        let ast = Expr::ArrayDestructuring(Destructuring {
            list: vec![item(2.0)],
            source: None,
            initializer: None,
        });
        assert_eq!(unparse(&ast), "[,,a]");
    }

    #[test]
    fn should_unparse_custom_verbatim() {
        let ast = parse_mode("anything @ goes", GrammarMode::IsCustom);
        assert_eq!(unparse(&ast), "anything @ goes");
    }

    #[test]
    fn should_reset_depth_between_uses() {
        let mut unparser = Unparser::new();
        let first = parse("x => $parent.a");
        let second = parse("$parent.a");
        assert_eq!(first.accept(&mut unparser), "(x) => $parent.a");
        assert_eq!(second.accept(&mut unparser), "$parent.a");
    }
}
