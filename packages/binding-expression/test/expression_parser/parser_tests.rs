/**
 * Parser Tests
 *
 * Test suite for the binding expression grammar
 */

#[path = "utils/mod.rs"]
#[allow(dead_code)]
mod utils;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::utils::{check, expect_error, expect_error_in, parse, parse_mode};
    use binding_expression::expression_parser::ast::*;
    use binding_expression::{parse_expression, ErrorCode, GrammarMode};

    fn scope(name: &str, ancestor: u32) -> Arc<Expr> {
        Arc::new(Expr::AccessScope(AccessScope {
            name: name.to_string(),
            ancestor,
        }))
    }

    fn this_member(name: &str) -> Arc<Expr> {
        Arc::new(Expr::AccessMember(AccessMember {
            object: Expr::this_scope(),
            name: name.to_string(),
            optional: false,
            access_global: false,
        }))
    }

    fn this_keyed(index: f64) -> Arc<Expr> {
        Arc::new(Expr::AccessKeyed(AccessKeyed {
            object: Expr::this_scope(),
            key: Expr::number(index),
            optional: false,
            access_global: false,
        }))
    }

    mod literals {
        use super::*;

        #[test]
        fn should_parse_numbers() {
            check("1", None);
            check("1.5", None);
            check(".5", Some("0.5"));
        }

        #[test]
        fn should_parse_strings() {
            check("'a'", None);
            check("\"a\"", Some("'a'"));
        }

        #[test]
        fn should_parse_keyword_literals() {
            check("true", None);
            check("false", None);
            check("null", None);
            check("undefined", None);
        }

        #[test]
        fn should_share_literal_singletons() {
            assert!(Arc::ptr_eq(&parse("null"), &Expr::null()));
            assert!(Arc::ptr_eq(&parse("true"), &Expr::true_()));
            assert!(Arc::ptr_eq(&parse("''"), &Expr::empty_string()));
            assert!(Arc::ptr_eq(&parse("[]"), &Expr::empty_array()));
            assert!(Arc::ptr_eq(&parse("{}"), &Expr::empty_object()));
            assert!(Arc::ptr_eq(&parse("``"), &Expr::empty_template()));
        }

        #[test]
        fn should_parse_array_literals() {
            check("[1, 2]", Some("[1,2]"));
            check("[a, [b]]", Some("[a,[b]]"));
        }

        #[test]
        fn should_parse_array_holes_as_undefined() {
            let ast = parse("[a, , b]");
            let Expr::ArrayLiteral(array) = ast.as_ref() else {
                panic!("expected array literal, got {:?}", ast)
            };
            assert_eq!(array.elements.len(), 3);
            assert!(Arc::ptr_eq(&array.elements[1], &Expr::undefined()));
        }

        #[test]
        fn should_parse_object_literals() {
            check("{a: 1, 'b-c': 2, 3: x}", Some("{a:1,'b-c':2,3:x}"));
            check("{a}", Some("{a:a}"));
            check("{true: 1}", Some("{true:1}"));
        }

        #[test]
        fn should_parse_templates() {
            check("`a${b}c`", None);
            check("`${a}${b}`", None);
            check("``", None);
        }

        #[test]
        fn should_parse_tagged_templates() {
            let ast = parse(r"tag`a\n${b}`");
            let Expr::TaggedTemplate(template) = ast.as_ref() else {
                panic!("expected tagged template, got {:?}", ast)
            };
            assert_eq!(template.cooked, vec!["a\n".to_string(), String::new()]);
            assert_eq!(template.raw, vec![r"a\n".to_string(), String::new()]);
            assert_eq!(*template.func, *scope("tag", 0));
            assert_eq!(template.expressions.len(), 1);
        }
    }

    mod operators {
        use super::*;

        #[test]
        fn should_parse_unary_expressions() {
            check("-a", Some("(-a)"));
            check("+a", Some("(+a)"));
            check("!a.b", Some("(!a.b)"));
            check("!!a", Some("(!(!a))"));
            check("typeof a === 'x'", Some("((typeof a) === 'x')"));
            check("void 0", Some("(void 0)"));
        }

        #[test]
        fn should_parse_update_expressions() {
            check("a++", Some("(a++)"));
            check("--a.b", Some("(--a.b)"));
        }

        #[test]
        fn should_parse_multiplicative_before_additive() {
            check("a + b * c", Some("(a + (b * c))"));
            check("a * b + c", Some("((a * b) + c)"));
            check("3*4/2%5", Some("(((3 * 4) / 2) % 5)"));
        }

        #[test]
        fn should_parse_left_associative_operators() {
            check("a - b - c", Some("((a - b) - c)"));
        }

        #[test]
        fn should_parse_exponent_right_associative() {
            check("a ** b ** c", Some("(a ** (b ** c))"));
            check("a * b ** c", Some("(a * (b ** c))"));
        }

        #[test]
        fn should_parse_relational_and_equality() {
            check("a < b == c", Some("((a < b) == c)"));
            check("a in b", Some("(a in b)"));
            check("a instanceof b", Some("(a instanceof b)"));
            check("a !== b", Some("(a !== b)"));
        }

        #[test]
        fn should_parse_logical_operators() {
            check("a && b || c", Some("((a && b) || c)"));
            check("a || b && c", Some("(a || (b && c))"));
            check("a ?? b || c", Some("(a ?? (b || c))"));
        }

        #[test]
        fn should_parse_grouped_expressions() {
            check("(a + b) * c", Some("((a + b) * c)"));
        }

        #[test]
        fn should_parse_conditionals() {
            check("a ? b : c", Some("(a ? b : c)"));
            check("a ? b : c ? d : e", Some("(a ? b : (c ? d : e))"));
            check("a || b ? c : d", Some("((a || b) ? c : d)"));
        }

        #[test]
        fn should_parse_assignments() {
            check("a = b", Some("(a = b)"));
            check("a = b = c", Some("(a = (b = c))"));
            check("a.b += 1", Some("(a.b += 1)"));
            check("a[0] *= 2", Some("(a[0] *= 2)"));
            check("a = b ? c : d", Some("(a = (b ? c : d))"));
        }

        #[test]
        fn should_reject_non_assignable_targets() {
            expect_error("1 = 2", ErrorCode::LhsNotAssignable);
            expect_error("a + b = c", ErrorCode::LhsNotAssignable);
            expect_error("a() = b", ErrorCode::LhsNotAssignable);
            expect_error("a?.b = c", ErrorCode::LhsNotAssignable);
            expect_error("++1", ErrorCode::LhsNotAssignable);
            expect_error("a?.b++", ErrorCode::LhsNotAssignable);
        }
    }

    mod access {
        use super::*;

        #[test]
        fn should_parse_scope_access() {
            assert_eq!(*parse("a"), *scope("a", 0));
            check("a.b.c", None);
            check("a[0]", None);
            check("a['b']", None);
        }

        #[test]
        fn should_parse_this_and_parent() {
            assert!(Arc::ptr_eq(&parse("$this"), &Expr::this_scope()));
            assert!(Arc::ptr_eq(&parse("$parent"), &Expr::parent_scope()));
            assert_eq!(*parse("$parent.$parent"), *Expr::access_this(2));
            assert_eq!(*parse("$parent.$parent.a"), *scope("a", 2));
            assert_eq!(*parse("$this.a"), *scope("a", 0));
            check("$this[0]", None);
        }

        #[test]
        fn should_parse_boundary() {
            assert!(Arc::ptr_eq(&parse("this"), &Expr::boundary()));
            check("this.a", None);
        }

        #[test]
        fn should_reject_invalid_scope_members() {
            expect_error("$parent.1", ErrorCode::InvalidMemberExpression);
            expect_error("$this a", ErrorCode::InvalidMemberExpression);
            expect_error("$parent.", ErrorCode::UnexpectedEndOfExpression);
        }

        #[test]
        fn should_parse_optional_chain_shape() {
            let expected = Expr::AccessMember(AccessMember {
                object: Arc::new(Expr::AccessMember(AccessMember {
                    object: scope("a", 0),
                    name: "b".to_string(),
                    optional: true,
                    access_global: false,
                })),
                name: "c".to_string(),
                optional: false,
                access_global: false,
            });
            assert_eq!(*parse("a?.b.c"), expected);
        }

        #[test]
        fn should_parse_optional_keyed_and_calls() {
            check("a?.[0]", None);
            check("a?.()", None);
            check("a?.b()", None);
            check("a.b?.()", None);
            check("$this?.a", None);
        }

        #[test]
        fn should_reject_bad_optional_chains() {
            expect_error("a?.`x`", ErrorCode::InvalidTaggedTemplateOnOptionalChain);
            expect_error("a?.b`x`", ErrorCode::InvalidTaggedTemplateOnOptionalChain);
            expect_error("a?.+", ErrorCode::UnexpectedTokenInOptionalChain);
        }

        #[test]
        fn should_detect_global_access() {
            let ast = parse("Math.max(1, 2)");
            let Expr::CallMember(call) = ast.as_ref() else {
                panic!("expected member call, got {:?}", ast)
            };
            assert_eq!(call.name, "max");
            assert!(call.object.access_global());
            assert!(ast.access_global());

            let ast = parse("math.max(1, 2)");
            assert!(!ast.access_global());
        }

        #[test]
        fn should_propagate_global_flag_through_members() {
            let ast = parse("JSON.parse");
            let Expr::AccessMember(member) = ast.as_ref() else {
                panic!("expected member access")
            };
            assert!(member.access_global);
            assert!(!parse("json.parse").access_global());
        }

        #[test]
        fn should_parse_global_calls() {
            let ast = parse("parseInt('1')");
            assert_eq!(ast.kind(), ExpressionKind::CallGlobal);
            check("parseInt('1')", None);
            assert_eq!(parse("Math?.()").kind(), ExpressionKind::CallFunction);
        }

        #[test]
        fn should_reject_missing_member_names() {
            expect_error("a.", ErrorCode::ExpectedIdentifier);
            expect_error("a.1", ErrorCode::UnconsumedToken);
            expect_error("a..b", ErrorCode::UnexpectedDoubleDot);
        }
    }

    mod calls {
        use super::*;

        #[test]
        fn should_parse_calls() {
            check("a()", None);
            check("a.b(1, 2)", Some("a.b(1,2)"));
            check("a()()", None);
            check("$parent.a(b)", None);
        }

        #[test]
        fn should_call_members_of_number_with_trailing_dot() {
            check("1..toString()", Some("1.toString()"));
            check("1. + 2", Some("(1 + 2)"));
        }

        #[test]
        fn should_build_call_kinds() {
            assert_eq!(parse("a()").kind(), ExpressionKind::CallScope);
            assert_eq!(parse("a.b()").kind(), ExpressionKind::CallMember);
            assert_eq!(parse("a()()").kind(), ExpressionKind::CallFunction);
            assert_eq!(parse("(a || b)()").kind(), ExpressionKind::CallFunction);
        }

        #[test]
        fn should_parse_new() {
            check("new Date()", None);
            check("new Foo", Some("new Foo()"));
            check("new a.b(1)", None);
            check("new a[0]", Some("new a[0]()"));
        }

        #[test]
        fn should_report_unclosed_arguments() {
            let err = parse_expression("a(b", GrammarMode::IsProperty).unwrap_err();
            assert_eq!(err.code, ErrorCode::MissingExpectedToken);
            assert!(err.message.contains("')'"));
        }
    }

    mod pipelines {
        use super::*;

        #[test]
        fn should_chain_converters_and_behaviors() {
            let expected = Expr::BindingBehavior(BindingBehavior::new(
                Arc::new(Expr::ValueConverter(ValueConverter {
                    expression: scope("value", 0),
                    name: "toUpperCase".to_string(),
                    args: vec![],
                })),
                "debounce".to_string(),
                vec![Expr::number(500.0)],
            ));
            assert_eq!(*parse("value | toUpperCase & debounce:500"), expected);
        }

        #[test]
        fn should_parse_converter_arguments() {
            check("a | b:1:c & d:e", Some("a|b:1:c&d:e"));
            check("a | b:(c ? d : e)", Some("a|b:(c ? d : e)"));
        }

        #[test]
        fn should_store_behavior_key() {
            let ast = parse("a & throttle");
            let Expr::BindingBehavior(bb) = ast.as_ref() else {
                panic!("expected binding behavior")
            };
            assert_eq!(bb.key, "_bb_throttle");
        }

        #[test]
        fn should_reject_empty_pipeline_names() {
            expect_error("a |", ErrorCode::ExpectedValueConverterIdentifier);
            expect_error("a | 1", ErrorCode::ExpectedValueConverterIdentifier);
            expect_error("a & 1", ErrorCode::ExpectedBindingBehaviorIdentifier);
        }

        #[test]
        fn should_reject_converter_after_behavior() {
            expect_error("a & b | c", ErrorCode::UnconsumedToken);
        }
    }

    mod arrows {
        use super::*;

        #[test]
        fn should_parse_arrow_functions() {
            check("x => x.y", Some("(x) => x.y"));
            check("(a, b) => a + b", Some("(a,b) => (a + b)"));
            check("() => 1", None);
            check("(...rest) => rest", None);
            check("(a, ...rest) => rest", Some("(a,...rest) => rest"));
        }

        #[test]
        fn should_parse_arrows_as_arguments() {
            check("items.map(x => x * 2)", Some("items.map(((x) => (x * 2)))"));
        }

        #[test]
        fn should_count_arrow_scopes() {
            let ast = parse("x => $this.y");
            let Expr::ArrowFunction(arrow) = ast.as_ref() else {
                panic!("expected arrow function")
            };
            assert_eq!(*arrow.body, *scope("y", 1));

            let ast = parse("x => $parent");
            let Expr::ArrowFunction(arrow) = ast.as_ref() else {
                panic!("expected arrow function")
            };
            assert_eq!(*arrow.body, *Expr::access_this(2));
        }

        #[test]
        fn should_fall_back_to_parenthesized_expression() {
            assert_eq!(*parse("(a)"), *scope("a", 0));
            expect_error("(a, b)", ErrorCode::MissingExpectedToken);
        }

        #[test]
        fn should_reject_unsupported_parameters() {
            expect_error("(a, ...b, c) => a", ErrorCode::RestParamsMustBeLast);
            expect_error("(a = 1) => a", ErrorCode::DefaultParamsInArrowFn);
            expect_error("([a]) => a", ErrorCode::DestructuringParamsInArrowFn);
            expect_error("({a}) => a", ErrorCode::DestructuringParamsInArrowFn);
            expect_error("(a.b) => a", ErrorCode::InvalidArrowParameterList);
            expect_error("a => {}", ErrorCode::FunctionBodyInArrowFn);
            expect_error("()", ErrorCode::MissingExpectedToken);
        }
    }

    mod destructuring {
        use super::*;

        #[test]
        fn should_parse_bracket_as_literal_outside_iterators() {
            assert_eq!(parse("[a,b]").kind(), ExpressionKind::ArrayLiteral);
        }

        #[test]
        fn should_convert_literal_assignment_targets() {
            let ast = parse("[a, , b] = c");
            let Expr::Assign(assign) = ast.as_ref() else {
                panic!("expected assignment, got {:?}", ast)
            };
            let expected = Expr::ArrayDestructuring(Destructuring {
                list: vec![
                    Arc::new(Expr::DestructuringAssignmentSingle(
                        DestructuringAssignmentSingle {
                            target: this_member("a"),
                            source: this_keyed(0.0),
                            initializer: None,
                        },
                    )),
                    Arc::new(Expr::DestructuringAssignmentSingle(
                        DestructuringAssignmentSingle {
                            target: this_member("b"),
                            source: this_keyed(2.0),
                            initializer: None,
                        },
                    )),
                ],
                source: None,
                initializer: None,
            });
            assert_eq!(*assign.target, expected);
            assert_eq!(*assign.value, *scope("c", 0));
        }

        #[test]
        fn should_convert_object_targets_with_defaults() {
            let ast = parse("{a, b: c = 1} = d");
            let Expr::Assign(assign) = ast.as_ref() else {
                panic!("expected assignment")
            };
            let Expr::ObjectDestructuring(target) = assign.target.as_ref() else {
                panic!("expected object destructuring")
            };
            assert_eq!(target.list.len(), 2);
            let Expr::DestructuringAssignmentSingle(second) = target.list[1].as_ref() else {
                panic!("expected single assignment")
            };
            assert_eq!(*second.target, *this_member("c"));
            assert_eq!(*second.source, *this_member("b"));
            assert_eq!(second.initializer, Some(Expr::number(1.0)));
        }

        #[test]
        fn should_reject_invalid_destructuring_targets() {
            expect_error("[a + b] = c", ErrorCode::LhsNotAssignable);
            expect_error("{a: 1} = c", ErrorCode::LhsNotAssignable);
        }
    }

    mod iterators {
        use super::*;

        fn for_of(text: &str) -> ForOfStatement {
            match parse_mode(text, GrammarMode::IsIterator).as_ref() {
                Expr::ForOfStatement(stmt) => stmt.clone(),
                other => panic!("expected for-of, got {:?}", other),
            }
        }

        #[test]
        fn should_parse_binding_identifier() {
            let stmt = for_of("item of items");
            assert_eq!(
                *stmt.declaration,
                Expr::BindingIdentifier(BindingIdentifier {
                    name: "item".to_string()
                })
            );
            assert_eq!(*stmt.iterable, *scope("items", 0));
            assert_eq!(stmt.semicolon_index, None);
        }

        #[test]
        fn should_parse_array_binding_pattern() {
            let stmt = for_of("[a,b] of items");
            assert_eq!(stmt.declaration.kind(), ExpressionKind::ArrayBindingPattern);
        }

        #[test]
        fn should_parse_object_binding_pattern() {
            let stmt = for_of("{a, b: c} of items");
            let Expr::ObjectBindingPattern(pattern) = stmt.declaration.as_ref() else {
                panic!("expected object binding pattern")
            };
            assert_eq!(
                pattern.keys,
                vec![
                    PropertyKey::Name("a".to_string()),
                    PropertyKey::Name("b".to_string())
                ]
            );
            assert_eq!(
                *pattern.values[1],
                Expr::BindingIdentifier(BindingIdentifier {
                    name: "c".to_string()
                })
            );
        }

        #[test]
        fn should_lower_complex_patterns_to_destructuring() {
            let stmt = for_of("[a = 1, [b]] of items");
            let Expr::ArrayDestructuring(outer) = stmt.declaration.as_ref() else {
                panic!("expected array destructuring, got {:?}", stmt.declaration)
            };
            assert_eq!(outer.list.len(), 2);
            let Expr::ArrayDestructuring(nested) = outer.list[1].as_ref() else {
                panic!("expected nested destructuring")
            };
            assert_eq!(nested.source, Some(this_keyed(1.0)));
        }

        #[test]
        fn should_allow_pipelines_on_iterable() {
            let stmt = for_of("[key, value] of map | entries");
            assert_eq!(stmt.iterable.kind(), ExpressionKind::ValueConverter);
        }

        #[test]
        fn should_record_semicolon_index() {
            let stmt = for_of("item of items; key: id");
            assert_eq!(stmt.semicolon_index, Some(13));
        }

        #[test]
        fn should_reject_invalid_declarations() {
            let mode = GrammarMode::IsIterator;
            expect_error_in("a.b of items", mode, ErrorCode::InvalidLhsBindingIdentifierInForOf);
            expect_error_in("1 of items", mode, ErrorCode::InvalidLhsBindingIdentifierInForOf);
            expect_error_in("item in items", mode, ErrorCode::InvalidLhsBindingIdentifierInForOf);
            expect_error_in("[a, ...b] of c", mode, ErrorCode::InvalidSpreadOp);
            expect_error_in("[a, 1] of c", mode, ErrorCode::UnexpectedTokenInDestructuring);
            expect_error_in("item of items;", mode, ErrorCode::UnconsumedToken);
            expect_error_in("", mode, ErrorCode::InvalidEmptyExpression);
        }

        #[test]
        fn should_reject_of_outside_iterators() {
            expect_error("a of b", ErrorCode::UnexpectedOfKeyword);
        }
    }

    mod interpolation {
        use super::*;

        fn interpolate(text: &str) -> Interpolation {
            match parse_mode(text, GrammarMode::Interpolation).as_ref() {
                Expr::Interpolation(interpolation) => interpolation.clone(),
                other => panic!("expected interpolation, got {:?}", other),
            }
        }

        #[test]
        fn should_split_parts_and_holes() {
            let result = interpolate("Hello ${name}!");
            assert_eq!(result.parts, vec!["Hello ".to_string(), "!".to_string()]);
            assert_eq!(result.expressions, vec![scope("name", 0)]);
            assert!(!result.is_multi());
        }

        #[test]
        fn should_parse_adjacent_holes() {
            let result = interpolate("${a}${b | upper}");
            assert_eq!(result.parts, vec![String::new(), String::new(), String::new()]);
            assert_eq!(result.expressions[1].kind(), ExpressionKind::ValueConverter);
            assert!(result.is_multi());
        }

        #[test]
        fn should_keep_text_without_holes() {
            let result = interpolate("plain text");
            assert_eq!(result.parts, vec!["plain text".to_string()]);
            assert!(result.expressions.is_empty());
        }

        #[test]
        fn should_honor_escapes() {
            let result = interpolate(r"\${a}");
            assert_eq!(result.parts, vec!["${a}".to_string()]);
            assert!(result.expressions.is_empty());
        }

        #[test]
        fn should_allow_object_literals_in_holes() {
            let result = interpolate("${ {a: 1}.a }");
            assert_eq!(result.expressions[0].kind(), ExpressionKind::AccessMember);
        }

        #[test]
        fn should_reject_bad_holes() {
            let mode = GrammarMode::Interpolation;
            expect_error_in("${a", mode, ErrorCode::MissingExpectedToken);
            expect_error_in("${a b}", mode, ErrorCode::UnconsumedToken);
            expect_error_in("${}", mode, ErrorCode::InvalidStartOfExpression);
            expect_error_in("", mode, ErrorCode::InvalidEmptyExpression);
        }
    }

    mod modes {
        use super::*;

        #[test]
        fn should_apply_empty_expression_policy() {
            for mode in [GrammarMode::IsProperty, GrammarMode::IsFunction] {
                let ast = parse_expression("", mode).unwrap();
                assert!(Arc::ptr_eq(&ast, &Expr::empty_string()));
            }
            for mode in [GrammarMode::None, GrammarMode::IsChainable, GrammarMode::IsCustom] {
                expect_error_in("", mode, ErrorCode::InvalidEmptyExpression);
            }
        }

        #[test]
        fn should_wrap_custom_text() {
            let ast = parse_mode("a b @ c", GrammarMode::IsCustom);
            assert_eq!(
                *ast,
                Expr::Custom(Custom {
                    value: "a b @ c".to_string()
                })
            );
        }

        #[test]
        fn should_accept_chainable_semicolon() {
            let ast = parse_mode("a; b", GrammarMode::IsChainable);
            assert_eq!(*ast, *scope("a", 0));
            expect_error_in("a;", GrammarMode::IsChainable, ErrorCode::UnconsumedToken);
            expect_error("a; b", ErrorCode::UnconsumedToken);
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn should_report_structural_errors() {
            expect_error("a b", ErrorCode::UnconsumedToken);
            expect_error(")", ErrorCode::InvalidStartOfExpression);
            expect_error("a +", ErrorCode::UnexpectedEndOfExpression);
            expect_error("...a", ErrorCode::InvalidSpreadOp);
            expect_error("import", ErrorCode::UnexpectedImportKeyword);
            expect_error("{1 + 2}", ErrorCode::InvalidPropDefInObjLiteral);
            expect_error("{'a'}", ErrorCode::InvalidPropDefInObjLiteral);
            expect_error("(a", ErrorCode::MissingExpectedToken);
            expect_error("a[0", ErrorCode::MissingExpectedToken);
            expect_error("`${a", ErrorCode::UnterminatedTemplateLiteral);
            expect_error("'a", ErrorCode::UnterminatedStringLiteral);
        }

        #[test]
        fn should_report_offset_and_source() {
            let err = parse_expression("a b", GrammarMode::IsProperty).unwrap_err();
            assert_eq!(err.offset, Some(2));
            assert_eq!(err.expression, "a b");
            assert_eq!(
                err.to_string(),
                "Unconsumed token at column 2 in expression [a b]"
            );
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn should_serialize_with_type_tags() {
            let ast = parse("a.b");
            let json = serde_json::to_value(ast.as_ref()).unwrap();
            assert_eq!(json["type"], "AccessMember");
            assert_eq!(json["data"]["name"], "b");
            assert_eq!(json["data"]["object"]["type"], "AccessScope");
        }

        #[test]
        fn should_deserialize_to_equal_tree() {
            let ast = parse("a ? b | c : [1, 'x', {k: v}]");
            let json = serde_json::to_string(ast.as_ref()).unwrap();
            let back: Expr = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *ast);
        }
    }
}
