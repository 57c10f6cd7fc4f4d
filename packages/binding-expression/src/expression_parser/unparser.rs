/**
 * Binding Expression Unparser
 *
 * Serializes an AST back to normalized source text
 */

use super::ast::*;
use super::lexer::is_keyword;
use crate::chars;

/// Largest hole run written between two array destructuring slots.
const MAX_HOLES: usize = 1024;

/// Serialize an expression to text that parses back to an equal tree.
pub fn unparse(expr: &Expr) -> String {
    let mut unparser = Unparser::new();
    visit(expr, &mut unparser)
}

/// Reference visitor. Operators are always parenthesized, strings always
/// single-quoted, and scope hops always spelled out.
pub struct Unparser {
    /// Number of enclosing arrow functions.
    depth: u32,
}

impl Unparser {
    pub fn new() -> Self {
        Unparser { depth: 0 }
    }

    /// Render a sub-expression that the grammar parses at assignment level.
    fn operand(&mut self, expr: &Expr) -> String {
        let text = visit(expr, self);
        match expr {
            Expr::ValueConverter(_) | Expr::BindingBehavior(_) | Expr::ArrowFunction(_) => {
                format!("({})", text)
            }
            _ => text,
        }
    }

    fn list(&mut self, exprs: &[std::sync::Arc<Expr>]) -> String {
        exprs
            .iter()
            .map(|e| self.operand(e))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn args(&mut self, args: &[std::sync::Arc<Expr>]) -> String {
        format!("({})", self.list(args))
    }

    fn pipeline_args(&mut self, args: &[std::sync::Arc<Expr>]) -> String {
        args.iter().map(|a| format!(":{}", self.operand(a))).collect()
    }

    /// `name`, `$this.name` or `$parent.name`, relative to the arrow depth.
    /// Names that would not read back as a scope access keep `$this.`.
    fn scope(&self, name: &str, ancestor: u32) -> String {
        if ancestor == 0 && is_plain_name(name) {
            return name.to_string();
        }
        format!("{}.{}", self.hops(ancestor), name)
    }

    fn hops(&self, ancestor: u32) -> String {
        let relative = ancestor.saturating_sub(self.depth);
        if relative == 0 {
            return "$this".to_string();
        }
        vec!["$parent"; relative as usize].join(".")
    }

    fn array_destructuring(&mut self, ast: &Destructuring) -> String {
        let mut slots: Vec<String> = Vec::new();
        for item in &ast.list {
            let next = slots.len();
            let index = match source_of(item) {
                Some(Expr::AccessKeyed(keyed)) => match keyed.key.as_ref() {
                    Expr::PrimitiveLiteral(PrimitiveLiteral {
                        value: Primitive::Number(n),
                    }) if n.fract() == 0.0
                        && *n >= next as f64
                        && *n <= (next + MAX_HOLES) as f64 =>
                    {
                        *n as usize
                    }
                    _ => next,
                },
                _ => next,
            };
            slots.resize(index, String::new());
            slots.push(self.destructuring_target(item));
        }
        let mut text = slots.join(",");
        if slots.last().is_some_and(|s| s.is_empty()) {
            text.push(',');
        }
        format!("[{}]", text)
    }

    fn object_destructuring(&mut self, ast: &Destructuring) -> String {
        let props = ast
            .list
            .iter()
            .map(|item| {
                let key = match source_of(item) {
                    Some(Expr::AccessMember(member)) => property_name(&member.name),
                    Some(Expr::AccessKeyed(keyed)) => visit(&keyed.key, self),
                    _ => String::new(),
                };
                let target = self.destructuring_target(item);
                if target == key {
                    key
                } else {
                    format!("{}:{}", key, target)
                }
            })
            .collect::<Vec<_>>()
            .join(",");
        format!("{{{}}}", props)
    }

    /// One destructuring entry: a name or a nested pattern, with its default.
    fn destructuring_target(&mut self, item: &Expr) -> String {
        let (target, initializer) = match item {
            Expr::DestructuringAssignmentSingle(single) => {
                let name = match single.target.as_ref() {
                    Expr::AccessMember(member) => member.name.clone(),
                    other => visit(other, self),
                };
                (name, single.initializer.as_ref())
            }
            Expr::ArrayDestructuring(nested) => {
                (self.array_destructuring(nested), nested.initializer.as_ref())
            }
            Expr::ObjectDestructuring(nested) => {
                (self.object_destructuring(nested), nested.initializer.as_ref())
            }
            other => (visit(other, self), None),
        };
        match initializer {
            Some(init) => format!("{}={}", target, self.operand(init)),
            None => target,
        }
    }
}

impl Default for Unparser {
    fn default() -> Self {
        Self::new()
    }
}

fn source_of(item: &Expr) -> Option<&Expr> {
    match item {
        Expr::DestructuringAssignmentSingle(single) => Some(single.source.as_ref()),
        Expr::ArrayDestructuring(nested) | Expr::ObjectDestructuring(nested) => {
            nested.source.as_deref()
        }
        _ => None,
    }
}

/// A name that parses back to a scope access on its own.
fn is_plain_name(name: &str) -> bool {
    is_identifier(name) && !is_keyword(name) && !is_global_name(name) && name != "import"
}

/// A `new` callee the grammar reads without parentheses: an access chain
/// of plain `.` and `[]` steps.
fn is_plain_callee(expr: &Expr) -> bool {
    match expr {
        Expr::AccessScope(_) | Expr::AccessGlobal(_) | Expr::AccessThis(_) | Expr::AccessBoundary(_) => {
            true
        }
        Expr::AccessMember(member) => !member.optional && is_plain_callee(&member.object),
        Expr::AccessKeyed(keyed) => !keyed.optional && is_plain_callee(&keyed.object),
        _ => false,
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars_iter = name.chars();
    match chars_iter.next() {
        Some(first) if chars::is_identifier_start(first) => {
            chars_iter.all(chars::is_identifier_part)
        }
        _ => false,
    }
}

fn property_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            chars::LF => out.push_str("\\n"),
            chars::CR => out.push_str("\\r"),
            chars::TAB => out.push_str("\\t"),
            chars::BSPACE => out.push_str("\\b"),
            chars::FF => out.push_str("\\f"),
            chars::VTAB => out.push_str("\\v"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Escape a cooked template segment.
fn template_part(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

fn number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        "Infinity".to_string()
    } else {
        value.to_string()
    }
}

fn property_key(key: &PropertyKey) -> String {
    match key {
        PropertyKey::Name(name) => property_name(name),
        PropertyKey::Number(n) => number(*n),
    }
}

impl Visitor for Unparser {
    type Output = String;

    fn visit_access_this(&mut self, ast: &AccessThis) -> String {
        self.hops(ast.ancestor)
    }

    fn visit_access_boundary(&mut self, _ast: &AccessBoundary) -> String {
        "this".to_string()
    }

    fn visit_access_scope(&mut self, ast: &AccessScope) -> String {
        self.scope(&ast.name, ast.ancestor)
    }

    fn visit_access_global(&mut self, ast: &AccessGlobal) -> String {
        ast.name.clone()
    }

    fn visit_access_member(&mut self, ast: &AccessMember) -> String {
        let dot = if ast.optional { "?." } else { "." };
        format!("{}{}{}", self.operand(&ast.object), dot, ast.name)
    }

    fn visit_access_keyed(&mut self, ast: &AccessKeyed) -> String {
        let dot = if ast.optional { "?." } else { "" };
        format!(
            "{}{}[{}]",
            self.operand(&ast.object),
            dot,
            self.operand(&ast.key)
        )
    }

    fn visit_call_scope(&mut self, ast: &CallScope) -> String {
        let dot = if ast.optional { "?." } else { "" };
        format!(
            "{}{}{}",
            self.scope(&ast.name, ast.ancestor),
            dot,
            self.args(&ast.args)
        )
    }

    fn visit_call_member(&mut self, ast: &CallMember) -> String {
        let member = if ast.optional_member { "?." } else { "." };
        let call = if ast.optional_call { "?." } else { "" };
        format!(
            "{}{}{}{}{}",
            self.operand(&ast.object),
            member,
            ast.name,
            call,
            self.args(&ast.args)
        )
    }

    fn visit_call_function(&mut self, ast: &CallFunction) -> String {
        let dot = if ast.optional { "?." } else { "" };
        format!("{}{}{}", self.operand(&ast.func), dot, self.args(&ast.args))
    }

    fn visit_call_global(&mut self, ast: &CallGlobal) -> String {
        format!("{}{}", ast.name, self.args(&ast.args))
    }

    fn visit_new(&mut self, ast: &New) -> String {
        let callee = visit(&ast.func, self);
        let callee = if is_plain_callee(&ast.func) {
            callee
        } else {
            format!("({})", callee)
        };
        format!("new {}{}", callee, self.args(&ast.args))
    }

    fn visit_primitive_literal(&mut self, ast: &PrimitiveLiteral) -> String {
        match &ast.value {
            Primitive::Null => "null".to_string(),
            Primitive::Undefined => "undefined".to_string(),
            Primitive::Boolean(value) => value.to_string(),
            Primitive::Number(value) => number(*value),
            Primitive::String(value) => quote(value),
        }
    }

    fn visit_array_literal(&mut self, ast: &ArrayLiteral) -> String {
        format!("[{}]", self.list(&ast.elements))
    }

    fn visit_object_literal(&mut self, ast: &ObjectLiteral) -> String {
        let props: Vec<String> = ast
            .keys
            .iter()
            .zip(ast.values.iter())
            .map(|(key, value)| format!("{}:{}", property_key(key), self.operand(value)))
            .collect();
        format!("{{{}}}", props.join(","))
    }

    fn visit_template(&mut self, ast: &Template) -> String {
        let mut text = String::from("`");
        for (i, part) in ast.cooked.iter().enumerate() {
            text.push_str(&template_part(part));
            if let Some(expr) = ast.expressions.get(i) {
                text.push_str("${");
                text.push_str(&self.operand(expr));
                text.push('}');
            }
        }
        text.push('`');
        text
    }

    fn visit_tagged_template(&mut self, ast: &TaggedTemplate) -> String {
        let mut text = self.operand(&ast.func);
        text.push('`');
        for (i, part) in ast.raw.iter().enumerate() {
            text.push_str(part);
            if let Some(expr) = ast.expressions.get(i) {
                text.push_str("${");
                text.push_str(&self.operand(expr));
                text.push('}');
            }
        }
        text.push('`');
        text
    }

    fn visit_unary(&mut self, ast: &Unary) -> String {
        let operand = self.operand(&ast.expression);
        let op = ast.operation.as_str();
        match (ast.position, ast.operation) {
            (UnaryPosition::Postfix, _) => format!("({}{})", operand, op),
            (_, UnaryOperator::Typeof | UnaryOperator::Void) => format!("({} {})", op, operand),
            _ => format!("({}{})", op, operand),
        }
    }

    fn visit_binary(&mut self, ast: &Binary) -> String {
        format!(
            "({} {} {})",
            self.operand(&ast.left),
            ast.operation.as_str(),
            self.operand(&ast.right)
        )
    }

    fn visit_conditional(&mut self, ast: &Conditional) -> String {
        format!(
            "({} ? {} : {})",
            self.operand(&ast.condition),
            self.operand(&ast.yes),
            self.operand(&ast.no)
        )
    }

    fn visit_assign(&mut self, ast: &Assign) -> String {
        format!(
            "({} {} {})",
            visit(&ast.target, self),
            ast.op.as_str(),
            self.operand(&ast.value)
        )
    }

    fn visit_value_converter(&mut self, ast: &ValueConverter) -> String {
        let expression = match ast.expression.as_ref() {
            Expr::BindingBehavior(_) => format!("({})", visit(&ast.expression, self)),
            other => visit(other, self),
        };
        format!("{}|{}{}", expression, ast.name, self.pipeline_args(&ast.args))
    }

    fn visit_binding_behavior(&mut self, ast: &BindingBehavior) -> String {
        format!(
            "{}&{}{}",
            visit(&ast.expression, self),
            ast.name,
            self.pipeline_args(&ast.args)
        )
    }

    fn visit_arrow_function(&mut self, ast: &ArrowFunction) -> String {
        let count = ast.params.len();
        let params: Vec<String> = ast
            .params
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if ast.rest && i + 1 == count {
                    format!("...{}", p.name)
                } else {
                    p.name.clone()
                }
            })
            .collect();

        self.depth += 1;
        let body = self.operand(&ast.body);
        self.depth -= 1;
        format!("({}) => {}", params.join(","), body)
    }

    fn visit_array_binding_pattern(&mut self, ast: &ArrayBindingPattern) -> String {
        let elements: Vec<String> = ast
            .elements
            .iter()
            .map(|e| match e.as_ref() {
                Expr::PrimitiveLiteral(PrimitiveLiteral {
                    value: Primitive::Undefined,
                }) => String::new(),
                other => visit(other, self),
            })
            .collect();
        let mut text = elements.join(",");
        if elements.last().is_some_and(|e| e.is_empty()) {
            text.push(',');
        }
        format!("[{}]", text)
    }

    fn visit_object_binding_pattern(&mut self, ast: &ObjectBindingPattern) -> String {
        let props: Vec<String> = ast
            .keys
            .iter()
            .zip(ast.values.iter())
            .map(|(key, value)| {
                let key = property_key(key);
                let value = visit(value, self);
                if key == value {
                    key
                } else {
                    format!("{}:{}", key, value)
                }
            })
            .collect();
        format!("{{{}}}", props.join(","))
    }

    fn visit_binding_identifier(&mut self, ast: &BindingIdentifier) -> String {
        ast.name.clone()
    }

    fn visit_array_destructuring(&mut self, ast: &Destructuring) -> String {
        self.array_destructuring(ast)
    }

    fn visit_object_destructuring(&mut self, ast: &Destructuring) -> String {
        self.object_destructuring(ast)
    }

    fn visit_destructuring_assignment_single(
        &mut self,
        ast: &DestructuringAssignmentSingle,
    ) -> String {
        let target = visit(&ast.target, self);
        match &ast.initializer {
            Some(init) => format!("{}={}", target, self.operand(init)),
            None => target,
        }
    }

    fn visit_for_of_statement(&mut self, ast: &ForOfStatement) -> String {
        format!(
            "{} of {}",
            visit(&ast.declaration, self),
            visit(&ast.iterable, self)
        )
    }

    fn visit_interpolation(&mut self, ast: &Interpolation) -> String {
        let mut text = String::new();
        for (i, part) in ast.parts.iter().enumerate() {
            text.push_str(&part.replace('\\', "\\\\").replace("${", "\\${"));
            if let Some(expr) = ast.expressions.get(i) {
                text.push_str("${");
                text.push_str(&visit(expr, self));
                text.push('}');
            }
        }
        text
    }

    fn visit_custom(&mut self, ast: &Custom) -> String {
        ast.value.clone()
    }
}
