/**
 * Binding Expression AST
 *
 * Defines all AST node types for binding expressions
 */

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::lexer::Token;

/// Names that resolve against the global namespace instead of the binding
/// scope when they appear as the root of an access chain.
pub const GLOBAL_NAMES: &[&str] = &[
    "Infinity",
    "NaN",
    "isFinite",
    "isNaN",
    "parseFloat",
    "parseInt",
    "decodeURI",
    "decodeURIComponent",
    "encodeURI",
    "encodeURIComponent",
    "Array",
    "BigInt",
    "Boolean",
    "Date",
    "Map",
    "Number",
    "Object",
    "RegExp",
    "Set",
    "String",
    "JSON",
    "Math",
    "Intl",
];

pub fn is_global_name(name: &str) -> bool {
    GLOBAL_NAMES.contains(&name)
}

/// Main AST enum containing all node types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Expr {
    AccessThis(AccessThis),
    AccessBoundary(AccessBoundary),
    AccessScope(AccessScope),
    AccessGlobal(AccessGlobal),
    AccessMember(AccessMember),
    AccessKeyed(AccessKeyed),
    CallScope(CallScope),
    CallMember(CallMember),
    CallFunction(CallFunction),
    CallGlobal(CallGlobal),
    New(New),
    PrimitiveLiteral(PrimitiveLiteral),
    ArrayLiteral(ArrayLiteral),
    ObjectLiteral(ObjectLiteral),
    Template(Template),
    TaggedTemplate(TaggedTemplate),
    Unary(Unary),
    Binary(Binary),
    Conditional(Conditional),
    Assign(Assign),
    ValueConverter(ValueConverter),
    BindingBehavior(BindingBehavior),
    ArrowFunction(ArrowFunction),
    ArrayBindingPattern(ArrayBindingPattern),
    ObjectBindingPattern(ObjectBindingPattern),
    BindingIdentifier(BindingIdentifier),
    ArrayDestructuring(Destructuring),
    ObjectDestructuring(Destructuring),
    DestructuringAssignmentSingle(DestructuringAssignmentSingle),
    ForOfStatement(ForOfStatement),
    Interpolation(Interpolation),
    Custom(Custom),
}

/// Discriminant of an [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionKind {
    AccessThis,
    AccessBoundary,
    AccessScope,
    AccessGlobal,
    AccessMember,
    AccessKeyed,
    CallScope,
    CallMember,
    CallFunction,
    CallGlobal,
    New,
    PrimitiveLiteral,
    ArrayLiteral,
    ObjectLiteral,
    Template,
    TaggedTemplate,
    Unary,
    Binary,
    Conditional,
    Assign,
    ValueConverter,
    BindingBehavior,
    ArrowFunction,
    ArrayBindingPattern,
    ObjectBindingPattern,
    BindingIdentifier,
    ArrayDestructuring,
    ObjectDestructuring,
    DestructuringAssignmentSingle,
    ForOfStatement,
    Interpolation,
    Custom,
}

// Scope access

/// `$this` (ancestor 0) or a `$parent` chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessThis {
    pub ancestor: u32,
}

/// `this`: the host component boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessBoundary {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessScope {
    pub name: String,
    pub ancestor: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessGlobal {
    pub name: String,
}

// Member access

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessMember {
    pub object: Arc<Expr>,
    pub name: String,
    pub optional: bool,
    /// Root of the access chain is a global name.
    pub access_global: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessKeyed {
    pub object: Arc<Expr>,
    pub key: Arc<Expr>,
    pub optional: bool,
    pub access_global: bool,
}

// Calls

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallScope {
    pub name: String,
    pub args: Vec<Arc<Expr>>,
    pub ancestor: u32,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallMember {
    pub object: Arc<Expr>,
    pub name: String,
    pub args: Vec<Arc<Expr>>,
    /// `a?.b()`
    pub optional_member: bool,
    /// `a.b?.()`
    pub optional_call: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallFunction {
    pub func: Arc<Expr>,
    pub args: Vec<Arc<Expr>>,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallGlobal {
    pub name: String,
    pub args: Vec<Arc<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct New {
    pub func: Arc<Expr>,
    pub args: Vec<Arc<Expr>>,
}

// Literals

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Primitive {
    Null,
    Undefined,
    Boolean(bool),
    Number(f64),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveLiteral {
    pub value: Primitive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayLiteral {
    pub elements: Vec<Arc<Expr>>,
}

/// Object literal key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyKey {
    Name(String),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectLiteral {
    pub keys: Vec<PropertyKey>,
    pub values: Vec<Arc<Expr>>,
}

/// Untagged template literal. `cooked` always has one more entry than
/// `expressions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub cooked: Vec<String>,
    pub expressions: Vec<Arc<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedTemplate {
    pub cooked: Vec<String>,
    pub raw: Vec<String>,
    pub func: Arc<Expr>,
    pub expressions: Vec<Arc<Expr>>,
}

// Operators

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    Negate,
    Plus,
    Typeof,
    Void,
    Increment,
    Decrement,
}

impl UnaryOperator {
    pub fn from_token(token: Token) -> Option<Self> {
        let op = match token {
            Token::Exclamation => UnaryOperator::Not,
            Token::Minus => UnaryOperator::Negate,
            Token::Plus => UnaryOperator::Plus,
            Token::TypeofKeyword => UnaryOperator::Typeof,
            Token::VoidKeyword => UnaryOperator::Void,
            Token::PlusPlus => UnaryOperator::Increment,
            Token::MinusMinus => UnaryOperator::Decrement,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
            UnaryOperator::Negate => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::Typeof => "typeof",
            UnaryOperator::Void => "void",
            UnaryOperator::Increment => "++",
            UnaryOperator::Decrement => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryPosition {
    Prefix = 0,
    Postfix = 1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unary {
    pub operation: UnaryOperator,
    pub expression: Arc<Expr>,
    pub position: UnaryPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    NullishCoalescing,
    Or,
    And,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    In,
    InstanceOf,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponent,
}

impl BinaryOperator {
    pub fn from_token(token: Token) -> Option<Self> {
        let op = match token {
            Token::QuestionQuestion => BinaryOperator::NullishCoalescing,
            Token::BarBar => BinaryOperator::Or,
            Token::AmpersandAmpersand => BinaryOperator::And,
            Token::EqualsEquals => BinaryOperator::Equal,
            Token::ExclamationEquals => BinaryOperator::NotEqual,
            Token::EqualsEqualsEquals => BinaryOperator::StrictEqual,
            Token::ExclamationEqualsEquals => BinaryOperator::StrictNotEqual,
            Token::LessThan => BinaryOperator::LessThan,
            Token::GreaterThan => BinaryOperator::GreaterThan,
            Token::LessThanEquals => BinaryOperator::LessThanOrEqual,
            Token::GreaterThanEquals => BinaryOperator::GreaterThanOrEqual,
            Token::InKeyword => BinaryOperator::In,
            Token::InstanceOfKeyword => BinaryOperator::InstanceOf,
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Subtract,
            Token::Asterisk => BinaryOperator::Multiply,
            Token::Slash => BinaryOperator::Divide,
            Token::Percent => BinaryOperator::Modulo,
            Token::AsteriskAsterisk => BinaryOperator::Exponent,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::NullishCoalescing => "??",
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::StrictEqual => "===",
            BinaryOperator::StrictNotEqual => "!==",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::In => "in",
            BinaryOperator::InstanceOf => "instanceof",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Exponent => "**",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
}

impl AssignmentOperator {
    pub fn from_token(token: Token) -> Option<Self> {
        let op = match token {
            Token::Equals => AssignmentOperator::Assign,
            Token::PlusEquals => AssignmentOperator::AddAssign,
            Token::MinusEquals => AssignmentOperator::SubtractAssign,
            Token::AsteriskEquals => AssignmentOperator::MultiplyAssign,
            Token::SlashEquals => AssignmentOperator::DivideAssign,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubtractAssign => "-=",
            AssignmentOperator::MultiplyAssign => "*=",
            AssignmentOperator::DivideAssign => "/=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binary {
    pub operation: BinaryOperator,
    pub left: Arc<Expr>,
    pub right: Arc<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    pub condition: Arc<Expr>,
    pub yes: Arc<Expr>,
    pub no: Arc<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub target: Arc<Expr>,
    pub value: Arc<Expr>,
    pub op: AssignmentOperator,
}

// Pipelines

/// `expression | name:arg1:arg2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueConverter {
    pub expression: Arc<Expr>,
    pub name: String,
    pub args: Vec<Arc<Expr>>,
}

/// `expression & name:arg1:arg2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingBehavior {
    pub expression: Arc<Expr>,
    pub name: String,
    /// Key under which the binding stores the behavior instance.
    pub key: String,
    pub args: Vec<Arc<Expr>>,
}

impl BindingBehavior {
    pub fn new(expression: Arc<Expr>, name: String, args: Vec<Arc<Expr>>) -> Self {
        BindingBehavior {
            key: format!("_bb_{}", name),
            expression,
            name,
            args,
        }
    }
}

// Functions and patterns

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowFunction {
    pub params: Vec<BindingIdentifier>,
    pub body: Arc<Expr>,
    /// The last parameter collects the remaining arguments.
    pub rest: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingIdentifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayBindingPattern {
    pub elements: Vec<Arc<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectBindingPattern {
    pub keys: Vec<PropertyKey>,
    pub values: Vec<Arc<Expr>>,
}

/// Array or object destructuring. `list` holds single assignments and nested
/// destructurings; `source` and `initializer` are set on nested entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destructuring {
    pub list: Vec<Arc<Expr>>,
    pub source: Option<Arc<Expr>>,
    pub initializer: Option<Arc<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestructuringAssignmentSingle {
    pub target: Arc<Expr>,
    pub source: Arc<Expr>,
    pub initializer: Option<Arc<Expr>>,
}

// Statements

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForOfStatement {
    pub declaration: Arc<Expr>,
    pub iterable: Arc<Expr>,
    /// Offset of the `;` that starts a trailing clause.
    pub semicolon_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpolation {
    pub parts: Vec<String>,
    pub expressions: Vec<Arc<Expr>>,
}

impl Interpolation {
    pub fn is_multi(&self) -> bool {
        self.expressions.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Custom {
    pub value: String,
}

// Shared instances

static NULL: Lazy<Arc<Expr>> = Lazy::new(|| primitive(Primitive::Null));
static UNDEFINED: Lazy<Arc<Expr>> = Lazy::new(|| primitive(Primitive::Undefined));
static TRUE: Lazy<Arc<Expr>> = Lazy::new(|| primitive(Primitive::Boolean(true)));
static FALSE: Lazy<Arc<Expr>> = Lazy::new(|| primitive(Primitive::Boolean(false)));
static EMPTY_STRING: Lazy<Arc<Expr>> =
    Lazy::new(|| primitive(Primitive::String(String::new())));
static EMPTY_ARRAY: Lazy<Arc<Expr>> =
    Lazy::new(|| Arc::new(Expr::ArrayLiteral(ArrayLiteral { elements: Vec::new() })));
static EMPTY_OBJECT: Lazy<Arc<Expr>> = Lazy::new(|| {
    Arc::new(Expr::ObjectLiteral(ObjectLiteral {
        keys: Vec::new(),
        values: Vec::new(),
    }))
});
static EMPTY_TEMPLATE: Lazy<Arc<Expr>> = Lazy::new(|| {
    Arc::new(Expr::Template(Template {
        cooked: vec![String::new()],
        expressions: Vec::new(),
    }))
});
static THIS_SCOPE: Lazy<Arc<Expr>> =
    Lazy::new(|| Arc::new(Expr::AccessThis(AccessThis { ancestor: 0 })));
static PARENT_SCOPE: Lazy<Arc<Expr>> =
    Lazy::new(|| Arc::new(Expr::AccessThis(AccessThis { ancestor: 1 })));
static BOUNDARY: Lazy<Arc<Expr>> = Lazy::new(|| Arc::new(Expr::AccessBoundary(AccessBoundary {})));

fn primitive(value: Primitive) -> Arc<Expr> {
    Arc::new(Expr::PrimitiveLiteral(PrimitiveLiteral { value }))
}

impl Expr {
    pub fn null() -> Arc<Expr> {
        NULL.clone()
    }

    pub fn undefined() -> Arc<Expr> {
        UNDEFINED.clone()
    }

    pub fn true_() -> Arc<Expr> {
        TRUE.clone()
    }

    pub fn false_() -> Arc<Expr> {
        FALSE.clone()
    }

    pub fn empty_string() -> Arc<Expr> {
        EMPTY_STRING.clone()
    }

    pub fn empty_array() -> Arc<Expr> {
        EMPTY_ARRAY.clone()
    }

    pub fn empty_object() -> Arc<Expr> {
        EMPTY_OBJECT.clone()
    }

    pub fn empty_template() -> Arc<Expr> {
        EMPTY_TEMPLATE.clone()
    }

    /// `$this`
    pub fn this_scope() -> Arc<Expr> {
        THIS_SCOPE.clone()
    }

    /// `$parent`
    pub fn parent_scope() -> Arc<Expr> {
        PARENT_SCOPE.clone()
    }

    /// `this`
    pub fn boundary() -> Arc<Expr> {
        BOUNDARY.clone()
    }

    /// `AccessThis` for the given depth, shared for depths 0 and 1.
    pub fn access_this(ancestor: u32) -> Arc<Expr> {
        match ancestor {
            0 => Expr::this_scope(),
            1 => Expr::parent_scope(),
            _ => Arc::new(Expr::AccessThis(AccessThis { ancestor })),
        }
    }

    /// Number literal.
    pub fn number(value: f64) -> Arc<Expr> {
        primitive(Primitive::Number(value))
    }

    /// String literal, shared when empty.
    pub fn string(value: String) -> Arc<Expr> {
        if value.is_empty() {
            Expr::empty_string()
        } else {
            primitive(Primitive::String(value))
        }
    }

    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expr::AccessThis(_) => ExpressionKind::AccessThis,
            Expr::AccessBoundary(_) => ExpressionKind::AccessBoundary,
            Expr::AccessScope(_) => ExpressionKind::AccessScope,
            Expr::AccessGlobal(_) => ExpressionKind::AccessGlobal,
            Expr::AccessMember(_) => ExpressionKind::AccessMember,
            Expr::AccessKeyed(_) => ExpressionKind::AccessKeyed,
            Expr::CallScope(_) => ExpressionKind::CallScope,
            Expr::CallMember(_) => ExpressionKind::CallMember,
            Expr::CallFunction(_) => ExpressionKind::CallFunction,
            Expr::CallGlobal(_) => ExpressionKind::CallGlobal,
            Expr::New(_) => ExpressionKind::New,
            Expr::PrimitiveLiteral(_) => ExpressionKind::PrimitiveLiteral,
            Expr::ArrayLiteral(_) => ExpressionKind::ArrayLiteral,
            Expr::ObjectLiteral(_) => ExpressionKind::ObjectLiteral,
            Expr::Template(_) => ExpressionKind::Template,
            Expr::TaggedTemplate(_) => ExpressionKind::TaggedTemplate,
            Expr::Unary(_) => ExpressionKind::Unary,
            Expr::Binary(_) => ExpressionKind::Binary,
            Expr::Conditional(_) => ExpressionKind::Conditional,
            Expr::Assign(_) => ExpressionKind::Assign,
            Expr::ValueConverter(_) => ExpressionKind::ValueConverter,
            Expr::BindingBehavior(_) => ExpressionKind::BindingBehavior,
            Expr::ArrowFunction(_) => ExpressionKind::ArrowFunction,
            Expr::ArrayBindingPattern(_) => ExpressionKind::ArrayBindingPattern,
            Expr::ObjectBindingPattern(_) => ExpressionKind::ObjectBindingPattern,
            Expr::BindingIdentifier(_) => ExpressionKind::BindingIdentifier,
            Expr::ArrayDestructuring(_) => ExpressionKind::ArrayDestructuring,
            Expr::ObjectDestructuring(_) => ExpressionKind::ObjectDestructuring,
            Expr::DestructuringAssignmentSingle(_) => ExpressionKind::DestructuringAssignmentSingle,
            Expr::ForOfStatement(_) => ExpressionKind::ForOfStatement,
            Expr::Interpolation(_) => ExpressionKind::Interpolation,
            Expr::Custom(_) => ExpressionKind::Custom,
        }
    }

    /// Whether the access chain rooted at this node resolves against the
    /// global namespace.
    pub fn access_global(&self) -> bool {
        match self {
            Expr::AccessGlobal(_) | Expr::CallGlobal(_) => true,
            Expr::AccessMember(ast) => ast.access_global,
            Expr::AccessKeyed(ast) => ast.access_global,
            Expr::CallMember(ast) => ast.object.access_global(),
            _ => false,
        }
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visit(self, visitor)
    }
}

/// Visitor pattern for AST traversal
pub trait Visitor {
    type Output;

    fn visit_access_this(&mut self, ast: &AccessThis) -> Self::Output;
    fn visit_access_boundary(&mut self, ast: &AccessBoundary) -> Self::Output;
    fn visit_access_scope(&mut self, ast: &AccessScope) -> Self::Output;
    fn visit_access_global(&mut self, ast: &AccessGlobal) -> Self::Output;
    fn visit_access_member(&mut self, ast: &AccessMember) -> Self::Output;
    fn visit_access_keyed(&mut self, ast: &AccessKeyed) -> Self::Output;
    fn visit_call_scope(&mut self, ast: &CallScope) -> Self::Output;
    fn visit_call_member(&mut self, ast: &CallMember) -> Self::Output;
    fn visit_call_function(&mut self, ast: &CallFunction) -> Self::Output;
    fn visit_call_global(&mut self, ast: &CallGlobal) -> Self::Output;
    fn visit_new(&mut self, ast: &New) -> Self::Output;
    fn visit_primitive_literal(&mut self, ast: &PrimitiveLiteral) -> Self::Output;
    fn visit_array_literal(&mut self, ast: &ArrayLiteral) -> Self::Output;
    fn visit_object_literal(&mut self, ast: &ObjectLiteral) -> Self::Output;
    fn visit_template(&mut self, ast: &Template) -> Self::Output;
    fn visit_tagged_template(&mut self, ast: &TaggedTemplate) -> Self::Output;
    fn visit_unary(&mut self, ast: &Unary) -> Self::Output;
    fn visit_binary(&mut self, ast: &Binary) -> Self::Output;
    fn visit_conditional(&mut self, ast: &Conditional) -> Self::Output;
    fn visit_assign(&mut self, ast: &Assign) -> Self::Output;
    fn visit_value_converter(&mut self, ast: &ValueConverter) -> Self::Output;
    fn visit_binding_behavior(&mut self, ast: &BindingBehavior) -> Self::Output;
    fn visit_arrow_function(&mut self, ast: &ArrowFunction) -> Self::Output;
    fn visit_array_binding_pattern(&mut self, ast: &ArrayBindingPattern) -> Self::Output;
    fn visit_object_binding_pattern(&mut self, ast: &ObjectBindingPattern) -> Self::Output;
    fn visit_binding_identifier(&mut self, ast: &BindingIdentifier) -> Self::Output;
    fn visit_array_destructuring(&mut self, ast: &Destructuring) -> Self::Output;
    fn visit_object_destructuring(&mut self, ast: &Destructuring) -> Self::Output;
    fn visit_destructuring_assignment_single(
        &mut self,
        ast: &DestructuringAssignmentSingle,
    ) -> Self::Output;
    fn visit_for_of_statement(&mut self, ast: &ForOfStatement) -> Self::Output;
    fn visit_interpolation(&mut self, ast: &Interpolation) -> Self::Output;
    fn visit_custom(&mut self, ast: &Custom) -> Self::Output;
}

/// Dispatch `expr` to the matching visitor method.
pub fn visit<V: Visitor>(expr: &Expr, visitor: &mut V) -> V::Output {
    match expr {
        Expr::AccessThis(ast) => visitor.visit_access_this(ast),
        Expr::AccessBoundary(ast) => visitor.visit_access_boundary(ast),
        Expr::AccessScope(ast) => visitor.visit_access_scope(ast),
        Expr::AccessGlobal(ast) => visitor.visit_access_global(ast),
        Expr::AccessMember(ast) => visitor.visit_access_member(ast),
        Expr::AccessKeyed(ast) => visitor.visit_access_keyed(ast),
        Expr::CallScope(ast) => visitor.visit_call_scope(ast),
        Expr::CallMember(ast) => visitor.visit_call_member(ast),
        Expr::CallFunction(ast) => visitor.visit_call_function(ast),
        Expr::CallGlobal(ast) => visitor.visit_call_global(ast),
        Expr::New(ast) => visitor.visit_new(ast),
        Expr::PrimitiveLiteral(ast) => visitor.visit_primitive_literal(ast),
        Expr::ArrayLiteral(ast) => visitor.visit_array_literal(ast),
        Expr::ObjectLiteral(ast) => visitor.visit_object_literal(ast),
        Expr::Template(ast) => visitor.visit_template(ast),
        Expr::TaggedTemplate(ast) => visitor.visit_tagged_template(ast),
        Expr::Unary(ast) => visitor.visit_unary(ast),
        Expr::Binary(ast) => visitor.visit_binary(ast),
        Expr::Conditional(ast) => visitor.visit_conditional(ast),
        Expr::Assign(ast) => visitor.visit_assign(ast),
        Expr::ValueConverter(ast) => visitor.visit_value_converter(ast),
        Expr::BindingBehavior(ast) => visitor.visit_binding_behavior(ast),
        Expr::ArrowFunction(ast) => visitor.visit_arrow_function(ast),
        Expr::ArrayBindingPattern(ast) => visitor.visit_array_binding_pattern(ast),
        Expr::ObjectBindingPattern(ast) => visitor.visit_object_binding_pattern(ast),
        Expr::BindingIdentifier(ast) => visitor.visit_binding_identifier(ast),
        Expr::ArrayDestructuring(ast) => visitor.visit_array_destructuring(ast),
        Expr::ObjectDestructuring(ast) => visitor.visit_object_destructuring(ast),
        Expr::DestructuringAssignmentSingle(ast) => {
            visitor.visit_destructuring_assignment_single(ast)
        }
        Expr::ForOfStatement(ast) => visitor.visit_for_of_statement(ast),
        Expr::Interpolation(ast) => visitor.visit_interpolation(ast),
        Expr::Custom(ast) => visitor.visit_custom(ast),
    }
}
