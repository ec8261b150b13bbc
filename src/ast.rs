use std::{fmt, rc::Rc};

/// A source position: 1-based line and column of the token a node starts at.
///
/// Every AST node and every token carries one so that parse and runtime
/// errors can point back into the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number in the source code.
    pub line: usize,
    /// Column number in the source code.
    pub col:  usize,
}

impl Position {
    /// Creates a position from a line and column.
    ///
    /// # Example
    /// ```
    /// use aegis::ast::Position;
    ///
    /// let pos = Position::new(3, 14);
    /// assert_eq!(pos.to_string(), "3:14");
    /// ```
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// The root of a parsed script.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub body: Vec<Stmt>,
    /// Position of the first token.
    pub pos:  Position,
}

/// A brace-delimited sequence of statements.
///
/// Blocks do not open a new scope; their statements run in the environment
/// of the enclosing function or module.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Stmt>,
    /// Position of the opening brace.
    pub pos:        Position,
}

/// A statement.
///
/// `unless`, `until`, `however` chains and `fn name(..) {}` declarations do
/// not have variants of their own: the parser desugars them into `If`,
/// `While` and `Assign`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `let name = value`. Always binds in the current frame.
    Let {
        /// The name being introduced.
        name:  String,
        /// The initial value.
        value: Expr,
        /// Position of the `let` keyword.
        pos:   Position,
    },
    /// `set target = value`. Writes to an existing binding, element or key.
    Assign {
        /// The place being written.
        target: AssignTarget,
        /// The value which is being assigned.
        value:  Expr,
        /// Position of the statement.
        pos:    Position,
    },
    /// Conditional with an optional alternate block.
    If(IfStatement),
    /// `while (test) { body }`.
    While {
        /// Loop condition, checked before every iteration.
        test: Expr,
        /// Loop body.
        body: Block,
        /// Position of the loop keyword.
        pos:  Position,
    },
    /// `return [value]`.
    Return {
        /// Returned expression; `None` returns `null`.
        value: Option<Expr>,
        /// Position of the `return` keyword.
        pos:   Position,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Position of the expression.
        pos:  Position,
    },
}

/// `if (test) { consequent } else { alternate }`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// The condition.
    pub test:       Expr,
    /// Block run when the condition is truthy.
    pub consequent: Block,
    /// Block run otherwise. A `however` chain nests further `If`s in here.
    pub alternate:  Option<Block>,
    /// Position of the keyword that started the statement.
    pub pos:        Position,
}

/// The left-hand side of a `set` statement.
///
/// Only identifiers, index expressions and member expressions can be
/// assigned to; the parser rejects everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    /// `set name = ...`
    Identifier {
        /// The binding name.
        name: String,
        /// Position of the identifier.
        pos:  Position,
    },
    /// `set collection[index] = ...`
    Index {
        /// The collection being written into.
        collection: Box<Expr>,
        /// The element index.
        index:      Box<Expr>,
        /// Position of the `[`.
        pos:        Position,
    },
    /// `set object.property = ...`
    Member {
        /// The object being written into.
        object:   Box<Expr>,
        /// The key being set.
        property: String,
        /// Position of the `.`.
        pos:      Position,
    },
}

impl TryFrom<Expr> for AssignTarget {
    type Error = Expr;

    /// Converts an expression into an assignment target, handing the
    /// expression back unchanged when it is not assignable.
    fn try_from(expr: Expr) -> Result<Self, Self::Error> {
        match expr {
            Expr::Identifier { name, pos } => Ok(Self::Identifier { name, pos }),
            Expr::Index { collection,
                          index,
                          pos, } => Ok(Self::Index { collection,
                                                     index,
                                                     pos }),
            Expr::Member { object,
                           property,
                           pos, } => Ok(Self::Member { object,
                                                       property,
                                                       pos }),
            other => Err(other),
        }
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Position in the source code.
        pos:  Position,
    },
    /// A numeric literal, already converted from its lexical form.
    Number {
        /// The value.
        value: f64,
        /// Position in the source code.
        pos:   Position,
    },
    /// A string literal with escapes resolved.
    Str {
        /// The value.
        value: String,
        /// Position in the source code.
        pos:   Position,
    },
    /// `true` or `false`.
    Boolean {
        /// The value.
        value: bool,
        /// Position in the source code.
        pos:   Position,
    },
    /// `null`.
    Null {
        /// Position in the source code.
        pos: Position,
    },
    /// `[a, b, c]`.
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Position of the `[`.
        pos:      Position,
    },
    /// `{ key: value, "other key": value }`.
    Object {
        /// Properties in source order.
        properties: Vec<ObjectProperty>,
        /// Position of the `{`.
        pos:        Position,
    },
    /// `!right` or `-right`.
    Prefix {
        /// The operator.
        op:    PrefixOperator,
        /// The operand.
        right: Box<Self>,
        /// Position of the operator.
        pos:   Position,
    },
    /// `left op right`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position of the operator.
        pos:   Position,
    },
    /// `callee(args)`.
    Call {
        /// The expression producing the function.
        callee: Box<Self>,
        /// Argument expressions, evaluated left to right.
        args:   Vec<Self>,
        /// Position of the `(`.
        pos:    Position,
    },
    /// `collection[index]`.
    Index {
        /// The collection to index into.
        collection: Box<Self>,
        /// The index to access.
        index:      Box<Self>,
        /// Position of the `[`.
        pos:        Position,
    },
    /// `object.property`.
    Member {
        /// The object being read.
        object:   Box<Self>,
        /// The property name.
        property: String,
        /// Position of the `.`.
        pos:      Position,
    },
    /// A function literal. Shared so closures can outlive the tree that
    /// produced them.
    Function(Rc<FunctionDefinition>),
}

impl Expr {
    /// Gets the source position from `self`.
    ///
    /// ## Example
    /// ```
    /// use aegis::ast::{Expr, Position};
    ///
    /// let expr = Expr::Null { pos: Position::new(5, 2) };
    ///
    /// assert_eq!(expr.pos(), Position::new(5, 2));
    /// ```
    #[must_use]
    pub fn pos(&self) -> Position {
        match self {
            Self::Identifier { pos, .. }
            | Self::Number { pos, .. }
            | Self::Str { pos, .. }
            | Self::Boolean { pos, .. }
            | Self::Null { pos }
            | Self::Array { pos, .. }
            | Self::Object { pos, .. }
            | Self::Prefix { pos, .. }
            | Self::Infix { pos, .. }
            | Self::Call { pos, .. }
            | Self::Index { pos, .. }
            | Self::Member { pos, .. } => *pos,
            Self::Function(def) => def.pos,
        }
    }
}

/// A single `key: value` entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    /// The key, from a bare identifier or a string literal.
    pub key:   String,
    /// The value expression.
    pub value: Expr,
    /// Position of the key.
    pub pos:   Position,
}

/// A function literal: `fn (params) { body }`.
///
/// Declarations (`fn name(params) { body }`) produce the same node with
/// `name` set, wrapped in an assignment to that name.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    /// The declared name, used for call frames in stack traces.
    pub name:   Option<String>,
    /// The parameter names.
    pub params: Vec<String>,
    /// The body evaluated when the function is called.
    pub body:   Block,
    /// Position of the `fn` keyword.
    pub pos:    Position,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT under truthiness (`!x`, `not x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents an infix operator.
///
/// Word operators are folded by the lexer: `and` is `And`, `or` is `Or`,
/// `is` is `Equal`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition, string or array concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Deep equality (`==`)
    Equal,
    /// Deep inequality (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Value-returning, short-circuiting and (`&&`)
    And,
    /// Value-returning, short-circuiting or (`||`)
    Or,
    /// Logical nor (`nor`)
    Nor,
    /// Membership (`in`)
    In,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, In, Less, LessEqual, Mod, Mul, Nor,
            NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            And => "&&",
            Or => "||",
            Nor => "NOR",
            In => "IN",
        };
        write!(f, "{operator}")
    }
}
