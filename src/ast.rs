/// A binary arithmetic operator.
///
/// Calculators built on this crate only know the four basic operations.
/// `Add` and `Sub` share the low precedence level, `Mul` and `Div` the high
/// one. Operators of the same level associate left to right.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// The binding strength of a [`BinaryOperator`].
///
/// Ordered so that `Precedence::Low < Precedence::High`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// `+` and `-`.
    Low,
    /// `*` and `/`.
    High,
}

impl BinaryOperator {
    /// Returns the precedence level of the operator.
    ///
    /// # Example
    /// ```
    /// use abacus::ast::{BinaryOperator, Precedence};
    ///
    /// assert_eq!(BinaryOperator::Sub.precedence(), Precedence::Low);
    /// assert_eq!(BinaryOperator::Div.precedence(), Precedence::High);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Low,
            Self::Mul | Self::Div => Precedence::High,
        }
    }

    /// The character used to write the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the expression tree.
///
/// Trees are strictly binary and built once, bottom-up, by the parser. Every
/// node remembers the index of the atom it was built from so that errors can
/// point back into the atom list.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric leaf.
    Number {
        /// The literal value.
        value:    f64,
        /// Index of the number atom.
        position: usize,
    },
    /// An arithmetic operation on two sub-trees.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Index of the operator atom.
        position: usize,
    },
}

impl Expr {
    /// Creates a numeric leaf.
    #[must_use]
    pub const fn number(value: f64, position: usize) -> Self {
        Self::Number { value, position }
    }

    /// Creates an operation node from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Number of operator nodes in the tree.
    #[must_use]
    pub fn operator_count(&self) -> usize {
        match self {
            Self::Number { .. } => 0,
            Self::BinaryOp { left, right, .. } => {
                1 + left.operator_count() + right.operator_count()
            },
        }
    }
}

/// Writes the tree fully parenthesized, e.g. `((6 * 4) / 2)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}
