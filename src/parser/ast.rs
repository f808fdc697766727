//! AST definitions for arithmetic expressions

use num_bigint::BigInt;
use std::fmt;

/// A decoded numeric literal.
///
/// Integers and floats stay distinct: `11` and `11.` are different values.
/// Integers have no width limit.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            // `{:?}` keeps the trailing `.0` on whole floats
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Source text of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// AST node.
///
/// Parentheses leave no trace in the tree; grouping is carried by its shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(Number),
    Binary {
        op: BinOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Print(Box<Node>),
}

impl Node {
    pub fn int(value: i64) -> Self {
        Node::Number(Number::Int(BigInt::from(value)))
    }

    pub fn float(value: f64) -> Self {
        Node::Number(Number::Float(value))
    }

    pub fn binary(op: BinOp, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn print(value: Node) -> Self {
        Node::Print(Box::new(value))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(n) => write!(f, "{}", n),
            Node::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
            Node::Print(value) => write!(f, "print {}", value),
        }
    }
}
