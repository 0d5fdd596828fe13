//! Operator markers.
//!
//! Each marker is a zero-sized type naming one operation. The operation
//! itself is whatever the operand types define through `std::ops` or the
//! comparison traits, so an actor over `String` concatenates and an actor
//! over `f64` adds.

/// An operation on one evaluated operand.
pub trait UnaryOperator<A> {
    type Output;

    fn apply(operand: A) -> Self::Output;
}

/// An operation on two evaluated operands.
pub trait BinaryOperator<A, B> {
    type Output;

    fn apply(lhs: A, rhs: B) -> Self::Output;
}

macro_rules! arithmetic {
    ($($(#[$meta:meta])* $name:ident => $trait:ident :: $method:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<A, B> BinaryOperator<A, B> for $name
            where
                A: std::ops::$trait<B>,
            {
                type Output = A::Output;

                fn apply(lhs: A, rhs: B) -> Self::Output {
                    std::ops::$trait::$method(lhs, rhs)
                }
            }
        )+
    };
}

arithmetic! {
    /// `a + b`
    Plus => Add::add,
    /// `a - b`
    Minus => Sub::sub,
    /// `a * b`
    Multiplies => Mul::mul,
    /// `a / b`
    Divides => Div::div,
    /// `a % b`
    Modulus => Rem::rem,
    /// `a & b`
    BitwiseAnd => BitAnd::bitand,
    /// `a | b`
    BitwiseOr => BitOr::bitor,
    /// `a ^ b`
    BitwiseXor => BitXor::bitxor,
    /// `a << b`
    ShiftLeft => Shl::shl,
    /// `a >> b`
    ShiftRight => Shr::shr,
}

macro_rules! comparison {
    ($($(#[$meta:meta])* $name:ident => $trait:ident :: $method:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<A, B> BinaryOperator<A, B> for $name
            where
                A: $trait<B>,
            {
                type Output = bool;

                fn apply(lhs: A, rhs: B) -> bool {
                    $trait::$method(&lhs, &rhs)
                }
            }
        )+
    };
}

comparison! {
    /// `a == b`
    EqualTo => PartialEq::eq,
    /// `a != b`
    NotEqualTo => PartialEq::ne,
    /// `a < b`
    Less => PartialOrd::lt,
    /// `a <= b`
    LessEqual => PartialOrd::le,
    /// `a > b`
    Greater => PartialOrd::gt,
    /// `a >= b`
    GreaterEqual => PartialOrd::ge,
}

/// `a && b`. Both sides are already evaluated when this runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogicalAnd;

impl BinaryOperator<bool, bool> for LogicalAnd {
    type Output = bool;

    fn apply(lhs: bool, rhs: bool) -> bool {
        lhs && rhs
    }
}

/// `a || b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogicalOr;

impl BinaryOperator<bool, bool> for LogicalOr {
    type Output = bool;

    fn apply(lhs: bool, rhs: bool) -> bool {
        lhs || rhs
    }
}

/// `-a`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Negate;

impl<A: std::ops::Neg> UnaryOperator<A> for Negate {
    type Output = A::Output;

    fn apply(operand: A) -> Self::Output {
        -operand
    }
}

/// `!a`: logical for `bool`, bitwise for integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Complement;

impl<A: std::ops::Not> UnaryOperator<A> for Complement {
    type Output = A::Output;

    fn apply(operand: A) -> Self::Output {
        !operand
    }
}
