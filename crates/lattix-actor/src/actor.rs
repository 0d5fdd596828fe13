//! The `Actor` wrapper and its operator overloads.

use crate::eval::{Apply, Evaluable, Lvalue, NullEnv};
use crate::nodes::{Assignment, Binary, Unary, Value};
use crate::operators::{
    BitwiseAnd, BitwiseOr, BitwiseXor, Complement, Divides, EqualTo, Greater, GreaterEqual, Less,
    LessEqual, LogicalAnd, LogicalOr, Minus, Modulus, Multiplies, Negate, NotEqualTo, Plus,
    ShiftLeft, ShiftRight,
};

/// A deferred expression.
///
/// Wraps an expression node and supplies the calling surface: `call` with
/// an environment of references, `eval` against a shared environment, or
/// `invoke` with no arguments at all. Operators on actors build larger
/// actors; nothing runs until one of those entry points is used.
///
/// A literal on the right of an operator takes its type from context. On
/// the left it needs a suffix:
///
/// ```
/// use lattix_actor::_1;
/// use lattix_tuple::tie;
///
/// let mut x = 1;
/// assert_eq!((100i32 - _1).call(&mut tie!(x)), 99);
/// assert_eq!((_1 + 1).call(&mut tie!(x)), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actor<E> {
    node: E,
}

impl<E> Actor<E> {
    pub const fn new(node: E) -> Self {
        Self { node }
    }

    /// The wrapped expression node.
    pub fn node(&self) -> &E {
        &self.node
    }

    pub fn into_node(self) -> E {
        self.node
    }

    /// Apply to an environment, allowing writes through it.
    ///
    /// The result of an assignment borrows the written slot from `env`;
    /// every other expression returns an owned value.
    pub fn call<'e, Env: 'e>(&self, env: &'e mut Env) -> E::Result
    where
        E: Apply<'e, Env>,
    {
        self.node.apply(env)
    }

    /// Evaluate against an environment without writing to it.
    pub fn eval<Env>(&self, env: &Env) -> E::Output
    where
        E: Evaluable<Env>,
    {
        self.node.eval(env)
    }

    /// Evaluate with no arguments.
    ///
    /// Only expressions without placeholders can be invoked:
    ///
    /// ```compile_fail
    /// use lattix_actor::_1;
    /// let _ = (_1 + 1).invoke();
    /// ```
    pub fn invoke(&self) -> E::Output
    where
        E: Evaluable<NullEnv>,
    {
        self.node.eval(&NullEnv)
    }

    /// An actor that stores `rhs` into the storage this actor denotes.
    ///
    /// Only placeholders denote storage:
    ///
    /// ```compile_fail
    /// use lattix_actor::{_1, val};
    /// let _ = (_1 + 1).assign(val(2));
    /// ```
    pub fn assign<R: IntoActor>(&self, rhs: R) -> Actor<Assignment<E, R::Node>>
    where
        E: Lvalue + Clone,
    {
        Actor::new(Assignment::new(self.node.clone(), rhs.into_actor().node))
    }

    pub fn equal_to<R: IntoActor>(self, rhs: R) -> Actor<Binary<EqualTo, E, R::Node>> {
        self.binary(EqualTo, rhs)
    }

    pub fn not_equal_to<R: IntoActor>(self, rhs: R) -> Actor<Binary<NotEqualTo, E, R::Node>> {
        self.binary(NotEqualTo, rhs)
    }

    pub fn less<R: IntoActor>(self, rhs: R) -> Actor<Binary<Less, E, R::Node>> {
        self.binary(Less, rhs)
    }

    pub fn less_equal<R: IntoActor>(self, rhs: R) -> Actor<Binary<LessEqual, E, R::Node>> {
        self.binary(LessEqual, rhs)
    }

    pub fn greater<R: IntoActor>(self, rhs: R) -> Actor<Binary<Greater, E, R::Node>> {
        self.binary(Greater, rhs)
    }

    pub fn greater_equal<R: IntoActor>(self, rhs: R) -> Actor<Binary<GreaterEqual, E, R::Node>> {
        self.binary(GreaterEqual, rhs)
    }

    pub fn and<R: IntoActor>(self, rhs: R) -> Actor<Binary<LogicalAnd, E, R::Node>> {
        self.binary(LogicalAnd, rhs)
    }

    pub fn or<R: IntoActor>(self, rhs: R) -> Actor<Binary<LogicalOr, E, R::Node>> {
        self.binary(LogicalOr, rhs)
    }

    fn binary<Op, R: IntoActor>(self, op: Op, rhs: R) -> Actor<Binary<Op, E, R::Node>> {
        Actor::new(Binary::new(op, self.node, rhs.into_actor().node))
    }
}

/// Conversion of an operand into an actor.
///
/// Actors convert to themselves; plain values are captured as constants.
pub trait IntoActor {
    type Node;

    fn into_actor(self) -> Actor<Self::Node>;
}

impl<E> IntoActor for Actor<E> {
    type Node = E;

    fn into_actor(self) -> Self {
        self
    }
}

/// Capture `value` as a constant actor.
pub fn val<T>(value: T) -> Actor<Value<T>> {
    Actor::new(Value(value))
}

macro_rules! literal_into_actor {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoActor for $ty {
                type Node = Value<$ty>;

                fn into_actor(self) -> Actor<Value<$ty>> {
                    val(self)
                }
            }
        )+
    };
}

literal_into_actor!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    &'static str,
);

macro_rules! actor_binary_ops {
    ($($trait:ident :: $method:ident => $op:ident),+ $(,)?) => {
        $(
            impl<E, R: IntoActor> std::ops::$trait<R> for Actor<E> {
                type Output = Actor<Binary<$op, E, R::Node>>;

                fn $method(self, rhs: R) -> Self::Output {
                    self.binary($op, rhs)
                }
            }
        )+
    };
}

actor_binary_ops! {
    Add::add => Plus,
    Sub::sub => Minus,
    Mul::mul => Multiplies,
    Div::div => Divides,
    Rem::rem => Modulus,
    BitAnd::bitand => BitwiseAnd,
    BitOr::bitor => BitwiseOr,
    BitXor::bitxor => BitwiseXor,
    Shl::shl => ShiftLeft,
    Shr::shr => ShiftRight,
}

impl<E> std::ops::Neg for Actor<E> {
    type Output = Actor<Unary<Negate, E>>;

    fn neg(self) -> Self::Output {
        Actor::new(Unary::new(Negate, self.node))
    }
}

impl<E> std::ops::Not for Actor<E> {
    type Output = Actor<Unary<Complement, E>>;

    fn not(self) -> Self::Output {
        Actor::new(Unary::new(Complement, self.node))
    }
}

// Literals on the left get one impl per concrete type, so an unsuffixed
// literal there is ambiguous: write `1i32 + _1`, not `1 + _1`.
macro_rules! literal_lhs_ops {
    (arithmetic: $($lit:ty),+ $(,)?) => {
        $(
            literal_lhs_ops!(@op $lit, Add::add => Plus);
            literal_lhs_ops!(@op $lit, Sub::sub => Minus);
            literal_lhs_ops!(@op $lit, Mul::mul => Multiplies);
            literal_lhs_ops!(@op $lit, Div::div => Divides);
            literal_lhs_ops!(@op $lit, Rem::rem => Modulus);
        )+
    };
    (bitwise: $($lit:ty),+ $(,)?) => {
        $(
            literal_lhs_ops!(@op $lit, BitAnd::bitand => BitwiseAnd);
            literal_lhs_ops!(@op $lit, BitOr::bitor => BitwiseOr);
            literal_lhs_ops!(@op $lit, BitXor::bitxor => BitwiseXor);
        )+
    };
    (@op $lit:ty, $trait:ident :: $method:ident => $op:ident) => {
        impl<E> std::ops::$trait<Actor<E>> for $lit {
            type Output = Actor<Binary<$op, Value<$lit>, E>>;

            fn $method(self, rhs: Actor<E>) -> Self::Output {
                Actor::new(Binary::new($op, Value(self), rhs.node))
            }
        }
    };
}

literal_lhs_ops!(
    arithmetic: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
literal_lhs_ops!(
    bitwise: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholders::{_1, _2, _3};
    use lattix_tuple::tie;

    #[test]
    fn operators_build_without_evaluating() {
        let expr = _1 * 2 + _2;
        let mut x = 3;
        let mut y = 4;
        assert_eq!(expr.call(&mut tie!(x, y)), 10);
        assert_eq!(expr.call(&mut tie!(y, x)), 11);
    }

    #[test]
    fn literal_on_the_left() {
        let expr = 100i32 - _1;
        let mut x = 1;
        assert_eq!(expr.call(&mut tie!(x)), 99);
        assert_eq!((2.0f64 * _1).eval(&tie!(1.5)), 3.0);
        let mut mask = 0b1010u8;
        assert_eq!((0b0110u8 & _1).call(&mut tie!(mask)), 0b0010);
        let mut flag = false;
        assert!((true ^ _1).call(&mut tie!(flag)));
    }

    #[test]
    fn invoke_needs_no_environment() {
        assert_eq!((val(6) * 7).invoke(), 42);
        assert_eq!((-val(5)).invoke(), -5);
        assert!((!val(false)).invoke());
    }

    #[test]
    fn comparisons_and_logic() {
        let in_range = _1.greater_equal(0).and(_1.less(_2));
        let mut i = 3;
        let mut n = 5;
        assert!(in_range.call(&mut tie!(i, n)));
        i = 5;
        assert!(!in_range.call(&mut tie!(i, n)));

        let differs = _1.not_equal_to(_2).or(_3);
        let (mut a, mut b, mut flag) = (1, 1, false);
        assert!(!differs.call(&mut tie!(a, b, flag)));
        flag = true;
        assert!(differs.call(&mut tie!(a, b, flag)));
    }

    #[test]
    fn strings_concatenate() {
        let greet = val(String::from("hello, ")) + _1;
        let mut name = "world";
        assert_eq!(greet.call(&mut tie!(name)), "hello, world");
    }

    #[test]
    fn assign_evaluates_rhs_before_writing() {
        let bump = _1.assign(_1 + 1);
        let mut counter = 41;
        {
            let mut env = tie!(counter);
            let slot = bump.call(&mut env);
            assert_eq!(*slot, 42);
        }
        assert_eq!(counter, 42);
    }
}
