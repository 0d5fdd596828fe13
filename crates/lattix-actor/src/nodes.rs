//! Expression tree nodes.
//!
//! Every node is a plain value; composing actors builds a nested node type
//! whose shape is the expression. Nothing is evaluated until an environment
//! is supplied.

use crate::eval::{Apply, AssignTarget, Evaluable, Lvalue};
use crate::operators::{BinaryOperator, UnaryOperator};
use lattix_tuple::TupleGet;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// The environment element at index `N`.
///
/// Environments hold references (see `tie!`), so evaluating a placeholder
/// reads through the reference and yields a copy of the referent, while
/// assigning to one writes through it.
pub struct Placeholder<N>(PhantomData<N>);

impl<N> Placeholder<N> {
    pub const fn new() -> Self {
        Placeholder(PhantomData)
    }
}

impl<N> Clone for Placeholder<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Placeholder<N> {}

impl<N> Default for Placeholder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: lattix_tuple::Index> fmt::Debug for Placeholder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}", N::VALUE + 1)
    }
}

impl<N> Lvalue for Placeholder<N> {}

impl<N, Env> Evaluable<Env> for Placeholder<N>
where
    Env: TupleGet<N>,
    Env::Element: Deref,
    <Env::Element as Deref>::Target: Clone,
{
    type Output = <Env::Element as Deref>::Target;

    fn eval(&self, env: &Env) -> Self::Output {
        Deref::deref(TupleGet::<N>::get(env)).clone()
    }
}

impl<N: 'static, Env> AssignTarget<Env> for Placeholder<N>
where
    Env: TupleGet<N>,
    Env::Element: DerefMut,
    <Env::Element as Deref>::Target: Sized,
{
    type Target = <Env::Element as Deref>::Target;

    fn target<'e>(&self, env: &'e mut Env) -> &'e mut Self::Target {
        DerefMut::deref_mut(TupleGet::<N>::get_mut(env))
    }
}

/// A captured constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Value<T>(pub T);

impl<T: Clone, Env> Evaluable<Env> for Value<T> {
    type Output = T;

    fn eval(&self, _env: &Env) -> T {
        self.0.clone()
    }
}

/// A unary operator applied to one operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unary<Op, E> {
    pub op: Op,
    pub operand: E,
}

impl<Op, E> Unary<Op, E> {
    pub const fn new(op: Op, operand: E) -> Self {
        Self { op, operand }
    }
}

impl<Op, E, Env> Evaluable<Env> for Unary<Op, E>
where
    E: Evaluable<Env>,
    Op: UnaryOperator<E::Output>,
{
    type Output = Op::Output;

    fn eval(&self, env: &Env) -> Self::Output {
        Op::apply(self.operand.eval(env))
    }
}

/// A binary operator applied to two operands, left evaluated first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Binary<Op, L, R> {
    pub op: Op,
    pub lhs: L,
    pub rhs: R,
}

impl<Op, L, R> Binary<Op, L, R> {
    pub const fn new(op: Op, lhs: L, rhs: R) -> Self {
        Self { op, lhs, rhs }
    }
}

impl<Op, L, R, Env> Evaluable<Env> for Binary<Op, L, R>
where
    L: Evaluable<Env>,
    R: Evaluable<Env>,
    Op: BinaryOperator<L::Output, R::Output>,
{
    type Output = Op::Output;

    fn eval(&self, env: &Env) -> Self::Output {
        let lhs = self.lhs.eval(env);
        let rhs = self.rhs.eval(env);
        Op::apply(lhs, rhs)
    }
}

/// Store the right side's value into the left side's storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Assignment<L, R> {
    pub lhs: L,
    pub rhs: R,
}

impl<L, R> Assignment<L, R> {
    pub const fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<'e, Env: 'e, L, R> Apply<'e, Env> for Assignment<L, R>
where
    L: AssignTarget<Env>,
    L::Target: 'e,
    R: Evaluable<Env>,
    R::Output: Into<L::Target>,
{
    type Result = &'e mut L::Target;

    fn apply(&self, env: &'e mut Env) -> Self::Result {
        let value: L::Target = self.rhs.eval(env).into();
        let slot = self.lhs.target(env);
        *slot = value;
        slot
    }
}

// Read-only nodes apply by evaluating.

impl<'e, Env: 'e, N> Apply<'e, Env> for Placeholder<N>
where
    Self: Evaluable<Env>,
{
    type Result = <Self as Evaluable<Env>>::Output;

    fn apply(&self, env: &'e mut Env) -> Self::Result {
        self.eval(env)
    }
}

impl<'e, Env: 'e, T> Apply<'e, Env> for Value<T>
where
    Self: Evaluable<Env>,
{
    type Result = <Self as Evaluable<Env>>::Output;

    fn apply(&self, env: &'e mut Env) -> Self::Result {
        self.eval(env)
    }
}

impl<'e, Env: 'e, Op, E> Apply<'e, Env> for Unary<Op, E>
where
    Self: Evaluable<Env>,
{
    type Result = <Self as Evaluable<Env>>::Output;

    fn apply(&self, env: &'e mut Env) -> Self::Result {
        self.eval(env)
    }
}

impl<'e, Env: 'e, Op, L, R> Apply<'e, Env> for Binary<Op, L, R>
where
    Self: Evaluable<Env>,
{
    type Result = <Self as Evaluable<Env>>::Output;

    fn apply(&self, env: &'e mut Env) -> Self::Result {
        self.eval(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::NullEnv;
    use crate::operators::{Less, Negate, Plus};
    use lattix_tuple::{I0, I1, tie};

    #[test]
    fn placeholder_reads_through_reference() {
        let mut x = String::from("kept");
        let env = tie!(x);
        let read = Placeholder::<I0>::new().eval(&env);
        assert_eq!(read, "kept");
        drop(env);
        x.push('!');
        assert_eq!(read, "kept");
    }

    #[test]
    fn placeholder_targets_the_referent() {
        let mut a = 1;
        let mut b = 2;
        let mut env = tie!(a, b);
        *Placeholder::<I1>::new().target(&mut env) = 20;
        drop(env);
        assert_eq!((a, b), (1, 20));
    }

    #[test]
    fn value_ignores_environment() {
        assert_eq!(Value("lit").eval(&NullEnv), "lit");
    }

    #[test]
    fn binary_combines_operands() {
        let node = Binary::new(Plus, Placeholder::<I0>::new(), Value(10));
        let mut x = 5;
        assert_eq!(node.eval(&tie!(x)), 15);

        let cmp = Binary::new(Less, Value(1.5), Value(2.5));
        assert!(cmp.eval(&NullEnv));
    }

    #[test]
    fn unary_negates() {
        let node = Unary::new(Negate, Value(3i64));
        assert_eq!(node.eval(&NullEnv), -3);
    }

    #[test]
    fn assignment_converts_and_returns_slot() {
        let node = Assignment::new(Placeholder::<I0>::new(), Value(7u8));
        let mut wide = 0u32;
        let mut env = tie!(wide);
        let slot: &mut u32 = node.apply(&mut env);
        *slot += 1;
        drop(env);
        assert_eq!(wide, 8);
    }

    #[test]
    fn placeholder_debug_is_one_based() {
        assert_eq!(format!("{:?}", Placeholder::<I1>::new()), "_2");
    }
}
