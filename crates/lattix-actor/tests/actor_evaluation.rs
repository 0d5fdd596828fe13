//! Actor evaluation against tied environments.

use lattix_actor::{_1, _2, _3, Actor, IntoActor, NullEnv, arg, val};
use lattix_tuple::{AsRefs, I2, make_tuple, tie};

#[test]
fn increment_reads_without_writing() {
    let plus_one = _1 + 1;
    let mut x = 4;
    let result = plus_one.call(&mut tie!(x));
    assert_eq!(result, 5);
    assert_eq!(x, 4);
}

#[test]
fn assignment_writes_through_and_returns_storage() {
    let store_nine = _1.assign(9);
    let mut x = 0;
    let mut env = tie!(x);
    let slot = store_nine.call(&mut env);
    assert_eq!(*slot, 9);
    *slot = 10;
    drop(env);
    assert_eq!(x, 10);
}

#[test]
fn assignment_converts_rhs_into_target() {
    let mut wide = 0i64;
    let mut narrow = 7i32;
    _1.assign(_2).call(&mut tie!(wide, narrow));
    assert_eq!(wide, 7);
}

#[test]
fn arguments_keep_their_positions() {
    let expr = _1 - _2 * _3;
    let (mut a, mut b, mut c) = (10, 2, 3);
    assert_eq!(expr.call(&mut tie!(a, b, c)), 4);
    assert_eq!(expr.call(&mut tie!(c, b, a)), -17);
}

#[test]
fn unused_arguments_are_ignored() {
    let third = arg::<I2>();
    let mut skipped = String::from("unused");
    let mut also = vec![1, 2];
    let mut picked = 'p';
    assert_eq!(third.call(&mut tie!(skipped, also, picked)), 'p');
}

#[test]
fn evaluates_against_tuple_views() {
    let mut values = make_tuple!(3u32, 4u32);
    let hypot_sq = _1 * _1 + _2 * _2;
    assert_eq!(hypot_sq.call(&mut values.as_mut_refs()), 25);
    assert_eq!(hypot_sq.eval(&values.as_refs()), 25);
}

#[test]
fn constant_actors_invoke_directly() {
    let answer = (val(40) + 2).equal_to(42);
    assert!(answer.invoke());
    assert!(answer.eval(&NullEnv));
    assert_eq!(1.5f64.into_actor().invoke(), 1.5);
}

#[test]
fn actors_are_reusable_values() {
    let double: Actor<_> = _1 * 2;
    let copy = double;
    for n in [0, 1, 21] {
        let mut x = n;
        assert_eq!(double.call(&mut tie!(x)), copy.call(&mut tie!(x)));
    }
}

#[test]
fn negation_and_complement() {
    let mut x = 6;
    let mut flag = true;
    assert_eq!((-_1).call(&mut tie!(x)), -6);
    assert!(!(!_1).call(&mut tie!(flag)));
    assert_eq!((!_1).call(&mut tie!(x)), !6);
}
