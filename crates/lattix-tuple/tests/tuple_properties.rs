//! Integration tests: construction, access, arity and swap laws across
//! the arities algorithms actually use (0, 1, 2 and 5).

use lattix_tuple::{
    I0, I1, I2, I3, I4, IntoNative, Nil, Tuple, TupleSize, get, make_tuple, swap, tie, tuple_size,
};

#[test]
fn round_trip_arity_zero() {
    let t = make_tuple!();
    assert_eq!(t, Nil);
    assert_eq!(tuple_size::<Tuple![]>(), 0);
}

#[test]
fn round_trip_arity_one() {
    let t = make_tuple!(String::from("only"));
    assert_eq!(get::<I0, _>(&t), "only");
    assert_eq!(<Tuple![String] as TupleSize>::SIZE, 1);
}

#[test]
fn round_trip_arity_two() {
    let t = make_tuple!(-3i16, 'z');
    assert_eq!(*get::<I0, _>(&t), -3);
    assert_eq!(*get::<I1, _>(&t), 'z');
    assert_eq!(t.len(), 2);
}

#[test]
fn round_trip_arity_five() {
    let t = make_tuple!(0u8, 1u16, "2", vec![3], Some(4.0));
    assert_eq!(*get::<I0, _>(&t), 0);
    assert_eq!(*get::<I1, _>(&t), 1);
    assert_eq!(*get::<I2, _>(&t), "2");
    assert_eq!(*get::<I3, _>(&t), vec![3]);
    assert_eq!(*get::<I4, _>(&t), Some(4.0));
    assert_eq!(
        tuple_size::<Tuple![u8, u16, &str, Vec<i32>, Option<f64>]>(),
        5
    );
}

#[test]
fn tied_tuple_mutates_bound_variables() {
    let mut a = 1u32;
    let mut b = String::from("b");
    let mut c = [0u8; 2];
    {
        let mut env = tie!(a, b, c);
        **env.get_mut::<I0>() += 41;
        env.get_mut::<I1>().push_str("ee");
        env.get_mut::<I2>()[1] = 7;
    }
    assert_eq!(a, 42);
    assert_eq!(b, "bee");
    assert_eq!(c, [0, 7]);
}

#[test]
fn swap_is_an_involution() {
    let first = make_tuple!(1, "one", 1.0, 'a', true);
    let second = make_tuple!(2, "two", 2.0, 'b', false);
    let (mut x, mut y) = (first, second);

    swap(&mut x, &mut y);
    assert_eq!(x.into_native(), (2, "two", 2.0, 'b', false));
    assert_eq!(y.into_native(), (1, "one", 1.0, 'a', true));

    swap(&mut x, &mut y);
    assert_eq!((x, y), (first, second));
}
