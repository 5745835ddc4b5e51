use super::{TrackA, TrackB, drops_a, drops_b};
use crate::{First, OptionalPair, Second, Select, Tag};

#[test]
fn test_select_tag() {
    assert_eq!(<First as Select<i32, bool>>::TAG, Tag::A);
    assert_eq!(<Second as Select<i32, bool>>::TAG, Tag::B);
}

#[test]
fn test_select_default_initialize() {
    let mut pair = OptionalPair::<TrackA, TrackB>::new();
    pair.default_initialize::<Second>().0 = "default";

    assert!(pair.is::<Second>());
    assert!(!pair.is::<First>());
    assert_eq!(pair.get::<Second>().0, "default");
}

#[test]
#[should_panic(expected = "`default_initialize` called on set `OptionalPair`")]
fn test_select_default_initialize_set() {
    let mut pair = OptionalPair::<i32, bool>::from_a(1);
    pair.default_initialize::<First>();
}

#[test]
fn test_select_emplace() {
    let mut pair = OptionalPair::<TrackA, TrackB>::new();
    pair.emplace::<First>(TrackA(1));
    pair.emplace::<First>(TrackA(2));

    // emplace never assigns, the first value is dropped before the second is placed
    assert_eq!(drops_a(), 1);
    assert_eq!(pair.get::<First>().0, 2);

    pair.get_mut::<First>().0 += 1;
    assert_eq!(pair.get_value_a().0, 3);
}

#[test]
#[should_panic(expected = "`get` called on `OptionalPair` not holding the selected alternative")]
fn test_select_get_wrong_alternative() {
    let pair = OptionalPair::<i32, bool>::from_a(1);
    pair.get::<Second>();
}

#[test]
fn test_select_generic_caller() {
    fn reset<S: Select<i32, bool>>(pair: &mut OptionalPair<i32, bool>)
    where
        S::Output: Default,
    {
        pair.clear();
        pair.default_initialize::<S>();
    }

    let mut pair = OptionalPair::from_a(5);
    reset::<Second>(&mut pair);
    assert!(!*pair.get_value_b());

    reset::<First>(&mut pair);
    assert_eq!(*pair.get_value_a(), 0);
}

#[test]
fn test_select_place_clears_live_value() {
    let mut pair = OptionalPair::<TrackA, TrackB>::from_b(TrackB("b"));

    <First as Select<_, _>>::place(&mut pair, TrackA(2));
    assert_eq!(drops_b(), 1);
    assert!(pair.is_type_a());

    <Second as Select<_, _>>::place(&mut pair, TrackB("c"));
    assert_eq!(drops_a(), 1);
    assert_eq!(pair.get_value_b().0, "c");
}
