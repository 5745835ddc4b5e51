use super::{Counted, TrackA, TrackB, clone_froms, clones, drops_a, drops_b};
use crate::{AccessError, Either, OptionalPair, Tag};

#[test]
fn test_pair_int_bool_scenario() {
    let mut pair = OptionalPair::<i32, bool>::new();
    assert!(!pair.is_set());
    assert!(!pair.is_type_a());
    assert!(!pair.is_type_b());
    assert_eq!(pair.tag(), Tag::Unset);

    pair.set_value_a(25325);
    assert_eq!(*pair.get_value_a(), 25325);
    assert!(pair.is_type_a());
    assert_eq!(pair.tag(), Tag::A);

    pair.set_value_b(false);
    assert!(!*pair.get_value_b());
    assert!(pair.is_type_b());
    assert!(!pair.is_type_a());
    assert_eq!(pair.tag(), Tag::B);

    let moved = pair.take();
    assert!(!pair.is_set());
    assert!(moved.is_type_b());
}

#[test]
fn test_pair_switch_drops_other_once() {
    let mut pair = OptionalPair::new();
    pair.set_value_a(TrackA(1));
    pair.set_value_b(TrackB("b"));

    assert!(pair.is_type_b());
    assert!(!pair.is_type_a());
    assert_eq!(drops_a(), 1);
    assert_eq!(drops_b(), 0);

    drop(pair);
    assert_eq!(drops_a(), 1);
    assert_eq!(drops_b(), 1);
}

#[test]
fn test_pair_set_same_twice() {
    let mut pair = OptionalPair::<TrackA, TrackB>::new();
    pair.set_value_a(TrackA(1));
    pair.set_value_a(TrackA(2));

    assert_eq!(drops_a(), 1);
    assert_eq!(pair.get_value_a().0, 2);

    drop(pair);
    assert_eq!(drops_a(), 2);
}

#[test]
fn test_pair_set_drops_before_placing() {
    let mut pair = OptionalPair::<TrackA, TrackB>::from_b(TrackB("b"));

    pair.emplace_with::<crate::First, _>(|| {
        assert_eq!(drops_b(), 1);
        TrackA(3)
    });

    assert_eq!(pair.get_value_a().0, 3);
}

#[test]
fn test_pair_emplace_move_same_alternative() {
    let mut pair = OptionalPair::<TrackA, TrackB>::from_a(TrackA(1));

    *pair.emplace_move_a(TrackA(2)) = TrackA(5);
    // the first and second value are dropped by each assignment
    assert_eq!(drops_a(), 2);
    assert_eq!(pair.get_value_a().0, 5);

    pair.emplace_move_b(TrackB("b"));
    assert_eq!(drops_a(), 3);
    assert_eq!(pair.get_value_b().0, "b");
}

#[test]
fn test_pair_emplace_move_same_alternative_b() {
    let mut pair = OptionalPair::<TrackA, TrackB>::from_b(TrackB("first"));

    pair.emplace_move_b(TrackB("second"));
    assert_eq!(drops_b(), 1);
    assert_eq!(pair.get_value_b().0, "second");

    pair.emplace_move_a(TrackA(1));
    assert_eq!(drops_b(), 2);
    assert_eq!(drops_a(), 0);
    assert!(pair.is_type_a());
}

#[test]
fn test_pair_clone() {
    let src = OptionalPair::<String, i32>::from_a(String::from("clap"));
    let mut dst = src.clone();
    assert_eq!(src, dst);

    dst.get_value_a_mut().push_str("deez");
    assert_eq!(src.get_value_a(), "clap");
    assert_eq!(dst.get_value_a(), "clapdeez");

    let empty = OptionalPair::<String, i32>::new();
    assert!(!empty.clone().is_set());
}

#[test]
fn test_pair_clone_from() {
    let mut dst = OptionalPair::<TrackA, TrackB>::from_a(TrackA(1));

    dst.clone_from(&OptionalPair::from_b(TrackB("b")));
    assert!(dst.is_type_b());
    assert_eq!(drops_a(), 1);

    dst.clone_from(&OptionalPair::new());
    assert!(!dst.is_set());
    // the source temporary and the cleared clone
    assert_eq!(drops_b(), 2);
}

#[test]
fn test_pair_assign() {
    let mut pair = OptionalPair::<String, i32>::from_b(3);
    pair.assign_a(&String::from("foo"));
    assert_eq!(pair.get_value_a(), "foo");

    pair.assign_a(&String::from("bar"));
    assert_eq!(pair.get_value_a(), "bar");

    pair.assign_b(&4);
    assert_eq!(*pair.get_value_b(), 4);
}

#[test]
fn test_pair_assign_reuses_live_alternative() {
    let mut pair = OptionalPair::<Counted, i32>::from_b(3);

    // switching alternative needs a fresh copy
    pair.assign_a(&Counted(1));
    assert_eq!((clones(), clone_froms()), (1, 0));

    pair.assign_a(&Counted(2));
    assert_eq!((clones(), clone_froms()), (1, 1));
    assert_eq!(pair.get_value_a().0, 2);
}

#[test]
fn test_pair_clone_from_reuses_live_alternative() {
    let mut dst = OptionalPair::<Counted, i32>::from_a(Counted(1));
    let src = OptionalPair::<Counted, i32>::from_a(Counted(7));

    dst.clone_from(&src);
    assert_eq!((clones(), clone_froms()), (0, 1));
    assert_eq!(dst.get_value_a().0, 7);

    let mut dst = OptionalPair::<Counted, i32>::from_b(4);
    dst.clone_from(&src);
    assert_eq!((clones(), clone_froms()), (1, 1));
    assert_eq!(dst, src);
}

#[test]
fn test_pair_storage_size() {
    use std::mem::{align_of, size_of};

    // the larger alternative plus the discriminant, rounded up to the alignment
    assert!(size_of::<OptionalPair<u32, u64>>() <= size_of::<u64>() + align_of::<u64>());
    assert!(size_of::<OptionalPair<u8, bool>>() <= 2);
    assert_eq!(size_of::<OptionalPair<(), ()>>(), 1);
}

#[test]
fn test_pair_take() {
    let mut src = OptionalPair::<TrackA, TrackB>::from_a(TrackA(9));
    let dst = src.take();

    assert!(!src.is_set());
    assert_eq!(dst.get_value_a().0, 9);

    drop(src);
    assert_eq!(drops_a(), 0);

    drop(dst);
    assert_eq!(drops_a(), 1);
}

#[test]
fn test_pair_contains_type() {
    let mut pair = OptionalPair::<i32, bool>::new();
    assert!(!pair.contains_type::<i32>());
    assert!(!pair.contains_type::<bool>());

    pair.set_value_b(true);
    assert!(pair.contains_type::<bool>());
    assert!(!pair.contains_type::<i32>());
    assert!(!pair.contains_type::<u8>());

    let same = OptionalPair::<u8, u8>::from_b(1);
    assert!(same.contains_type::<u8>());
}

#[test]
fn test_pair_try_get() {
    let mut pair = OptionalPair::<i32, bool>::new();
    assert_eq!(pair.try_get_value_a(), Err(AccessError::Unset));

    pair.set_value_b(true);
    assert_eq!(
        pair.try_get_value_a(),
        Err(AccessError::WrongAlternative { expected: Tag::A, found: Tag::B })
    );
    *pair.try_get_value_b_mut().unwrap() = false;
    assert_eq!(pair.try_get_value_b(), Ok(&false));
}

#[test]
#[should_panic(expected = "`get_value_a` called on `OptionalPair` not holding alternative A")]
fn test_pair_get_wrong_alternative() {
    let pair = OptionalPair::<i32, bool>::from_b(true);
    pair.get_value_a();
}

#[test]
#[should_panic(expected = "`get_value_b` called on `OptionalPair` not holding alternative B")]
fn test_pair_get_unset() {
    let pair = OptionalPair::<i32, bool>::new();
    pair.get_value_b();
}

#[test]
fn test_pair_either() {
    let pair = OptionalPair::<i32, &str>::from(Either::Right("foo"));
    assert_eq!(pair.as_either(), Some(Either::Right(&"foo")));
    assert_eq!(pair.into_either(), Some(Either::Right("foo")));

    let pair = OptionalPair::<i32, &str>::new();
    assert_eq!(pair.as_either(), None);
}

#[test]
fn test_pair_map() {
    let pair = OptionalPair::<i32, bool>::from_a(2).map_a(|a| a.to_string());
    assert_eq!(pair.get_value_a(), "2");

    let pair = pair.map_b(|b| !b);
    assert!(pair.is_type_a());

    let pair = OptionalPair::<i32, bool>::from_b(true).map_b(u8::from);
    assert_eq!(*pair.get_value_b(), 1);
}

#[test]
fn test_pair_debug() {
    let pair = OptionalPair::<i32, bool>::from_a(2);
    assert_eq!(format!("{pair:?}"), "OptionalPair(A(2))");
    assert_eq!(format!("{:?}", OptionalPair::<i32, bool>::new()), "OptionalPair(None)");
}
