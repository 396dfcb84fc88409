use generalized_optional::prelude::*;

const HELLO_WORLD: &str = "Hello World!";
const SOMETHING_ELSE: &str = "something else";
const ONE_LAST_THING: &str = "one last thing";

#[test]
fn test_construction_paths() {
    let empty: Optional<i32> = Optional::new();
    let none: Optional<i32> = Optional::none();
    let defaulted: Optional<i32> = Optional::default();
    assert!(!empty.has_value());
    assert!(!none.has_value());
    assert!(!defaulted.has_value());

    let answer: Optional<i32> = Optional::some(42);
    assert!(answer.has_value());
    assert_eq!(*answer, 42);

    let converted: Optional<String> = Optional::from_value(HELLO_WORLD);
    assert!(converted.has_value());
    assert_eq!(*converted, HELLO_WORLD);

    let owned = String::from(HELLO_WORLD);
    let implicit: Optional<String> = owned.into();
    assert_eq!(implicit.get().map(String::as_str), Some(HELLO_WORLD));

    let in_place: Optional<String> = Optional::in_place_default();
    assert!(in_place.has_value());
    assert_eq!(*in_place, "");

    let lazily: Optional<Vec<u8>> = Optional::in_place(|| vec![1, 2, 3]);
    assert_eq!(lazily.get(), Some(&vec![1, 2, 3]));

    let from_none: Optional<u8> = Optional::from_option(None);
    assert!(!from_none.has_value());
}

#[test]
fn test_copy_construction() {
    let empty: Optional<String> = Optional::new();
    let copy = empty.clone();
    assert!(!copy.has_value());

    let filled: Optional<String> = Optional::from_value(HELLO_WORLD);
    let copy = filled.clone();
    assert!(copy.has_value());
    assert_eq!(*copy, HELLO_WORLD);
    assert!(filled.has_value());
}

#[test]
fn test_move_construction() {
    let mut empty: Optional<String> = Optional::new();
    let moved = Optional::take_from(&mut empty);
    assert!(!moved.has_value());

    let mut source: Optional<String> = Optional::from_value(HELLO_WORLD);
    let dest = Optional::take_from(&mut source);
    assert!(!source.has_value());
    assert_eq!(*dest, HELLO_WORLD);

    // A plain Rust move carries the value; the source is gone statically.
    let relocated = dest;
    assert_eq!(*relocated, HELLO_WORLD);
}

#[test]
fn test_copy_assignment() {
    let mut lhs: Optional<String> = Optional::new();
    let rhs: Optional<String> = Optional::new();
    lhs.clone_from(&rhs);
    assert!(!lhs.has_value());
    assert!(!rhs.has_value());

    lhs.assign(String::from(HELLO_WORLD));
    let mut rhs: Optional<String> = Optional::new();
    rhs.clone_from(&lhs);
    assert!(lhs.has_value());
    assert!(rhs.has_value());
    assert_eq!(*lhs, *rhs);

    // Present destination: assigned in place.
    rhs.assign(SOMETHING_ELSE);
    lhs.clone_from(&rhs);
    assert_eq!(*lhs, SOMETHING_ELSE);

    // Empty source clears the destination.
    lhs.assign_from(&Optional::<String>::new());
    assert!(!lhs.has_value());
}

#[test]
fn test_move_assignment() {
    let mut lhs: Optional<String> = Optional::new();
    let mut rhs: Optional<String> = Optional::new();
    lhs.assign_take(&mut rhs);
    assert!(!lhs.has_value());
    assert!(!rhs.has_value());

    rhs.assign(HELLO_WORLD);
    lhs.assign_take(&mut rhs);
    assert!(!rhs.has_value());
    assert!(lhs.has_value());
    assert_eq!(*lhs, HELLO_WORLD);

    rhs.assign(ONE_LAST_THING);
    lhs.assign_take(&mut rhs);
    assert_eq!(*lhs, ONE_LAST_THING);
    assert!(!rhs.has_value());
}

#[test]
fn test_cross_policy_assignment() {
    let mut packed: OptionalTombstone<u32> = OptionalTombstone::new();
    let flagged: Optional<u16> = Optional::some(7);

    packed.assign_from(&flagged);
    assert_eq!(packed.get(), Some(&7));
    assert!(flagged.has_value());

    let mut flagged: Optional<u16> = Optional::some(9);
    packed.assign_take(&mut flagged);
    assert_eq!(packed.get(), Some(&9));
    assert!(!flagged.has_value());

    assert_eq!(packed, Optional::<u32>::some(9));
}

#[test]
fn test_swap() {
    let mut a: Optional<String> = Optional::new();
    let mut b: Optional<String> = Optional::new();
    a.swap(&mut b);
    assert!(!a.has_value());
    assert!(!b.has_value());

    a.assign(SOMETHING_ELSE);
    b.assign(HELLO_WORLD);
    a.swap(&mut b);
    assert_eq!(*a, HELLO_WORLD);
    assert_eq!(*b, SOMETHING_ELSE);

    a.reset();
    a.swap(&mut b);
    assert!(a.has_value());
    assert!(!b.has_value());
    assert_eq!(*a, SOMETHING_ELSE);

    a.swap(&mut b);
    assert!(!a.has_value());
    assert!(b.has_value());
    assert_eq!(*b, SOMETHING_ELSE);
}

#[test]
fn test_swap_without_clone() {
    struct NotClone(u8);

    let mut a: Optional<NotClone> = Optional::in_place(|| NotClone(1));
    let mut b: Optional<NotClone> = Optional::in_place(|| NotClone(2));
    a.swap(&mut b);
    assert_eq!(a.0, 2);
    assert_eq!(b.0, 1);
}

#[test]
fn test_swap_across_policies() {
    let mut flagged: Optional<i32> = Optional::some(5);
    let mut packed: OptionalTombstone<i32> = OptionalTombstone::new();
    flagged.swap(&mut packed);
    assert!(!flagged.has_value());
    assert_eq!(*packed, 5);
}

#[test]
fn test_value_or() {
    let empty: Optional<i32> = Optional::new();
    let answer: Optional<i32> = Optional::some(42);
    assert_eq!(empty.value_or(0), 0);
    assert_eq!(answer.value_or(0), 42);
    assert!(!empty.has_value());
    assert!(answer.has_value());

    let text: Optional<String> = Optional::new();
    assert_eq!(text.value_or(HELLO_WORLD), HELLO_WORLD);
    assert_eq!(text.value_or_else(|| SOMETHING_ELSE.to_owned()), SOMETHING_ELSE);
    assert_eq!(text.into_value_or(ONE_LAST_THING), ONE_LAST_THING);
}

#[test]
fn test_emplace() {
    let mut first: Optional<Vec<String>> = Optional::new();
    let mut second: Optional<Vec<String>> = Optional::in_place_from_iter(
        [SOMETHING_ELSE, HELLO_WORLD, ONE_LAST_THING].map(String::from),
    );
    assert_eq!(second.len(), 3);

    first.emplace_from_iter([HELLO_WORLD, SOMETHING_ELSE].map(String::from));
    assert!(first.has_value());
    assert_eq!(first[0], HELLO_WORLD);
    assert_eq!(first[1], SOMETHING_ELSE);

    let emptied = second.emplace(Vec::with_capacity(0));
    assert!(emptied.is_empty());
    assert!(second.has_value());
    assert_eq!(second.len(), 0);
}

#[test]
fn test_take_and_replace() {
    let mut opt: Optional<u64> = Optional::some(1);
    assert_eq!(opt.replace(2), Some(1));
    assert_eq!(opt.take(), Some(2));
    assert_eq!(opt.take(), None);
    assert_eq!(opt.replace(3), None);
    assert_eq!(opt.into_option(), Some(3));
}

#[test]
fn test_functional_combinators() {
    let empty: Optional<String> = Optional::new();
    let filled: Optional<String> = Optional::from_value(HELLO_WORLD);

    assert_eq!(empty.with_value_or(0, String::len), 0);
    assert_eq!(filled.with_value_or(0, String::len), 12);

    let mut seen = Vec::new();
    empty.with_value(|s| seen.push(s.clone()));
    filled.with_value(|s| seen.push(s.clone()));
    assert_eq!(seen, [HELLO_WORLD]);

    assert_eq!(filled.into_with_value_or(String::new(), |s| s + "!"), "Hello World!!");
}

#[test]
fn test_equality_and_hash() {
    use std::collections::HashSet;

    let a: Optional<i32> = Optional::some(1);
    let b: OptionalTombstone<i32> = OptionalTombstone::some(1);
    assert_eq!(a, b);
    assert_ne!(a, Optional::<i32>::new());
    assert_eq!(Optional::<i32>::new(), OptionalTombstone::<i32>::new());

    let set: HashSet<Optional<i32>> = [Optional::some(1), Optional::some(1), Optional::new()]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_hello_world_scenario() {
    let mut greeting: Optional<String> = Optional::new();
    assert!(!greeting.has_value());

    greeting.assign(HELLO_WORLD);
    assert!(greeting.has_value());
    assert_eq!(greeting.value(), Ok(&String::from(HELLO_WORLD)));

    greeting.reset();
    assert!(!greeting.has_value());
}
