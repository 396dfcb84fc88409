use core::any::TypeId;

use super::*;
use crate::access::{
    Functional, FunctionalLayer, Throwing, ThrowingLayer, Unchecked, UncheckedLayer,
};
use crate::control::{Control, DependentBool, FlagLayer, Tombstone, TombstoneLayer};
use crate::control::sentinel::{ConstU8, Deduced};
use crate::storage::{Aligned, AlignedSlot};

fn same<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

fn top_guard<T, P: Policy<T>>(stack: &P::Stack) -> Result<(), crate::BadOptionalAccess> {
    stack.guard()
}

#[test]
fn storage_alone_composes_to_its_slot() {
    assert!(same::<Stack<u32, crate::policy![Aligned]>, AlignedSlot<u32>>());
}

#[test]
fn list_layers_outermost_first() {
    assert!(same::<
        Stack<u32, crate::policy![Throwing, DependentBool, Aligned]>,
        ThrowingLayer<FlagLayer<AlignedSlot<u32>>>,
    >());
    assert!(same::<
        Stack<i64, crate::policy![Unchecked, Tombstone, Aligned]>,
        UncheckedLayer<TombstoneLayer<Deduced, AlignedSlot<i64>>>,
    >());
}

#[test]
fn combine_flattens_into_one_entry() {
    assert!(same::<
        Stack<u8, crate::policy![crate::combine![Functional, Throwing], Tombstone<ConstU8<0>>, Aligned]>,
        FunctionalLayer<ThrowingLayer<TombstoneLayer<ConstU8<0>, AlignedSlot<u8>>>>,
    >());
    assert!(same::<
        Stack<u8, crate::policy![crate::combine![Functional, Throwing], DependentBool, Aligned]>,
        Stack<u8, crate::policy![Functional, Throwing, DependentBool, Aligned]>,
    >());
}

#[test]
fn calls_resolve_down_the_stack() {
    type P = crate::policy![crate::combine![Functional, Throwing], DependentBool, Aligned];

    let mut stack = <Stack<String, P> as RawSlot>::vacant();
    assert!(!stack.has_value());
    assert!(top_guard::<String, P>(&stack).is_err());

    unsafe { stack.build("layered".to_owned()) };
    stack.value_set();
    assert!(top_guard::<String, P>(&stack).is_ok());
    assert_eq!(unsafe { stack.get_ref() }, "layered");

    stack.value_unset();
    unsafe { stack.destroy() };
}
