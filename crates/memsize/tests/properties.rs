use memsize::layout::{POINTER_BYTE_SIZE, SEQUENCE_HEADER_BYTES, STRING_HEADER_BYTES};
use memsize::{total_size, total_size_with, Accounting, Introspect, Options};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Introspect)]
struct Inventory {
    owner: String,
    items: Vec<Option<Box<String>>>,
    counts: BTreeMap<String, Vec<u32>>,
}

fn inventory() -> impl Strategy<Value = Inventory> {
    (
        ".{0,16}",
        proptest::collection::vec(proptest::option::of(".{0,8}"), 0..16),
        proptest::collection::btree_map(".{0,8}", proptest::collection::vec(any::<u32>(), 0..8), 0..12),
    )
        .prop_map(|(owner, items, counts)| Inventory {
            owner,
            items: items.into_iter().map(|item| item.map(Box::new)).collect(),
            counts,
        })
}

proptest! {
    #[test]
    fn measuring_twice_agrees(inventory in inventory()) {
        prop_assert_eq!(total_size(&inventory), total_size(&inventory));
    }

    #[test]
    fn total_covers_string_content(inventory in inventory()) {
        let content: usize = inventory.owner.len()
            + inventory.items.iter().flatten().map(|item| item.len()).sum::<usize>()
            + inventory.counts.keys().map(String::len).sum::<usize>();

        prop_assert!(total_size(&inventory) >= content as u64);
    }

    #[test]
    fn exclusive_never_exceeds_as_observed(inventory in inventory()) {
        let exclusive = Options::default().accounting(Accounting::Exclusive);
        prop_assert!(total_size_with(&inventory, &exclusive, None) <= total_size(&inventory));
    }

    #[test]
    fn appending_to_a_string_adds_its_length(base in ".{0,32}", suffix in ".{0,32}") {
        let mut string = base;
        let before = total_size(&string);
        string.push_str(&suffix);

        prop_assert_eq!(total_size(&string), before + suffix.len() as u64);
    }

    #[test]
    fn pushing_within_capacity_adds_the_element(
        strings in proptest::collection::vec(".{0,8}", 0..8),
        extra in ".{0,8}",
    ) {
        let mut sequence: Vec<String> = Vec::with_capacity(strings.len() + 1);
        sequence.extend(strings);
        let capacity = sequence.capacity();
        let before = total_size(&sequence);

        sequence.push(extra.clone());
        prop_assert_eq!(sequence.capacity(), capacity);
        prop_assert_eq!(
            total_size(&sequence),
            before + (STRING_HEADER_BYTES + extra.len()) as u64
        );
    }

    #[test]
    fn shared_payload_is_charged_once(content in ".{0,32}", copies in 1usize..16) {
        let shared = Rc::new(content);
        let handles: Vec<Rc<String>> = (0..copies).map(|_| shared.clone()).collect();

        prop_assert_eq!(
            total_size(&handles),
            (SEQUENCE_HEADER_BYTES
                + handles.capacity() * POINTER_BYTE_SIZE
                + copies * POINTER_BYTE_SIZE
                + STRING_HEADER_BYTES
                + shared.len()) as u64
        );
    }
}
