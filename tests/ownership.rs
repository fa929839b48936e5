//! Properties of moving, swapping and copying whole backing stores, checked
//! through the public API only.

use movable_vec::{Acquire, MovableVec};
use quickcheck_macros::quickcheck;


#[quickcheck]
fn relocate_empties_source(a: Vec<i32>, b: Vec<i32>) -> bool {
    let mut source = MovableVec::from(a.clone());
    let mut destination = MovableVec::from(b);

    MovableVec::relocate(&mut source, &mut destination);
    source.len() == 0 && destination == a
}

#[quickcheck]
fn swap_twice_is_identity(a: Vec<i32>, b: Vec<i32>) -> bool {
    let mut x = MovableVec::from(a.clone());
    let mut y = MovableVec::from(b.clone());

    MovableVec::swap(&mut x, &mut y);
    let swapped = x == b && y == a;
    y.swap_with(&mut x);
    swapped && x == a && y == b
}

#[quickcheck]
fn view_survives_move(a: Vec<String>, extra: String) -> bool {
    let mut source = MovableVec::from(a.clone());
    let mut destination = MovableVec::new();

    let view = source.read_only_store();
    source.move_to(&mut destination);
    source.push(extra);

    view == a && source.len() == 1
}

#[quickcheck]
fn copy_is_independent(a: Vec<u8>, extra: u8) -> bool {
    let mut original = MovableVec::from(a.clone());
    let copy = MovableVec::from_other(&mut original, Acquire::Copy);

    original.push(extra);
    original.retain_all(&[extra]);
    copy == a
}

#[quickcheck]
fn take_from_moves_everything(a: Vec<u8>) -> bool {
    let mut original = MovableVec::from(a.clone());
    let taken = MovableVec::from_other(&mut original, Acquire::Move);

    original.is_empty() && taken == a
}

#[quickcheck]
fn remove_all_and_retain_all_partition(items: Vec<u8>, selection: Vec<u8>) -> bool {
    let mut removed = MovableVec::from(items.clone());
    let mut retained = MovableVec::from(items.clone());
    removed.remove_all(&selection);
    retained.retain_all(&selection);

    removed.len() + retained.len() == items.len()
        && removed.iter().all(|x| !selection.contains(&*x))
        && retained.iter().all(|x| selection.contains(&*x))
}

#[test]
fn handoff_between_components() {
    /// A component that only ever exposes its buffer read-only.
    struct Producer {
        buffer: MovableVec<u32>,
    }

    struct Consumer {
        inbox: MovableVec<u32>,
    }

    let mut producer = Producer { buffer: MovableVec::with_capacity(4) };
    let mut consumer = Consumer { inbox: MovableVec::new() };

    producer.buffer.extend(1..=4);
    let snapshot = producer.buffer.read_only_store();
    let first = snapshot.get(0);
    producer.buffer.move_to(&mut consumer.inbox);

    assert!(producer.buffer.is_empty());
    assert_eq!(consumer.inbox, [1, 2, 3, 4]);
    assert_eq!(snapshot, [1, 2, 3, 4]);

    // Whoever still holds the snapshot doesn't get in the new owner's way.
    consumer.inbox.push(5);
    assert!(consumer.inbox.remove_all(&snapshot.to_vec()[..1]));
    assert_eq!(first, Some(1));
    assert_eq!(snapshot, [2, 3, 4, 5]);
    consumer.inbox.remove(3).unwrap();

    // Refill and exchange.
    producer.buffer.extend(10..12);
    producer.buffer.swap_with(&mut consumer.inbox);
    assert_eq!(producer.buffer, [2, 3, 4]);
    assert_eq!(consumer.inbox, [10, 11]);
}
