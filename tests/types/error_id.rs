use error_chainlink::{ErrorId, ErrorNode};
use std::collections::HashSet;

#[test]
fn ids_are_unique_across_constructions() {
    let ids: HashSet<ErrorId> = (0..100).map(|_| ErrorNode::message("same").id()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn ids_are_unique_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| (0..50).map(|_| ErrorNode::end_of_stream().id()).collect::<Vec<_>>())
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id));
        }
    }
    assert_eq!(ids.len(), 200);
}

#[test]
fn clone_copies_id() {
    let err = ErrorNode::sentinel("s");
    assert_eq!(err.clone().id(), err.id());
}

#[test]
fn display_is_hash_prefixed_number() {
    let id = ErrorNode::message("m").id();
    assert_eq!(id.to_string(), format!("#{}", id.get()));
    assert!(id.get() > 0);
}

#[test]
fn ids_increase_within_a_thread() {
    let first = ErrorNode::message("a").id();
    let second = ErrorNode::message("b").id();
    let raw: u64 = second.get();

    assert!(second > first);
    assert!(raw > first.get());
}
