use error_chainlink::{wrap, ErrorKind, ErrorNode, TypedKind};

#[test]
fn wrap_without_label() {
    let inner = ErrorNode::end_of_stream();
    let id = inner.id();
    let err = wrap!(inner);

    assert_eq!(err.kind(), ErrorKind::Wrapped);
    assert_eq!(err.own_message(), None);
    assert_eq!(err.unwrap().map(|c| c.id()), Some(id));
}

#[test]
fn wrap_with_format_args() {
    let err = wrap!(TypedKind::InvalidCharacter, "line {} col {}", 3, 14);
    assert_eq!(err.to_string(), "line 3 col 14: INVALID CHARACTER");
}

#[test]
fn wrap_accepts_plain_strings() {
    let err = wrap!("refused", "connecting");
    assert_eq!(err.to_string(), "connecting: refused");
    assert_eq!(err.root_cause().kind(), ErrorKind::Message);
}

#[test]
fn wrap_trailing_comma() {
    let err = wrap!(ErrorNode::message("m"),);
    assert_eq!(err.depth(), 1);
}
