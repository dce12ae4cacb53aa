use error_chainlink::{ErrorKind, ErrorNode, NodeResult, ResultExt, TypedKind};
use std::cell::Cell;

#[test]
fn wrap_err_keeps_ok() {
    let result: NodeResult<i32> = Ok(7);
    assert_eq!(result.wrap_err().unwrap(), 7);
}

#[test]
fn wrap_err_adds_one_layer_around_same_node() {
    let inner = ErrorNode::invalid_character();
    let id = inner.id();
    let result: NodeResult<()> = Err(inner);

    let err = result.wrap_err().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Wrapped);
    assert_eq!(err.depth(), 1);
    assert_eq!(err.unwrap().map(|c| c.id()), Some(id));
}

#[test]
fn wrap_err_with_labels_wrapper() {
    let result: Result<(), TypedKind> = Err(TypedKind::EndOfStream);
    let err = result.wrap_err_with("reading frame").unwrap_err();

    assert_eq!(err.to_string(), "reading frame: EOF");
    assert_eq!(err.root_cause().kind(), ErrorKind::EndOfStream);
}

#[test]
fn wrap_err_lazy_only_runs_on_error() {
    let calls = Cell::new(0);
    let label = || {
        calls.set(calls.get() + 1);
        "lazy".to_string()
    };

    let ok: NodeResult<()> = Ok(());
    assert!(ok.wrap_err_lazy(label).is_ok());
    assert_eq!(calls.get(), 0);

    let err: NodeResult<()> = Err(ErrorNode::message("boom"));
    let err = err.wrap_err_lazy(label).unwrap_err();
    assert_eq!(calls.get(), 1);
    assert_eq!(err.to_string(), "lazy: boom");
}

#[test]
fn chained_wraps_stack_up() {
    let result: Result<(), &str> = Err("timeout");
    let err = result.wrap_err_with("query").wrap_err_with("request").wrap_err().unwrap_err();

    assert_eq!(err.depth(), 3);
    assert_eq!(err.error_chain(), "request -> query -> timeout");
}
