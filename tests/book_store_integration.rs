//! End-to-end tests driving one store through both dispatch paths.
//!
//! The framework side is simulated by calling `process` and `provide` with
//! the operation, URI variables and context a request would carry.

mod common;

use common::{BookStore, book, init_logging, uri_id};
use resource_state::{
    Context, Operation, Provided, StateError, StateProcessor, StateProvider, UriVariables,
};
use serde_json::json;

#[test]
fn test_create_read_update_delete_flow() {
    init_logging();
    let store = BookStore::new();
    let context = Context::new();

    let created = store
        .process(book("Dune"), &Operation::post(), &UriVariables::new(), &context)
        .expect("post should succeed")
        .expect("post returns the created book");
    assert_eq!(created["id"], json!(1));

    let fetched = store
        .provide(&Operation::get(), &uri_id(1), &context)
        .unwrap()
        .into_item()
        .expect("book 1 should exist");
    assert_eq!(fetched["title"], json!("Dune"));

    let replaced = store
        .process(book("Dune Messiah"), &Operation::put(), &uri_id(1), &context)
        .unwrap()
        .unwrap();
    assert_eq!(replaced, json!({"type": "Book", "title": "Dune Messiah", "id": 1}));

    let patched = store
        .process(
            json!({"type": "Book", "year": 1969}),
            &Operation::patch(),
            &uri_id(1),
            &context,
        )
        .unwrap()
        .unwrap();
    assert_eq!(patched["title"], json!("Dune Messiah"));
    assert_eq!(patched["year"], json!(1969));

    let deleted = store
        .process(book("Dune Messiah"), &Operation::delete(), &uri_id(1), &context)
        .unwrap();
    assert!(deleted.is_none());
    assert_eq!(store.len(), 0);

    let provided = store.provide(&Operation::get(), &uri_id(1), &context).unwrap();
    assert_eq!(provided, Provided::Nothing);
}

#[test]
fn test_collection_honours_context() {
    init_logging();
    let store = BookStore::new();
    for title in ["Dune", "Emma", "Ulysses"] {
        store
            .process(book(title), &Operation::post(), &UriVariables::new(), &Context::new())
            .unwrap();
    }

    let all = store
        .provide(&Operation::get_collection(), &UriVariables::new(), &Context::new())
        .unwrap();
    assert_eq!(all.len(), 3);

    let context = Context::from([("limit".to_string(), json!(2))]);
    let limited = store
        .provide(&Operation::get_collection(), &UriVariables::new(), &context)
        .unwrap();
    let titles: Vec<_> = limited
        .into_collection()
        .into_iter()
        .map(|b| b["title"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(titles, vec!["Dune", "Emma"]);
}

#[test]
fn test_foreign_resource_is_rejected_with_its_type() {
    init_logging();
    let store = BookStore::new();

    let error = store
        .process(
            json!({"type": "Author", "name": "Jane Austen"}),
            &Operation::post(),
            &UriVariables::new(),
            &Context::new(),
        )
        .unwrap_err();
    assert_eq!(error.to_string(), "Resource of type Author is not supported");

    let error = store
        .process(json!("Dune"), &Operation::delete(), &uri_id(1), &Context::new())
        .unwrap_err();
    assert_eq!(error.to_string(), "Resource of type string is not supported");
    assert_eq!(store.len(), 0);
}

#[test]
fn test_read_operation_on_write_path() {
    init_logging();
    let store = BookStore::new();
    let operation = Operation::get_collection().with_name("list_books");

    let error = store
        .process(book("Dune"), &operation, &UriVariables::new(), &Context::new())
        .unwrap_err();

    match error {
        StateError::OperationNotImplemented { operation: carried } => {
            assert_eq!(carried, operation);
        }
        other => panic!("Expected OperationNotImplemented, got {:?}", other),
    }
}

#[test]
fn test_handler_failure_surfaces_to_framework() {
    init_logging();
    let store = BookStore::new();

    let error = store
        .process(book("Dune"), &Operation::put(), &uri_id(99), &Context::new())
        .unwrap_err();
    assert_eq!(error.status_code(), 500);
    assert_eq!(error.to_string(), "Handler error: book 99 not found");

    let error = store
        .provide(&Operation::get(), &UriVariables::new(), &Context::new())
        .unwrap_err();
    assert_eq!(error.to_string(), "Handler error: missing id uri variable");
}

#[test]
fn test_provided_serializes_for_response_bodies() {
    init_logging();
    let store = BookStore::new();
    store
        .process(book("Dune"), &Operation::post(), &UriVariables::new(), &Context::new())
        .unwrap();

    let collection = store
        .provide(&Operation::get_collection(), &UriVariables::new(), &Context::new())
        .unwrap();
    assert_eq!(
        serde_json::to_value(&collection).unwrap(),
        json!([{"type": "Book", "title": "Dune", "id": 1}])
    );

    let missing = store.provide(&Operation::get(), &uri_id(5), &Context::new()).unwrap();
    assert_eq!(serde_json::to_value(&missing).unwrap(), serde_json::Value::Null);
}
