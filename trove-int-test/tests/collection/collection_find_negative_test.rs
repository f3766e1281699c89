use serde_json::json;
use trove::errors::ErrorKind;
use trove_int_test::test_util::{cleanup, create_test_context, insert_test_documents, run_test};

#[test]
fn test_find_with_multiple_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;

            let err = coll
                .find(&json!({"first_name": "fn1", "last_name": "ln1"}))
                .unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::NotImplemented);

            let err = coll.explain(&json!({"a": 1, "b": 2})).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::NotImplemented);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_with_invalid_conditions() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;

            for conditions in [json!("first_name"), json!(1), json!([{"first_name": "fn1"}])] {
                let err = coll.find(&conditions).unwrap_err();
                assert_eq!(err.kind(), &ErrorKind::InvalidArgument);
            }
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_on_missing_field() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;

            assert!(coll.find(&json!({"unknown": "fn1"}))?.is_empty());
            assert!(coll.find(&json!({"address.zip": null}))?.is_empty());
            assert!(coll.find(&json!({"first_name.x": "fn1"}))?.is_empty());
            Ok(())
        },
        cleanup,
    )
}
