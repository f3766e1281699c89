use serde::Serialize;
use serde_json::json;
use trove_int_test::test_util::{
    cleanup, create_test_context, create_test_docs, insert_test_documents, run_test,
};

#[test]
fn test_insert() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            let write_result = coll.add(json!({"first_name": "fn1", "age": 30}))?;
            assert_eq!(write_result.len(), 1);
            assert_eq!(coll.len(), 1);

            let id = write_result.affected_ids()[0];
            assert_eq!(coll.get(id), Some(json!({"first_name": "fn1", "age": 30})));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_batch_keeps_order() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            let write_result = coll.add(json!(create_test_docs()))?;
            assert_eq!(write_result.len(), 3);
            assert_eq!(coll.to_vec(), create_test_docs());
            assert_eq!(coll.ids(), write_result.affected_ids());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_insert_empty_batch() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            let write_result = coll.add(json!([]))?;
            assert!(write_result.is_empty());
            assert!(coll.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_merge_is_add() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;
            coll.merge(json!([{"first_name": "fn4"}, {"first_name": "fn1", "dup": true}]))?;

            assert_eq!(coll.len(), 5);
            assert_eq!(
                coll.find(&json!({"first_name": "fn1"}))?,
                vec![create_test_docs()[0].clone()]
            );
            assert_eq!(coll.find(&json!({"dup": true}))?.len(), 1);
            Ok(())
        },
        cleanup,
    )
}

#[derive(Serialize)]
struct Employee {
    first_name: String,
    phone: u64,
    address: Address,
}

#[derive(Serialize)]
struct Address {
    city: String,
}

#[test]
fn test_insert_serializable() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            let employee = Employee {
                first_name: "ada".to_string(),
                phone: 42,
                address: Address {
                    city: "London".to_string(),
                },
            };
            coll.add_serializable(&employee)?;
            coll.add_serializable(&[
                Employee {
                    first_name: "alan".to_string(),
                    phone: 43,
                    address: Address {
                        city: "London".to_string(),
                    },
                },
            ])?;

            let found = coll.find(&json!({"address.city": "London"}))?;
            assert_eq!(found.len(), 1);
            assert_eq!(found[0]["first_name"], "ada");
            assert_eq!(coll.find(&json!({"phone": 43}))?[0]["first_name"], "alan");
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_records_are_copied_in() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            let mut record = json!({"first_name": "fn1"});
            coll.add(record.clone())?;
            record["first_name"] = json!("changed");

            assert_eq!(coll.find(&json!({"first_name": "fn1"}))?.len(), 1);
            assert!(coll.find(&json!({"first_name": "changed"}))?.is_empty());
            Ok(())
        },
        cleanup,
    )
}
