use serde_json::json;
use trove::FindPlan;
use trove_int_test::test_util::{
    cleanup, create_test_context, create_test_docs, insert_test_documents, run_test,
};

#[test]
fn test_find_all() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;
            assert_eq!(coll.find(&json!(null))?, create_test_docs());
            assert_eq!(coll.find(&json!({}))?, create_test_docs());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_on_empty_collection() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            assert!(coll.find(&json!(null))?.is_empty());
            assert!(coll.find(&json!({"first_name": "fn1"}))?.is_empty());
            assert!(coll.find(&json!({"last_name": "ln1"}))?.is_empty());
            assert_eq!(coll.find_one(&json!(null))?, None);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_indexed_field() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;
            let docs = create_test_docs();

            assert_eq!(coll.find(&json!({"first_name": "fn2"}))?, vec![docs[1].clone()]);
            assert_eq!(coll.find(&json!({"phone": 5550003}))?, vec![docs[2].clone()]);
            assert!(coll.find(&json!({"first_name": "fn9"}))?.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_nested_indexed_field_returns_first() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;
            let docs = create_test_docs();

            // two records live in Springfield, the index only knows the first
            assert_eq!(
                coll.find(&json!({"address.city": "Springfield"}))?,
                vec![docs[0].clone()]
            );
            assert_eq!(
                coll.find(&json!({"address.city": "Shelbyville"}))?,
                vec![docs[1].clone()]
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_scan() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;
            let docs = create_test_docs();

            assert_eq!(
                coll.find(&json!({"last_name": "ln2"}))?,
                vec![docs[1].clone(), docs[2].clone()]
            );
            assert_eq!(
                coll.find(&json!({"active": true}))?,
                vec![docs[0].clone(), docs[2].clone()]
            );
            assert_eq!(
                coll.find_with(&json!({"last_name": "ln2"}), true)?,
                vec![docs[1].clone()]
            );
            assert!(coll.find(&json!({"last_name": "ln9"}))?.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_scan_on_nested_and_structured_values() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;
            let docs = create_test_docs();

            assert_eq!(
                coll.find(&json!({"address.street": "2 Side St"}))?,
                vec![docs[1].clone()]
            );
            assert_eq!(coll.find(&json!({"tags": ["b"]}))?, vec![docs[1].clone()]);
            assert_eq!(coll.find(&json!({"tags.0": "a"}))?, vec![docs[0].clone()]);
            assert_eq!(
                coll.find(&json!({"address": {"city": "Shelbyville", "street": "2 Side St"}}))?,
                vec![docs[1].clone()]
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_compares_numbers_by_value() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            coll.add(json!([{"phone": 1, "score": 2}, {"phone": 2.0, "score": 2.0}]))?;

            assert_eq!(coll.find(&json!({"phone": 2}))?, vec![json!({"phone": 2.0, "score": 2.0})]);
            assert_eq!(coll.find(&json!({"phone": 1.0}))?.len(), 1);
            assert_eq!(coll.find(&json!({"score": 2}))?.len(), 2);

            let big = 1u64 << 60;
            coll.add(json!({"phone": big, "score": big}))?;
            assert_eq!(coll.find(&json!({"phone": big as f64}))?, coll.find(&json!({"score": big as f64}))?);
            assert_eq!(coll.find(&json!({"phone": big as f64}))?.len(), 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_returns_copies() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;

            let mut found = coll.find(&json!({"first_name": "fn1"}))?;
            found[0]["first_name"] = json!("mutated");
            let mut all = coll.to_vec();
            all.clear();

            assert_eq!(coll.find(&json!({"first_name": "fn1"}))?.len(), 1);
            assert_eq!(coll.len(), 3);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_one() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            insert_test_documents(&coll)?;
            let docs = create_test_docs();

            assert_eq!(coll.find_one(&json!({"last_name": "ln2"}))?, Some(docs[1].clone()));
            assert_eq!(coll.find_one(&json!({"first_name": "fn3"}))?, Some(docs[2].clone()));
            assert_eq!(coll.find_one(&json!({"last_name": "none"}))?, None);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_explain() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.collection();
            let plan = coll.explain(&json!({"address.city": "Springfield"}))?;
            assert!(plan.is_index_lookup());
            assert_eq!(plan.to_string(), "index lookup address.city = \"Springfield\"");

            let plan = coll.explain(&json!({"last_name": "ln1"}))?;
            assert_eq!(
                plan,
                FindPlan::Scan {
                    field: "last_name".to_string(),
                    value: json!("ln1"),
                }
            );
            assert_eq!(coll.explain(&json!({}))?, FindPlan::All);
            Ok(())
        },
        cleanup,
    )
}
