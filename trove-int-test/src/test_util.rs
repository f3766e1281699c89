use serde_json::{json, Value};
use std::backtrace::Backtrace;
use std::time::Instant;
use trove::errors::TroveResult;
use trove::Collection;

/// Runs `test` between `before` and `after`, panicking with the failing
/// stage and its error.
///
/// `after` runs even when `test` fails.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> TroveResult<()>,
    B: Fn() -> TroveResult<TestContext>,
    A: Fn(TestContext) -> TroveResult<()>,
{
    let start_time = Instant::now();
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };

    let test_result = test(ctx.clone());
    let after_result = after(ctx);

    if let Err(e) = test_result {
        eprintln!("\n==================== TEST FAILED ====================");
        eprintln!("Failed after {:?}", start_time.elapsed());
        eprintln!("\nBacktrace:\n{}", Backtrace::capture());
        eprintln!("=====================================================\n");
        panic!("Test failed: {:?}", e);
    }
    if let Err(e) = after_result {
        panic!("After run failed: {:?}", e);
    }
}

#[derive(Clone)]
pub struct TestContext {
    collection: Collection,
}

impl TestContext {
    pub fn new(collection: Collection) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> Collection {
        self.collection.clone()
    }
}

/// Fields declared by [`create_test_context`].
pub const INDEXED_FIELDS: [&str; 3] = ["first_name", "address.city", "phone"];

pub fn create_test_context() -> TroveResult<TestContext> {
    let collection = Collection::builder()
        .indexes(INDEXED_FIELDS.iter().map(|field| (*field, true)))
        .build()?;
    Ok(TestContext::new(collection))
}

pub fn cleanup(ctx: TestContext) -> TroveResult<()> {
    ctx.collection().clear();
    Ok(())
}

pub fn create_test_docs() -> Vec<Value> {
    vec![
        json!({
            "first_name": "fn1",
            "last_name": "ln1",
            "phone": 5550001,
            "active": true,
            "address": {"street": "1 Main St", "city": "Springfield"},
            "tags": ["a", "b"],
        }),
        json!({
            "first_name": "fn2",
            "last_name": "ln2",
            "phone": 5550002,
            "active": false,
            "address": {"street": "2 Side St", "city": "Shelbyville"},
            "tags": ["b"],
        }),
        json!({
            "first_name": "fn3",
            "last_name": "ln2",
            "phone": 5550003,
            "active": true,
            "address": {"street": "3 Main St", "city": "Springfield"},
            "tags": [],
        }),
    ]
}

pub fn insert_test_documents(collection: &Collection) -> TroveResult<()> {
    collection.add(Value::Array(create_test_docs()))?;
    Ok(())
}
