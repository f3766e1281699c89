use rand::Rng;
use serde_json::json;
use trove::errors::TroveResult;
use trove_int_test::test_util::{cleanup, create_test_context};

fn main() -> TroveResult<()> {
    println!("Starting stress test...");
    let ctx = create_test_context()?;
    let collection = ctx.collection();
    let mut rng = rand::rng();

    let count = 200_000;
    let start = std::time::Instant::now();
    for i in 0..count {
        collection.add(json!({
            "first_name": format!("name_{}", i),
            "phone": rng.random_range(0..10_000),
            "address": {"city": format!("city_{}", i % 100)},
            "processed": false,
        }))?;
    }
    println!("Inserted {} records in {:?}", count, start.elapsed());

    let start = std::time::Instant::now();
    let mut found = 0;
    for i in (0..count).step_by(100) {
        found += collection.find(&json!({"first_name": format!("name_{}", i)}))?.len();
    }
    println!("Found {} records by index in {:?}", found, start.elapsed());

    let start = std::time::Instant::now();
    let cities = collection.find(&json!({"address.city": "city_7"}))?;
    println!("Index lookup on nested field returned {} record in {:?}", cities.len(), start.elapsed());

    let start = std::time::Instant::now();
    let unprocessed = collection.find(&json!({"processed": false}))?;
    println!("Scanned {} unprocessed records in {:?}", unprocessed.len(), start.elapsed());

    let start = std::time::Instant::now();
    let mut removed = 0;
    for i in (0..count).step_by(1000) {
        removed += collection.remove(&json!({"first_name": format!("name_{}", i)}), false)?;
    }
    println!("Removed {} records in {:?}", removed, start.elapsed());

    cleanup(ctx)
}
