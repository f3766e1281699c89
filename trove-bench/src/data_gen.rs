//! Data generators for benchmarks

use fake::faker::address::en::CityName;
use fake::faker::company::en::*;
use fake::faker::internet::en::*;
use fake::faker::name::en::*;
use fake::Fake;
use rand::Rng;
use serde_json::{json, Value};

/// Generate simple records for CRUD and indexing benchmarks
pub fn generate_simple_docs(count: usize) -> Vec<Value> {
    log::debug!("Generating {} records", count);
    (0..count).map(generate_single_doc).collect()
}

/// Generate a single record; `id` and `email` are unique per `id`
pub fn generate_single_doc(id: usize) -> Value {
    let mut rng = rand::thread_rng();
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let username: String = Username().fake();
    let company: String = CompanyName().fake();
    let city: String = CityName().fake();
    let age: i64 = rng.gen_range(18..80);
    let salary: f64 = rng.gen_range(30000.0..200000.0);

    json!({
        "id": id,
        "firstName": first_name,
        "lastName": last_name,
        "email": format!("{}_{}@example.com", username, id),
        "company": company,
        "age": age,
        "salary": salary,
        "active": rng.gen_bool(0.8),
        "address": {"city": city},
    })
}

/// Generate records whose `group` field takes `distinct` values, so the
/// first-wins index on it shadows most records
pub fn generate_grouped_docs(count: usize, distinct: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({"id": i, "group": format!("group_{}", i % distinct.max(1))}))
        .collect()
}
