//! Basic Table Example
//!
//! This example demonstrates:
//! - Building a table from JSON records
//! - Ordering columns and registering a cell renderer
//! - Selecting rows and reading the selection back

use jsontable::{field_id, records_from_json, renderer, TableOptions, TextTarget};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("=== JsonTable Basic Example ===\n");

    // 1. Load records
    println!("1. Loading records...");
    let data = records_from_json(
        r#"[
            {"id": 1, "name": "Alice", "email": "alice@example.com", "active": true},
            {"id": 2, "name": "Bob", "email": "bob@example.com", "active": false},
            {"id": 3, "name": "Charlie", "email": "charlie@example.com", "active": true}
        ]"#,
    )
    .expect("valid JSON records");
    println!("   Loaded {} records\n", data.len());

    // 2. Build the table
    println!("2. Building table...");
    let screen = Rc::new(RefCell::new(TextTarget::new()));
    let mut users = TableOptions::new()
        .data(data)
        .order(["id", "name", "email", "active"])
        .render(
            "active",
            renderer(|v| Value::from(if v.as_bool() == Some(true) { "yes" } else { "no" })),
        )
        .get_id(field_id("id"))
        .target(screen.clone())
        .build()
        .expect("table options are complete");
    println!("   Columns: {:?}\n", users.headers());
    print!("{}", screen.borrow().text());
    println!();

    // 3. Select rows
    println!("3. Selecting Alice and Charlie...");
    users.set_selected(0, true).unwrap();
    users.set_selected(2, true).unwrap();
    users.refresh().unwrap();
    print!("{}", screen.borrow().text());
    println!();

    // 4. Read back the selection
    println!("4. Selected records:");
    for record in users.get_selected() {
        println!("   {}", Value::Object((*record).clone()));
    }

    // 5. Deselect one
    println!("\n5. Deselecting Alice...");
    users.set_selected(0, false).unwrap();
    println!("   Selected ids: {:?}", users.selected_ids());

    println!("\n=== Example Complete ===");
}
