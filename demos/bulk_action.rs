//! Bulk Action Example
//!
//! This example demonstrates:
//! - Loading column order from a JSON config
//! - Observing selection changes as they happen
//! - Keeping a selection summary next to the table
//! - Building a bulk-action payload from the selection

use jsontable::{
    records_from_json, FieldId, MemoryTarget, SelectionChange, TableConfig, TableEvent,
    TableOptions, TextTarget,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("=== JsonTable Bulk Action Example ===\n");

    let config = TableConfig::from_json(
        r#"{"order": ["username", "role"], "select_label": "Pick", "id_field": "user_id"}"#,
    )
    .expect("valid config");

    let data = records_from_json(
        r#"[
            {"user_id": "u-100", "username": "mobile1", "role": "worker"},
            {"user_id": "u-101", "username": "mobile2", "role": "worker"},
            {"user_id": "u-102", "username": "supervisor", "role": "admin"}
        ]"#,
    )
    .expect("valid JSON records");

    let summary = Rc::new(RefCell::new(TextTarget::new()));
    let mut users = TableOptions::<FieldId>::new()
        .data(data)
        .with_config(&config)
        .target(MemoryTarget::new())
        .selected(summary.clone())
        .build()
        .expect("table options are complete");

    users.on_change(|change: &SelectionChange<FieldId>| {
        println!(
            "   change-selected: {} -> {}",
            change.id,
            if change.selected { "selected" } else { "cleared" }
        );
    });

    // Simulated checkbox clicks, processed one at a time
    println!("1. Processing checkbox events...");
    let click = |row, checked| TableEvent::CheckboxChanged { row, checked };
    let clicks = [click(0, true), click(2, true), click(0, false), click(1, true)];
    for click in clicks {
        users.handle_event(click).unwrap();
    }

    println!("\n2. Selection summary:");
    print!("{}", summary.borrow().text());

    println!("\n3. Bulk action payload:");
    let payload = json!({
        "action": "deactivate",
        "users": users.selected_json(),
    });
    println!("{}", serde_json::to_string_pretty(&payload).unwrap());

    println!("\n=== Example Complete ===");
}
