//! HTML Render Example
//!
//! This example demonstrates:
//! - Declaring an explicit schema instead of inferring it
//! - A fallible renderer and how its error surfaces
//! - Rendering into an HTML target and a read-only row copy

use jsontable::{
    field_id, records_from_json, try_renderer, ColumnSpec, HtmlTarget, Record, RenderError,
    RenderOptions, TableOptions,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn money(value: &serde_json::Value) -> Result<serde_json::Value, RenderError> {
    value
        .as_f64()
        .map(|n| json!(format!("${:.2}", n)))
        .ok_or_else(|| RenderError::new(format!("{} is not an amount", value)))
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("=== JsonTable HTML Example ===\n");

    let columns = vec![
        ColumnSpec::new("invoice"),
        ColumnSpec::new("amount").with_renderer(try_renderer(money)),
        ColumnSpec::new("due"),
    ];

    // 1. Well-formed data
    let data = records_from_json(
        r#"[
            {"invoice": "INV-1", "amount": 120, "due": "2024-01-31"},
            {"invoice": "INV-2", "amount": 75.5, "due": "2024-02-29"}
        ]"#,
    )
    .expect("valid JSON records");

    let page = Rc::new(RefCell::new(HtmlTarget::new()));
    let mut invoices = TableOptions::new()
        .data(data)
        .columns(columns.clone())
        .get_id(|r: &Record| {
            r.get("invoice")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        })
        .target(page.clone())
        .build()
        .expect("table renders");

    invoices.set_selected(1, true).unwrap();
    invoices.refresh().unwrap();
    println!("1. Rendered HTML:\n{}", page.borrow().html());

    let preview = invoices.render_row(1, RenderOptions::copy()).unwrap();
    println!("2. Read-only preview row: {}\n", serde_json::to_string(&preview).unwrap());

    // 2. A bad amount fails the whole render
    let bad = records_from_json(r#"[{"invoice": "INV-3", "amount": "n/a", "due": null}]"#)
        .expect("valid JSON records");
    let result = TableOptions::new()
        .data(bad)
        .columns(columns)
        .get_id(field_id("invoice"))
        .target(HtmlTarget::new())
        .build();
    match result {
        Ok(_) => println!("3. Unexpectedly rendered"),
        Err(e) => println!("3. Render failed: {}", e),
    }

    println!("\n=== Example Complete ===");
}
