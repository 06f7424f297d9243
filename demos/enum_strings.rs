//! Enum fields written as strings.
//!
//! Run with: cargo run --example enum_strings

use serde::{Deserialize, Serialize};
use serde_symbolic::{symbolic_enum, Symbolic};
use std::error::Error;

symbolic_enum! {
    /// Lifecycle of an order.
    pub struct OrderStatus(u8) {
        Pending = 0,
        Shipped = 1,
        Delivered = 2,
        Cancelled = 3 => "canceled",
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Order {
    id: u32,
    #[serde(with = "serde_symbolic::symbolic")]
    status: OrderStatus,
    history: Vec<Symbolic<OrderStatus>>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let order = Order {
        id: 1001,
        status: OrderStatus::Cancelled,
        history: vec![Symbolic(OrderStatus::Pending), Symbolic(OrderStatus::Shipped)],
    };

    let json = serde_json::to_string_pretty(&order)?;
    println!("JSON output:\n{}\n", json);

    let back: Order = serde_json::from_str(&json)?;
    assert_eq!(order, back);
    println!("✓ Round-trip successful");

    // Identifiers decode even when an override is declared
    let legacy: Order =
        serde_json::from_str(r#"{"id":7,"status":"Cancelled","history":[0,"shipped"]}"#)?;
    println!("Legacy input decoded as: {:?}", legacy);

    Ok(())
}
