//! Scenario 3: TOML catalog, both strategies side by side.
//!
//! Loads the embedded catalog (an order-processing shape with an enum and
//! a nested message), registers it with both strategies, and runs a small
//! message suite through each, printing the outcome and whether the two
//! strategies agreed, reason text included.

use std::sync::Arc;

use serde_json::json;

use wireproof_catalog::SchemaCatalog;
use wireproof_contracts::{
    error::{WireproofError, WireproofResult},
    reason::Reason,
};
use wireproof_verify::{ReflectiveVerifier, VerifierRegistry};

// ── Catalog ───────────────────────────────────────────────────────────────────

/// An order-processing catalog exercising every field kind.
const ORDER_CATALOG: &str = r#"
[[enums]]
name = "shop.Status"

[enums.values]
PENDING = 0
SHIPPED = 1
DELIVERED = 2

[[messages]]
name = "shop.Address"

[[messages.fields]]
name = "street"
required = true
kind = "scalar"

[[messages.fields]]
name = "city"
kind = "scalar"

[[messages]]
name = "shop.Order"

[[messages.fields]]
name = "id"
required = true
kind = "scalar"

[[messages.fields]]
name = "status"
required = true
kind = "enum"
target = "shop.Status"

[[messages.fields]]
name = "shipping"
required = true
kind = "message"
target = "shop.Address"
"#;

// ── Scenario runner ───────────────────────────────────────────────────────────

/// Run Scenario 3: catalog loading plus strategy comparison.
pub fn run_scenario() -> WireproofResult<()> {
    println!("=== Scenario 3: Catalog + strategy comparison ===");
    println!();

    let set = Arc::new(SchemaCatalog::from_toml_str(ORDER_CATALOG)?.resolve()?);
    let order = set
        .find_message("shop.Order")
        .ok_or_else(|| WireproofError::CatalogError {
            reason: "embedded catalog must declare shop.Order".to_string(),
        })?;

    let reflective = ReflectiveVerifier::new(Arc::clone(&set));
    let registry = VerifierRegistry::new(set);

    println!("  Catalog:  1 enum, 2 messages (shop.Order nests shop.Address)");
    println!();

    let suite = [
        json!({ "id": "o-1", "status": 1, "shipping": { "street": "5 Main" } }),
        json!({ "status": 1, "shipping": { "street": "5 Main" } }),
        json!({ "id": "o-2", "status": 9, "shipping": { "street": "5 Main" } }),
        json!({ "id": "o-3", "status": 2, "shipping": null }),
        json!({ "id": "o-4", "status": 2, "shipping": { "city": "Utrecht" } }),
    ];

    let mut disagreements = 0;
    for message in &suite {
        let slow = reflective.verify(order, message);
        let fast = registry.verify(order, message);
        let agree = slow == fast;
        if !agree {
            disagreements += 1;
        }

        println!("  Message:     {message}");
        println!("  Reflective:  {}", describe(&slow));
        println!("  Specialized: {}", describe(&fast));
        println!("  Agreement:   {}", if agree { "YES" } else { "NO" });
        println!();
    }

    println!(
        "  Strategies agreed on {}/{} messages.",
        suite.len() - disagreements,
        suite.len()
    );
    println!();

    Ok(())
}

fn describe(outcome: &Option<Reason>) -> String {
    match outcome {
        None => "VALID".to_string(),
        Some(reason) => format!("REJECTED — {reason}"),
    }
}
