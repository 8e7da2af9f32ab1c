//! Scenario 2: Self-recursive schema, specialized strategy.
//!
//! A Node schema whose "next" field is an optional Node again. The
//! registration step (`VerifierRegistry::new`) compiles one specialized
//! routine for the schema; the routine recurses through the registry by
//! schema id, so the self-reference costs nothing at build time.
//!
//! Sub-case A: a violation three nodes deep surfaces verbatim, named by
//!             the recursive schema itself
//! Sub-case B: the repaired chain → valid

use std::sync::Arc;

use serde_json::json;

use wireproof_contracts::{
    error::WireproofResult,
    schema::{Field, SchemaSet},
};
use wireproof_verify::VerifierRegistry;

// ── Scenario runner ───────────────────────────────────────────────────────────

/// Run Scenario 2: recursive Node chain under the specialized strategy.
pub fn run_scenario() -> WireproofResult<()> {
    println!("=== Scenario 2: Recursive Node chain (specialized strategy) ===");
    println!();

    let mut set = SchemaSet::new();
    let node = set.declare_message("demo.Node");
    // The field list references the id declared one line above: the
    // schema points at itself.
    set.set_fields(
        node,
        vec![
            Field::scalar("label", true),
            Field::message("next", false, node),
        ],
    )?;

    let registry = VerifierRegistry::new(Arc::new(set));

    println!("  Sub-case A: violation three nodes deep");
    let broken = json!({
        "label": "head",
        "next": { "label": "mid", "next": { "next": null } }
    });
    println!("  Message:  {broken}");
    match registry.verify(node, &broken) {
        None => println!("  Result:   VALID"),
        Some(reason) => println!("  Result:   REJECTED — {reason}"),
    }
    println!();

    println!("  Sub-case B: the repaired chain");
    let fixed = json!({
        "label": "head",
        "next": { "label": "mid", "next": { "label": "tail" } }
    });
    println!("  Message:  {fixed}");
    match registry.verify(node, &fixed) {
        None => println!("  Result:   VALID"),
        Some(reason) => println!("  Result:   REJECTED — {reason}"),
    }
    println!();

    Ok(())
}
