//! JSON shape of parts and projects as printed by the CLI.

mod common;

use common::*;
use serde_json::json;

#[test]
fn test_part_json_uses_camel_case_and_skips_missing_fields() -> anyhow::Result<()> {
    let inventory = Inventory::with_demo_data();
    let parts = inventory.get_parts();

    let brake_pads = serde_json::to_value(&parts[0])?;
    assert_eq!(brake_pads["id"], json!("1"));
    assert_eq!(brake_pads["sku"], json!("BP-F-001"));
    assert_eq!(brake_pads["condition"], json!("New"));
    assert_eq!(brake_pads["projectId"], json!("1"));
    assert!(brake_pads["imageUrl"].as_str().is_some_and(|url| url.starts_with("https://")));

    let spark_plugs = serde_json::to_value(&parts[2])?;
    let object = spark_plugs.as_object().expect("part serializes to an object");
    assert!(!object.contains_key("imageUrl"));
    assert!(!object.contains_key("projectId"));
    assert!(!object.contains_key("_guard"));
    assert_eq!(spark_plugs["quantity"], json!(8));

    let no_sku = inventory_with(vec![make_test_part("Fuse", "Electrical", "Kia", "Rio", 20)]);
    let fuse = serde_json::to_value(&no_sku.get_parts()[0])?;
    assert!(fuse.get("sku").is_none());
    Ok(())
}

#[test]
fn test_project_and_stats_json() -> anyhow::Result<()> {
    let inventory = Inventory::with_demo_data();
    let project = &inventory.get_projects()[0];

    let value = serde_json::to_value(project)?;
    assert_eq!(
        value,
        json!({
            "id": "1",
            "name": "2024 BMW M3 Restoration",
            "description": "Complete restoration project",
        })
    );

    let stats = serde_json::to_value(inventory.get_project_stats(&project.id))?;
    assert_eq!(stats, json!({ "totalParts": 1, "totalQuantity": 12 }));

    let round_trip: Project = serde_json::from_value(value)?;
    assert_eq!(&round_trip, project);
    Ok(())
}
