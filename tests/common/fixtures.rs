use partsdash::core::inventory::{
    Condition, Inventory, NewPart, Part, PartDraft, PartRepository, ProjectId,
};

/// Creates a NewPart with test data and no SKU, image or project.
pub fn make_test_part(name: &str, category: &str, make: &str, model: &str, quantity: u32) -> NewPart {
    NewPart {
        name: name.to_string(),
        sku: None,
        location: "Aisle 9, Shelf Z1".to_string(),
        quantity,
        condition: Condition::Used,
        category: category.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        image_url: None,
        project_id: None,
    }
}

/// Same as [`make_test_part`], allocated to `project_id`.
pub fn make_project_part(name: &str, project_id: &str, quantity: u32) -> NewPart {
    NewPart {
        project_id: Some(ProjectId::new(project_id)),
        ..make_test_part(name, "Engine", "BMW", "M3", quantity)
    }
}

/// Builds an empty inventory and adds `parts` so the store keeps their order
/// (adding prepends, so they go in back to front).
pub fn inventory_with(parts: Vec<NewPart>) -> Inventory {
    let mut inventory = Inventory::new();
    for part in parts.into_iter().rev() {
        inventory.add_part(part);
    }
    inventory
}

/// A form with every required field filled in.
pub fn filled_draft() -> PartDraft {
    PartDraft {
        name: "Rear Shock Absorber".to_string(),
        sku: "RS-220".to_string(),
        location: "Aisle 4, Shelf D3".to_string(),
        quantity: "2".to_string(),
        category: "Suspension".to_string(),
        make: "Subaru".to_string(),
        model: "WRX".to_string(),
        ..PartDraft::default()
    }
}

pub fn names<'a>(parts: &[&'a Part]) -> Vec<&'a str> {
    parts.iter().map(|part| part.name.as_str()).collect()
}
