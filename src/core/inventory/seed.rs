use crate::core::inventory::{
    model::Condition,
    part::{NewPart, Part, PartId},
    project::{Project, ProjectId},
};

fn seed_part(id: &str, part: NewPart) -> Part {
    Part::from_new(PartId::new(id), part)
}

pub(super) fn demo_parts() -> Vec<Part> {
    vec![
        seed_part(
            "1",
            NewPart {
                name: "Front Brake Pad Set".to_string(),
                sku: Some("BP-F-001".to_string()),
                location: "Aisle 3, Shelf B2".to_string(),
                quantity: 12,
                condition: Condition::New,
                category: "Brakes".to_string(),
                make: "Toyota".to_string(),
                model: "Camry".to_string(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?w=400&h=400&fit=crop"
                        .to_string(),
                ),
                project_id: Some(ProjectId::new("1")),
            },
        ),
        seed_part(
            "2",
            NewPart {
                name: "Engine Oil Filter".to_string(),
                sku: Some("OF-001".to_string()),
                location: "Aisle 1, Shelf A4".to_string(),
                quantity: 24,
                condition: Condition::New,
                category: "Engine".to_string(),
                make: "Honda".to_string(),
                model: "Accord".to_string(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1605559424843-9e4c228bf1c2?w=400&h=400&fit=crop"
                        .to_string(),
                ),
                project_id: Some(ProjectId::new("2")),
            },
        ),
        seed_part(
            "3",
            NewPart {
                name: "Spark Plug Set".to_string(),
                sku: Some("SP-004".to_string()),
                location: "Aisle 2, Shelf C1".to_string(),
                quantity: 8,
                condition: Condition::New,
                category: "Engine".to_string(),
                make: "Ford".to_string(),
                model: "F-150".to_string(),
                image_url: None,
                project_id: None,
            },
        ),
    ]
}

pub(super) fn demo_projects() -> Vec<Project> {
    [
        ("1", "2024 BMW M3 Restoration", "Complete restoration project"),
        ("2", "Honda Civic Track Build", "Performance upgrade build"),
        ("3", "Ford F-150 Custom", "Custom build for client"),
    ]
    .into_iter()
    .map(|(id, name, description)| Project {
        id: ProjectId::new(id),
        name: name.to_string(),
        description: Some(description.to_string()),
    })
    .collect()
}
