use std::fmt;

use thiserror::Error;

use crate::core::inventory::{model::Condition, part::NewPart, project::ProjectId};

/// Raw add-part form fields, exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct PartDraft {
    pub name: String,
    pub sku: String,
    pub location: String,
    pub quantity: String,
    pub condition: Condition,
    pub category: String,
    pub make: String,
    pub model: String,
    pub image_url: String,
    pub project_id: Option<ProjectId>,
}

impl Default for PartDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            location: String::new(),
            quantity: "1".to_string(),
            condition: Condition::New,
            category: String::new(),
            make: String::new(),
            model: String::new(),
            image_url: String::new(),
            project_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Sku,
    Location,
    Category,
    Make,
    Model,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Name => "Part Name",
            RequiredField::Sku => "SKU / Part Number",
            RequiredField::Location => "Warehouse Location",
            RequiredField::Category => "Category",
            RequiredField::Make => "Brand",
            RequiredField::Model => "Model",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields(Vec<RequiredField>),

    #[error("Quantity must be a whole number of zero or more, got {0:?}")]
    InvalidQuantity(String),
}

impl PartDraft {
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Name, &self.name),
            (RequiredField::Sku, &self.sku),
            (RequiredField::Location, &self.location),
            (RequiredField::Category, &self.category),
            (RequiredField::Make, &self.make),
            (RequiredField::Model, &self.model),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn validate(&self) -> Result<NewPart, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidQuantity(self.quantity.clone()))?;
        let image_url = (!self.image_url.is_empty()).then(|| self.image_url.clone());
        Ok(NewPart {
            name: self.name.clone(),
            sku: Some(self.sku.clone()),
            location: self.location.clone(),
            quantity,
            condition: self.condition,
            category: self.category.clone(),
            make: self.make.clone(),
            model: self.model.clone(),
            image_url,
            project_id: self.project_id.clone(),
        })
    }
}
