use serde::{Deserialize, Serialize};

/// Qualitative failure mode of a specimen material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractureType {
    Ductile,
    Brittle,
    Mixed,
}

impl FractureType {
    /// Display label for report views.
    pub fn label(&self) -> &'static str {
        match self {
            FractureType::Ductile => "Ductile",
            FractureType::Brittle => "Brittle",
            FractureType::Mixed => "Mixed",
        }
    }
}

/// A specimen material from the fixed catalog.
///
/// `color` and `description` are presentation-only; the simulation reads
/// nothing but `base_toughness_j` and (for the result record) `fracture`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique catalog key.
    pub id: String,
    pub name: String,
    pub category: String,
    /// Energy absorbed by a standard notched sample, in joules.
    pub base_toughness_j: f64,
    pub color: String,
    pub description: String,
    pub fracture: FractureType,
}

/// The reference specimen catalog: five materials spanning 10–210 J and all
/// three fracture types.
pub fn catalog() -> Vec<Material> {
    vec![
        Material {
            id: "mild-steel".to_string(),
            name: "Mild Steel (AISI 1018)".to_string(),
            category: "Metal".to_string(),
            base_toughness_j: 180.0,
            color: "#8a919c".to_string(),
            description: "Low-carbon structural steel; absorbs heavily before tearing."
                .to_string(),
            fracture: FractureType::Ductile,
        },
        Material {
            id: "stainless-304".to_string(),
            name: "Stainless Steel 304".to_string(),
            category: "Metal".to_string(),
            base_toughness_j: 210.0,
            color: "#c4cad2".to_string(),
            description: "Austenitic stainless; the toughest specimen in the catalog."
                .to_string(),
            fracture: FractureType::Ductile,
        },
        Material {
            id: "aluminum-6061".to_string(),
            name: "Aluminum 6061-T6".to_string(),
            category: "Metal".to_string(),
            base_toughness_j: 60.0,
            color: "#b8bec6".to_string(),
            description: "Heat-treated aluminum alloy; tears with partial shear lips."
                .to_string(),
            fracture: FractureType::Mixed,
        },
        Material {
            id: "cast-iron".to_string(),
            name: "Gray Cast Iron".to_string(),
            category: "Metal".to_string(),
            base_toughness_j: 15.0,
            color: "#4d5157".to_string(),
            description: "Graphite flakes make it snap cleanly with little absorption."
                .to_string(),
            fracture: FractureType::Brittle,
        },
        Material {
            id: "acrylic".to_string(),
            name: "Acrylic (PMMA)".to_string(),
            category: "Polymer".to_string(),
            base_toughness_j: 10.0,
            color: "#dfe8f0".to_string(),
            description: "Glassy polymer; shatters at the notch almost immediately."
                .to_string(),
            fracture: FractureType::Brittle,
        },
    ]
}

/// Look up a catalog material by its unique id.
pub fn find(id: &str) -> Option<Material> {
    catalog().into_iter().find(|m| m.id == id)
}
