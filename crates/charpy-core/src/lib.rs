pub mod config;
pub mod history;
pub mod material;
pub mod result;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::config::PendulumConfig;
    use crate::material::{FractureType, Material};

    /// The reference rig configuration used by the golden scenarios:
    /// 20 kg hammer on a 0.8 m arm, released from 135°.
    pub fn standard_config() -> PendulumConfig {
        PendulumConfig::new(20.0, 0.8, 135.0)
    }

    /// A minimal catalog-shaped material with the given toughness.
    pub fn test_material(toughness_j: f64) -> Material {
        Material {
            id: "test".to_string(),
            name: "Test Specimen".to_string(),
            category: "Test".to_string(),
            base_toughness_j: toughness_j,
            color: "#888888".to_string(),
            description: String::new(),
            fracture: FractureType::Mixed,
        }
    }
}
