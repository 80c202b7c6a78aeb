use serde::{Deserialize, Serialize};

use super::Category;

/// Bare overhead conductor characteristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conductor {
    pub name: String,

    pub category: Category,

    /// Outer diameter (mm)
    pub diameter_mm: f64,

    /// Cross section area (mm²)
    #[serde(default)]
    pub area_mm2: f64,

    /// Weight per unit length (kg/m)
    #[serde(default)]
    pub weight_kg_per_m: f64,

    /// Rated strength (kg)
    #[serde(default)]
    pub strength_kg: f64,

    /// Resistance at 25 °C (Ohm/km)
    pub r25_ohm_per_km: f64,

    /// Heat capacity (kcal/(ft·°C))
    #[serde(default)]
    pub heat_capacity: f64,

    #[serde(default)]
    pub key: String,
}

impl Conductor {
    /// Create a conductor with the attributes the thermal model needs; the
    /// mechanical ones default to zero.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<Category>,
        diameter_mm: f64,
        r25_ohm_per_km: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            diameter_mm,
            area_mm2: 0.0,
            weight_kg_per_m: 0.0,
            strength_kg: 0.0,
            r25_ohm_per_km,
            heat_capacity: 0.0,
            key: String::new(),
        }
    }

    pub fn with_area(mut self, area_mm2: f64) -> Self {
        self.area_mm2 = area_mm2;
        self
    }

    pub fn with_weight(mut self, weight_kg_per_m: f64) -> Self {
        self.weight_kg_per_m = weight_kg_per_m;
        self
    }

    pub fn with_strength(mut self, strength_kg: f64) -> Self {
        self.strength_kg = strength_kg;
        self
    }

    pub fn with_heat_capacity(mut self, heat_capacity: f64) -> Self {
        self.heat_capacity = heat_capacity;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}
