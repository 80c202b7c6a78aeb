use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A family of conductors sharing mechanical, thermal and electrical coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,

    /// Modulus of elasticity (kg/mm²)
    pub modulus_of_elasticity: f64,

    /// Coefficient of thermal expansion (1/°C)
    pub thermal_expansion: f64,

    /// Creep (°C)
    pub creep: f64,

    /// Temperature coefficient of resistance (1/°C)
    pub alpha: f64,

    #[serde(default)]
    pub key: String,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        modulus_of_elasticity: f64,
        thermal_expansion: f64,
        creep: f64,
        alpha: f64,
    ) -> Self {
        Self {
            name: name.into(),
            modulus_of_elasticity,
            thermal_expansion,
            creep,
            alpha,
            key: String::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

/// Standard material families with tabulated coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum StandardCategory {
    #[strum(to_string = "CU")]
    Copper,
    #[strum(to_string = "AAAC", serialize = "AASC")]
    Aaac,
    Acar,
    Acsr,
    #[strum(to_string = "AAC", serialize = "ALL")]
    Aluminum,
    #[strum(to_string = "CUWELD")]
    Copperweld,
}

impl StandardCategory {
    /// All-aluminum-alloy conductors are also sold as AASC
    pub const AASC: Self = Self::Aaac;
    pub const ALL_ALUMINUM: Self = Self::Aluminum;

    pub fn category(self) -> Category {
        let (name, modelas, coefexp, creep, alpha) = match self {
            Self::Copper => ("COPPER", 12000.0, 0.0000169, 0.0, 0.00374),
            Self::Aaac => ("AAAC (AASC)", 6450.0, 0.0000230, 20.0, 0.00340),
            Self::Acar => ("ACAR", 6450.0, 0.0000250, 20.0, 0.00385),
            Self::Acsr => ("ACSR", 8000.0, 0.0000191, 20.0, 0.00395),
            Self::Aluminum => ("ALUMINUM", 5600.0, 0.0000230, 20.0, 0.00395),
            Self::Copperweld => ("COPPERWELD", 16200.0, 0.0000130, 0.0, 0.00380),
        };
        Category::new(name, modelas, coefexp, creep, alpha).with_key(self.to_string())
    }
}

impl From<StandardCategory> for Category {
    fn from(standard: StandardCategory) -> Self {
        standard.category()
    }
}
