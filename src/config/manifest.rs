use crate::core::filter::guard_macro;
use crate::core::ConfigProvider;
use crate::utils::error::{AmalgamError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

const BUILTIN_MANIFEST: &str = include_str!("amalgam.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmalgamManifest {
    pub amalgam: AmalgamSection,
    pub fragments: FragmentsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmalgamSection {
    pub header: String,
    pub destination: String,
    pub comment_prefix: String,
    /// Overrides the macro derived from `header`.
    pub guard: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragmentsSection {
    pub load_order: Vec<String>,
    pub merge_order: Vec<String>,
}

impl AmalgamManifest {
    /// The plan compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_MANIFEST)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AmalgamError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("amalgam.header", &self.amalgam.header)?;
        validation::validate_path("amalgam.destination", &self.amalgam.destination)?;
        validation::validate_non_empty_string("amalgam.comment_prefix", &self.amalgam.comment_prefix)?;
        if let Some(guard) = &self.amalgam.guard {
            validation::validate_non_empty_string("amalgam.guard", guard)?;
        }

        let load_order = &self.fragments.load_order;
        let merge_order = &self.fragments.merge_order;
        validation::validate_non_empty_list("fragments.load_order", load_order)?;
        validation::validate_unique("fragments.load_order", load_order)?;
        validation::validate_unique("fragments.merge_order", merge_order)?;
        for name in load_order {
            validation::validate_path("fragments.load_order", name)?;
        }
        validation::validate_same_entries(
            "fragments.merge_order",
            merge_order,
            "fragments.load_order",
            load_order,
        )?;

        if !load_order.contains(&self.amalgam.header) {
            return Err(AmalgamError::ConfigValidationError {
                field: "amalgam.header".to_string(),
                message: format!("'{}' is not in fragments.load_order", self.amalgam.header),
            });
        }
        if load_order.contains(&self.amalgam.destination) {
            return Err(AmalgamError::InvalidConfigValueError {
                field: "amalgam.destination".to_string(),
                value: self.amalgam.destination.clone(),
                reason: "Destination would overwrite an input fragment".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for AmalgamManifest {
    fn header(&self) -> &str {
        &self.amalgam.header
    }

    fn load_order(&self) -> &[String] {
        &self.fragments.load_order
    }

    fn merge_order(&self) -> &[String] {
        &self.fragments.merge_order
    }

    fn destination(&self) -> &str {
        &self.amalgam.destination
    }

    fn comment_prefix(&self) -> &str {
        &self.amalgam.comment_prefix
    }

    fn guard_macro(&self) -> String {
        self.amalgam
            .guard
            .clone()
            .unwrap_or_else(|| guard_macro(&self.amalgam.header))
    }
}

impl Validate for AmalgamManifest {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
