// src/plan/template.rs
use serde::{Deserialize, Serialize};

use crate::errors::PlanError;

/// A named furniture kind in the catalog, from which concrete placed
/// instances are stamped. Width and height are in grid units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTemplate {
    pub name: String,
    pub width: i32,
    pub height: i32,
}

impl ObjectTemplate {
    /// Form collaborators parse and pre-validate their input; this only
    /// rejects templates that violate the catalog constraints.
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Result<Self, PlanError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PlanError::InvalidTemplate("name must not be empty".into()));
        }
        if width <= 0 || height <= 0 {
            return Err(PlanError::InvalidTemplate(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            name,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_template() {
        let tpl = ObjectTemplate::new("bed", 4, 3).unwrap();
        assert_eq!(tpl.name, "bed");
        assert_eq!((tpl.width, tpl.height), (4, 3));
    }

    #[test]
    fn test_rejects_empty_name_and_bad_dimensions() {
        assert!(ObjectTemplate::new("", 4, 3).is_err());
        assert!(ObjectTemplate::new("sofa", 0, 3).is_err());
        assert!(ObjectTemplate::new("sofa", 2, -1).is_err());
    }
}
