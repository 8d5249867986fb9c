use serde::Deserialize;

use crate::error::{ModelError, Result};

/// One country's `{name, region, area}` tuple as returned by the dataset.
///
/// Records are immutable once fetched: the whole set is replaced wholesale,
/// never patched in place. `name` acts as the unique key within a fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub region: String,
    /// Square kilometers. A handful of territories omit the field in the
    /// source payload; those decode as 0.0.
    #[serde(default)]
    pub area: f64,
}

impl Country {
    /// Validated constructor for records built in code rather than decoded
    /// from the dataset.
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        area: f64,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::InvalidCountry(
                "name must not be empty".to_string(),
            ));
        }
        // `>=` rejects NaN as well as negative areas.
        if !(area >= 0.0) {
            return Err(ModelError::InvalidCountry(format!(
                "area must be a non-negative number, got {area}"
            )));
        }
        Ok(Self {
            name,
            region: region.into(),
            area,
        })
    }
}
