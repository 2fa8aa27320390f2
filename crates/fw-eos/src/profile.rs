//! Profile files: batches of water states evaluated in one go.
//!
//! A profile lists samples (e.g. a temperature/salinity cast through a lake) and the
//! properties to report for each. Profiles load from YAML or JSON:
//!
//! ```yaml
//! name: Station 3, July
//! properties: [density, alpha]
//! samples:
//!   - { label: "0 m", t: 18.5, s: 0.21 }
//!   - { label: "20 m", t: 6.1, s: 0.22, p: 2.0 }
//! ```

use crate::eos::{EquationOfState, ValidityRange, WaterProperties};
use crate::error::{EosError, EosResult};
use crate::property::Property;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDef {
    pub name: String,
    #[serde(default = "all_properties")]
    pub properties: Vec<Property>,
    pub samples: Vec<SampleDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Temperature [°C]
    pub t: f64,
    /// Salinity [g/kg]
    #[serde(default)]
    pub s: f64,
    /// Gauge pressure [bar]
    #[serde(default)]
    pub p: f64,
}

fn all_properties() -> Vec<Property> {
    Property::ALL.to_vec()
}

/// Evaluated profile: one row of requested properties per sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub name: String,
    pub properties: Vec<Property>,
    pub rows: Vec<ProfileRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    #[serde(flatten)]
    pub sample: SampleDef,
    /// Whether the sample lies inside the fitted range of the regressions
    pub in_range: bool,
    /// Values in the same order as `ProfileReport::properties`
    pub values: Vec<f64>,
}

impl ProfileDef {
    pub fn validate(&self) -> EosResult<()> {
        if self.samples.is_empty() {
            return Err(EosError::InvalidArg {
                what: format!("profile '{}' has no samples", self.name),
            });
        }
        if self.properties.is_empty() {
            return Err(EosError::InvalidArg {
                what: format!("profile '{}' requests no properties", self.name),
            });
        }
        for (index, sample) in self.samples.iter().enumerate() {
            if !(sample.t.is_finite() && sample.s.is_finite() && sample.p.is_finite()) {
                return Err(EosError::InvalidArg {
                    what: format!("sample {} of profile '{}' is not finite", index, self.name),
                });
            }
        }
        Ok(())
    }

    /// Evaluate every sample. Samples outside the fitted range are flagged and logged.
    pub fn evaluate(&self, eos: &EquationOfState) -> ProfileReport {
        let range = ValidityRange::CHEN_MILLERO_1986;
        let rows = self
            .samples
            .iter()
            .map(|sample| {
                let in_range = range.contains(sample.t, sample.s, sample.p);
                if !in_range {
                    tracing::warn!(
                        profile = %self.name,
                        label = sample.label.as_deref().unwrap_or(""),
                        t = sample.t,
                        s = sample.s,
                        p = sample.p,
                        "sample outside fitted range; values are extrapolated"
                    );
                }
                let pack: WaterProperties = eos.properties(sample.t, sample.s, sample.p);
                ProfileRow {
                    sample: sample.clone(),
                    in_range,
                    values: self.properties.iter().map(|&prop| pack.get(prop)).collect(),
                }
            })
            .collect();

        ProfileReport {
            name: self.name.clone(),
            properties: self.properties.clone(),
            rows,
        }
    }
}

impl ProfileReport {
    /// Column of values for one property, if it was requested.
    pub fn column(&self, property: Property) -> Option<Vec<f64>> {
        let idx = self.properties.iter().position(|&p| p == property)?;
        Some(self.rows.iter().map(|row| row.values[idx]).collect())
    }
}

pub fn load_yaml(path: &Path) -> EosResult<ProfileDef> {
    let content = std::fs::read_to_string(path)?;
    let profile: ProfileDef = serde_yaml::from_str(&content)?;
    profile.validate()?;
    tracing::debug!(path = %path.display(), samples = profile.samples.len(), "loaded profile");
    Ok(profile)
}

pub fn load_json(path: &Path) -> EosResult<ProfileDef> {
    let content = std::fs::read_to_string(path)?;
    let profile: ProfileDef = serde_json::from_str(&content)?;
    profile.validate()?;
    tracing::debug!(path = %path.display(), samples = profile.samples.len(), "loaded profile");
    Ok(profile)
}

/// Load a profile, choosing the format from the file extension (`.json`, else YAML).
pub fn load_profile(path: &Path) -> EosResult<ProfileDef> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
