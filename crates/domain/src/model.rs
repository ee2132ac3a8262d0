//! Pod model identifiers — family parsing and artwork selection.
//!
//! Model names look like `S7-UC-03-ACA`: the second dash-separated segment
//! carries the family code and the third a variant. Families decide which
//! plug icon and which static artwork a pod is shown with.

use serde::{Deserialize, Serialize};

/// Artwork slug used when the model identifier cannot be read.
const FALLBACK_SLUG: &str = "xx";

/// A pod model identifier, e.g. `"S7-UC-03-ACA"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PodModel(String);

/// Known model families, read from the second segment of the model name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// Universal pedestal models (`UP`).
    Up,
    /// Universal compact models (`UC`).
    Uc,
    /// Single-connector models (`1C`).
    OneC,
    /// Twin-connector models (`2C`).
    TwoC,
    /// Anything else, including malformed identifiers.
    Unrecognised,
}

/// Connector standard a pod presents to the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlugType {
    Type1,
    Type2,
}

impl PodModel {
    /// Wrap a model identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The family code from the second segment, upper-cased.
    #[must_use]
    pub fn family(&self) -> ModelFamily {
        match self.segment(1).as_deref() {
            Some("UP") => ModelFamily::Up,
            Some("UC") => ModelFamily::Uc,
            Some("1C") => ModelFamily::OneC,
            Some("2C") => ModelFamily::TwoC,
            _ => ModelFamily::Unrecognised,
        }
    }

    /// Which plug standard the model carries. Only the single-connector
    /// family uses Type 1; everything else presents a Type 2 connector.
    #[must_use]
    pub fn plug_type(&self) -> PlugType {
        match self.family() {
            ModelFamily::OneC => PlugType::Type1,
            _ => PlugType::Type2,
        }
    }

    /// The artwork slug for this model.
    ///
    /// More specific matches win over generic ones: the `03` variant of the
    /// compact family has dedicated artwork, single- and twin-connector
    /// models share the `2c` artwork, and unrecognised families fall back to
    /// their lower-cased code so new hardware still gets a stable path.
    #[must_use]
    pub fn image_slug(&self) -> String {
        let Some(family) = self.segment(1) else {
            return FALLBACK_SLUG.to_string();
        };

        match family.as_str() {
            "UP" => "up".to_string(),
            "1C" | "2C" => "2c".to_string(),
            "UC" => {
                if self.segment(2).as_deref() == Some("03") {
                    "uc-03".to_string()
                } else {
                    "uc".to_string()
                }
            }
            other => other.to_lowercase(),
        }
    }

    fn segment(&self, index: usize) -> Option<String> {
        self.0
            .split('-')
            .nth(index)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase)
    }
}

impl std::fmt::Display for PodModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_compact_family_with_variant() {
        let model = PodModel::new("S7-UC-03-ACA");
        assert_eq!(model.family(), ModelFamily::Uc);
        assert_eq!(model.image_slug(), "uc-03");
        assert_eq!(model.plug_type(), PlugType::Type2);
    }

    #[test]
    fn should_use_generic_compact_artwork_for_other_variants() {
        let model = PodModel::new("XX-UC-XX-XX");
        assert_eq!(model.image_slug(), "uc");
        assert_eq!(model.plug_type(), PlugType::Type2);
    }

    #[test]
    fn should_share_artwork_between_connector_families() {
        let twin = PodModel::new("XX-2C-XX-XX");
        let single = PodModel::new("XX-1C-XX-XX");
        assert_eq!(twin.image_slug(), "2c");
        assert_eq!(single.image_slug(), "2c");
    }

    #[test]
    fn should_read_the_family_segment_even_when_later_segments_match_other_codes() {
        let model = PodModel::new("S7-2C-1C-ACA");
        assert_eq!(model.family(), ModelFamily::TwoC);
        assert_eq!(model.image_slug(), "2c");
        assert_eq!(model.plug_type(), PlugType::Type2);
    }

    #[test]
    fn should_use_type1_plug_only_for_single_connector_family() {
        assert_eq!(PodModel::new("XX-1C-XX-XX").plug_type(), PlugType::Type1);
        assert_eq!(PodModel::new("XX-2C-XX-XX").plug_type(), PlugType::Type2);
        assert_eq!(PodModel::new("S7-UC-03-ACA").plug_type(), PlugType::Type2);
        assert_eq!(PodModel::new("XX-XX-XX-XX").plug_type(), PlugType::Type2);
    }

    #[test]
    fn should_fall_back_to_lowercased_code_for_unrecognised_family() {
        let model = PodModel::new("XX-XX-XX-XX");
        assert_eq!(model.family(), ModelFamily::Unrecognised);
        assert_eq!(model.image_slug(), "xx");
    }

    #[test]
    fn should_parse_pedestal_family() {
        let model = PodModel::new("S7-UP-01-ACA");
        assert_eq!(model.family(), ModelFamily::Up);
        assert_eq!(model.image_slug(), "up");
    }

    #[test]
    fn should_read_family_case_insensitively() {
        let model = PodModel::new("s7-uc-03-aca");
        assert_eq!(model.family(), ModelFamily::Uc);
        assert_eq!(model.image_slug(), "uc-03");
    }

    #[test]
    fn should_fall_back_when_identifier_has_no_segments() {
        let model = PodModel::new("SOLO");
        assert_eq!(model.family(), ModelFamily::Unrecognised);
        assert_eq!(model.image_slug(), "xx");
        assert_eq!(model.plug_type(), PlugType::Type2);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let model = PodModel::new("S7-UC-03-ACA");
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, "\"S7-UC-03-ACA\"");
        let parsed: PodModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, model);
    }
}
