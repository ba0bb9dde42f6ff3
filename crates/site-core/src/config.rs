use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be non-zero")]
    EmptyPool,
    #[error("friction must lie in (0, 1), got {0}")]
    Friction(f32),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("radius range is inverted: [{0}, {1}]")]
    RadiusRange(f32, f32),
    #[error("max speed {max} is below base speed {base}")]
    SpeedRange { base: f32, max: f32 },
    #[error("unknown particle preset '{0}'")]
    UnknownPreset(String),
}

/// Tuning for one particle field instance.
///
/// Distances and powers are in CSS pixels; the field multiplies them by the
/// device pixel ratio at use.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub base_speed: f32,
    pub max_speed: f32,
    pub link_dist: f32,
    pub repel_dist: f32,
    pub repel_power: f32,
    pub attract_range: f32,
    pub attract_power: f32,
    pub friction: f32,
    pub radius: [f32; 2],
}

impl FieldConfig {
    /// Dense field used behind the full-height page headers.
    pub fn hero() -> Self {
        Self {
            count: 90,
            base_speed: 0.35,
            max_speed: 2.5,
            link_dist: 130.0,
            repel_dist: 130.0,
            repel_power: 1.2,
            attract_range: 280.0,
            attract_power: 0.02,
            friction: 0.982,
            radius: [1.2, 2.8],
        }
    }

    /// Lighter field for smaller bands.
    pub fn compact() -> Self {
        Self {
            count: 60,
            base_speed: 0.25,
            max_speed: 2.0,
            link_dist: 120.0,
            repel_dist: 120.0,
            repel_power: 1.0,
            attract_range: 250.0,
            attract_power: 0.015,
            friction: 0.985,
            radius: [1.0, 2.5],
        }
    }

    /// Look up a preset by page name.
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "hero" | "home" | "contact" => Ok(Self::hero()),
            "compact" | "cta" | "about" | "booking" | "motherboard" => Ok(Self::compact()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(ConfigError::Friction(self.friction));
        }
        for (name, value) in [
            ("link_dist", self.link_dist),
            ("repel_dist", self.repel_dist),
            ("attract_range", self.attract_range),
            ("base_speed", self.base_speed),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.max_speed < self.base_speed {
            return Err(ConfigError::SpeedRange {
                base: self.base_speed,
                max: self.max_speed,
            });
        }
        let [lo, hi] = self.radius;
        if !(lo > 0.0) || lo > hi {
            return Err(ConfigError::RadiusRange(lo, hi));
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::hero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert_eq!(FieldConfig::hero().validate(), Ok(()));
        assert_eq!(FieldConfig::compact().validate(), Ok(()));
    }

    #[test]
    fn page_names_map_to_presets() {
        assert_eq!(FieldConfig::preset("home").unwrap().count, 90);
        assert_eq!(FieldConfig::preset("motherboard").unwrap().count, 60);
        assert_eq!(
            FieldConfig::preset("terms"),
            Err(ConfigError::UnknownPreset("terms".into()))
        );
    }

    #[test]
    fn rejects_friction_at_one() {
        let cfg = FieldConfig {
            friction: 1.0,
            ..FieldConfig::hero()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Friction(1.0)));
    }

    #[test]
    fn rejects_inverted_radius() {
        let cfg = FieldConfig {
            radius: [3.0, 1.0],
            ..FieldConfig::compact()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::RadiusRange(3.0, 1.0)));
    }
}
