use std::fmt;

use crate::error::{CatalogError, Result};

/// Name given to sections that were never named.
const UNNAMED: &str = "N/A";

/// A solid rectangular cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularSection {
    name: String,
    height: f64,
    width: f64,
}

impl RectangularSection {
    /// Creates a new rectangular section.
    ///
    /// # Errors
    ///
    /// Returns an error if `height` or `width` is not positive.
    pub fn new(name: impl Into<String>, height: f64, width: f64) -> Result<Self> {
        let height = positive("height", height)?;
        let width = positive("width", width)?;
        Ok(Self {
            name: name.into(),
            height,
            width,
        })
    }

    /// A 100 x 100 section with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for RectangularSection {
    fn default() -> Self {
        Self {
            name: UNNAMED.to_owned(),
            height: 100.0,
            width: 100.0,
        }
    }
}

fn positive(dimension: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(CatalogError::NonPositiveDimension { dimension, value }.into())
    }
}

/// Cross-sectional shape of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum CrossSection {
    Rectangular(RectangularSection),
}

impl CrossSection {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Rectangular(r) => &r.name,
        }
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        match self {
            Self::Rectangular(r) => r.height,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        match self {
            Self::Rectangular(r) => r.width,
        }
    }

    /// A section is valid once it has been given a name.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.name() != UNNAMED
    }

    /// Largest height and largest width over `sections`, or `None` if empty.
    ///
    /// The two maxima may come from different sections; alignment of the
    /// sections is not taken into account.
    #[must_use]
    pub fn max_height_and_width(sections: &[CrossSection]) -> Option<(f64, f64)> {
        let first = sections.first()?;
        Some(sections.iter().fold(
            (first.height(), first.width()),
            |(h, w), s| (h.max(s.height()), w.max(s.width())),
        ))
    }
}

impl From<RectangularSection> for CrossSection {
    fn from(section: RectangularSection) -> Self {
        Self::Rectangular(section)
    }
}

impl fmt::Display for CrossSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangular(r) => write!(
                f,
                "<RectangularSection> {} ({} x {})",
                r.name, r.height, r.width
            ),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert!(RectangularSection::new("a", 0.0, 100.0).is_err());
        assert!(RectangularSection::new("a", 100.0, -5.0).is_err());
        assert!(RectangularSection::new("a", f64::NAN, 100.0).is_err());
    }

    #[test]
    fn rectangular_dimensions() {
        let s: CrossSection = RectangularSection::new("GL 90x270", 270.0, 90.0).unwrap().into();
        assert_eq!(s.name(), "GL 90x270");
        assert_relative_eq!(s.height(), 270.0);
        assert_relative_eq!(s.width(), 90.0);
        assert!(s.is_valid());
    }

    #[test]
    fn default_section_is_unnamed() {
        let s = CrossSection::from(RectangularSection::default());
        assert!(!s.is_valid());
        assert_relative_eq!(s.height(), 100.0);
        assert!(CrossSection::from(RectangularSection::named("std")).is_valid());
    }

    #[test]
    fn max_height_and_width_over_sections() {
        let sections: Vec<CrossSection> = vec![
            RectangularSection::new("a", 300.0, 80.0).unwrap().into(),
            RectangularSection::new("b", 200.0, 120.0).unwrap().into(),
        ];
        assert_eq!(
            CrossSection::max_height_and_width(&sections),
            Some((300.0, 120.0))
        );
        assert_eq!(CrossSection::max_height_and_width(&[]), None);
    }
}
