//! Anatomical views and layout modes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::camera::AxisDirection;
use crate::error::SurfplotError;
use crate::hemisphere::Hemisphere;

/// A named camera angle at which a hemisphere is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Outer side of the hemisphere.
    Lateral,
    /// Inner side, facing the other hemisphere.
    Medial,
    /// From above.
    Dorsal,
    /// From below.
    Ventral,
    /// From the front.
    Anterior,
    /// From the back.
    Posterior,
}

impl View {
    /// Every view, in canonical order.
    pub const ALL: [View; 6] = [
        View::Lateral,
        View::Medial,
        View::Dorsal,
        View::Ventral,
        View::Anterior,
        View::Posterior,
    ];

    /// Views used when none are requested.
    pub const DEFAULT: [View; 2] = [View::Lateral, View::Medial];

    /// Returns the lowercase token for this view.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            View::Lateral => "lateral",
            View::Medial => "medial",
            View::Dorsal => "dorsal",
            View::Ventral => "ventral",
            View::Anterior => "anterior",
            View::Posterior => "posterior",
        }
    }

    /// Direction from the surface center toward the camera.
    ///
    /// Coordinates are RAS: +X right, +Y anterior, +Z superior. Lateral and
    /// medial depend on the hemisphere; the other views do not.
    #[must_use]
    pub fn eye_direction(self, hemisphere: Hemisphere) -> AxisDirection {
        let lateral = match hemisphere {
            Hemisphere::Left => AxisDirection::NegX,
            Hemisphere::Right => AxisDirection::PosX,
        };
        match self {
            View::Lateral => lateral,
            View::Medial => lateral.opposite(),
            View::Dorsal => AxisDirection::PosZ,
            View::Ventral => AxisDirection::NegZ,
            View::Anterior => AxisDirection::PosY,
            View::Posterior => AxisDirection::NegY,
        }
    }

    /// Screen-up direction for this view.
    ///
    /// Superior is up except when looking along the superior axis, where
    /// anterior is up.
    #[must_use]
    pub fn up_direction(self) -> AxisDirection {
        match self {
            View::Dorsal | View::Ventral => AxisDirection::PosY,
            _ => AxisDirection::PosZ,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = SurfplotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        View::ALL
            .into_iter()
            .find(|view| view.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                SurfplotError::invalid(format!(
                    "unknown view '{token}' (expected one of lateral, medial, dorsal, ventral, anterior, posterior)"
                ))
            })
    }
}

/// Arrangement strategy for composing cells into one canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Views by hemispheres. Collapses to a row for a single hemisphere.
    #[default]
    Grid,
    /// A single horizontal row.
    Row,
    /// A single vertical column.
    Column,
}

impl LayoutMode {
    /// Returns the lowercase token for this layout.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Grid => "grid",
            LayoutMode::Row => "row",
            LayoutMode::Column => "column",
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutMode {
    type Err = SurfplotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        [LayoutMode::Grid, LayoutMode::Row, LayoutMode::Column]
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                SurfplotError::invalid(format!(
                    "unknown layout '{token}' (expected grid, row or column)"
                ))
            })
    }
}

/// Parses a sequence of view tokens, keeping order and duplicates.
pub fn parse_views<I, S>(tokens: I) -> crate::Result<Vec<View>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().map(|t| t.as_ref().parse()).collect()
}
