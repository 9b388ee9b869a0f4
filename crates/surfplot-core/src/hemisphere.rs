//! Cortical hemispheres and the set of hemispheres present in a plot.

use serde::{Deserialize, Serialize};

/// One half of a brain surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    /// Left hemisphere.
    Left,
    /// Right hemisphere.
    Right,
}

impl Hemisphere {
    /// Returns the other hemisphere.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Hemisphere::Left => Hemisphere::Right,
            Hemisphere::Right => Hemisphere::Left,
        }
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Hemisphere::Left => "left",
            Hemisphere::Right => "right",
        }
    }
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which hemispheres are present in a plot request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hemispheres {
    /// Whether the left hemisphere is present.
    pub left: bool,
    /// Whether the right hemisphere is present.
    pub right: bool,
}

impl Hemispheres {
    /// Both hemispheres.
    pub const BOTH: Self = Self {
        left: true,
        right: true,
    };

    /// Only the left hemisphere.
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };

    /// Only the right hemisphere.
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };

    /// No hemispheres. Never plannable.
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };

    /// Creates a hemisphere set from presence flags.
    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    /// Returns whether `hemisphere` is present.
    pub fn contains(self, hemisphere: Hemisphere) -> bool {
        match hemisphere {
            Hemisphere::Left => self.left,
            Hemisphere::Right => self.right,
        }
    }

    /// Number of hemispheres present (0, 1 or 2).
    pub fn count(self) -> usize {
        usize::from(self.left) + usize::from(self.right)
    }

    /// Returns true if no hemisphere is present.
    pub fn is_empty(self) -> bool {
        self.count() == 0
    }

    /// Returns true if both hemispheres are present.
    pub fn is_both(self) -> bool {
        self.left && self.right
    }

    /// Column order of the present hemispheres.
    ///
    /// `[Left, Right]` when both are present, reversed when `flip` is set.
    /// With a single hemisphere `flip` has no effect.
    pub fn ordered(self, flip: bool) -> Vec<Hemisphere> {
        match (self.left, self.right) {
            (true, true) if flip => vec![Hemisphere::Right, Hemisphere::Left],
            (true, true) => vec![Hemisphere::Left, Hemisphere::Right],
            (true, false) => vec![Hemisphere::Left],
            (false, true) => vec![Hemisphere::Right],
            (false, false) => Vec::new(),
        }
    }
}

impl FromIterator<Hemisphere> for Hemispheres {
    fn from_iter<I: IntoIterator<Item = Hemisphere>>(iter: I) -> Self {
        let mut set = Hemispheres::NONE;
        for hemisphere in iter {
            match hemisphere {
                Hemisphere::Left => set.left = true,
                Hemisphere::Right => set.right = true,
            }
        }
        set
    }
}
