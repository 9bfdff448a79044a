//! Core value types used by scoops state.

/// Numeric field the result list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Energy in kilocalories.
    #[default]
    Kcal,
    /// Sugar in grams.
    Sugar,
}

impl SortField {
    /// Both sort fields in button order.
    pub const ALL: [Self; 2] = [Self::Kcal, Self::Sugar];

    /// Return the string key used in settings files and CLI flags.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Kcal => "kcal",
            Self::Sugar => "sugar",
        }
    }

    /// Parse a sort field from its settings key or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortField)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kcal" | "calories" | "calorie" | "energy" | "칼로리" => Some(Self::Kcal),
            "sugar" | "sugars" | "당" => Some(Self::Sugar),
            _ => None,
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kcal => "칼로리",
            Self::Sugar => "당",
        }
    }
}

/// Sort order for the active [`SortField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Return the string key used in settings files.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Parse a direction from its settings key or aliases (case-insensitive).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "up" => Some(Self::Ascending),
            "desc" | "descending" | "down" => Some(Self::Descending),
            _ => None,
        }
    }

    /// Arrow shown on the active sort button.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Which part of the screen receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search input; printable keys edit the query.
    #[default]
    Search,
    /// Result list; `j`/`k` move, other printable keys return to the search box.
    Results,
}

/// Screen rectangle `(x, y, width, height)` recorded during rendering for mouse hit-testing.
pub type HitRect = (u16, u16, u16, u16);
