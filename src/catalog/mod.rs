//! Product catalog: the closed manufacturer enumeration, normalized product
//! records, and loaders for the bundled data set and JSON catalog files.
//!
//! Raw records carry their nutrition metrics as text with unit suffixes
//! (`"180kcal"`, `"12.5g"`). They are normalized exactly once, when a
//! [`Catalog`] is built, so sorting only ever compares numbers.

mod data;
mod file;
mod parse;

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

pub use parse::{RawMetric, RawProduct, parse_kcal, parse_sugar};

/// Ice cream manufacturer.
///
/// The set is closed; declaration order is the display order of the
/// manufacturer toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Company {
    /// 해태
    Haitai,
    /// 라라스윗
    Lalasweet,
    /// 롯데
    Lotte,
    /// 빙그레
    Binggrae,
    /// 하겐다즈
    HaagenDazs,
}

impl Company {
    /// Every manufacturer in display order.
    pub const ALL: [Self; 5] = [
        Self::Haitai,
        Self::Lalasweet,
        Self::Lotte,
        Self::Binggrae,
        Self::HaagenDazs,
    ];

    /// Number of manufacturers.
    pub const COUNT: usize = Self::ALL.len();

    /// Display label shown on toggles and result rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Haitai => "해태",
            Self::Lalasweet => "라라스윗",
            Self::Lotte => "롯데",
            Self::Binggrae => "빙그레",
            Self::HaagenDazs => "하겐다즈",
        }
    }

    /// ASCII key used in settings, CLI flags and JSON output.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Haitai => "haitai",
            Self::Lalasweet => "lalasweet",
            Self::Lotte => "lotte",
            Self::Binggrae => "binggrae",
            Self::HaagenDazs => "haagen_dazs",
        }
    }

    /// Position of this manufacturer in [`Company::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// What: Resolve a manufacturer from its display label or config key.
    ///
    /// Inputs:
    /// - `name`: Label (`"롯데"`) or key (`"lotte"`, `"Haagen-Dazs"`).
    ///
    /// Output:
    /// - `Some(Company)` when recognized; `None` otherwise.
    ///
    /// Details:
    /// - Keys match case-insensitively; `-` and spaces are treated as `_`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if let Some(c) = Self::ALL.iter().find(|c| c.label() == trimmed) {
            return Some(*c);
        }
        let key = trimmed.to_ascii_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "haagendazs" => Some(Self::HaagenDazs),
            other => Self::ALL.iter().copied().find(|c| c.config_key() == other),
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry with normalized numeric metrics.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Product {
    /// Opaque image reference (path or URL).
    pub image: String,
    /// Display title; the search term is matched against it.
    pub title: String,
    /// Energy in kilocalories.
    pub kcal: u32,
    /// Sugar in grams.
    pub sugar: f64,
    /// Manufacturer.
    pub company: Company,
}

impl Product {
    /// Shop search link for this product.
    #[must_use]
    pub fn shop_url(&self) -> String {
        crate::util::shop_search_url(&self.title)
    }
}

/// Immutable, ordered product list.
///
/// Catalog order is the tiebreak for equal sort keys.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Products in catalog order.
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap already-normalized products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// What: Build a catalog from raw records, normalizing numeric text once.
    ///
    /// Inputs:
    /// - `records`: Raw records in catalog order.
    ///
    /// Output:
    /// - Catalog holding every record that normalized.
    ///
    /// Details:
    /// - A record that fails to normalize is a data defect in the source; it is
    ///   logged at `error` and left out.
    pub fn from_raw<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawProduct>,
    {
        let mut products = Vec::new();
        for (pos, raw) in records.into_iter().enumerate() {
            match raw.normalize() {
                Ok(p) => products.push(p),
                Err(msg) => {
                    tracing::error!(record = pos, error = %msg, "skipping malformed catalog record");
                }
            }
        }
        Self { products }
    }

    /// The catalog bundled with the application, normalized on first use.
    #[must_use]
    pub fn bundled() -> Self {
        static BUNDLED_CATALOG: OnceLock<Catalog> = OnceLock::new();
        BUNDLED_CATALOG
            .get_or_init(|| Self::from_raw(data::BUNDLED.iter().map(RawProduct::from)))
            .clone()
    }

    /// What: Load the catalog from a JSON file, or the bundled one when no path is given.
    ///
    /// Inputs:
    /// - `path`: Optional JSON catalog file.
    ///
    /// Output:
    /// - Loaded catalog, or an error message when the file is unreadable or not valid JSON.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let catalog = match path {
            Some(p) => file::from_json_path(p)?,
            None => Self::bundled(),
        };
        tracing::info!(
            source = %path.map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a JSON array of raw records.
    pub fn from_json_str(text: &str) -> Result<Self, String> {
        file::from_json_str(text)
    }

    /// Products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.products.len()
    }

    /// `true` when the catalog holds no products.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
