use crate::error::{LinkboardError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Color given to categories that arrive without one
pub const DEFAULT_CATEGORY_COLOR: &str = "#818CF8";

/// Icon given to categories that arrive without one
pub const DEFAULT_CATEGORY_ICON: &str = "folder";

/// Colors handed out to categories created from bookmark folders
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#818CF8", // Indigo
    "#F472B6", // Pink
    "#34D399", // Emerald
    "#FBBF24", // Amber
    "#60A5FA", // Blue
    "#A78BFA", // Violet
    "#F87171", // Red
    "#4ADE80", // Green
    "#FB923C", // Orange
    "#22D3EE", // Cyan
];

/// Validated list of hex colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Palette {
    /// Build a palette, rejecting anything that is not `#RGB` or `#RRGGBB`
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if let Some(bad) = colors.iter().find(|c| !is_hex_color(c)) {
            return Err(LinkboardError::Config(format!(
                "'{}' is not a hex color",
                bad
            )));
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Picks a color for each new category
///
/// Injected into the importer so tests (and users who want stable output)
/// can replace the random pick.
pub trait ColorSource {
    fn next_color(&mut self, palette: &Palette) -> String;
}

/// Uniform pick from the thread-local RNG
#[derive(Debug, Default)]
pub struct RandomColors;

impl ColorSource for RandomColors {
    fn next_color(&mut self, palette: &Palette) -> String {
        pick(palette, &mut rand::rng())
    }
}

/// Reproducible pick sequence from a fixed seed
#[derive(Debug)]
pub struct SeededColors {
    rng: StdRng,
}

impl SeededColors {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for SeededColors {
    fn next_color(&mut self, palette: &Palette) -> String {
        pick(palette, &mut self.rng)
    }
}

/// Always the same color, whatever the palette
#[derive(Debug, Clone)]
pub struct FixedColor(pub String);

impl Default for FixedColor {
    fn default() -> Self {
        FixedColor(DEFAULT_CATEGORY_COLOR.to_string())
    }
}

impl ColorSource for FixedColor {
    fn next_color(&mut self, _palette: &Palette) -> String {
        self.0.clone()
    }
}

fn pick<R: Rng + ?Sized>(palette: &Palette, rng: &mut R) -> String {
    let colors = palette.colors();
    if colors.is_empty() {
        return DEFAULT_CATEGORY_COLOR.to_string();
    }
    colors[rng.random_range(0..colors.len())].clone()
}
