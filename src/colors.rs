//! Colors
//!
//! Colors are plain tag values (hex codes or names) drawn from a fixed
//! palette. A product's colors are kept in a [`ColorSet`], which preserves
//! insertion order for display and never holds duplicates.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A color tag. Identity is the literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Create a color from its literal value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The literal color value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An insertion-ordered set of colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSet {
    colors: SmallVec<[Color; 5]>,
}

impl ColorSet {
    /// Create an empty color set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from string slices, keeping the first occurrence of each value.
    pub fn from_strs(colors: &[&str]) -> Self {
        colors.iter().copied().map(Color::from).collect()
    }

    /// Whether the set contains a color.
    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Append a color. Returns `false` if it was already present.
    pub fn insert(&mut self, color: Color) -> bool {
        if self.contains(&color) {
            return false;
        }

        self.colors.push(color);

        true
    }

    /// Remove a color. Returns `false` if it was not present.
    pub fn remove(&mut self, color: &Color) -> bool {
        match self.colors.iter().position(|existing| existing == color) {
            Some(pos) => {
                self.colors.remove(pos);

                true
            }
            None => false,
        }
    }

    /// Flip membership of a color. Returns `true` if the color is now selected.
    pub fn toggle(&mut self, color: Color) -> bool {
        if self.remove(&color) {
            return false;
        }

        self.colors.push(color);

        true
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Remove every color.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Color values as strings, in insertion order.
    pub fn to_strs(&self) -> Vec<String> {
        self.colors.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = Self::new();

        for color in iter {
            set.insert(color);
        }

        set
    }
}

impl<'a> IntoIterator for &'a ColorSet {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// The fixed set of colors a product may be tagged with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette, dropping repeated values.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut unique: Vec<Color> = Vec::new();

        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }

        Self { colors: unique }
    }

    /// Whether the palette offers a color.
    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Palette colors in display order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
