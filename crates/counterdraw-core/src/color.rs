//! Color handling for counter drawings.
//!
//! This module provides the [`Color`] type, a thin wrapper around the
//! `DynamicColor` type from the `color` crate. It accepts any CSS color
//! syntax and adds the conveniences the drawing code needs: alpha access
//! for SVG opacity attributes and ID-safe strings for marker definitions.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// A parsed CSS color used for strokes, text, and backgrounds.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Parses a CSS color string such as `"#0000ff"`, `"rgb(0, 0, 255)"`,
    /// or `"blue"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use counterdraw_core::color::Color;
    ///
    /// let outline = Color::new("blue").unwrap();
    /// let border = Color::new("#808080").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a sanitized, ID-safe string representation of this color,
    /// suitable for SVG `id` attributes such as arrow marker definitions.
    ///
    /// # Examples
    ///
    /// ```
    /// use counterdraw_core::color::Color;
    ///
    /// let id = Color::new("#ff8000").unwrap().to_id_safe_string();
    /// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let color_str = self.to_string();
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '%', '/'], "_");

        // SVG IDs must start with a letter
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

    /// Returns a copy of this color with the given alpha value
    /// (0.0 = fully transparent, 1.0 = fully opaque).
    ///
    /// # Examples
    ///
    /// ```
    /// use counterdraw_core::color::Color;
    ///
    /// let translucent = Color::new("white").unwrap().with_alpha(0.8);
    /// assert!((translucent.alpha() - 0.8).abs() < 0.001);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#0000ff").is_ok());
        assert!(Color::new("blue").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_color_with_alpha() {
        let translucent = Color::new("white").unwrap().with_alpha(0.8);
        assert!((translucent.alpha() - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_color_to_id_safe_string() {
        let id = Color::new("rgb(255, 128, 0)").unwrap().to_id_safe_string();
        for forbidden in ['#', '(', ')', ',', ' ', '%', '/'] {
            assert!(!id.contains(forbidden), "{id} contains {forbidden:?}");
        }
        assert!(!id.chars().next().unwrap().is_ascii_digit());
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let blue1 = Color::new("blue").unwrap();
        let blue2 = Color::new("blue").unwrap();
        let gray = Color::new("gray").unwrap();

        assert_eq!(blue1, blue2);
        assert_ne!(blue1, gray);

        let mut set = HashSet::new();
        set.insert(blue1);
        assert!(set.contains(&blue2));
        assert!(!set.contains(&gray));
    }
}
