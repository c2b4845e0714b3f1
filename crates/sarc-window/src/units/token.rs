//! Unit-tagged length tokens and their pixel resolution

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::env::Environment;
use crate::math::Size;

/// Unit of a [`LengthToken`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Multiple of the root font size
    Em,
    /// Percentage of the viewport along the token's axis
    Percent,
    /// Absolute pixels (also used for bare numbers)
    Px,
}

impl LengthUnit {
    /// CSS suffix for this unit
    pub fn suffix(&self) -> &'static str {
        match self {
            LengthUnit::Em => "em",
            LengthUnit::Percent => "%",
            LengthUnit::Px => "px",
        }
    }
}

/// Viewport axis a length is measured along
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The viewport extent `%` lengths are relative to
    #[inline]
    pub fn base(self, viewport: Size) -> f32 {
        match self {
            Axis::Horizontal => viewport.width,
            Axis::Vertical => viewport.height,
        }
    }
}

/// A parsed length such as `32em`, `100%` or `480px`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LengthToken {
    pub magnitude: f32,
    pub unit: LengthUnit,
}

impl LengthToken {
    /// Create a token
    #[inline]
    pub const fn new(magnitude: f32, unit: LengthUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Pixel token
    #[inline]
    pub const fn px(magnitude: f32) -> Self {
        Self::new(magnitude, LengthUnit::Px)
    }

    /// Em token
    #[inline]
    pub const fn em(magnitude: f32) -> Self {
        Self::new(magnitude, LengthUnit::Em)
    }

    /// Percent token
    #[inline]
    pub const fn percent(magnitude: f32) -> Self {
        Self::new(magnitude, LengthUnit::Percent)
    }

    /// Parse a single length literal.
    ///
    /// The unit comes from the suffix (`em`, `%`, anything else is pixels)
    /// and the magnitude from the longest leading decimal number. A literal
    /// with no leading number has magnitude 0.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let unit = if raw.ends_with("em") {
            LengthUnit::Em
        } else if raw.ends_with('%') {
            LengthUnit::Percent
        } else {
            LengthUnit::Px
        };
        Self::new(leading_number(raw).unwrap_or(0.0), unit)
    }

    /// Resolve to pixels given the axis base and root font size.
    ///
    /// Non-finite results resolve to 0.
    pub fn to_px(self, axis_base: f32, root_font_size: f32) -> f32 {
        let px = match self.unit {
            LengthUnit::Em => self.magnitude * root_font_size,
            LengthUnit::Percent => axis_base * self.magnitude / 100.0,
            LengthUnit::Px => self.magnitude,
        };
        if px.is_finite() { px } else { 0.0 }
    }

    /// Resolve to pixels along `axis` of the environment's viewport
    #[inline]
    pub fn resolve(self, axis: Axis, env: &impl Environment) -> f32 {
        self.to_px(axis.base(env.viewport()), env.root_font_size())
    }
}

impl fmt::Display for LengthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.suffix())
    }
}

impl From<&str> for LengthToken {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for LengthToken {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<LengthToken> for String {
    fn from(token: LengthToken) -> Self {
        token.to_string()
    }
}

/// Longest prefix of `s` that reads as a decimal float (sign, digits,
/// fraction, exponent), the same prefix a CSS engine would take from `"12.5em"`.
fn leading_number(s: &str) -> Option<f32> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts with digits after it, so "2em" stops at the `e`
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    // Overflowing literals count as unparseable rather than infinite
    s[..end].parse::<f32>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FixedEnvironment;

    #[test]
    fn test_parse_units() {
        assert_eq!(LengthToken::parse("32em"), LengthToken::em(32.0));
        assert_eq!(LengthToken::parse("100%"), LengthToken::percent(100.0));
        assert_eq!(LengthToken::parse("480px"), LengthToken::px(480.0));
        assert_eq!(LengthToken::parse("250"), LengthToken::px(250.0));
        assert_eq!(LengthToken::parse("  12.5em "), LengthToken::em(12.5));
    }

    #[test]
    fn test_parse_garbage_magnitude_is_zero() {
        assert_eq!(LengthToken::parse("wide"), LengthToken::px(0.0));
        assert_eq!(LengthToken::parse("em"), LengthToken::em(0.0));
        assert_eq!(LengthToken::parse("%"), LengthToken::percent(0.0));
        assert_eq!(LengthToken::parse(""), LengthToken::px(0.0));
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("2em"), Some(2.0));
        assert_eq!(leading_number("-3.5px"), Some(-3.5));
        assert_eq!(leading_number(".5em"), Some(0.5));
        assert_eq!(leading_number("1e2px"), Some(100.0));
        assert_eq!(leading_number("7."), Some(7.0));
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number("px"), None);
        assert_eq!(leading_number("1e39em"), None);
    }

    #[test]
    fn test_format_round_trip() {
        for raw in ["32em", "12.5%", "640px", "0.1em", "-3px", "1e39em"] {
            let token = LengthToken::parse(raw);
            assert!(token.magnitude.is_finite());
            assert_eq!(LengthToken::parse(&token.to_string()), token);
        }
        assert_eq!(LengthToken::parse("1e39em"), LengthToken::em(0.0));
    }

    #[test]
    fn test_to_px() {
        assert!((LengthToken::em(10.0).to_px(1000.0, 16.0) - 160.0).abs() < 0.001);
        assert!((LengthToken::percent(50.0).to_px(1000.0, 16.0) - 500.0).abs() < 0.001);
        assert!((LengthToken::px(42.0).to_px(1000.0, 16.0) - 42.0).abs() < 0.001);
    }

    #[test]
    fn test_to_px_non_finite_is_zero() {
        let token = LengthToken::em(f32::MAX);
        assert!((token.to_px(0.0, 16.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_resolve_uses_axis_base() {
        let env = FixedEnvironment::new(1000.0, 800.0);
        let token = LengthToken::percent(100.0);
        assert!((token.resolve(Axis::Horizontal, &env) - 1000.0).abs() < 0.001);
        assert!((token.resolve(Axis::Vertical, &env) - 800.0).abs() < 0.001);
    }

    #[test]
    fn test_display() {
        assert_eq!(LengthToken::em(32.0).to_string(), "32em");
        assert_eq!(LengthToken::percent(12.5).to_string(), "12.5%");
        assert_eq!(LengthToken::px(640.0).to_string(), "640px");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&LengthToken::em(5.0)).unwrap();
        assert_eq!(json, "\"5em\"");
        let token: LengthToken = serde_json::from_str("\"75%\"").unwrap();
        assert_eq!(token, LengthToken::percent(75.0));
    }
}
