//! "width, height" size pair parsing

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Axis, LengthToken};
use crate::env::Environment;
use crate::math::Size;

/// Width used when neither the input nor its fallback names one
pub const HARD_DEFAULT_WIDTH: LengthToken = LengthToken::em(8.0);

/// Height used when neither the input nor its fallback names one
pub const HARD_DEFAULT_HEIGHT: LengthToken = LengthToken::em(20.0);

/// A width/height pair of unit-tagged lengths
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizePair {
    pub width: LengthToken,
    pub height: LengthToken,
}

impl Default for SizePair {
    fn default() -> Self {
        Self::new(HARD_DEFAULT_WIDTH, HARD_DEFAULT_HEIGHT)
    }
}

impl SizePair {
    /// Create a pair
    #[inline]
    pub const fn new(width: LengthToken, height: LengthToken) -> Self {
        Self { width, height }
    }

    /// Pair of pixel tokens
    #[inline]
    pub fn from_px(size: Size) -> Self {
        Self::new(LengthToken::px(size.width), LengthToken::px(size.height))
    }

    /// Parse `raw` as `"W, H"` (comma and/or whitespace separated).
    ///
    /// Missing parts are taken from `fallback`, parsed the same way; parts
    /// the fallback lacks too get [`HARD_DEFAULT_WIDTH`] /
    /// [`HARD_DEFAULT_HEIGHT`]. The result is always complete.
    pub fn parse(raw: Option<&str>, fallback: &str) -> Self {
        let (fb_width, fb_height) = split_pair(fallback);
        let fallback = Self::new(
            fb_width.map(LengthToken::parse).unwrap_or(HARD_DEFAULT_WIDTH),
            fb_height.map(LengthToken::parse).unwrap_or(HARD_DEFAULT_HEIGHT),
        );

        let (width, height) = raw.map(split_pair).unwrap_or((None, None));
        Self::new(
            width.map(LengthToken::parse).unwrap_or(fallback.width),
            height.map(LengthToken::parse).unwrap_or(fallback.height),
        )
    }

    /// Resolve both lengths to pixels against the environment
    pub fn to_px(&self, env: &impl Environment) -> Size {
        Size::new(
            self.width.resolve(Axis::Horizontal, env),
            self.height.resolve(Axis::Vertical, env),
        )
    }
}

impl fmt::Display for SizePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.width, self.height)
    }
}

/// First two non-empty comma/whitespace separated parts
fn split_pair(raw: &str) -> (Option<&str>, Option<&str>) {
    let mut parts = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    (parts.next(), parts.next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FixedEnvironment;

    #[test]
    fn test_parse_full_pair() {
        let pair = SizePair::parse(Some("32em, 20em"), "1px, 1px");
        assert_eq!(pair.width, LengthToken::em(32.0));
        assert_eq!(pair.height, LengthToken::em(20.0));
    }

    #[test]
    fn test_parse_separators() {
        let expected = SizePair::new(LengthToken::px(300.0), LengthToken::percent(50.0));
        assert_eq!(SizePair::parse(Some("300px,50%"), ""), expected);
        assert_eq!(SizePair::parse(Some("300px 50%"), ""), expected);
        assert_eq!(SizePair::parse(Some("  300px ,  50% ,"), ""), expected);
        assert_eq!(SizePair::parse(Some("300px\t50%\n"), ""), expected);
    }

    #[test]
    fn test_parse_extra_tokens_ignored() {
        let pair = SizePair::parse(Some("1em, 2em, 3em"), "");
        assert_eq!(pair, SizePair::new(LengthToken::em(1.0), LengthToken::em(2.0)));
    }

    #[test]
    fn test_parse_missing_height_uses_fallback() {
        let pair = SizePair::parse(Some("12em"), "10em, 5em");
        assert_eq!(pair.width, LengthToken::em(12.0));
        assert_eq!(pair.height, LengthToken::em(5.0));
    }

    #[test]
    fn test_parse_absent_or_blank_uses_fallback() {
        let expected = SizePair::new(LengthToken::percent(100.0), LengthToken::percent(100.0));
        assert_eq!(SizePair::parse(None, "100%, 100%"), expected);
        assert_eq!(SizePair::parse(Some(""), "100%, 100%"), expected);
        assert_eq!(SizePair::parse(Some(" , "), "100%, 100%"), expected);
    }

    #[test]
    fn test_parse_incomplete_fallback_uses_hard_defaults() {
        assert_eq!(SizePair::parse(None, ""), SizePair::default());
        let pair = SizePair::parse(None, "5em");
        assert_eq!(pair.width, LengthToken::em(5.0));
        assert_eq!(pair.height, HARD_DEFAULT_HEIGHT);
    }

    #[test]
    fn test_format_round_trip() {
        let pair = SizePair::parse(Some("12.5em 40%"), "");
        assert_eq!(pair.to_string(), "12.5em, 40%");
        assert_eq!(SizePair::parse(Some(&pair.to_string()), "1px, 1px"), pair);

        let overflow = SizePair::parse(Some("1e39em, 5em"), "");
        assert_eq!(overflow.width, LengthToken::em(0.0));
        assert_eq!(SizePair::parse(Some(&overflow.to_string()), ""), overflow);
    }

    #[test]
    fn test_to_px() {
        let env = FixedEnvironment::new(1000.0, 800.0);
        let size = SizePair::parse(Some("10em, 50%"), "").to_px(&env);
        assert!((size.width - 160.0).abs() < 0.001);
        assert!((size.height - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_from_px() {
        let pair = SizePair::from_px(Size::new(640.0, 210.0));
        assert_eq!(pair.to_string(), "640px, 210px");
    }
}
