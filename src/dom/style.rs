//! Inline `style` attribute parsing.
//!
//! Only `width`, `height` and `margin-top` are understood; every other
//! declaration is carried through untouched so serialization keeps it.

use std::fmt;

/// A CSS length the measurement model can resolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Parse `250px`, `12.5%` or a bare `0`. Anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let (number, make): (&str, fn(f64) -> Length) = if let Some(n) = value.strip_suffix('%') {
            (n, Length::Percent)
        } else if let Some(n) = value.strip_suffix("px") {
            (n, Length::Px)
        } else {
            (value, Length::Px)
        };
        let parsed: f64 = number.trim_end().parse().ok()?;
        if !parsed.is_finite() {
            return None;
        }
        // Unitless lengths are only valid for zero.
        if number.len() == value.len() && parsed != 0.0 {
            return None;
        }
        Some(make(parsed))
    }

    /// Resolve against the size of the containing block.
    pub fn resolve(self, basis: f64) -> f64 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => basis * pct / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 prints as "-0"
        let tidy = |v: f64| if v == 0.0 { 0.0 } else { v };
        match self {
            Length::Px(px) => write!(f, "{}px", tidy(*px)),
            Length::Percent(pct) => write!(f, "{}%", tidy(*pct)),
        }
    }
}

/// Parsed declarations of a `style` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    width: Option<Length>,
    height: Option<Length>,
    margin_top: Option<Length>,
    other: Vec<(String, String)>,
}

impl InlineStyle {
    /// Parse a declaration list such as `height: 100px; color: red`.
    ///
    /// Malformed declarations are dropped. Sizing properties whose value is
    /// not a plain length (`auto`, `calc(..)`) are kept verbatim and measure
    /// as auto.
    pub fn parse(css: &str) -> Self {
        let mut style = Self::default();
        for declaration in css.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                continue;
            }
            let slot = match property.as_str() {
                "width" => Some(&mut style.width),
                "height" => Some(&mut style.height),
                "margin-top" => Some(&mut style.margin_top),
                _ => None,
            };
            match (slot, Length::parse(value)) {
                (Some(slot), Some(length)) => *slot = Some(length),
                _ => style.push_other(property, value.to_string()),
            }
        }
        style
    }

    pub fn width(&self) -> Option<Length> {
        self.width
    }

    pub fn height(&self) -> Option<Length> {
        self.height
    }

    pub fn margin_top(&self) -> Option<Length> {
        self.margin_top
    }

    /// Value of a declaration this type does not interpret.
    pub fn other(&self, property: &str) -> Option<&str> {
        self.other
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_width(&mut self, length: Length) {
        self.remove_other("width");
        self.width = Some(length);
    }

    pub fn set_height(&mut self, length: Length) {
        self.remove_other("height");
        self.height = Some(length);
    }

    pub fn set_margin_top(&mut self, length: Length) {
        self.remove_other("margin-top");
        self.margin_top = Some(length);
    }

    /// Serialize back to a declaration list.
    pub fn to_css(&self) -> String {
        let sizing = [
            ("width", self.width),
            ("height", self.height),
            ("margin-top", self.margin_top),
        ];
        self.other
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .chain(
                sizing
                    .iter()
                    .filter_map(|(property, length)| Some(format!("{property}: {}", (*length)?))),
            )
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn push_other(&mut self, property: String, value: String) {
        self.remove_other(&property);
        self.other.push((property, value));
    }

    fn remove_other(&mut self, property: &str) {
        self.other.retain(|(key, _)| key != property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_parse() {
        assert_eq!(Length::parse("250px"), Some(Length::Px(250.0)));
        assert_eq!(Length::parse(" 12.5% "), Some(Length::Percent(12.5)));
        assert_eq!(Length::parse("0"), Some(Length::Px(0.0)));
        assert_eq!(Length::parse("-5px"), Some(Length::Px(-5.0)));
        assert_eq!(Length::parse("12"), None);
        assert_eq!(Length::parse("auto"), None);
        assert_eq!(Length::parse("infpx"), None);
    }

    #[test]
    fn test_length_display() {
        assert_eq!(Length::Px(250.0).to_string(), "250px");
        assert_eq!(Length::Px(112.5).to_string(), "112.5px");
        assert_eq!(Length::Px(-0.0).to_string(), "0px");
        assert_eq!(Length::Percent(100.0).to_string(), "100%");
    }

    #[test]
    fn test_parse_keeps_unknown_declarations() {
        let style = InlineStyle::parse("color: red; HEIGHT: 40px;; width: auto; bogus");
        assert_eq!(style.height(), Some(Length::Px(40.0)));
        assert_eq!(style.width(), None);
        assert_eq!(style.other("color"), Some("red"));
        assert_eq!(style.other("width"), Some("auto"));
        assert_eq!(style.to_css(), "color: red; width: auto; height: 40px");
    }

    #[test]
    fn test_setter_replaces_verbatim_value() {
        let mut style = InlineStyle::parse("width: calc(100% - 2em)");
        style.set_width(Length::Percent(100.0));
        assert_eq!(style.other("width"), None);
        assert_eq!(style.to_css(), "width: 100%");
    }
}
