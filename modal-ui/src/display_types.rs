//! Display types for modal components
//!
//! Small typed values that replace loosely typed props (size presets,
//! widths given as either numbers or CSS strings).

use serde::{Deserialize, Serialize};

/// Size preset of the modal box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalVariant {
    Small,
    #[default]
    Default,
    Large,
}

impl ModalVariant {
    pub fn as_class(&self) -> &'static str {
        match self {
            Self::Small => "max-w-md",
            Self::Default => "max-w-2xl",
            Self::Large => "max-w-5xl",
        }
    }
}

/// Explicit width of the modal box
///
/// Converts from the legacy numeric sentinel: `-1` (or any negative number)
/// means no explicit width.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalWidth {
    /// No width style, the variant decides
    #[default]
    Unset,
    /// Width in pixels
    Px(u32),
    /// Any CSS length, e.g. `50%` or `40rem`
    Css(String),
}

impl ModalWidth {
    /// Inline style for the box, `None` when unset
    pub fn style(&self) -> Option<String> {
        match self {
            Self::Unset => None,
            Self::Px(px) => Some(format!("width: {px}px;")),
            Self::Css(value) => Some(format!("width: {value};")),
        }
    }
}

impl From<i32> for ModalWidth {
    fn from(value: i32) -> Self {
        u32::try_from(value).map(Self::Px).unwrap_or(Self::Unset)
    }
}

impl From<u32> for ModalWidth {
    fn from(value: u32) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for ModalWidth {
    fn from(value: &str) -> Self {
        Self::Css(value.to_string())
    }
}

impl From<String> for ModalWidth {
    fn from(value: String) -> Self {
        Self::Css(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_width_is_unset() {
        assert_eq!(ModalWidth::from(-1i32), ModalWidth::Unset);
        assert_eq!(ModalWidth::from(-1i32).style(), None);
    }

    #[test]
    fn test_other_negative_widths_are_unset() {
        assert_eq!(ModalWidth::from(-40i32), ModalWidth::Unset);
    }

    #[test]
    fn test_numeric_width_is_pixels() {
        assert_eq!(ModalWidth::from(400i32), ModalWidth::Px(400));
        assert_eq!(
            ModalWidth::from(400i32).style().as_deref(),
            Some("width: 400px;")
        );
    }

    #[test]
    fn test_unsigned_width_is_pixels() {
        let width: u32 = 720;
        assert_eq!(ModalWidth::from(width), ModalWidth::Px(720));
        assert_eq!(ModalWidth::from(width).style().as_deref(), Some("width: 720px;"));
    }

    #[test]
    fn test_zero_width_is_applied() {
        assert_eq!(ModalWidth::from(0i32).style().as_deref(), Some("width: 0px;"));
    }

    #[test]
    fn test_string_width_is_passed_through() {
        assert_eq!(ModalWidth::from("50%").style().as_deref(), Some("width: 50%;"));
        assert_eq!(
            ModalWidth::from("40rem".to_string()),
            ModalWidth::Css("40rem".to_string())
        );
    }

    #[test]
    fn test_variant_classes_differ() {
        assert_ne!(ModalVariant::Small.as_class(), ModalVariant::Large.as_class());
        assert_eq!(ModalVariant::default(), ModalVariant::Default);
    }

    #[test]
    fn test_variant_serializes_lowercase() {
        let json = serde_json::to_string(&ModalVariant::Large).unwrap();
        assert_eq!(json, "\"large\"");
        let parsed: ModalVariant = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(parsed, ModalVariant::Small);
    }
}
