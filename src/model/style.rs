//! Cursor catalog offered by the menu bar.

use super::geometry::Size;

/// Entries of the cursor menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorStyle {
    Default,
    Heart,
    Star,
    Rocket,
    Moon,
    Diamond,
    Wand,
    Feather,
    Coffee,
    IceCream,
    Banana,
    CustomEmoji,
}

impl CursorStyle {
    /// All styles in menu order.
    pub const ALL: [CursorStyle; 12] = [
        CursorStyle::Default,
        CursorStyle::Heart,
        CursorStyle::Star,
        CursorStyle::Rocket,
        CursorStyle::Moon,
        CursorStyle::Diamond,
        CursorStyle::Wand,
        CursorStyle::Feather,
        CursorStyle::Coffee,
        CursorStyle::IceCream,
        CursorStyle::Banana,
        CursorStyle::CustomEmoji,
    ];

    /// Title shown in the menu.
    pub fn display_name(self) -> &'static str {
        match self {
            CursorStyle::Default => "Default",
            CursorStyle::Heart => "Heart",
            CursorStyle::Star => "Star",
            CursorStyle::Rocket => "Rocket",
            CursorStyle::Moon => "Moon",
            CursorStyle::Diamond => "Diamond",
            CursorStyle::Wand => "Wand",
            CursorStyle::Feather => "Feather",
            CursorStyle::Coffee => "Coffee",
            CursorStyle::IceCream => "Ice Cream",
            CursorStyle::Banana => "Banana",
            CursorStyle::CustomEmoji => "Custom Emoji...",
        }
    }

    /// Vector asset backing this style, if any.
    pub fn asset_name(self) -> Option<&'static str> {
        match self {
            CursorStyle::Heart => Some("cursor-heart"),
            CursorStyle::Star => Some("cursor-star"),
            CursorStyle::Rocket => Some("cursor-rocket"),
            CursorStyle::Moon => Some("cursor-moon"),
            CursorStyle::Diamond => Some("cursor-diamond"),
            CursorStyle::Wand => Some("cursor-wand"),
            CursorStyle::Feather => Some("cursor-feather"),
            CursorStyle::Coffee => Some("cursor-coffee"),
            CursorStyle::IceCream => Some("cursor-icecream"),
            CursorStyle::Banana => Some("cursor-banana"),
            CursorStyle::Default | CursorStyle::CustomEmoji => None,
        }
    }

    /// Position in [`CursorStyle::ALL`], used as the menu item tag.
    pub fn tag(self) -> isize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0) as isize
    }

    pub fn from_tag(tag: isize) -> Option<CursorStyle> {
        usize::try_from(tag).ok().and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Cursor edge lengths offered in the size submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CursorSize {
    pub const ALL: [CursorSize; 3] = [CursorSize::Small, CursorSize::Medium, CursorSize::Large];

    /// Edge length in points.
    pub fn points(self) -> u32 {
        match self {
            CursorSize::Small => 24,
            CursorSize::Medium => 32,
            CursorSize::Large => 48,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CursorSize::Small => "Small",
            CursorSize::Medium => "Medium",
            CursorSize::Large => "Large",
        }
    }

    /// Square raster size.
    pub fn size(self) -> Size {
        Size::square(self.points())
    }

    /// Parse a stored preference. Unknown or non-positive values fall back to
    /// the default.
    pub fn from_points(value: f64) -> CursorSize {
        Self::ALL
            .into_iter()
            .find(|s| (s.points() as f64 - value).abs() < 0.5)
            .unwrap_or_default()
    }
}
