//! Semantic color roles and the palette that resolves them.
//!
//! Layout code never names an RGB value. Every primitive carries a [`Role`],
//! and the active [`Theme`] turns it into a color when the deck is rendered,
//! so swapping the palette never touches slide code.

use crate::common::RGBColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named semantic color.
///
/// Serialized in kebab-case (`accent-primary`, `text-muted`, ...), which is
/// also the key format of the `palette` section in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Full-bleed slide background
    Background,
    /// Titles and primary highlights
    AccentPrimary,
    /// Secondary accent, first architecture tier
    AccentSecondary,
    /// Event line, closing line and roadmap heading
    Highlight,
    Success,
    Danger,
    /// Body text on dark surfaces
    TextPrimary,
    /// Subtitles and descriptions
    TextMuted,
    /// Second architecture tier
    Info,
    /// Third architecture tier
    Growth,
    /// Feature card fill
    Surface,
    SurfaceBorder,
    /// Title-slide tag pills
    PillSurface,
    PillBorder,
    /// Tech-stack chips on the architecture slide
    ChipSurface,
    ChipBorder,
    /// Problem panel fill
    DangerSurface,
    /// Solution panel fill
    SuccessSurface,
    /// Closing call-to-action box fill
    CalloutSurface,
}

impl Role {
    pub const COUNT: usize = 19;

    /// Every role, in declaration order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Background,
        Role::AccentPrimary,
        Role::AccentSecondary,
        Role::Highlight,
        Role::Success,
        Role::Danger,
        Role::TextPrimary,
        Role::TextMuted,
        Role::Info,
        Role::Growth,
        Role::Surface,
        Role::SurfaceBorder,
        Role::PillSurface,
        Role::PillBorder,
        Role::ChipSurface,
        Role::ChipBorder,
        Role::DangerSurface,
        Role::SuccessSurface,
        Role::CalloutSurface,
    ];

    /// The kebab-case name used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::AccentPrimary => "accent-primary",
            Self::AccentSecondary => "accent-secondary",
            Self::Highlight => "highlight",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::TextPrimary => "text-primary",
            Self::TextMuted => "text-muted",
            Self::Info => "info",
            Self::Growth => "growth",
            Self::Surface => "surface",
            Self::SurfaceBorder => "surface-border",
            Self::PillSurface => "pill-surface",
            Self::PillBorder => "pill-border",
            Self::ChipSurface => "chip-surface",
            Self::ChipBorder => "chip-border",
            Self::DangerSurface => "danger-surface",
            Self::SuccessSurface => "success-surface",
            Self::CalloutSurface => "callout-surface",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable role-to-color mapping.
///
/// # Examples
///
/// ```rust
/// use deckwright::common::RGBColor;
/// use deckwright::theme::{Role, Theme};
///
/// let theme = Theme::showcase().with_overrides([(Role::AccentPrimary, RGBColor::new(255, 0, 0))]);
/// assert_eq!(theme.color(Role::AccentPrimary).to_hex(), "FF0000");
/// assert_eq!(theme.color(Role::Background).to_hex(), "1A1A2E");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    colors: [RGBColor; Role::COUNT],
}

impl Theme {
    /// The dark showcase palette.
    pub fn showcase() -> Self {
        let mut colors = [RGBColor::new(0, 0, 0); Role::COUNT];
        for role in Role::ALL {
            colors[role.index()] = match role {
                Role::Background => RGBColor::new(26, 26, 46),
                Role::AccentPrimary => RGBColor::new(0, 212, 255),
                Role::AccentSecondary => RGBColor::new(124, 58, 237),
                Role::Highlight => RGBColor::new(244, 114, 182),
                Role::Success => RGBColor::new(34, 197, 94),
                Role::Danger => RGBColor::new(239, 68, 68),
                Role::TextPrimary => RGBColor::new(255, 255, 255),
                Role::TextMuted => RGBColor::new(148, 163, 184),
                Role::Info => RGBColor::new(8, 145, 178),
                Role::Growth => RGBColor::new(5, 150, 105),
                Role::Surface => RGBColor::new(35, 35, 55),
                Role::SurfaceBorder => RGBColor::new(60, 60, 90),
                Role::PillSurface => RGBColor::new(40, 40, 70),
                Role::PillBorder => RGBColor::new(80, 80, 120),
                Role::ChipSurface => RGBColor::new(40, 40, 60),
                Role::ChipBorder => RGBColor::new(80, 80, 100),
                Role::DangerSurface => RGBColor::new(60, 30, 30),
                Role::SuccessSurface => RGBColor::new(20, 50, 30),
                Role::CalloutSurface => RGBColor::new(30, 40, 60),
            };
        }
        Self { colors }
    }

    /// Resolve a role to its color.
    #[inline]
    pub fn color(&self, role: Role) -> RGBColor {
        self.colors[role.index()]
    }

    /// Return a copy of this theme with some roles re-colored.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (Role, RGBColor)>,
    {
        for (role, color) in overrides {
            self.colors[role.index()] = color;
        }
        self
    }

    /// Iterate `(role, color)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, RGBColor)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.color(role)))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::showcase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lookup_is_stable() {
        let theme = Theme::showcase();
        for role in Role::ALL {
            assert_eq!(theme.color(role), theme.color(role));
        }
    }

    #[test]
    fn test_role_indices_match_declaration_order() {
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_overrides_touch_only_named_roles() {
        let base = Theme::showcase();
        let red = RGBColor::new(255, 0, 0);
        let themed = base.clone().with_overrides([(Role::Danger, red)]);

        assert_eq!(themed.color(Role::Danger), red);
        for role in Role::ALL.into_iter().filter(|r| *r != Role::Danger) {
            assert_eq!(themed.color(role), base.color(role));
        }
    }

    #[test]
    fn test_role_names_match_serde() {
        for role in Role::ALL {
            let parsed: Role = serde_saphyr::from_str(role.as_str()).unwrap();
            assert_eq!(parsed, role);
        }
    }
}
