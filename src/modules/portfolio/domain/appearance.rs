//! Icon and accent keys stored in the document, resolved to concrete
//! renderable values. Unknown keys fall back to a per-kind default.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Cloud,
    Code,
    Database,
    Wrench,
}

impl SkillIcon {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Cloud" => Some(Self::Cloud),
            "Code" => Some(Self::Code),
            "Database" => Some(Self::Database),
            "Wrench" => Some(Self::Wrench),
            _ => None,
        }
    }

    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Self::Code)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Cloud => "☁",
            Self::Code => "⌨",
            Self::Database => "⛁",
            Self::Wrench => "🔧",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementIcon {
    Trophy,
    Award,
    Medal,
    Star,
    Target,
    Crown,
}

impl AchievementIcon {
    pub const ALL: [AchievementIcon; 6] = [
        Self::Trophy,
        Self::Award,
        Self::Medal,
        Self::Star,
        Self::Target,
        Self::Crown,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.key() == key)
    }

    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Self::Trophy)
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Trophy => "Trophy",
            Self::Award => "Award",
            Self::Medal => "Medal",
            Self::Star => "Star",
            Self::Target => "Target",
            Self::Crown => "Crown",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Trophy => "🏆",
            Self::Award => "🎖",
            Self::Medal => "🏅",
            Self::Star => "★",
            Self::Target => "◎",
            Self::Crown => "♛",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentColor {
    Gold,
    Blue,
    Green,
    Purple,
    Red,
    Orange,
    Gray,
}

impl AccentColor {
    pub const ALL: [AccentColor; 7] = [
        Self::Gold,
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Red,
        Self::Orange,
        Self::Gray,
    ];

    /// Stored key, kept compatible with documents exported by earlier versions.
    pub fn key(self) -> &'static str {
        match self {
            Self::Gold => "from-yellow-400 to-orange-500",
            Self::Blue => "from-blue-400 to-blue-600",
            Self::Green => "from-green-400 to-emerald-600",
            Self::Purple => "from-purple-400 to-purple-600",
            Self::Red => "from-red-400 to-red-600",
            Self::Orange => "from-orange-400 to-red-600",
            Self::Gray => "from-gray-400 to-gray-600",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.key() == key)
    }

    pub fn resolve_or(key: &str, fallback: AccentColor) -> Self {
        Self::from_key(key).unwrap_or(fallback)
    }

    pub fn css_gradient(self) -> &'static str {
        match self {
            Self::Gold => "linear-gradient(135deg, #facc15, #f97316)",
            Self::Blue => "linear-gradient(135deg, #60a5fa, #2563eb)",
            Self::Green => "linear-gradient(135deg, #4ade80, #059669)",
            Self::Purple => "linear-gradient(135deg, #c084fc, #9333ea)",
            Self::Red => "linear-gradient(135deg, #f87171, #dc2626)",
            Self::Orange => "linear-gradient(135deg, #fb923c, #dc2626)",
            Self::Gray => "linear-gradient(135deg, #9ca3af, #4b5563)",
        }
    }
}
