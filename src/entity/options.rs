// src/entity/options.rs
use serde::{Deserialize, Serialize};

/// Tags offered by the entry form. Stored tags are not restricted to this list.
pub const TAG_VOCABULARY: [&str; 20] = [
    "anxiety",
    "depression",
    "stress",
    "mindfulness",
    "relaxation",
    "cognitive",
    "behavioral",
    "creative",
    "gamified",
    "educational",
    "breathing",
    "meditation",
    "journaling",
    "music",
    "art",
    "exposure",
    "acceptance",
    "gratitude",
    "sleep",
    "mood",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Icon {
    BookOpen,
    #[default]
    Brain,
    Heart,
    Music,
    Palette,
    Gamepad2,
    Target,
    Users,
    Clock,
    Star,
    Play,
    Moon,
    Zap,
    Shield,
    Award,
    Camera,
    Video,
    Headphones,
    Leaf,
    Sun,
    Wind,
    Waves,
    Coffee,
    Smile,
    Activity,
}

impl Icon {
    pub const ALL: [Icon; 25] = [
        Icon::BookOpen,
        Icon::Brain,
        Icon::Heart,
        Icon::Music,
        Icon::Palette,
        Icon::Gamepad2,
        Icon::Target,
        Icon::Users,
        Icon::Clock,
        Icon::Star,
        Icon::Play,
        Icon::Moon,
        Icon::Zap,
        Icon::Shield,
        Icon::Award,
        Icon::Camera,
        Icon::Video,
        Icon::Headphones,
        Icon::Leaf,
        Icon::Sun,
        Icon::Wind,
        Icon::Waves,
        Icon::Coffee,
        Icon::Smile,
        Icon::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::BookOpen => "BookOpen",
            Icon::Brain => "Brain",
            Icon::Heart => "Heart",
            Icon::Music => "Music",
            Icon::Palette => "Palette",
            Icon::Gamepad2 => "Gamepad2",
            Icon::Target => "Target",
            Icon::Users => "Users",
            Icon::Clock => "Clock",
            Icon::Star => "Star",
            Icon::Play => "Play",
            Icon::Moon => "Moon",
            Icon::Zap => "Zap",
            Icon::Shield => "Shield",
            Icon::Award => "Award",
            Icon::Camera => "Camera",
            Icon::Video => "Video",
            Icon::Headphones => "Headphones",
            Icon::Leaf => "Leaf",
            Icon::Sun => "Sun",
            Icon::Wind => "Wind",
            Icon::Waves => "Waves",
            Icon::Coffee => "Coffee",
            Icon::Smile => "Smile",
            Icon::Activity => "Activity",
        }
    }

    /// Human-readable label shown next to the icon picker.
    pub fn label(&self) -> &'static str {
        match self {
            Icon::BookOpen => "Book",
            Icon::Gamepad2 => "Game Controller",
            Icon::Zap => "Lightning",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .iter()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Invalid icon: {}", s))
    }
}

/// Card background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gradient {
    #[default]
    #[serde(rename = "from-purple-500 to-pink-500")]
    PurpleToPink,
    #[serde(rename = "from-blue-500 to-cyan-500")]
    BlueToCyan,
    #[serde(rename = "from-teal-500 to-green-500")]
    TealToGreen,
    #[serde(rename = "from-green-500 to-teal-500")]
    GreenToTeal,
    #[serde(rename = "from-purple-500 to-blue-500")]
    PurpleToBlue,
    #[serde(rename = "from-cyan-500 to-blue-500")]
    CyanToBlue,
    #[serde(rename = "from-pink-500 to-purple-500")]
    PinkToPurple,
    #[serde(rename = "from-orange-500 to-red-500")]
    OrangeToRed,
    #[serde(rename = "from-blue-500 to-indigo-500")]
    BlueToIndigo,
    #[serde(rename = "from-teal-500 to-cyan-500")]
    TealToCyan,
    #[serde(rename = "from-yellow-500 to-orange-500")]
    YellowToOrange,
    #[serde(rename = "from-indigo-500 to-purple-500")]
    IndigoToPurple,
}

impl Gradient {
    pub const ALL: [Gradient; 12] = [
        Gradient::PurpleToPink,
        Gradient::BlueToCyan,
        Gradient::TealToGreen,
        Gradient::GreenToTeal,
        Gradient::PurpleToBlue,
        Gradient::CyanToBlue,
        Gradient::PinkToPurple,
        Gradient::OrangeToRed,
        Gradient::BlueToIndigo,
        Gradient::TealToCyan,
        Gradient::YellowToOrange,
        Gradient::IndigoToPurple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gradient::PurpleToPink => "from-purple-500 to-pink-500",
            Gradient::BlueToCyan => "from-blue-500 to-cyan-500",
            Gradient::TealToGreen => "from-teal-500 to-green-500",
            Gradient::GreenToTeal => "from-green-500 to-teal-500",
            Gradient::PurpleToBlue => "from-purple-500 to-blue-500",
            Gradient::CyanToBlue => "from-cyan-500 to-blue-500",
            Gradient::PinkToPurple => "from-pink-500 to-purple-500",
            Gradient::OrangeToRed => "from-orange-500 to-red-500",
            Gradient::BlueToIndigo => "from-blue-500 to-indigo-500",
            Gradient::TealToCyan => "from-teal-500 to-cyan-500",
            Gradient::YellowToOrange => "from-yellow-500 to-orange-500",
            Gradient::IndigoToPurple => "from-indigo-500 to-purple-500",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gradient::PurpleToPink => "Purple to Pink",
            Gradient::BlueToCyan => "Blue to Cyan",
            Gradient::TealToGreen => "Teal to Green",
            Gradient::GreenToTeal => "Green to Teal",
            Gradient::PurpleToBlue => "Purple to Blue",
            Gradient::CyanToBlue => "Cyan to Blue",
            Gradient::PinkToPurple => "Pink to Purple",
            Gradient::OrangeToRed => "Orange to Red",
            Gradient::BlueToIndigo => "Blue to Indigo",
            Gradient::TealToCyan => "Teal to Cyan",
            Gradient::YellowToOrange => "Yellow to Orange",
            Gradient::IndigoToPurple => "Indigo to Purple",
        }
    }
}

impl std::fmt::Display for Gradient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gradient {
    type Err = String;

    /// Accepts either the class string or its label ("Blue to Cyan").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gradient::ALL
            .iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s) || g.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Invalid color: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Cognitive Therapy")]
    CognitiveTherapy,
    Mindfulness,
    #[serde(rename = "Stress Management")]
    StressManagement,
    #[serde(rename = "Positive Psychology")]
    PositivePsychology,
    Relaxation,
    #[serde(rename = "Gamified Therapy")]
    GamifiedTherapy,
    #[serde(rename = "Creative Therapy")]
    CreativeTherapy,
    #[serde(rename = "Behavioral Therapy")]
    BehavioralTherapy,
    Educational,
    #[serde(rename = "Acceptance Therapy")]
    AcceptanceTherapy,
    Monitoring,
    Wellness,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::CognitiveTherapy,
        Category::Mindfulness,
        Category::StressManagement,
        Category::PositivePsychology,
        Category::Relaxation,
        Category::GamifiedTherapy,
        Category::CreativeTherapy,
        Category::BehavioralTherapy,
        Category::Educational,
        Category::AcceptanceTherapy,
        Category::Monitoring,
        Category::Wellness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CognitiveTherapy => "Cognitive Therapy",
            Category::Mindfulness => "Mindfulness",
            Category::StressManagement => "Stress Management",
            Category::PositivePsychology => "Positive Psychology",
            Category::Relaxation => "Relaxation",
            Category::GamifiedTherapy => "Gamified Therapy",
            Category::CreativeTherapy => "Creative Therapy",
            Category::BehavioralTherapy => "Behavioral Therapy",
            Category::Educational => "Educational",
            Category::AcceptanceTherapy => "Acceptance Therapy",
            Category::Monitoring => "Monitoring",
            Category::Wellness => "Wellness",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace(['-', '_'], " ");
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(&wanted))
            .copied()
            .ok_or_else(|| format!("Invalid category: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("Invalid difficulty: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Active,
    Inactive,
}

impl EntryStatus {
    pub fn flipped(self) -> Self {
        match self {
            EntryStatus::Active => EntryStatus::Inactive,
            EntryStatus::Inactive => EntryStatus::Active,
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Active => write!(f, "active"),
            EntryStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(EntryStatus::Active),
            "inactive" => Ok(EntryStatus::Inactive),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}
