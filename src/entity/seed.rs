// src/entity/seed.rs
use super::{CatalogEntry, Category, Difficulty, EntryStatus, Gradient, Icon, ROUTE_PREFIX};

/// Number of built-in entries.
pub const SEED_COUNT: usize = 10;

const SEED_DATE: &str = "2024-01-01";

struct SeedSpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: Icon,
    color: Gradient,
    duration: &'static str,
    difficulty: Difficulty,
    sessions: u32,
    category: Category,
    tags: &'static [&'static str],
    module_id: &'static str,
}

const SEEDS: [SeedSpec; SEED_COUNT] = [
    SeedSpec {
        id: "1",
        title: "CBT Thought Records",
        description: "Cognitive Behavioral Therapy techniques with guided prompts",
        icon: Icon::BookOpen,
        color: Gradient::PurpleToPink,
        duration: "15-20 min",
        difficulty: Difficulty::Beginner,
        sessions: 12,
        category: Category::CognitiveTherapy,
        tags: &["cognitive", "journaling", "anxiety", "depression"],
        module_id: "cbt",
    },
    SeedSpec {
        id: "2",
        title: "Mindfulness & Breathing",
        description: "Mindfulness and relaxation exercises with audio guidance",
        icon: Icon::Brain,
        color: Gradient::BlueToCyan,
        duration: "10-30 min",
        difficulty: Difficulty::Beginner,
        sessions: 15,
        category: Category::Mindfulness,
        tags: &["mindfulness", "breathing", "meditation", "relaxation"],
        module_id: "mindfulness",
    },
    SeedSpec {
        id: "3",
        title: "Stress Management",
        description: "Learn effective coping strategies for daily stress",
        icon: Icon::Target,
        color: Gradient::TealToGreen,
        duration: "15-20 min",
        difficulty: Difficulty::Beginner,
        sessions: 8,
        category: Category::StressManagement,
        tags: &["stress", "coping", "relaxation"],
        module_id: "stress",
    },
    SeedSpec {
        id: "4",
        title: "Gratitude Journal",
        description: "Daily gratitude practice with streak tracking",
        icon: Icon::Heart,
        color: Gradient::GreenToTeal,
        duration: "5-10 min",
        difficulty: Difficulty::Beginner,
        sessions: 21,
        category: Category::PositivePsychology,
        tags: &["gratitude", "journaling", "positive"],
        module_id: "gratitude",
    },
    SeedSpec {
        id: "5",
        title: "Relaxation Music",
        description: "Curated audio library for relaxation and focus",
        icon: Icon::Music,
        color: Gradient::PurpleToBlue,
        duration: "Variable",
        difficulty: Difficulty::Beginner,
        sessions: 20,
        category: Category::Relaxation,
        tags: &["music", "relaxation", "audio"],
        module_id: "music",
    },
    SeedSpec {
        id: "6",
        title: "Tetris Therapy",
        description: "Gamified stress relief and cognitive enhancement",
        icon: Icon::Gamepad2,
        color: Gradient::CyanToBlue,
        duration: "10-15 min",
        difficulty: Difficulty::Beginner,
        sessions: 12,
        category: Category::GamifiedTherapy,
        tags: &["gamified", "stress", "cognitive"],
        module_id: "tetris",
    },
    SeedSpec {
        id: "7",
        title: "Art & Color Therapy",
        description: "Creative expression through digital art and coloring",
        icon: Icon::Palette,
        color: Gradient::PinkToPurple,
        duration: "20-30 min",
        difficulty: Difficulty::Beginner,
        sessions: 10,
        category: Category::CreativeTherapy,
        tags: &["art", "creative", "expression"],
        module_id: "art",
    },
    SeedSpec {
        id: "8",
        title: "Exposure Therapy",
        description: "Gradual exposure techniques for anxiety and phobias",
        icon: Icon::Target,
        color: Gradient::OrangeToRed,
        duration: "30-45 min",
        difficulty: Difficulty::Advanced,
        sessions: 12,
        category: Category::BehavioralTherapy,
        tags: &["exposure", "anxiety", "phobias"],
        module_id: "exposure",
    },
    SeedSpec {
        id: "9",
        title: "Video Therapy",
        description: "Guided video sessions with therapeutic content",
        icon: Icon::Play,
        color: Gradient::BlueToIndigo,
        duration: "20-40 min",
        difficulty: Difficulty::Intermediate,
        sessions: 16,
        category: Category::Educational,
        tags: &["video", "educational", "guided"],
        module_id: "video",
    },
    SeedSpec {
        id: "10",
        title: "Acceptance & Commitment Therapy",
        description: "ACT principles for psychological flexibility",
        icon: Icon::Star,
        color: Gradient::TealToCyan,
        duration: "25-35 min",
        difficulty: Difficulty::Intermediate,
        sessions: 14,
        category: Category::AcceptanceTherapy,
        tags: &["acceptance", "commitment", "flexibility"],
        module_id: "act",
    },
];

/// The built-in catalog, in display order. Never written to storage.
pub fn seed_entries() -> Vec<CatalogEntry> {
    SEEDS
        .iter()
        .map(|s| CatalogEntry {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            icon: s.icon,
            color: s.color,
            duration: s.duration.to_string(),
            difficulty: s.difficulty,
            sessions: s.sessions,
            category: s.category,
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
            status: EntryStatus::Active,
            route: format!("{}/{}", ROUTE_PREFIX, s.module_id),
            module_id: s.module_id.to_string(),
            created_at: SEED_DATE.to_string(),
            updated_at: SEED_DATE.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_one_through_ten() {
        let seeds = seed_entries();
        assert_eq!(seeds.len(), SEED_COUNT);
        for (i, entry) in seeds.iter().enumerate() {
            assert_eq!(entry.id, (i + 1).to_string());
            assert!(!entry.is_custom());
        }
    }

    #[test]
    fn test_seed_entries_are_valid() {
        for entry in seed_entries() {
            assert!(entry.sessions > 0);
            assert!(!entry.title.trim().is_empty());
            assert!(entry.route.starts_with("/therapy-modules/"));
            assert!(entry.is_active());
        }
    }
}
