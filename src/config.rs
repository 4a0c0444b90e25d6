use crate::classifier::category::Category;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CategoryGuidance {
    pub category: Category,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub classify_timeout: Duration,
    pub logger_timezone: chrono::FixedOffset,
    pub display: DisplayKind,
    pub guidance: Vec<CategoryGuidance>,
}

impl Config {
    pub fn guidance_for(&self, category: Category) -> Option<&str> {
        self.guidance
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.description.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            classify_timeout: Duration::from_secs(10),
            logger_timezone: mountain_standard_time(),
            display: DisplayKind::Console,
            guidance: default_guidance(),
        }
    }
}

fn default_guidance() -> Vec<CategoryGuidance> {
    let entries = [
        (
            Category::Cardboard,
            "Recyclable. Flatten boxes before disposal.",
        ),
        (
            Category::Glass,
            "100% recyclable, endlessly and without loss in quality.",
        ),
        (
            Category::Metal,
            "Cans and foil recycle to save energy and resources.",
        ),
        (
            Category::Paper,
            "Recyclable when clean and free of food residue.",
        ),
        (
            Category::Plastic,
            "Clean before recycling. Check local guidelines.",
        ),
        (
            Category::Trash,
            "Not recyclable. Dispose of with general waste.",
        ),
    ];

    entries
        .iter()
        .map(|(category, description)| CategoryGuidance {
            category: *category,
            description: description.to_string(),
        })
        .collect()
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
