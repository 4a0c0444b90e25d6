use std::fmt;

/// The closed set of waste categories the app can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cardboard,
    Glass,
    Metal,
    Paper,
    Plastic,
    Trash,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cardboard,
        Category::Glass,
        Category::Metal,
        Category::Paper,
        Category::Plastic,
        Category::Trash,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cardboard => "cardboard",
            Category::Glass => "glass",
            Category::Metal => "metal",
            Category::Paper => "paper",
            Category::Plastic => "plastic",
            Category::Trash => "trash",
        }
    }

    /// Label with the first letter capitalized, for display lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Cardboard => "Cardboard",
            Category::Glass => "Glass",
            Category::Metal => "Metal",
            Category::Paper => "Paper",
            Category::Plastic => "Plastic",
            Category::Trash => "Trash",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
