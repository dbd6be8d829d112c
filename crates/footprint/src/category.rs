use serde::{Deserialize, Serialize};

/// The four lifestyle categories. Also the order of the tracker steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Home,
    Food,
    Shopping,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Home,
        Category::Food,
        Category::Shopping,
    ];

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Transport => 0,
            Category::Home => 1,
            Category::Food => 2,
            Category::Shopping => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    /// Label used in reports and exports.
    pub fn label(self) -> &'static str {
        match self {
            Category::Transport => "Transportation",
            Category::Home => "Home Energy",
            Category::Food => "Food & Diet",
            Category::Shopping => "Shopping",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Transport => "Track your daily commute and travel habits",
            Category::Home => "Monitor your household energy consumption",
            Category::Food => "Calculate your dietary carbon footprint",
            Category::Shopping => "Track consumption and purchasing habits",
        }
    }
}
