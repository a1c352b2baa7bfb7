use serde::{Deserialize, Serialize};

/// A catalog destination. Read-only to the recommendation subsystem;
/// the descriptive fields below are exactly what feature extraction consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// UUID v4 identifier.
    pub id: String,
    pub name: String,
    pub state: String,
    /// City or region within the state.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// e.g. "Heritage", "Nature", "Spiritual".
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Nearby hotels/stays. Doubles as the recommendation highlight source.
    #[serde(default)]
    pub accommodations: Vec<String>,
    /// Local foods to try.
    #[serde(default)]
    pub foods: Vec<String>,
    /// Transport options.
    #[serde(default)]
    pub transport: Vec<String>,
}

impl Place {
    /// "Name, State" display string used on recommendation cards.
    pub fn destination(&self) -> String {
        format!("{}, {}", self.name, self.state)
    }
}
