use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Co-pilot message category, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopilotCategory {
    /// A study hint or next-step recommendation
    Suggestion,
    /// The learner is off track and should be told so
    Warning,
    /// Positive reinforcement for progress made
    Encouragement,
}

impl CopilotCategory {
    /// All categories, in declaration order
    pub const ALL: [CopilotCategory; 3] = [
        CopilotCategory::Suggestion,
        CopilotCategory::Warning,
        CopilotCategory::Encouragement,
    ];

    /// The lowercase wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            CopilotCategory::Suggestion => "suggestion",
            CopilotCategory::Warning => "warning",
            CopilotCategory::Encouragement => "encouragement",
        }
    }
}

impl fmt::Display for CopilotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CopilotCategory {
    type Err = UnrecognizedCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suggestion" => Ok(CopilotCategory::Suggestion),
            "warning" => Ok(CopilotCategory::Warning),
            "encouragement" => Ok(CopilotCategory::Encouragement),
            other => Err(UnrecognizedCategory(other.to_string())),
        }
    }
}

/// A category value outside the closed set was supplied.
///
/// This is a caller contract violation, not a recoverable runtime
/// condition. Boundaries surface it instead of falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedCategory(pub String);

impl fmt::Display for UnrecognizedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized co-pilot category '{}' (expected one of: suggestion, warning, encouragement)",
            self.0
        )
    }
}

impl std::error::Error for UnrecognizedCategory {}
