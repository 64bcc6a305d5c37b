//! Export kinds.

use serde::{Deserialize, Serialize};

// ============================================================================
// Export Kind
// ============================================================================

/// The export flavors the Cronometer export endpoint understands.
///
/// The variant selects the `generate` query parameter of the export call
/// and determines the shape of the returned CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// Individual food servings with the full nutrient column set.
    Servings,
    /// Per-day nutrition summaries.
    DailyNutrition,
    /// Logged exercises.
    Exercises,
    /// Logged biometric measurements.
    Biometrics,
    /// Free-form notes.
    Notes,
}

impl ExportKind {
    /// Returns the `generate` query parameter keyword for this kind.
    ///
    /// These keywords are fixed by the service and observed from the web
    /// app, not published anywhere.
    pub fn generate_keyword(self) -> &'static str {
        match self {
            Self::Servings => "servings",
            Self::DailyNutrition => "dailySummary",
            Self::Exercises => "exercises",
            Self::Biometrics => "biometrics",
            Self::Notes => "notes",
        }
    }

    /// Returns all export kinds.
    pub fn all() -> &'static [ExportKind] {
        &[
            Self::Servings,
            Self::DailyNutrition,
            Self::Exercises,
            Self::Biometrics,
            Self::Notes,
        ]
    }
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.generate_keyword())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_keywords() {
        assert_eq!(ExportKind::Servings.generate_keyword(), "servings");
        assert_eq!(ExportKind::DailyNutrition.generate_keyword(), "dailySummary");
        assert_eq!(ExportKind::Exercises.generate_keyword(), "exercises");
        assert_eq!(ExportKind::Biometrics.generate_keyword(), "biometrics");
        assert_eq!(ExportKind::Notes.generate_keyword(), "notes");
    }

    #[test]
    fn test_all_kinds_have_distinct_keywords() {
        let kinds = ExportKind::all();
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.generate_keyword(), b.generate_keyword());
            }
        }
    }
}
