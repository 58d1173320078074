use serde::{Deserialize, Serialize};

/// Qualitative contribution bands, ordered from least to most involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingBand {
    #[default]
    Minimal,
    Low,
    Moderate,
    Significant,
    Major,
    Lead,
}

impl RatingBand {
    pub const ALL: [RatingBand; 6] = [
        RatingBand::Minimal,
        RatingBand::Low,
        RatingBand::Moderate,
        RatingBand::Significant,
        RatingBand::Major,
        RatingBand::Lead,
    ];

    /// Lower bound (inclusive) of the band's percentage range.
    pub fn lower_bound(&self) -> f64 {
        match self {
            Self::Minimal => 0.0,
            Self::Low => 10.0,
            Self::Moderate => 25.0,
            Self::Significant => 40.0,
            Self::Major => 55.0,
            Self::Lead => 75.0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal contributor - Limited involvement in the project",
            Self::Low => "Low contributor - Occasional commits to the project",
            Self::Moderate => "Moderate contributor - Regular involvement in development",
            Self::Significant => "Significant contributor - Major role in project development",
            Self::Major => "Major contributor - Core member of the development team",
            Self::Lead => "Lead contributor - Primary developer of the project",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_is_the_default() {
        assert_eq!(RatingBand::default(), RatingBand::Minimal);
    }

    #[test]
    fn bands_are_ordered_by_lower_bound() {
        assert!(RatingBand::ALL
            .windows(2)
            .all(|pair| pair[0] < pair[1] && pair[0].lower_bound() < pair[1].lower_bound()));
    }
}
