use crate::enums::rating_band::RatingBand;

impl RatingBand {
    /// Band for a contribution percentage. Bands are closed-open, so a
    /// boundary value belongs to the upper band. Values below zero and NaN
    /// fall in the lowest band, values above 100 in the highest.
    pub fn from_percentage(percentage: f64) -> Self {
        RatingBand::ALL
            .iter()
            .rev()
            .copied()
            .find(|band| percentage >= band.lower_bound())
            .unwrap_or(RatingBand::Minimal)
    }
}

pub fn classify(percentage: f64) -> &'static str {
    RatingBand::from_percentage(percentage).description()
}
