/// Salary range with at least one usable bound.
/// Zero and negative bounds are treated as not given, like the sources report them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryRange {
    From(f64),
    UpTo(f64),
    Between(f64, f64),
}

impl SalaryRange {
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Option<Self> {
        let lower = lower.filter(|bound| *bound > 0.0);
        let upper = upper.filter(|bound| *bound > 0.0);
        match (lower, upper) {
            (None, None) => None,
            (None, Some(upper)) => Some(Self::UpTo(upper)),
            (Some(lower), None) => Some(Self::From(lower)),
            (Some(lower), Some(upper)) => Some(Self::Between(lower, upper)),
        }
    }

    /// Point estimate of the range: an open upper end adds 20%, an open lower end takes 20% off
    pub fn estimate(&self) -> f64 {
        match *self {
            Self::UpTo(upper) => upper * 0.8,
            Self::From(lower) => lower * 1.2,
            Self::Between(lower, upper) => (lower + upper) / 2.0,
        }
    }
}

pub fn predict_salary(lower: Option<f64>, upper: Option<f64>) -> Option<f64> {
    SalaryRange::new(lower, upper).map(|range| range.estimate())
}
