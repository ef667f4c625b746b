#[derive(Clone, Debug, Copy, PartialOrd, PartialEq)]
pub struct Percentage(pub f64);

impl Percentage {
    /// Ratio of `part` to `whole`; an empty whole counts as depleted.
    pub fn from_ratio(part: u64, whole: u64) -> Self {
        if whole == 0 {
            return Self(0.0);
        }
        Self(part as f64 / whole as f64)
    }

    pub fn as_fraction(&self) -> f64 {
        self.0
    }

    pub fn as_percentage(&self) -> f64 {
        self.0 * 100.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.as_percentage())
    }
}
