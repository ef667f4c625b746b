use models::Percentage;

/// Current and maximum health. The current value never leaves `0..=max`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Health(pub i64, pub u64);

impl Health {
    pub fn full(max: u64) -> Self {
        Self(max as i64, max)
    }

    pub fn max(&self) -> u64 {
        self.1
    }

    pub fn current(&self) -> i64 {
        self.0
    }

    pub fn is_depleted(&self) -> bool {
        self.0 <= 0
    }

    pub fn fraction(&self) -> Percentage {
        Percentage::from_ratio(self.0.max(0) as u64, self.1)
    }

    fn clamp(&self, value: i64) -> i64 {
        value.clamp(0, self.1 as i64)
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Health ({}/{})", self.current(), self.max())
    }
}

impl std::ops::Add<i64> for Health {
    type Output = Self;

    fn add(self, other: i64) -> Self::Output {
        Self(self.clamp(self.0 + other), self.1)
    }
}

impl std::ops::Sub<i64> for Health {
    type Output = Self;

    fn sub(self, other: i64) -> Self::Output {
        Self(self.clamp(self.0 - other), self.1)
    }
}

impl std::ops::AddAssign<i64> for Health {
    fn add_assign(&mut self, other: i64) {
        self.0 = self.clamp(self.0 + other);
    }
}

impl std::ops::SubAssign<i64> for Health {
    fn sub_assign(&mut self, other: i64) {
        self.0 = self.clamp(self.0 - other);
    }
}
