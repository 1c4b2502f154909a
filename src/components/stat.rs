//! Base value with a percentage bonus.
//!
//! Used for speeds: `value = base * (1 + bonus / 100)`. Bonuses stack
//! additively, so two +25% bonuses give +50%.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stat {
    base: f64,
    /// Percent, e.g. `25.0` for +25%.
    bonus: f64,
}

impl Stat {
    pub fn new(base: f64) -> Self {
        Self { base, bonus: 0.0 }
    }

    pub fn with_bonus(mut self, bonus: f64) -> Self {
        self.bonus = bonus;
        self
    }

    /// Effective value, never negative.
    pub fn value(&self) -> f64 {
        (self.base * (1.0 + self.bonus / 100.0)).max(0.0)
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn set_base(&mut self, base: f64) {
        self.base = base;
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    pub fn add_bonus(&mut self, bonus: f64) {
        self.bonus += bonus;
    }

    pub fn remove_bonus(&mut self, bonus: f64) {
        self.bonus -= bonus;
    }

    pub fn set_bonus(&mut self, bonus: f64) {
        self.bonus = bonus;
    }

    pub fn reset_bonus(&mut self) {
        self.bonus = 0.0;
    }
}

impl From<f64> for Stat {
    fn from(base: f64) -> Self {
        Self::new(base)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bonus == 0.0 {
            write!(f, "{:.2}", self.value())
        } else {
            write!(f, "{:.2} ({:+}%)", self.value(), self.bonus)
        }
    }
}
