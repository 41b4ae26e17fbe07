//! Triangle-wave oscillation of a single scalar parameter

use crate::io::error::{Result, invalid_parameter};
use num_traits::Num;
use std::fmt::Display;

/// Travel direction of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Value grows by one step per tick
    Rising,
    /// Value shrinks by one step per tick
    Falling,
}

/// Value bouncing between `low` and `high` by a fixed step
///
/// A tick that would carry the value past a limit reverses the direction first and
/// steps back instead, so the value never leaves `[low, high]`. Starting at 48 and
/// rising by 1 with `high = 50`, two ticks reach 50 and the third falls to 49.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleSweep<T> {
    value: T,
    step: T,
    low: T,
    high: T,
    direction: Direction,
}

impl<T> TriangleSweep<T>
where
    T: Num + PartialOrd + Copy + Display,
{
    /// Create a rising sweep, clamping `value` into `[low, high]`
    ///
    /// # Errors
    ///
    /// Returns an error if `low >= high` or `step` is not positive
    pub fn new(value: T, step: T, low: T, high: T) -> Result<Self> {
        if low >= high {
            return Err(invalid_parameter(
                "sweep bounds",
                &format!("[{low}, {high}]"),
                &"lower bound must be below upper bound",
            ));
        }
        if step <= T::zero() {
            return Err(invalid_parameter("sweep step", &step, &"must be positive"));
        }
        Ok(Self {
            value: clamp(value, low, high),
            step,
            low,
            high,
            direction: Direction::Rising,
        })
    }

    /// Current value
    pub const fn value(&self) -> T {
        self.value
    }

    /// Direction the next tick will try first
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Inclusive limits `(low, high)`
    pub const fn bounds(&self) -> (T, T) {
        (self.low, self.high)
    }

    /// Apply one tick
    #[must_use]
    pub fn advance(self) -> Self {
        let direction = match self.direction {
            Direction::Rising if self.value + self.step > self.high => Direction::Falling,
            Direction::Falling if self.value < self.low + self.step => Direction::Rising,
            unchanged => unchanged,
        };

        let value = match direction {
            Direction::Rising => self.value + self.step,
            // Guards unsigned underflow when the range is narrower than one step
            Direction::Falling if self.value < self.low + self.step => self.low,
            Direction::Falling => self.value - self.step,
        };

        Self {
            value: clamp(value, self.low, self.high),
            direction,
            ..self
        }
    }
}

fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}
