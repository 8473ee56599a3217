use std::fmt;

use derive_more::Deref;

/// Pen stroke in a tally mark.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Stroke {
    Vertical,
    /// Line crossing out the four verticals before it.
    Diagonal,
}

/// Charm count written as tally marks in gates of five.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Deref,
)]
pub struct Tally(i32);

impl Tally {
    pub const MAX: i32 = 99;

    pub fn new(charms: i32) -> Self {
        Tally(charms.clamp(0, Self::MAX))
    }

    /// Number of complete crossed out gates of five.
    pub fn full_groups(&self) -> i32 {
        self.0 / 5
    }

    /// Loose vertical strokes after the last full group.
    pub fn remainder(&self) -> i32 {
        self.0 % 5
    }

    /// Every stroke in drawing order.
    pub fn strokes(&self) -> impl Iterator<Item = Stroke> {
        use Stroke::*;

        let gate = [Vertical, Vertical, Vertical, Vertical, Diagonal];
        (0..self.full_groups())
            .flat_map(move |_| gate)
            .chain((0..self.remainder()).map(|_| Vertical))
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stroke) in self.strokes().enumerate() {
            if i > 0 && i % 5 == 0 {
                write!(f, " ")?;
            }
            match stroke {
                Stroke::Vertical => write!(f, "|")?,
                Stroke::Diagonal => write!(f, "/")?,
            }
        }
        Ok(())
    }
}
