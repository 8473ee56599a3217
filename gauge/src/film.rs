use std::fmt;

use derive_more::Deref;

/// Two digit mechanical counter showing the film shots left in a camera.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Deref,
)]
pub struct FilmCounter(i32);

impl FilmCounter {
    pub const MAX: i32 = 99;

    pub fn new(shots: i32) -> Self {
        FilmCounter(shots.clamp(0, Self::MAX))
    }
}

impl fmt::Display for FilmCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn display() {
        assert_eq!(FilmCounter::new(5).to_string(), "05");
        assert_eq!(FilmCounter::new(-5).to_string(), "00");
        assert_eq!(FilmCounter::new(150).to_string(), "99");
        assert_eq!(FilmCounter::new(42).to_string(), "42");
        assert_eq!(FilmCounter::default().to_string(), "00");
    }

    #[quickcheck]
    fn always_two_digits(shots: i32) -> bool {
        let counter = FilmCounter::new(shots);
        counter.to_string().len() == 2 && (0..=99).contains(&*counter)
    }
}
