use std::{fmt, str::FromStr};

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, opt, recognize},
    error::Error,
    sequence::{pair, tuple},
    Finish, IResult,
};
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// A CSS-style length, either relative to the containing box or in pixels.
///
/// Negative lengths are valid and are used to hang things off the edge of
/// the container.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    PartialOrd,
    DeserializeFromStr,
    SerializeDisplay,
)]
pub enum Length {
    Percent(f32),
    Px(f32),
}

pub const fn pct(x: f32) -> Length {
    Length::Percent(x)
}

pub const fn px(x: f32) -> Length {
    Length::Px(x)
}

impl Length {
    /// Magnitude without the unit.
    pub fn value(self) -> f32 {
        match self {
            Length::Percent(x) | Length::Px(x) => x,
        }
    }

    pub fn is_negative(self) -> bool {
        self.value() < 0.0
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Px(0.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Percent(x) => write!(f, "{x}%"),
            Length::Px(x) => write!(f, "{x}px"),
        }
    }
}

pub(crate) fn number(i: &str) -> IResult<&str, f32> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f32>(),
    )(i)
}

pub(crate) fn length(i: &str) -> IResult<&str, Length> {
    let (i, x) = number(i)?;
    alt((
        map(tag("%"), move |_| Length::Percent(x)),
        map(tag("px"), move |_| Length::Px(x)),
    ))(i)
}

impl FromStr for Length {
    type Err = Error<String>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(all_consuming(length)(s.trim())
            .finish()
            .map_err(|e: Error<&str>| Error::new(e.input.to_string(), e.code))?
            .1)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Length {
    fn arbitrary(g: &mut quickcheck::Gen) -> Length {
        // Tenths keep the values in the range the catalogs actually use.
        let x = i16::arbitrary(g) as f32 / 10.0;
        if bool::arbitrary(g) {
            Length::Percent(x)
        } else {
            Length::Px(x)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn display() {
        assert_eq!(pct(15.0).to_string(), "15%");
        assert_eq!(px(18.0).to_string(), "18px");
        assert_eq!(px(-15.0).to_string(), "-15px");
        assert_eq!(px(1.5).to_string(), "1.5px");
        assert_eq!(pct(0.0).to_string(), "0%");
    }

    #[test]
    fn parse() {
        assert_eq!("15%".parse(), Ok(pct(15.0)));
        assert_eq!("-15px".parse(), Ok(px(-15.0)));
        assert_eq!("2.5px".parse(), Ok(px(2.5)));
        assert_eq!(" 40% ".parse(), Ok(pct(40.0)));

        assert!("15".parse::<Length>().is_err());
        assert!("15em".parse::<Length>().is_err());
        assert!("15%%".parse::<Length>().is_err());
        assert!("px".parse::<Length>().is_err());
        assert!(".5px".parse::<Length>().is_err());
        assert!("".parse::<Length>().is_err());
    }

    #[test]
    fn serde_as_string() {
        assert_eq!(serde_json::to_string(&px(-12.0)).unwrap(), "\"-12px\"");
        assert_eq!(
            serde_json::from_str::<Length>("\"22%\"").unwrap(),
            pct(22.0)
        );
    }

    #[quickcheck]
    fn reparse(len: Length) -> bool {
        len.to_string().parse::<Length>() == Ok(len)
    }
}
