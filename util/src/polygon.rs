use std::{fmt, str::FromStr};

use nom::{
    bytes::complete::tag,
    character::complete::{char, multispace0, multispace1},
    combinator::all_consuming,
    error::Error,
    multi::separated_list1,
    sequence::{delimited, separated_pair, tuple},
    Finish, IResult,
};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{length::length, Length};

/// A CSS `polygon()` clip shape given as corner points relative to the
/// clipped element.
#[derive(
    Clone, Debug, Default, PartialEq, DeserializeFromStr, SerializeDisplay,
)]
pub struct Polygon(pub Vec<[Length; 2]>);

impl Polygon {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[[Length; 2]]> for Polygon {
    fn from(points: &[[Length; 2]]) -> Self {
        Polygon(points.to_vec())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "polygon(")?;
        for (i, [x, y]) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x} {y}")?;
        }
        write!(f, ")")
    }
}

fn point(i: &str) -> IResult<&str, [Length; 2]> {
    let (i, (x, y)) = separated_pair(length, multispace1, length)(i)?;
    Ok((i, [x, y]))
}

fn polygon(i: &str) -> IResult<&str, Polygon> {
    let (i, points) = delimited(
        tuple((tag("polygon("), multispace0)),
        separated_list1(tuple((multispace0, char(','), multispace0)), point),
        tuple((multispace0, char(')'))),
    )(i)?;
    Ok((i, Polygon(points)))
}

impl FromStr for Polygon {
    type Err = Error<String>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(all_consuming(polygon)(s.trim())
            .finish()
            .map_err(|e: Error<&str>| Error::new(e.input.to_string(), e.code))?
            .1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pct, px};

    #[test]
    fn display() {
        let tri = Polygon(vec![
            [pct(0.0), pct(0.0)],
            [pct(100.0), pct(0.0)],
            [pct(40.0), pct(100.0)],
        ]);
        assert_eq!(tri.to_string(), "polygon(0% 0%, 100% 0%, 40% 100%)");
        assert_eq!(Polygon::default().to_string(), "polygon()");
    }

    #[test]
    fn parse() {
        assert_eq!(
            "polygon(0% 0%, 100% 0%, 40% 100%)".parse(),
            Ok(Polygon(vec![
                [pct(0.0), pct(0.0)],
                [pct(100.0), pct(0.0)],
                [pct(40.0), pct(100.0)],
            ]))
        );
        assert_eq!(
            "polygon( 2px 0%,-3px 10px )".parse(),
            Ok(Polygon(vec![[px(2.0), pct(0.0)], [px(-3.0), px(10.0)]]))
        );

        assert!("polygon()".parse::<Polygon>().is_err());
        assert!("polygon(0% 0%".parse::<Polygon>().is_err());
        assert!("polygon(0%, 0%)".parse::<Polygon>().is_err());
        assert!("circle(50%)".parse::<Polygon>().is_err());
    }
}
