use std::fmt::Write;

use serde::{Deserialize, Serialize};
use util::{Length, Polygon};

use crate::DamageKind;

/// Vertical anchor of an overlay element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Vertical {
    Top(Length),
    Bottom(Length),
}

/// Horizontal anchor of an overlay element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Horizontal {
    Left(Length),
    Right(Length),
}

/// Where an element is pinned inside its container.
///
/// An element can be anchored along each axis at most once. A missing anchor
/// is not the same as a zero offset, it leaves placement along that axis to
/// the renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Anchors", into = "Anchors")]
pub struct Position {
    pub vertical: Option<Vertical>,
    pub horizontal: Option<Horizontal>,
}

impl Position {
    pub const fn new(
        vertical: Option<Vertical>,
        horizontal: Option<Horizontal>,
    ) -> Self {
        Position {
            vertical,
            horizontal,
        }
    }

    pub const fn top_left(top: Length, left: Length) -> Self {
        Position::new(Some(Vertical::Top(top)), Some(Horizontal::Left(left)))
    }

    pub const fn top_right(top: Length, right: Length) -> Self {
        Position::new(
            Some(Vertical::Top(top)),
            Some(Horizontal::Right(right)),
        )
    }

    pub const fn bottom_left(bottom: Length, left: Length) -> Self {
        Position::new(
            Some(Vertical::Bottom(bottom)),
            Some(Horizontal::Left(left)),
        )
    }

    pub const fn bottom_right(bottom: Length, right: Length) -> Self {
        Position::new(
            Some(Vertical::Bottom(bottom)),
            Some(Horizontal::Right(right)),
        )
    }

    pub fn top(&self) -> Option<Length> {
        match self.vertical {
            Some(Vertical::Top(x)) => Some(x),
            _ => None,
        }
    }

    pub fn bottom(&self) -> Option<Length> {
        match self.vertical {
            Some(Vertical::Bottom(x)) => Some(x),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<Length> {
        match self.horizontal {
            Some(Horizontal::Left(x)) => Some(x),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<Length> {
        match self.horizontal {
            Some(Horizontal::Right(x)) => Some(x),
            _ => None,
        }
    }

    /// Present anchors as `(property, offset)` pairs, vertical first.
    pub fn anchors(&self) -> impl Iterator<Item = (&'static str, Length)> {
        [
            ("top", self.top()),
            ("bottom", self.bottom()),
            ("left", self.left()),
            ("right", self.right()),
        ]
        .into_iter()
        .filter_map(|(name, x)| Some((name, x?)))
    }
}

/// Flat serialization form of `Position`, only present anchors get written.
#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
struct Anchors {
    #[serde(skip_serializing_if = "Option::is_none")]
    top: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bottom: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right: Option<Length>,
}

impl TryFrom<Anchors> for Position {
    type Error = &'static str;

    fn try_from(a: Anchors) -> Result<Self, Self::Error> {
        let vertical = match (a.top, a.bottom) {
            (Some(_), Some(_)) => return Err("both top and bottom anchors"),
            (Some(x), None) => Some(Vertical::Top(x)),
            (None, Some(x)) => Some(Vertical::Bottom(x)),
            (None, None) => None,
        };
        let horizontal = match (a.left, a.right) {
            (Some(_), Some(_)) => return Err("both left and right anchors"),
            (Some(x), None) => Some(Horizontal::Left(x)),
            (None, Some(x)) => Some(Horizontal::Right(x)),
            (None, None) => None,
        };
        Ok(Position {
            vertical,
            horizontal,
        })
    }
}

impl From<Position> for Anchors {
    fn from(p: Position) -> Self {
        Anchors {
            top: p.top(),
            bottom: p.bottom(),
            left: p.left(),
            right: p.right(),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: Length,
    pub height: Length,
}

impl Size {
    pub const fn new(width: Length, height: Length) -> Self {
        Size { width, height }
    }

    pub const fn round(diameter: Length) -> Self {
        Size::new(diameter, diameter)
    }
}

/// A single blemish overlaid on a rendered surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageElement {
    #[serde(rename = "type")]
    pub kind: DamageKind,
    pub position: Position,
    pub size: Size,
    /// Clockwise rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    pub opacity: f32,
    /// Handwritten label, only found on tape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<Polygon>,
}

impl DamageElement {
    /// Inline style declarations for drawing the element as an absolutely
    /// positioned layer.
    ///
    /// ```
    /// use decor::DamageKind;
    ///
    /// let spots = DamageKind::Rust.generate(1);
    /// assert_eq!(
    ///     spots[0].css(),
    ///     "position: absolute; top: 10px; left: 14px; \
    ///      width: 18px; height: 18px; opacity: 0.6;"
    /// );
    /// ```
    pub fn css(&self) -> String {
        let mut ret = String::from("position: absolute;");
        for (name, x) in self.position.anchors() {
            util::write!(ret, " {name}: {x};");
        }
        util::write!(
            ret,
            " width: {}; height: {};",
            self.size.width,
            self.size.height
        );
        if let Some(deg) = self.rotation {
            util::write!(ret, " transform: rotate({deg}deg);");
        }
        util::write!(ret, " opacity: {};", self.opacity);
        if let Some(clip) = &self.clip_path {
            util::write!(ret, " clip-path: {clip};");
        }
        ret
    }
}
