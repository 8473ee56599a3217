//! Hand-placed damage entries, one table per damage kind.
//!
//! Table order is significant, generators take entries from the front.

use util::{pct, px, Length, Polygon};

use crate::{DamageElement, DamageKind, Position, Size};

pub(crate) trait Entry {
    fn element(&self, kind: DamageKind) -> DamageElement;
}

/// Thin straight mark drawn at an angle.
pub(crate) struct Stroke {
    at: Position,
    length: Length,
    thickness: Length,
    rotation: f32,
    opacity: f32,
}

impl Entry for Stroke {
    fn element(&self, kind: DamageKind) -> DamageElement {
        DamageElement {
            kind,
            position: self.at,
            size: Size::new(self.length, self.thickness),
            rotation: Some(self.rotation),
            opacity: self.opacity,
            note: None,
            clip_path: None,
        }
    }
}

/// Round blot.
pub(crate) struct Spot {
    at: Position,
    diameter: Length,
    opacity: f32,
}

impl Entry for Spot {
    fn element(&self, kind: DamageKind) -> DamageElement {
        DamageElement {
            kind,
            position: self.at,
            size: Size::round(self.diameter),
            rotation: None,
            opacity: self.opacity,
            note: None,
            clip_path: None,
        }
    }
}

/// Chipped off flake with a triangular outline.
pub(crate) struct Flake {
    at: Position,
    size: Size,
    outline: [[Length; 2]; 3],
    opacity: f32,
}

impl Entry for Flake {
    fn element(&self, kind: DamageKind) -> DamageElement {
        DamageElement {
            kind,
            position: self.at,
            size: self.size,
            rotation: None,
            opacity: self.opacity,
            note: None,
            clip_path: Some(Polygon::from(&self.outline[..])),
        }
    }
}

/// Strip of tape, possibly with a label.
pub(crate) struct Strip {
    at: Position,
    size: Size,
    rotation: f32,
    opacity: f32,
    note: &'static str,
}

impl Entry for Strip {
    fn element(&self, kind: DamageKind) -> DamageElement {
        DamageElement {
            kind,
            position: self.at,
            size: self.size,
            rotation: Some(self.rotation),
            opacity: self.opacity,
            note: Some(self.note.to_owned()),
            clip_path: None,
        }
    }
}

const fn stroke(
    at: Position,
    length: Length,
    thickness: Length,
    rotation: f32,
    opacity: f32,
) -> Stroke {
    Stroke {
        at,
        length,
        thickness,
        rotation,
        opacity,
    }
}

const fn spot(at: Position, diameter: Length, opacity: f32) -> Spot {
    Spot {
        at,
        diameter,
        opacity,
    }
}

const fn flake(
    at: Position,
    size: Size,
    outline: [[Length; 2]; 3],
    opacity: f32,
) -> Flake {
    Flake {
        at,
        size,
        outline,
        opacity,
    }
}

const fn strip(
    at: Position,
    size: Size,
    rotation: f32,
    opacity: f32,
    note: &'static str,
) -> Strip {
    Strip {
        at,
        size,
        rotation,
        opacity,
        note,
    }
}

const fn tl(top: Length, left: Length) -> Position {
    Position::top_left(top, left)
}

const fn tr(top: Length, right: Length) -> Position {
    Position::top_right(top, right)
}

const fn bl(bottom: Length, left: Length) -> Position {
    Position::bottom_left(bottom, left)
}

const fn br(bottom: Length, right: Length) -> Position {
    Position::bottom_right(bottom, right)
}

const fn size(width: Length, height: Length) -> Size {
    Size::new(width, height)
}

pub(crate) const LIGHT_SCRATCHES: &[Stroke] = &[
    stroke(tl(pct(12.0), pct(8.0)), px(60.0), px(1.0), -15.0, 0.35),
    stroke(tr(pct(28.0), pct(14.0)), px(45.0), px(1.0), 22.0, 0.3),
    stroke(bl(pct(18.0), pct(22.0)), px(80.0), px(1.0), -4.0, 0.4),
    stroke(tl(pct(45.0), pct(55.0)), px(35.0), px(1.0), 38.0, 0.25),
    stroke(br(pct(32.0), pct(9.0)), px(52.0), px(1.0), -28.0, 0.35),
    stroke(tr(pct(8.0), pct(36.0)), px(28.0), px(1.0), 67.0, 0.3),
    stroke(bl(pct(7.0), pct(48.0)), px(70.0), px(1.0), 3.0, 0.45),
    stroke(tl(pct(62.0), pct(4.0)), px(40.0), px(1.0), -52.0, 0.28),
];

pub(crate) const DARK_SCRATCHES: &[Stroke] = &[
    stroke(tl(pct(20.0), pct(30.0)), px(90.0), px(2.0), 12.0, 0.6),
    stroke(br(pct(25.0), pct(20.0)), px(65.0), px(2.0), -18.0, 0.55),
    stroke(tl(pct(55.0), pct(12.0)), px(48.0), px(1.5), 41.0, 0.5),
    stroke(bl(pct(10.0), pct(65.0)), px(38.0), px(2.0), -7.0, 0.65),
    stroke(tr(pct(5.0), pct(5.0)), px(55.0), px(2.0), 25.0, 0.5),
];

pub(crate) const RUST_SPOTS: &[Spot] = &[
    spot(tl(px(10.0), px(14.0)), px(18.0), 0.6),
    spot(tr(pct(22.0), px(18.0)), px(12.0), 0.5),
    spot(bl(px(16.0), pct(28.0)), px(24.0), 0.45),
    spot(br(px(12.0), px(10.0)), px(30.0), 0.7),
    spot(tl(pct(48.0), px(6.0)), px(9.0), 0.55),
    spot(br(pct(38.0), pct(30.0)), px(15.0), 0.4),
    spot(tl(px(6.0), pct(52.0)), px(7.0), 0.5),
];

pub(crate) const PAINT_CHIPS: &[Flake] = &[
    flake(
        tl(px(0.0), pct(20.0)),
        size(px(14.0), px(10.0)),
        [
            [pct(0.0), pct(0.0)],
            [pct(100.0), pct(0.0)],
            [pct(40.0), pct(100.0)],
        ],
        0.85,
    ),
    flake(
        br(px(0.0), pct(35.0)),
        size(px(18.0), px(8.0)),
        [
            [pct(0.0), pct(100.0)],
            [pct(100.0), pct(100.0)],
            [pct(60.0), pct(0.0)],
        ],
        0.8,
    ),
    flake(
        tl(pct(40.0), px(0.0)),
        size(px(8.0), px(16.0)),
        [
            [pct(0.0), pct(0.0)],
            [pct(100.0), pct(50.0)],
            [pct(0.0), pct(100.0)],
        ],
        0.75,
    ),
    flake(
        tr(pct(15.0), px(0.0)),
        size(px(10.0), px(14.0)),
        [
            [pct(100.0), pct(0.0)],
            [pct(100.0), pct(100.0)],
            [pct(0.0), pct(30.0)],
        ],
        0.9,
    ),
    flake(
        bl(pct(22.0), pct(40.0)),
        size(px(12.0), px(9.0)),
        [
            [pct(10.0), pct(0.0)],
            [pct(100.0), pct(60.0)],
            [pct(0.0), pct(100.0)],
        ],
        0.7,
    ),
    flake(
        tr(px(3.0), pct(12.0)),
        size(px(9.0), px(7.0)),
        [
            [pct(0.0), pct(20.0)],
            [pct(100.0), pct(0.0)],
            [pct(50.0), pct(100.0)],
        ],
        0.8,
    ),
];

pub(crate) const SMUDGES: &[Spot] = &[
    spot(tl(pct(30.0), pct(25.0)), px(42.0), 0.12),
    spot(br(pct(20.0), pct(15.0)), px(36.0), 0.1),
    spot(tr(pct(60.0), pct(40.0)), px(48.0), 0.08),
    spot(bl(pct(8.0), pct(10.0)), px(30.0), 0.14),
    spot(tr(pct(12.0), pct(8.0)), px(38.0), 0.11),
];

pub(crate) const TAPE_PATCHES: &[Strip] = &[
    strip(
        tl(px(-12.0), pct(18.0)),
        size(px(80.0), px(24.0)),
        -4.0,
        0.9,
        "EVIDENCE",
    ),
    strip(
        tr(px(-10.0), pct(12.0)),
        size(px(64.0), px(22.0)),
        6.0,
        0.85,
        "",
    ),
    strip(
        bl(px(-14.0), pct(35.0)),
        size(px(90.0), px(26.0)),
        2.0,
        0.9,
        "DO NOT OPEN",
    ),
    strip(
        br(px(-8.0), px(-15.0)),
        size(px(70.0), px(24.0)),
        -38.0,
        0.8,
        "",
    ),
    strip(
        tl(pct(40.0), px(-18.0)),
        size(px(60.0), px(22.0)),
        85.0,
        0.85,
        "CASE 13",
    ),
    strip(
        tl(px(-15.0), px(-15.0)),
        size(px(75.0), px(24.0)),
        -45.0,
        0.88,
        "",
    ),
];
