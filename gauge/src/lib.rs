//! Equipment readouts. Each widget clamps its input into the range the
//! physical display could show and renders it as text.

mod film;
pub use film::FilmCounter;

mod led;
pub use led::{LedGauge, SEGMENTS};

mod tally;
pub use tally::{Stroke, Tally};
