mod texture;
pub use texture::{preload, Loaded, Progress, Texture};
