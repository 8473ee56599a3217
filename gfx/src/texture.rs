use std::path::{Path, PathBuf};

use image::ImageResult;

/// Decoded RGBA image, 4 bytes per pixel in row-major order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl From<image::DynamicImage> for Texture {
    fn from(image: image::DynamicImage) -> Self {
        let image = image.to_rgba8();
        let (width, height) = (image.width(), image.height());
        Texture {
            width,
            height,
            data: image.into_raw(),
        }
    }
}

impl AsRef<[u8]> for Texture {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Texture {
    pub fn load(path: impl AsRef<Path>) -> ImageResult<Self> {
        Ok(image::open(path)?.into())
    }

    pub fn from_bytes(bytes: &[u8]) -> ImageResult<Self> {
        Ok(image::load_from_memory(bytes)?.into())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Status report after each preload attempt.
#[derive(Copy, Clone, Debug)]
pub struct Progress<'a> {
    /// Number of assets attempted so far, including this one.
    pub done: usize,
    pub total: usize,
    pub path: &'a Path,
    pub ok: bool,
}

/// Outcome of loading a single asset.
#[derive(Debug)]
pub struct Loaded {
    pub path: PathBuf,
    pub result: ImageResult<Texture>,
}

impl Loaded {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Load every texture once, in the given order.
///
/// A failed load is reported and logged but does not stop the rest of the
/// batch. The callback runs after every attempt.
pub fn preload<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
    mut on_progress: impl FnMut(Progress),
) -> Vec<Loaded> {
    let paths: Vec<PathBuf> =
        paths.into_iter().map(|p| p.as_ref().to_owned()).collect();
    let total = paths.len();

    let mut ret = Vec::with_capacity(total);
    for (i, path) in paths.into_iter().enumerate() {
        let result = Texture::load(&path);
        match &result {
            Ok(tex) => log::debug!(
                "loaded {} ({}x{})",
                path.display(),
                tex.width(),
                tex.height()
            ),
            Err(e) => log::warn!("failed to load {}: {e}", path.display()),
        }

        on_progress(Progress {
            done: i + 1,
            total,
            path: &path,
            ok: result.is_ok(),
        });
        ret.push(Loaded { path, result });
    }

    ret
}
