//! Texture assets: decoded RGBA8 images ready for upload.
//!
//! The renderer consumes [`TextureImage`] values, never file paths. Missing
//! or unreadable files fall back to procedural images so the demo always has
//! something to draw.

use std::path::Path;

/// Largest width or height accepted from an image file.
pub const MAX_TEXTURE_DIMENSION: u32 = 8192;

/// Errors from texture loading.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("texture {path} has zero size")]
    Empty { path: String },
    #[error("texture {path} is {width}x{height}, larger than {MAX_TEXTURE_DIMENSION}")]
    TooLarge {
        path: String,
        width: u32,
        height: u32,
    },
}

/// Tightly packed RGBA8 pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Decode an image file (PNG or JPEG) into RGBA8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        // Header only, so oversized files are refused before decoding.
        let (width, height) = image::image_dimensions(path)?;
        if width == 0 || height == 0 {
            return Err(AssetError::Empty {
                path: path.display().to_string(),
            });
        }
        if width > MAX_TEXTURE_DIMENSION || height > MAX_TEXTURE_DIMENSION {
            return Err(AssetError::TooLarge {
                path: path.display().to_string(),
                width,
                height,
            });
        }

        let decoded = image::open(path)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        tracing::info!("loaded texture {} ({width}x{height})", path.display());
        Ok(Self {
            width,
            height,
            rgba: decoded.into_raw(),
        })
    }

    /// Load `path` if given, otherwise or on failure build `fallback`.
    pub fn load_or_else(path: Option<&Path>, fallback: impl FnOnce() -> Self) -> Self {
        let Some(path) = path else {
            return fallback();
        };
        match Self::load(path) {
            Ok(texture) => texture,
            Err(e) => {
                tracing::warn!("failed to load texture {}: {e}; using fallback", path.display());
                fallback()
            }
        }
    }

    /// Wooden-crate stand-in: brown planks with a darker frame.
    pub fn crate_pattern(size: u32) -> Self {
        let size = size.max(8);
        let border = size / 8;
        let plank = (size / 4).max(1);
        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let on_border =
                    x < border || y < border || x >= size - border || y >= size - border;
                let color = if on_border {
                    [92, 60, 30, 255]
                } else if (y / plank) % 2 == 0 {
                    [168, 118, 62, 255]
                } else {
                    [150, 102, 52, 255]
                };
                rgba.extend_from_slice(&color);
            }
        }
        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    /// Smiling face on a transparent background.
    pub fn smiley(size: u32) -> Self {
        let size = size.max(8);
        let s = size as f32;
        let center = s / 2.0;
        let radius = s * 0.45;
        let eye_radius = s * 0.06;
        let eyes = [(s * 0.35, s * 0.38), (s * 0.65, s * 0.38)];

        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                let from_center = ((px - center).powi(2) + (py - center).powi(2)).sqrt();

                let in_eye = eyes
                    .iter()
                    .any(|(ex, ey)| ((px - ex).powi(2) + (py - ey).powi(2)).sqrt() < eye_radius);
                // Lower arc of a ring around the center.
                let in_mouth = py > center + s * 0.05
                    && (from_center - s * 0.28).abs() < s * 0.035;

                let color = if from_center > radius {
                    [0, 0, 0, 0]
                } else if in_eye || in_mouth {
                    [40, 30, 10, 255]
                } else {
                    [250, 210, 40, 255]
                };
                rgba.extend_from_slice(&color);
            }
        }
        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    /// Colour of pixel (`x`, `y`), if inside the image.
    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let p = self.rgba.get(i..i + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }
}

/// The pair of textures blended onto every cube face.
#[derive(Debug, Clone)]
pub struct TextureSet {
    pub primary: TextureImage,
    pub secondary: TextureImage,
}

impl TextureSet {
    /// Load both textures, substituting procedural images where needed.
    pub fn load(primary: Option<&Path>, secondary: Option<&Path>) -> Self {
        Self {
            primary: TextureImage::load_or_else(primary, || TextureImage::crate_pattern(256)),
            secondary: TextureImage::load_or_else(secondary, || TextureImage::smiley(256)),
        }
    }
}

impl Default for TextureSet {
    fn default() -> Self {
        Self::load(None, None)
    }
}

pub fn crate_info() -> &'static str {
    "quatcam-assets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn procedural_textures_have_requested_size() {
        let crate_tex = TextureImage::crate_pattern(64);
        assert_eq!((crate_tex.width, crate_tex.height), (64, 64));
        assert_eq!(crate_tex.rgba.len(), 64 * 64 * 4);

        let smiley = TextureImage::smiley(128);
        assert_eq!(smiley.rgba.len(), 128 * 128 * 4);
    }

    #[test]
    fn smiley_is_transparent_in_corners() {
        let smiley = TextureImage::smiley(64);
        assert_eq!(smiley.pixel(0, 0).unwrap()[3], 0);
        assert_eq!(smiley.pixel(32, 20).unwrap()[3], 255);
    }

    #[test]
    fn load_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tex.png");
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(1, 1, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let tex = TextureImage::load(&path).unwrap();
        assert_eq!((tex.width, tex.height), (3, 2));
        assert_eq!(tex.pixel(1, 1), Some([10, 20, 30, 255]));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TextureImage::load(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, AssetError::Decode(_) | AssetError::Io(_)));
    }

    #[test]
    fn fallback_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        let tex = TextureImage::load_or_else(Some(&path), || TextureImage::smiley(16));
        assert_eq!((tex.width, tex.height), (16, 16));
    }

    #[test]
    fn oversized_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbaImage::new(MAX_TEXTURE_DIMENSION + 1, 1)
            .save(&path)
            .unwrap();

        let err = TextureImage::load(&path).unwrap_err();
        assert!(matches!(
            err,
            AssetError::TooLarge {
                width: 8193,
                height: 1,
                ..
            }
        ));
        let tex = TextureImage::load_or_else(Some(&path), || TextureImage::smiley(16));
        assert_eq!((tex.width, tex.height), (16, 16));
    }

    #[test]
    fn default_set_uses_procedural_images() {
        let set = TextureSet::default();
        assert_eq!(set.primary.width, 256);
        assert_eq!(set.secondary.width, 256);
    }
}
