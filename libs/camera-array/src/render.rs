//! # Render Driver
//!
//! Walks a camera array and asks the host to render each slot to disk.
//! The off-screen render and the image codec belong to the host; this
//! module only decides sizes, file names and order.

use crate::array::CameraArray;
use crate::error::{CameraArrayError, CameraResult};
use config::constants::{DEFAULT_RENDER_DIR, DEFAULT_RENDER_HEIGHT, DEFAULT_RENDER_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Image codec used for rendered frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageEncoding {
    /// Lossless PNG
    #[default]
    Png,
    /// Lossy JPEG
    Jpg,
    /// OpenEXR high dynamic range
    Exr,
    /// Truevision TGA
    Tga,
}

impl ImageEncoding {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Exr => "exr",
            Self::Tga => "tga",
        }
    }
}

impl fmt::Display for ImageEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageEncoding {
    type Err = CameraArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "exr" => Ok(Self::Exr),
            "tga" => Ok(Self::Tga),
            _ => Err(CameraArrayError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Output settings for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    /// Render target width in pixels
    pub width: u32,
    /// Render target height in pixels
    pub height: u32,
    /// Directory receiving one file per slot
    pub output_dir: PathBuf,
    /// Image codec
    pub encoding: ImageEncoding,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_RENDER_WIDTH,
            height: DEFAULT_RENDER_HEIGHT,
            output_dir: PathBuf::from(DEFAULT_RENDER_DIR),
            encoding: ImageEncoding::default(),
        }
    }
}

impl CaptureSettings {
    /// File path for the slot called `slot_name`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use camera_array::{CaptureSettings, ImageEncoding};
    /// use std::path::Path;
    ///
    /// let settings = CaptureSettings {
    ///     encoding: ImageEncoding::Jpg,
    ///     ..CaptureSettings::default()
    /// };
    /// assert_eq!(
    ///     settings.output_path("CylinderCamera07"),
    ///     Path::new("output").join("CylinderCamera07.jpg")
    /// );
    /// ```
    pub fn output_path(&self, slot_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{slot_name}.{}", self.encoding.extension()))
    }
}

/// Host renderer that draws one camera into an image file.
pub trait RenderSink {
    /// Scene handle of a camera object.
    type Handle;

    /// Host-side failure, kept as the source of
    /// [`CameraArrayError::RenderFailed`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Renders `camera` at `width` x `height` and writes it to `path`
    /// using `encoding`.
    fn render(
        &mut self,
        camera: &Self::Handle,
        width: u32,
        height: u32,
        encoding: ImageEncoding,
        path: &Path,
    ) -> Result<(), Self::Error>;
}

/// Renders every slot of `array` in ladder order.
///
/// Creates the output directory first. Stops at the first failing slot.
///
/// # Errors
///
/// - [`CameraArrayError::InvalidParameter`] for a zero-sized target
/// - [`CameraArrayError::Io`] if the output directory cannot be created
/// - [`CameraArrayError::RenderFailed`] if the host fails on a slot
pub fn render_all<H, R>(
    array: &CameraArray<H>,
    settings: &CaptureSettings,
    sink: &mut R,
) -> CameraResult<Vec<PathBuf>>
where
    R: RenderSink<Handle = H>,
{
    if settings.width == 0 || settings.height == 0 {
        return Err(CameraArrayError::InvalidParameter {
            name: "render_size",
            value: f64::from(settings.width.min(settings.height)),
        });
    }

    std::fs::create_dir_all(&settings.output_dir)?;

    let mut written = Vec::with_capacity(array.len());
    for slot in array.slots() {
        let path = settings.output_path(&slot.name);
        sink.render(
            &slot.handle,
            settings.width,
            settings.height,
            settings.encoding,
            &path,
        )
        .map_err(|err| CameraArrayError::RenderFailed {
            slot: slot.name.clone(),
            source: Box::new(err),
        })?;
        written.push(path);
    }

    log::info!(
        "rendered {} slot(s) of '{}' to {}",
        written.len(),
        array.name(),
        settings.output_dir.display()
    );

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_matches_encoding() {
        assert_eq!(ImageEncoding::Png.extension(), "png");
        assert_eq!(ImageEncoding::Jpg.extension(), "jpg");
        assert_eq!(ImageEncoding::Exr.extension(), "exr");
        assert_eq!(ImageEncoding::Tga.extension(), "tga");
    }

    #[test]
    fn test_parse_encoding() {
        assert_eq!("PNG".parse::<ImageEncoding>().unwrap(), ImageEncoding::Png);
        assert_eq!("jpeg".parse::<ImageEncoding>().unwrap(), ImageEncoding::Jpg);
        assert!(matches!(
            "bmp".parse::<ImageEncoding>(),
            Err(CameraArrayError::UnknownEncoding(_))
        ));
    }

    #[test]
    fn test_default_settings() {
        let settings = CaptureSettings::default();
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.height, 1024);
        assert_eq!(settings.encoding, ImageEncoding::Png);
        assert_eq!(
            settings.output_path("CylinderCamera0"),
            PathBuf::from("output").join("CylinderCamera0.png")
        );
    }

    #[test]
    fn test_settings_from_json() {
        let settings: CaptureSettings =
            serde_json::from_str(r#"{"encoding": "exr", "width": 512}"#).unwrap();
        assert_eq!(settings.encoding, ImageEncoding::Exr);
        assert_eq!(settings.width, 512);
        assert_eq!(settings.height, 1024);
    }
}
