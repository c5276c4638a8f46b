use std::path::Path;

use png::{BitDepth, ColorType, Transformations};

use super::AssetError;

/// 8-bit RGBA pixels, row-major, ready for `egui::ColorImage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

/// Decodes a PNG of any colour type into RGBA8.
pub fn decode_png(bytes: &[u8], path: &Path) -> Result<DecodedImage, AssetError> {
    let decode_err = |source: png::DecodingError| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(decode_err)?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(decode_err)?;
    let pixels = &buf[..info.buffer_size()];

    if info.bit_depth != BitDepth::Eight {
        return Err(AssetError::Unsupported {
            path: path.to_path_buf(),
            reason: format!("bit depth {:?}", info.bit_depth),
        });
    }

    let rgba = match info.color_type {
        ColorType::Rgba => pixels.to_vec(),
        ColorType::Rgb => pixels
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
            .collect(),
        ColorType::Grayscale => pixels
            .iter()
            .flat_map(|&v| [v, v, v, u8::MAX])
            .collect(),
        ColorType::GrayscaleAlpha => pixels
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        ColorType::Indexed => {
            return Err(AssetError::Unsupported {
                path: path.to_path_buf(),
                reason: "palette was not expanded".to_string(),
            })
        }
    };

    Ok(DecodedImage {
        width: info.width,
        height: info.height,
        rgba,
    })
}
