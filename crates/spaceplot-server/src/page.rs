//! PNG encoding and the live preview page.

use crate::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use spaceplot_scene::Raster;
use std::time::{SystemTime, UNIX_EPOCH};

/// Encode a raster as an 8-bit RGBA PNG.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, raster.width(), raster.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&raster.to_rgba_bytes())?;
        writer.finish()?;
    }
    Ok(buf)
}

/// Seconds since the Unix epoch, for stamping pages.
pub fn timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// An HTML page showing `raster` inline that reloads itself after
/// `refresh_ms`.
pub fn image_page(raster: &Raster, refresh_ms: u64, stamp: u64) -> Result<String> {
    let encoded = STANDARD.encode(encode_png(raster)?);
    Ok(format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"></head>
<body onLoad='setTimeout(() => {{window.location.reload(true);}},{refresh_ms});'>
<table><tr><td><img src="data:image/png;base64,{encoded}"></td></tr></table>{stamp}
</body></html>
"#
    ))
}
