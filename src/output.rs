use anyhow::{Context, Result, ensure};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Serialize an interleaved RGB buffer (top row first) as binary PPM.
pub fn write_ppm(path: &str, pixels: &[u8], width: usize, height: usize) -> Result<()> {
    ensure!(
        pixels.len() == width * height * 3,
        "pixel buffer is {} bytes, expected {} for {width}x{height}",
        pixels.len(),
        width * height * 3
    );
    let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
    let mut out = BufWriter::new(file);
    encode_ppm(&mut out, pixels, width, height)
        .with_context(|| format!("failed to write {path}"))?;
    out.flush()?;
    log::info!("wrote {width}x{height} image to {path}");
    Ok(())
}

fn encode_ppm<W: Write>(out: &mut W, pixels: &[u8], width: usize, height: usize) -> std::io::Result<()> {
    write!(out, "P6\n{width} {height}\n255\n")?;
    out.write_all(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_then_raw_bytes() {
        let pixels: Vec<u8> = (0..12).collect();
        let mut encoded = Vec::new();
        encode_ppm(&mut encoded, &pixels, 2, 2).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&encoded[..header.len()], header);
        assert_eq!(&encoded[header.len()..], &pixels[..]);
    }

    #[test]
    fn wrong_buffer_size_is_rejected() {
        let path = std::env::temp_dir().join("rayscape_bad_ppm_test.ppm");
        let result = write_ppm(path.to_str().unwrap(), &[0u8; 5], 2, 2);
        assert!(result.is_err());
    }
}
