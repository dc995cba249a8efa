use std::{collections::TryReserveError, fs, io, path::Path};

/// The maximum value of a single colour channel, written into every header.
pub const MAX_VALUE: u16 = 255;

/// An RGB image stored as a flat, row-major buffer of 3 bytes per pixel,
/// serializable as a binary (P6) PPM file.
///
/// # Fields
///
/// * 'dimensions' - The (width, height) of the image in pixels.
/// * 'data' - A Vec<u8> holding width * height * 3 bytes in R, G, B order.
pub struct Ppm {
    pub dimensions: (usize, usize),
    pub data: Vec<u8>,
}

impl Ppm {
    /// Allocates a zeroed image of the given size.
    ///
    /// # Arguments
    ///
    /// * 'width' - Width of the image in pixels.
    /// * 'height' - Height of the image in pixels.
    ///
    /// # Returns
    ///
    /// A result containing either the Ppm or the TryReserveError raised if
    /// the buffer could not be allocated.
    pub fn build(width: usize, height: usize) -> Result<Self, TryReserveError> {
        let len = width
            .checked_mul(height)
            .and_then(|px| px.checked_mul(3))
            .unwrap_or(usize::MAX);

        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, 0);

        Ok(Self {
            dimensions: (width, height),
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.dimensions.0
    }

    pub fn height(&self) -> usize {
        self.dimensions.1
    }

    /// The ASCII P6 header, "P6\n<width> <height>\n255\n".
    pub fn header(&self) -> Vec<u8> {
        format!("P6\n{} {}\n{}\n", self.width(), self.height(), MAX_VALUE).into_bytes()
    }

    /// Overwrites the red channel of the pixel at (x, y), leaving green and
    /// blue untouched. The coordinate must be inside the image.
    pub fn embed(&mut self, x: usize, y: usize, value: u8) {
        let offset = (y * self.width() + x) * 3;
        self.data[offset] = value;
    }

    /// Returns the (r, g, b) triple at (x, y), or None when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<(u8, u8, u8)> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let offset = (y * self.width() + x) * 3;

        Some((
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ))
    }

    /// The complete file contents: header followed by the raw pixel bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = self.header();
        let mut file_bytes = Vec::with_capacity(header.len() + self.data.len());

        file_bytes.extend_from_slice(&header);
        file_bytes.extend_from_slice(&self.data);

        file_bytes
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, self.to_bytes())?;
        Ok(())
    }
}
