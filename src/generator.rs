use std::{
    collections::TryReserveError,
    error::Error,
    fmt::{self, Display},
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{
    cipher,
    formats::ppm::Ppm,
    noise,
    placement::{self, Coordinate},
};

/// Returns the output path for the image at the given index,
/// '<out_dir>/img_<index:03>.ppm'.
pub fn image_path<P: AsRef<Path>>(out_dir: P, index: usize) -> PathBuf {
    out_dir.as_ref().join(format!("img_{:03}.ppm", index))
}

/// What was written for one index of the secret text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedImage {
    pub index: usize,
    pub path: PathBuf,
    pub coordinate: Coordinate,
    pub rotation: u8,
    pub plain: u8,
    pub embedded: u8,
}

/// Produces one noise image per byte of a secret text.
///
/// # Fields
///
/// * 'out_dir' - Directory the images are written into.
/// * 'image' - The pixel buffer, allocated once and overwritten for every
///         index.
pub struct Generator {
    out_dir: PathBuf,
    image: Ppm,
}

impl Generator {
    /// Creates a generator and allocates its image buffer.
    ///
    /// # Arguments
    ///
    /// * 'out_dir' - Where the images go, created on run if missing.
    /// * 'width' - Image width in pixels, must be nonzero.
    /// * 'height' - Image height in pixels, must be nonzero.
    ///
    /// # Returns
    ///
    /// A result containing either the Generator or a GeneratorError if the
    /// buffer could not be allocated.
    pub fn build<P: Into<PathBuf>>(
        out_dir: P,
        width: usize,
        height: usize,
    ) -> Result<Self, GeneratorError> {
        let image = Ppm::build(width, height)?;

        Ok(Self {
            out_dir: out_dir.into(),
            image,
        })
    }

    /// Prepares the image for one index in the internal buffer: noise fill,
    /// then the rotated byte written into the red channel of the selected
    /// pixel.
    fn prepare(&mut self, index: usize, plain: u8) -> (Coordinate, u8, u8) {
        let (width, height) = self.image.dimensions;

        noise::fill(&mut self.image.data, index);

        let coordinate = placement::position(index, width, height);
        let rotation = placement::rotation(index);
        let embedded = cipher::rotate(plain, rotation);

        self.image.embed(coordinate.x, coordinate.y, embedded);

        debug!(
            "image {}: {:?} rotated by {} to {:?} at {}",
            index, plain as char, rotation, embedded as char, coordinate
        );

        (coordinate, rotation, embedded)
    }

    /// Renders the image for a single index in memory, nothing is written.
    pub fn render(&mut self, index: usize, plain: u8) -> &Ppm {
        self.prepare(index, plain);
        &self.image
    }

    /// Writes one image per byte of the secret, in index order, stopping at
    /// the first file that cannot be written. Files written before the
    /// failure are left in place.
    pub fn run(&mut self, secret: &[u8]) -> Result<Vec<GeneratedImage>, GeneratorError> {
        // Best effort, an unusable directory surfaces when the first file is
        // opened.
        if let Err(e) = fs::create_dir_all(&self.out_dir) {
            warn!("could not create {:?}: {}", self.out_dir, e);
        }

        info!(
            "generating {} images of {}x{} in {:?}",
            secret.len(),
            self.image.width(),
            self.image.height(),
            self.out_dir
        );

        let mut generated = Vec::with_capacity(secret.len());

        for (index, &plain) in secret.iter().enumerate() {
            let (coordinate, rotation, embedded) = self.prepare(index, plain);

            let path = image_path(&self.out_dir, index);
            self.image
                .write(&path)
                .map_err(|source| GeneratorError::Io {
                    path: path.clone(),
                    source,
                })?;

            println!("Wrote {} (secret at {})", path.display(), coordinate);

            generated.push(GeneratedImage {
                index,
                path,
                coordinate,
                rotation,
                plain,
                embedded,
            });
        }

        info!("wrote {} images", generated.len());

        Ok(generated)
    }
}

#[derive(Debug)]
pub enum GeneratorError {
    Allocation(TryReserveError),
    Io { path: PathBuf, source: io::Error },
}

// Defines how GeneratorErrors are displayed.
impl Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::Allocation(e) => {
                write!(f, "Error: could not allocate the image buffer, '{e}'.")
            }
            GeneratorError::Io { path, source } => {
                write!(f, "Error: failed to write {}, '{source}'.", path.display())
            }
        }
    }
}

// Allows for conversion from TryReserveError to GeneratorError.
impl From<TryReserveError> for GeneratorError {
    fn from(error: TryReserveError) -> Self {
        GeneratorError::Allocation(error)
    }
}

impl Error for GeneratorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GeneratorError::Allocation(e) => Some(e),
            GeneratorError::Io { source, .. } => Some(source),
        }
    }
}
