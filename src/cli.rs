use std::{
    error::Error,
    ffi::OsString,
    fmt::{self, Display},
    path::PathBuf,
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use log::debug;

pub const DEFAULT_WIDTH: i64 = 128;
pub const DEFAULT_HEIGHT: i64 = 128;

#[derive(Parser, Debug)]
#[command(
    name = "noisecipher",
    version,
    about = "Hides a text in a series of noise images, one rotated character per PPM file."
)]
struct RawArguments {
    /// Text to hide, one character per image.
    #[arg(allow_hyphen_values = true)]
    text: OsString,

    /// Directory the images are written to, created if missing.
    #[arg(allow_hyphen_values = true)]
    out_dir: PathBuf,

    /// Image width in pixels.
    #[arg(default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    width: i64,

    /// Image height in pixels.
    #[arg(default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    height: i64,

    /// Anything after the height is accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    ignored: Vec<OsString>,
}

/// The validated command line.
///
/// # Fields
///
/// * 'secret' - The bytes of the text, one per generated image.
/// * 'out_dir' - The output directory.
/// * 'width' - Image width, always positive.
/// * 'height' - Image height, always positive.
#[derive(Debug, PartialEq, Eq)]
pub struct InputArguments {
    pub secret: Vec<u8>,
    pub out_dir: PathBuf,
    pub width: usize,
    pub height: usize,
}

impl InputArguments {
    /// Parses the arguments of the running process.
    pub fn build() -> Result<Self, CliError> {
        Self::build_from(std::env::args_os())
    }

    /// Parses the given arguments, the first one being the program name.
    pub fn build_from<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let raw = RawArguments::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliError::Info(e.to_string()),
            _ => CliError::Usage(e.to_string()),
        })?;

        if !raw.ignored.is_empty() {
            debug!("ignoring {} trailing arguments", raw.ignored.len());
        }

        let width = positive(raw.width)?;
        let height = positive(raw.height)?;

        Ok(Self {
            secret: raw.text.into_encoded_bytes(),
            out_dir: raw.out_dir,
            width,
            height,
        })
    }
}

fn positive(value: i64) -> Result<usize, CliError> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(CliError::InvalidSize(value)),
    }
}

/// Prints the usage line to stderr.
pub fn usage() {
    let mut command = RawArguments::command();
    eprintln!("{}", command.render_usage());
}

#[derive(Debug)]
pub enum CliError {
    Usage(String),
    InvalidSize(i64),
    /// Help or version output, not a failure.
    Info(String),
}

// Defines how CliErrors are displayed.
impl Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(s) => write!(f, "{}", s.trim_end()),
            CliError::InvalidSize(v) => {
                write!(f, "Error: Bad size, width and height must be positive, got '{v}'.")
            }
            CliError::Info(s) => write!(f, "{}", s.trim_end()),
        }
    }
}

// Implements the Error interface for CliError.
impl Error for CliError {}
