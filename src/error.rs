use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while loading or saving the canvas bitmap.
///
/// These never leave the canvas: they are logged and collapsed into the
/// `bool` outcome the lifecycle controller works with.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("unknown image format: {0}")]
    UnknownFormat(String),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {path} as {format}: {source}")]
    Encode {
        path: PathBuf,
        format: String,
        #[source]
        source: image::ImageError,
    },
}

/// Errors raised while handing the canvas to the print spooler.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("failed to render print job: {0}")]
    Render(#[from] image::ImageError),

    #[error("failed to start print spooler `{program}`: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("print spooler `{program}` exited with {status}")]
    Spooler {
        program: &'static str,
        status: ExitStatus,
    },
}
