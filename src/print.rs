use crate::error::PrintError;
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};

/// External program that takes an image file and prints it.
#[derive(Debug, Clone, Copy)]
pub struct Spooler {
    pub program: &'static str,
    /// Arguments placed before the job file.
    pub args: &'static [&'static str],
}

#[cfg(windows)]
pub const PLATFORM_SPOOLER: Spooler = Spooler {
    program: "mspaint",
    args: &["/p"],
};
#[cfg(not(windows))]
pub const PLATFORM_SPOOLER: Spooler = Spooler {
    program: "lpr",
    args: &[],
};

static NEXT_JOB: AtomicU64 = AtomicU64::new(0);

/// Render `image` to a temporary PNG and submit it to the platform print spooler.
pub fn print_image(image: &RgbaImage) -> Result<(), PrintError> {
    print_with(image, &job_path(), &PLATFORM_SPOOLER)
}

/// Write the job to `job`, run `spooler` on it, and remove the file once the
/// spooler has exited.
///
/// Blocks until the spooler returns; `lpr` exits as soon as the job is queued.
pub fn print_with(image: &RgbaImage, job: &Path, spooler: &Spooler) -> Result<(), PrintError> {
    image.save_with_format(job, ImageFormat::Png)?;
    let submitted = submit(job, spooler);
    if let Err(err) = std::fs::remove_file(job) {
        log::warn!("Could not remove print job {}: {}", job.display(), err);
    }
    submitted?;
    log::info!("Submitted print job to {}", spooler.program);
    Ok(())
}

fn job_path() -> PathBuf {
    let job = NEXT_JOB.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("drawboard-print-{}-{}.png", std::process::id(), job))
}

fn submit(job: &Path, spooler: &Spooler) -> Result<(), PrintError> {
    let status = Command::new(spooler.program)
        .args(spooler.args)
        .arg(job)
        .status()
        .map_err(|source| PrintError::Spawn {
            program: spooler.program,
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(PrintError::Spooler {
            program: spooler.program,
            status,
        })
    }
}
