use std::path::Path;

/// The part of the drawing surface the document lifecycle depends on.
///
/// Persistence outcomes are plain booleans: implementations report their
/// own diagnostics and callers only learn whether the operation succeeded.
pub trait ImageDocument {
    /// Whether there are changes since the last clear, load or successful save.
    fn is_modified(&self) -> bool;

    /// Reset to a blank image. Clears the modification flag.
    fn clear(&mut self);

    fn load(&mut self, path: &Path) -> bool;

    /// Persist the current image encoded as `format` (a file extension such as `"png"`).
    fn save(&mut self, path: &Path, format: &str) -> bool;
}
