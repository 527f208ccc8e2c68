use std::path::Path;

use anyhow::Result;

use crate::error::SlicerError;

/// Names a sprite from its saved image file.
///
/// Any error aborts the whole run; callers do not retry.
pub trait Labeler: Send + Sync {
    fn label(&self, image_path: &Path) -> Result<String>;
}

/// Default labeler: the file name without its extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStemLabeler;

impl Labeler for FileStemLabeler {
    fn label(&self, image_path: &Path) -> Result<String> {
        image_path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                SlicerError::Label {
                    path: image_path.to_path_buf(),
                    message: "path has no file name".to_string(),
                }
                .into()
            })
    }
}
