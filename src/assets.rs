/// Image asset lookup
///
/// Each idea names its picture without an extension. At startup the assets
/// directory is scanned in the background to find which pictures exist;
/// cards whose picture is missing get a placeholder panel instead.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ResourceError;
use crate::state::data::ImageRef;

/// Extensions probed for each image, in order
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Which idea images exist on disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetIndex {
    found: HashMap<ImageRef, PathBuf>,
    missing: Vec<ImageRef>,
}

impl AssetIndex {
    /// Path to the image file, or `MissingImage`
    pub fn resolve(&self, image: ImageRef) -> Result<&Path, ResourceError> {
        self.found
            .get(&image)
            .map(PathBuf::as_path)
            .ok_or(ResourceError::MissingImage(image.0))
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn missing(&self) -> &[ImageRef] {
        &self.missing
    }
}

/// Look for every image in `dir`
///
/// Runs on the tokio executor so the window can open before the disk is read.
pub async fn scan(dir: PathBuf, images: Vec<ImageRef>) -> AssetIndex {
    let mut index = AssetIndex::default();

    for image in images {
        match find_image(&dir, image).await {
            Some(path) => {
                index.found.insert(image, path);
            }
            None => index.missing.push(image),
        }
    }

    if index.missing.is_empty() {
        tracing::info!("Found all {} images in {}", index.found.len(), dir.display());
    } else {
        tracing::warn!(
            "{} of {} images missing from {}, using placeholders",
            index.missing.len(),
            index.missing.len() + index.found.len(),
            dir.display()
        );
        for image in &index.missing {
            tracing::debug!("{}", ResourceError::MissingImage(image.0));
        }
    }

    index
}

async fn find_image(dir: &Path, image: ImageRef) -> Option<PathBuf> {
    for extension in IMAGE_EXTENSIONS {
        let candidate = dir.join(format!("{}.{}", image.0, extension));
        if let Ok(metadata) = tokio::fs::metadata(&candidate).await {
            if metadata.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
