use std::path::Path;

use crate::manifest::{Manifest, ManifestError};

pub trait ManifestFormat: Send + Sync {
    fn file_name(&self) -> &'static str;
    fn parse(&self, path: &Path, content: &str) -> Result<Manifest, ManifestError>;
}
