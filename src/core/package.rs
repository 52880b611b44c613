use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Name declared in the package's own manifest.
    pub name: String,
    /// Directory name on disk; equals `name` for external packages.
    pub folder_name: String,
    /// Names of required packages, in manifest order. Not deduplicated.
    pub dependencies: Vec<String>,
    pub is_external: bool,
    pub path: Option<PathBuf>,
}

impl Package {
    pub fn internal(
        name: impl Into<String>,
        folder_name: impl Into<String>,
        path: PathBuf,
    ) -> Self {
        Self {
            name: name.into(),
            folder_name: folder_name.into(),
            dependencies: Vec::new(),
            is_external: false,
            path: Some(path),
        }
    }

    pub fn external(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            folder_name: name.clone(),
            name,
            dependencies: Vec::new(),
            is_external: true,
            path: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.folder_name
    }
}
