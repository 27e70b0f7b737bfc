use crate::core::ResourceStore;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Read-only access to the local data files (municipality table, road
/// table). Paths are resolved against a base directory so tests can
/// point the whole store at a temp dir.
#[derive(Debug, Clone)]
pub struct LocalResources {
    base_path: String,
}

impl LocalResources {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ResourceStore for LocalResources {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }
}
