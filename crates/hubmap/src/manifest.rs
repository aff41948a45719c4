//! Read route lists out of the web build's manifest files.
//!
//! Only the keys matter: `pages` in `build-manifest.json` maps route
//! templates to asset lists, `routes` in `prerender-manifest.json` maps
//! concrete paths to revalidation metadata.

use crate::error::{Result, SitemapError};
use std::path::{Path, PathBuf};

/// File name of the build manifest inside the dist directory.
pub const BUILD_MANIFEST: &str = "build-manifest.json";
/// File name of the pre-render manifest inside the dist directory.
pub const PRERENDER_MANIFEST: &str = "prerender-manifest.json";
/// Dist directory used when none is configured.
pub const DEFAULT_DIST_DIR: &str = ".next";

/// Source of statically known routes.
pub trait ManifestReader: Send + Sync {
    /// Route templates from the build manifest, in document order.
    fn build_routes(&self) -> Result<Vec<String>>;

    /// Concrete route paths from the pre-render manifest, in document order.
    fn prerender_routes(&self) -> Result<Vec<String>>;
}

/// Reads manifests from a build output directory on disk.
#[derive(Debug, Clone)]
pub struct NextManifests {
    dist_dir: PathBuf,
}

impl NextManifests {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
        }
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    pub fn build_manifest_path(&self) -> PathBuf {
        self.dist_dir.join(BUILD_MANIFEST)
    }

    pub fn prerender_manifest_path(&self) -> PathBuf {
        self.dist_dir.join(PRERENDER_MANIFEST)
    }
}

impl Default for NextManifests {
    fn default() -> Self {
        Self::new(DEFAULT_DIST_DIR)
    }
}

impl ManifestReader for NextManifests {
    fn build_routes(&self) -> Result<Vec<String>> {
        read_object_keys(&self.build_manifest_path(), "pages")
    }

    fn prerender_routes(&self) -> Result<Vec<String>> {
        read_object_keys(&self.prerender_manifest_path(), "routes")
    }
}

/// Route lists held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticManifests {
    pub build: Vec<String>,
    pub prerender: Vec<String>,
}

impl StaticManifests {
    pub fn new<I, J, S, T>(build: I, prerender: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            build: build.into_iter().map(Into::into).collect(),
            prerender: prerender.into_iter().map(Into::into).collect(),
        }
    }
}

impl ManifestReader for StaticManifests {
    fn build_routes(&self) -> Result<Vec<String>> {
        Ok(self.build.clone())
    }

    fn prerender_routes(&self) -> Result<Vec<String>> {
        Ok(self.prerender.clone())
    }
}

/// Load a JSON file and return the keys of its top-level `field` object.
///
/// A missing `field` (or one that is not an object) yields no keys.
fn read_object_keys(path: &Path, field: &str) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path).map_err(|source| SitemapError::ManifestIo {
        path: path.to_path_buf(),
        source,
    })?;
    object_keys(&raw, field).map_err(|source| SitemapError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

fn object_keys(raw: &str, field: &str) -> std::result::Result<Vec<String>, serde_json::Error> {
    let doc: serde_json::Value = serde_json::from_str(raw)?;
    let keys = doc
        .get(field)
        .and_then(|v| v.as_object())
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_keys_preserves_document_order() {
        let raw = r#"{"pages": {"/zeta": [], "/_app": ["a.js"], "/about": []}}"#;
        let keys = object_keys(raw, "pages").unwrap();
        assert_eq!(keys, vec!["/zeta", "/_app", "/about"]);
    }

    #[test]
    fn test_missing_field_is_empty() {
        let keys = object_keys(r#"{"version": 4}"#, "routes").unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(object_keys("{not json", "pages").is_err());
    }

    #[test]
    fn test_missing_file_is_manifest_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let reader = NextManifests::new(dir.path());
        let err = reader.build_routes().unwrap_err();
        assert!(matches!(err, SitemapError::ManifestIo { .. }));
        assert!(err.to_string().contains(BUILD_MANIFEST));
    }

    #[test]
    fn test_reads_both_manifests_from_dist_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(BUILD_MANIFEST),
            r#"{"polyfillFiles": [], "pages": {"/": [], "/about": []}}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(PRERENDER_MANIFEST),
            r#"{"version": 3, "routes": {"/en/faq": {"initialRevalidateSeconds": false}}}"#,
        )
        .unwrap();

        let reader = NextManifests::new(dir.path());
        assert_eq!(reader.build_routes().unwrap(), vec!["/", "/about"]);
        assert_eq!(reader.prerender_routes().unwrap(), vec!["/en/faq"]);
    }
}
