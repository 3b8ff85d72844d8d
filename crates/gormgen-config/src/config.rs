use std::path::{Path, PathBuf};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mode::GenerateMode;

/// Default output directory for generated query code.
pub fn default_out_path() -> PathBuf {
    PathBuf::from("./internal/query")
}

/// Default model package path, relative to the parent of the output path.
pub fn default_model_pkg_path() -> String {
    "models".to_string()
}

/// Model package used when the configured package path is empty.
pub const FALLBACK_MODEL_PACKAGE: &str = "model";

/// Default generation mode: no context, default query object, query interfaces.
pub fn default_mode() -> GenerateMode {
    GenerateMode::WITHOUT_CONTEXT
        | GenerateMode::WITH_DEFAULT_QUERY
        | GenerateMode::WITH_QUERY_INTERFACE
}

/// Settings frozen before a generation run and handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(default = "default_out_path")]
    pub out_path: PathBuf,
    #[serde(default = "default_mode")]
    pub mode: GenerateMode,
    #[serde(default = "default_model_pkg_path")]
    pub model_pkg_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_path: default_out_path(),
            mode: default_mode(),
            model_pkg_path: default_model_pkg_path(),
        }
    }
}

impl GeneratorConfig {
    /// Output directory for generated query code.
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    pub fn mode(&self) -> GenerateMode {
        self.mode
    }

    pub fn model_pkg_path(&self) -> &str {
        &self.model_pkg_path
    }

    /// Directory the model package is written to.
    ///
    /// A relative model package path sits next to the output directory; an
    /// absolute one is used as is. An empty path falls back to
    /// [`FALLBACK_MODEL_PACKAGE`], matching [`Self::model_package_name`].
    pub fn model_dir(&self) -> PathBuf {
        let pkg = match self.model_pkg_path.trim_end_matches('/') {
            "" => Path::new(FALLBACK_MODEL_PACKAGE),
            path => Path::new(path),
        };
        if pkg.is_absolute() {
            return pkg.to_path_buf();
        }
        match self.out_path.parent() {
            Some(parent) => parent.join(pkg),
            None => pkg.to_path_buf(),
        }
    }

    /// Go package name of the generated models (last path segment).
    pub fn model_package_name(&self) -> &str {
        self.model_pkg_path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_MODEL_PACKAGE)
    }
}
