use std::path::PathBuf;

use gormgen_config::{GenerateMode, GeneratorConfig};
use gormgen_resolver::{
    JsonTagOverrides, JsonTagTable, TypeMappingTable, TypeOverrides, apply_overrides,
    default_data_type_map, default_json_tag_name,
};

/// Mutable settings the options are applied to before they are frozen.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub config: GeneratorConfig,
    pub data_type_map: Option<TypeMappingTable>,
    pub json_tag_name: Option<JsonTagTable>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            data_type_map: Some(default_data_type_map()),
            json_tag_name: Some(default_json_tag_name()),
        }
    }
}

/// A single setting change, applied in the order given to [`crate::Generator::new`].
#[derive(Debug, Clone)]
pub enum GeneratorOption {
    OutPath(PathBuf),
    Mode(GenerateMode),
    ModelPkgPath(String),
    /// Replace the whole data type table; `None` disables it.
    DataTypeMap(Option<TypeMappingTable>),
    /// Merge into the data type table; `None` clears it.
    ReplaceDataTypeMap(Option<TypeOverrides>),
    /// Replace the whole JSON tag table; `None` disables it.
    JsonTagName(Option<JsonTagTable>),
    /// Merge into the JSON tag table; `None` clears it.
    ReplaceJsonTagName(Option<JsonTagOverrides>),
}

impl GeneratorOption {
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorOption::OutPath(_) => "out_path",
            GeneratorOption::Mode(_) => "mode",
            GeneratorOption::ModelPkgPath(_) => "model_pkg_path",
            GeneratorOption::DataTypeMap(_) => "data_type_map",
            GeneratorOption::ReplaceDataTypeMap(_) => "replace_data_type_map",
            GeneratorOption::JsonTagName(_) => "json_tag_name",
            GeneratorOption::ReplaceJsonTagName(_) => "replace_json_tag_name",
        }
    }

    pub fn apply(self, settings: &mut GeneratorSettings) {
        match self {
            GeneratorOption::OutPath(path) => settings.config.out_path = path,
            GeneratorOption::Mode(mode) => settings.config.mode = mode,
            GeneratorOption::ModelPkgPath(path) => settings.config.model_pkg_path = path,
            GeneratorOption::DataTypeMap(table) => settings.data_type_map = table,
            GeneratorOption::ReplaceDataTypeMap(overrides) => {
                apply_overrides(&mut settings.data_type_map, overrides)
            }
            GeneratorOption::JsonTagName(table) => settings.json_tag_name = table,
            GeneratorOption::ReplaceJsonTagName(overrides) => {
                apply_overrides(&mut settings.json_tag_name, overrides)
            }
        }
    }
}

pub fn with_out_path(out_path: impl Into<PathBuf>) -> GeneratorOption {
    GeneratorOption::OutPath(out_path.into())
}

pub fn with_mode(mode: GenerateMode) -> GeneratorOption {
    GeneratorOption::Mode(mode)
}

pub fn with_model_pkg_path(model_pkg_path: impl Into<String>) -> GeneratorOption {
    GeneratorOption::ModelPkgPath(model_pkg_path.into())
}

pub fn with_data_type_map(table: Option<TypeMappingTable>) -> GeneratorOption {
    GeneratorOption::DataTypeMap(table)
}

pub fn with_replace_data_type_map(overrides: Option<TypeOverrides>) -> GeneratorOption {
    GeneratorOption::ReplaceDataTypeMap(overrides)
}

pub fn with_json_tag_name(table: Option<JsonTagTable>) -> GeneratorOption {
    GeneratorOption::JsonTagName(table)
}

pub fn with_replace_json_tag_name(overrides: Option<JsonTagOverrides>) -> GeneratorOption {
    GeneratorOption::ReplaceJsonTagName(overrides)
}
