//! Built-in engine that writes one Go model file per table.

pub mod render;
pub mod types;

use std::fs;
use std::path::PathBuf;

use gormgen_config::GeneratorConfig;
use gormgen_naming::build_model_file_name;
use gormgen_resolver::{JsonTagStrategy, TypeMappingTable};
use tracing::{debug, info};

use crate::engine::{GenerationEngine, ModelOpt, ModelRef, QueryInterface};
use crate::error::ExportError;
use crate::schema::SchemaSource;

pub use render::{Field, ModelRenderer, gorm_tag};
pub use types::default_go_type;

/// Generation engine that renders GORM model structs from a schema source.
///
/// Query code is not emitted, so [`GenerationEngine::apply_interface`] is
/// rejected. Models passed to [`GenerationEngine::apply_basic`] are rendered
/// like generated models.
pub struct GoModelEngine<S> {
    schema: S,
    config: GeneratorConfig,
    data_types: Option<TypeMappingTable>,
    json_tags: Option<JsonTagStrategy>,
    models: Vec<(String, Vec<ModelOpt>)>,
    written: Vec<PathBuf>,
}

impl<S: SchemaSource> GoModelEngine<S> {
    pub fn new(schema: S) -> Self {
        Self {
            schema,
            config: GeneratorConfig::default(),
            data_types: None,
            json_tags: None,
            models: Vec::new(),
            written: Vec::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn data_types(&self) -> Option<&TypeMappingTable> {
        self.data_types.as_ref()
    }

    pub fn json_tags(&self) -> Option<&JsonTagStrategy> {
        self.json_tags.as_ref()
    }

    /// Tables queued for generation, in order.
    pub fn queued_tables(&self) -> Vec<&str> {
        self.models.iter().map(|(t, _)| t.as_str()).collect()
    }

    /// Files written by the last [`GenerationEngine::execute`].
    pub fn written_files(&self) -> &[PathBuf] {
        &self.written
    }

    fn renderer(&self) -> ModelRenderer<'_> {
        ModelRenderer::new(self.config.model_package_name())
            .with_data_types(self.data_types.as_ref())
            .with_json_tags(self.json_tags.as_ref())
    }

    fn ensure_table(&self, table: &str) -> Result<(), ExportError> {
        match self.schema.table(table) {
            Some(_) => Ok(()),
            None => Err(ExportError::TableNotFound(table.to_string())),
        }
    }

    fn queue(&mut self, table: &str, opts: &[ModelOpt]) {
        if self.models.iter().any(|(t, _)| t == table) {
            debug!(table, "model already queued");
            return;
        }
        self.models.push((table.to_string(), opts.to_vec()));
    }
}

impl<S: SchemaSource> GenerationEngine for GoModelEngine<S> {
    type Error = ExportError;

    fn configure(&mut self, config: &GeneratorConfig) {
        self.config = config.clone();
    }

    fn with_data_type_map(&mut self, table: TypeMappingTable) {
        self.data_types = Some(table);
    }

    fn with_json_tag_name_strategy(&mut self, strategy: JsonTagStrategy) {
        self.json_tags = Some(strategy);
    }

    fn generate_model(&mut self, table_name: &str, opts: &[ModelOpt]) -> Result<(), ExportError> {
        self.ensure_table(table_name)?;
        self.queue(table_name, opts);
        Ok(())
    }

    fn apply_basic(&mut self, models: &[ModelRef]) -> Result<(), ExportError> {
        for model in models {
            self.ensure_table(model.table())?;
            self.queue(model.table(), &[]);
        }
        Ok(())
    }

    fn apply_interface(
        &mut self,
        interface: &QueryInterface,
        _models: &[ModelRef],
    ) -> Result<(), ExportError> {
        Err(ExportError::Unsupported(format!(
            "query interface `{}` (model engine does not emit query code)",
            interface.name
        )))
    }

    fn execute(&mut self) -> Result<(), ExportError> {
        let model_dir = self.config.model_dir();
        fs::create_dir_all(&model_dir).map_err(|source| ExportError::Io {
            path: model_dir.clone(),
            source,
        })?;

        let renderer = self.renderer();
        let mut written = Vec::with_capacity(self.models.len());
        for (table_name, opts) in &self.models {
            let table = self
                .schema
                .table(table_name)
                .ok_or_else(|| ExportError::TableNotFound(table_name.clone()))?;
            let code = renderer.render_model(&table, opts)?;
            let out_path = model_dir.join(build_model_file_name(&table.name));
            fs::write(&out_path, code).map_err(|source| ExportError::Io {
                path: out_path.clone(),
                source,
            })?;
            info!(table = %table.name, path = %out_path.display(), "generated model");
            written.push(out_path);
        }

        self.written = written;
        Ok(())
    }
}
