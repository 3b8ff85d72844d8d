use gormgen_config::GeneratorConfig;
use gormgen_exporter::{GenerationEngine, ModelOpt, ModelRef, QueryInterface};
use gormgen_resolver::JsonTagStrategy;
use tracing::{debug, warn};

use crate::option::{GeneratorOption, GeneratorSettings};

#[derive(Debug, Clone)]
struct GenerateModel {
    table_name: String,
    opts: Vec<ModelOpt>,
}

#[derive(Debug, Clone)]
struct ApplyInterface {
    interface: QueryInterface,
    models: Vec<ModelRef>,
}

/// Configured wrapper around a generation engine.
///
/// Options are applied once in [`Generator::new`]; models and interfaces are
/// queued with the `set_*` methods and handed to the engine by
/// [`Generator::execute`].
pub struct Generator<E> {
    config: GeneratorConfig,
    generate_model: Vec<GenerateModel>,
    apply_basic: Vec<ModelRef>,
    apply_interface: Vec<ApplyInterface>,
    engine: E,
}

impl<E: GenerationEngine> Generator<E> {
    pub fn new<I>(mut engine: E, opts: I) -> Self
    where
        I: IntoIterator<Item = GeneratorOption>,
    {
        let mut settings = GeneratorSettings::default();
        for opt in opts {
            debug!(option = opt.name(), "applying generator option");
            opt.apply(&mut settings);
        }

        let GeneratorSettings {
            config,
            data_type_map,
            json_tag_name,
        } = settings;

        engine.configure(&config);

        if let Some(table) = data_type_map.filter(|t| !t.is_empty()) {
            debug!(families = ?table.keys(), "registering data type map");
            engine.with_data_type_map(table);
        }

        if let Some(table) = json_tag_name.filter(|t| !t.is_empty()) {
            debug!(columns = ?table.keys(), "registering json tag strategy");
            engine.with_json_tag_name_strategy(JsonTagStrategy::from_table(table));
        }

        Self {
            config,
            generate_model: Vec::new(),
            apply_basic: Vec::new(),
            apply_interface: Vec::new(),
            engine,
        }
    }

    /// Frozen configuration handed to the engine.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Queue a model to be generated from `table_name`.
    pub fn set_generate_model<I>(&mut self, table_name: impl Into<String>, opts: I)
    where
        I: IntoIterator<Item = ModelOpt>,
    {
        self.generate_model.push(GenerateModel {
            table_name: table_name.into(),
            opts: opts.into_iter().collect(),
        });
    }

    /// Queue models for basic query generation. Empty references are skipped.
    pub fn set_apply_basic<I, M>(&mut self, models: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<ModelRef>,
    {
        for model in models.into_iter().map(Into::into) {
            if model.is_empty() {
                warn!("skipping empty model reference");
                continue;
            }
            self.apply_basic.push(model);
        }
    }

    /// Queue a query interface to be applied to `models`.
    pub fn set_apply_interface<I, M>(&mut self, interface: QueryInterface, models: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<ModelRef>,
    {
        self.apply_interface.push(ApplyInterface {
            interface,
            models: models.into_iter().map(Into::into).collect(),
        });
    }

    /// Hand all queued work to the engine, then run it.
    ///
    /// Order: every generated model, one `apply_basic` call with all basic
    /// models, each interface in the order it was queued, then `execute`.
    pub fn execute(&mut self) -> Result<(), E::Error> {
        for gm in &self.generate_model {
            self.engine.generate_model(&gm.table_name, &gm.opts)?;
        }

        if !self.apply_basic.is_empty() {
            self.engine.apply_basic(&self.apply_basic)?;
        }

        for ai in &self.apply_interface {
            self.engine.apply_interface(&ai.interface, &ai.models)?;
        }

        self.engine.execute()
    }
}
