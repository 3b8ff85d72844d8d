pub mod config;
pub mod mode;

pub use config::{GeneratorConfig, default_mode, default_model_pkg_path, default_out_path};
pub use mode::GenerateMode;
