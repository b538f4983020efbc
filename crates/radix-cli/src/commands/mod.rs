pub mod config_ops;
pub mod convert_ops;
pub mod interactive;
