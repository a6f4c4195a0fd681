pub mod cli;
pub mod codegen;
pub mod fetch;
pub mod logging;
pub mod registry;
