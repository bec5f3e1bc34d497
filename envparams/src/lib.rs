//! Declare the environment variables an application reads, validate that the
//! mandatory ones are present and generate usage text from the declarations.
mod error;
pub mod parser;
mod registry;
mod usage;

pub use error::{ConfigError, ConfigErrors, ParseError};
pub use parser::{Parser, ParserResult};
pub use registry::{EXIT_FAILURE, HELP_ARGUMENTS, Parameter, Registry};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
