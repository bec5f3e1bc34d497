use std::{ffi::OsStr, process};

use tracing::{debug, warn};

use crate::{
    error::{ConfigError, ConfigErrors, ParseError},
    parser::{self, Parser},
};

/// First arguments that ask for usage information instead of running.
pub const HELP_ARGUMENTS: [&str; 4] = ["help", "--help", "-help", "-h"];

/// Exit status used by every fatal path.
pub const EXIT_FAILURE: i32 = 1;

/// A single declared configuration parameter.
///
/// Values are kept as text whatever their declared type; the typed getters on
/// [`Registry`] convert at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    description: String,
    mandatory: bool,
    default_value: String,
}

impl Parameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }
}

/// The set of parameters an application reads from its environment.
///
/// Build it once at startup, declare every parameter, call
/// [`parse`](Self::parse) and then hand it (or references to it) to whatever
/// needs configuration.
///
/// ```no_run
/// use envparams::Registry;
///
/// let mut config = Registry::with_prefix("EXAMPLE_");
/// config
///     .optional_int("PORT", "The port to listen to", 1234)
///     .optional_string("HOST", "The host to listen to", "0.0.0.0")
///     .optional_bool("DEBUG", "Start in debug mode", true);
/// config.parse();
///
/// let port = config.get_int("PORT");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    parameters: Vec<Parameter>,
    prefix: String,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            parameters: Vec::new(),
            prefix: prefix.into(),
        }
    }

    /// Sets the prefix prepended to every parameter name when reading the
    /// environment, e.g. `EXAMPLE_` so that `PORT` is read from
    /// `EXAMPLE_PORT`.
    ///
    /// Declared names are stored without the prefix, so this can be called
    /// before or after declaring parameters.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The environment variable backing `name`.
    pub fn env_var(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Declares a string parameter, replacing any earlier declaration with the
    /// same name.
    pub fn describe_string(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        mandatory: bool,
        default_value: impl Into<String>,
    ) -> &mut Self {
        let parameter = Parameter {
            name: name.into(),
            description: description.into(),
            mandatory,
            default_value: default_value.into(),
        };

        match self.parameters.iter_mut().find(|p| p.name == parameter.name) {
            Some(existing) => *existing = parameter,
            None => self.parameters.push(parameter),
        }
        self
    }

    pub fn describe_int(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        mandatory: bool,
        default_value: i64,
    ) -> &mut Self {
        self.describe_string(name, description, mandatory, default_value.to_string())
    }

    pub fn describe_bool(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        mandatory: bool,
        default_value: bool,
    ) -> &mut Self {
        self.describe_string(name, description, mandatory, default_value.to_string())
    }

    pub fn mandatory_string(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.describe_string(name, description, true, String::new())
    }

    pub fn mandatory_int(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.describe_string(name, description, true, String::new())
    }

    pub fn mandatory_bool(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.describe_string(name, description, true, String::new())
    }

    pub fn optional_string(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        default_value: impl Into<String>,
    ) -> &mut Self {
        self.describe_string(name, description, false, default_value)
    }

    pub fn optional_int(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        default_value: i64,
    ) -> &mut Self {
        self.describe_int(name, description, false, default_value)
    }

    pub fn optional_bool(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        default_value: bool,
    ) -> &mut Self {
        self.describe_bool(name, description, false, default_value)
    }

    /// Declared parameters in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Checks that every mandatory parameter has a non-empty value, collecting
    /// all that don't.
    pub fn validate(&self) -> Result<(), ConfigErrors> {
        let mut errors = ConfigErrors::new();

        for parameter in self.parameters.iter().filter(|p| p.mandatory) {
            if self.lookup(&parameter.name).is_none() {
                errors.add(ConfigError::MissingEnv {
                    env_var: self.env_var(&parameter.name),
                });
            }
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            debug!(
                prefix = %self.prefix,
                parameters = self.parameters.len(),
                "configuration validated"
            );
            Ok(())
        }
    }

    /// Non-exiting version of [`parse_from`](Self::parse_from).
    ///
    /// `args` includes the program name; only the argument after it is
    /// inspected. A help request short-circuits validation.
    pub fn try_parse_from<I>(&self, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        if let Some(argument) = args.into_iter().nth(1) {
            let argument = argument.as_ref().to_string_lossy().into_owned();
            if HELP_ARGUMENTS.contains(&argument.to_lowercase().as_str()) {
                return Err(ParseError::HelpRequested { argument });
            }
        }

        self.validate().map_err(ParseError::from)
    }

    /// Validates the process environment against the declared parameters.
    ///
    /// Prints usage and exits with [`EXIT_FAILURE`] when the first command-line
    /// argument asks for help, or when mandatory parameters are missing. Use
    /// [`try_parse_from`](Self::try_parse_from) to handle those cases yourself.
    pub fn parse(&self) {
        self.parse_from(std::env::args_os());
    }

    pub fn parse_from<I>(&self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        match self.try_parse_from(args) {
            Ok(()) => {}
            Err(ParseError::HelpRequested { .. }) => {
                self.print_usage();
                process::exit(EXIT_FAILURE);
            }
            Err(ParseError::Invalid(errors)) => {
                for error in errors.iter() {
                    eprintln!("Error: {error}");
                }
                eprint!("\n{}", self.usage());
                process::exit(EXIT_FAILURE);
            }
        }
    }

    /// The environment value for `name`, or its declared default when the
    /// variable is unset or empty.
    ///
    /// Undeclared names fall back to an empty string.
    pub fn get_string(&self, name: &str) -> String {
        if let Some(value) = self.lookup(name) {
            return value;
        }

        let default_value = self
            .parameter(name)
            .map(Parameter::default_value)
            .unwrap_or_default();
        debug!(
            env_var = %self.env_var(name),
            default_value = %default_value,
            "environment variable not set, using default"
        );
        default_value.to_owned()
    }

    /// Resolves `name` like [`get_string`](Self::get_string) and converts it
    /// with `parser`.
    pub fn get_with<T, P>(&self, name: &str, parser: P) -> Result<T, ConfigError>
    where
        P: Parser<T>,
    {
        let value = self.get_string(name);
        parser
            .parse(&value)
            .map_err(|error| ConfigError::ParseError {
                env_var: self.env_var(name),
                value,
                error,
            })
    }

    pub fn try_get_int(&self, name: &str) -> Result<i64, ConfigError> {
        self.get_with(name, parser::from_str::<i64>)
    }

    /// Integer value of `name`.
    ///
    /// A value that is not a base-10 integer is reported and the process
    /// exits with [`EXIT_FAILURE`].
    pub fn get_int(&self, name: &str) -> i64 {
        self.try_get_int(name).unwrap_or_else(|error| {
            eprintln!("Error: {error}");
            process::exit(EXIT_FAILURE);
        })
    }

    /// `true` for `true`, `1`, `yes` or `on` in any casing, `false` for
    /// anything else.
    pub fn get_bool(&self, name: &str) -> bool {
        let value = self.get_string(name);
        let truthy = parser::is_truthy(&value);
        if !truthy && !parser::is_falsy(&value) {
            warn!(
                env_var = %self.env_var(name),
                value = %value,
                "unrecognised boolean value, treating as false"
            );
        }
        truthy
    }

    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(self.env_var(name))
            .ok()
            .filter(|value| !value.is_empty())
    }
}
