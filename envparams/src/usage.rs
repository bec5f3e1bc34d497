use std::fmt::Write as _;

use crate::registry::{Parameter, Registry};

impl Registry {
    /// Human-readable description of every declared parameter, mandatory ones
    /// first, as printed on a help request or failed validation.
    ///
    /// ```text
    /// Use the following environment variables:
    ///
    /// Mandatory:
    ///   EXAMPLE_TOKEN  Token used to authenticate clients
    ///
    /// Optional:
    ///   EXAMPLE_PORT   The port to listen to (Default: 1234)
    /// ```
    pub fn usage(&self) -> String {
        let width = self
            .parameters()
            .map(|p| self.env_var(p.name()).chars().count())
            .max()
            .unwrap_or_default();

        let (mandatory, optional): (Vec<&Parameter>, Vec<&Parameter>) =
            self.parameters().partition(|p| p.is_mandatory());

        let mut usage = String::from("Use the following environment variables:\n");
        for (heading, group) in [("Mandatory", mandatory), ("Optional", optional)] {
            if group.is_empty() {
                continue;
            }

            let _ = write!(usage, "\n{heading}:\n");
            for parameter in group {
                let _ = writeln!(usage, "{}", self.usage_entry(parameter, width));
            }
        }

        usage
    }

    fn usage_entry(&self, parameter: &Parameter, width: usize) -> String {
        let mut details = parameter.description().to_owned();
        if !parameter.is_mandatory() {
            if !details.is_empty() {
                details.push(' ');
            }
            let _ = write!(details, "(Default: {})", parameter.default_value());
        }

        let env_var = self.env_var(parameter.name());
        if details.is_empty() {
            format!("  {env_var}")
        } else {
            format!("  {env_var:<width$}  {details}")
        }
    }

    pub fn print_usage(&self) {
        print!("{}", self.usage());
    }

    /// A dotenv style template listing every variable the application reads,
    /// in declaration order, with defaults filled in.
    ///
    /// ```text
    /// EXAMPLE_TOKEN=
    /// EXAMPLE_PORT=1234
    /// ```
    pub fn requirements(&self) -> String {
        let mut requirements = String::new();
        for parameter in self.parameters() {
            let _ = writeln!(
                requirements,
                "{}={}",
                self.env_var(parameter.name()),
                parameter.default_value()
            );
        }
        requirements
    }
}
