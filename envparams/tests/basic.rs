use envparams::Registry;

#[test]
fn env_variable_parsing() {
    let mut config = Registry::new();
    config.mandatory_string("DATABASE_URL", "Database connection string");

    let actual = temp_env::with_var(
        "DATABASE_URL",
        Some("postgres://postgres@postgres/postgres"),
        || config.get_string("DATABASE_URL"),
    );

    assert_eq!("postgres://postgres@postgres/postgres", actual);
}

#[test]
fn default_value_fallback() {
    let mut config = Registry::new();
    config
        .optional_int("BASIC_DEFAULT_PORT", "Port", 1234)
        .optional_string("BASIC_DEFAULT_HOST", "Host", "0.0.0.0")
        .optional_bool("BASIC_DEFAULT_DEBUG", "Debug", true);

    temp_env::with_vars_unset(
        [
            "BASIC_DEFAULT_PORT",
            "BASIC_DEFAULT_HOST",
            "BASIC_DEFAULT_DEBUG",
        ],
        || {
            assert_eq!(1234, config.get_int("BASIC_DEFAULT_PORT"));
            assert_eq!("0.0.0.0", config.get_string("BASIC_DEFAULT_HOST"));
            assert!(config.get_bool("BASIC_DEFAULT_DEBUG"));
        },
    );
}

#[test]
fn empty_value_counts_as_unset() {
    let mut config = Registry::new();
    config.optional_string("BASIC_EMPTY_HOST", "Host", "localhost");

    let actual = temp_env::with_var("BASIC_EMPTY_HOST", Some(""), || {
        config.get_string("BASIC_EMPTY_HOST")
    });

    assert_eq!("localhost", actual);
}

#[test]
fn prefix_is_prepended_to_lookups() {
    let mut config = Registry::new();
    config.set_prefix("PREFIX_");
    config.optional_int("PORT", "Port", 1);

    let actual = temp_env::with_vars(
        [("PREFIX_PORT", Some("9999")), ("PORT", Some("1111"))],
        || config.get_int("PORT"),
    );

    assert_eq!(9999, actual);
}

#[test]
fn prefix_can_be_set_after_declaring() {
    let mut config = Registry::new();
    config.optional_string("NAME", "Name", "default");
    config.set_prefix("LATE_PREFIX_");

    let actual = temp_env::with_var("LATE_PREFIX_NAME", Some("late"), || {
        config.get_string("NAME")
    });

    assert_eq!("late", actual);
}

#[test]
fn bool_values() {
    let mut config = Registry::new();
    config.optional_bool("BASIC_BOOL_FLAG", "Flag", true);

    for value in ["true", "TRUE", "1", "yes", "Yes", "on", "ON"] {
        let actual = temp_env::with_var("BASIC_BOOL_FLAG", Some(value), || {
            config.get_bool("BASIC_BOOL_FLAG")
        });
        assert!(actual, "{value}");
    }

    for value in ["false", "0", "off", "nope", "enabled"] {
        let actual = temp_env::with_var("BASIC_BOOL_FLAG", Some(value), || {
            config.get_bool("BASIC_BOOL_FLAG")
        });
        assert!(!actual, "{value}");
    }
}

#[test]
fn empty_bool_reverts_to_default() {
    let mut config = Registry::new();
    config
        .optional_bool("BASIC_EMPTY_ON", "", true)
        .optional_bool("BASIC_EMPTY_OFF", "", false);

    temp_env::with_vars(
        [("BASIC_EMPTY_ON", Some("")), ("BASIC_EMPTY_OFF", Some(""))],
        || {
            assert!(config.get_bool("BASIC_EMPTY_ON"));
            assert!(!config.get_bool("BASIC_EMPTY_OFF"));
        },
    );
}

#[test]
fn redeclaring_overwrites_everything() {
    let mut config = Registry::new();
    config
        .describe_int("BASIC_REDECLARED", "first", true, 1)
        .describe_int("BASIC_REDECLARED", "second", false, 2);

    let parameter = config.parameter("BASIC_REDECLARED").unwrap();
    assert_eq!("second", parameter.description());
    assert!(!parameter.is_mandatory());

    temp_env::with_var_unset("BASIC_REDECLARED", || {
        assert!(config.validate().is_ok());
        assert_eq!(2, config.get_int("BASIC_REDECLARED"));
    });
}

#[test]
fn mandatory_default_is_returned_when_unset() {
    let mut config = Registry::new();
    config.describe_string("BASIC_MANDATORY_DEFAULT", "", true, "fallback");

    temp_env::with_var_unset("BASIC_MANDATORY_DEFAULT", || {
        assert!(config.validate().is_err());
        assert_eq!("fallback", config.get_string("BASIC_MANDATORY_DEFAULT"));
    });
}

#[test]
fn undeclared_names_do_not_panic() {
    let config = Registry::new();

    temp_env::with_vars_unset(["BASIC_UNDECLARED", "BASIC_UNDECLARED_BOOL"], || {
        assert_eq!("", config.get_string("BASIC_UNDECLARED"));
        assert!(!config.get_bool("BASIC_UNDECLARED_BOOL"));
        assert!(config.try_get_int("BASIC_UNDECLARED").is_err());
    });
}

#[test]
fn validation_passes_when_mandatory_values_are_set() {
    let mut config = Registry::with_prefix("VALID_");
    config
        .mandatory_string("TOKEN", "Token")
        .mandatory_int("WORKERS", "Workers")
        .optional_int("PORT", "Port", 80);

    let result = temp_env::with_vars(
        [
            ("VALID_TOKEN", Some("secret")),
            ("VALID_WORKERS", Some("4")),
            ("VALID_PORT", None),
        ],
        || config.try_parse_from(["app"]),
    );

    assert!(result.is_ok());
}
