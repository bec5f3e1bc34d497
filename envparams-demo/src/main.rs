use envparams::Registry;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = Registry::new();
    config
        .set_prefix("EXAMPLE_")
        .mandatory_string("TOKEN", "Token used to authenticate clients")
        .mandatory_string("REGION", "Region the service is deployed in")
        .optional_int("PORT", "The port to listen to", 1234)
        .optional_string("HOST", "The host to listen to", "0.0.0.0")
        .optional_bool("DEBUG", "Start in debug mode", true);
    config.parse();

    let region = config.get_string("REGION");
    let host = config.get_string("HOST");
    let port = config.get_int("PORT");
    let debug_mode = config.get_bool("DEBUG");

    tracing::info!(%region, %host, port, debug = debug_mode, "configuration loaded");
    println!("Region: {region}, Host: {host}, Port: {port}, Debug: {debug_mode}");
}
