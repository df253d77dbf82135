#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Values from `configuration.yaml`, overridable with APP_* variables
    // (APP_APP_PORT=9000)
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?;

    settings.try_deserialize()
}
