mod config_provider;

pub use config_provider::ConfigProvider;
