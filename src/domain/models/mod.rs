pub mod config;
pub mod credential;
pub mod environment;

pub use config::{
    AwsCliConfig, Config, HeuristicConfig, LogFormat, LoggingConfig, PlatformConfig,
    RotationPolicy, TargetConfig,
};
pub use credential::{mask_secret, AwsConfigKey, CredentialPair, CredentialRecord};
pub use environment::EnvSnapshot;
