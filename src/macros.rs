//! This module contains the macros used in the project.

/// Look a setting up in the config file, then in the environment
macro_rules! config_value {
    ($config:ident, $setting_name:ident, $key_name:ident, $env_var:literal) => {
        match $config
            .config_data
            .$setting_name
            .as_ref()
            .and_then(|c| c.$key_name.clone())
        {
            Some(value) => Some(value),
            None => std::env::var($env_var).ok().filter(|v| !v.is_empty()),
        }
    };
}

/// Required setting: missing from both places is a config error
macro_rules! config_value_wrap {
    ($config:ident, $setting_name:ident, $key_name:ident, $env_var:literal) => {
        match $crate::macros::config_value!($config, $setting_name, $key_name, $env_var) {
            Some(value) => value,
            None => {
                return Err($crate::errors::MigrateError::new(
                    $crate::errors::MigrateErrorKind::Config,
                )
                .with_text(concat!(
                    "missing ",
                    stringify!($setting_name),
                    ".",
                    stringify!($key_name),
                    " (config file or ",
                    $env_var,
                    ")"
                )))
            }
        }
    };
}

/// Secret setting: missing from both places only warns
macro_rules! config_password_wrap {
    ($config:ident, $setting_name:ident, $key_name:ident, $env_var:literal) => {
        match $crate::macros::config_value!($config, $setting_name, $key_name, $env_var) {
            Some(value) => value,
            None => {
                log::warn!(concat!(
                    $env_var,
                    " is not set, authenticated calls will fail"
                ));
                String::new()
            }
        }
    };
}

pub(crate) use config_password_wrap;
pub(crate) use config_value;
pub(crate) use config_value_wrap;
