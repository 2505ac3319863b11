//! Application settings read from environment variables

use bibo_core::EnumResult;

use crate::{CacheDriver, DatabaseDriver, Environment, LogLevel, ResponseBufferSize};

pub const APP_ENV_VAR: &str = "APP_ENV";
pub const CACHE_DRIVER_VAR: &str = "CACHE_DRIVER";
pub const DB_DRIVER_VAR: &str = "DB_DRIVER";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const BUFFER_SIZE_VAR: &str = "RESPONSE_BUFFER_SIZE";

/// Application settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppSettings {
    pub environment: Environment,
    pub cache_driver: CacheDriver,
    pub database_driver: DatabaseDriver,
    pub log_level: LogLevel,
    pub buffer_size: ResponseBufferSize,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            environment: Environment::Production,
            cache_driver: CacheDriver::File,
            database_driver: DatabaseDriver::Mysql,
            log_level: LogLevel::Info,
            buffer_size: ResponseBufferSize::Default,
        }
    }
}

impl AppSettings {
    /// Build settings from a key lookup.
    ///
    /// Missing keys keep their default; a present but unrecognized value is
    /// an error.
    pub fn from_lookup<F>(lookup: F) -> EnumResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = AppSettings::default();

        if let Some(v) = lookup(APP_ENV_VAR) {
            settings.environment = Environment::parse(&v)?;
        }
        if let Some(v) = lookup(CACHE_DRIVER_VAR) {
            settings.cache_driver = CacheDriver::parse(&v)?;
        }
        if let Some(v) = lookup(DB_DRIVER_VAR) {
            settings.database_driver = DatabaseDriver::parse(&v)?;
        }
        if let Some(v) = lookup(LOG_LEVEL_VAR) {
            settings.log_level = LogLevel::parse(&v)?;
        }
        if let Some(v) = lookup(BUFFER_SIZE_VAR) {
            settings.buffer_size = ResponseBufferSize::parse(&v)?;
        }

        tracing::debug!(
            environment = %settings.environment,
            cache = %settings.cache_driver,
            database = %settings.database_driver,
            log_level = %settings.log_level,
            buffer = settings.buffer_size.to_bytes(),
            "loaded app settings"
        );
        Ok(settings)
    }

    /// Build settings from the process environment
    pub fn from_env() -> EnumResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_lookup_yields_defaults() {
        let settings = AppSettings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(settings.environment.is_production());
    }

    #[test]
    fn test_values_are_parsed_case_insensitively() {
        let settings = AppSettings::from_lookup(lookup_from(&[
            ("APP_ENV", "Staging"),
            ("CACHE_DRIVER", "REDIS"),
            ("DB_DRIVER", "PostgreSQL"),
            ("LOG_LEVEL", "debug"),
            ("RESPONSE_BUFFER_SIZE", "16384"),
        ]))
        .unwrap();

        assert_eq!(settings.environment, Environment::Staging);
        assert_eq!(settings.cache_driver, CacheDriver::Redis);
        assert_eq!(settings.database_driver, DatabaseDriver::Postgresql);
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.buffer_size, ResponseBufferSize::Large);
    }

    #[test]
    fn test_invalid_value_surfaces_owner_error() {
        let err = AppSettings::from_lookup(lookup_from(&[("CACHE_DRIVER", "invalid")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid cache driver: invalid");

        let err = AppSettings::from_lookup(lookup_from(&[("RESPONSE_BUFFER_SIZE", "7")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid response buffer size: 7");
    }

    // Only test in this crate that touches the process environment
    #[test]
    fn test_from_env_reads_process_environment() {
        let vars = [
            (APP_ENV_VAR, "testing"),
            (CACHE_DRIVER_VAR, "memory"),
            (DB_DRIVER_VAR, "sqlite"),
            (LOG_LEVEL_VAR, "warning"),
            (BUFFER_SIZE_VAR, "4096"),
        ];
        for (key, value) in vars {
            std::env::set_var(key, value);
        }

        let settings = AppSettings::from_env().unwrap();
        assert_eq!(settings.environment, Environment::Testing);
        assert_eq!(settings.cache_driver, CacheDriver::Memory);
        assert_eq!(settings.database_driver, DatabaseDriver::Sqlite);
        assert_eq!(settings.log_level, LogLevel::Warning);
        assert_eq!(settings.buffer_size, ResponseBufferSize::Small);

        std::env::set_var(CACHE_DRIVER_VAR, "tape");
        let err = AppSettings::from_env().unwrap_err();
        assert_eq!(err.to_string(), "Invalid cache driver: tape");

        for (key, _) in vars {
            std::env::remove_var(key);
        }
    }
}
