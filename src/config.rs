use lazy_static::lazy_static;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::ConfigError;

/// Environment variable naming the INI file to load
pub const CONFIG_ENV: &str = "GL_TRANSFORM_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "transform.ini";

pub const DEFAULT_EXIT_CODE: i32 = 1;

// Unix keeps only the low byte of an exit status
pub const EXIT_CODES: RangeInclusive<i32> = 1..=255;

lazy_static! {
    pub static ref CONFIG: Config = match std::env::var(CONFIG_ENV) {
        Ok(path) => load_config(&path),
        Err(_) => load_default_config(DEFAULT_CONFIG_PATH),
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    // Enforce precondition checks through the fatal diagnostic
    pub checks: bool,
    // Process status after a fatal diagnostic; within EXIT_CODES
    pub exit_code: i32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            checks: cfg!(debug_assertions),
            exit_code: DEFAULT_EXIT_CODE,
        }
    }
}

impl Config {
    pub fn from_ini(settings: &ini::Ini) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = load_section_setting(settings, "checks", "enabled") {
            config.checks = parse_bool(&value).ok_or(ConfigError::Invalid {
                section: "checks",
                setting: "enabled",
                value: value.clone(),
            })?;
        }

        if let Some(value) = load_section_setting(settings, "diagnostics", "exit_code") {
            config.exit_code = value.trim().parse::<i32>().ok()
                .filter(|code| EXIT_CODES.contains(code))
                .ok_or(ConfigError::Invalid {
                    section: "diagnostics",
                    setting: "exit_code",
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }
}

pub fn try_load_config(filename: &str) -> Result<Config, ConfigError> {
    let settings = ini::Ini::load_from_file(filename)
        .map_err(|err| ConfigError::Parse(err.msg))?;

    let config = Config::from_ini(&settings)?;
    log::info!("Loaded config from \"{}\": {:?}", filename, config);

    Ok(config)
}

/// Explicitly requested config; missing files fall back to defaults,
/// malformed files are fatal
pub fn load_config(filename: &str) -> Config {
    if !Path::new(filename).exists() {
        log::debug!("No config at \"{}\", using defaults", filename);

        return Config::default();
    }

    match try_load_config(filename) {
        Ok(config) => config,
        Err(err) => panic!("{}", err),
    }
}

/// Config picked up implicitly from the working directory.
/// A bad file here is ignored so builders stay panic-free.
pub fn load_default_config(filename: &str) -> Config {
    if !Path::new(filename).exists() {
        log::debug!("No config at \"{}\", using defaults", filename);

        return Config::default();
    }

    try_load_config(filename).unwrap_or_else(|err| {
        log::warn!("Ignoring config at \"{}\": {}", filename, err);
        Config::default()
    })
}

pub fn load_section_setting(
    settings: &ini::Ini,
    section: &str,
    setting: &str,
) -> Option<String> {
    settings.section(Some(section))
        .and_then(|properties| properties.get(setting))
        .cloned()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;

    fn parse(source: &str) -> Config {
        let settings = ini::Ini::load_from_str(source)
            .unwrap_or_else(|err| panic!("{}", err.msg));

        Config::from_ini(&settings).unwrap_or_else(|err| panic!("{}", err))
    }

    fn write_temp(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!(
            "gl_transform_{}_{}.ini",
            std::process::id(),
            name,
        ));

        std::fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn defaults_without_sections() {
        let config = parse("");
        assert!(config == Config::default());
        assert!(config.checks == cfg!(debug_assertions));
        assert!(config.exit_code == DEFAULT_EXIT_CODE);
    }

    #[test]
    fn read_settings() {
        let config = parse("[checks]\nenabled = off\n[diagnostics]\nexit_code = 3\n");
        assert!(!config.checks);
        assert!(config.exit_code == 3);

        let config = parse("[diagnostics]\nexit_code = 255\n");
        assert!(config.exit_code == 255);

        let config = parse("[checks]\nenabled = true\n");
        assert!(config.checks);
        assert!(config.exit_code == DEFAULT_EXIT_CODE);
    }

    #[test]
    #[should_panic(expected = "exit_code")]
    fn reject_zero_exit_code() {
        parse("[diagnostics]\nexit_code = 0\n");
    }

    #[test]
    #[should_panic(expected = "exit_code")]
    fn reject_wrapping_exit_code() {
        // Truncates to status 0
        parse("[diagnostics]\nexit_code = 256\n");
    }

    #[test]
    fn reject_out_of_range_exit_codes() {
        for code in ["-1", "-256", "512", "nope"].iter() {
            let settings = ini::Ini::load_from_str(
                &format!("[diagnostics]\nexit_code = {}\n", code),
            ).unwrap_or_else(|err| panic!("{}", err.msg));

            let result = Config::from_ini(&settings);
            eprintln!("{}: {:?}", code, result);
            assert!(result.is_err());
        }
    }

    #[test]
    #[should_panic(expected = "enabled")]
    fn reject_bad_flag() {
        parse("[checks]\nenabled = sometimes\n");
    }

    #[test]
    fn missing_file() {
        assert!(load_config("does/not/exist.ini") == Config::default());
        assert!(load_default_config("does/not/exist.ini") == Config::default());
    }

    #[test]
    fn stray_bad_file_is_ignored() {
        let path = write_temp("stray", "[checks]\nenabled = sometimes\n");

        assert!(try_load_config(&path).is_err());
        assert!(load_default_config(&path) == Config::default());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    #[should_panic(expected = "enabled")]
    fn requested_bad_file_is_fatal() {
        let path = write_temp("requested", "[checks]\nenabled = sometimes\n");
        load_config(&path);
    }

    #[test]
    fn load_good_file() {
        let path = write_temp("good", "[diagnostics]\nexit_code = 7\n");
        let config = load_default_config(&path);
        let _ = std::fs::remove_file(&path);

        assert!(config.exit_code == 7);
    }
}
