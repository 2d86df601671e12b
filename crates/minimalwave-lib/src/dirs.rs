use std::env;
use std::path::PathBuf;

pub const APP_DIR: &str = "minimalwave";

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

pub fn user_config() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(PathBuf::from)
    }
    #[cfg(target_os = "macos")]
    {
        user_home().map(|p| p.join("Library/Application Support"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| user_home().map(|p| p.join(".config")))
    }
}

pub fn user_cache() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("LOCALAPPDATA").map(PathBuf::from)
    }
    #[cfg(target_os = "macos")]
    {
        user_home().map(|p| p.join("Library/Caches"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| user_home().map(|p| p.join(".cache")))
    }
}

/// `<user-cache-dir>/minimalwave`
pub fn default_cache_dir() -> Option<PathBuf> {
    user_cache().map(|p| p.join(APP_DIR))
}

/// `<user-config-dir>/minimalwave/config.toml`
pub fn default_config_file() -> Option<PathBuf> {
    user_config().map(|p| p.join(APP_DIR).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cache_dir_ends_with_app_dir() {
        if let Some(dir) = default_cache_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
    }

    #[test]
    fn test_default_config_file_location() {
        if let Some(file) = default_config_file() {
            assert!(file.ends_with("minimalwave/config.toml"));
        }
    }

    #[test]
    fn test_user_cache_platform_specific() {
        let cache = user_cache();
        #[cfg(target_os = "windows")]
        {
            assert!(cache.is_none() || cache.unwrap().is_absolute());
        }
        #[cfg(target_os = "macos")]
        {
            assert!(cache.is_none() || cache.unwrap().to_string_lossy().contains("Caches"));
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            if env::var_os("XDG_CACHE_HOME").is_none() {
                assert!(cache.is_none() || cache.unwrap().to_string_lossy().contains(".cache"));
            }
        }
    }
}
