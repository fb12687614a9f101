use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(alias = "offset")]
    pub neighbor_offset: Option<u32>,
    pub per_page: Option<i64>,
    pub default_per_page: Option<i64>,
    pub max_per_page: Option<i64>,
    pub link: Option<String>,
    pub output: Option<String>,
    pub output_format: Option<String>,
    pub aria_label: Option<String>,
    pub list_class: Option<String>,
    pub active_class: Option<String>,
    pub no_color: Option<bool>,
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(home_dir()?.join(".pagewindow").join("config.yml"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn parse_config(contents: &str) -> Result<ConfigFile, String> {
    let has_content = contents.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if !has_content {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str::<ConfigFile>(contents).map_err(|e| e.to_string())
}

pub fn load_config(path: &PathBuf, allow_missing: bool) -> Result<ConfigFile, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents)
            .map_err(|e| format!("failed to parse config '{}': {e}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(ConfigFile::default())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(format!("config file not found '{}'", path.display()))
        }
        Err(e) => Err(format!("failed to read config '{}': {e}", path.display())),
    }
}

fn default_config_yaml() -> String {
    r#"# pagewindow config
#
# Location (default):
#   ~/.pagewindow/config.yml

# Window
# Pages shown on each side of the current page (window holds 5 + 2 * offset markers).
neighbor_offset: 2

# Record counts (used with --total-records)
default_per_page: 15
max_per_page: 100
# per_page: 25

# Links (optional); ':page' is replaced by the page number
# link: /admin/users?sort=id&page=:page

# Output (optional)
# output: ./pagination.html
# output_format: html

# HTML fragment
aria_label: Page navigation
list_class: admin-pagination
active_class: admin-active

# Output styling
no_color: false
"#
    .to_string()
}

pub fn ensure_default_config_file(path: &PathBuf) -> Result<bool, String> {
    if path.exists() {
        return Ok(false);
    }
    let parent = path
        .parent()
        .ok_or_else(|| format!("invalid config path '{}'", path.display()))?;
    std::fs::create_dir_all(parent).map_err(|e| {
        format!(
            "failed to create config directory '{}': {e}",
            parent.display()
        )
    })?;
    let contents = default_config_yaml();
    std::fs::write(path, contents)
        .map_err(|e| format!("failed to write config file '{}': {e}", path.display()))?;
    Ok(true)
}
