use std::path::PathBuf;

/// What the locale resolver does when a locale has no exact entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocaleFallback {
    /// Exact match only; a miss is reported to the caller.
    #[default]
    Exact,
    /// A miss resolves to the default locale's entry.
    Default,
}

impl std::fmt::Display for LocaleFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocaleFallback::Exact => write!(f, "exact"),
            LocaleFallback::Default => write!(f, "default"),
        }
    }
}

impl std::str::FromStr for LocaleFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(LocaleFallback::Exact),
            "default" => Ok(LocaleFallback::Default),
            other => Err(format!("expected 'exact' or 'default', got '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment base URL from `NEXT_PUBLIC_APP_URL`, if set.
    pub base_url: Option<String>,
    pub config_dir: PathBuf,
    pub log_level: String,
    pub locale_fallback: LocaleFallback,
}
