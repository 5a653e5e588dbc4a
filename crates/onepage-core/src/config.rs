use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            menu: MenuConfig::default(),
            scroll: ScrollConfig::default(),
            indicator: IndicatorConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Behavior of a menu instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// React to mouse movement with hover state
    #[serde(default = "default_true")]
    pub hover_enabled: bool,
    /// Animate the viewport when a menu item is clicked
    #[serde(default = "default_true")]
    pub animate_scroll_on_click: bool,
    /// Animate the indicator when the active item changes
    #[serde(default = "default_true")]
    pub animate_indicator: bool,
    /// Update the location fragment on activation
    #[serde(default)]
    pub update_location: bool,
    /// Record location updates as history entries (fallback: direct assignment)
    #[serde(default = "default_true")]
    pub use_history: bool,
    /// Clicking a `#fragment` link inside the document body activates the
    /// matching menu item
    #[serde(default)]
    pub bind_inline_links: bool,
    /// Extra rows added to the viewport on both ends when deciding which
    /// section counts as in view
    #[serde(default)]
    pub viewport_threshold: u16,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            hover_enabled: default_true(),
            animate_scroll_on_click: default_true(),
            animate_indicator: default_true(),
            update_location: false,
            use_history: default_true(),
            bind_inline_links: false,
            viewport_threshold: 0,
        }
    }
}

/// Easing curve for scroll and indicator animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Scroll animation duration in milliseconds (0 disables animation)
    #[serde(default = "default_scroll_duration")]
    pub duration_ms: u64,
    /// Easing function for programmatic scrolls
    #[serde(default = "default_easing")]
    pub easing: EasingType,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_scroll_duration(),
            easing: default_easing(),
        }
    }
}

impl ScrollConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Whether programmatic scrolls animate at all
    pub fn is_smooth(&self) -> bool {
        self.duration_ms > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Indicator animation duration in milliseconds; absent means the
    /// indicator moves instantly
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Marker drawn next to the active menu item
    #[serde(default = "default_indicator_glyph")]
    pub glyph: String,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            duration_ms: None,
            easing: default_easing(),
            glyph: default_indicator_glyph(),
        }
    }
}

impl IndicatorConfig {
    /// Animation duration, when one is configured and non-zero
    pub fn duration(&self) -> Option<Duration> {
        match self.duration_ms {
            Some(ms) if ms > 0 => Some(Duration::from_millis(ms)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while an animation is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Width of the menu pane in columns
    #[serde(default = "default_menu_width")]
    pub menu_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            menu_width: default_menu_width(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_scroll_duration() -> u64 {
    250
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_indicator_glyph() -> String {
    "▌".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u16 {
    60
}

fn default_menu_width() -> u16 {
    24
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/onepage/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("onepage")
            .join("config.toml")
    }
}
