use crate::records::{RecordId, RiskRecord};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Map camera and layer toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewport {
    /// `[lat, lng]` of the camera center.
    pub center: [f64; 2],
    pub zoom: u8,
    pub selected_alert: Option<RecordId>,
    pub show_pipeline: bool,
    pub show_heatmap: bool,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            // Center of Malaysia
            center: [4.5, 102.0],
            zoom: 8,
            selected_alert: None,
            show_pipeline: true,
            show_heatmap: false,
        }
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Chrome state for the shell around the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub sidebar_open: bool,
    pub inspection_drawer_open: bool,
    /// The record shown in the inspection drawer, when open.
    pub selected_alert: Option<RiskRecord>,
    pub theme: Theme,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            inspection_drawer_open: false,
            selected_alert: None,
            theme: Theme::Light,
        }
    }
}

/// Per-user dashboard preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub auto_refresh: bool,
    pub refresh_interval_secs: u32,
    pub notifications: bool,
    pub sound_alerts: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            refresh_interval_secs: 30,
            notifications: true,
            sound_alerts: false,
        }
    }
}

/// Partial update for [`UserPreferences`]: `None` leaves a field unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub auto_refresh: Option<bool>,
    pub refresh_interval_secs: Option<u32>,
    pub notifications: Option<bool>,
    pub sound_alerts: Option<bool>,
}

impl UserPreferences {
    /// Merge `patch` onto the current preferences; fields the patch does not
    /// name keep their values.
    pub fn update(&mut self, patch: PreferencesPatch) {
        if let Some(auto_refresh) = patch.auto_refresh {
            self.auto_refresh = auto_refresh;
        }
        if let Some(secs) = patch.refresh_interval_secs {
            self.refresh_interval_secs = secs;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(sound_alerts) = patch.sound_alerts {
            self.sound_alerts = sound_alerts;
        }
    }
}
