use crate::filter::{RiskCriteria, RiskCriteriaPatch, SortField, SortSpec, TimeRange, filter_risks};
use crate::records::{RecordId, RiskRecord};
use crate::state::{MapViewport, PreferencesPatch, UiState, UserPreferences};
use crate::stats::{AlertStats, compute_alert_stats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The whole dashboard's client-side state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    pub filters: RiskCriteria,
    pub sort: SortSpec,
    pub map: MapViewport,
    pub ui: UiState,
    pub preferences: UserPreferences,
    pub selected_alert: Option<RecordId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            filters: Self::default_filters(),
            sort: SortSpec::default(),
            map: MapViewport::default(),
            ui: UiState::default(),
            preferences: UserPreferences::default(),
            selected_alert: None,
        }
    }
}

impl AppState {
    /// The feed opens on the last 24 hours with every other criterion wide
    /// open.
    #[must_use]
    pub fn default_filters() -> RiskCriteria {
        RiskCriteria {
            time_range: TimeRange::LastDay,
            ..RiskCriteria::default()
        }
    }

    /// Merge a partial filter update onto the active criteria.
    pub fn update_filters(&mut self, patch: RiskCriteriaPatch) {
        self.filters.update(patch);
    }

    /// Put the filters back to their initial feed state.
    pub fn reset_filters(&mut self) {
        self.filters = Self::default_filters();
    }

    /// Merge a partial preferences update.
    pub fn update_preferences(&mut self, patch: PreferencesPatch) {
        self.preferences.update(patch);
    }

    /// Header-click sort behavior, delegated to [`SortSpec::toggle`].
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    pub fn select_alert(&mut self, id: Option<RecordId>) {
        self.selected_alert = id;
    }

    /// Select an alert and point the map at it. The camera move itself is the
    /// map layer's job; the engine only tracks which alert has focus.
    pub fn zoom_to_alert(&mut self, id: RecordId) {
        self.selected_alert = Some(id.clone());
        self.map.selected_alert = Some(id);
    }

    pub fn toggle_sidebar(&mut self) {
        self.ui.sidebar_open = !self.ui.sidebar_open;
    }

    pub fn open_inspection_drawer(&mut self, alert: RiskRecord) {
        self.selected_alert = Some(alert.id.clone());
        self.ui.inspection_drawer_open = true;
        self.ui.selected_alert = Some(alert);
    }

    pub fn close_inspection_drawer(&mut self) {
        self.ui.inspection_drawer_open = false;
        self.ui.selected_alert = None;
    }

    /// Feed contents: open risks only, then the active filters. Input order
    /// is preserved.
    #[must_use]
    pub fn filtered_alerts(&self, records: &[RiskRecord], now: DateTime<Utc>) -> Vec<RiskRecord> {
        let open: Vec<RiskRecord> = records.iter().filter(|r| r.status.is_open()).cloned().collect();
        filter_risks(&open, &self.filters, now)
    }

    /// Aggregate counts over the same open-status feed the filters see.
    #[must_use]
    pub fn alert_stats(&self, records: &[RiskRecord]) -> AlertStats {
        let open: Vec<RiskRecord> = records.iter().filter(|r| r.status.is_open()).cloned().collect();
        compute_alert_stats(&open)
    }
}
