use std::path::Path;

use anyhow::Context;

use crate::data::loader::load_file;
use crate::data::model::CoordinateSet;
use crate::scene::SceneConfig;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded accident locations (None until a file is loaded).
    pub points: Option<CoordinateSet>,

    /// Declarative scene configuration handed to the renderer.
    pub scene: SceneConfig,

    /// Marker radius used by the plot boundary, in pixels.
    pub marker_radius: f32,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            points: None,
            scene: SceneConfig::default(),
            marker_radius: 2.0,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Install a freshly loaded point set, replacing the previous one.
    pub fn set_points(&mut self, points: CoordinateSet) {
        self.points = Some(points);
        self.status_message = None;
        self.loading = false;
    }

    /// Load a dataset from `path` and store either the points or a status
    /// message. Row-level rejections are not reported; only resource-level
    /// failures surface here.
    pub fn load_path(&mut self, path: &Path) {
        self.loading = true;
        let result = load_file(path).with_context(|| format!("loading {}", path.display()));
        match result {
            Ok(points) => {
                log::info!(
                    "Loaded {} accident locations from {}",
                    points.len(),
                    path.display()
                );
                self.set_points(points);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_path_installs_points_and_clears_status() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"longitude,latitude\n-122.45,37.8\n").unwrap();

        let mut state = AppState::default();
        state.status_message = Some("stale".to_string());
        state.load_path(file.path());

        assert_eq!(state.points.as_ref().map(|p| p.len()), Some(1));
        assert!(state.status_message.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn load_path_keeps_previous_points_on_resource_error() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"longitude,latitude\n-1.0,51.0\n").unwrap();

        let mut state = AppState::default();
        state.load_path(file.path());
        state.load_path(Path::new("does-not-exist.csv"));

        assert_eq!(state.points.as_ref().map(|p| p.len()), Some(1));
        assert!(state.status_message.is_some());
    }
}
