use eframe::egui::{Color32, Ui};
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;
use crate::ui::tooltip::{self, Picked};

// ---------------------------------------------------------------------------
// Map plot (central panel)
// ---------------------------------------------------------------------------

/// Hand the loaded points and scene styling to the plot boundary.
pub fn map_plot(ui: &mut Ui, state: &AppState) {
    let points = match &state.points {
        Some(p) => p,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open an accident dataset to view the map  (File → Open…)");
            });
            return;
        }
    };

    let scatter = state.scene.scatter;
    let color = Color32::from_rgb(scatter.color[0], scatter.color[1], scatter.color[2]);
    let radius = state.marker_radius;

    Plot::new("map_plot")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|_name, value| {
            let picked = Picked {
                position: [value.x, value.y],
                count: 1,
            };
            tooltip::tooltip(Some(&picked)).unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            // An empty set renders as an empty map, not an error.
            if points.is_empty() {
                return;
            }

            let positions: PlotPoints = points.iter().map(|c| c.position()).collect();
            plot_ui.points(
                Points::new(positions)
                    .name("accidents")
                    .shape(MarkerShape::Circle)
                    .color(color)
                    .radius(radius),
            );
        });
}
