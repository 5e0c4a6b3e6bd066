use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::ColorRamp;
use crate::scene::BASEMAP_STYLE_URL;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – scene settings
// ---------------------------------------------------------------------------

/// Render the left scene panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Scene");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let view = state.scene.view;
            egui::CollapsingHeader::new(RichText::new("View").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.label(format!("center: {:.4}, {:.4}", view.latitude, view.longitude));
                    ui.label(format!(
                        "zoom: {} (bounds {} to {})",
                        view.zoom, view.min_zoom, view.max_zoom
                    ));
                    ui.label(format!("pitch: {}°", view.pitch));
                    ui.label(format!("bearing: {}°", view.bearing));
                });

            let hexagon = state.scene.hexagon;
            egui::CollapsingHeader::new(RichText::new("Hexagon layer").strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    ui.label(format!("bin radius: {} m", hexagon.radius));
                    ui.label(format!("coverage: {}", hexagon.coverage));
                    ui.label(format!(
                        "elevation: {} to {} m (scale {})",
                        hexagon.elevation_range[0],
                        hexagon.elevation_range[1],
                        hexagon.elevation_scale
                    ));
                    ui.label(format!("upper percentile: {}", hexagon.upper_percentile));
                });

            let lighting = state.scene.lighting;
            egui::CollapsingHeader::new(RichText::new("Lighting").strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    ui.label(format!(
                        "ambient: rgb {:?} at intensity {}",
                        lighting.ambient.color, lighting.ambient.intensity
                    ));
                    for (i, light) in lighting.point_lights.iter().enumerate() {
                        ui.label(format!(
                            "light {}: rgb {:?} at intensity {}, {:.3}, {:.3} ({} m)",
                            i + 1,
                            light.color,
                            light.intensity,
                            light.position[1],
                            light.position[0],
                            light.position[2]
                        ));
                    }
                });

            ui.separator();

            ui.strong("Color ramp");
            ui.label(format!("{} stops", state.scene.ramp.stops().len()));
            ramp_strip(ui, &state.scene.ramp);
            ui.add_space(4.0);

            ui.strong("Points");
            ui.label(format!("layer radius: {} m", state.scene.scatter.radius));
            ui.add(
                egui::Slider::new(&mut state.marker_radius, 0.5..=8.0).text("marker radius"),
            );

            ui.separator();
            ui.strong("Basemap");
            ui.small(BASEMAP_STYLE_URL);
        });
}

/// Paint the ramp as a horizontal gradient strip.
fn ramp_strip(ui: &mut Ui, ramp: &ColorRamp) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 12.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    let steps = 48;
    let step_width = rect.width() / steps as f32;
    for i in 0..steps {
        let t = i as f64 / (steps - 1) as f64;
        let x = rect.left() + i as f32 * step_width;
        painter.rect_filled(
            egui::Rect::from_min_max(
                egui::pos2(x, rect.top()),
                egui::pos2(x + step_width, rect.bottom()),
            ),
            egui::CornerRadius::ZERO,
            ramp.sample(t),
        );
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(points) = &state.points {
            ui.label(format!("{} accident locations loaded", points.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open accident data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
