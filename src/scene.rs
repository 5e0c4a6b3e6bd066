use crate::color::ColorRamp;

// ---------------------------------------------------------------------------
// Scene configuration handed to the renderer
// ---------------------------------------------------------------------------
//
// These are the literal presentation values of the demo. They are plain data
// owned by the application state and passed into the rendering call; the
// renderer decides what it can consume (a tile-capable renderer uses the
// basemap style and hexagon parameters, the built-in plot boundary uses the
// scatter styling and the ramp).

/// Map style consumed by a tile-capable renderer.
pub const BASEMAP_STYLE_URL: &str =
    "https://basemaps.cartocdn.com/gl/dark-matter-nolabels-gl-style/style.json";

/// Initial camera over the Seattle area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Camera tilt in degrees.
    pub pitch: f64,
    /// Camera rotation in degrees, counter-clockwise from north.
    pub bearing: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            longitude: -122.3321,
            latitude: 47.6062,
            zoom: 5.0,
            min_zoom: 3.0,
            max_zoom: 15.0,
            pitch: 40.5,
            bearing: -27.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [u8; 3],
    pub intensity: f32,
}

/// A positioned light: longitude, latitude, altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: [u8; 3],
    pub intensity: f32,
    pub position: [f64; 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub point_lights: [PointLight; 2],
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: [255, 255, 255],
                intensity: 1.0,
            },
            point_lights: [
                PointLight {
                    color: [255, 255, 255],
                    intensity: 0.8,
                    position: [-0.144528, 49.739968, 80_000.0],
                },
                PointLight {
                    color: [255, 255, 255],
                    intensity: 0.8,
                    position: [-3.807751, 54.104682, 8_000.0],
                },
            ],
        }
    }
}

/// Parameters of the hexagon-binned density layer, consumed by an
/// aggregation-capable renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexagonLayer {
    /// Bin radius in meters.
    pub radius: f64,
    /// Fraction of the bin radius each hexagon covers.
    pub coverage: f64,
    /// Extrusion height range in meters, mapped from bin counts.
    pub elevation_range: [f64; 2],
    pub elevation_scale: f64,
    /// Percentile cutoff above which bins are hidden.
    pub upper_percentile: f64,
}

impl Default for HexagonLayer {
    fn default() -> Self {
        Self {
            radius: 2000.0,
            coverage: 1.0,
            elevation_range: [0.0, 3000.0],
            elevation_scale: 50.0,
            upper_percentile: 100.0,
        }
    }
}

/// Styling of the scatter-point overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterLayer {
    pub color: [u8; 3],
    /// Point radius in meters.
    pub radius: f64,
}

impl Default for ScatterLayer {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            radius: 100.0,
        }
    }
}

/// The full declarative scene: camera, lighting, color ramp, and layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneConfig {
    pub view: ViewState,
    pub lighting: Lighting,
    pub ramp: ColorRamp,
    pub hexagon: HexagonLayer,
    pub scatter: ScatterLayer,
}
