use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color ramp: density fraction → Color32
// ---------------------------------------------------------------------------

/// The six RGB stops of the density ramp, from low counts to high.
pub const COLOR_RANGE: [[u8; 3]; 6] = [
    [1, 152, 189],
    [73, 227, 206],
    [216, 254, 181],
    [254, 237, 177],
    [254, 173, 84],
    [209, 55, 78],
];

/// An ordered sequence of color stops sampled by linear interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<[u8; 3]>,
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::new(COLOR_RANGE.to_vec())
    }
}

impl ColorRamp {
    pub fn new(stops: Vec<[u8; 3]>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[[u8; 3]] {
        &self.stops
    }

    /// Sample the ramp at `t` in `[0, 1]`. Interpolation happens in linear
    /// RGB between the two surrounding stops; `t` is clamped.
    pub fn sample(&self, t: f64) -> Color32 {
        let Some(&first) = self.stops.first() else {
            return Color32::GRAY;
        };
        if self.stops.len() == 1 || !t.is_finite() {
            return to_color32(first);
        }

        let t = t.clamp(0.0, 1.0);
        let scaled = t * (self.stops.len() - 1) as f64;
        let i = (scaled.floor() as usize).min(self.stops.len() - 2);
        let frac = (scaled - i as f64) as f32;

        let a = to_linear(self.stops[i]);
        let b = to_linear(self.stops[i + 1]);
        let mixed = a.mix(b, frac);
        let srgb = Srgb::<f32>::from_linear(mixed).into_format::<u8>();
        Color32::from_rgb(srgb.red, srgb.green, srgb.blue)
    }
}

fn to_linear(rgb: [u8; 3]) -> LinSrgb {
    Srgb::new(rgb[0], rgb[1], rgb[2])
        .into_format::<f32>()
        .into_linear()
}

fn to_color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_the_first_and_last_stops() {
        let ramp = ColorRamp::default();
        assert_eq!(ramp.sample(0.0), Color32::from_rgb(1, 152, 189));
        assert_eq!(ramp.sample(1.0), Color32::from_rgb(209, 55, 78));
    }

    #[test]
    fn stop_positions_return_the_configured_stops() {
        let ramp = ColorRamp::default();
        // With 6 stops, t = 1/5 lands exactly on the second stop.
        assert_eq!(ramp.sample(0.2), Color32::from_rgb(73, 227, 206));
    }

    #[test]
    fn out_of_range_input_clamps() {
        let ramp = ColorRamp::default();
        assert_eq!(ramp.sample(-3.0), ramp.sample(0.0));
        assert_eq!(ramp.sample(7.0), ramp.sample(1.0));
    }

    #[test]
    fn degenerate_ramps_fall_back() {
        assert_eq!(ColorRamp::new(Vec::new()).sample(0.5), Color32::GRAY);
        let single = ColorRamp::new(vec![[10, 20, 30]]);
        assert_eq!(single.sample(0.9), Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn default_ramp_has_six_stops() {
        assert_eq!(ColorRamp::default().stops().len(), 6);
    }
}
