// ---------------------------------------------------------------------------
// Tooltip formatting
// ---------------------------------------------------------------------------

/// An object picked on the map: its position and the aggregated accident
/// count it represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Picked {
    /// Longitude first, matching the position accessor.
    pub position: [f64; 2],
    pub count: u64,
}

/// Format the hover tooltip. Returns `None` when nothing is picked; a
/// non-finite component renders as an empty value rather than `NaN`.
pub fn tooltip(picked: Option<&Picked>) -> Option<String> {
    let picked = picked?;
    let [longitude, latitude] = picked.position;
    Some(format!(
        "latitude: {}\nlongitude: {}\n{} Accidents",
        fmt_degrees(latitude),
        fmt_degrees(longitude),
        picked.count
    ))
}

fn fmt_degrees(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.6}")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_position_and_count() {
        let picked = Picked {
            position: [-122.3321, 47.6062],
            count: 42,
        };
        assert_eq!(
            tooltip(Some(&picked)).unwrap(),
            "latitude: 47.606200\nlongitude: -122.332100\n42 Accidents"
        );
    }

    #[test]
    fn no_pick_means_no_tooltip() {
        assert_eq!(tooltip(None), None);
    }

    #[test]
    fn non_finite_components_render_empty() {
        let picked = Picked {
            position: [f64::NAN, 47.6062],
            count: 1,
        };
        assert_eq!(
            tooltip(Some(&picked)).unwrap(),
            "latitude: 47.606200\nlongitude: \n1 Accidents"
        );
    }
}
