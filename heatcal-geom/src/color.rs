//! The fixed temperature color scale and legend gradient stops.

use heatcal_data::grid::MonthCell;
use serde::Serialize;
use std::fmt;

/// Anchor temperatures of the fill scale, in degrees Celsius, ascending.
pub const ANCHOR_TEMPS: [f64; 6] = [0.0, 8.0, 16.0, 24.0, 32.0, 40.0];

/// Gradient anchors: violet, blue, pale yellow, yellow, orange, crimson.
pub const ANCHOR_COLORS: [Rgb; 6] = [
    Rgb::new(0x6a, 0x0d, 0xad),
    Rgb::new(0x1e, 0x90, 0xff),
    Rgb::new(0xf5, 0xf5, 0x7a),
    Rgb::new(0xff, 0xd7, 0x00),
    Rgb::new(0xff, 0x8c, 0x00),
    Rgb::new(0xdc, 0x14, 0x3c),
];

/// An sRGB color. Displays as a lowercase hex string ("#6a0dad").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn lerp_channel(a: u8, b: u8, frac: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * frac).round() as u8
}

fn lerp(a: Rgb, b: Rgb, frac: f64) -> Rgb {
    Rgb {
        r: lerp_channel(a.r, b.r, frac),
        g: lerp_channel(a.g, b.g, frac),
        b: lerp_channel(a.b, b.b, frac),
    }
}

/// Map a temperature to its display color via piecewise-linear
/// interpolation over the anchors. Values outside the anchor domain
/// saturate to the endpoint colors so out-of-range readings stay within
/// the legend's hues.
pub fn temp_color(t: f64) -> Rgb {
    let lo = ANCHOR_TEMPS[0];
    let hi = ANCHOR_TEMPS[ANCHOR_TEMPS.len() - 1];
    // `!(t > lo)` also catches NaN, which saturates low.
    if !(t > lo) {
        return ANCHOR_COLORS[0];
    }
    if t >= hi {
        return ANCHOR_COLORS[ANCHOR_COLORS.len() - 1];
    }
    for i in 0..ANCHOR_TEMPS.len() - 1 {
        let (a, b) = (ANCHOR_TEMPS[i], ANCHOR_TEMPS[i + 1]);
        if t < b {
            let frac = (t - a) / (b - a);
            return lerp(ANCHOR_COLORS[i], ANCHOR_COLORS[i + 1], frac);
        }
    }
    ANCHOR_COLORS[ANCHOR_COLORS.len() - 1]
}

/// Fill color for a cell: the scale evaluated on `month_max` when the max
/// view is active, else on `month_min`.
pub fn cell_color(cell: &MonthCell, use_max: bool) -> Rgb {
    temp_color(if use_max {
        cell.month_max
    } else {
        cell.month_min
    })
}

/// One stop of the legend's vertical gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendStop {
    /// Fraction of the bar height, 0.0 at the top.
    pub offset: f64,
    /// Hex color at this stop.
    pub color: String,
}

/// Sample the color scale at `n` equally spaced stops across the anchor
/// domain. The legend gradient bar uses n = 6 (one stop per anchor).
pub fn legend_stops(n: usize) -> Vec<LegendStop> {
    let lo = ANCHOR_TEMPS[0];
    let hi = ANCHOR_TEMPS[ANCHOR_TEMPS.len() - 1];
    (0..n)
        .map(|i| {
            let offset = if n > 1 {
                i as f64 / (n - 1) as f64
            } else {
                0.0
            };
            LegendStop {
                offset,
                color: temp_color(lo + offset * (hi - lo)).to_hex(),
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use heatcal_data::grid::build_grid;
    use heatcal_data::reading::DailyReading;

    #[test]
    fn test_anchor_temps_map_to_anchor_colors() {
        for (t, c) in ANCHOR_TEMPS.iter().zip(ANCHOR_COLORS.iter()) {
            assert_eq!(temp_color(*t), *c);
        }
    }

    #[test]
    fn test_out_of_domain_clamps_to_endpoints() {
        assert_eq!(temp_color(-5.0), ANCHOR_COLORS[0]);
        assert_eq!(temp_color(50.0), ANCHOR_COLORS[5]);
        assert_eq!(temp_color(50.0), temp_color(40.0));
        assert_eq!(temp_color(-5.0), temp_color(0.0));
    }

    #[test]
    fn test_midpoint_interpolates_per_channel() {
        // Halfway between #6a0dad and #1e90ff.
        assert_eq!(temp_color(4.0), Rgb::new(0x44, 0x4f, 0xd6));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(ANCHOR_COLORS[0].to_hex(), "#6a0dad");
        assert_eq!(ANCHOR_COLORS[5].to_string(), "#dc143c");
    }

    #[test]
    fn test_legend_stops_span_the_domain() {
        let stops = legend_stops(6);
        assert_eq!(stops.len(), 6);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[5].offset, 1.0);
        assert_eq!(stops[0].color, "#6a0dad");
        assert_eq!(stops[5].color, "#dc143c");
        // Stops are equally spaced and land on the anchors for n = 6.
        assert_eq!(stops[2].color, ANCHOR_COLORS[2].to_hex());
    }

    #[test]
    fn test_toggle_round_trip_restores_fill() {
        let readings = [DailyReading {
            date: NaiveDate::from_ymd_opt(2015, 6, 15).unwrap(),
            max: 30.0,
            min: 18.0,
        }];
        let grid = build_grid(&readings);
        let cell = grid.cell(2015, 6).unwrap();

        let mut use_max = true;
        let before = cell_color(cell, use_max);
        use_max = !use_max;
        let flipped = cell_color(cell, use_max);
        use_max = !use_max;
        let after = cell_color(cell, use_max);

        assert_eq!(before, after);
        assert_ne!(before, flipped);
        assert_eq!(before, temp_color(30.0));
        assert_eq!(flipped, temp_color(18.0));
    }
}
