//! Decade Temperature Heatmap Calendar
//!
//! Renders ten years (2008-2017) of daily temperature readings as a
//! year×month matrix. Each populated cell gets an aggregate fill color
//! plus two sparklines (daily max and min series), with a toggle between
//! the monthly-max and monthly-min color views and a hover tooltip.
//!
//! Data flow:
//! 1. `build.rs` copies `temperature_10y.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, readings are parsed leniently and grouped into the sparse
//!    year/month grid exactly once; the grid is immutable afterwards.
//! 4. All drawing attributes (cell origins, both fill colors, sparkline
//!    path data, label anchors, legend stops/ticks) are computed in Rust
//!    and handed to the D3.js layer as JSON. Flipping the max/min toggle
//!    only re-binds fills in place; it never rebuilds the grid.

use dioxus::prelude::*;
use heatcal_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MetricToggle,
};
use heatcal_chart_ui::js_bridge;
use heatcal_chart_ui::state::AppState;
use heatcal_data::grid::{self, Grid, MONTHS, MONTH_NAMES, YEARS};
use heatcal_data::ingest;
use heatcal_geom::{color, layout, sparkline, tooltip};

// Embed the decade of daily readings at compile time.
const TEMPERATURE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/temperature_10y.csv"));

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "heatmap-calendar-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("heatmap-calendar-root"))
        .launch(App);
}

/// Serialize the per-cell drawing attributes and the layout/legend config
/// consumed by `renderHeatmapMatrix`.
fn matrix_payload(grid: &Grid, use_max: bool) -> (String, String) {
    let cells: Vec<serde_json::Value> = grid
        .cells()
        .iter()
        .map(|cell| {
            let (x, y) = layout::cell_origin(cell.xi, cell.yi);
            let paths = sparkline::sparkline_paths(cell);
            serde_json::json!({
                "year": cell.year,
                "month": cell.month,
                "x": x,
                "y": y,
                "fillMax": color::cell_color(cell, true).to_hex(),
                "fillMin": color::cell_color(cell, false).to_hex(),
                "maxPath": paths.as_ref().map(|p| p.max_path.clone()),
                "minPath": paths.as_ref().map(|p| p.min_path.clone()),
                "tooltip": tooltip::tooltip_label(cell),
            })
        })
        .collect();

    let year_labels: Vec<serde_json::Value> = YEARS
        .iter()
        .enumerate()
        .map(|(xi, year)| {
            serde_json::json!({ "label": year.to_string(), "x": layout::year_label_x(xi) })
        })
        .collect();
    let month_labels: Vec<serde_json::Value> = MONTHS
        .iter()
        .enumerate()
        .map(|(yi, &month)| {
            serde_json::json!({
                "label": MONTH_NAMES[(month - 1) as usize],
                "y": layout::month_label_y(yi),
            })
        })
        .collect();

    let config = serde_json::json!({
        "cellWidth": layout::CELL_WIDTH,
        "cellHeight": layout::CELL_HEIGHT,
        "paddingLeft": layout::PADDING_LEFT,
        "paddingTop": layout::PADDING_TOP,
        "gridHeight": layout::grid_height(),
        "totalWidth": layout::total_width(),
        "totalHeight": layout::total_height(),
        "legendX": layout::legend_origin_x(),
        "legendBarWidth": layout::LEGEND_BAR_WIDTH,
        "legendStops": color::legend_stops(6),
        "legendTicks": layout::legend_ticks(),
        "yearLabels": year_labels,
        "monthLabels": month_labels,
        "unitLabel": "C°",
        "useMax": use_max,
    });

    (
        serde_json::to_string(&cells).unwrap_or_default(),
        serde_json::to_string(&config).unwrap_or_default(),
    )
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut grid_data: Signal<Option<Grid>> = use_signal(|| None);

    // ─── Effect 1: Parse CSV and build the grid once on mount ───
    use_effect(move || {
        let (readings, stats) = ingest::parse_readings(TEMPERATURE_CSV);
        log::info!(
            "loaded {} readings ({} rows, {} dropped)",
            readings.len(),
            stats.rows_total,
            stats.dropped()
        );

        if readings.is_empty() {
            state.error_msg.set(Some(
                "Temperature data (temperature_10y.csv) is missing or unreadable; the matrix cannot be shown.".to_string(),
            ));
            state.loading.set(false);
            return;
        }

        grid_data.set(Some(grid::build_grid(&readings)));
        state.loading.set(false);

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
    });

    // ─── Effect 2: Draw the matrix once the grid is ready ───
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let grid_ref = grid_data.read();
        let Some(grid) = grid_ref.as_ref() else {
            return;
        };
        // Peek: the metric toggle must not re-trigger a full render.
        let use_max = *state.use_max.peek();
        let (data_json, config_json) = matrix_payload(grid, use_max);
        js_bridge::render_heatmap_matrix(CHART_CONTAINER_ID, &data_json, &config_json);
    });

    // ─── Effect 3: Recolor fills in place when the metric flips ───
    use_effect(move || {
        let use_max = (state.use_max)();
        if *state.loading.peek() {
            return;
        }
        js_bridge::set_heatmap_metric(CHART_CONTAINER_ID, use_max);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Decade Temperature Heatmap Calendar".to_string(),
                unit_description: "Cell color: monthly aggregate in degrees Celsius; lines: daily max (dark) and min (light)".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                MetricToggle {}

                div {
                    // Clicking anywhere on the matrix flips the metric,
                    // mirroring the toggle button.
                    onclick: move |_| {
                        let flipped = !*state.use_max.peek();
                        state.use_max.set(flipped);
                    },
                    ChartContainer {
                        id: CHART_CONTAINER_ID.to_string(),
                        loading: false,
                        min_height: 700,
                    }
                }
            }
        }
    }
}
