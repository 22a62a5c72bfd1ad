//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js matrix renderer lives in `assets/js/*.js` and is evaluated
//! as globals (no ES modules), exposed via `window.*`. This module
//! provides safe Rust wrappers that hand over precomputed drawing
//! attributes and call those globals.

// Embed the D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static HEATMAP_MATRIX_JS: &str = include_str!("../assets/js/heatmap-matrix.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('heatcal JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderHeatmapMatrix(...)`
/// via `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), they are evaluated
/// at global scope via indirect eval once D3 is ready, and each function
/// is then explicitly promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, HEATMAP_MATRIX_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__heatcalChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__heatcalChartsReady) { delete window.__heatcalChartScripts; return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__heatcalChartScripts);
                    delete window.__heatcalChartScripts;
                    if (typeof renderHeatmapMatrix !== 'undefined') window.renderHeatmapMatrix = renderHeatmapMatrix;
                    if (typeof setHeatmapMetric !== 'undefined') window.setHeatmapMetric = setHeatmapMetric;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__heatcalChartsReady = true;
                    console.log('heatcal charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the full year×month matrix from precomputed attributes.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_heatmap_matrix(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__heatcalChartsReady &&
                    typeof window.renderHeatmapMatrix !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderHeatmapMatrix('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[heatcal] renderHeatmapMatrix error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Flip which aggregate drives cell fills, in place.
///
/// Only re-binds the fill attribute from the per-cell color pair already
/// bound to the drawn rects; never rebuilds the matrix or its sparklines.
pub fn set_heatmap_metric(container_id: &str, use_max: bool) {
    call_js(&format!(
        "if (window.setHeatmapMetric) window.setHeatmapMetric('{}', {});",
        container_id, use_max
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
