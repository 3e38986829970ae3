//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Chart.js, Leaflet and Bootstrap glue lives in `assets/js/*.js`. The
//! scripts are evaluated once as globals (no ES modules) and expose their
//! entry points on `window.*`; the functions here serialize their arguments
//! and call those globals.
//!
//! Every payload crosses the boundary as a JSON string literal, so values
//! coming from the backend never end up spliced into JS source.

use wasm_bindgen_futures::JsFuture;

// Embed all bridge JS files at compile time
static CHART_BRIDGE_JS: &str = include_str!("../assets/js/chart-bridge.js");
static MAP_BRIDGE_JS: &str = include_str!("../assets/js/map-bridge.js");
static CHROME_JS: &str = include_str!("../assets/js/chrome.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('DMD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `text` as a JS string literal.
fn js_literal(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

/// Evaluate the bridge scripts at global scope. Safe to call more than once.
///
/// The scripts only define functions, so they can be loaded before Chart.js
/// or Leaflet; each entry point polls for its library and DOM anchor itself.
pub fn init_scripts() {
    let all_js = [CHART_BRIDGE_JS, MAP_BRIDGE_JS, CHROME_JS].join("\n");
    call_js(&format!(
        r#"
        if (!window.__dmdBridgeReady) {{
            (0, eval)({scripts});
            window.__dmdBridgeReady = true;
            console.log('DMD bridge initialized');
        }}
        "#,
        scripts = js_literal(&all_js),
    ));
}

/// Render (or re-render) a Chart.js chart into the canvas `canvas_id`.
///
/// `config_json` is a full Chart.js config; an optional top-level
/// `percentLabels` array is turned into tooltip percentages on the JS side.
/// A canvas that never shows up is skipped after a few seconds.
pub fn render_chart(canvas_id: &str, config_json: &str) {
    init_scripts();
    call_js(&format!(
        "window.dmdRenderChart({}, {});",
        js_literal(canvas_id),
        js_literal(config_json)
    ));
}

/// Create the Leaflet map inside `container_id` from a serialized `MapSpec`.
pub fn init_map(container_id: &str, spec_json: &str) {
    init_scripts();
    call_js(&format!(
        "window.dmdInitMap({}, {});",
        js_literal(container_id),
        js_literal(spec_json)
    ));
}

/// Send one command to the map in `container_id`.
///
/// Commands issued before the map exists are queued and replayed in order
/// once it does, so a clear followed by an add can never swap places.
pub fn map_command(container_id: &str, command: &str, payload_json: &str) {
    init_scripts();
    call_js(&format!(
        "window.dmdMapCommand({}, {}, {});",
        js_literal(container_id),
        js_literal(command),
        js_literal(payload_json)
    ));
}

/// Enable Bootstrap tooltips and popovers on everything currently marked up.
pub fn init_bootstrap_components() {
    init_scripts();
    call_js("window.dmdInitBootstrap();");
}

/// Swap `data-feather` placeholders for SVG icons.
pub fn replace_icons() {
    init_scripts();
    call_js("window.dmdReplaceIcons();");
}

/// Resolve after `ms` milliseconds on the browser's timer.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_are_quoted_and_escaped() {
        assert_eq!(js_literal("map"), "\"map\"");
        assert_eq!(
            js_literal("it's \"here\"\n</script>"),
            "\"it's \\\"here\\\"\\n</script>\""
        );
    }

    #[test]
    fn bridge_exposes_entry_points() {
        assert!(CHART_BRIDGE_JS.contains("window.dmdRenderChart"));
        assert!(MAP_BRIDGE_JS.contains("window.dmdInitMap"));
        assert!(MAP_BRIDGE_JS.contains("window.dmdMapCommand"));
        assert!(CHROME_JS.contains("window.dmdInitBootstrap"));
        assert!(CHROME_JS.contains("window.dmdReplaceIcons"));
    }
}
