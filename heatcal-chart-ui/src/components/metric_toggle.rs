//! Max/min metric toggle for the cell fill colors.

use crate::state::AppState;
use dioxus::prelude::*;

/// Button flipping the fill between monthly-max and monthly-min view.
/// Clicking a cell on the matrix flips the same signal.
#[component]
pub fn MetricToggle() -> Element {
    let mut state = use_context::<AppState>();
    let use_max = (state.use_max)();

    let label = if use_max {
        "Showing: monthly max (click for min)"
    } else {
        "Showing: monthly min (click for max)"
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            button {
                style: "padding: 6px 12px; font-size: 13px; cursor: pointer;",
                onclick: move |_| {
                    let flipped = !(state.use_max)();
                    state.use_max.set(flipped);
                },
                "{label}"
            }
        }
    }
}
