//! Animated Background
//!
//! Drifting yarn balls behind the page. Purely decorative.

use leptos::prelude::*;

const YARN_COLORS: [&str; 5] = ["#f4c2c2", "#c9e4de", "#faedcb", "#c6def1", "#dbcdf0"];
const YARN_BALLS: usize = 12;

/// Spread balls across the page without randomness
fn ball_style(i: usize) -> String {
    let left = (i * 37 + 5) % 100;
    let size = 40 + (i * 17) % 60;
    let delay = i as f64 * 1.3;
    let duration = 18 + (i * 7) % 14;
    format!(
        "left: {}%; width: {}px; height: {}px; background-color: {}; animation-delay: -{:.1}s; animation-duration: {}s;",
        left,
        size,
        size,
        YARN_COLORS[i % YARN_COLORS.len()],
        delay,
        duration
    )
}

#[component]
pub fn AnimatedBackground() -> impl IntoView {
    view! {
        <div class="animated-background" aria-hidden="true">
            {(0..YARN_BALLS)
                .map(|i| view! { <span class="yarn-ball" style=ball_style(i)></span> })
                .collect_view()}
        </div>
    }
}
