use gloo::events::EventListener;
use yew::prelude::*;

use crate::config::Config;

/// Pixel dimensions of every gauge, plus the size of its value text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GaugeSize {
    pub width: u32,
    pub height: u32,
    pub value_font_size: u32,
}

impl GaugeSize {
    pub const COMPACT: Self = Self {
        width: 150,
        height: 150,
        value_font_size: 30,
    };

    pub const LARGE: Self = Self {
        width: 200,
        height: 200,
        value_font_size: 40,
    };

    /// Picks the size tier for a viewport width.
    pub fn for_viewport_width(width: f64) -> Self {
        if width <= Config::COMPACT_BREAKPOINT_PX {
            Self::COMPACT
        } else {
            Self::LARGE
        }
    }
}

impl Default for GaugeSize {
    fn default() -> Self {
        Self::LARGE
    }
}

/// Custom hook tracking the gauge size for the current viewport
#[hook]
pub fn use_gauge_size() -> GaugeSize {
    let size = use_state(current_gauge_size);

    // Effect: Recompute on every window resize
    {
        let size = size.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    size.set(current_gauge_size());
                })
            });

            move || drop(listener)
        });
    }

    *size
}

fn current_gauge_size() -> GaugeSize {
    viewport_width().map_or_else(GaugeSize::default, GaugeSize::for_viewport_width)
}

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}
