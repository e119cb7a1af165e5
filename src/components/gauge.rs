use std::f64::consts::PI;
use yew::prelude::*;

use crate::hooks::use_gauge_size::GaugeSize;

const TRACK_COLOR: &str = "#3a4256";
const VIEWBOX: f64 = 100.0;
const STROKE_WIDTH: f64 = 10.0;

/// Share of the arc to fill for `value` on a `0..max` scale, clamped to `0..=1`.
pub fn gauge_fraction(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// SVG `stroke-dasharray` drawing `fraction` of a circle with the given radius.
pub fn arc_dash(fraction: f64, radius: f64) -> String {
    let circumference = 2.0 * PI * radius;
    let filled = circumference * fraction.clamp(0.0, 1.0);
    format!("{filled:.2} {circumference:.2}")
}

#[derive(Properties, PartialEq)]
pub struct GaugeProps {
    pub value: f64,

    /// Upper bound of the dial
    #[prop_or(100.0)]
    pub max: f64,

    /// Value arc color
    pub color: AttrValue,

    #[prop_or_default]
    pub size: GaugeSize,
}

/// Circular dial filling clockwise from twelve o'clock.
#[function_component(Gauge)]
pub fn gauge(props: &GaugeProps) -> Html {
    let radius = (VIEWBOX - STROKE_WIDTH) / 2.0;
    let center = VIEWBOX / 2.0;
    let dash = arc_dash(gauge_fraction(props.value, props.max), radius);

    // Font size is given in screen pixels; the viewBox is scaled to the gauge width.
    let font_size = f64::from(props.size.value_font_size) * VIEWBOX / f64::from(props.size.width);

    html! {
        <svg
            class="gauge"
            width={props.size.width.to_string()}
            height={props.size.height.to_string()}
            viewBox={format!("0 0 {VIEWBOX} {VIEWBOX}")}
            role="meter"
            aria-valuenow={props.value.to_string()}
            aria-valuemin="0"
            aria-valuemax={props.max.to_string()}
        >
            <circle
                cx={center.to_string()}
                cy={center.to_string()}
                r={radius.to_string()}
                fill="none"
                stroke={TRACK_COLOR}
                stroke-width={STROKE_WIDTH.to_string()}
            />
            <circle
                class="gauge-value-arc"
                cx={center.to_string()}
                cy={center.to_string()}
                r={radius.to_string()}
                fill="none"
                stroke={props.color.clone()}
                stroke-width={STROKE_WIDTH.to_string()}
                stroke-linecap="round"
                stroke-dasharray={dash}
                transform={format!("rotate(-90 {center} {center})")}
            />
            <text
                class="gauge-value-text"
                x={center.to_string()}
                y={center.to_string()}
                text-anchor="middle"
                dominant-baseline="central"
                fill="white"
                font-size={format!("{font_size:.1}")}
                font-weight="700"
            >
                {props.value.to_string()}
            </text>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_is_clamped() {
        assert_eq!(gauge_fraction(50.0, 100.0), 0.5);
        assert_eq!(gauge_fraction(7.0, 14.0), 0.5);
        assert_eq!(gauge_fraction(120.0, 100.0), 1.0);
        assert_eq!(gauge_fraction(-3.0, 100.0), 0.0);
    }

    #[test]
    fn test_fraction_degenerate_inputs() {
        assert_eq!(gauge_fraction(10.0, 0.0), 0.0);
        assert_eq!(gauge_fraction(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn test_arc_dash_empty_and_full() {
        assert_eq!(arc_dash(0.0, 45.0), "0.00 282.74");
        assert_eq!(arc_dash(1.0, 45.0), "282.74 282.74");
    }
}
