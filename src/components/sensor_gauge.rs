use std::rc::Rc;
use yew::prelude::*;

use crate::components::gauge::Gauge;
use crate::hooks::use_gauge_size::GaugeSize;
use crate::models::{metric::Metric, reading::Reading};

#[derive(Properties, PartialEq)]
pub struct SensorGaugeProps {
    pub metric: Metric,
    pub reading: Rc<Reading>,
    pub size: GaugeSize,
}

/// One metric of the current reading: dial, value with unit, and label.
#[function_component(SensorGauge)]
pub fn sensor_gauge(props: &SensorGaugeProps) -> Html {
    let metric = props.metric;

    html! {
        <div class="sensor-gauge">
            <Gauge
                value={metric.value(&props.reading)}
                max={metric.max()}
                color={metric.color()}
                size={props.size}
            />
            <p class="sensor-value">{metric.display_value(&props.reading)}</p>
            <p class="sensor-label">{metric.label()}</p>
        </div>
    }
}
