use yew::prelude::*;

use soil_dashboard::components::{LastUpdated, SensorGauge};
use soil_dashboard::hooks::use_gauge_size::use_gauge_size;
use soil_dashboard::hooks::use_sensor_reading::use_sensor_reading;
use soil_dashboard::models::metric::Metric;
use soil_dashboard::services::api::ApiConfig;

#[function_component(App)]
fn app() -> Html {
    let state = use_sensor_reading(ApiConfig::default());
    let gauge_size = use_gauge_size();
    let reading = state.display_reading();

    let gauge_row = |metrics: &[Metric], class: &'static str| {
        html! {
            <div class={classes!("gauge-grid", class)}>
                { for metrics.iter().map(|metric| html! {
                    <SensorGauge
                        key={metric.label()}
                        metric={*metric}
                        reading={reading.clone()}
                        size={gauge_size}
                    />
                }) }
            </div>
        }
    };

    html! {
        <main class="app-container">
            <div class="dashboard-card">
                <header class="app-header">
                    <h1>{"Sensor Values"}</h1>
                    <LastUpdated created_at={reading.created_at} />
                </header>

                <section class="gauge-section">
                    { gauge_row(&Metric::PRIMARY, "gauge-grid-primary") }
                </section>

                <section class="gauge-section">
                    { gauge_row(&Metric::NUTRIENTS, "gauge-grid-nutrients") }
                </section>
            </div>

            <style>
                {include_str!("style.css")}
            </style>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
