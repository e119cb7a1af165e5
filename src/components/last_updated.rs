use chrono::{DateTime, Local, Utc};
use yew::prelude::*;

use crate::models::reading::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct LastUpdatedProps {
    pub created_at: Option<DateTime<Utc>>,
}

#[function_component(LastUpdated)]
pub fn last_updated(props: &LastUpdatedProps) -> Html {
    let formatted = format_timestamp(props.created_at, &Local);

    html! {
        <p class="last-updated">
            {"Data terakhir: "}{formatted}
        </p>
    }
}
