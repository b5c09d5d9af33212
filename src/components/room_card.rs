use yew::prelude::*;

use crate::context::use_language;
use crate::models::RoomReading;

#[derive(Properties, PartialEq)]
pub struct RoomCardProps {
    pub reading: RoomReading,
}

/// Tarjeta de una sala con su AQI coloreado por banda
#[function_component(RoomCard)]
pub fn room_card(props: &RoomCardProps) -> Html {
    let i18n = use_language();
    let reading = &props.reading;
    let band = reading.band();

    html! {
        <div class={classes!("room-card", band.css_class())}>
            <div class="room-card-header">
                <h3 class="room-name">{ &reading.id }</h3>
                <span class="room-aqi">{ reading.aqi }</span>
            </div>
            <div class="room-card-body">
                <div class="room-metric">
                    <span class="metric-label">{ i18n.get("quality") }</span>
                    <span class="metric-value">{ i18n.get(band.i18n_key()) }</span>
                </div>
                <div class="room-metric">
                    <span class="metric-label">{ i18n.get("temperature") }</span>
                    <span class="metric-value">{ format!("{:.1} °C", reading.temperatura) }</span>
                </div>
                <div class="room-metric">
                    <span class="metric-label">{ i18n.get("humidity") }</span>
                    <span class="metric-value">{ format!("{:.0} %", reading.humedad) }</span>
                </div>
            </div>
        </div>
    }
}
