// ============================================================================
// DASHBOARD DE CALIDAD DEL AIRE
// ============================================================================
// Lecturas de demostración; todavía no hay endpoint de sensores
// ============================================================================

use chrono::{Local, Utc};
use yew::prelude::*;

use super::RoomCard;
use crate::context::use_language;
use crate::models::lectura::demo;
use crate::models::DashboardSummary;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let i18n = use_language();
    let readings = use_memo((), |_| demo::room_readings());
    let summary = use_memo(readings.clone(), |readings| {
        DashboardSummary::new(readings, Utc::now())
    });

    let average_band = summary.average_band();
    let updated_at = summary
        .generated_at
        .with_timezone(&Local)
        .format("%d/%m/%Y %H:%M")
        .to_string();

    html! {
        <section class="dashboard">
            <h2>{ i18n.get("dashboard_title") }</h2>

            <div class="dashboard-summary">
                <div class={classes!("summary-item", average_band.css_class())}>
                    <span class="summary-label">{ i18n.get("avg_aqi") }</span>
                    <span class="summary-value">{ format!("{:.1}", summary.average_aqi) }</span>
                    <span class="summary-detail">{ i18n.get(average_band.i18n_key()) }</span>
                </div>
                <div class="summary-item">
                    <span class="summary-label">{ i18n.get("rooms") }</span>
                    <span class="summary-value">{ summary.rooms }</span>
                </div>
                { for summary.worst_room.iter().map(|room| html! {
                    <div class={classes!("summary-item", room.band().css_class())}>
                        <span class="summary-label">{ i18n.get("worst_room") }</span>
                        <span class="summary-value">{ &room.id }</span>
                        <span class="summary-detail">{ format!("AQI {}", room.aqi) }</span>
                    </div>
                }) }
                <div class="summary-item">
                    <span class="summary-label">{ i18n.get("last_update") }</span>
                    <span class="summary-value small">{ updated_at }</span>
                </div>
            </div>

            <div class="room-grid">
                { for readings.iter().map(|reading| html! {
                    <RoomCard key={reading.id.clone()} reading={reading.clone()} />
                }) }
            </div>

            <div class="aqi-legend">
                <h3>{ i18n.get("legend") }</h3>
                <ul>
                    { for summary.band_counts.iter().map(|(band, count)| html! {
                        <li class={classes!("legend-item", band.css_class())}>
                            <span class="legend-swatch"></span>
                            <span class="legend-range">{ band.range_label() }</span>
                            <span class="legend-label">{ i18n.get(band.i18n_key()) }</span>
                            <span class="legend-count">{ format!("({})", count) }</span>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
