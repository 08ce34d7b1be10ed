use yew::prelude::*;

use crate::budget::{format_money, Totals};

const ARC: &str = "M 20 100 A 80 80 0 0 1 180 100";

#[derive(Properties, PartialEq)]
pub struct GaugeProps {
    pub totals: Totals,
}

/// Half-circle spending gauge with the spent / remaining figures.
#[function_component(Gauge)]
pub fn gauge(props: &GaugeProps) -> Html {
    let totals = props.totals;

    html! {
        <div class="gauge-section">
            <div class="gauge-content">
                <div class="gauge-wrapper">
                    <svg class="gauge-svg" viewBox="0 0 200 120">
                        <path d={ARC} fill="none" stroke="rgba(255,255,255,0.2)"
                            stroke-width="16" stroke-linecap="round" />
                        <path d={ARC} fill="none" stroke="#60D394"
                            stroke-width="16" stroke-linecap="round"
                            stroke-dasharray={totals.gauge_dash()}
                            style="transition: stroke-dasharray 0.6s ease" />
                    </svg>
                    <div class="gauge-text">
                        <div class="gauge-amount">
                            { format!("{} / {}", format_money(totals.total_spent), format_money(totals.goal)) }
                        </div>
                    </div>
                </div>

                <div class="budget-stats">
                    <div class="stat-item">
                        <div class="stat-label">{"Spent"}</div>
                        <div class="stat-value">{ format_money(totals.total_spent) }</div>
                    </div>
                    <div class="stat-item">
                        <div class="stat-label">{"Remaining"}</div>
                        <div class="stat-value">{ format_money(totals.remaining) }</div>
                    </div>
                </div>

                <div class="budget-goal">{ format!("Monthly Budget: {}", format_money(totals.goal)) }</div>
            </div>
        </div>
    }
}
