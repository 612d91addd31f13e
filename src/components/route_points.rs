//! Selectable list of a ride's route points.
//!
//! Replaces a map view with labeled rows: the passenger picks a pickup and a
//! drop from the ride's start/stop/end points. Eligibility rules live on
//! [`RoutePoint`]; this component only disables the offending buttons.

use leptos::prelude::*;

use crate::util::geo::RoutePoint;

/// Pickup/drop picker over a ride's route points.
///
/// `pickup` and `dropoff` hold the selected indices into `points`.
#[component]
pub fn RoutePointList(
    points: Vec<RoutePoint>,
    pickup: RwSignal<Option<usize>>,
    dropoff: RwSignal<Option<usize>>,
) -> impl IntoView {
    let rows = points
        .into_iter()
        .enumerate()
        .map(|(index, point)| {
            let pickup_allowed = point.can_pick_up();
            let drop_allowed = point.can_drop();
            let row_class = move || {
                if pickup.get() == Some(index) {
                    "route-point route-point--pickup"
                } else if dropoff.get() == Some(index) {
                    "route-point route-point--drop"
                } else {
                    "route-point"
                }
            };
            view! {
                <div class=row_class>
                    <span class="route-point__label">{point.label.clone()}</span>
                    <span class="route-point__coords">
                        {format!("{:.4}, {:.4}", point.point.latitude, point.point.longitude)}
                    </span>
                    <div class="route-point__actions">
                        <button
                            class="btn route-point__btn"
                            disabled=!pickup_allowed
                            on:click=move |_| {
                                if pickup_allowed {
                                    pickup.set(Some(index));
                                }
                            }
                        >
                            "Pickup"
                        </button>
                        <button
                            class="btn route-point__btn"
                            disabled=!drop_allowed
                            on:click=move |_| {
                                if drop_allowed {
                                    dropoff.set(Some(index));
                                }
                            }
                        >
                            "Drop"
                        </button>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="route-points">
            <h3 class="route-points__title">"Select Your Journey Points"</h3>
            {rows}
        </div>
    }
}
