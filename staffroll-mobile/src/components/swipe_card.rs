//! Swipe-to-delete wrapper for list cards
//!
//! The gesture state itself lives in the editor; this component only turns
//! touch events into editor events and measures the card so width-relative
//! limits and thresholds can be resolved. A card whose record was already
//! removed by a swipe is drawn sliding out until `DismissEnd` is sent.

use gloo_timers::callback::Timeout;
use staffroll_common::{EditorEvent, EmployeeId, SwipeConfig, SwipeState, SwipeVisual};
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

/// Matches the CSS transition in `SwipeVisual::style`
const DISMISS_MS: u32 = 200;

#[derive(Properties, PartialEq)]
pub struct SwipeCardProps {
    pub id: EmployeeId,
    pub swipe: SwipeState,
    pub config: SwipeConfig,
    pub on_event: Callback<EditorEvent>,
    /// Record is gone from the editor; only the slide-out remains
    #[prop_or_default]
    pub leaving: bool,
    #[prop_or_default]
    pub children: Children,
}

fn card_width(node_ref: &NodeRef) -> f64 {
    node_ref
        .cast::<HtmlElement>()
        .map(|el| el.offset_width() as f64)
        .unwrap_or(0.0)
}

#[function_component(SwipeCard)]
pub fn swipe_card(props: &SwipeCardProps) -> Html {
    let node_ref = use_node_ref();
    let width = use_state(|| 0.0_f64);
    let id = props.id;
    let leaving = props.leaving;

    {
        let on_event = props.on_event.clone();
        use_effect_with(leaving, move |leaving| {
            let timeout = leaving.then(|| {
                Timeout::new(DISMISS_MS, move || on_event.emit(EditorEvent::DismissEnd { id }))
            });
            move || drop(timeout)
        });
    }

    let on_touch_start = {
        let node_ref = node_ref.clone();
        let width = width.clone();
        let on_event = props.on_event.clone();

        Callback::from(move |e: TouchEvent| {
            if leaving {
                return;
            }
            if let Some(touch) = e.touches().get(0) {
                width.set(card_width(&node_ref));
                on_event.emit(EditorEvent::TouchStart {
                    id,
                    x: touch.client_x() as f64,
                });
            }
        })
    };

    let on_touch_move = {
        let node_ref = node_ref.clone();
        let on_event = props.on_event.clone();

        Callback::from(move |e: TouchEvent| {
            if leaving {
                return;
            }
            if let Some(touch) = e.touches().get(0) {
                on_event.emit(EditorEvent::TouchMove {
                    id,
                    x: touch.client_x() as f64,
                    card_width: Some(card_width(&node_ref)),
                });
            }
        })
    };

    // The editor decides on release; a committed card comes back as `leaving`
    let on_touch_end = {
        let node_ref = node_ref.clone();
        let on_event = props.on_event.clone();

        Callback::from(move |_: TouchEvent| {
            if leaving {
                return;
            }
            on_event.emit(EditorEvent::TouchEnd {
                id,
                card_width: Some(card_width(&node_ref)),
            });
        })
    };

    let on_touch_cancel = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: TouchEvent| on_event.emit(EditorEvent::TouchCancel { id }))
    };

    let offset = props.swipe.offset_for(id);
    let visual = if leaving {
        SwipeVisual::new(*width, *width, true)
    } else {
        SwipeVisual::new(offset, *width, props.config.fade)
    };
    let dragging = props.swipe.swiping_id() == Some(id) && !leaving;
    let armed = props.swipe.would_commit(id, &props.config, *width);

    html! {
        <div class="swipe-card-container">
            {if offset > 0.0 || leaving {
                html! {
                    <div class={classes!("swipe-delete-hint", armed.then_some("armed"))}>
                        {if armed || leaving { "Release to delete" } else { "Delete" }}
                    </div>
                }
            } else {
                html! {}
            }}

            <div
                ref={node_ref}
                class="swipe-content"
                style={visual.style(dragging)}
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
                ontouchcancel={on_touch_cancel}
            >
                {props.children.clone()}
            </div>
        </div>
    }
}
