use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use leptos::html::Canvas;
use leptos::*;

use crate::application::ChartController;
use crate::application::controller::{
    autoscroll_signal, current_price_signal, level_index_signal, open_trades_signal,
};
use crate::domain::config::ChartConfig;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::trading::TradeSide;

const CANVAS_ID: &str = "price-chart";
const CHART_WIDTH: u32 = 1200;
const CHART_HEIGHT: u32 = 600;
const DEMO_AMOUNT: f64 = 5.0;

/// Demo host: a canvas plus UP/DOWN trade buttons and an autoscroll
/// toggle, wired straight to the controller.
#[component]
pub fn App() -> impl IntoView {
    let controller: Rc<RefCell<Option<ChartController>>> = Rc::new(RefCell::new(None));
    let canvas_ref = create_node_ref::<Canvas>();

    {
        let controller = Rc::clone(&controller);
        canvas_ref.on_load(move |_| {
            match ChartController::new(CANVAS_ID, CHART_WIDTH, CHART_HEIGHT, ChartConfig::default())
            {
                Ok(ctrl) => {
                    ctrl.start();
                    *controller.borrow_mut() = Some(ctrl);
                }
                Err(e) => get_logger().error(
                    LogComponent::Presentation("App"),
                    &format!("Failed to create chart: {e}"),
                ),
            }
        });
    }

    {
        let controller = Rc::clone(&controller);
        EventListener::new(&gloo::utils::window(), "resize", move |_| {
            if let Some(ctrl) = controller.borrow().as_ref() {
                let width = gloo::utils::window()
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(CHART_WIDTH as f64);
                ctrl.resize(width.min(CHART_WIDTH as f64) as u32, CHART_HEIGHT);
            }
        })
        .forget();
    }

    let place = {
        let controller = Rc::clone(&controller);
        move |side: TradeSide| {
            if let Some(ctrl) = controller.borrow().as_ref()
                && let Err(e) = ctrl.place_trade(side, DEMO_AMOUNT)
            {
                get_logger().error(
                    LogComponent::Presentation("App"),
                    &format!("Trade rejected: {e}"),
                );
            }
        }
    };
    let place_up = place.clone();
    let place_down = place;

    let on_wheel = {
        let controller = Rc::clone(&controller);
        move |e: ev::WheelEvent| {
            e.prevent_default();
            if let Some(ctrl) = controller.borrow().as_ref() {
                // Wheel up means zoom in: flip the browser's sign.
                ctrl.handle_wheel(-e.delta_y());
            }
        }
    };

    let on_autoscroll = {
        let controller = Rc::clone(&controller);
        move |e: ev::Event| {
            if let Some(ctrl) = controller.borrow().as_ref() {
                ctrl.set_autoscroll(event_target_checked(&e));
            }
        }
    };

    view! {
        <div class="chart-shell">
            <canvas
                id=CANVAS_ID
                node_ref=canvas_ref
                width=CHART_WIDTH
                height=CHART_HEIGHT
                on:wheel=on_wheel
            ></canvas>
            <div class="chart-controls">
                <button class="up" on:click=move |_| place_up(TradeSide::Up)>
                    "\u{25b2} UP"
                </button>
                <button class="down" on:click=move |_| place_down(TradeSide::Down)>
                    "\u{25bc} DOWN"
                </button>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || autoscroll_signal().get()
                        on:change=on_autoscroll
                    />
                    "Autoscroll"
                </label>
                <span class="price">{move || format!("{:.2}", current_price_signal().get())}</span>
                <span class="open-trades">
                    {move || format!("{} open", open_trades_signal().get())}
                </span>
                <span class="level">{move || format!("level {}", level_index_signal().get())}</span>
            </div>
        </div>
    }
}
