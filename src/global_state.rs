use leptos::*;
use once_cell::sync::OnceCell;

/// UI-facing signals, initialized lazily on first access so they are
/// created inside the Leptos runtime.
pub struct Globals {
    pub current_price: RwSignal<f64>,
    pub open_trades: RwSignal<usize>,
    pub autoscroll: RwSignal<bool>,
    pub level_index: RwSignal<usize>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        current_price: create_rw_signal(0.0),
        open_trades: create_rw_signal(0),
        autoscroll: create_rw_signal(false),
        level_index: create_rw_signal(0),
    })
}
