//! Platform Helpers
//!
//! Thin wrappers over browser APIs so the rest of the crate stays target
//! agnostic:
//! - Timer delays (gloo timers in the browser, tokio off it)
//! - Window scroll tracking for the navbar
//! - Calendar year for the footer

use crate::console_debug;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::{sleep, Duration};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Suspend the current task for `millis` milliseconds.
pub async fn delay_ms(millis: u32) {
    if millis == 0 {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    TimeoutFuture::new(millis).await;

    #[cfg(not(target_arch = "wasm32"))]
    sleep(Duration::from_millis(millis as u64)).await;
}

/// Registered `scroll` listener on the window; removed again on drop.
pub struct ScrollListener {
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Attach `on_scroll` to the window. It receives the vertical scroll
    /// offset in pixels. Returns `None` when there is no window to listen on.
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let source = window.clone();

        let callback = Closure::<dyn FnMut()>::new(move || {
            on_scroll(source.scroll_y().unwrap_or(0.0));
        });

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;

        console_debug!("[ScrollListener] attached to window");
        Some(Self { callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Current calendar year according to the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Whether a scroll offset should switch the navbar to its compact style.
pub fn is_scrolled_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}
