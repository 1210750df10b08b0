use dioxus::prelude::*;

/// One-shot message carried across a navigation.
///
/// The contact form stores the thank-you text here before redirecting; the
/// home page takes it when it mounts so the banner is shown once.
#[derive(Clone, Copy, PartialEq)]
pub struct FlashSlot(Signal<Option<String>>);

impl FlashSlot {
    pub fn new(signal: Signal<Option<String>>) -> Self {
        Self(signal)
    }

    pub fn set(&self, message: String) {
        let mut signal = self.0;
        signal.set(Some(message));
    }

    /// Remove and return the pending message, if any
    pub fn take(&self) -> Option<String> {
        let mut signal = self.0;
        let message = signal.write().take();
        message
    }
}

/// Banner message for the page that mounts this hook.
///
/// The slot is emptied in an effect after the first render, so the message is
/// shown once and no signal is written while rendering.
pub fn use_flash_notice() -> Signal<Option<String>> {
    let flash = use_context::<FlashSlot>();
    let mut notice = use_signal(|| None);

    use_effect(move || {
        if let Some(message) = flash.take() {
            notice.set(Some(message));
        }
    });

    notice
}
