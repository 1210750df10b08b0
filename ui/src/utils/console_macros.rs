/// Macros for timestamped console logging.
///
/// In the browser these wrap gloo_console and prefix every line with the
/// `Date.now()` timestamp. Off the browser (native test builds) there is no JS
/// console to call into, so the same call sites emit `tracing` events instead.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_line!(info, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_line!(info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_line!(warn, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_line!(warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__console_line!(error, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_line!(error, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::__console_line!(debug, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_line!(debug, format!($fmt, $($arg)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __console_line {
    ($level:ident, $msg:expr) => {
        $crate::__console_line!(@emit $level, $level, $msg)
    };
    (@emit $console:ident, $tracing:ident, $msg:expr) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::utils::console_macros::__private::gloo_console::$console!(format!(
                "[{}] {}",
                $crate::utils::console_macros::__private::js_sys::Date::now(),
                $msg
            ));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            $crate::utils::console_macros::__private::tracing::$tracing!("{}", $msg);
        }
    }};
}

#[doc(hidden)]
pub mod __private {
    pub use gloo_console;
    pub use js_sys;
    pub use tracing;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_are_usable_off_browser() {
        let field = "email";
        crate::console_info!("plain message");
        crate::console_info!("field {} changed", field);
        crate::console_warn!("warn {}", 1);
        crate::console_error!("error {}", "x");
        crate::console_debug!(String::from("owned message"));
    }
}
