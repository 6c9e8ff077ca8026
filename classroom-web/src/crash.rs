//! Last-resort handling of panics raised while rendering.
//!
//! A panic stops the wasm instance, so the page would stay frozen on whatever
//! was drawn last. The hook logs the panic and swaps the page for a short
//! notice asking the user to reload.

use std::panic::PanicHookInfo;
use web_sys::Element;

pub const CRASH_NOTICE: &str = r#"<div class="flex items-center justify-center min-h-screen bg-base-200">
  <div role="alert" class="alert alert-error max-w-md">
    <div>
      <h2 class="font-bold">Something went wrong.</h2>
      <p>Try refreshing the page. If the problem persists, sign in again.</p>
    </div>
  </div>
</div>"#;

/// Replaces the content of `root` with [`CRASH_NOTICE`].
pub fn show_crash_notice(root: &Element) {
    root.set_inner_html(CRASH_NOTICE);
}

fn log_panic(info: &PanicHookInfo<'_>) {
    // Disable truncation of panic payloads to debug any panics
    if let Some(s) = info.payload().downcast_ref::<String>() {
        web_sys::console::log_1(&format!("Panic: {s}").into());
    } else if let Some(s) = info.payload().downcast_ref::<&str>() {
        web_sys::console::log_1(&format!("Panic: {s}").into());
    } else {
        web_sys::console::log_1(&"Unknown panic".into());
    }
    if let Some(location) = info.location() {
        web_sys::console::log_1(
            &format!(
                "  at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            )
            .into(),
        );
    }
}

/// Logs every panic to the console, then shows the crash notice in the body.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        log_panic(info);
        if let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        {
            show_crash_notice(&body);
        }
    }));
}
