/// Blocking browser alert; logged when no window is available
pub fn show_alert(message: &str) {
    match web_sys::window() {
        Some(win) => {
            let _ = win.alert_with_message(message);
        }
        None => log::error!("❌ {}", message),
    }
}
