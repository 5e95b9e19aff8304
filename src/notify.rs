pub const TITLE: &str = "PortableApps Launcher";

/// Blocking error notification: a message box on Windows, stderr elsewhere.
#[cfg(windows)]
pub fn show_error(message: &str) {
    use windows::core::HSTRING;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

    tracing::error!("{message}");
    unsafe {
        MessageBoxW(None::<&HWND>, &HSTRING::from(message), &HSTRING::from(TITLE), MB_OK | MB_ICONERROR);
    }
}

#[cfg(not(windows))]
pub fn show_error(message: &str) {
    eprintln!("{TITLE} error: {message}");
}
