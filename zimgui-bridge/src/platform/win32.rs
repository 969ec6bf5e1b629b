//! Raw Win32 backend.
//!
//! One window class, one window procedure, one `GetMessageW` pump. The
//! host state is passed through `lpCreateParams`, stored in
//! `GWLP_USERDATA` on `WM_NCCREATE`, and detached on `WM_NCDESTROY`. It is
//! owned by [`run`] for the whole pump, so the pointer in `GWLP_USERDATA`
//! never outlives it.
//!
//! Messages that arrive while the state is already borrowed (for example
//! `WM_CAPTURECHANGED` sent synchronously from inside `ReleaseCapture`) go
//! straight to `DefWindowProcW`.

use std::cell::{Cell, RefCell};
use std::ffi::c_void;

use windows::Win32::Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BeginPaint, COLOR_WINDOW, DIB_RGB_COLORS, EndPaint,
    HBRUSH, HDC, InvalidateRect, PAINTSTRUCT, SetDIBitsToDevice,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetKeyState, ReleaseCapture, SetCapture, VIRTUAL_KEY, VK_CONTROL, VK_LWIN, VK_MENU, VK_RWIN,
    VK_SHIFT,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, CREATESTRUCTW, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, CreateWindowExW,
    DefWindowProcW, DestroyWindow, DispatchMessageW, GWLP_USERDATA, GetClientRect, GetMessageW,
    GetWindowLongPtrW, IDC_ARROW, LoadCursorW, MSG, PostQuitMessage, RegisterClassExW, SW_SHOW,
    SetWindowLongPtrW, ShowWindow, TranslateMessage, UnregisterClassW, WINDOW_EX_STYLE,
    WM_CAPTURECHANGED, WM_CHAR, WM_CREATE, WM_DESTROY, WM_ERASEBKGND, WM_KEYDOWN, WM_KEYUP,
    WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MBUTTONDOWN, WM_MBUTTONUP, WM_MOUSEHWHEEL, WM_MOUSEMOVE,
    WM_MOUSEWHEEL, WM_NCCREATE, WM_NCDESTROY, WM_PAINT, WM_RBUTTONDOWN, WM_RBUTTONUP, WM_SIZE,
    WM_SYSKEYDOWN, WM_SYSKEYUP, WM_XBUTTONDOWN, WM_XBUTTONUP, WNDCLASSEXW, WS_OVERLAPPEDWINDOW,
};
use windows::core::{HSTRING, PCWSTR, w};

use zimgui_core::{
    Canvas, Dispatcher, Disposition, Event, HostConfig, HostError, Modifiers, NativeWindow, Point,
    Size, UiCore, WindowHandle,
};

use super::messages::{MessageDecoder, client_extent, message_result, wm};

const CLASS_NAME: PCWSTR = w!("ZimguiHostWindow");

const _: () = {
    assert!(wm::CREATE == WM_CREATE && wm::DESTROY == WM_DESTROY && wm::SIZE == WM_SIZE);
    assert!(wm::PAINT == WM_PAINT && wm::ERASEBKGND == WM_ERASEBKGND);
    assert!(wm::KEYDOWN == WM_KEYDOWN && wm::KEYUP == WM_KEYUP && wm::CHAR == WM_CHAR);
    assert!(wm::SYSKEYDOWN == WM_SYSKEYDOWN && wm::SYSKEYUP == WM_SYSKEYUP);
    assert!(wm::MOUSEMOVE == WM_MOUSEMOVE && wm::CAPTURECHANGED == WM_CAPTURECHANGED);
    assert!(wm::LBUTTONDOWN == WM_LBUTTONDOWN && wm::LBUTTONUP == WM_LBUTTONUP);
    assert!(wm::RBUTTONDOWN == WM_RBUTTONDOWN && wm::RBUTTONUP == WM_RBUTTONUP);
    assert!(wm::MBUTTONDOWN == WM_MBUTTONDOWN && wm::MBUTTONUP == WM_MBUTTONUP);
    assert!(wm::XBUTTONDOWN == WM_XBUTTONDOWN && wm::XBUTTONUP == WM_XBUTTONUP);
    assert!(wm::MOUSEWHEEL == WM_MOUSEWHEEL && wm::MOUSEHWHEEL == WM_MOUSEHWHEEL);
};

fn key_modifiers() -> Modifiers {
    let down = |vk: VIRTUAL_KEY| unsafe { GetKeyState(vk.0 as i32) } < 0;

    let mut m = Modifiers::NONE;
    if down(VK_SHIFT) {
        m |= Modifiers::SHIFT;
    }
    if down(VK_CONTROL) {
        m |= Modifiers::CONTROL;
    }
    if down(VK_MENU) {
        m |= Modifiers::ALT;
    }
    if down(VK_LWIN) || down(VK_RWIN) {
        m |= Modifiers::SUPER;
    }
    m
}

// ════════════════════════════════════════════════════════════════════
// Native window
// ════════════════════════════════════════════════════════════════════

pub struct Win32Window {
    hwnd: HWND,
    pointer: Option<Point>,
    /// Device context of the paint in progress.
    hdc: Option<HDC>,
    decoder: MessageDecoder,
}

impl Win32Window {
    fn new() -> Self {
        Self {
            hwnd: HWND::default(),
            pointer: None,
            hdc: None,
            decoder: MessageDecoder::new(),
        }
    }

    fn translate(&mut self, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Event {
        let event = self.decoder.decode(msg, wparam.0, lparam.0, key_modifiers);
        if let Event::MouseDown { position, .. }
        | Event::MouseUp { position, .. }
        | Event::MouseMove { position } = &event
        {
            self.pointer = Some(*position);
        }
        event
    }
}

impl NativeWindow for Win32Window {
    fn handle(&self) -> WindowHandle {
        WindowHandle(self.hwnd.0 as usize as u64)
    }

    fn client_size(&self) -> Size {
        let mut rect = RECT::default();
        if unsafe { GetClientRect(self.hwnd, &mut rect) }.is_err() {
            return Size::default();
        }
        Size::new(
            (rect.right - rect.left).max(0) as u32,
            (rect.bottom - rect.top).max(0) as u32,
        )
    }

    fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    fn invalidate(&self) {
        let _ = unsafe { InvalidateRect(Some(self.hwnd), None, false) };
    }

    fn begin_capture(&mut self) {
        unsafe { SetCapture(self.hwnd) };
    }

    fn release_capture(&mut self) {
        if let Err(e) = unsafe { ReleaseCapture() } {
            tracing::debug!(window = %self.handle(), "ReleaseCapture failed: {e}");
        }
    }

    fn request_exit(&mut self) {
        unsafe { PostQuitMessage(0) };
    }

    fn present(&mut self, frame: &Canvas) -> zimgui_core::Result<()> {
        let Some(hdc) = self.hdc else {
            return Err(HostError::Surface("present outside WM_PAINT".to_string()));
        };

        // Top-down 32bpp DIB; canvas pixels are 0xAARRGGBB, i.e. BGRA in memory.
        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: frame.width() as i32,
                biHeight: -(frame.height() as i32),
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let lines = unsafe {
            SetDIBitsToDevice(
                hdc,
                0,
                0,
                frame.width(),
                frame.height(),
                0,
                0,
                0,
                frame.height(),
                frame.pixels().as_ptr().cast(),
                &bmi,
                DIB_RGB_COLORS,
            )
        };

        if lines == 0 {
            return Err(HostError::Surface(format!(
                "SetDIBitsToDevice failed: {:?}",
                unsafe { GetLastError() }
            )));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════
// Window procedure
// ════════════════════════════════════════════════════════════════════

struct WindowState<C> {
    window: Win32Window,
    dispatcher: Dispatcher<C>,
}

impl<C: UiCore> WindowState<C> {
    /// `None` means "let `DefWindowProcW` answer".
    fn handle(&mut self, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<LRESULT> {
        let event = self.window.translate(msg, wparam, lparam);

        let disposition = if event == Event::Paint {
            self.paint()
        } else {
            self.dispatcher.dispatch(&mut self.window, event)
        };

        message_result(msg, disposition).map(LRESULT)
    }

    fn paint(&mut self) -> Disposition {
        let hwnd = self.window.hwnd;
        let mut ps = PAINTSTRUCT::default();
        let hdc = unsafe { BeginPaint(hwnd, &mut ps) };
        self.window.hdc = (!hdc.is_invalid()).then_some(hdc);

        let disposition = self.dispatcher.dispatch(&mut self.window, Event::Paint);

        self.window.hdc = None;
        let _ = unsafe { EndPaint(hwnd, &ps) };
        disposition
    }
}

struct HostWindow<C> {
    state: RefCell<WindowState<C>>,
    /// Between `WM_NCCREATE` and `WM_NCDESTROY`.
    alive: Cell<bool>,
}

unsafe extern "system" fn wndproc<C: UiCore>(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg == WM_NCCREATE {
        let create_struct = unsafe { &*(lparam.0 as *const CREATESTRUCTW) };
        let host_ptr = create_struct.lpCreateParams as *const HostWindow<C>;
        unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, host_ptr as isize) };
        if let Some(host) = unsafe { host_ptr.as_ref() } {
            host.alive.set(true);
            if let Ok(mut state) = host.state.try_borrow_mut() {
                state.window.hwnd = hwnd;
            }
        }
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    }

    let host_ptr = unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) } as *const HostWindow<C>;
    let Some(host) = (unsafe { host_ptr.as_ref() }) else {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    };

    if msg == WM_NCDESTROY {
        unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) };
        host.alive.set(false);
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    }

    let Ok(mut state) = host.state.try_borrow_mut() else {
        tracing::trace!(msg, "re-entrant message, default handling");
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    };

    match state.handle(msg, wparam, lparam) {
        Some(result) => result,
        None => {
            drop(state);
            unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Entry Point
// ════════════════════════════════════════════════════════════════════

fn register_class<C: UiCore>(hinstance: HINSTANCE) -> Result<(), HostError> {
    let wc = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wndproc::<C>),
        hInstance: hinstance,
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default(),
        hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as *mut c_void),
        lpszClassName: CLASS_NAME,
        ..Default::default()
    };

    if unsafe { RegisterClassExW(&wc) } == 0 {
        let error = unsafe { GetLastError() };
        tracing::error!("RegisterClassExW failed: {error:?}");
        return Err(HostError::ClassRegistration(format!("{error:?}")));
    }
    tracing::debug!("window class registered");
    Ok(())
}

/// Outer window size whose client area is `config.width` x `config.height`.
fn window_size(config: &HostConfig) -> Result<(i32, i32), HostError> {
    let (width, height) = client_extent(config.width, config.height).ok_or_else(|| {
        HostError::WindowCreation(format!(
            "client size {}x{} out of range",
            config.width, config.height
        ))
    })?;

    let mut rect = RECT {
        left: 0,
        top: 0,
        right: width,
        bottom: height,
    };
    unsafe { AdjustWindowRectEx(&mut rect, WS_OVERLAPPEDWINDOW, false, WINDOW_EX_STYLE(0)) }
        .map_err(|e| HostError::WindowCreation(format!("AdjustWindowRectEx failed: {e}")))?;
    Ok((rect.right - rect.left, rect.bottom - rect.top))
}

fn pump() -> Result<i32, HostError> {
    let mut msg = MSG::default();
    loop {
        match unsafe { GetMessageW(&mut msg, None, 0, 0) }.0 {
            0 => return Ok(msg.wParam.0 as i32),
            -1 => {
                return Err(HostError::EventLoop(format!(
                    "GetMessageW failed: {:?}",
                    unsafe { GetLastError() }
                )));
            }
            _ => unsafe {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            },
        }
    }
}

/// Register the class, create and show the window, and pump messages
/// until `WM_QUIT`. Returns the quit code.
pub fn run<C: UiCore>(config: HostConfig, core: C) -> Result<i32, HostError> {
    let hinstance: HINSTANCE = unsafe { GetModuleHandleW(None) }
        .map_err(|e| HostError::ClassRegistration(e.to_string()))?
        .into();

    let (width, height) = window_size(&config)?;
    register_class::<C>(hinstance)?;

    let host = Box::new(HostWindow {
        state: RefCell::new(WindowState {
            window: Win32Window::new(),
            dispatcher: Dispatcher::new(core, config.background),
        }),
        alive: Cell::new(false),
    });

    let created = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            CLASS_NAME,
            &HSTRING::from(config.title.as_str()),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            width,
            height,
            None,
            None,
            Some(hinstance),
            Some(&*host as *const HostWindow<C> as *const c_void),
        )
    };

    let hwnd = match created {
        Ok(hwnd) => hwnd,
        Err(e) => {
            tracing::error!("CreateWindowExW failed: {e}");
            let _ = unsafe { UnregisterClassW(CLASS_NAME, Some(hinstance)) };
            return Err(HostError::WindowCreation(e.to_string()));
        }
    };

    tracing::info!(window = %WindowHandle(hwnd.0 as usize as u64), title = %config.title, "window created");
    let _ = unsafe { ShowWindow(hwnd, SW_SHOW) };

    let result = pump();

    if host.alive.get() {
        let _ = unsafe { DestroyWindow(hwnd) };
    }
    let _ = unsafe { UnregisterClassW(CLASS_NAME, Some(hinstance)) };

    let frames = host.state.borrow().dispatcher.frames();
    tracing::info!(frames, "message pump finished");
    result
}
