// zimgui-bridge/tests/frame_upload_tests.rs
//
// Integration tests for canvas → swapchain byte encoding and the tracing
// helpers. The GPU itself is not touched.

use wgpu::TextureFormat;

use zimgui_bridge::gfx::{TexelOrder, encode_frame};
use zimgui_bridge::util::panic_message;
use zimgui_core::{Canvas, Rect, Rgba, Size};

fn two_pixel_frame() -> Canvas {
    let mut c = Canvas::new(Size::new(2, 1), Rgba::from_rgba8(0x11, 0x22, 0x33, 0xFF));
    c.fill_rect(Rect::new(1.0, 0.0, 1.0, 1.0), Rgba::from_rgba8(0xAA, 0xBB, 0xCC, 0xFF));
    c
}

#[test]
fn test_copyable_formats() {
    assert_eq!(TexelOrder::for_format(TextureFormat::Bgra8Unorm), Some(TexelOrder::Bgra));
    assert_eq!(TexelOrder::for_format(TextureFormat::Bgra8UnormSrgb), Some(TexelOrder::Bgra));
    assert_eq!(TexelOrder::for_format(TextureFormat::Rgba8Unorm), Some(TexelOrder::Rgba));
    assert_eq!(TexelOrder::for_format(TextureFormat::Rgba8UnormSrgb), Some(TexelOrder::Rgba));
    assert_eq!(TexelOrder::for_format(TextureFormat::Rgba16Float), None);
    assert_eq!(TexelOrder::for_format(TextureFormat::Rgb10a2Unorm), None);
}

#[test]
fn test_bgra_encoding() {
    let frame = two_pixel_frame();
    let mut scratch = Vec::new();
    let bytes = encode_frame(&frame, TexelOrder::Bgra, &mut scratch);
    assert_eq!(bytes, &[0x33, 0x22, 0x11, 0xFF, 0xCC, 0xBB, 0xAA, 0xFF]);
}

#[test]
#[cfg(target_endian = "little")]
fn test_bgra_borrows_canvas_bytes() {
    let frame = two_pixel_frame();
    let mut scratch = Vec::new();
    let bytes = encode_frame(&frame, TexelOrder::Bgra, &mut scratch);
    assert_eq!(bytes.as_ptr(), frame.as_bytes().as_ptr());
}

#[test]
fn test_rgba_encoding_swizzles() {
    let frame = two_pixel_frame();
    let mut scratch = vec![0xEE; 3];
    let bytes = encode_frame(&frame, TexelOrder::Rgba, &mut scratch);
    assert_eq!(bytes, &[0x11, 0x22, 0x33, 0xFF, 0xAA, 0xBB, 0xCC, 0xFF]);
}

#[test]
fn test_panic_payloads() {
    let s: Box<dyn std::any::Any + Send> = Box::new("boom");
    assert_eq!(panic_message(&*s), "boom");
    let s: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
    assert_eq!(panic_message(&*s), "owned");
    let s: Box<dyn std::any::Any + Send> = Box::new(42u8);
    assert_eq!(panic_message(&*s), "<non-string panic payload>");
}
