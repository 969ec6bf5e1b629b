//! zimgui demo: a few draggable rounded panels, a spinning texture, and a
//! pointer marker.
//!
//! Usage: `zimgui-demo [config.json]`
//!   Primary drag  - move a panel
//!   Wheel         - spin the texture
//!   Typing        - echoed to the log

use std::path::PathBuf;

use zimgui_bridge::util::{init_tracing, install_panic_hook};
use zimgui_core::keymap;
use zimgui_core::{
    HostConfig, KeyEvent, MouseButton, Point, Rect, RenderContext, Rgba, ScrollDelta, Size,
    Texture, UiCore,
};

/// Panel colors as `COLORREF`s (`0x00BBGGRR`).
const PANEL_COLORS: [u32; 3] = [0x00D07A3A, 0x004FB06A, 0x003A5ED0];

struct Drag {
    panel: usize,
    grab: Point,
}

struct Demo {
    panels: Vec<Rect>,
    drag: Option<Drag>,
    spin: f32,
    checker: Texture,
}

impl Demo {
    fn new() -> anyhow::Result<Self> {
        Ok(Self {
            panels: vec![
                Rect::new(40.0, 40.0, 220.0, 140.0),
                Rect::new(300.0, 80.0, 180.0, 180.0),
                Rect::new(120.0, 260.0, 260.0, 120.0),
            ],
            drag: None,
            spin: 0.0,
            checker: checker_texture(8)?,
        })
    }

    fn panel_at(&self, p: Point) -> Option<usize> {
        self.panels.iter().rposition(|r| r.contains(p))
    }
}

fn checker_texture(cells: u32) -> anyhow::Result<Texture> {
    let mut data = Vec::with_capacity((cells * cells * 4) as usize);
    for y in 0..cells {
        for x in 0..cells {
            let texel = if (x + y) % 2 == 0 {
                [0x20, 0x20, 0x28, 0xFF]
            } else {
                [0xF0, 0xC0, 0x40, 0xFF]
            };
            data.extend_from_slice(&texel);
        }
    }
    Ok(Texture::from_rgba8(cells, cells, data)?)
}

impl UiCore for Demo {
    fn on_resize(&mut self, _ctx: &mut RenderContext<'_>, size: Size) {
        tracing::debug!(width = size.width, height = size.height, "resized");
    }

    fn on_paint(&mut self, ctx: &mut RenderContext<'_>) {
        let size = ctx.client_size();

        // Header strip.
        ctx.fill_rect(
            Rect::new(0.0, 0.0, size.width as f32, 24.0),
            Rgba::from_rgba8(0x30, 0x34, 0x3C, 0xFF),
        );

        for (i, r) in self.panels.iter().enumerate() {
            let color = PANEL_COLORS[i % PANEL_COLORS.len()];
            ctx.rounded_rect(
                color,
                r.x as i32,
                r.y as i32,
                r.right() as i32,
                r.bottom() as i32,
                24,
                24,
            );
            let inset = Rect::new(r.x + 12.0, r.y + 12.0, r.width - 24.0, 20.0);
            ctx.draw_rectangle_rounded(inset, 6.0, Rgba::new(1.0, 1.0, 1.0, 0.6));
        }

        let side = 96.0;
        let center = Point::new(size.width as f32 - 90.0, size.height as f32 - 90.0);
        ctx.draw_texture(
            &self.checker,
            Rect::new(0.0, 0.0, self.checker.width() as f32, self.checker.height() as f32),
            Rect::new(center.x, center.y, side, side),
            Point::new(side / 2.0, side / 2.0),
            self.spin,
            Rgba::WHITE,
        );

        if let Some(p) = ctx.pointer_position() {
            ctx.fill_rect(Rect::new(p.x - 3.0, p.y - 3.0, 6.0, 6.0), Rgba::BLACK);
        }
    }

    fn on_mouse_click(
        &mut self,
        ctx: &mut RenderContext<'_>,
        button: MouseButton,
        pressed: bool,
        position: Point,
    ) {
        if button != MouseButton::Primary {
            return;
        }
        if pressed {
            self.drag = self.panel_at(position).map(|panel| {
                let r = self.panels[panel];
                Drag {
                    panel,
                    grab: Point::new(position.x - r.x, position.y - r.y),
                }
            });
        } else {
            self.drag = None;
        }
        ctx.request_repaint();
    }

    fn on_mouse_move(&mut self, ctx: &mut RenderContext<'_>, position: Point) {
        if let Some(drag) = &self.drag {
            let r = &mut self.panels[drag.panel];
            r.x = position.x - drag.grab.x;
            r.y = position.y - drag.grab.y;
        }
        ctx.request_repaint();
    }

    fn on_scroll(&mut self, ctx: &mut RenderContext<'_>, delta: ScrollDelta) {
        self.spin = (self.spin + delta.dy as f32 * 15.0).rem_euclid(360.0);
        ctx.request_repaint();
    }

    fn on_key(&mut self, _ctx: &mut RenderContext<'_>, key: KeyEvent) {
        if key.is_pressed() && !keymap::is_modifier(key.code) {
            tracing::debug!(key = %keymap::name(key.code), modifiers = key.modifiers.bits(), repeat = key.repeat, "key");
        }
    }

    fn on_text_commit(&mut self, _ctx: &mut RenderContext<'_>, text: &str) {
        tracing::info!(%text, "typed");
    }
}

fn main() -> anyhow::Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = HostConfig::load_or_default(path.as_deref())?;

    init_tracing(&config.log_filter);
    install_panic_hook();

    tracing::info!("zimgui demo v{} starting", env!("CARGO_PKG_VERSION"));

    let code = zimgui_bridge::run(config, Demo::new()?)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
