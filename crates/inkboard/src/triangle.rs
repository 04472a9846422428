//! Animated triangle demo: a sliding, pulsing RGB triangle.

use anyhow::{Context, Result};

use inkboard_engine::core::{App, AppControl, FrameCtx, StartCtx};
use inkboard_engine::device::GpuInit;
use inkboard_engine::input::Key;
use inkboard_engine::paint::Color;
use inkboard_engine::render::TriangleRenderer;
use inkboard_engine::window::{Runtime, RuntimeConfig};

pub const BACKGROUND: Color = Color::rgb(0.2, 0.3, 0.3);

pub fn run() -> Result<()> {
    let config = RuntimeConfig {
        title: "inkboard triangle".to_string(),
        ..RuntimeConfig::default()
    };
    Runtime::run(config, gpu_init(), TriangleApp::default())
}

/// Vertex colors are written straight to the surface, so the demo asks for
/// a linear (non-sRGB) format to keep them unconverted.
pub fn gpu_init() -> GpuInit {
    GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    }
}

#[derive(Default)]
pub struct TriangleApp {
    renderer: Option<TriangleRenderer>,
}

impl App for TriangleApp {
    fn on_start(&mut self, ctx: &StartCtx<'_>) -> Result<()> {
        let renderer = TriangleRenderer::new(ctx.device, ctx.surface_format)
            .context("failed to build the triangle pipeline")?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        if ctx.input.key_down(Key::Escape) {
            return Ok(AppControl::Exit);
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(AppControl::Continue);
        };
        let t = ctx.time.elapsed;

        ctx.render(BACKGROUND, |rctx, target| renderer.render(rctx, target, t))?;
        Ok(AppControl::Continue)
    }
}
