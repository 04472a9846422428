//! The board program: wires a [`Board`] to the engine runtime.

use anyhow::{Context, Result};

use inkboard_engine::coords::Viewport;
use inkboard_engine::core::{App, AppControl, FrameCtx, StartCtx};
use inkboard_engine::device::GpuInit;
use inkboard_engine::input::{InputEvent, InputState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};
use inkboard_engine::render::PointRenderer;
use inkboard_engine::window::Runtime;

use crate::board::Board;
use crate::canvas::{self, GpuCanvas};
use crate::config::BoardConfig;
use crate::translate::{self, BoardEvent};

/// Opens a board window and runs until it is closed.
pub fn run(config: BoardConfig) -> Result<()> {
    log::info!("starting {}", config.title);
    Runtime::run(config.runtime_config(), GpuInit::default(), BoardApp::new(config))
}

pub struct BoardApp {
    config: BoardConfig,
    board: Board,
    renderer: Option<PointRenderer>,
}

impl BoardApp {
    pub fn new(config: BoardConfig) -> Self {
        let board = config.board();
        Self {
            config,
            board,
            renderer: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Maps pointer input to board events. Only the left button draws.
///
/// A press with no known cursor position holds the button without stamping.
/// Losing focus ends the stroke, since the release may never arrive.
pub fn pointer_event(event: &InputEvent) -> Option<BoardEvent> {
    match *event {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            position,
        }) => Some(match (state, position) {
            (MouseButtonState::Pressed, Some((x, y))) => BoardEvent::ButtonPress { x, y },
            (MouseButtonState::Pressed, None) => BoardEvent::ButtonHold,
            (MouseButtonState::Released, _) => BoardEvent::ButtonRelease,
        }),
        InputEvent::PointerMoved(PointerMoveEvent { x, y }) => Some(BoardEvent::CursorMove { x, y }),
        InputEvent::Focused(false) => Some(BoardEvent::ButtonRelease),
        _ => None,
    }
}

impl App for BoardApp {
    fn on_start(&mut self, ctx: &StartCtx<'_>) -> Result<()> {
        let renderer = PointRenderer::new(ctx.device, ctx.surface_format, self.config.point_size)
            .context("failed to build the point pipeline")?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_resize(&mut self, viewport: Viewport) {
        self.board.dispatch(BoardEvent::Resize {
            width: viewport.width,
            height: viewport.height,
        });
    }

    fn on_input(&mut self, event: &InputEvent, _state: &InputState) -> AppControl {
        match pointer_event(event) {
            Some(ev) => self.board.dispatch(ev),
            None => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        for ev in translate::held_key_events(self.board.palette(), ctx.input) {
            if self.board.dispatch(ev) == AppControl::Exit {
                return Ok(AppControl::Exit);
            }
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(AppControl::Continue);
        };
        let board = &self.board;

        ctx.render(self.config.background, |rctx, target| {
            let mut gpu = GpuCanvas {
                renderer,
                ctx: rctx,
                target,
            };
            canvas::render_frame(board, &mut gpu);
        })?;
        Ok(AppControl::Continue)
    }
}
