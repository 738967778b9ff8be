pub mod draw;
pub mod init;
pub mod theme;

use game_core::{Config, FsmState, Snapshot};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::Result;
use crate::state::{Backdrop, ScoreFlash};
use crate::viewport::Viewport;

pub struct Renderer {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub viewport: Viewport,
    pub config: Config,
}

impl Renderer {
    pub fn new(canvas_id: &str) -> Result<Self> {
        let init::CanvasContext { canvas, ctx } = init::init_canvas(canvas_id)?;
        let mut renderer = Self {
            canvas,
            ctx,
            viewport: Viewport::base(),
            config: Config::new(),
        };
        renderer.fit_to_window()?;
        Ok(renderer)
    }

    /// Resize the canvas to the largest arena-shaped box the window allows
    pub fn fit_to_window(&mut self) -> Result<()> {
        let (width, height) = init::window_size()?;
        let viewport = Viewport::fit(width, height);
        if viewport != self.viewport || self.canvas.width() != viewport.width as u32 {
            self.canvas.set_width(viewport.width as u32);
            self.canvas.set_height(viewport.height as u32);
            self.viewport = viewport;
        }
        Ok(())
    }

    /// Canvas bounding-rect top, for mapping pointer coordinates
    pub fn canvas_top(&self) -> f64 {
        self.canvas.get_bounding_client_rect().top()
    }

    pub fn focus(&self) {
        if let Err(err) = self.canvas.focus() {
            log::debug!("canvas focus failed: {:?}", err);
        }
    }

    pub fn draw(&self, snapshot: &Snapshot, flash: &ScoreFlash, backdrop: &Backdrop) -> Result<()> {
        let ctx = &self.ctx;
        let vp = &self.viewport;

        draw::draw_background(ctx, vp, backdrop)?;
        draw::draw_trail(ctx, vp, &self.config, &snapshot.trail)?;
        draw::draw_paddles(ctx, vp, &self.config, snapshot)?;
        draw::draw_ball(ctx, vp, &self.config, snapshot.ball)?;
        draw::draw_score(ctx, vp, &snapshot.score, flash)?;

        match snapshot.state {
            FsmState::Waiting => draw::draw_start_screen(ctx, vp)?,
            FsmState::GameOver => {
                if let Some(winner) = snapshot.winner {
                    draw::draw_win_screen(ctx, vp, winner)?;
                }
            }
            FsmState::Running | FsmState::Won => {}
        }
        Ok(())
    }
}
