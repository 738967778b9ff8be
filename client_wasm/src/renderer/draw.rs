use std::f64::consts::TAU;

use game_core::{Config, Params, Score, Side, Snapshot};
use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::theme::{self, bold_font};
use crate::state::{Backdrop, ScoreFlash};
use crate::viewport::Viewport;

type DrawResult = Result<(), JsValue>;

/// Animated gradient with the dashed centre line on top
pub fn draw_background(
    ctx: &CanvasRenderingContext2d,
    vp: &Viewport,
    backdrop: &Backdrop,
) -> DrawResult {
    let (w, h) = (vp.width, vp.height);

    let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h * backdrop.gradient_reach());
    for (i, stop) in backdrop.gradient_stops().iter().enumerate() {
        gradient.add_color_stop(i as f32 / 2.0, &stop.to_css())?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.save();
    let dash = JsValue::from_f64(vp.sx(18.0));
    ctx.set_line_dash(&js_sys::Array::of2(&dash, &dash))?;
    ctx.set_stroke_style_str(theme::MIDLINE_COLOR);
    ctx.set_line_width(vp.sx(4.0));
    ctx.set_global_alpha(backdrop.midline_alpha());
    ctx.begin_path();
    ctx.move_to(w / 2.0, 0.0);
    ctx.line_to(w / 2.0, h);
    ctx.stroke();
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

/// Fading afterimages, largest and faintest at the oldest end
pub fn draw_trail(
    ctx: &CanvasRenderingContext2d,
    vp: &Viewport,
    config: &Config,
    trail: &[Vec2],
) -> DrawResult {
    let len = trail.len() as f64;
    for (i, pos) in trail.iter().enumerate() {
        let t = i as f64 / len;
        ctx.save();
        ctx.begin_path();
        ctx.arc(
            vp.sx(pos.x),
            vp.sy(pos.y),
            vp.sx(config.ball_radius) * (0.45 + 0.38 * t),
            0.0,
            TAU,
        )?;
        ctx.set_global_alpha(0.23 * (1.0 - t));
        ctx.set_fill_style_str(theme::TRAIL_COLOR);
        ctx.set_shadow_color(theme::GLOW_COLOR);
        ctx.set_shadow_blur(vp.sx(8.0) * (1.0 - t));
        ctx.fill();
        ctx.restore();
    }
    Ok(())
}

pub fn draw_paddles(
    ctx: &CanvasRenderingContext2d,
    vp: &Viewport,
    config: &Config,
    snapshot: &Snapshot,
) -> DrawResult {
    for (side, y) in [(Side::Player, snapshot.player_y), (Side::Ai, snapshot.ai_y)] {
        let top = y - config.paddle_height / 2.0;
        draw_paddle(ctx, vp, config, config.paddle_x(side), top, theme::side_color(side))?;
    }
    Ok(())
}

fn draw_paddle(
    ctx: &CanvasRenderingContext2d,
    vp: &Viewport,
    config: &Config,
    x: f32,
    top: f32,
    color: &str,
) -> DrawResult {
    ctx.save();
    ctx.set_fill_style_str(color);
    ctx.set_shadow_color(color);
    ctx.set_shadow_blur(vp.sx(18.0));
    rounded_rect(
        ctx,
        vp.sx(x),
        vp.sy(top),
        vp.sx(config.paddle_width),
        vp.sy(config.paddle_height),
        vp.sx(Params::PADDLE_RADIUS),
    )?;
    ctx.set_global_alpha(0.95);
    ctx.fill();
    ctx.restore();
    Ok(())
}

/// Rounded rectangle path; the radius shrinks to fit narrow shapes
fn rounded_rect(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
) -> DrawResult {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}

pub fn draw_ball(
    ctx: &CanvasRenderingContext2d,
    vp: &Viewport,
    config: &Config,
    pos: Vec2,
) -> DrawResult {
    ctx.save();
    ctx.begin_path();
    ctx.arc(vp.sx(pos.x), vp.sy(pos.y), vp.sx(config.ball_radius), 0.0, TAU)?;
    ctx.set_shadow_color(theme::BALL_COLOR);
    ctx.set_shadow_blur(vp.sx(16.0));
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(theme::BALL_COLOR);
    ctx.fill();
    ctx.restore();
    Ok(())
}

/// Scores at the quarter marks; the side that just scored glows in its colour
pub fn draw_score(
    ctx: &CanvasRenderingContext2d,
    vp: &Viewport,
    score: &Score,
    flash: &ScoreFlash,
) -> DrawResult {
    let column = |side: Side| match side {
        Side::Player => vp.width / 4.0,
        Side::Ai => vp.width * 3.0 / 4.0,
    };
    let baseline = vp.sy(54.0);

    ctx.save();
    ctx.set_font(&bold_font(vp.sx(38.0)));
    ctx.set_text_align("center");
    ctx.set_shadow_color(theme::GLOW_COLOR);
    ctx.set_shadow_blur(vp.sx(13.0));

    ctx.set_global_alpha(1.0 - flash.alpha as f64);
    ctx.set_fill_style_str(theme::TEXT_COLOR);
    for side in [Side::Player, Side::Ai] {
        ctx.fill_text(&score.get(side).to_string(), column(side), baseline)?;
    }

    if let (true, Some(side)) = (flash.is_active(), flash.side) {
        ctx.set_global_alpha(flash.alpha as f64);
        ctx.set_fill_style_str(theme::side_color(side));
        ctx.fill_text(&score.get(side).to_string(), column(side), baseline)?;
    }
    ctx.restore();
    Ok(())
}

pub fn draw_start_screen(ctx: &CanvasRenderingContext2d, vp: &Viewport) -> DrawResult {
    let (cx, cy) = (vp.width / 2.0, vp.height / 2.0);

    ctx.save();
    ctx.set_font(&bold_font(vp.sx(48.0)));
    ctx.set_text_align("center");
    ctx.set_shadow_color(theme::GLOW_COLOR);
    ctx.set_shadow_blur(vp.sx(30.0));
    ctx.set_global_alpha(0.93);
    ctx.set_fill_style_str(theme::TEXT_COLOR);
    ctx.fill_text("PONG", cx, cy - vp.sy(44.0))?;

    ctx.set_font(&bold_font(vp.sx(24.0)));
    ctx.set_shadow_blur(vp.sx(10.0));
    ctx.set_global_alpha(0.88);
    ctx.fill_text("Move your paddle with mouse or touch", cx, cy + vp.sy(2.0))?;
    ctx.set_global_alpha(0.78);
    ctx.fill_text("Click or tap to start", cx, cy + vp.sy(40.0))?;
    ctx.restore();
    Ok(())
}

pub fn draw_win_screen(ctx: &CanvasRenderingContext2d, vp: &Viewport, winner: Side) -> DrawResult {
    let (cx, cy) = (vp.width / 2.0, vp.height / 2.0);
    let headline = match winner {
        Side::Player => "You Win!",
        Side::Ai => "AI Wins!",
    };

    ctx.save();
    ctx.set_font(&bold_font(vp.sx(38.0)));
    ctx.set_text_align("center");
    ctx.set_shadow_color(theme::GLOW_COLOR);
    ctx.set_shadow_blur(vp.sx(16.0));
    ctx.set_global_alpha(0.96);
    ctx.set_fill_style_str(theme::side_color(winner));
    ctx.fill_text(headline, cx, cy - vp.sy(16.0))?;

    ctx.set_font(&bold_font(vp.sx(22.0)));
    ctx.set_global_alpha(0.89);
    ctx.set_fill_style_str(theme::TEXT_COLOR);
    ctx.fill_text("Click or tap to play again", cx, cy + vp.sy(28.0))?;
    ctx.restore();
    Ok(())
}
