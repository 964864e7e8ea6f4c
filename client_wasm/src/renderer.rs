//! Canvas 2D renderer

use game_core::{FrameView, Renderer};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#0f0f1a";
const NET: &str = "#4a4a6b";
const SCORE_TEXT: &str = "#e0e0e0";
const LEFT_PADDLE: &str = "#00b894";
const RIGHT_PADDLE: &str = "#d63031";
const BALL: &str = "#ffeaa7";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the arena size
    pub fn resize(&self, width: f32, height: f32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn draw_net(&self, width: f64, height: f64) -> Result<(), JsValue> {
        let dash = js_sys::Array::of2(&JsValue::from(10.0), &JsValue::from(10.0));
        self.ctx.set_stroke_style_str(NET);
        self.ctx.set_line_width(2.0);
        self.ctx.set_line_dash(&dash)?;
        self.ctx.begin_path();
        self.ctx.move_to(width / 2.0, 0.0);
        self.ctx.line_to(width / 2.0, height);
        self.ctx.stroke();
        self.ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }

    fn draw_scores(&self, view: &FrameView, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx
            .set_font(&format!("{}px 'Press Start 2P'", height * 0.1));
        self.ctx.set_fill_style_str(SCORE_TEXT);
        self.ctx.set_text_align("center");
        self.ctx
            .fill_text(&view.score.left.to_string(), width / 4.0, height / 8.0)?;
        self.ctx
            .fill_text(&view.score.right.to_string(), width * 3.0 / 4.0, height / 8.0)?;
        Ok(())
    }

    fn draw_frame(&self, view: &FrameView) -> Result<(), JsValue> {
        let width = view.arena.width as f64;
        let height = view.arena.height as f64;
        let paddle_width = view.paddle_width as f64;
        let paddle_height = view.arena.paddle_height as f64;

        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.draw_net(width, height)?;
        self.draw_scores(view, width, height)?;

        self.ctx.set_fill_style_str(LEFT_PADDLE);
        self.ctx
            .fill_rect(0.0, view.paddle_left_y as f64, paddle_width, paddle_height);
        self.ctx.set_fill_style_str(RIGHT_PADDLE);
        self.ctx.fill_rect(
            width - paddle_width,
            view.paddle_right_y as f64,
            paddle_width,
            paddle_height,
        );

        self.ctx.set_fill_style_str(BALL);
        self.ctx.begin_path();
        self.ctx.arc(
            view.ball_pos.x as f64,
            view.ball_pos.y as f64,
            view.ball_radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.fill();
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, view: &FrameView) {
        if let Err(err) = self.draw_frame(view) {
            log::warn!("Failed to draw frame: {:?}", err);
        }
    }
}
