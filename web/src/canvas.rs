use hangman_core::{CANVAS_SIZE, FigureStep, GALLOWS, LINE_WIDTH, Stroke};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::theme::Theme;

/// Thin wrapper over the 2d context of the figure canvas.
pub(crate) struct Painter {
    ctx: CanvasRenderingContext2d,
    theme: Theme,
}

impl Painter {
    pub(crate) fn new(canvas: &HtmlCanvasElement, theme: Theme) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
            Ok(None) => return None,
            Err(err) => {
                log::error!("failed to get canvas context: {:?}", err);
                return None;
            }
        };
        Some(Self { ctx, theme })
    }

    pub(crate) fn clear(&self) {
        let (width, height) = CANVAS_SIZE;
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    pub(crate) fn draw_gallows(&self) {
        for stroke in &GALLOWS {
            self.draw(stroke);
        }
    }

    pub(crate) fn draw_step(&self, step: &FigureStep) {
        log::trace!("drawing {:?}", step.part);
        for stroke in step.strokes {
            self.draw(stroke);
        }
    }

    fn draw(&self, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(self.theme.stroke_color());
        self.ctx.set_line_width(LINE_WIDTH);
        self.ctx.begin_path();

        match *stroke {
            Stroke::Line { from, to } => {
                self.ctx.move_to(from.0, from.1);
                self.ctx.line_to(to.0, to.1);
            }
            Stroke::Circle { center, radius } => {
                if let Err(err) =
                    self.ctx
                        .arc(center.0, center.1, radius, 0.0, std::f64::consts::TAU)
                {
                    log::error!("failed to draw arc: {:?}", err);
                    return;
                }
            }
        }

        self.ctx.stroke();
    }
}
