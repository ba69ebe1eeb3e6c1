use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::graph::{Point, Segment};

pub const EDGE_WIDTH: f64 = 5.0;
pub const PORT_RING_WIDTH: f64 = 3.0;

/// Role of a drawn primitive; the surface decides what it looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
	Body,
	Edge,
	Marker,
	StartPort,
	EndPort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
	Top,
	Middle,
}

/// Drawing primitives the render pass needs from the host.
pub trait Surface {
	fn fill_background(&mut self, width: f64, height: f64);
	fn draw_polygon(&mut self, points: &[Point], paint: Paint);
	fn draw_segment(&mut self, segment: Segment, paint: Paint);
	fn draw_circle(&mut self, center: Point, radius: f64, paint: Paint);
	/// Text horizontally centred on `at`.
	fn draw_text(&mut self, text: &str, at: Point, baseline: Baseline);
}

/// [`Surface`] backed by a 2d canvas context.
pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Surface for CanvasSurface<'_> {
	fn fill_background(&mut self, width: f64, height: f64) {
		self.ctx.set_fill_style_str("#2b2b3a");
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn draw_polygon(&mut self, points: &[Point], paint: Paint) {
		let Some((first, rest)) = points.split_first() else {
			return;
		};
		let ctx = self.ctx;
		ctx.begin_path();
		ctx.move_to(first.x, first.y);
		for p in rest {
			ctx.line_to(p.x, p.y);
		}
		ctx.close_path();
		match paint {
			Paint::Marker | Paint::Edge => {
				ctx.set_fill_style_str("#ff0000");
				ctx.fill();
			}
			_ => {
				ctx.set_fill_style_str("#ffffff");
				ctx.fill();
				ctx.set_stroke_style_str("#000000");
				ctx.set_line_width(1.0);
				ctx.stroke();
			}
		}
	}

	fn draw_segment(&mut self, segment: Segment, _paint: Paint) {
		let ctx = self.ctx;
		ctx.set_stroke_style_str("#ff0000");
		ctx.set_line_width(EDGE_WIDTH);
		ctx.begin_path();
		ctx.move_to(segment.from.x, segment.from.y);
		ctx.line_to(segment.to.x, segment.to.y);
		ctx.stroke();
	}

	fn draw_circle(&mut self, center: Point, radius: f64, paint: Paint) {
		let ctx = self.ctx;
		let ring = match paint {
			Paint::StartPort => "#ffff00",
			Paint::EndPort => "#ff00ff",
			_ => "#000000",
		};
		ctx.begin_path();
		let _ = ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("rgba(0, 0, 0, 0.1)");
		ctx.fill();
		ctx.set_stroke_style_str(ring);
		ctx.set_line_width(PORT_RING_WIDTH);
		ctx.stroke();
	}

	fn draw_text(&mut self, text: &str, at: Point, baseline: Baseline) {
		let ctx = self.ctx;
		ctx.set_fill_style_str("#000000");
		ctx.set_font("12px Arial");
		ctx.set_text_align("center");
		ctx.set_text_baseline(match baseline {
			Baseline::Top => "top",
			Baseline::Middle => "middle",
		});
		let _ = ctx.fill_text(text, at.x, at.y);
	}
}
