use super::state::JourneyGraph;

/// Space kept to the right of and below the farthest node.
pub const CANVAS_MARGIN: f64 = 200.0;

/// Drawable extent of the canvas, derived from node positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasExtent {
	pub width: f64,
	pub height: f64,
}

impl CanvasExtent {
	pub fn of(graph: &JourneyGraph) -> Self {
		let (max_x, max_y) = graph.nodes().iter().fold((0.0_f64, 0.0_f64), |(mx, my), n| {
			(mx.max(n.position.x), my.max(n.position.y))
		});
		Self {
			width: max_x + CANVAS_MARGIN,
			height: max_y + CANVAS_MARGIN,
		}
	}

	pub fn view_box(&self) -> String {
		format!("0 0 {} {}", self.width, self.height)
	}
}
