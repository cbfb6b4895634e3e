use super::canvas::CanvasExtent;
use super::state::{DragController, JourneyGraph, NODE_HALF, NODE_SIZE};
use super::types::{NodeId, Point};

pub const OVERLAY_OFFSET_X: f64 = NODE_SIZE + 10.0;
pub const OVERLAY_OFFSET_Y: f64 = NODE_HALF;

#[derive(Clone, Debug, PartialEq)]
pub struct NodeRect {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	pub size: f64,
}

impl NodeRect {
	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.x && p.x <= self.x + self.size && p.y >= self.y && p.y <= self.y + self.size
	}
}

/// A directed edge between two node centres.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeLine {
	pub source: NodeId,
	pub target: NodeId,
	pub from: Point,
	pub to: Point,
}

impl EdgeLine {
	/// SVG path data for the straight segment.
	pub fn path_data(&self) -> String {
		format!("M {} {} L {} {}", self.from.x, self.from.y, self.to.x, self.to.y)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct InfoOverlay {
	pub node: NodeId,
	/// Step this one follows in the chain.
	pub after: Option<NodeId>,
	pub at: Point,
	pub text: String,
}

/// Everything needed to draw one frame, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	pub extent: CanvasExtent,
	pub edges: Vec<EdgeLine>,
	pub rects: Vec<NodeRect>,
	pub overlay: Option<InfoOverlay>,
}

impl Scene {
	/// Topmost node under `p` (canvas coordinates).
	pub fn node_at(&self, p: Point) -> Option<NodeId> {
		self.rects.iter().rev().find(|r| r.contains(p)).map(|r| r.id)
	}
}

fn centre(p: Point) -> Point {
	Point::new(p.x + NODE_HALF, p.y + NODE_HALF)
}

pub fn build_scene(graph: &JourneyGraph, drag: &DragController) -> Scene {
	// Successors pointing at missing nodes draw nothing.
	let edges = graph
		.nodes()
		.iter()
		.filter_map(|node| {
			let target = graph.node(node.successor?)?;
			Some(EdgeLine {
				source: node.id,
				target: target.id,
				from: centre(node.position),
				to: centre(target.position),
			})
		})
		.collect();

	let rects = graph
		.nodes()
		.iter()
		.map(|n| NodeRect {
			id: n.id,
			x: n.position.x,
			y: n.position.y,
			size: NODE_SIZE,
		})
		.collect();

	let overlay = drag
		.dragging()
		.and_then(|id| graph.node(id))
		.map(|n| InfoOverlay {
			node: n.id,
			after: graph.predecessor(n.id),
			at: Point::new(n.position.x + OVERLAY_OFFSET_X, n.position.y + OVERLAY_OFFSET_Y),
			text: n.info.clone(),
		});

	Scene {
		extent: CanvasExtent::of(graph),
		edges,
		rects,
		overlay,
	}
}
