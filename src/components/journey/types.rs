/// Identifier of a step in the journey. Assigned once, never reused.
pub type NodeId = u32;

/// A point in canvas coordinates (top-left origin).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// One step of the journey.
///
/// Only the outgoing link is stored; the incoming one is looked up through
/// [`JourneyGraph::predecessor`](super::state::JourneyGraph::predecessor).
#[derive(Clone, Debug, PartialEq)]
pub struct JourneyNode {
	pub id: NodeId,
	pub position: Point,
	pub successor: Option<NodeId>,
	pub info: String,
}

impl JourneyNode {
	pub fn new(id: NodeId, position: Point) -> Self {
		Self {
			id,
			position,
			successor: None,
			info: format!("Step {}", id),
		}
	}

	pub fn with_successor(mut self, successor: NodeId) -> Self {
		self.successor = Some(successor);
		self
	}
}
