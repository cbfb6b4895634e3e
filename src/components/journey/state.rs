use log::{debug, info, trace};

use super::types::{JourneyNode, NodeId, Point};

pub const NODE_SIZE: f64 = 50.0;
pub const NODE_HALF: f64 = NODE_SIZE / 2.0;
/// Delta between the previous last step and a freshly appended one, on both axes.
pub const APPEND_OFFSET: f64 = 100.0;

const SEED_POSITIONS: &[(f64, f64)] = &[
	(100.0, 200.0),
	(200.0, 300.0),
	(300.0, 400.0),
	(400.0, 500.0),
];

/// The journey: an ordered chain of steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JourneyGraph {
	nodes: Vec<JourneyNode>,
}

impl JourneyGraph {
	/// The initial four-step journey, chained 1 → 2 → 3 → 4.
	pub fn seeded() -> Self {
		let count = SEED_POSITIONS.len() as NodeId;
		let nodes = SEED_POSITIONS
			.iter()
			.zip(1..)
			.map(|(&(x, y), id)| {
				let node = JourneyNode::new(id, Point::new(x, y));
				if id < count {
					node.with_successor(id + 1)
				} else {
					node
				}
			})
			.collect();
		Self { nodes }
	}

	pub fn nodes(&self) -> &[JourneyNode] {
		&self.nodes
	}

	pub fn node(&self, id: NodeId) -> Option<&JourneyNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn last(&self) -> Option<&JourneyNode> {
		self.nodes.last()
	}

	/// The node whose successor is `id`, if any.
	pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
		self.nodes
			.iter()
			.find(|n| n.successor == Some(id))
			.map(|n| n.id)
	}

	/// Moves the node to `(x, y)`. Unknown ids are ignored.
	pub fn reposition(&mut self, id: NodeId, x: f64, y: f64) {
		if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
			trace!("reposition node {} to ({}, {})", id, x, y);
			node.position = Point::new(x, y);
		}
	}

	/// Appends a step after the current last one and returns its id.
	pub fn append(&mut self) -> NodeId {
		let id = self.next_id();
		let origin = self.last().map(|n| n.position).unwrap_or_default();
		let position = Point::new(origin.x + APPEND_OFFSET, origin.y + APPEND_OFFSET);

		if let Some(prev) = self.nodes.last_mut() {
			prev.successor = Some(id);
		}
		self.nodes.push(JourneyNode::new(id, position));
		info!("appended node {} at ({}, {})", id, position.x, position.y);
		id
	}

	// `len + 1` matches every chain built through `seeded`/`append`; the
	// fallback only matters for hand-built snapshots with sparse ids.
	fn next_id(&self) -> NodeId {
		let candidate = self.nodes.len() as NodeId + 1;
		if self.node(candidate).is_none() {
			return candidate;
		}
		self.nodes.iter().map(|n| n.id).max().unwrap_or(0) + 1
	}
}

#[cfg(test)]
impl JourneyGraph {
	pub fn from_nodes(nodes: Vec<JourneyNode>) -> Self {
		Self { nodes }
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}
}

/// Pointer state machine: idle, or dragging one node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragController {
	dragging: Option<NodeId>,
}

impl DragController {
	pub fn dragging(&self) -> Option<NodeId> {
		self.dragging
	}

	/// Starts dragging `id`. A press during a drag switches to the new node.
	pub fn pointer_down(&mut self, id: NodeId) {
		debug!("drag start on node {}", id);
		self.dragging = Some(id);
	}

	/// Centres the dragged node under the pointer.
	///
	/// `pointer` is in screen space and `canvas_origin` is the canvas's
	/// screen-space top-left corner. Returns `false` when idle.
	pub fn pointer_move(
		&self,
		graph: &mut JourneyGraph,
		pointer: Point,
		canvas_origin: Point,
	) -> bool {
		let Some(id) = self.dragging else {
			return false;
		};
		let (x, y) = (pointer.x - canvas_origin.x, pointer.y - canvas_origin.y);
		graph.reposition(id, x - NODE_HALF, y - NODE_HALF);
		true
	}

	pub fn pointer_up(&mut self) {
		if let Some(id) = self.dragging.take() {
			debug!("drag end on node {}", id);
		}
	}

	pub fn pointer_leave(&mut self) {
		self.pointer_up();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seeded_chain_links_in_order() {
		let graph = JourneyGraph::seeded();
		assert_eq!(graph.len(), 4);
		assert_eq!(graph.node(1).unwrap().successor, Some(2));
		assert_eq!(graph.node(4).unwrap().successor, None);
		assert_eq!(graph.predecessor(1), None);
		assert_eq!(graph.predecessor(3), Some(2));
		assert_eq!(graph.node(2).unwrap().position, Point::new(200.0, 300.0));
	}

	#[test]
	fn reposition_moves_only_target() {
		let mut graph = JourneyGraph::seeded();
		let before = graph.clone();
		graph.reposition(3, 10.0, 20.0);

		for node in graph.nodes() {
			if node.id == 3 {
				assert_eq!(node.position, Point::new(10.0, 20.0));
			} else {
				assert_eq!(node.position, before.node(node.id).unwrap().position);
			}
		}
	}

	#[test]
	fn reposition_unknown_id_is_noop() {
		let mut graph = JourneyGraph::seeded();
		let before = graph.clone();
		graph.reposition(99, 1.0, 1.0);
		assert_eq!(graph, before);
	}

	#[test]
	fn append_links_new_tail() {
		let mut graph = JourneyGraph::seeded();
		let prev = graph.last().unwrap().clone();
		let id = graph.append();

		assert_eq!(id, 5);
		assert_eq!(graph.len(), 5);
		let new = graph.last().unwrap();
		assert_eq!(new.id, id);
		assert_eq!(new.successor, None);
		assert_eq!(new.info, "Step 5");
		assert_eq!(
			new.position,
			Point::new(prev.position.x + 100.0, prev.position.y + 100.0)
		);
		assert_eq!(graph.predecessor(id), Some(prev.id));
		assert_eq!(graph.node(prev.id).unwrap().successor, Some(id));
	}

	#[test]
	fn append_to_empty_graph() {
		let mut graph = JourneyGraph::default();
		let id = graph.append();

		assert_eq!(id, 1);
		assert_eq!(graph.len(), 1);
		assert_eq!(graph.predecessor(id), None);
		assert_eq!(graph.node(id).unwrap().successor, None);
		assert_eq!(graph.node(id).unwrap().position, Point::new(100.0, 100.0));
	}

	#[test]
	fn append_skips_ids_already_taken() {
		let mut graph = JourneyGraph::from_nodes(vec![
			JourneyNode::new(1, Point::new(0.0, 0.0)).with_successor(3),
			JourneyNode::new(3, Point::new(50.0, 50.0)),
		]);
		let id = graph.append();
		assert_eq!(id, 4);
		assert_eq!(graph.node(3).unwrap().successor, Some(4));
	}

	#[test]
	fn drag_centres_node_under_pointer() {
		let mut graph = JourneyGraph::seeded();
		let mut drag = DragController::default();

		drag.pointer_down(2);
		assert_eq!(drag.dragging(), Some(2));
		assert!(drag.pointer_move(&mut graph, Point::new(300.0, 300.0), Point::default()));
		drag.pointer_up();

		assert_eq!(graph.node(2).unwrap().position, Point::new(275.0, 275.0));
		assert_eq!(drag.dragging(), None);
		assert!(!drag.pointer_move(&mut graph, Point::new(10.0, 10.0), Point::default()));
		assert_eq!(graph.node(2).unwrap().position, Point::new(275.0, 275.0));
	}

	#[test]
	fn drag_subtracts_canvas_origin() {
		let mut graph = JourneyGraph::seeded();
		let mut drag = DragController::default();

		drag.pointer_down(1);
		drag.pointer_move(&mut graph, Point::new(300.0, 300.0), Point::new(40.0, 60.0));
		assert_eq!(graph.node(1).unwrap().position, Point::new(235.0, 215.0));
	}

	#[test]
	fn move_while_idle_leaves_graph_alone() {
		let mut graph = JourneyGraph::seeded();
		let before = graph.clone();
		let drag = DragController::default();

		assert!(!drag.pointer_move(&mut graph, Point::new(5.0, 5.0), Point::default()));
		assert_eq!(graph, before);
	}

	#[test]
	fn leave_ends_drag() {
		let mut graph = JourneyGraph::seeded();
		let mut drag = DragController::default();

		drag.pointer_down(3);
		drag.pointer_leave();
		assert_eq!(drag.dragging(), None);

		let before = graph.clone();
		drag.pointer_move(&mut graph, Point::new(5.0, 5.0), Point::default());
		assert_eq!(graph, before);
	}

	#[test]
	fn last_pointer_down_wins() {
		let mut graph = JourneyGraph::seeded();
		let mut drag = DragController::default();

		drag.pointer_down(1);
		drag.pointer_down(4);
		drag.pointer_move(&mut graph, Point::new(125.0, 125.0), Point::default());

		assert_eq!(graph.node(4).unwrap().position, Point::new(100.0, 100.0));
		assert_eq!(graph.node(1).unwrap().position, Point::new(100.0, 200.0));
	}
}
