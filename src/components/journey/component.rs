use leptos::ev::{self, PointerEvent};
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::render::build_scene;
use super::state::{DragController, JourneyGraph};
use super::types::Point;

/// Pointer position and canvas top-left corner, both in screen space.
fn screen_points(ev: &PointerEvent) -> Option<(Point, Point)> {
	let Some(target) = ev.current_target() else {
		warn!("{} event without a current target", ev.type_());
		return None;
	};
	let Ok(canvas) = target.dyn_into::<Element>() else {
		warn!("{} event target is not an element", ev.type_());
		return None;
	};
	let rect = canvas.get_bounding_client_rect();
	Some((
		Point::new(ev.client_x() as f64, ev.client_y() as f64),
		Point::new(rect.left(), rect.top()),
	))
}

#[component]
pub fn JourneyBuilder(
	#[prop(default = JourneyGraph::seeded())] initial: JourneyGraph,
) -> impl IntoView {
	let graph = RwSignal::new(initial);
	let drag = RwSignal::new(DragController::default());
	let scene = Memo::new(move |_| graph.with(|g| drag.with(|d| build_scene(g, d))));

	let end_drag = move || {
		if drag.with_untracked(|d| d.dragging().is_some()) {
			drag.update(|d| d.pointer_up());
		}
	};

	// Releases outside the canvas don't always produce a leave event.
	let release = window_event_listener(ev::pointerup, move |_| end_drag());
	on_cleanup(move || release.remove());

	let on_pointerdown = move |ev: PointerEvent| {
		let Some((pointer, origin)) = screen_points(&ev) else {
			return;
		};
		let local = Point::new(pointer.x - origin.x, pointer.y - origin.y);
		if let Some(id) = scene.with_untracked(|s| s.node_at(local)) {
			ev.prevent_default();
			drag.update(|d| d.pointer_down(id));
		}
	};

	let on_pointermove = move |ev: PointerEvent| {
		let Some((pointer, origin)) = screen_points(&ev) else {
			return;
		};
		graph.maybe_update(|g| drag.with_untracked(|d| d.pointer_move(g, pointer, origin)));
	};

	let on_pointerleave = move |_: PointerEvent| {
		if drag.with_untracked(|d| d.dragging().is_some()) {
			drag.update(|d| d.pointer_leave());
		}
	};

	let on_append = move |_| {
		graph.update(|g| {
			g.append();
		});
	};

	view! {
		<div class="journey-builder">
			<button class="journey-append" on:click=on_append>
				"Append step"
			</button>
			<svg
				class="journey-canvas"
				width=move || scene.with(|s| s.extent.width.to_string())
				height=move || scene.with(|s| s.extent.height.to_string())
				viewBox=move || scene.with(|s| s.extent.view_box())
				style="display: block; border: 1px solid #fff; touch-action: none;"
				on:pointerdown=on_pointerdown
				on:pointermove=on_pointermove
				on:pointerup=move |_| end_drag()
				on:pointerleave=on_pointerleave
			>
				<defs>
					<marker
						id="arrowhead"
						markerWidth="10"
						markerHeight="7"
						refX="5"
						refY="3.5"
						orient="auto"
					>
						<polygon points="0 0, 10 3.5, 0 7" fill="blue" />
					</marker>
				</defs>
				<g class="journey-edges">
					{move || {
						scene.with(|s| {
							s.edges
								.iter()
								.map(|e| {
									view! {
										<path
											data-edge=format!("{}-{}", e.source, e.target)
											d=e.path_data()
											stroke="#000"
											stroke-width="2"
											fill="none"
											marker-end="url(#arrowhead)"
										/>
									}
								})
								.collect_view()
						})
					}}
				</g>
				<g class="journey-nodes">
					{move || {
						scene.with(|s| {
							s.rects
								.iter()
								.map(|r| {
									view! {
										<rect
											data-node=r.id.to_string()
											x=r.x.to_string()
											y=r.y.to_string()
											width=r.size.to_string()
											height=r.size.to_string()
											fill="red"
											stroke="black"
											stroke-width="2"
											style="cursor: pointer;"
										/>
									}
								})
								.collect_view()
						})
					}}
				</g>
				{move || {
					scene
						.with(|s| s.overlay.clone())
						.map(|o| {
							let x = o.at.x.to_string();
							let after = o.after.map(|id| {
								let line = format!("after step {}", id);
								view! {
									<tspan x=x.clone() dy="1.2em">
										{line}
									</tspan>
								}
							});
							view! {
								<text
									class="journey-info"
									data-node=o.node.to_string()
									x=x
									y=o.at.y.to_string()
									fill="#fff"
									style="pointer-events: none; user-select: none;"
								>
									{o.text}
									{after}
								</text>
							}
						})
				}}
			</svg>
		</div>
	}
}
