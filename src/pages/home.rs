use leptos::prelude::*;

use crate::components::journey::JourneyBuilder;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="journey-page">
				<h1>"Journey Builder"</h1>
				<p class="subtitle">
					"Drag a step to move it. Append adds a step after the last one."
				</p>
				<JourneyBuilder />
			</div>
		</ErrorBoundary>
	}
}
