use leptos::prelude::*;

use crate::components::catalogue::CataloguePanel;
use crate::components::details::DetailsPanel;
use crate::components::mode_switch::ModeSwitch;
use crate::components::network::{Mode, NetworkCanvas};
use crate::components::panels::PanelSignals;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let mode = RwSignal::new(Mode::Studios);
	let (reset, set_reset) = signal(0u32);
	let panels = PanelSignals::new();

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

			<div class="fullscreen-graph">
				<NetworkCanvas mode=mode reset=reset panels=panels fullscreen=true />
				<div class="graph-overlay">
					<div class="mode-switch">
						<ModeSwitch mode=mode />
					</div>
					<button id="resetBtn" on:click=move |_| set_reset.update(|n| *n += 1)>
						"Reset Layout"
					</button>
				</div>
				<DetailsPanel selection=panels.selection />
				<CataloguePanel filter=panels.catalogue />
			</div>
		</ErrorBoundary>
	}
}
