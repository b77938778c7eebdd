use leptos::prelude::*;

use super::network::Mode;

/// Dataset selector. Clicking the active mode does nothing.
#[component]
pub fn ModeSwitch(mode: RwSignal<Mode>) -> impl IntoView {
	Mode::ALL
		.into_iter()
		.map(|m| {
			view! {
				<button
					class="switch-btn"
					class:active=move || mode.get() == m
					data-mode=m.as_str()
					on:click=move |_| {
						if mode.get_untracked() != m {
							mode.set(m);
						}
					}
				>
					{m.label()}
				</button>
			}
		})
		.collect_view()
}
