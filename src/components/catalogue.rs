use leptos::prelude::*;

use super::network::Mode;
use super::panels::CatalogueFilter;
use crate::data::{CatalogueItem, CatalogueSection, catalogue_sections};

fn item_view(item: &'static CatalogueItem) -> AnyView {
	let class = if item.is_tba() {
		"catalogue-item tba"
	} else {
		"catalogue-item"
	};
	match item.active_link() {
		Some(link) => view! {
			<a href=link target="_blank" class=format!("{class} catalogue-link")>
				{item.name}
			</a>
		}
		.into_any(),
		None => view! { <div class=class>{item.name}</div> }.into_any(),
	}
}

fn section_view(section: &'static CatalogueSection) -> impl IntoView {
	let style = format!(
		"background: {}20; border-left: 3px solid {};",
		section.color, section.color
	);
	view! {
		<div class="catalogue-section" style=style>
			<div class="catalogue-section-title">
				<a href=section.studio_url() target="_blank">
					{section.studio}
				</a>
			</div>
			<div class="catalogue-items">{section.items.iter().map(item_view).collect_view()}</div>
		</div>
	}
}

/// Product listing for the studios mode, narrowed to the clicked studio.
#[component]
pub fn CataloguePanel(filter: RwSignal<CatalogueFilter>) -> impl IntoView {
	view! {
		<section
			class="catalogue"
			class:active=move || filter.with(|f| f.mode == Mode::Studios)
		>
			<h3>"Catalogue"</h3>
			<div class="catalogue-content">
				{move || {
					filter
						.with(|f| catalogue_sections(f.mode, f.studio.as_deref()))
						.into_iter()
						.map(section_view)
						.collect_view()
				}}
			</div>
		</section>
	}
}
