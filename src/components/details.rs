use leptos::prelude::*;

use super::network::{Payload, VenueEntry};
use super::panels::Selection;

/// Button text for a website link: `Access` for pages hosted on
/// simonallmer.com, otherwise the bare host and path.
pub fn link_label(url: &str) -> String {
	if url.contains("simonallmer.com") {
		return "Access".to_string();
	}
	let bare = url
		.strip_prefix("https://")
		.or_else(|| url.strip_prefix("http://"))
		.unwrap_or(url);
	bare.strip_suffix('/').unwrap_or(bare).to_string()
}

fn section(title: &'static str, entries: &'static [&'static str]) -> Option<impl IntoView> {
	(!entries.is_empty()).then(|| {
		view! {
			<div class="detail-section">
				<h4>{title}</h4>
				<ul>{entries.iter().map(|entry| view! { <li>{*entry}</li> }).collect_view()}</ul>
			</div>
		}
	})
}

/// Inline style tinting a venue entry, empty when it has no accent.
fn accent_style(entry: &VenueEntry) -> String {
	entry.color.map(|c| format!("color: {c};")).unwrap_or_default()
}

fn venue_line(entry: &'static VenueEntry) -> AnyView {
	let text = match entry.link {
		Some(href) => view! {
			<a href=href target="_blank" style="color: inherit;">
				{entry.text}
			</a>
		}
		.into_any(),
		None => view! { <span>{entry.text}</span> }.into_any(),
	};
	let notes = (!entry.notes.is_empty()).then(|| {
		view! { <div class="venue-notes">{entry.notes.iter().map(venue_line).collect_view()}</div> }
	});
	view! {
		<div class="venue-entry" style=accent_style(entry)>
			{entry.lead.map(|lead| view! { <b>{lead}</b> " " })}
			{text}
			{notes}
		</div>
	}
	.into_any()
}

fn venue_section(title: &'static str, entries: &'static [VenueEntry]) -> Option<impl IntoView> {
	(!entries.is_empty()).then(|| {
		view! {
			<div class="detail-section">
				<h4>{title}</h4>
				<ul>
					{entries.iter().map(|entry| view! { <li>{venue_line(entry)}</li> }).collect_view()}
				</ul>
			</div>
		}
	})
}

fn body(selection: &Selection) -> AnyView {
	match selection.record.payload {
		Payload::Showcase {
			description,
			website,
			products,
		} => view! {
			<div class="studio-details">
				<p class="studio-description">{description}</p>
				{section("Products", products)}
			</div>
			{website
				.map(|url| {
					view! {
						<a class="panel-link" href=url target="_blank">
							{link_label(url)}
						</a>
					}
				})}
		}
		.into_any(),
		Payload::Venue {
			events,
			locations,
			partners,
		} => view! {
			<div class="city-details">
				{venue_section("Events", events)}
				{venue_section("Locations", locations)}
				{venue_section("Partners", partners)}
			</div>
		}
		.into_any(),
	}
}

/// Side panel describing the clicked entity.
#[component]
pub fn DetailsPanel(selection: RwSignal<Option<Selection>>) -> impl IntoView {
	let border = move || {
		selection
			.with(|s| s.as_ref().map(|s| s.color.to_string()))
			.unwrap_or_default()
	};

	view! {
		<aside
			class="details-panel"
			class:active=move || selection.with(Option::is_some)
			style:border-color=border
		>
			<button class="panel-close" on:click=move |_| selection.set(None)>
				"×"
			</button>
			<h3 class="panel-title">
				{move || selection.with(|s| s.as_ref().map_or("Select a Node", |s| s.name))}
			</h3>
			{move || match selection.get() {
				Some(s) => {
					view! { <div class="panel-body" data-mode=s.mode.as_str()>{body(&s)}</div> }
						.into_any()
				}
				None => {
					view! { <p class="panel-desc">"Click a node to see what it does."</p> }
						.into_any()
				}
			}}
		</aside>
	}
}
