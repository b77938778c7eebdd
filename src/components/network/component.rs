use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::render::CanvasSurface;
use super::scene::SceneController;
use super::types::{Bounds, Mode};
use crate::components::panels::PanelSignals;
use crate::config::SceneConfig;
use crate::error::SurfaceError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0))
}

/// Canvas-relative position of a mouse event.
fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[component]
pub fn NetworkCanvas(
	#[prop(into)] mode: Signal<Mode>,
	#[prop(into)] reset: Signal<u32>,
	panels: PanelSignals,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<Option<SceneController>>> = Rc::new(RefCell::new(None));
	let surface: Rc<RefCell<Option<CanvasSurface>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (init_error, set_init_error) = signal(None::<String>);
	let (scene_init, surface_init, animate_init, resize_cb_init) =
		(scene.clone(), surface.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("network canvas unavailable: {}", SurfaceError::NoWindow);
			set_init_error.set(Some(SurfaceError::NoWindow.to_string()));
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			parent_size(&canvas)
		};
		let canvas_surface = match CanvasSurface::from_canvas(canvas.clone()) {
			Ok(s) => s,
			Err(err) => {
				error!("network canvas unavailable: {err}");
				set_init_error.set(Some(err.to_string()));
				return;
			}
		};
		canvas_surface.set_size(w, h);
		*surface_init.borrow_mut() = Some(canvas_surface);

		let seed = js_sys::Date::now() as u64;
		*scene_init.borrow_mut() = Some(SceneController::new(
			SceneConfig::load(),
			Bounds::new(w, h),
			seed,
			Box::new(panels),
			Box::new(panels),
		));
		info!("network canvas mounted at {w}x{h}");

		let (surface_resize, scene_resize) = (surface_init.clone(), scene_init.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let size = match (web_sys::window(), surface_resize.borrow().as_ref()) {
				(Some(win), Some(_)) if fullscreen => window_size(&win),
				(_, Some(_)) => Some(parent_size(&canvas)),
				_ => None,
			};
			let Some((nw, nh)) = size else {
				return;
			};
			if let Some(ref s) = *surface_resize.borrow() {
				s.set_size(nw, nh);
			}
			if let Some(ref mut s) = *scene_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (scene_anim, surface_anim, animate_inner) =
			(scene_init.clone(), surface_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move |elapsed_ms: f64| {
			{
				let (mut scene, mut surface) = (scene_anim.borrow_mut(), surface_anim.borrow_mut());
				if let (Some(scene), Some(surface)) = (scene.as_mut(), surface.as_mut()) {
					scene.tick(surface, elapsed_ms);
				}
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// switch_mode ignores the mode already on screen, so the first run is harmless
	let scene_mode = scene.clone();
	Effect::new(move |_| {
		let mode = mode.get();
		if let Some(ref mut s) = *scene_mode.borrow_mut() {
			s.switch_mode(mode);
		}
	});

	let scene_reset = scene.clone();
	Effect::new(move |prev: Option<u32>| {
		let requested = reset.get();
		if prev.is_some_and(|p| p != requested) {
			if let Some(ref mut s) = *scene_reset.borrow_mut() {
				s.reset_layout();
			}
		}
		requested
	});

	let scene_mm = scene.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *scene_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let scene_md = scene.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *scene_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let scene_mu = scene.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *scene_mu.borrow_mut() {
			s.pointer_up();
		}
	};

	let scene_ml = scene.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *scene_ml.borrow_mut() {
			s.pointer_leave();
		}
	};

	let scene_click = scene.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *scene_click.borrow_mut() {
			s.click(x, y);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-canvas"
			on:mousemove=on_mousemove
			on:mousedown=on_mousedown
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:click=on_click
			style="display: block; cursor: grab;"
		/>
		{move || init_error.get().map(|err| view! { <p class="canvas-error">{err}</p> })}
	}
}
