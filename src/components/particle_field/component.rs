//! Leptos component wrapping the particle canvas.
//!
//! The component creates a fixed, full-viewport canvas behind the page. Once
//! the canvas is mounted an animation loop runs via `requestAnimationFrame`,
//! stepping and redrawing the particles each frame, and a resize listener keeps
//! the canvas and the particle bounds in sync with the window. Both are torn
//! down when the component is cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::handles::{FrameLoop, ResizeListener};
use super::particles::ParticleSystem;
use super::render;
use super::style::ParticleStyle;

/// Browser callbacks that must be released when the field unmounts.
struct FieldHandles {
	_frame_loop: FrameLoop,
	_resize: ResizeListener,
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn mount_field(canvas: HtmlCanvasElement, style: ParticleStyle) -> Option<FieldHandles> {
	let window = web_sys::window()?;
	let (w, h) = viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let ctx = context_2d(&canvas)?;

	let mut rng = fastrand::Rng::new();
	let system = Rc::new(RefCell::new(ParticleSystem::new(&style, w, h, &mut rng)));

	let (system_resize, canvas_resize) = (system.clone(), canvas.clone());
	let resize = ResizeListener::new(&window, move || {
		let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
			return;
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		system_resize.borrow_mut().resize(nw, nh);
	})?;

	let count = style.count;
	let frame_loop = FrameLoop::start(&window, move || {
		let mut system = system.borrow_mut();
		render::draw(&ctx, &system, &style);
		system.step();
	})?;

	info!("particle field: {} particles on {}x{}", count, w, h);
	Some(FieldHandles {
		_frame_loop: frame_loop,
		_resize: resize,
	})
}

/// Renders the decorative particle background.
///
/// The canvas ignores pointer events and sits under the page content. Pass a
/// custom `style` to change the particle count, size, speed or color.
#[component]
pub fn ParticleField(#[prop(optional)] style: Option<ParticleStyle>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handles = StoredValue::new_local(None::<FieldHandles>);
	let style = style.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		// Replacing an earlier mount drops its handles first.
		handles.set_value(None);
		match mount_field(canvas, style.clone()) {
			Some(mounted) => handles.set_value(Some(mounted)),
			None => warn!("particle field: canvas unavailable, background disabled"),
		}
	});

	on_cleanup(move || {
		debug!("particle field: stopping animation loop");
		let _ = handles.try_update_value(|h| h.take());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field"
			aria-hidden="true"
			style="position: fixed; inset: 0; width: 100vw; height: 100vh; z-index: -1; pointer-events: none;"
		/>
	}
}
