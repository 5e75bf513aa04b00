//! Owned handles for the browser callbacks the particle field registers.
//!
//! Both handles unregister themselves on drop, so storing them next to the
//! component and dropping them in `on_cleanup` guarantees that no frame or
//! resize callback touches a canvas that has left the DOM.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop where each tick schedules the next.
pub struct FrameLoop {
	callback: FrameCallback,
	request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	/// Schedule `tick` for the next frame and every frame after it.
	pub fn start(window: &Window, mut tick: impl FnMut() + 'static) -> Option<Self> {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let request_id = Rc::new(Cell::new(None));

		// The closure only holds a weak reference to itself: once the handle
		// is dropped the next frame cannot be scheduled.
		let (callback_weak, request_inner) = (Rc::downgrade(&callback), request_id.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			request_inner.set(None);
			tick();
			let Some(callback) = callback_weak.upgrade() else {
				return;
			};
			let Some(window) = web_sys::window() else {
				return;
			};
			if let Some(ref cb) = *callback.borrow() {
				request_inner.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));

		let id = {
			let guard = callback.borrow();
			let cb = guard.as_ref()?;
			window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()?
		};
		request_id.set(Some(id));

		Some(Self {
			callback,
			request_id,
		})
	}

	/// Cancel the pending frame and release the callback.
	pub fn cancel(&mut self) {
		if let Some(id) = self.request_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		self.callback.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// A window `resize` subscription, removed on drop.
pub struct ResizeListener {
	window: Window,
	callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
	pub fn new(window: &Window, on_resize: impl FnMut() + 'static) -> Option<Self> {
		let callback = Closure::<dyn FnMut()>::new(on_resize);
		window
			.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
			.ok()?;
		Some(Self {
			window: window.clone(),
			callback,
		})
	}
}

impl Drop for ResizeListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
	}
}
