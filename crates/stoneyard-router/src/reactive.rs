//! Signal - shared reactive cell
//!
//! `Signal<T>` holds a value that several owners observe. Clones share the
//! same value; `set()` and `update()` notify every subscriber with the new
//! value. The router publishes its current path, params and route name
//! through signals so the outlet can re-render on navigation.
//!
//! ## Example
//!
//! ```ignore
//! use stoneyard_router::reactive::Signal;
//!
//! let path = Signal::new("/".to_string());
//! path.subscribe(|p| println!("now at {p}"));
//! path.set("/quarry".to_string());
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// A reactive value shared between clones.
pub struct Signal<T: 'static> {
	value: Rc<RefCell<T>>,
	subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			subscribers: Rc::clone(&self.subscribers),
		}
	}
}

impl<T: 'static> Signal<T> {
	/// Creates a new signal with the given initial value.
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			subscribers: Rc::new(RefCell::new(Vec::new())),
		}
	}

	/// Returns a clone of the current value.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Runs `f` against the current value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Replaces the value and notifies subscribers.
	pub fn set(&self, value: T)
	where
		T: Clone,
	{
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Mutates the value in place and notifies subscribers once.
	pub fn update<F>(&self, f: F)
	where
		T: Clone,
		F: FnOnce(&mut T),
	{
		f(&mut self.value.borrow_mut());
		self.notify();
	}

	/// Registers a callback invoked after every change.
	pub fn subscribe<F>(&self, f: F)
	where
		F: Fn(&T) + 'static,
	{
		self.subscribers.borrow_mut().push(Rc::new(f));
	}

	/// Returns the number of registered subscribers.
	pub fn subscriber_count(&self) -> usize {
		self.subscribers.borrow().len()
	}

	fn notify(&self)
	where
		T: Clone,
	{
		// No borrow is held while subscribers run, so they may read, write
		// or subscribe to this signal.
		let subscribers: Vec<Subscriber<T>> = self.subscribers.borrow().clone();
		let value = self.value.borrow().clone();
		for subscriber in subscribers {
			subscriber(&value);
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}
