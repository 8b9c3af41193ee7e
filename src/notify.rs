use yewdux::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Level {
	Success,
	Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
	pub id: usize,
	pub level: Level,
	pub text: String,
}

/// Queue of transient, dismissible notifications rendered by the
/// [`Toaster`](crate::components::Toaster).
#[derive(Clone, PartialEq, Default, Store)]
pub struct Notices {
	entries: Vec<Notice>,
	next_id: usize,
}

impl Notices {
	pub fn entries(&self) -> &[Notice] {
		&self.entries
	}

	pub fn dismiss(&mut self, id: usize) {
		self.entries.retain(|notice| notice.id != id);
	}

	fn insert(&mut self, level: Level, text: String) -> usize {
		let id = self.next_id;
		self.next_id += 1;
		self.entries.push(Notice { id, level, text });
		id
	}
}

pub fn success(text: impl Into<String>) {
	push(Level::Success, text.into());
}

pub fn error(text: impl Into<String>) {
	push(Level::Error, text.into());
}

fn push(level: Level, text: String) {
	log::info!(target: "notify", "{level:?}: {text}");
	let mut id = 0;
	Dispatch::<Notices>::global().reduce_mut(|notices| id = notices.insert(level, text));
	gloo_timers::callback::Timeout::new(DISMISS_AFTER_MS, move || {
		Dispatch::<Notices>::global().reduce_mut(|notices| notices.dismiss(id));
	})
	.forget();
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn dismiss_removes_only_the_target() {
		let mut notices = Notices::default();
		let first = notices.insert(Level::Error, "first".into());
		let second = notices.insert(Level::Success, "second".into());
		assert_ne!(first, second);
		notices.dismiss(first);
		assert_eq!(notices.entries().len(), 1);
		assert_eq!(notices.entries()[0].text, "second");
		// dismissing again is harmless
		notices.dismiss(first);
		assert_eq!(notices.entries().len(), 1);
	}
}
