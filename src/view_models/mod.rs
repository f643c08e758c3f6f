//! Stateful list and detail models read by the UI layer.
//!
//! Each model keeps its state behind an async `RwLock`. A load takes a
//! generation number when it starts; if another load starts before it
//! finishes, its result is dropped so the most recently issued load wins.

mod detail;
mod list;

pub use detail::DessertDetailModel;
pub use list::{filter_summaries, DessertListModel};
