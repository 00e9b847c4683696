//! UI Components
//!
//! Reusable Leptos components.

mod icon_image;
mod search_bar;
mod filter_dropdown;
mod theme_toggle;
mod todo_row;
mod todo_list_view;
mod note_modal;

pub use icon_image::IconImage;
pub use search_bar::SearchBar;
pub use filter_dropdown::FilterDropdown;
pub use theme_toggle::ThemeToggle;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use note_modal::NoteModal;
