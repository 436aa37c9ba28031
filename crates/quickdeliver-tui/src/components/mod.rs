pub mod form;
pub mod nav_bar;
pub mod text_input;

pub use form::{button_line, Form, FormEvent};
pub use nav_bar::NavBar;
pub use text_input::{highlight_matches, TextInput};
