#[macro_use]
extern crate log;

mod form;
pub use form::Prompter;

mod interactive;
pub use interactive::InteractiveSession;
