pub mod list_presenter;

pub use list_presenter::{ListPresenter, ListPresenterArgs, ListPresenterMessage, ListView};
