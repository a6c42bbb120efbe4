//! The [`ViewModel`] trait for the MVVM architecture.

use crate::app::Message;

/// Trait containing methods for `ViewModel` modules in the MVVM architecture.
pub trait ViewModel {
    /// Applies `message` to the model. A returned message is handed back to
    /// the [`crate::view::View`] as a screen transition.
    fn update(&mut self, message: Message) -> Option<Message>;
}
