use iced::{Element, Subscription};

use crate::app::Message;

/// A screen of the application.
pub trait View {
    /// Handles `message`. A returned message asks the app to switch screens.
    fn update(&mut self, message: Message) -> Option<Message>;

    fn view(&self) -> Element<'_, Message>;

    fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }
}
