//! Design System Components
//!
//! The handful of styled building blocks the views share.

mod button;
mod card;
mod input;
mod loading;

#[cfg(test)]
mod tests;

pub use button::{Button, ButtonVariant, LinkButton};
pub use card::{Panel, PanelHeader};
pub use input::Input;
pub use loading::{LoadingSpinner, SpinnerSize, TypingIndicator};
