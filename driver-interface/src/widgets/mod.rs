mod destination;
pub use destination::WidgetDestination;

mod request_prompt;
pub use request_prompt::{PromptAction, WidgetRequestPrompt};
