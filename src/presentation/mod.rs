//! Terminal presentation: the navigation host and scan screen of the CLI.

mod navigator;
mod output;
mod presenter;
mod story;

pub use navigator::TerminalNavigator;
pub use output::TerminalOutput;
pub use presenter::TerminalPresenter;
pub use story::{render_chooser, render_help, render_story_page};
