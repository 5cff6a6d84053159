pub mod main_shell;

pub use main_shell::{MainShell, APP_TITLE};
