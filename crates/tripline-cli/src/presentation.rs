use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Bold highlight, only when stdout is a terminal.
pub fn strong(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Dimmed detail text, only when stdout is a terminal.
pub fn faint(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
