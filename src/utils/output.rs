use colored::*;
use std::io::IsTerminal;

pub struct OutputStyle;

impl OutputStyle {
    /// Turn colors off when disabled in config, requested via `NO_COLOR`, or stdout is not a terminal.
    pub fn configure(color: bool) {
        let no_color_env = std::env::var_os("NO_COLOR").is_some();
        if !color || no_color_env || !std::io::stdout().is_terminal() {
            colored::control::set_override(false);
        }
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn category(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "=".repeat(39)
    }

    pub fn print_banner(title: &str) {
        println!("{}", Self::header_separator());
        println!("   {}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_section(title: &str) {
        println!("\n{}", Self::header(&format!("--- {} ---", title)));
    }

    /// One numbered entry of the category picker
    pub fn print_category_choice(position: usize, name: &str, icon: Option<&str>, tool_count: usize) {
        let noun = if tool_count == 1 { "tool" } else { "tools" };
        let icon = icon.unwrap_or("no icon");
        println!(
            "{}. {} {}",
            position,
            Self::category(name),
            Self::muted(&format!("({}, {} {})", icon, tool_count, noun))
        );
    }
}

pub fn print_success(msg: &str) {
    println!("✅ {}", OutputStyle::success(msg));
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {}", OutputStyle::warning(msg));
}

pub fn print_error(msg: &str) {
    println!("❌ {}", OutputStyle::error(msg));
}

pub fn print_info(msg: &str) {
    println!("{}", OutputStyle::info(msg));
}
