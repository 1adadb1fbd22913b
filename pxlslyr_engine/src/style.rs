//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn section_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn npc_style(&self) -> ColoredString;
    fn info_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn failure_style(&self) -> ColoredString;
    fn death_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn stage_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(180, 180, 250).bold()
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn npc_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60).underline()
    }
    fn info_style(&self) -> ColoredString {
        self.truecolor(110, 170, 250)
    }
    fn success_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn failure_style(&self) -> ColoredString {
        self.truecolor(230, 130, 30)
    }
    fn death_style(&self) -> ColoredString {
        self.bold().truecolor(200, 50, 50)
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().truecolor(255, 105, 180)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn stage_style(&self) -> ColoredString {
        self.truecolor(220, 40, 220)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn npc_style(&self) -> ColoredString {
        self.as_str().npc_style()
    }
    fn info_style(&self) -> ColoredString {
        self.as_str().info_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn failure_style(&self) -> ColoredString {
        self.as_str().failure_style()
    }
    fn death_style(&self) -> ColoredString {
        self.as_str().death_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn stage_style(&self) -> ColoredString {
        self.as_str().stage_style()
    }
}

/// Wrapping options for ordinary message text, capped at 80 columns.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(80))
}

/// Wrapping options for text indented under a heading.
pub fn indented_block() -> Options<'static> {
    normal_block().initial_indent("    ").subsequent_indent("    ")
}
