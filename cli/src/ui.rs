use std::io::{self, Write};

use crossterm::style::{style, Stylize};
use pip_core::Response;

const LINE: &str = "    ____________________________________________________________";
const INDENT: &str = "     ";

/// Terminal rendering for the interactive loop. All text comes from the core;
/// this only decides layout and colour.
pub struct Ui<W: Write> {
    out: W,
}

impl<W: Write> Ui<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn show_line(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", style(LINE).dark_grey())
    }

    pub fn show(&mut self, text: &str) -> io::Result<()> {
        for line in text.lines() {
            writeln!(self.out, "{}{}", INDENT, line)?;
        }
        self.out.flush()
    }

    pub fn show_error(&mut self, text: &str) -> io::Result<()> {
        for line in text.lines() {
            writeln!(self.out, "{}{}", INDENT, style(line).red())?;
        }
        self.out.flush()
    }

    pub fn show_response(&mut self, response: &Response) -> io::Result<()> {
        if response.is_error {
            self.show_error(&response.text)
        } else {
            self.show(&response.text)
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_indents_every_line() {
        let mut ui = Ui::new(Vec::new());
        ui.show("first\nsecond").unwrap();
        let out = String::from_utf8(ui.into_inner()).unwrap();
        assert_eq!(out, "     first\n     second\n");
    }

    #[test]
    fn test_error_response_keeps_text() {
        let mut ui = Ui::new(Vec::new());
        ui.show_response(&Response {
            text: "Please type a command!".to_string(),
            is_exit: false,
            is_error: true,
        })
        .unwrap();
        let out = String::from_utf8(ui.into_inner()).unwrap();
        assert!(out.contains("Please type a command!"));
    }
}
