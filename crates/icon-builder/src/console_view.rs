//! Console rendering of view updates.
//!
//! Prints one line per changed field. The status line always shows the
//! message computed by the core, so wording stays configurable.

use crate::{AppResult, PreviewSummary};

use std::io::Write;

use icon_builder_core::ViewUpdate;

const HELP_TEXT: &str = "\
Commands:
  source   (s)  choose the source image
  dest     (d)  choose the output directory
  generate (g)  generate the icon set
  help     (h)  show this list
  quit     (q)  exit";

/// Writes view updates to a terminal or any other writer.
pub struct ConsoleView<W: Write> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    /// Create a view writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the command list.
    pub fn print_help(&mut self) -> AppResult<()> {
        writeln!(self.out, "{}", HELP_TEXT)?;
        self.out.flush()?;
        Ok(())
    }

    /// Tell the user an input line was not understood.
    pub fn print_unknown(&mut self, input: &str) -> AppResult<()> {
        writeln!(
            self.out,
            "Unknown command '{}'. Type 'help' for the command list.",
            input
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Render one view update.
    pub fn render(&mut self, update: &ViewUpdate) -> AppResult<()> {
        match update {
            ViewUpdate::SourceSelected { path, preview } => {
                writeln!(self.out, "Source image : {}", path)?;
                writeln!(
                    self.out,
                    "Preview      : {}",
                    PreviewSummary::from_base64(preview)
                )?;
            }
            ViewUpdate::TargetDirSelected { path } => {
                writeln!(self.out, "Output dir   : {}", path)?;
            }
            ViewUpdate::Status { message, .. } => {
                writeln!(self.out, "Status       : {}", message)?;
            }
            ViewUpdate::Notice { message } => {
                writeln!(self.out, "Notice       : {}", message)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}
