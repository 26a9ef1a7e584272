use std::io::{self, IsTerminal, Stdout, Write};

use crossterm::style::Stylize;
use parking_lot::Mutex;

use crate::notify::notice::{Notice, NoticeVariant};
use crate::notify::NotificationSink;
use crate::submission::SubmissionOutcome;

/// Prints notices to a terminal or any other writer.
pub struct ConsoleSink<W: Write + Send> {
    writer: Mutex<W>,
    color: bool,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let color = stdout.is_terminal();
        Self::new(stdout, color)
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            color,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn render(&self, notice: &Notice) -> String {
        if !self.color {
            return format!("{}: {}", notice.title, notice.description);
        }
        let title = match notice.variant {
            NoticeVariant::Default => notice.title.as_str().green().bold(),
            NoticeVariant::Destructive => notice.title.as_str().red().bold(),
        };
        format!("{}: {}", title, notice.description)
    }
}

impl<W: Write + Send> NotificationSink for ConsoleSink<W> {
    fn notify(&self, outcome: &SubmissionOutcome) {
        let notice = Notice::from(outcome);
        match notice.variant {
            NoticeVariant::Default => {
                tracing::info!(outcome = outcome.kind(), "{}", notice.description)
            }
            NoticeVariant::Destructive => {
                tracing::warn!(outcome = outcome.kind(), "{}", notice.description)
            }
        }

        let line = self.render(&notice);
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            tracing::error!(error = %e, "Failed to write notice");
        }
    }
}
