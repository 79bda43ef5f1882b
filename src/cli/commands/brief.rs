use super::{normalize_mode, resolve_moment};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::Briefing;
use crate::errors::{AppError, AppResult};
use crate::sources::MessageSink;
use crate::sources::board_file::FileBoard;
use crate::sources::calendar_file::FileCalendar;
use crate::sources::sink::{ConsoleSink, OutboxSink, ResultOnlySink};
use crate::ui::messages::{success, warning};

/// Handle the `brief` command: one pipeline run per invocation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Brief {
        date,
        now,
        json,
        dry_run,
    } = cmd
    {
        let (day, now) = resolve_moment(date.as_ref(), now.as_ref())?;

        let calendar = FileCalendar::new(cfg.events_path());
        let board = FileBoard::new(&cfg.board);
        let outbox = cfg.outbox_path().map(OutboxSink::new);
        // with --json the console copy travels in the result's `message`
        let sink: &dyn MessageSink = match &outbox {
            Some(o) => o as &dyn MessageSink,
            None if *json => &ResultOnlySink,
            None => &ConsoleSink,
        };

        let briefing = Briefing {
            calendar: &calendar,
            board: &board,
            sink,
            mode: normalize_mode(cfg),
        };

        let result = briefing.run(day, now, !*dry_run);

        if *json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            // the console sink already printed the message
            if *dry_run || outbox.is_some() {
                println!("{}", result.message);
            }
            for w in &result.warnings {
                warning(w);
            }
            if result.delivered
                && let Some(path) = cfg.outbox_path()
            {
                success(format!("Briefing appended to {}", path.display()));
            }
        }

        if !result.success {
            return Err(AppError::Other(format!(
                "briefing finished with {} warning(s)",
                result.warnings.len()
            )));
        }
    }

    Ok(())
}
