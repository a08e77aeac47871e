use std::io::{self, BufRead, Write};

use sleepwise_algos::{CHECKLIST_REMINDER, Checklist, SleepLog, WIND_DOWN_ITEMS, evaluate_form};

use crate::form::Prompter;

const MENU: &str = "\n[l]og sleep, [c]hecklist, [s]tats, [q]uit: ";

/// The form-to-feedback loop. Owns the sleep log and checklist for as long as it runs.
pub struct InteractiveSession<R, W> {
    prompter: Prompter<R, W>,
    log: SleepLog,
    checklist: Checklist,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            log: SleepLog::new(),
            checklist: Checklist::new(),
        }
    }

    pub fn log(&self) -> &SleepLog {
        &self.log
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        match self.command_loop() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("Input closed");
                Ok(())
            }
            result => Ok(result?),
        }
    }

    fn command_loop(&mut self) -> io::Result<()> {
        writeln!(self.prompter.output(), "SleepWise - Smart Sleep Coach")?;
        loop {
            let command = self.prompter.ask(MENU)?.to_ascii_lowercase();
            match command.as_str() {
                "l" | "log" => self.log_sleep()?,
                "c" | "checklist" => self.run_checklist()?,
                "s" | "stats" => self.print_stats()?,
                "q" | "quit" | "exit" => return Ok(()),
                "" => {}
                other => writeln!(self.prompter.output(), "Unknown command `{}`", other)?,
            }
        }
    }

    fn log_sleep(&mut self) -> io::Result<()> {
        let form = self.prompter.read_form()?;
        let (session, evaluation) = match evaluate_form(&form) {
            Ok(result) => result,
            Err(error) => {
                warn!("Rejected submission: {}", error);
                writeln!(self.prompter.output(), "\nInput Error: {}", error)?;
                return Ok(());
            }
        };

        self.log.record(&session, &evaluation);
        self.checklist.start_new_day();
        info!(
            "Logged {:.2}h of sleep, score {}",
            evaluation.hours_slept, evaluation.score
        );

        writeln!(self.prompter.output(), "\n{}", evaluation)?;
        self.print_history()
    }

    fn print_history(&mut self) -> io::Result<()> {
        let out = self.prompter.output();
        writeln!(out, "History:")?;
        for line in self.log.history_lines() {
            writeln!(out, "  {}", line)?;
        }
        match self.log.star_rating(self.checklist.completed_today()) {
            Some(stars) => writeln!(out, "Sleep Score: {}", stars)?,
            None => writeln!(out, "Sleep Score: N/A")?,
        }
        if !self.checklist.completed_today() {
            writeln!(out, "• {}", CHECKLIST_REMINDER)?;
        }
        Ok(())
    }

    fn run_checklist(&mut self) -> io::Result<()> {
        let out = self.prompter.output();
        writeln!(out, "Wind-Down Checklist:")?;
        for (i, (item, ticked)) in self.checklist.items().enumerate() {
            let mark = if ticked { "x" } else { " " };
            writeln!(out, "  [{}] {}) {}", mark, i + 1, item)?;
        }

        let answer = self.prompter.ask(&format!(
            "Items done (1-{}, separated by spaces): ",
            WIND_DOWN_ITEMS.len()
        ))?;
        for token in answer.split_whitespace() {
            match token.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                Some(index) if self.checklist.tick(index).is_ok() => {}
                _ => writeln!(self.prompter.output(), "`{}` is not an item number", token)?,
            }
        }

        match self.checklist.complete() {
            Ok(()) => {
                info!("Wind-down checklist completed");
                writeln!(self.prompter.output(), "Checklist completed successfully!")?;
                if !self.log.is_empty() {
                    self.print_history()?;
                }
                Ok(())
            }
            Err(error) => writeln!(self.prompter.output(), "{}", error),
        }
    }

    fn print_stats(&mut self) -> io::Result<()> {
        if self.log.is_empty() {
            return writeln!(self.prompter.output(), "No nights logged yet");
        }
        let consistency = self.log.consistency();
        writeln!(self.prompter.output(), "{}", consistency)
    }
}
