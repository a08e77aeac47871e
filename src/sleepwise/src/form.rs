use std::io::{self, BufRead, Write};

use sleepwise_types::{
    Answer, BedtimeConsistency, CaffeineUse, Exercise, Feeling, ScreenUse, SleepForm, parse_answer,
};

/// Line-based prompts over any reader/writer pair.
///
/// Running out of input surfaces as [`io::ErrorKind::UnexpectedEof`].
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(line.trim().to_string())
    }

    /// Asks one selection question. Accepts the choice number or its label;
    /// a blank answer leaves the field on the placeholder.
    pub fn choose<T: Answer>(&mut self) -> io::Result<Option<T>> {
        let choices = T::choices();
        writeln!(self.output, "{}", T::QUESTION.prompt())?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, choice)?;
        }

        loop {
            let text = self.ask("> ")?;
            if let Ok(n) = text.parse::<usize>() {
                if let Some(choice) = n.checked_sub(1).and_then(|i| choices.get(i)) {
                    return Ok(Some(*choice));
                }
            } else if let Ok(answer) = parse_answer::<T>(&text) {
                return Ok(answer);
            }
            writeln!(self.output, "`{}` is not one of the choices", text)?;
        }
    }

    pub fn read_form(&mut self) -> io::Result<SleepForm> {
        Ok(SleepForm {
            sleep_time: self.ask("Sleep Time (HH:MM): ")?,
            wake_time: self.ask("Wake Time (HH:MM): ")?,
            feeling: self.choose::<Feeling>()?,
            screen_use: self.choose::<ScreenUse>()?,
            caffeine_use: self.choose::<CaffeineUse>()?,
            exercise: self.choose::<Exercise>()?,
            bedtime_consistency: self.choose::<BedtimeConsistency>()?,
        })
    }
}
