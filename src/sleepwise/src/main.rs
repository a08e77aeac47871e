#[macro_use]
extern crate log;

use std::io::{stdin, stdout};

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use sleepwise::InteractiveSession;
use sleepwise_algos::{WIND_DOWN_ITEMS, evaluate_form};
use sleepwise_types::{
    Answer, BedtimeConsistency, CaffeineUse, Exercise, Feeling, ScreenUse, SleepForm,
};

#[derive(Parser)]
#[command(about = "SleepWise - Smart Sleep Coach")]
pub struct SleepWiseCli {
    #[clap(subcommand)]
    pub subcommand: SleepWiseCommand,
}

#[derive(Subcommand)]
pub enum SleepWiseCommand {
    ///
    /// Score one night and print suggestions
    ///
    Evaluate(EvaluateArgs),
    ///
    /// Fill in the sleep form repeatedly, keeping a history for this session
    ///
    Interactive,
    ///
    /// Print the wind-down checklist
    ///
    Checklist,
    ///
    /// Print the accepted answers for every question
    ///
    Options,
    ///
    /// Generate shell completions
    ///
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct EvaluateArgs {
    /// Time you fell asleep, HH:MM
    #[arg(long, env = "SLEEPWISE_SLEEP_TIME", default_value = "")]
    pub sleep_time: String,
    /// Time you woke up, HH:MM
    #[arg(long, env = "SLEEPWISE_WAKE_TIME", default_value = "")]
    pub wake_time: String,
    #[arg(long, env = "SLEEPWISE_FEELING")]
    pub feeling: Option<Feeling>,
    #[arg(long, env = "SLEEPWISE_SCREENS")]
    pub screens: Option<ScreenUse>,
    #[arg(long, env = "SLEEPWISE_CAFFEINE")]
    pub caffeine: Option<CaffeineUse>,
    #[arg(long, env = "SLEEPWISE_EXERCISE")]
    pub exercise: Option<Exercise>,
    #[arg(long, env = "SLEEPWISE_CONSISTENCY")]
    pub consistency: Option<BedtimeConsistency>,
    /// Print the evaluation as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<EvaluateArgs> for SleepForm {
    fn from(args: EvaluateArgs) -> Self {
        SleepForm {
            sleep_time: args.sleep_time,
            wake_time: args.wake_time,
            feeling: args.feeling,
            screen_use: args.screens,
            caffeine_use: args.caffeine,
            exercise: args.exercise,
            bedtime_consistency: args.consistency,
        }
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = SleepWiseCli::parse();

    match cli.subcommand {
        SleepWiseCommand::Evaluate(args) => {
            let json = args.json;
            let (_, evaluation) = evaluate_form(&SleepForm::from(args))?;
            info!("Sleep score: {}", evaluation.score);

            if json {
                println!("{}", serde_json::to_string_pretty(&evaluation)?);
            } else {
                print!("{}", evaluation);
            }
            Ok(())
        }
        SleepWiseCommand::Interactive => {
            let mut session = InteractiveSession::new(stdin().lock(), stdout());
            session.run()
        }
        SleepWiseCommand::Checklist => {
            println!("Wind-Down Checklist:");
            for (i, item) in WIND_DOWN_ITEMS.iter().enumerate() {
                println!("  {}) {}", i + 1, item);
            }
            Ok(())
        }
        SleepWiseCommand::Options => {
            print_choices::<Feeling>();
            print_choices::<ScreenUse>();
            print_choices::<CaffeineUse>();
            print_choices::<Exercise>();
            print_choices::<BedtimeConsistency>();
            Ok(())
        }
        SleepWiseCommand::Completions { shell } => {
            let mut command = SleepWiseCli::command();
            clap_complete::generate(shell, &mut command, "sleepwise", &mut stdout());
            Ok(())
        }
    }
}

fn print_choices<T: Answer>() {
    println!("--{}: {}", T::QUESTION, T::QUESTION.prompt());
    for choice in T::choices() {
        println!("  {}", choice);
    }
}
