use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use code_master::{CodeMaster, DEFAULT_SESSION_LENGTH, QuestionBank, QuizError, Track, emoji};
use env_logger::{Env, Target};
use log::error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the bundled questions)
    #[arg(short, long, global = true)]
    questions: Option<PathBuf>,
    /// Start this track directly: python, js, cpp or react
    #[arg(short, long, global = true)]
    track: Option<Track>,
    /// Number of questions per session
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_SESSION_LENGTH)]
    session_length: usize,
    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, global = true, default_value = "error")]
    log_level: String,
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive quiz (default)
    Play,
    /// List tracks and their question counts
    Tracks,
    /// Print the emoji reference table
    Emoji,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Failed to open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) -> io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()));
    if let Some(path) = &args.log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn run(args: Args) -> Result<(), QuizError> {
    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            let quiz = match &args.questions {
                Some(path) => CodeMaster::from_json(path)?,
                None => CodeMaster::bundled()?,
            };
            quiz.with_track(args.track)
                .with_session_length(args.session_length)
                .run()
        }
        Command::Tracks => {
            let bank = match &args.questions {
                Some(path) => code_master::load_questions_from_json(path)?,
                None => QuestionBank::bundled()?,
            };
            for track in Track::ALL {
                let count = bank.questions_for(track).map_or(0, <[_]>::len);
                println!("{:<8} {:<12} {} questions", track.id(), track.display_name(), count);
            }
            Ok(())
        }
        Command::Emoji => Ok(emoji::print_table(&mut io::stdout().lock())?),
    }
}
