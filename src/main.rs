use std::path::PathBuf;

use clap::Parser;
use math_quiz::{DEFAULT_PROBLEMS_PATH, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the problem bank from
    #[arg(short, long, default_value = DEFAULT_PROBLEMS_PATH)]
    problems: PathBuf,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = math_quiz::logging::init(path) {
            eprintln!("Error opening log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let quiz = match Quiz::from_json(&args.problems) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
