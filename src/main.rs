use clap::Parser;
use dirs::home_dir;
use log::{debug, info};
use nu_ansi_term::{Color, Style};
use plisp::{
    cli::{Args, Commands},
    error::Result,
    extensions::ResultExtensions,
    parser::parse,
    repl::{REPLPrompt, SyntaxHighlighter},
    runtime::evaluate,
    tokenizer::tokenize,
};
use reedline::{DefaultHinter, FileBackedHistory, Reedline, Signal};
use std::{fs, path::PathBuf};

// Each line is a complete evaluation unit: tokenize, parse, then evaluate
// every top-level statement. Tokenizer and parser failures abort the line;
// evaluator failures are statement-local and siblings still run.
fn run_line(line: &str) -> Result<()> {
    let tokens = tokenize(line)?;
    let program = parse(&tokens)?;
    debug!("{:#?}", program);

    for statement in &program {
        match evaluate(statement) {
            Ok(value) => println!("{}", value),
            Err(err) => eprintln!("{}", err),
        }
    }

    Ok(())
}

fn run_file(file: PathBuf) -> Result<()> {
    let source = fs::read_to_string(file)?;

    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        run_line(line)?;
    }

    Ok(())
}

fn check_file(file: PathBuf) -> Result<()> {
    let source = fs::read_to_string(file)?;

    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        let tokens = tokenize(line)?;
        dbg!(&tokens);

        let program = parse(&tokens)?;
        dbg!(&program);
    }

    Ok(())
}

fn run_repl() -> Result<()> {
    let mut line_editor = Reedline::create()
        .with_hinter(Box::new(
            DefaultHinter::default().with_style(Style::new().italic().fg(Color::LightGray)),
        ))
        .with_highlighter(Box::new(SyntaxHighlighter));

    // Add file-backed history if possible
    if let Some(history) = home_dir()
        .map(|home| home.join(".plisp_history"))
        .and_then(|path| FileBackedHistory::with_file(20, path).ok())
        .map(Box::new)
    {
        line_editor = line_editor.with_history(history);
    } else {
        eprintln!("NOTE: Failed to load history. Persistence is now disabled.")
    }

    let prompt = REPLPrompt;

    loop {
        match line_editor.read_line(&prompt)? {
            Signal::Success(buffer) => {
                Result::pure(())
                    .and_then(|_| tokenize(&buffer))
                    .and_then(|tokens| parse(&tokens))
                    .inspect(|program| debug!("{:#?}", program))
                    .map(|program| {
                        for statement in &program {
                            match evaluate(statement) {
                                Ok(value) => println!("{}", value),
                                Err(err) => eprintln!("{}", err),
                            }
                        }
                    })
                    .inspect_err(|err| {
                        eprintln!("{}", err);
                    })
                    .ok();
            }
            Signal::CtrlD | Signal::CtrlC => {
                break Ok(());
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Run { file } => {
            info!("FILE MODE");
            debug!("file: {:?}", file);

            run_file(file)
                .inspect_err(|err| {
                    eprintln!("{}", err);
                })
                .ok();
        }
        Commands::Check { file } => {
            info!("CHECK MODE");
            debug!("file: {:?}", file);

            check_file(file)
                .inspect_err(|err| {
                    eprintln!("{}", err);
                })
                .ok();
        }
        Commands::Repl => {
            info!("REPL MODE");

            run_repl()
                .inspect_err(|err| {
                    eprintln!("{}", err);
                })
                .ok();
        }
    }
    Ok(())
}
