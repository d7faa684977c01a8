use clap::Parser;
use log::{debug, error, LevelFilter};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use paprika2markdown::render::template_file;
use paprika2markdown::{convert_with, ConvertError, RecipeRenderer, Settings};

/// Render YAML recipe files into Markdown using a template.
#[derive(Parser, Debug)]
#[command(name = "paprika2markdown", version, about)]
struct Cli {
    /// The template to use for generating output
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// The folder containing the recipe YAML files
    #[arg(short = 'r', long = "recipes")]
    recipes_folder: Option<PathBuf>,

    /// Folder to store the generated recipes. Existing files will be overwritten.
    #[arg(short = 'o', long = "output")]
    output_folder: Option<PathBuf>,

    /// Create the output folder without asking
    #[arg(short = 'y', long)]
    yes: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    let mut settings = Settings::load()?;
    if let Some(template) = cli.template {
        settings.template = Some(template);
    }
    if let Some(folder) = cli.recipes_folder {
        settings.recipes_folder = folder;
    }
    if let Some(folder) = cli.output_folder {
        settings.output_folder = folder;
    }
    debug!("{:#?}", settings);

    let renderer = RecipeRenderer::from_settings(&settings)?;
    match template_file(&settings) {
        Some(path) => println!("Using template file {}", path.display()),
        None => println!("Using the built-in template"),
    }

    if !settings.recipes_folder.is_dir() {
        return Err(ConvertError::MissingFolder(settings.recipes_folder));
    }

    if !settings.output_folder.is_dir() {
        let create = cli.yes || {
            let stdin = io::stdin();
            prompt_yes_no(
                "Output folder does not exist. Should I create it?",
                stdin.lock(),
                io::stdout(),
            )
            .map_err(|source| ConvertError::IoError {
                path: PathBuf::from("<stdin>"),
                source,
            })?
        };
        if !create {
            println!("Output folder not created. Quitting.");
            return Ok(());
        }
        create_output_folder(&settings.output_folder)?;
    }

    println!("Reading recipes from {}", settings.recipes_folder.display());
    let report = convert_with(&renderer, &settings.recipes_folder, &settings.output_folder)?;
    for path in &report.written {
        println!("Saved {}", path.display());
    }
    if report.skipped > 0 {
        println!("Skipped {} recipe(s), see the log for details.", report.skipped);
    }

    Ok(())
}

fn create_output_folder(folder: &Path) -> Result<(), ConvertError> {
    println!("Creating folder {}", folder.display());
    fs::create_dir_all(folder).map_err(|source| ConvertError::IoError {
        path: folder.to_path_buf(),
        source,
    })?;
    println!("Output folder created.");
    Ok(())
}

/// Ask a yes/no question. Only answers starting with `y` or `Y` count as yes.
fn prompt_yes_no(
    question: &str,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<bool> {
    write!(output, "{} (y/N): ", question)?;
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    Ok(response
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y')))
}
