use std::fs;

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};

use sygil::cli::{Cli, Command, GenerateArgs, PresetCommand, WordpackCommand};
use sygil::config::AppConfig;
use sygil::core::generator::{GenerationRequest, Session, WordGenerator};
use sygil::core::logging;
use sygil::core::presets::PresetStore;
use sygil::core::render::{render_markdown, RenderOptions};
use sygil::core::wordpack::WordpackStore;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_status) = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    let _log_guard = logging::init(cli.verbose, &config.log_dir());
    log::info!("sygil v{} starting", sygil::VERSION);
    config_status.log();

    let store = load_store(&cli, &config)?;
    let presets = load_presets(&cli, &config)?;

    match &cli.command {
        Command::Generate(args) => generate(args, &config, store, &presets),
        Command::Wordpacks(WordpackCommand::List { base_only }) => {
            let names = if *base_only { store.base_names() } else { store.names() };
            for name in names {
                if store.is_default_modified(&name) {
                    println!("{name} (modified)");
                } else {
                    println!("{name}");
                }
            }
            Ok(())
        }
        Command::Wordpacks(WordpackCommand::Show { name }) => {
            for word in store.get(name)? {
                println!("{word}");
            }
            Ok(())
        }
        Command::Presets(PresetCommand::List) => {
            for name in presets.names() {
                if presets.is_default(name) {
                    println!("{name} (default)");
                } else {
                    println!("{name}");
                }
            }
            Ok(())
        }
        Command::Presets(PresetCommand::Show { name }) => {
            let preset = presets.get(name)?;
            println!("{}", serde_json::to_string_pretty(&preset).into_diagnostic()?);
            Ok(())
        }
    }
}

fn load_store(cli: &Cli, config: &AppConfig) -> Result<WordpackStore> {
    let mut store = WordpackStore::with_defaults();
    if let Some(dir) = cli.wordpacks.as_ref().or(config.data.wordpack_dir.as_ref()) {
        if store.load_dir(dir)? == 0 {
            logging::print_warning(&format!("No *.txt wordpacks found in {}", dir.display()));
        }
    }
    Ok(store)
}

fn load_presets(cli: &Cli, config: &AppConfig) -> Result<PresetStore> {
    let mut presets = PresetStore::with_defaults()?;
    if let Some(path) = cli.presets.as_ref().or(config.data.presets_file.as_ref()) {
        presets.load_json(path)?;
    }
    Ok(presets)
}

fn generate(args: &GenerateArgs, config: &AppConfig, store: WordpackStore, presets: &PresetStore) -> Result<()> {
    let request = match (&args.request, &args.preset) {
        (Some(path), _) => {
            let json = fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read request {}", path.display()))?;
            GenerationRequest::from_json(&json)
                .into_diagnostic()
                .wrap_err_with(|| format!("Invalid generation request in {}", path.display()))?
        }
        (None, Some(name)) => presets.get(name)?,
        (None, None) => presets.get(&config.generator.default_preset)?,
    };

    let generator = match args.seed.or(config.generator.seed) {
        Some(seed) => WordGenerator::with_seed(seed),
        None => WordGenerator::new(),
    };
    let mut session = Session::new(store, generator);
    let result = session.generate(&request)?;

    if args.json {
        println!("{}", result.to_json_pretty().into_diagnostic()?);
    } else {
        let options = RenderOptions {
            alphabetize: args.alphabetize || config.output.alphabetize,
            one_line: !args.list && config.output.one_line,
            group_by_wordpack: args.group_by_wordpack || config.output.group_by_wordpack,
        };
        print!("{}", render_markdown(result, &options));
    }

    logging::print_success(&format!(
        "Generated {} word set{}",
        result.len(),
        if result.len() == 1 { "" } else { "s" }
    ));
    Ok(())
}
