//! kothi's main application entry point.
//! Handles command-line argument parsing and dispatches to the generator.

use kothi::{
    cli::{get_args, Command, GenerateArgs},
    config::{load_config, Settings},
    constants::DEFAULT_PLUGINS_DIR,
    error::{default_error_handler, Result},
    generator::generate,
    prompt::DialoguerPrompter,
    request::GenerationRequest,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    let result = match args.command {
        Command::Generate(generate_args) => run_generate(generate_args),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}

/// Generates a plugin from the `generate` subcommand arguments.
///
/// # Flow
/// 1. Loads project defaults from kothi.json / kothi.yml / kothi.yaml
/// 2. Builds the request; command line values win over configured ones
/// 3. Generates the plugin and prints the next steps
fn run_generate(args: GenerateArgs) -> Result<()> {
    let project_config = load_config(&args.project_root)?;
    let settings = Settings::for_project(&args.project_root, args.force);

    let request = GenerationRequest {
        raw_name: args.name,
        description: args.description,
        author: args.author.or(project_config.author),
    };

    let prompt = DialoguerPrompter::new();
    let plugin_dir = generate(&settings, &request, &prompt)?;

    println!(
        "✓ Plugin \"{}\" generated successfully in {}!",
        request.raw_name,
        plugin_dir.display()
    );
    println!("\nNext steps:");
    println!("1. cd {DEFAULT_PLUGINS_DIR}/{}", request.raw_name);
    println!("2. pnpm install");
    println!("3. pnpm build");
    println!("4. Start developing your plugin!");
    Ok(())
}
