use clap::Parser;
use vezor::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    vezor::cli::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Secret {
            ref name,
            ref tags,
            show_value,
            format,
        } => vezor::cli::commands::secret::execute(&cli, name, tags, show_value, format),
        Commands::Group {
            ref name,
            show_values,
            format,
        } => vezor::cli::commands::group::execute(&cli, name, show_values, format),
        Commands::Get { ref id, version } => vezor::cli::commands::get::execute(&cli, id, version),
        Commands::List {
            ref tags,
            ref search,
            limit,
        } => vezor::cli::commands::list::execute(&cli, tags, search.as_deref(), limit),
        Commands::Version => vezor::cli::commands::version::execute(),
        Commands::Completions { shell } => vezor::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        vezor::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
