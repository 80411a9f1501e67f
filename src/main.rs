use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use subset_query::cli::{self, CliError, SelectOptions, SelectResult};
use subset_query::escape;

#[derive(ClapParser)]
#[command(name = "subset")]
#[command(about = "Subset - select and rename fields of a JSON document")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a subset query to JSON input
    Select {
        /// The subset query, e.g. 'user.id=id,user.address.city=town'
        query: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't execute
        #[arg(long)]
        syntax_only: bool,

        /// Fail when a path descends into a value that is not an object
        #[arg(long)]
        strict_paths: bool,

        /// Fail when two selections use the same alias
        #[arg(long)]
        reject_duplicates: bool,
    },

    /// Print the escaped form of a field name
    Encode {
        /// Field name to escape
        field: String,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'subset docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Select {
            query,
            input,
            pretty,
            syntax_only,
            strict_paths,
            reject_duplicates,
        } => {
            let options = SelectOptions {
                query,
                input: None,
                syntax_only,
                strict_paths,
                reject_duplicates,
            };
            run_select(options, input, pretty)
        }
        Commands::Encode { field } => {
            println!("{}", escape::encode(&field));
            Ok(())
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_select(
    mut options: SelectOptions,
    input: Option<String>,
    pretty: bool,
) -> Result<(), CliError> {
    options.input = match input {
        Some(s) => Some(s),
        None if !options.syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    match cli::execute_select(&options)? {
        SelectResult::SyntaxValid => println!("Syntax is valid"),
        SelectResult::Success(output) => {
            let json = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }?;
            println!("{}", json);
        }
    }
    Ok(())
}
