use clap::Parser;
use psic::{
    VERSION,
    frontend::lexer::scan,
    parse_source,
    printer::PsiPrinter,
    read,
    semantic::NodeCounter,
    utils::errors::{PsiError, PsiResult},
};
use std::{fs, path::PathBuf, time::Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version = VERSION,
    about = "Parser and pretty-printer for a Pascal subset",
    long_about = "Parser and pretty-printer for a Pascal subset.\n\
                 Reads a .pas file, parses it into a syntax tree and regenerates\n\
                 normalized source from the tree.\n\
                 \n\
                 Example usage:\n\
                 psic input.pas                    # Check that the file parses\n\
                 psic input.pas --print            # Print regenerated source\n\
                 psic input.pas -o out.pas         # Write regenerated source to a file\n\
                 psic input.pas --tokens           # Dump the token stream\n\
                 psic input.pas --stats            # Show token and node counts\n\
                 psic input.pas --verbose          # Debug logging to stderr"
)]
struct Cli {
    // The path to the file to parse
    path: PathBuf,

    // Dump scanned tokens before parsing
    #[arg(long)]
    tokens: bool,

    // Print regenerated source to stdout
    #[arg(short, long)]
    print: bool,

    // Write regenerated source to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Show token and node counts
    #[arg(short, long)]
    stats: bool,

    // Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct ParseStats {
    token_count: usize,
    node_count: usize,
    declaration_count: usize,
    parse_time: f64,
}

fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn dump_tokens(source: &str) -> usize {
    let tokens = scan(source);
    for token in &tokens {
        println!("{:>4}:{:<4} {:<10} {}", token.line, token.column, format!("{:?}", token.kind), token);
    }
    tokens.len()
}

fn process(args: &Cli, source: &str) -> PsiResult<ParseStats> {
    let mut stats = ParseStats::default();
    let file_name = args.path.display().to_string();

    if args.tokens {
        stats.token_count = dump_tokens(source);
    } else if args.stats {
        stats.token_count = scan(source).len();
    }

    let start = Instant::now();
    let program = parse_source(&file_name, source)?;
    stats.parse_time = start.elapsed().as_secs_f64();
    stats.node_count = NodeCounter::count(&program);
    stats.declaration_count = program.block.decls.vars.len() + program.block.decls.proc_fns.len();
    tracing::info!(file = %file_name, nodes = stats.node_count, "parsed");

    if args.print || args.output.is_some() {
        let text = PsiPrinter::print(&program);
        match &args.output {
            Some(path) => {
                fs::write(path, format!("{}\n", text))?;
                tracing::info!(path = %path.display(), "wrote regenerated source");
            }
            None => println!("{}", text),
        }
    }
    Ok(stats)
}

fn print_stats(stats: &ParseStats) {
    println!("Tokens:       {}", stats.token_count);
    println!("Nodes:        {}", stats.node_count);
    println!("Declarations: {}", stats.declaration_count);
    println!("Parse time:   {:.3}s", stats.parse_time);
}

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let source = match read(&args.path) {
        Ok(source) => source,
        Err(e) => fatal(&e.to_string()),
    };

    match process(&args, &source) {
        Ok(stats) => {
            if args.stats {
                print_stats(&stats);
            }
        }
        Err(PsiError::Parse(err)) => {
            eprint!("{}", err.render(&source));
            std::process::exit(1);
        }
        Err(e) => fatal(&e.to_string()),
    }
}
