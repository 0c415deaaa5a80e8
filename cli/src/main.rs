//! richtext CLI - render rich-text JSON documents to HTML

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use richtext::{render, Document, RenderOptions};

#[derive(Parser)]
#[command(name = "richtext")]
#[command(version)]
#[command(about = "Render a rich-text JSON document to HTML", long_about = None)]
struct Cli {
    /// Input JSON document file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output HTML file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Render list item paragraphs without <p> tags
    #[arg(long)]
    omit_paragraphs_in_list_items: bool,

    /// Print node statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> richtext::Result<()> {
    let json = read_input(cli)?;
    let doc = Document::from_json(&json)?;

    let options = RenderOptions::new()
        .omit_paragraph_tags_inside_list_items(cli.omit_paragraphs_in_list_items);

    let html = if cli.stats {
        let result = render::to_html_with_stats(&doc, &options)?;
        print_stats(&result.stats);
        result.html
    } else {
        render::to_html(&doc, &options)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, html)?;
            eprintln!("{} {}", "wrote".green(), path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn read_input(cli: &Cli) -> richtext::Result<String> {
    if cli.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        log::debug!("reading document from {}", cli.input.display());
        Ok(fs::read_to_string(&cli.input)?)
    }
}

fn print_stats(stats: &richtext::RenderStats) {
    eprintln!("{}", "statistics".bold());
    eprintln!("  headings:         {}", stats.heading_count);
    eprintln!("  paragraphs:       {}", stats.paragraph_count);
    eprintln!("  list items:       {}", stats.list_item_count);
    eprintln!("  hyperlinks:       {}", stats.hyperlink_count);
    eprintln!("  tables:           {}", stats.table_count);
    eprintln!("  horizontal rules: {}", stats.horizontal_rule_count);
    eprintln!("  embedded refs:    {}", stats.embedded_count);
    eprintln!("  unknown tags:     {}", stats.unknown_count);
    eprintln!("  words:            {}", stats.word_count);
}
