//! Get command - look up a cached descriptor

use crate::cli::args::{GetArgs, OutputFormat};
use crate::cli::open_cache;
use crate::config::Config;
use crate::error::XedResult;
use crate::extension::{parse_descriptor_url, CoreExtension, RepositoryRef};
use console::style;

/// Execute the get command
pub fn execute(args: GetArgs, config: &Config) -> XedResult<()> {
    let url = parse_descriptor_url(&args.url)?;
    let cache = open_cache(config);
    let repository = RepositoryRef::new(args.repository);

    let Some(extension) = cache.get_extension(&repository, &url) else {
        println!("{} not cached", style("○").dim());
        return Ok(());
    };

    match args.format {
        OutputFormat::Table => print_table(&extension),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(extension.descriptor())?)
        }
        OutputFormat::Plain => println!("{}", extension),
    }

    Ok(())
}

fn print_table(extension: &CoreExtension) {
    let descriptor = extension.descriptor();

    println!("{:<14} {}", "ID", style(&descriptor.id).bold());
    println!("{:<14} {}", "VERSION", descriptor.version);
    if let Some(name) = &descriptor.name {
        println!("{:<14} {}", "NAME", name);
    }
    if let Some(kind) = &descriptor.kind {
        println!("{:<14} {}", "TYPE", kind);
    }
    if !descriptor.features.is_empty() {
        println!("{:<14} {}", "FEATURES", descriptor.features.join(", "));
    }
    for dependency in &descriptor.dependencies {
        println!(
            "{:<14} {} {}",
            "DEPENDENCY",
            dependency.id,
            dependency.constraint.as_deref().unwrap_or("")
        );
    }
    println!("{:<14} {}", "URL", extension.descriptor_url());
    println!("{:<14} {}", "REPOSITORY", extension.repository());
    println!(
        "{:<14} {}",
        "SOURCE",
        style(extension.provenance()).green()
    );
}
