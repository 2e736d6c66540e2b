//! Polytag - Type-Metadata Declarations Inspector
//!
//! Usage:
//!   polytag check <file>                          # Validate a declarations file
//!   polytag resolve <file> <type> [--property P]  # Show the effective declaration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polytag_core::config::DeclarationStore;
use polytag_core::registry::{Effective, MetadataRegistry};
use polytag_core::types::{Attachment, Inclusion};

#[derive(Parser)]
#[command(name = "polytag")]
#[command(about = "Type-Metadata Declarations Inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a declarations file
    Check {
        /// Path to the declarations TOML file
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the effective declaration for a type, or for a value reached
    /// through a property
    Resolve {
        /// Path to the declarations TOML file
        file: PathBuf,

        /// Type name of the value
        r#type: String,

        /// Property through which the value is reached
        #[arg(short, long)]
        property: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polytag=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, format } => run_check(file, format),
        Commands::Resolve {
            file,
            r#type,
            property,
            format,
        } => run_resolve(file, r#type, property, format),
    }
}

fn run_check(file: PathBuf, format: OutputFormat) -> Result<()> {
    let declarations = DeclarationStore::new(&file).load()?;

    match format {
        OutputFormat::Table => {
            println!("OK: {}", file.display());
            println!(
                "  {} type declaration(s), {} property declaration(s)",
                declarations.types.len(),
                declarations.properties.len()
            );
        }
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "file": file.display().to_string(),
                "valid": true,
                "types": declarations.types.len(),
                "properties": declarations.properties.len(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn run_resolve(
    file: PathBuf,
    type_name: String,
    property: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let declarations = DeclarationStore::new(&file).load()?;
    tracing::debug!(file = %file.display(), "loaded declarations");
    let registry = MetadataRegistry::from_declarations(&declarations)?;

    let Some(effective) = registry.resolve(&type_name, property.as_deref()) else {
        match property {
            Some(prop) => anyhow::bail!(
                "No declaration found for type '{}' or property '{}.{}'",
                type_name,
                type_name,
                prop
            ),
            None => anyhow::bail!("No declaration found for type '{}'", type_name),
        }
    };

    match format {
        OutputFormat::Table => print_effective_table(&effective),
        OutputFormat::Json => print_effective_json(&effective)?,
    }

    Ok(())
}

fn print_effective_table(effective: &Effective) {
    let attachment = match effective.attachment() {
        Attachment::Type => "type",
        Attachment::Property => "property",
    };
    println!("attachment:            {attachment}");
    println!("use:                   {}", format_kind(effective));
    println!("include:               {}", format_inclusion(effective.inclusion()));
    println!(
        "property name:         {}",
        effective.property_name().unwrap_or("(engine-defined)")
    );
    println!("default impl:          {}", format_default_impl(effective));
    println!("visible:               {}", effective.info().visible);
    println!(
        "skip writing default:  {}",
        effective.info().skip_writing_default
    );
}

fn print_effective_json(effective: &Effective) -> Result<()> {
    let out = serde_json::json!({
        "attachment": effective.attachment(),
        "use": effective.info().kind,
        "include": effective.inclusion(),
        "property_name": effective.property_name(),
        "default_impl": effective.info().default_impl,
        "visible": effective.info().visible,
        "skip_writing_default": effective.info().skip_writing_default,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn format_kind(effective: &Effective) -> &'static str {
    use polytag_core::types::TypeIdKind;
    match effective.info().kind {
        TypeIdKind::None => "none",
        TypeIdKind::Class => "class",
        TypeIdKind::MinimalClass => "minimal-class",
        TypeIdKind::Name => "name",
        TypeIdKind::Custom => "custom",
    }
}

fn format_inclusion(inclusion: Inclusion) -> &'static str {
    match inclusion {
        Inclusion::Property => "property",
        Inclusion::WrapperObject => "wrapper-object",
        Inclusion::WrapperArray => "wrapper-array",
        Inclusion::ExternalProperty => "external-property",
        Inclusion::ExistingProperty => "existing-property",
    }
}

fn format_default_impl(effective: &Effective) -> String {
    use polytag_core::types::DefaultImpl;
    match &effective.info().default_impl {
        DefaultImpl::NoDefault => "(none)".to_string(),
        DefaultImpl::AsNull => "null".to_string(),
        DefaultImpl::Type(name) => name.clone(),
    }
}
