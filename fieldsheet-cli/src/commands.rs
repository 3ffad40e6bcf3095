//! Subcommand implementations

use crate::ExportArgs;
use anyhow::{bail, Context};
use fieldsheet_babel::formats::DocxFormat;
use fieldsheet_babel::{publish_with, FieldTable, FormatRegistry, PublishArtifact, PublishSpec};
use fieldsheet_config::{FieldsheetConfig, Loader, LOCAL_CONFIG_FILE};
use fieldsheet_parser::parse_fields;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Parse the input and publish it in the requested format.
pub fn export(config_path: Option<&Path>, args: ExportArgs) -> anyhow::Result<()> {
    let config = load_config(config_path, &args)?;
    let source = read_input(args.input.as_deref())?;

    let fields = parse_fields(&source);
    if fields.is_empty() {
        warn!("no field declarations found in input");
    }

    let table = FieldTable::from_fields(&fields, &config.export.label_prefix)
        .with_title(config.document.title.clone());
    let registry = build_registry(&config);
    let format = config.export.format.as_str();

    let output = match args.output {
        Some(path) => Some(path),
        None if registry.get(format)?.extension() == "docx" => {
            Some(PathBuf::from(&config.document.file_name))
        }
        None => None,
    };

    let mut spec = PublishSpec::new(&table, format);
    if let Some(path) = &output {
        spec = spec.with_output_path(path);
    }

    let result = publish_with(&registry, spec)
        .with_context(|| format!("Failed to export {} fields as {}", fields.len(), format))?;

    match result.artifact {
        PublishArtifact::InMemory(text) => print!("{}", text),
        PublishArtifact::File(path) => {
            info!(fields = fields.len(), "export complete");
            eprintln!("Wrote {} fields to {}", fields.len(), path.display());
        }
    }
    Ok(())
}

/// Print one line per parsed field: label, name, type, R/O and description.
pub fn fields(input: Option<&Path>) -> anyhow::Result<()> {
    let source = read_input(input)?;
    for (i, field) in parse_fields(&source).iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            i + 1,
            field.name,
            field.data_type,
            field.requirement,
            field.description
        );
    }
    Ok(())
}

pub fn formats() -> anyhow::Result<()> {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let format = registry.get(&name)?;
        println!("  {:<10} {} (.{})", name, format.description(), format.extension());
    }
    Ok(())
}

fn load_config(config_path: Option<&Path>, args: &ExportArgs) -> anyhow::Result<FieldsheetConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(label) = &args.label {
        loader = loader.set_override("export.label_prefix", label.clone())?;
    }
    if let Some(format) = &args.format {
        loader = loader.set_override("export.format", format.clone())?;
    }
    if let Some(orientation) = &args.orientation {
        loader = loader.set_override("document.orientation", orientation.clone())?;
    }
    loader.build().context("Failed to load configuration")
}

fn build_registry(config: &FieldsheetConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(DocxFormat::new(config.document.orientation));
    registry
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        None => read_stdin(),
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => {
            if path.is_dir() {
                bail!("{} is a directory", path.display());
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("Failed to read stdin")?;
    Ok(source)
}
