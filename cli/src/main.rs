#![allow(clippy::print_stdout)]
use crate::cli::{Args, Command};
use anyhow::{bail, Context};
use clap::Parser;
use oxrdfio::{RdfFormat, RdfSerializer};
use rdf_transform_codec::{parse, serialize_pretty};
use rdf_transform_materialize::{Materializer, Row};
use rdf_transform_model::{Node, Prefixes, SiteConfig, Transform};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, stdin, stdout, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

mod cli;

pub fn main() -> anyhow::Result<()> {
    init_logging();
    let matches = Args::parse();
    let site = SiteConfig::from(matches.site);
    match matches.command {
        Command::Check { template } => {
            let transform = read_template(&template)?;
            print!("{}", summary(&template, &transform));
            Ok(())
        }
        Command::Format { template, output } => {
            let transform = read_template(&template)?;
            let mut text = serialize_pretty(&transform)?;
            text.push('\n');
            if let Some(output) = output {
                fs::write(&output, text)
                    .with_context(|| format!("Error while writing {}", output.display()))?;
            } else {
                stdout().lock().write_all(text.as_bytes())?;
            }
            Ok(())
        }
        Command::Preview {
            template,
            data,
            limit,
            format,
            output,
        } => {
            let mut transform = read_template(&template)?;
            if transform.base_iri.is_empty() {
                transform.base_iri = site.default_base_iri();
                debug!(base_iri = transform.base_iri, "Using the site base IRI");
            }
            let format = if let Some(format) = format {
                rdf_format_from_name(&format)?
            } else if let Some(output) = &output {
                rdf_format_from_path(output)?
            } else {
                RdfFormat::Turtle
            };

            match (data, output) {
                (Some(data), Some(output)) => close_file_writer(preview(
                    &transform,
                    File::open(&data)
                        .with_context(|| format!("Error while opening {}", data.display()))?,
                    limit,
                    format,
                    BufWriter::new(File::create(&output).with_context(|| {
                        format!("Error while creating {}", output.display())
                    })?),
                )?)?,
                (Some(data), None) => {
                    preview(
                        &transform,
                        File::open(&data)
                            .with_context(|| format!("Error while opening {}", data.display()))?,
                        limit,
                        format,
                        stdout().lock(),
                    )?
                    .flush()?;
                }
                (None, Some(output)) => close_file_writer(preview(
                    &transform,
                    stdin().lock(),
                    limit,
                    format,
                    BufWriter::new(File::create(&output).with_context(|| {
                        format!("Error while creating {}", output.display())
                    })?),
                )?)?,
                (None, None) => {
                    preview(&transform, stdin().lock(), limit, format, stdout().lock())?
                        .flush()?;
                }
            }
            Ok(())
        }
        Command::Prefixes => {
            for prefix in &Prefixes::predefined() {
                println!("{}\t{}", prefix.prefix, prefix.iri);
            }
            Ok(())
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn read_template(path: &Path) -> anyhow::Result<Transform> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Error while reading {}", path.display()))?;
    parse(&text).with_context(|| format!("Invalid template {}", path.display()))
}

fn summary(path: &Path, transform: &Transform) -> String {
    let properties: usize = transform.subject_mappings.iter().map(count_properties).sum();
    let base_iri = if transform.base_iri.is_empty() {
        "(none)"
    } else {
        transform.base_iri.as_str()
    };
    format!(
        "Template: {}\nBase IRI: {base_iri}\nPrefixes: {}\nSubject mappings: {}\nProperties: {properties}\n",
        path.display(),
        transform.prefixes.len(),
        transform.subject_mappings.len(),
    )
}

/// Counts the properties of `node` and of every object node below it.
fn count_properties(node: &Node) -> usize {
    node.properties()
        .iter()
        .map(|property| 1 + property.object().map_or(0, count_properties))
        .sum()
}

/// Streams the triples of the first `limit` CSV records through an RDF serializer.
fn preview<R: Read, W: Write>(
    transform: &Transform,
    data: R,
    limit: usize,
    format: RdfFormat,
    writer: W,
) -> anyhow::Result<W> {
    let materializer = Materializer::new(transform).context("The template cannot be applied")?;

    let mut serializer = RdfSerializer::from_format(format);
    for prefix in &transform.prefixes {
        serializer = serializer
            .with_prefix(prefix.prefix.as_str(), prefix.iri.as_str())
            .with_context(|| format!("Invalid IRI for prefix {}", prefix.prefix))?;
    }
    let mut serializer = serializer.for_writer(writer);

    let mut reader = csv::Reader::from_reader(data);
    let headers = reader
        .headers()
        .context("Error while reading the CSV header")?
        .clone();
    let limit = if limit == 0 { usize::MAX } else { limit };
    for (index, record) in reader.records().take(limit).enumerate() {
        let record = record.with_context(|| format!("Error while reading CSV record {index}"))?;
        let row = Row::from_cells(index, headers.iter().zip(record.iter()));
        for triple in materializer.materialize_row(&row)? {
            serializer.serialize_triple(&triple)?;
        }
    }
    Ok(serializer.finish()?)
}

fn format_from_path<T>(
    path: &Path,
    from_extension: impl FnOnce(&str) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        from_extension(ext).map_err(|e| {
            e.context(format!(
                "Not able to guess the file format from file name extension '{ext}'"
            ))
        })
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn rdf_format_from_path(path: &Path) -> anyhow::Result<RdfFormat> {
    format_from_path(path, |ext| {
        RdfFormat::from_extension(ext)
            .with_context(|| format!("The file extension '{ext}' is unknown"))
    })
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The file format '{name}' is unknown")
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}
