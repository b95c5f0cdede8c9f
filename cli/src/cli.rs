use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use rdf_transform_model::SiteConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "rdf-transform")]
/// Checks, formats and previews RDF Transform templates
pub struct Args {
    #[command(flatten)]
    pub site: SiteArgs,
    #[command(subcommand)]
    pub command: Command,
}

/// Where the data-wrangling host is reachable
///
/// Used to derive the base IRI of templates that do not declare one.
#[derive(ClapArgs)]
pub struct SiteArgs {
    /// DNS name of the host
    #[arg(long, global = true, env = "RDF_TRANSFORM_HOST", value_hint = ValueHint::Hostname)]
    pub host: Option<String>,
    /// Interface the host binds to, used when no host name is given
    #[arg(long, global = true, env = "RDF_TRANSFORM_IFACE")]
    pub iface: Option<String>,
    /// Port the host listens on
    #[arg(long, global = true, env = "RDF_TRANSFORM_PORT")]
    pub port: Option<u16>,
}

impl From<SiteArgs> for SiteConfig {
    fn from(args: SiteArgs) -> Self {
        Self::new(args.host, args.iface, args.port)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse and validate a template, then print a summary of it
    Check {
        /// Template file to check
        #[arg(value_hint = ValueHint::FilePath)]
        template: PathBuf,
    },
    /// Rewrite a template as normalized, pretty printed JSON
    ///
    /// Incomplete properties are dropped and only the first object of each property is kept.
    Format {
        /// Template file to format
        #[arg(value_hint = ValueHint::FilePath)]
        template: PathBuf,
        /// File to write to
        ///
        /// If no file is given, stdout is written.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
    /// Apply a template to the rows of a CSV file and print the resulting RDF
    Preview {
        /// Template file to apply
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        template: PathBuf,
        /// CSV file to read rows from. The first record holds the column names
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        data: Option<PathBuf>,
        /// Maximal number of rows to materialize
        ///
        /// 0 means all rows.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// The format to write
        ///
        /// It can be an extension like "nt" or a MIME type like "application/n-triples".
        ///
        /// By default the format is guessed from the output file extension, or Turtle is used.
        #[arg(long)]
        format: Option<String>,
        /// File to write to
        ///
        /// If no file is given, stdout is written.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
    /// Print the well-known prefixes offered to new templates
    Prefixes,
}
