use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgGroup, Parser, ValueEnum, error::ErrorKind};

use crate::context::Session;
use crate::coverage::CoverageLevel;
use crate::page::{PageAssembler, PageRequest, PageSelector};
use crate::sort::SortMode;
use crate::source::Fixture;
use crate::view::{PageView, RowView};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Code,
    Name,
    Metazone,
    Interest,
    PathHeader,
}

impl From<SortArg> for SortMode {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Code => SortMode::Code,
            SortArg::Name => SortMode::Name,
            SortArg::Metazone => SortMode::Metazone,
            SortArg::Interest => SortMode::Interest,
            SortArg::PathHeader => SortMode::PathHeader,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "page_dump",
    disable_help_subcommand = true,
    about = "Assemble one vetting page from a JSON fixture",
    long_about = "Load a fixture (locale data, ballots, validation rules, and path catalog), assemble the rows of one page, and print them as JSON together with the display set for the chosen sort mode.",
    after_help = "Set RUST_LOG=locale_vetting=debug to see assembly timings and validation warnings."
)]
#[command(group(ArgGroup::new("selector").required(true).args(["page", "prefix"])))]
/// CLI for `page_dump`.
///
/// Common usage:
/// - Dump a named page: `--fixture data.json --locale de --page Languages`
/// - Dump a prefix: `--fixture data.json --locale de --prefix //ldml/dates/timeZoneNames/metazone`
/// - Show one row as seen by a voter: `--user u1 --field-hash <HASH>`
struct PageDumpCli {
    #[arg(long, value_name = "PATH", help = "Fixture JSON file")]
    fixture: PathBuf,
    #[arg(long, help = "Locale whose page is assembled")]
    locale: String,
    #[arg(long, value_name = "PAGE_ID", help = "Named page to assemble")]
    page: Option<String>,
    #[arg(long, value_name = "XPATH", help = "Assemble every path under this prefix")]
    prefix: Option<String>,
    #[arg(
        long,
        value_enum,
        default_value = "code",
        help = "Sort mode used for the display set"
    )]
    sort: SortArg,
    #[arg(
        long,
        value_parser = parse_coverage_arg,
        help = "Maximum coverage level; the fixture default applies when unset"
    )]
    coverage: Option<CoverageLevel>,
    #[arg(long, help = "Report votes of this user")]
    user: Option<String>,
    #[arg(
        long = "field-hash",
        value_name = "HASH",
        help = "Print only the row with this field hash"
    )]
    field_hash: Option<String>,
    #[arg(long, help = "Print compact JSON instead of pretty JSON")]
    compact: bool,
}

/// Run the `page_dump` command with the given arguments (program name excluded).
pub fn run_page_dump<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let Some(cli) =
        parse_cli::<PageDumpCli, _>(std::iter::once("page_dump".to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    let fixture = Fixture::from_file(&cli.fixture)?;
    let assembler = PageAssembler::new(Arc::new(fixture.context()?));

    let selector = match (cli.page, cli.prefix) {
        (Some(page), _) => PageSelector::Page(page),
        (None, Some(prefix)) => PageSelector::Prefix(prefix),
        (None, None) => return Err("one of --page or --prefix is required".into()),
    };
    let mut request = PageRequest::new(cli.locale, selector);
    request.max_coverage = cli.coverage;

    let mut session = Session::new("page_dump");
    if let Some(user) = cli.user {
        session = session.with_user(user);
    }
    let page = assembler.assemble_for_session(&session, &request)?;

    let output = match cli.field_hash {
        Some(hash) => {
            let row = page.row_by_field_hash(&hash)?;
            to_json(&RowView::new(row, page.user()), cli.compact)?
        }
        None => to_json(&PageView::new(&page, cli.sort.into()), cli.compact)?,
    };
    println!("{output}");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

fn parse_coverage_arg(raw: &str) -> Result<CoverageLevel, String> {
    raw.trim()
        .parse::<CoverageLevel>()
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<PageDumpCli>, Box<dyn Error>> {
        parse_cli::<PageDumpCli, _>(
            std::iter::once("page_dump").chain(args.iter().copied()),
        )
    }

    #[test]
    fn page_or_prefix_is_required() {
        assert!(parse(&["--fixture", "f.json", "--locale", "de"]).is_err());
        assert!(
            parse(&[
                "--fixture", "f.json", "--locale", "de", "--page", "P", "--prefix", "//ldml"
            ])
            .is_err()
        );
    }

    #[test]
    fn parses_sort_and_coverage() {
        let cli = parse(&[
            "--fixture",
            "f.json",
            "--locale",
            "de",
            "--prefix",
            "//ldml/dates",
            "--sort",
            "path-header",
            "--coverage",
            "modern",
        ])
        .unwrap()
        .unwrap();
        assert_eq!(SortMode::from(cli.sort), SortMode::PathHeader);
        assert_eq!(cli.coverage, Some(CoverageLevel::Modern));
        assert_eq!(cli.prefix.as_deref(), Some("//ldml/dates"));
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(parse(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn rejects_unknown_coverage() {
        assert!(parse_coverage_arg("everything").is_err());
    }
}
