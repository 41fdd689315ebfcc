use crate::core::{
    assemble, build_catalog, print_catalog, print_error, print_success, with_spinner,
    write_output, HttpClient, InteractiveSelector, PresetSelector, ReqwestClient, Result,
    Selector, ShowcaseError, SourceSpec, SOURCES,
};
use clap::Args;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct GitignoreArgs {
    /// File to write the generated content to
    #[arg(short, long, default_value = ".gitignore")]
    pub output: PathBuf,

    /// Template to include (repeatable); prompts interactively when omitted
    #[arg(short, long = "template", value_name = "NAME")]
    pub templates: Vec<String>,

    /// Print the available templates and exit
    #[arg(long)]
    pub list: bool,

    /// Abort any request taking longer than this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

pub async fn execute_gitignore(args: GitignoreArgs) -> Result<()> {
    let client = ReqwestClient::new(args.timeout.map(Duration::from_secs))?;

    let result = if args.list {
        list_templates(&client, &SOURCES).await
    } else if args.templates.is_empty() {
        let selector = InteractiveSelector::default();
        generate_gitignore(&client, &selector, &SOURCES, &args.output).await
    } else {
        let selector = PresetSelector::new(args.templates);
        generate_gitignore(&client, &selector, &SOURCES, &args.output).await
    };

    match result {
        Err(e @ ShowcaseError::WriteFailed { .. }) => {
            // Reported, not retried; the run itself is still finished
            log::error!("{e}");
            print_error(&e.to_string());
            Ok(())
        }
        other => other,
    }
}

async fn list_templates<C: HttpClient>(client: &C, sources: &[SourceSpec]) -> Result<()> {
    let catalog = with_spinner(
        "Fetch .gitignore templates",
        build_catalog(client, sources),
    )
    .await?;
    print_catalog(&catalog);
    Ok(())
}

/// Build the catalog, ask `selector` for templates, assemble them and write
/// the result to `output`.
///
/// Nothing is written unless every download succeeded.
pub async fn generate_gitignore<C, S>(
    client: &C,
    selector: &S,
    sources: &[SourceSpec],
    output: &Path,
) -> Result<()>
where
    C: HttpClient,
    S: Selector,
{
    let catalog = with_spinner(
        "Fetch .gitignore templates",
        build_catalog(client, sources),
    )
    .await?;
    log::debug!("Found {} templates", catalog.len());

    let names = selector.select(catalog.names()).await?;
    let selected = catalog.resolve(&names)?;

    let content = with_spinner(
        "Build .gitignore file content",
        assemble(client, &selected),
    )
    .await?;

    write_output(output, &content).await?;

    let names: Vec<&str> = selected.iter().map(|entry| entry.name.as_str()).collect();
    print_success(&format!(
        "Wrote {} with {}\n",
        output.display(),
        names.join(", ")
    ));
    Ok(())
}
