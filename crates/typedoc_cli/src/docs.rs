//! Types section rendering command
//!
//! Loads TypeDoc metadata, renders the "Types" section and writes it as
//! Markdown, HTML or fragment JSON.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use typedoc_etch::{
    load_types, read_types, EtchConfig, Etcher, Fragment, HtmlRenderer, MarkdownRenderer,
};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(
    name = "typedoc-etch",
    version,
    about = "Render the Types section of TypeDoc metadata"
)]
pub struct Args {
    /// TypeDoc JSON file (array of type nodes or project object); `-` for stdin.
    pub input: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
    pub format: Format,

    /// Output destination; omit for stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Section heading; overrides the configuration.
    #[arg(long)]
    pub title: Option<String>,
}

/// Output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Markdown,
    Html,
    Json,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Type nodes in the input
    pub total: usize,
    /// Type nodes that produced a fragment
    pub rendered: usize,
    /// Output file, `None` for stdout
    pub output: Option<PathBuf>,
}

/// Run the command with the given arguments
pub fn run(args: &Args) -> Result<Summary> {
    let mut config = match &args.config {
        Some(path) => EtchConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EtchConfig::default(),
    };
    if let Some(title) = &args.title {
        config.section_title = title.clone();
    }

    let nodes = load(&args.input)?;
    tracing::debug!(count = nodes.len(), input = %args.input.display(), "loaded type nodes");

    let section = Etcher::new(config).render_section(&nodes);
    let rendered = section
        .as_ref()
        .map(|s| s.children().len().saturating_sub(1))
        .unwrap_or(0);
    let text = render(args.format, section.as_ref())?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(Summary {
        total: nodes.len(),
        rendered,
        output: args.output.clone(),
    })
}

fn load(input: &Path) -> Result<Vec<typedoc_etch::TypeGeneralData>> {
    if input == Path::new("-") {
        return read_types(std::io::stdin().lock()).context("Failed to read type nodes from stdin");
    }
    load_types(input).with_context(|| format!("Failed to load type nodes from {}", input.display()))
}

/// Serialize the section; no section means an empty document
fn render(format: Format, section: Option<&Fragment>) -> Result<String> {
    let Some(section) = section else {
        return Ok(String::new());
    };

    Ok(match format {
        Format::Markdown => MarkdownRenderer::new().render(section),
        Format::Html => HtmlRenderer::new().render(section),
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(section).context("Failed to serialize fragments")?;
            json.push('\n');
            json
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TYPES: &str = r#"[
        { "name": "Id", "type": { "type": "intrinsic", "name": "string" } },
        { "name": "Names", "type": { "type": "array", "elementType": { "type": "intrinsic", "name": "string" } } }
    ]"#;

    fn args(input: &Path, extra: &[&str]) -> Args {
        let mut argv = vec!["typedoc-etch".to_string(), input.display().to_string()];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["typedoc-etch", "types.json"]).unwrap();
        assert_eq!(args.format, Format::Markdown);
        assert!(args.output.is_none());

        let args = Args::try_parse_from([
            "typedoc-etch",
            "types.json",
            "-f",
            "html",
            "-o",
            "out.html",
            "--title",
            "Aliases",
        ])
        .unwrap();
        assert_eq!(args.format, Format::Html);
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert_eq!(args.title.as_deref(), Some("Aliases"));

        assert!(Args::try_parse_from(["typedoc-etch", "types.json", "-f", "pdf"]).is_err());
        assert!(Args::try_parse_from(["typedoc-etch"]).is_err());
    }

    #[test]
    fn test_run_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("types.json");
        let output = dir.path().join("out/types.md");
        std::fs::write(&input, TYPES).unwrap();

        let summary = run(&args(&input, &["-o", output.to_str().unwrap()])).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.rendered, 1);

        let md = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            md,
            "## Types\n\n### `Id`\n\n**Type:** `string`\n"
        );
    }

    #[test]
    fn test_run_json_with_config() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("types.json");
        let config = dir.path().join("etch.toml");
        let output = dir.path().join("types.json.out");
        std::fs::write(&input, TYPES).unwrap();
        std::fs::write(&config, "section_title = \"Aliases\"\n").unwrap();

        run(&args(
            &input,
            &[
                "-f",
                "json",
                "-c",
                config.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ],
        ))
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["kind"], "block");
        assert_eq!(json["value"]["key"], "types");
        assert_eq!(
            json["value"]["children"][0]["value"]["content"][0]["value"],
            "Aliases"
        );
    }

    #[test]
    fn test_empty_input_writes_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("types.json");
        let output = dir.path().join("types.md");
        std::fs::write(&input, "[]").unwrap();

        let summary = run(&args(&input, &["-o", output.to_str().unwrap()])).unwrap();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.rendered, 0);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = run(&args(&missing, &[])).unwrap_err();
        assert!(err.to_string().contains("Failed to load type nodes"));

        let input = dir.path().join("types.json");
        let config = dir.path().join("etch.toml");
        std::fs::write(&input, TYPES).unwrap();
        std::fs::write(&config, "bogus = true\n").unwrap();
        let err = run(&args(&input, &["-c", config.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
