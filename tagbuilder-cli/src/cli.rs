use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tagbuilder_common::warning::warn_once;
use tagbuilder_html::{RenderMode, TagBuilder};

use crate::spec::TagSpec;

/// Render a single HTML tag.
///
/// Flags are applied after the `--spec` file, so they add to or override it.
#[derive(Debug, Default, Parser)]
#[command(name = "tagbuilder", version, about)]
pub struct Cli {
    /// Tag name; overrides the spec file's `tag`
    pub tag: Option<String>,

    /// JSON tag description to start from
    #[arg(short, long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Attribute to merge; repeatable. A bare KEY has no value
    #[arg(short, long = "attr", value_name = "KEY[=VALUE]")]
    pub attrs: Vec<String>,

    /// Let --attr overwrite attributes that already exist
    #[arg(long)]
    pub replace: bool,

    /// CSS class to add; repeatable. Later classes render first
    #[arg(short, long = "class", value_name = "CLASS")]
    pub classes: Vec<String>,

    /// Plain-text content
    #[arg(short, long, conflicts_with = "html")]
    pub text: Option<String>,

    /// Raw markup content, never escaped
    #[arg(long)]
    pub html: Option<String>,

    /// Do not escape attribute values or --text
    #[arg(long)]
    pub raw: bool,

    /// start-tag, end-tag, self-closing or normal
    #[arg(short, long)]
    pub mode: Option<String>,
}

/// Split `KEY=VALUE` at the first `=`. Without one, the attribute is bare.
fn split_attr(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (arg, None),
    }
}

fn render_mode(name: Option<&str>) -> RenderMode {
    let Some(name) = name else {
        return RenderMode::default();
    };
    if name.trim().parse::<RenderMode>().is_err() {
        warn_once("CLI", &format!("unknown render mode '{name}', rendering the full element"));
    }
    RenderMode::parse_or_default(name)
}

/// Point out an `id` the builder holds but will leave out of the markup.
fn warn_suppressed_id(builder: &TagBuilder, mode: RenderMode) {
    if mode == RenderMode::EndTag {
        return;
    }
    if let Some(id) = builder.attribute("id") {
        warn_once(
            "CLI",
            &format!("attribute '{}' on <{}> is not rendered", id.name, builder.tag_name()),
        );
    }
}

/// Build the tag described by `cli` and report the mode to render it in.
///
/// # Errors
///
/// Returns an error if the spec file cannot be loaded, no tag name is given,
/// or a tag name or attribute key is empty.
pub fn build(cli: &Cli) -> Result<(TagBuilder, RenderMode)> {
    let spec = match &cli.spec {
        Some(path) => TagSpec::load(path)?,
        None => TagSpec::default(),
    };

    let Some(tag) = cli.tag.as_deref().or(spec.tag.as_deref()) else {
        bail!("no tag name given (pass TAG or set \"tag\" in the spec file)");
    };
    let mut builder = TagBuilder::new(tag).context("cannot build tag")?;

    spec.apply(&mut builder).context("invalid attribute in spec file")?;

    if cli.raw {
        builder.set_encode_value(false);
    }

    for arg in &cli.attrs {
        let merged = match split_attr(arg) {
            (key, Some(value)) => builder.merge_attribute(key, value, cli.replace),
            (key, None) => builder.merge_bare_attribute(key, cli.replace),
        };
        merged.with_context(|| format!("invalid --attr '{arg}'"))?;
    }

    for class in &cli.classes {
        builder.add_css_class(class);
    }

    if let Some(text) = &cli.text {
        builder.set_inner_text(text);
    }
    if let Some(html) = &cli.html {
        builder.set_inner_html(html.as_str());
    }

    let mode = render_mode(cli.mode.as_deref().or(spec.mode.as_deref()));
    warn_suppressed_id(&builder, mode);
    Ok((builder, mode))
}

/// Build and render the tag described by `cli`.
///
/// # Errors
///
/// See [`build`].
pub fn run(cli: &Cli) -> Result<String> {
    let (builder, mode) = build(cli)?;
    Ok(builder.render(mode))
}
