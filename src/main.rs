//! CLI entry point for timeline-menu
//!
//! Stands in for the host: loads a site document and the stored widget
//! instances, then drives the widget's render, form and save operations.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

use timeline_menu::widget::{CATEGORY_KEY, MAX_DEPTH_KEY, TITLE_KEY, WIDGET_ID_BASE};
use timeline_menu::{
    FieldNames, InstanceRecord, InstanceStore, JsonInstanceStore, OutputConfig, RenderConfig,
    Result, Site, TextFormatter, TimelineWidget, TreeWalker, WidgetArgs,
    WidgetConfig, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Widget HTML, as the host page would receive it
    #[default]
    Html,
    /// Indented console preview
    Text,
    /// The walked tree as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "timeline-menu")]
#[command(about = "Render a timeline navigation widget from a category tree")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the widget for a site
    Render(RenderArgs),
    /// Print the settings form of a widget instance
    Form(FormArgs),
    /// Sanitize and store new settings for a widget instance
    Save(SaveArgs),
    /// Delete the stored settings of a widget instance
    Remove(InstanceArgs),
}

#[derive(Args, Debug)]
struct InstanceArgs {
    /// JSON file holding the stored widget instances
    #[arg(long = "instances", value_name = "FILE")]
    instances: PathBuf,

    /// Widget instance number
    #[arg(short = 'n', long = "number", default_value = "1")]
    number: u32,
}

#[derive(Args, Debug)]
struct SettingsArgs {
    /// Widget title
    #[arg(long = "title")]
    title: Option<String>,

    /// Name of the root category
    #[arg(long = "cat")]
    cat: Option<String>,

    /// Deepest category level shown (-1 for no limit)
    #[arg(short = 'L', long = "depth", allow_hyphen_values = true)]
    depth: Option<String>,
}

impl SettingsArgs {
    fn apply(&self, record: &mut InstanceRecord) {
        let fields = [
            (TITLE_KEY, &self.title),
            (CATEGORY_KEY, &self.cat),
            (MAX_DEPTH_KEY, &self.depth),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                record.insert(key.to_string(), value.clone());
            }
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Site document with categories and posts
    #[arg(long = "site", value_name = "FILE")]
    site: PathBuf,

    /// JSON file holding the stored widget instances
    #[arg(long = "instances", value_name = "FILE")]
    instances: Option<PathBuf>,

    /// Widget instance number
    #[arg(short = 'n', long = "number", default_value = "1")]
    number: u32,

    #[command(flatten)]
    settings: SettingsArgs,

    /// Posts listed under each category
    #[arg(long = "max-posts", default_value = "32")]
    max_posts: usize,

    /// Output format
    #[arg(long = "format", default_value = "html")]
    format: Format,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    #[arg(long = "before-widget", default_value = "<section class='widget timeline-widget'>")]
    before_widget: String,

    #[arg(long = "after-widget", default_value = "</section>")]
    after_widget: String,

    #[arg(long = "before-title", default_value = "<h2 class='widget-title'>")]
    before_title: String,

    #[arg(long = "after-title", default_value = "</h2>")]
    after_title: String,
}

#[derive(Args, Debug)]
struct FormArgs {
    /// Site document with categories and posts
    #[arg(long = "site", value_name = "FILE")]
    site: PathBuf,

    #[command(flatten)]
    instance: InstanceArgs,
}

#[derive(Args, Debug)]
struct SaveArgs {
    #[command(flatten)]
    instance: InstanceArgs,

    #[command(flatten)]
    settings: SettingsArgs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Render(args) => render(args),
        Command::Form(args) => form(args),
        Command::Save(args) => save(args),
        Command::Remove(args) => remove(args),
    };

    if let Err(e) = result {
        eprintln!("timeline-menu: {}", e);
        process::exit(1);
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let site = Site::load(&args.site)?;

    let mut instance = match &args.instances {
        Some(path) => JsonInstanceStore::open(path)?
            .load(args.number)?
            .unwrap_or_default(),
        None => InstanceRecord::new(),
    };
    args.settings.apply(&mut instance);
    let config = WidgetConfig::from_instance(&instance);

    let output_config = OutputConfig {
        use_color: args.format == Format::Text && should_use_color(args.color),
        render: RenderConfig {
            max_posts: args.max_posts,
            ..RenderConfig::default()
        },
    };
    let widget = TimelineWidget::new(&site).with_render_config(output_config.render.clone());

    match args.format {
        Format::Html => {
            let widget_args = WidgetArgs {
                before_widget: args.before_widget,
                after_widget: args.after_widget,
                before_title: args.before_title,
                after_title: args.after_title,
            };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            widget.render_config(&widget_args, &config, &mut out)?;
            writeln!(out)?;
        }
        Format::Json => {
            if widget.resolve_root(&config.root_category)?.is_none() {
                return report_missing_root(&config);
            }
            match widget.collect(&config)? {
                Some(tree) => print_json(&tree)?,
                None => println!("null"),
            }
        }
        Format::Text => {
            let Some(root) = widget.resolve_root(&config.root_category)? else {
                return report_missing_root(&config);
            };
            let choice = if output_config.use_color {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            };
            let mut formatter =
                TextFormatter::new(&site, output_config.render, StandardStream::stdout(choice));
            if let Some(walker_config) = config.walker_config() {
                TreeWalker::new(&site, walker_config).walk(&root, &mut formatter)?;
            }
            formatter.finish()?;
        }
    }
    Ok(())
}

/// Plain-text counterpart of the widget's inline error line.
fn report_missing_root(config: &WidgetConfig) -> Result<()> {
    println!(
        "Timeline root category is not set to a valid category, found {}",
        config.root_category
    );
    Ok(())
}

fn form(args: FormArgs) -> Result<()> {
    let site = Site::load(&args.site)?;
    let store = JsonInstanceStore::open(&args.instance.instances)?;
    let instance = store.load(args.instance.number)?.unwrap_or_default();

    let fields = FieldNames::new(WIDGET_ID_BASE, args.instance.number);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    TimelineWidget::new(&site).form(&instance, &fields, &mut out)
}

fn save(args: SaveArgs) -> Result<()> {
    let mut store = JsonInstanceStore::open(&args.instance.instances)?;
    let old = store.load(args.instance.number)?.unwrap_or_default();

    let mut submitted = InstanceRecord::new();
    args.settings.apply(&mut submitted);
    let saved = timeline_menu::widget::update(&submitted, &old);
    store.save(args.instance.number, &saved)?;

    println!("{}", serde_json::to_string_pretty(&saved)?);
    Ok(())
}

fn remove(args: InstanceArgs) -> Result<()> {
    let mut store = JsonInstanceStore::open(&args.instances)?;
    store.remove(args.number)
}
