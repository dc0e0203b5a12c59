//! Command-line interface for lesson
//! Renders JSON-authored study material to the terminal, HTML, JSON or a tag dump.
//!
//! Usage:
//!   lesson render `<path>` [--format `<format>`] [--topic `<id>`] [--hint `<hint>`] [--lang `<code>`]
//!   lesson topics `<path>`                  - List the topics of a document
//!   lesson classify `<title>`               - Print the content type of a title
//!   lesson highlight `<path>`               - Show a code file through the code display
//!   lesson lang [`<code>`]                  - Print or set the stored language
//!   lesson formats                          - List output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use lesson::lesson::classify::{classify, ContentType};
use lesson::lesson::config::{LessonConfig, Loader};
use lesson::lesson::document;
use lesson::lesson::formats::{FormatRegistry, HtmlFormatter, TermFormatter};
use lesson::lesson::i18n::{Language, Localization, Translations};
use lesson::lesson::logging;
use lesson::lesson::prefs::{FileStore, Preferences};
use lesson::lesson::render::{Block, RenderOptions, Renderer};
use std::fmt::Display;
use std::io::IsTerminal;

const USER_CONFIG: &str = "lesson.toml";

fn main() {
    logging::init();

    let matches = Command::new("lesson")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render JSON study material")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file (default: ./lesson.toml when present)"),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .help("Preference store file (language, last active topic)"),
        )
        .subcommand(
            Command::new("render")
                .about("Render one topic of a document")
                .arg(Arg::new("path").help("Topic document (JSON)").required(true))
                .arg(format_arg())
                .arg(
                    Arg::new("topic")
                        .long("topic")
                        .short('t')
                        .help("Topic id (default: last viewed topic, else the first)"),
                )
                .arg(
                    Arg::new("hint")
                        .long("hint")
                        .help("Content type inherited by the root (default: default)"),
                )
                .arg(lang_arg())
                .arg(
                    Arg::new("fragment")
                        .long("fragment")
                        .help("Emit an HTML fragment instead of a full page")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("topics")
                .about("List the topics of a document")
                .arg(Arg::new("path").help("Topic document (JSON)").required(true))
                .arg(lang_arg()),
        )
        .subcommand(
            Command::new("classify")
                .about("Print the content type inferred from a title")
                .arg(Arg::new("title").required(true)),
        )
        .subcommand(
            Command::new("highlight")
                .about("Re-indent and highlight a code file")
                .arg(Arg::new("path").help("Source file").required(true))
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("lang")
                .about("Print or set the stored language")
                .arg(Arg::new("code").help("Language code (en, fr)")),
        )
        .subcommand(Command::new("formats").about("List output formats"))
        .get_matches();

    let config = load_config(&matches);

    match matches.subcommand() {
        Some(("render", sub)) => handle_render_command(sub, &config),
        Some(("topics", sub)) => handle_topics_command(sub, &config),
        Some(("classify", sub)) => handle_classify_command(sub),
        Some(("highlight", sub)) => handle_highlight_command(sub, &config),
        Some(("lang", sub)) => handle_lang_command(sub, &config),
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!("subcommand is required"),
    }
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format: tag, html, json, term (default from config)")
}

fn lang_arg() -> Arg {
    Arg::new("lang")
        .long("lang")
        .short('l')
        .help("Language for this run, without changing the stored one")
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_config(matches: &ArgMatches) -> LessonConfig {
    let mut loader = Loader::new();
    loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader.with_optional_file(USER_CONFIG),
    };
    if let Some(store) = matches.get_one::<String>("store") {
        loader = loader
            .set_override("store.path", store.as_str())
            .unwrap_or_else(|e| fail(e));
    }
    loader.build().unwrap_or_else(|e| fail(e))
}

fn open_localization(config: &LessonConfig) -> Localization<FileStore> {
    let store = FileStore::open(&config.store.path).unwrap_or_else(|e| fail(e));
    Localization::with_default_language(store, config.i18n.default_language)
}

/// `--lang` if given, else the stored language
fn run_language(matches: &ArgMatches, l10n: &Localization<FileStore>) -> Language {
    match matches.get_one::<String>("lang") {
        Some(code) => Language::from_code(code)
            .unwrap_or_else(|| fail(format!("unknown language '{}'", code))),
        None => l10n.language(),
    }
}

fn build_registry(
    config: &LessonConfig,
    translations: &Translations,
    language: Language,
    title: Option<&str>,
    standalone: bool,
) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(HtmlFormatter {
        standalone: standalone && config.output.standalone_html,
        copy_label: translations.lookup(language, "content.copy", None),
        title: title
            .map(str::to_string)
            .unwrap_or_else(|| translations.lookup(language, "app.title", None)),
        lang: language.code().to_string(),
    });
    registry.register(TermFormatter {
        color: std::io::stdout().is_terminal(),
    });
    registry
}

fn print_block(registry: &FormatRegistry, block: &Block, format: &str) {
    let output = registry.serialize(block, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for name in registry.list_formats() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });
    print!("{}", output);
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches, config: &LessonConfig) {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&config.output.format);
    let hint = match matches.get_one::<String>("hint") {
        Some(hint) => hint.parse::<ContentType>().unwrap_or_else(|e| fail(e)),
        None => ContentType::Default,
    };

    let l10n = open_localization(config);
    let language = run_language(matches, &l10n);
    let translations = l10n.translations().clone();
    let mut prefs = Preferences::new(l10n.into_store());
    let doc = document::load_localized(path, language).unwrap_or_else(|e| fail(e));

    let topic = match matches.get_one::<String>("topic") {
        Some(id) => doc.topic(id).unwrap_or_else(|e| fail(e)),
        None => {
            let id = prefs
                .active_tab_or_first(&doc.page, &doc.topic_ids())
                .unwrap_or_else(|| fail(format!("no topics in {}", path)));
            doc.topic(&id).unwrap_or_else(|e| fail(e))
        }
    };

    let options = RenderOptions {
        code_examples_title: translations.lookup(
            language,
            "content.codeExamples",
            Some(config.render.code_examples_title.as_str()),
        ),
    };
    let block = Renderer::with_options(options).render(&topic.content, hint);
    if block.is_empty() {
        eprintln!("{}", translations.lookup(language, "content.empty", None));
    }

    let title = topic.title.as_deref().or(doc.title.as_deref());
    let registry = build_registry(
        config,
        &translations,
        language,
        title,
        !matches.get_flag("fragment"),
    );
    print_block(&registry, &block, format);

    if let Err(e) = prefs.set_active_tab(&doc.page, &topic.id) {
        tracing::warn!(error = %e, "could not store active topic");
    }
}

/// Handle the topics command
fn handle_topics_command(matches: &ArgMatches, config: &LessonConfig) {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");

    let l10n = open_localization(config);
    let language = run_language(matches, &l10n);
    let topics_label = l10n.t("app.topics", None);
    let doc = document::load_localized(path, language).unwrap_or_else(|e| fail(e));
    let prefs = Preferences::new(l10n.into_store());
    let active = prefs.active_tab_or_first(&doc.page, &doc.topic_ids());

    if let Some(title) = &doc.title {
        println!("{}", title);
    }
    if !doc.tags.is_empty() {
        println!("[{}]", doc.tags.join(", "));
    }
    println!("{}:\n", topics_label);
    for topic in &doc.topics {
        let marker = if active.as_deref() == Some(topic.id.as_str()) {
            '*'
        } else {
            ' '
        };
        match &topic.title {
            Some(title) => println!("{} {}  {}", marker, topic.id, title),
            None => println!("{} {}", marker, topic.id),
        }
    }
}

/// Handle the classify command
fn handle_classify_command(matches: &ArgMatches) {
    let title = matches
        .get_one::<String>("title")
        .expect("title is required");
    println!("{}", classify(title));
}

/// Handle the highlight command
fn handle_highlight_command(matches: &ArgMatches, config: &LessonConfig) {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&config.output.format);
    let source = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("cannot read {}: {}", path, e)));

    let l10n = open_localization(config);
    let language = l10n.language();
    let block = Block::code(Some(path.clone()), &source);
    let registry = build_registry(
        config,
        l10n.translations(),
        language,
        Some(path.as_str()),
        false,
    );
    print_block(&registry, &block, format);
}

/// Handle the lang command
fn handle_lang_command(matches: &ArgMatches, config: &LessonConfig) {
    let mut l10n = open_localization(config);

    if let Some(code) = matches.get_one::<String>("code") {
        let language = Language::from_code(code)
            .unwrap_or_else(|| fail(format!("unknown language '{}'", code)));
        l10n.set_language(language).unwrap_or_else(|e| fail(e));
        println!(
            "{} {}",
            l10n.t("language.changed", None),
            language.native_name()
        );
        return;
    }

    let current = l10n.language();
    println!(
        "{}: {} ({})",
        l10n.t("language.current", None),
        current.code(),
        current.native_name()
    );
    for language in Language::ALL {
        let marker = if language == current { '*' } else { ' ' };
        println!("{} {}  {}", marker, language.code(), language.native_name());
    }
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for (name, description) in registry.describe() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
