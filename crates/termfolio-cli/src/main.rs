use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use clap::Parser;
use colored::{Color, Colorize};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use termfolio_core::auth::AuthService;
use termfolio_core::command::all_commands;
use termfolio_core::output::{Block, CommandResult, OutputKind};
use termfolio_core::portfolio::BANNER;
use termfolio_core::project::ProjectStore;
use termfolio_core::theme::Theme;
use termfolio_core::vfs::EntryKind;
use termfolio_core::{Interpreter, SessionContext};
use termfolio_infrastructure::JsonStateDir;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "Interactive portfolio terminal", long_about = None)]
struct Cli {
    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,

    /// Start with this theme instead of the saved one
    #[arg(long)]
    theme: Option<String>,

    /// Directory for persisted state (defaults to the per-user config dir)
    #[arg(long)]
    state_dir: Option<std::path::PathBuf>,

    /// Keep all state in memory (nothing is read or written to disk)
    #[arg(long)]
    ephemeral: bool,
}

/// CLI helper for rustyline that completes, highlights, and hints the
/// registered command names.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: all_commands().iter().map(|c| c.name.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        // complete the command word only, arguments are free-form
        if line.is_empty() || line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let command = line.split_whitespace().next().unwrap_or("");
        if self.commands.iter().any(|c| c == command) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// The accent color each theme renders headings and the prompt with.
fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Cyan,
        Theme::Light => Color::Blue,
        Theme::Retro => Color::Green,
        Theme::Synthwave => Color::BrightMagenta,
        Theme::Hacker => Color::BrightGreen,
        Theme::Ocean => Color::BrightBlue,
        Theme::Dracula => Color::Magenta,
        Theme::Nord => Color::BrightCyan,
    }
}

fn render_block(block: &Block, kind: OutputKind, theme: Theme) {
    let color = accent(theme);
    match block {
        Block::Heading(text) => println!("{}", text.color(color).bold()),
        Block::Text(text) => {
            for line in text.lines() {
                match kind {
                    OutputKind::Error => println!("{}", line.red()),
                    OutputKind::Success => println!("{}", line.green()),
                    OutputKind::Warning => println!("{}", line.yellow()),
                    OutputKind::Info => println!("{}", line.cyan()),
                    OutputKind::System => println!("{}", line.bright_black()),
                    _ => println!("{line}"),
                }
            }
        }
        Block::Fields(pairs) => {
            for (label, value) in pairs {
                println!("{} {value}", format!("{label}:").bright_black());
            }
        }
        Block::Items(items) => {
            for item in items {
                println!("  {item}");
            }
        }
        Block::Tags(tags) => println!("[{}]", tags.join("] [").color(color)),
        Block::Link { label, url } => {
            println!("{} {}", label.color(color).underline(), url.bright_black())
        }
        Block::Image { alt, src } => println!("{} {}", format!("[{alt}]").color(color), src),
        Block::Listing(entries) => {
            let rendered: Vec<String> = entries
                .iter()
                .map(|e| match e.kind {
                    EntryKind::Dir => format!("{}/", e.name).color(color).bold().to_string(),
                    EntryKind::Link => e.name.green().to_string(),
                    EntryKind::File => e.name.clone(),
                })
                .collect();
            println!("{}", rendered.join("  "));
        }
        Block::Preformatted(text) => println!("{}", text.color(color)),
    }
}

fn render(result: &CommandResult, theme: Theme) {
    if result.is_clear() {
        // wipe the screen and home the cursor
        print!("\x1b[2J\x1b[1;1H");
        return;
    }
    for block in &result.output.blocks {
        render_block(block, result.output.kind, theme);
    }
}

fn prompt(term: &Interpreter) -> String {
    if let Some(flow_prompt) = term.flow_prompt() {
        return format!("{flow_prompt} ");
    }
    let user = if term.is_admin() { "admin" } else { "guest" };
    format!("{user}@portfolio:{}$ ", term.current_path())
}

fn build_context(cli: &Cli) -> SessionContext {
    if cli.ephemeral {
        return SessionContext::in_memory();
    }

    let state = match &cli.state_dir {
        Some(dir) => Ok(JsonStateDir::new(dir)),
        None => JsonStateDir::default_location(),
    };
    match state {
        Ok(state) => {
            let theme_cache = state.theme_cache();
            let theme = match termfolio_core::theme::ThemeCache::load(&theme_cache) {
                Ok(Some(theme)) => theme,
                Ok(None) => Theme::default(),
                Err(err) => {
                    tracing::warn!(error = %err, "theme cache unreadable, using default");
                    Theme::default()
                }
            };
            SessionContext::new(
                ProjectStore::new(Box::new(state.project_cache())),
                AuthService::new(Box::new(state.session_cache())),
                theme,
                Box::new(theme_cache),
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, "state directory unavailable, running in memory");
            SessionContext::in_memory()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut ctx = build_context(&cli);
    if let Some(name) = &cli.theme {
        match name.parse::<Theme>() {
            Ok(theme) => ctx.theme = theme,
            Err(_) => eprintln!(
                "{}",
                format!(
                    "Unknown theme '{name}'. Available themes: {}",
                    termfolio_core::theme::available_themes()
                )
                .yellow()
            ),
        }
    }

    let mut term = Interpreter::new(ctx);

    if !cli.no_banner {
        println!("{}", BANNER.color(accent(term.theme())));
    }

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    loop {
        match rl.readline(&prompt(&term)) {
            Ok(line) => {
                if line.trim().is_empty() && !term.in_flow() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                let results = term.handle_line(&line);
                let theme = term.theme();
                let mut closing = false;
                for result in &results {
                    render(result, theme);
                    closing |= result.close_terminal;
                }
                if closing {
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                if term.in_flow() {
                    // abort the flow the same way typing "cancel" would
                    for result in term.handle_line("cancel") {
                        render(&result, term.theme());
                    }
                } else {
                    println!("{}", "CTRL-C detected. Type 'exit' to quit.".yellow());
                }
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "Closing terminal...".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}
