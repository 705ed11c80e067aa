use clap::{CommandFactory, Parser};
use std::io::{self, BufRead};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use todotree_cli::cli::{Cli, Command, collect_overrides, expand_alias, split_command_line};
use todotree_core::config::{self, Config, Palette, merge_overrides, palette_for_theme};
use todotree_core::error::AppError;
use todotree_core::growth::Canopy;
use todotree_core::model::{Category, Task, format_date};
use todotree_core::notify::{Notifier, notifier_from_env};
use todotree_core::{SuggestionEngine, TaskStore};
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "TODOTREE_LOG";

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Task")]
    title: String,
    #[tabled(rename = "Due")]
    due: String,
}

fn task_json(task: &Task) -> serde_json::Value {
    serde_json::json!({
        "category": task.category.label(),
        "title": task.title,
        "due_date": format_date(task.due_date),
    })
}

fn render_table(tasks: &[Task]) -> String {
    let rows = tasks.iter().enumerate().map(|(index, task)| TaskRow {
        position: index + 1,
        category: task.category.to_string(),
        title: task.title.clone(),
        due: format_date(task.due_date),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Converts a 1-based position shown by `list` into a store index.
fn position_to_index(position: usize) -> Result<usize, AppError> {
    position
        .checked_sub(1)
        .ok_or_else(|| AppError::invalid_input("positions start at 1"))
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// One user's to-do list for the lifetime of the process.
struct Session {
    store: TaskStore,
    engine: SuggestionEngine,
    notifier: Box<dyn Notifier>,
    config: Config,
    palette: Palette,
}

impl Session {
    fn new(config: Config) -> Self {
        let palette = palette_for_theme(config.theme.as_deref());
        Self {
            store: TaskStore::new(),
            engine: SuggestionEngine::new(config.catalog()),
            notifier: notifier_from_env(),
            config,
            palette,
        }
    }

    /// Palette for one command. Overrides are layered on a copy of the loaded config.
    fn palette_for(&self, raw: &[String]) -> Result<Palette, AppError> {
        if raw.is_empty() {
            return Ok(self.palette.clone());
        }
        let overrides = collect_overrides(raw)?;
        let merged = merge_overrides(&self.config, &overrides);
        Ok(palette_for_theme(merged.theme.as_deref()))
    }

    fn run(&mut self, cli: Cli) -> Result<(), AppError> {
        let palette = self.palette_for(&cli.config_override)?;
        let json = cli.json;

        match cli.command {
            Command::Add {
                title,
                due,
                category,
            } => {
                let (Some(title), Some(due)) = (required(title), required(due)) else {
                    return Err(AppError::invalid_input("please fill all fields"));
                };
                let category = required(category)
                    .map(|raw| Category::parse(&raw))
                    .unwrap_or_default();

                let added = self.store.add(category, &title, &due);
                if let Some(warning) = added.warning.as_ref() {
                    eprintln!("WARNING: {warning}");
                }

                if json {
                    let mut payload = task_json(&added.task);
                    payload["warning"] = match added.warning.as_ref() {
                        Some(warning) => serde_json::Value::String(warning.code().to_string()),
                        None => serde_json::Value::Null,
                    };
                    println!("{payload}");
                } else {
                    println!("Added task: {}", added.task);
                    self.print_top();
                }
            }
            Command::Delete { position } => {
                let task = self.store.delete(position_to_index(position)?)?;
                if json {
                    println!("{}", task_json(&task));
                } else {
                    println!("Deleted task: {task}");
                    self.print_top();
                }
            }
            Command::Done { position } => {
                let task = self.store.complete(position_to_index(position)?)?;
                if let Err(err) = self.notifier.celebrate(&task) {
                    tracing::warn!(error = %err, "celebration notification failed");
                    eprintln!("WARNING: {err}");
                }

                if json {
                    let mut payload = task_json(&task);
                    payload["completed_count"] = self.store.completed_count().into();
                    println!("{payload}");
                } else {
                    println!("Great job! Task completed: {task}");
                    self.print_top();
                }
            }
            Command::Suggest { category } => {
                let category = required(category)
                    .map(|raw| Category::parse(&raw))
                    .unwrap_or_default();
                let suggestion = self.engine.pick(category.label());
                if json {
                    let payload = serde_json::json!({
                        "category": category.label(),
                        "suggestion": suggestion,
                    });
                    println!("{payload}");
                } else {
                    println!("Suggestion ({category}): {suggestion}");
                }
            }
            Command::List => self.print_list(&palette, json),
            Command::Top => {
                if json {
                    let payload = match self.store.top_suggestion() {
                        Some(task) => task_json(task),
                        None => serde_json::Value::Null,
                    };
                    println!("{payload}");
                } else {
                    self.print_top();
                }
            }
            Command::Tree => {
                let canopy = Canopy::for_completed(self.store.completed_count());
                if json {
                    let payload = serde_json::json!({
                        "leaves": canopy.leaves(),
                        "rows": canopy.rows(),
                    });
                    println!("{payload}");
                } else {
                    let leaf = palette.accentize("o");
                    let trunk = palette.mutedize("|");
                    println!("{}", canopy.render(&leaf, &trunk));
                    println!("Leaves: {}", canopy.leaves());
                }
            }
            Command::Categories => {
                let categories: Vec<&str> = self.engine.catalog().categories().collect();
                if json {
                    println!("{}", serde_json::json!(categories));
                } else {
                    for category in categories {
                        println!("{category}");
                    }
                }
            }
        }

        Ok(())
    }

    fn print_top(&self) {
        match self.store.top_suggestion() {
            Some(task) => println!("Suggested task: {task}"),
            None => println!("Suggested task: None"),
        }
    }

    fn print_list(&mut self, palette: &Palette, json: bool) {
        if json {
            let pending: Vec<_> = self.store.sorted_pending().iter().map(task_json).collect();
            let completed: Vec<_> = self.store.completed().iter().map(task_json).collect();
            let payload = serde_json::json!({
                "pending": pending,
                "completed": completed,
                "completed_count": self.store.completed_count(),
            });
            println!("{payload}");
            return;
        }

        print_section(palette, "Pending", self.store.sorted_pending());
        print_section(palette, "Completed", self.store.completed());
    }
}

fn print_section(palette: &Palette, heading: &str, tasks: &[Task]) {
    println!("{}", palette.accentize(heading));
    if tasks.is_empty() {
        println!("{}", palette.mutedize("(none)"));
    } else {
        println!("{}", render_table(tasks));
    }
}

fn load_config() -> Config {
    let loaded = config::load_config_with_fallback();
    if let Some(err) = loaded.error {
        eprintln!("WARNING: {err}");
    }
    loaded.config
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config.log_level()))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line.strip_prefix("error: ").unwrap_or(first_line);
    AppError::invalid_input(message)
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn run_interactive(session: &mut Session) -> Result<(), AppError> {
    let mut input = String::new();
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();

    loop {
        input.clear();
        let bytes = stdin_lock
            .read_line(&mut input)
            .map_err(|err| AppError::io(err.to_string()))?;

        if bytes == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        if line == "help" || line == "?" {
            print_help();
            continue;
        }

        let args = match split_command_line(line)
            .and_then(|args| expand_alias(args, &session.config.aliases))
        {
            Ok(args) => args,
            Err(err) => {
                eprintln!("ERROR: {err}");
                continue;
            }
        };

        if args.is_empty() {
            continue;
        }

        let argv = std::iter::once("todotree".to_string()).chain(args);
        let cli = match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(err) if !err.use_stderr() => {
                let _ = err.print();
                continue;
            }
            Err(err) => {
                eprintln!("ERROR: {}", normalize_parse_error(err));
                continue;
            }
        };

        if let Err(err) = session.run(cli) {
            eprintln!("ERROR: {err}");
        }
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args_os();
    args.next();
    if args.next().is_none() {
        let config = load_config();
        init_logging(&config);
        let mut session = Session::new(config);
        if let Err(err) = run_interactive(&mut session) {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            let _ = err.print();
            return;
        }
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    let config = load_config();
    init_logging(&config);
    let mut session = Session::new(config);
    if let Err(err) = session.run(cli) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
