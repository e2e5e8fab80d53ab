use clap::{Parser, ValueEnum};
use std::io::Write;
use stopwatch_cli::{CliContext, Command, Repl, commands, logging, parse_line};
use stopwatch_core::{ClockFormat, StopwatchConfig, StopwatchConfigExt, WidgetVariant};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    logging::init();
    let args = Args::parse();

    let config = args.apply(load_config());
    config.validate().map_err(|e| e.to_string())?;

    let mut ctx = CliContext::new(config);
    ctx.start_renderer();
    let mut repl = Repl::new();

    loop {
        let Some(line) = repl.readline().await? else {
            commands::exit(&mut ctx)?;
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "Terminal stopwatch")]
struct Args {
    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Quiet period that closes a batch of wait clicks, in milliseconds
    #[arg(long)]
    window_ms: Option<u64>,
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Show raw seconds instead of the clock
    #[arg(long)]
    counter: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    MinuteHours,
    Elapsed,
}

impl From<FormatArg> for ClockFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::MinuteHours => ClockFormat::MinuteHours,
            FormatArg::Elapsed => ClockFormat::Elapsed,
        }
    }
}

impl Args {
    fn apply(&self, mut config: StopwatchConfig) -> StopwatchConfig {
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(window_ms) = self.window_ms {
            config.double_click_window_ms = window_ms;
        }
        if let Some(format) = self.format {
            config.clock_format = format.into();
        }
        if self.counter {
            config.variant = WidgetVariant::Counter;
        }
        config
    }
}

fn load_config() -> StopwatchConfig {
    StopwatchConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default configuration");
        StopwatchConfig::default()
    })
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    match parse_line(line)? {
        Some(Command::StartStop) => commands::start_stop(ctx)?,
        Some(Command::Reset) => commands::reset(ctx)?,
        Some(Command::Wait { clicks }) => commands::wait(ctx, clicks)?,
        Some(Command::Click { role }) => commands::click_role(ctx, &role)?,
        Some(Command::Status) => commands::show_status(ctx),
        Some(Command::Config { save }) => commands::show_config(ctx, save)?,
        Some(Command::Exit) => {
            commands::exit(ctx)?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
