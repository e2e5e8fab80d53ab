use std::io::Write;

use stopwatch_core::{Control, StopwatchConfigExt, StopwatchView, WidgetVariant};

use crate::CliContext;

/// One-line rendering of a view for the terminal
pub fn render(view: &StopwatchView, variant: WidgetVariant) -> String {
    match variant {
        WidgetVariant::Clock => format!("[{}] {}", view.button_label, view.display),
        WidgetVariant::Counter => {
            let state = if view.running { "running" } else { "stopped" };
            format!("{}s ({})", view.elapsed_secs, state)
        }
    }
}

fn press(ctx: &CliContext, control: Control) -> Result<(), String> {
    ctx.stopwatch.click(control).map_err(|e| e.to_string())
}

pub fn start_stop(ctx: &CliContext) -> Result<(), String> {
    press(ctx, Control::StartStop)
}

pub fn reset(ctx: &CliContext) -> Result<(), String> {
    press(ctx, Control::Reset)
}

/// Send `clicks` wait presses back to back so they land in one batch
pub fn wait(ctx: &CliContext, clicks: u32) -> Result<(), String> {
    for _ in 0..clicks {
        press(ctx, Control::Wait)?;
    }
    Ok(())
}

pub fn click_role(ctx: &CliContext, role: &str) -> Result<(), String> {
    ctx.stopwatch.click_role(role).map_err(|e| e.to_string())
}

pub fn show_status(ctx: &CliContext) {
    let view = ctx.stopwatch.view();
    println!("{}", render(&view, ctx.variant()));
    println!("running: {}, elapsed: {}s", view.running, view.elapsed_secs);
}

pub fn show_config(ctx: &CliContext, save: bool) -> Result<(), String> {
    let config = &ctx.config;
    println!("tick interval: {}ms", config.tick_interval_ms);
    println!("double click window: {}ms", config.double_click_window_ms);
    println!("clock format: {:?}", config.clock_format);
    println!("variant: {:?}", config.variant);

    if save {
        config.save().map_err(|e| e.to_string())?;
        println!("configuration saved");
    }
    Ok(())
}

pub fn exit(ctx: &mut CliContext) -> Result<(), String> {
    ctx.shutdown();
    write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}
