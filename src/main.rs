mod dot;
mod field;
mod graphics;
mod math;
mod state;
mod theme;
mod widget;

use clap::Parser;
use druid::{
    AppDelegate, AppLauncher, Command, DelegateCtx, Env, Handled, LocalizedString, PlatformError,
    Target, WindowDesc,
};
use tracing_subscriber::EnvFilter;

use crate::state::AppState;
use crate::theme::FilePreferences;
use crate::widget::{DotFieldWidget, PRINT};

/// An animated dot-grid background with a persisted light/dark theme.
///
/// Keys: `t` toggles the theme, `p` requests a print, `d` toggles the
/// debug overlay, `q` quits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Distance between dots, in pixels (smaller = more dots)
    #[arg(long, default_value_t = field::SPACING, value_parser = positive_f64)]
    spacing: f64,
    /// Radius of the pointer effect around the mouse
    #[arg(long, default_value_t = dot::MOUSE_RADIUS, value_parser = positive_f64)]
    mouse_radius: f64,
    /// Initial window width
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Initial window height
    #[arg(long, default_value_t = 600.0)]
    height: f64,
}

fn positive_f64(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(String::from("must be greater than zero"))
    }
}

struct Delegate;

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        _ctx: &mut DelegateCtx,
        _target: Target,
        cmd: &Command,
        _data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        if cmd.is(PRINT) {
            // The original hands this to the host's native print dialog;
            // treated as an opaque external call.
            tracing::info!("print requested");
            return Handled::Yes;
        }
        Handled::No
    }
}

/// Main function
pub fn main() -> Result<(), PlatformError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let main_window = WindowDesc::new(DotFieldWidget::new(
        args.spacing,
        args.mouse_radius,
        FilePreferences::standard(),
    ))
    .title(LocalizedString::new("Dot Field"))
    .window_size((args.width, args.height));

    let initial_state = AppState::new();

    AppLauncher::with_window(main_window)
        .delegate(Delegate)
        .launch(initial_state)?;

    Ok(())
}
