use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;

mod agent_mode;

const DATA_DIR_ENV: &str = "ECOTRACK_DATA_DIR";
const EXPORT_DIR_ENV: &str = "ECOTRACK_EXPORT_DIR";

const USAGE: &str = "usage: ecotrack [--data-dir <dir>] [--export-dir <dir>]";

/// Where records are stored and reports are written. Command-line flags win
/// over environment variables, which win over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    data_dir: PathBuf,
    export_dir: PathBuf,
}

impl Settings {
    fn from_args<I>(args: I, env: impl Fn(&str) -> Option<String>) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut data_dir = env(DATA_DIR_ENV).map(PathBuf::from);
        let mut export_dir = env(EXPORT_DIR_ENV).map(PathBuf::from);

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            let slot = match flag.as_str() {
                "--data-dir" => &mut data_dir,
                "--export-dir" => &mut export_dir,
                _ => return Err(format!("unknown argument {flag:?}\n{USAGE}")),
            };
            let value = match inline.or_else(|| args.next()) {
                Some(value) if !value.is_empty() => value,
                _ => return Err(format!("{flag} needs a directory\n{USAGE}")),
            };
            *slot = Some(PathBuf::from(value));
        }

        Ok(Self {
            data_dir: data_dir.unwrap_or_else(|| PathBuf::from("ecotrack-data")),
            export_dir: export_dir.unwrap_or_else(|| PathBuf::from("ecotrack-exports")),
        })
    }
}

/// Headless tracker: no window, no renderer. Logs go to stderr so stdout
/// carries only protocol lines.
fn build_app(settings: &Settings) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(footprint::FootprintPlugin)
        .add_plugins(save::SavePlugin {
            data_dir: settings.data_dir.clone(),
        })
        .add_plugins(report::ReportPlugin {
            export_dir: settings.export_dir.clone(),
        });
    app
}

fn main() {
    let settings = match Settings::from_args(std::env::args().skip(1), |key| {
        std::env::var(key).ok()
    }) {
        Ok(settings) => settings,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let mut app = build_app(&settings);
    agent_mode::run_agent_mode(&mut app);
}
