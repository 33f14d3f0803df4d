use anyhow::{anyhow, bail, Context};
use group_launcher::launch::launch_entry;
use group_launcher::messages::{self, EnglishCatalog, Translate};
use group_launcher::settings::{Settings, SETTINGS_FILE};
use group_launcher::toast::{ToastLog, ToastSink};
use group_launcher::{logging, FileStore, StateGateway, STORAGE_KEY};

#[derive(Debug, PartialEq)]
enum Command {
    List,
    Launch(String),
    Activate(String),
    Where,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<(String, Command)> {
    let mut settings_path = SETTINGS_FILE.to_string();
    let mut rest = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--settings" {
            settings_path = args
                .next()
                .ok_or_else(|| anyhow!("--settings needs a path"))?;
        } else {
            rest.push(arg);
        }
    }
    let mut rest = rest.into_iter();
    let command = match rest.next().as_deref() {
        None | Some("list") => Command::List,
        Some("launch") => {
            Command::Launch(rest.next().ok_or_else(|| anyhow!("launch needs an app id"))?)
        }
        Some("activate") => {
            Command::Activate(rest.next().ok_or_else(|| anyhow!("activate needs a group id"))?)
        }
        Some("where") => Command::Where,
        Some(other) => bail!("unknown command '{other}'"),
    };
    Ok((settings_path, command))
}

/// Shows a toast for a failed user action and passes the error on.
fn toast_failure<T>(
    toasts: &dyn ToastSink,
    key: &str,
    params: &[(&str, &str)],
    result: anyhow::Result<T>,
) -> anyhow::Result<T> {
    result.map_err(|e| {
        let error = format!("{e:#}");
        let mut params = params.to_vec();
        params.push(("error", error.as_str()));
        toasts.show_toast(&EnglishCatalog.t(key, &params));
        e
    })
}

fn main() -> anyhow::Result<()> {
    let (settings_path, command) = parse_args(std::env::args().skip(1))?;
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("loading {settings_path}"))?;
    logging::init(settings.debug_logging, settings.log_file());
    let toasts = ToastLog::new(settings.toast_log_file());

    let gateway = StateGateway::new(FileStore::new(settings.data_dir()));
    let mut state = gateway.load_state();

    match command {
        Command::List => {
            for group in &state.groups {
                let marker = if group.id == state.active_group_id { "*" } else { " " };
                println!("{marker} {} [{}]", group.name, group.id);
                for app in &group.apps {
                    match &app.args {
                        Some(args) => println!("    {} [{}] {} {}", app.name, app.id, app.path, args),
                        None => println!("    {} [{}] {}", app.name, app.id, app.path),
                    }
                }
            }
        }
        Command::Launch(app_id) => {
            let (_, app) = state
                .find_app(&app_id)
                .ok_or_else(|| anyhow!("no app with id '{app_id}'"))?;
            toast_failure(
                &toasts,
                messages::LAUNCH_FAILED,
                &[("name", app.name.as_str())],
                launch_entry(app),
            )?;
        }
        Command::Activate(group_id) => {
            if state.group(&group_id).is_none() {
                bail!("no group with id '{group_id}'");
            }
            state.active_group_id = group_id;
            toast_failure(&toasts, messages::SAVE_FAILED, &[], gateway.save_state(&state))?;
        }
        Command::Where => {
            let path = gateway
                .store()
                .path_for(STORAGE_KEY)
                .ok_or_else(|| anyhow!("invalid storage key"))?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn list_is_the_default_command() {
        let (path, command) = parse_args(args(&[])).unwrap();
        assert_eq!(path, SETTINGS_FILE);
        assert_eq!(command, Command::List);
    }

    #[test]
    fn settings_flag_may_follow_the_command() {
        let (path, command) = parse_args(args(&["launch", "ed", "--settings", "alt.json"])).unwrap();
        assert_eq!(path, "alt.json");
        assert_eq!(command, Command::Launch("ed".into()));
    }

    #[test]
    fn settings_flag_needs_a_value() {
        let err = parse_args(args(&["list", "--settings"])).unwrap_err();
        assert!(err.to_string().contains("--settings needs a path"));
    }

    #[test]
    fn unknown_command_is_an_error() {
        let err = parse_args(args(&["frobnicate"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown command 'frobnicate'");
    }

    #[test]
    fn commands_need_their_id() {
        assert!(parse_args(args(&["launch"])).is_err());
        assert!(parse_args(args(&["activate"])).is_err());
        assert_eq!(
            parse_args(args(&["activate", "work"])).unwrap().1,
            Command::Activate("work".into())
        );
    }

    #[derive(Default)]
    struct Recorded(RefCell<Vec<String>>);

    impl ToastSink for Recorded {
        fn show_toast(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn failures_are_toasted_and_returned() {
        let toasts = Recorded::default();
        let result: anyhow::Result<()> = Err(anyhow!("not found"));
        let err = toast_failure(&toasts, messages::LAUNCH_FAILED, &[("name", "Editor")], result)
            .unwrap_err();
        assert_eq!(err.to_string(), "not found");
        assert_eq!(*toasts.0.borrow(), vec!["Failed to launch Editor: not found"]);

        toast_failure(&toasts, messages::SAVE_FAILED, &[], Ok(())).unwrap();
        assert_eq!(toasts.0.borrow().len(), 1);
    }

    #[test]
    fn toast_log_receives_failures() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            toast_log_file: dir.path().join("toast.log").display().to_string(),
            ..Settings::default()
        };
        let toasts = ToastLog::new(settings.toast_log_file());
        let result: anyhow::Result<()> = Err(anyhow!("disk full"));
        let _ = toast_failure(&toasts, messages::SAVE_FAILED, &[], result);

        let contents = std::fs::read_to_string(dir.path().join("toast.log")).unwrap();
        assert!(contents.ends_with(" - Failed to save launcher state: disk full\n"));
    }
}
