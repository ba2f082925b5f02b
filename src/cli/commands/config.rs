use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use std::env;
use std::process::Command;

/// `--editor`, then `$EDITOR` / `$VISUAL`, then the platform default.
fn pick_editor(requested: Option<&str>) -> String {
    if let Some(editor) = requested {
        return editor.to_string();
    }
    env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open the config file in an editor and check that guesswho can still
/// read it afterwards.
fn edit(editor: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        Config::default().write()?;
        info(format!("Created {} with default settings.", path.display()));
    }

    let editor = pick_editor(editor);
    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| AppError::Config(format!("cannot start editor '{}': {}", editor, e)))?;
    if !status.success() {
        return Err(AppError::Config(format!(
            "editor '{}' exited with {}",
            editor, status
        )));
    }

    let edited = Config::load()?;
    success(format!(
        "Configuration saved: {} (store: {})",
        path.display(),
        edited.store
    ));
    Ok(())
}

pub fn handle(print: bool, edit_config: bool, editor: Option<&str>, cfg: &Config) -> AppResult<()> {
    if print {
        header("Configuration");
        println!("📄 {}\n", Config::config_file().display());
        print!("{}", serde_yaml::to_string(cfg)?);
    }

    if edit_config {
        edit(editor)?;
    }

    if !print && !edit_config {
        info("Use --print to show the configuration or --edit to change it.");
    }
    Ok(())
}
