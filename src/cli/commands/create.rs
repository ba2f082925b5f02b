use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::builder::BuilderSession;
use crate::core::capture::capture_image;
use crate::core::export::write_board;
use crate::core::ids::IdGenerator;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// `IMAGE[=NAME]`. An argument naming an existing file is taken whole, so
/// pictures with `=` in their file name still work; otherwise the last `=`
/// starts the name.
fn parse_char(spec: &str) -> (PathBuf, Option<&str>) {
    let whole = expand_tilde(spec);
    if whole.is_file() {
        return (whole, None);
    }
    match spec.rsplit_once('=') {
        Some((path, name)) => (expand_tilde(path), Some(name)),
        None => (whole, None),
    }
}

/// `SLOT:ZOOM,X,Y` with a 1-based slot.
fn parse_crop(spec: &str) -> AppResult<(usize, f64, f64, f64)> {
    let bad = || {
        AppError::InvalidArgument(format!(
            "invalid crop '{}', expected SLOT:ZOOM,X,Y (e.g. 2:1.5,40,20)",
            spec
        ))
    };

    let (slot, values) = spec.split_once(':').ok_or_else(bad)?;
    let slot: usize = slot.trim().parse().map_err(|_| bad())?;
    if slot == 0 {
        return Err(bad());
    }

    let nums: Vec<f64> = values
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| bad())?;

    match nums.as_slice() {
        [zoom, x, y] => Ok((slot - 1, *zoom, *x, *y)),
        _ => Err(bad()),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Create {
        title,
        chars,
        crops,
        randomize,
        save,
        download,
        dir,
        force,
    } = cmd
    {
        let mut builder = BuilderSession::new(cfg.builder_settings(), IdGenerator::system());
        builder.set_title(title.as_deref().unwrap_or(""));

        //
        // 1. Capture pictures, one slot each
        //
        for spec in chars {
            let (path, name) = parse_char(spec);
            let image = capture_image(&path, cfg.max_image_bytes)?;
            let slot = builder.add(image)?;
            if let Some(name) = name {
                builder.rename(slot, name)?;
            }
        }

        //
        // 2. Framing edits
        //
        for spec in crops {
            let (slot, zoom, x, y) = parse_crop(spec)?;
            let mut editor = builder.open_editor(slot)?;
            editor.set_zoom(zoom);
            editor.set_x(x);
            editor.set_y(y);
            let slot = editor.slot();
            let crop = editor.commit(&mut builder)?;
            info(format!(
                "Slot {}: zoom {} · {}",
                slot + 1,
                crop.zoom,
                crop.position_label()
            ));
        }

        let count = builder.characters().len();
        if count > 0 {
            info(format!("{} character(s) ready.", count));
        }

        if *randomize {
            builder.randomize(&mut rand::rng());
            info("Characters shuffled.");
        }

        //
        // 3. Save and/or download
        //
        let target = dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.export_path());

        if *save || !*download {
            let board = builder.build("saving")?;

            // the file goes first: a refused overwrite must not leave the board saved
            if *download {
                let path = write_board(&board, &target, *force)?;
                success(format!("JSON file downloaded: {}", path.display()));
            }

            let mut store = open_store(cfg);
            store.save(&board)?;
            success(format!("Board saved to this store: {}", board.id));
        } else {
            let (board, path) = builder.download(&target, *force)?;
            success(format!(
                "JSON file downloaded: {} ({})",
                path.display(),
                board.id
            ));
        }
    }

    Ok(())
}

