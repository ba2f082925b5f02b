#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use guesswho::core::capture::{CapturedImage, encode_data_uri};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Smallest byte string the format sniffer recognises as a PNG.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\x06\0\0\0";

pub fn gw() -> Command {
    cargo_bin_cmd!("guesswho")
}

/// Create a unique store path inside the system temp dir and remove any
/// leftover store or audit log
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_guesswho_boards.json", name));
    fs::remove_file(&path).ok();
    fs::remove_file(path.with_extension("log")).ok();
    path.to_string_lossy().to_string()
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_guesswho_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write a tiny PNG into `dir` and return its path
pub fn write_png(dir: &PathBuf, file: &str) -> String {
    let path = dir.join(file);
    fs::write(&path, PNG_BYTES).expect("write png");
    path.to_string_lossy().to_string()
}

pub fn png_capture() -> CapturedImage {
    encode_data_uri(PNG_BYTES).expect("png is recognised")
}

/// Initialize a store and create one board with the given names
pub fn init_store_with_board(store: &str, name: &str, title: &str, names: &[&str]) {
    gw().args(["--store", store, "--test", "init"])
        .assert()
        .success();

    let dir = temp_dir(name);
    let mut args: Vec<String> = vec![
        "--store".into(),
        store.into(),
        "create".into(),
        "--title".into(),
        title.into(),
    ];
    for (i, n) in names.iter().enumerate() {
        let png = write_png(&dir, &format!("p{}.png", i));
        args.push("--char".into());
        args.push(format!("{}={}", png, n));
    }

    gw().args(&args).assert().success();
}

/// Id of the first board stored in `store`
pub fn first_board_id(store: &str) -> String {
    let content = fs::read_to_string(store).expect("read store");
    let map: serde_json::Value = serde_json::from_str(&content).expect("store is json");
    let boards: serde_json::Value =
        serde_json::from_str(map["guess-who-boards"].as_str().expect("namespace key"))
            .expect("boards are json");
    boards[0]["id"].as_str().expect("board id").to_string()
}
