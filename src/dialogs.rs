use std::path::PathBuf;

use rfd::FileDialog;

pub fn choose_open_path() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Open")
        .add_filter("PNG Images", &["png"])
        .pick_file()
}

pub fn choose_save_path() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save")
        .add_filter("PNG Images", &["png"])
        .set_file_name("pixel-art.png")
        .save_file()
}
