//! `redmap formats` – list export formats.

use redmap_core::export::ExportFormat;

pub fn run_formats() {
    println!("{:<11} {:<15} {:<17} {}", "ID", "FILENAME", "MIME TYPE", "DESCRIPTION");
    for f in ExportFormat::ALL {
        println!(
            "{:<11} {:<15} {:<17} {}",
            f.id(),
            f.filename(),
            f.mime_type(),
            f.description()
        );
    }
}
