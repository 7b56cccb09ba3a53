// SPDX-License-Identifier: MPL-2.0
use iced_scan::config::{self, Config};
use iced_scan::i18n::fluent::I18n;
use iced_scan::media;
use iced_scan::scanner::{decode, Session};
use std::path::Path;
use tempfile::tempdir;

/// Writes a QR symbol for `text` as a PNG at `path`.
fn write_qr_png(text: &str, path: &Path) {
    let code = qrcode::QrCode::new(text.as_bytes()).expect("encode qr");
    let modules = code.width();
    let quiet = 4;
    let scale = 4;
    let edge = (modules + 2 * quiet) * scale;
    let mut pixels = vec![255u8; edge * edge];

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color == qrcode::Color::Dark {
            let mx = i % modules;
            let my = i / modules;
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = (quiet + mx) * scale + dx;
                    let py = (quiet + my) * scale + dy;
                    pixels[py * edge + px] = 0;
                }
            }
        }
    }

    let img = image_rs::GrayImage::from_raw(edge as u32, edge as u32, pixels).expect("image");
    img.save(path).expect("write png");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        camera_index: Some(0),
        mirror_preview: Some(true),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        camera_index: Some(0),
        mirror_preview: Some(true),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn upload_path_commits_result_and_preview_from_the_same_file() {
    let dir = tempdir().expect("temp dir");
    let qr_path = dir.path().join("hello.png");
    write_qr_png("HELLO", &qr_path);

    let mut session = Session::new();
    let ticket = session.begin_upload();

    // The two halves of the attempt, completing in file-read-first order.
    let preview = media::load_preview(&qr_path).expect("preview");
    session.preview_ready(ticket, preview);
    let text = decode::scan_image_file(&qr_path).expect("decode");
    assert!(session.upload_decoded(ticket, text));

    assert_eq!(session.result(), Some("HELLO"));
    assert!(session.preview().is_some());
    assert!(!session.is_scanning());
}

#[test]
fn upload_of_symbol_free_image_returns_session_to_scanning() {
    let dir = tempdir().expect("temp dir");
    let plain_path = dir.path().join("plain.png");
    image_rs::GrayImage::from_pixel(64, 64, image_rs::Luma([180u8]))
        .save(&plain_path)
        .expect("write png");

    let mut session = Session::new();
    let ticket = session.begin_upload();

    let preview = media::load_preview(&plain_path).expect("preview");
    session.preview_ready(ticket, preview);

    let outcome = decode::scan_image_file(&plain_path);
    assert!(outcome.is_err());
    assert!(session.upload_failed(ticket));

    assert!(session.is_scanning());
    assert!(session.result().is_none());
    assert!(session.preview().is_none());
}

#[test]
fn non_image_upload_is_rejected_before_any_decode() {
    let dir = tempdir().expect("temp dir");
    let text_path = dir.path().join("payload.txt");
    std::fs::write(&text_path, "QR codes are images").expect("write");

    assert!(!media::is_image_file(&text_path));
    assert_eq!(
        decode::scan_image_file(&text_path),
        Err(iced_scan::error::DecodeError::NotAnImage)
    );
}

#[test]
fn full_session_cycle_scans_again_after_reset() {
    let dir = tempdir().expect("temp dir");
    let qr_path = dir.path().join("again.png");
    write_qr_png("FIRST", &qr_path);

    let mut session = Session::new();

    // Live decode resolves the session.
    assert!(session.live_decoded("FIRST".to_string()));
    assert!(!session.is_scanning());

    // Scan another, then resolve through the upload path.
    session.reset();
    assert!(session.is_scanning());

    let ticket = session.begin_upload();
    let text = decode::scan_image_file(&qr_path).expect("decode");
    assert!(session.upload_decoded(ticket, text));
    assert_eq!(session.result(), Some("FIRST"));
}
