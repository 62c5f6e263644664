//! Download matrix expansion: availability windows, hidden kinds,
//! platform-agnostic entries and URL shapes.

use cft_dashboard::{downloads_for, expand_kind, BinaryKind, DownloadHost, Platform, Version};

fn v(s: &str) -> Version {
    s.parse().unwrap()
}

#[test]
fn chromedriver_omitted_before_its_availability_window() {
    let downloads = downloads_for(&DownloadHost::current(), &v("114.0.5735.90"));
    assert!(downloads.contains_key(&BinaryKind::Chrome));
    assert!(!downloads.contains_key(&BinaryKind::ChromeDriver));
    assert!(!downloads.contains_key(&BinaryKind::ChromeHeadlessShell));
}

#[test]
fn chromedriver_present_from_its_first_release() {
    let downloads = downloads_for(&DownloadHost::current(), &v("115.0.5763.0"));
    assert!(downloads.contains_key(&BinaryKind::ChromeDriver));
    assert!(!downloads.contains_key(&BinaryKind::ChromeHeadlessShell));
}

#[test]
fn headless_shell_window_starts_at_m120() {
    let before = downloads_for(&DownloadHost::current(), &v("120.0.6097.99"));
    assert!(!before.contains_key(&BinaryKind::ChromeHeadlessShell));

    let after = downloads_for(&DownloadHost::current(), &v("120.0.6098.0"));
    assert!(after.contains_key(&BinaryKind::ChromeHeadlessShell));
}

#[test]
fn mojojs_never_appears_in_a_published_manifest() {
    for version in ["114.0.5735.90", "121.0.6167.85"] {
        let downloads = downloads_for(&DownloadHost::current(), &v(version));
        assert!(
            !downloads.contains_key(&BinaryKind::Mojojs),
            "mojojs leaked into the manifest for {version}"
        );
    }
}

#[test]
fn platform_agnostic_kinds_emit_a_single_platformless_entry() {
    let entries = expand_kind(
        &DownloadHost::current(),
        BinaryKind::Mojojs,
        &v("121.0.6167.85"),
    )
    .unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].platform.is_none());
    assert_eq!(
        entries[0].url,
        "https://storage.googleapis.com/chrome-for-testing-public/121.0.6167.85/mojojs.zip"
    );

    // The platform field disappears from the JSON entirely.
    let json = serde_json::to_value(&entries).unwrap();
    assert!(json[0].get("platform").is_none());
}

#[test]
fn one_entry_per_platform_in_enumeration_order() {
    let downloads = downloads_for(&DownloadHost::current(), &v("121.0.6167.85"));
    let chrome = &downloads[&BinaryKind::Chrome];
    assert_eq!(chrome.len(), Platform::all().len());

    let platforms: Vec<Platform> = chrome
        .iter()
        .map(|entry| entry.platform.unwrap())
        .collect();
    assert_eq!(platforms, Platform::all().to_vec());
}

#[test]
fn urls_follow_the_object_store_layout() {
    let host = DownloadHost::current();
    let version = v("121.0.6167.85");

    let chrome = expand_kind(&host, BinaryKind::Chrome, &version).unwrap();
    assert_eq!(
        chrome[0].url,
        "https://storage.googleapis.com/chrome-for-testing-public/121.0.6167.85/linux64/chrome-linux64.zip"
    );

    let driver = expand_kind(&host, BinaryKind::ChromeDriver, &version).unwrap();
    assert_eq!(
        driver[2].url,
        "https://storage.googleapis.com/chrome-for-testing-public/121.0.6167.85/mac-arm64/chromedriver-mac-arm64.zip"
    );
}

#[test]
fn a_custom_host_flows_into_every_url() {
    let host = DownloadHost::from("https://mirror.example.com");
    let downloads = downloads_for(&host, &v("121.0.6167.85"));
    for entries in downloads.values() {
        for entry in entries {
            assert!(entry.url.starts_with("https://mirror.example.com/"));
        }
    }
}
