//! Merge and synchronization invariants of the persisted registries:
//! idempotence, catalog uniqueness and ordering, milestone monotonicity
//! and the build-track reduction.

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

use cft_dashboard::{
    Channel, ChannelRelease, ChannelSnapshot, KnownGoodVersions, LastKnownGoodVersions,
    LatestPatchVersionsPerBuild, LatestVersionsPerMilestone, Milestone, Revision, Version,
    VersionEntry,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn t1() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap()
}

fn release(channel: Channel, version: &str, revision: u32, ok: bool) -> ChannelRelease {
    ChannelRelease {
        channel,
        version: version.parse().unwrap(),
        revision: Revision::new(revision),
        ok,
    }
}

fn snapshot(releases: Vec<ChannelRelease>) -> ChannelSnapshot {
    ChannelSnapshot {
        channels: releases.into_iter().map(|r| (r.channel, r)).collect(),
    }
}

fn entry(version: &str, revision: u32) -> VersionEntry {
    VersionEntry {
        version: version.parse().unwrap(),
        revision: Revision::new(revision),
    }
}

#[test]
fn reconcile_records_new_channels() {
    let mut registry = LastKnownGoodVersions::empty(t0());
    let snap = snapshot(vec![
        release(Channel::Stable, "121.0.6167.85", 1233107, true),
        release(Channel::Beta, "122.0.6261.6", 1250580, true),
    ]);

    assert!(registry.reconcile(&snap, t1()));
    assert_eq!(registry.channels.len(), 2);
    assert_eq!(registry.timestamp, t1());

    let stable = &registry.channels[&Channel::Stable];
    assert_eq!(stable.version, "121.0.6167.85".parse::<Version>().unwrap());
    assert_eq!(stable.revision, Revision::new(1233107));
}

#[test]
fn reconcile_is_idempotent() {
    let mut registry = LastKnownGoodVersions::empty(t0());
    let snap = snapshot(vec![release(Channel::Stable, "121.0.6167.85", 1233107, true)]);

    assert!(registry.reconcile(&snap, t0()));
    assert!(!registry.reconcile(&snap, t1()));
    assert_eq!(registry.timestamp, t0(), "a no-op pass must not bump the timestamp");
}

#[test]
fn reconcile_ignores_channels_without_a_valid_build() {
    let mut registry = LastKnownGoodVersions::empty(t0());
    let good = snapshot(vec![release(Channel::Stable, "121.0.6167.85", 1233107, true)]);
    registry.reconcile(&good, t0());

    // A transient outage must never erase previously good data.
    let outage = snapshot(vec![release(Channel::Stable, "122.0.6200.0", 1250000, false)]);
    assert!(!registry.reconcile(&outage, t1()));
    let stable = &registry.channels[&Channel::Stable];
    assert_eq!(stable.version, "121.0.6167.85".parse::<Version>().unwrap());
    assert_eq!(registry.timestamp, t0());
}

#[test]
fn reconcile_picks_up_a_revision_only_change() {
    let mut registry = LastKnownGoodVersions::empty(t0());
    registry.reconcile(
        &snapshot(vec![release(Channel::Stable, "121.0.6167.85", 1233107, true)]),
        t0(),
    );

    assert!(registry.reconcile(
        &snapshot(vec![release(Channel::Stable, "121.0.6167.85", 1233200, true)]),
        t1(),
    ));
    assert_eq!(
        registry.channels[&Channel::Stable].revision,
        Revision::new(1233200)
    );
}

#[test]
fn catalog_merges_without_duplicates() {
    let mut latest = LastKnownGoodVersions::empty(t0());
    latest.reconcile(
        &snapshot(vec![
            release(Channel::Stable, "121.0.6167.85", 1233107, true),
            release(Channel::Beta, "122.0.6261.6", 1250580, true),
        ]),
        t0(),
    );

    let mut catalog = KnownGoodVersions::empty(t0());
    assert!(catalog.merge_channels(&latest, t0()));
    assert_eq!(catalog.versions.len(), 2);

    // Re-merging the same registry inserts nothing and keeps the timestamp.
    assert!(!catalog.merge_channels(&latest, t1()));
    assert_eq!(catalog.versions.len(), 2);
    assert_eq!(catalog.timestamp, t0());
}

#[test]
fn catalog_stays_sorted_ascending_across_merges() {
    let mut catalog = KnownGoodVersions::empty(t0());

    let mut latest = LastKnownGoodVersions::empty(t0());
    latest.reconcile(
        &snapshot(vec![release(Channel::Stable, "121.0.6167.85", 1233107, true)]),
        t0(),
    );
    catalog.merge_channels(&latest, t0());

    // A later run observes an older version (e.g. a rollback on another
    // channel); it lands in sorted position, not at the end.
    latest.reconcile(
        &snapshot(vec![release(Channel::Stable, "120.0.6099.200", 1220000, true)]),
        t1(),
    );
    assert!(catalog.merge_channels(&latest, t1()));

    let versions: Vec<String> = catalog
        .versions
        .iter()
        .map(|entry| entry.version.to_string())
        .collect();
    assert_eq!(versions, vec!["120.0.6099.200", "121.0.6167.85"]);
    for pair in catalog.versions.windows(2) {
        assert!(
            !pair[1].version.is_older(&pair[0].version),
            "catalog must be non-decreasing"
        );
    }
}

#[test]
fn milestones_never_regress() {
    let mut milestones = LatestVersionsPerMilestone::empty(t0());

    let mut latest = LastKnownGoodVersions::empty(t0());
    latest.reconcile(
        &snapshot(vec![release(Channel::Stable, "121.0.6167.85", 1233107, true)]),
        t0(),
    );
    assert!(milestones.absorb(&latest, t0()));

    // An older observation of the same milestone must not un-advance it.
    latest.reconcile(
        &snapshot(vec![release(Channel::Stable, "121.0.6100.0", 1230000, true)]),
        t1(),
    );
    assert!(!milestones.absorb(&latest, t1()));

    let m121 = &milestones.milestones[&Milestone::new(121)];
    assert_eq!(m121.version, "121.0.6167.85".parse::<Version>().unwrap());
    assert_eq!(milestones.timestamp, t0());
}

#[test]
fn milestones_keep_the_maximum_within_one_snapshot() {
    let mut latest = LastKnownGoodVersions::empty(t0());
    latest.reconcile(
        &snapshot(vec![
            release(Channel::Beta, "122.0.6261.6", 1250580, true),
            release(Channel::Dev, "122.0.6300.0", 1260000, true),
        ]),
        t0(),
    );

    let mut milestones = LatestVersionsPerMilestone::empty(t0());
    assert!(milestones.absorb(&latest, t0()));
    assert_eq!(milestones.milestones.len(), 1);
    assert_eq!(
        milestones.milestones[&Milestone::new(122)].version,
        "122.0.6300.0".parse::<Version>().unwrap()
    );
}

#[test]
fn build_tracks_reduce_to_the_highest_patch_per_prefix() {
    let catalog = KnownGoodVersions {
        timestamp: t0(),
        versions: vec![
            entry("120.0.1.1", 1),
            entry("120.0.1.5", 2),
            entry("121.0.2.1", 3),
        ],
    };

    let builds = LatestPatchVersionsPerBuild::reduce(&catalog);
    assert_eq!(builds.builds.len(), 2);
    assert_eq!(builds.builds["120.0.1"].version.to_string(), "120.0.1.5");
    assert_eq!(builds.builds["121.0.2"].version.to_string(), "121.0.2.1");
    assert_eq!(builds.timestamp, t0(), "the reducer is a pure view of the catalog");
}

#[test]
fn build_track_reduction_is_insensitive_to_catalog_order() {
    let shuffled = KnownGoodVersions {
        timestamp: t0(),
        versions: vec![
            entry("120.0.1.5", 2),
            entry("121.0.2.1", 3),
            entry("120.0.1.1", 1),
        ],
    };
    let builds = LatestPatchVersionsPerBuild::reduce(&shuffled);
    assert_eq!(builds.builds["120.0.1"].version.to_string(), "120.0.1.5");
}
