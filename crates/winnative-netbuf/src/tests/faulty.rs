// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::platform::{FaultyPlatform, FaultyPlatformBehaviour, NetApiPlatform};
use crate::status::NetApiStatus;

#[test]
fn test_default_behaviour_forwards() {
    let platform = FaultyPlatform::new();
    let probe = platform.probe();

    assert_eq!(probe.behaviour(), FaultyPlatformBehaviour::None);

    let ptr = platform.allocate(10).expect("Failed to allocate(..)");
    unsafe { platform.free(ptr) }.expect("Failed to free(..)");

    assert_eq!(probe.allocate_calls(), 1);
    assert_eq!(probe.free_calls(), 1);
}

#[test]
fn test_change_behaviour_is_visible_through_probe() {
    let platform = FaultyPlatform::new();
    let probe = platform.probe();

    for behaviour in [
        FaultyPlatformBehaviour::FailAtAllocate(NetApiStatus::ACCESS_DENIED),
        FaultyPlatformBehaviour::FailAtSize(NetApiStatus::from_code(2102)),
        FaultyPlatformBehaviour::FailAtFree(NetApiStatus::INVALID_PARAMETER),
        FaultyPlatformBehaviour::None,
    ] {
        platform.change_behaviour(behaviour);
        assert_eq!(probe.behaviour(), behaviour);
    }
}

#[test]
fn test_fail_at_allocate_counts_call() {
    let platform = FaultyPlatform::with_behaviour(FaultyPlatformBehaviour::FailAtAllocate(
        NetApiStatus::NOT_ENOUGH_MEMORY,
    ));
    let probe = platform.probe();

    assert_eq!(
        platform.allocate(10),
        Err(NetApiStatus::NOT_ENOUGH_MEMORY)
    );
    assert_eq!(probe.allocate_calls(), 1);
}

#[test]
fn test_fail_at_size_only_affects_size() {
    let platform = FaultyPlatform::with_behaviour(FaultyPlatformBehaviour::FailAtSize(
        NetApiStatus::INVALID_HANDLE,
    ));

    let ptr = platform.allocate(10).expect("Failed to allocate(..)");

    assert_eq!(
        unsafe { platform.size(ptr) },
        Err(NetApiStatus::INVALID_HANDLE)
    );
    assert_eq!(unsafe { platform.free(ptr) }, Ok(()));
}

#[test]
fn test_fail_at_free_reports_status() {
    let platform = FaultyPlatform::new();
    let probe = platform.probe();
    let ptr = platform.allocate(10).expect("Failed to allocate(..)");

    platform.change_behaviour(FaultyPlatformBehaviour::FailAtFree(NetApiStatus::ACCESS_DENIED));

    assert_eq!(
        unsafe { platform.free(ptr) },
        Err(NetApiStatus::ACCESS_DENIED)
    );
    assert_eq!(probe.free_calls(), 1);
}

#[test]
fn test_probe_outlives_platform() {
    let platform = FaultyPlatform::new();
    let probe = platform.probe();
    let ptr = platform.allocate(1).expect("Failed to allocate(..)");
    unsafe { platform.free(ptr) }.expect("Failed to free(..)");

    drop(platform);

    assert_eq!(probe.allocate_calls(), 1);
    assert_eq!(probe.free_calls(), 1);
}

#[test]
fn test_behaviour_keeps_full_status_range() {
    let platform = FaultyPlatform::new();
    let probe = platform.probe();

    let behaviour = FaultyPlatformBehaviour::FailAtSize(NetApiStatus::from_code(u32::MAX));
    platform.change_behaviour(behaviour);

    assert_eq!(probe.behaviour(), behaviour);
}

#[test]
fn test_concurrent_behaviour_reads_never_mix_kind_and_status() {
    let platform = FaultyPlatform::new();
    let probe = platform.probe();

    let allocate = FaultyPlatformBehaviour::FailAtAllocate(NetApiStatus::ACCESS_DENIED);
    let free = FaultyPlatformBehaviour::FailAtFree(NetApiStatus::INVALID_PARAMETER);
    platform.change_behaviour(allocate);

    std::thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..20_000 {
                platform.change_behaviour(if i % 2 == 0 { free } else { allocate });
            }
        });

        for _ in 0..20_000 {
            let observed = probe.behaviour();
            assert!(
                observed == allocate || observed == free,
                "mixed behaviour observed: {observed:?}"
            );
        }
    });
}
