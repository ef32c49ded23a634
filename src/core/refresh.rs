//! Background refresh timer.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use readboard_core::{RefreshDecision, RefreshPolicy, RefreshScheduler, SkipReason};

use super::client::QueryClient;
use crate::utils::{dom, log};

/// Periodically invalidate the background list queries while the calling
/// component is mounted.
///
/// The timer is cancelled on cleanup. The scheduler is stopped first so a
/// tick that is already queued finds it stopped and does nothing.
pub fn use_auto_refresh(client: QueryClient, policy: RefreshPolicy) {
    let scheduler = StoredValue::new(RefreshScheduler::new(policy));

    let period = scheduler
        .try_update_value(|s| s.start(js_sys::Math::random()))
        .flatten();
    let Some(period) = period else {
        log::debug("refresh: disabled");
        return;
    };
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    log::debug(&format!("refresh: every {} ms", millis));

    let interval = Interval::new(millis, move || {
        let visible = !dom::is_document_hidden();
        let decision = scheduler
            .try_update_value(|s| s.on_tick(visible))
            .unwrap_or(RefreshDecision::Skip(SkipReason::NotRunning));
        match decision {
            RefreshDecision::Invalidate(keys) => {
                for &key in keys {
                    client.invalidate(key);
                }
            }
            RefreshDecision::Skip(reason) => {
                log::debug(&format!("refresh: skipped ({:?})", reason));
            }
        }
    });
    let timer = StoredValue::new_local(Some(interval));

    on_cleanup(move || {
        scheduler.try_update_value(|s| s.stop());
        timer.try_update_value(|t| drop(t.take()));
    });
}
