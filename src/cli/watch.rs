use super::{page, ui};
use crate::core::page::{PageAction, PageController};
use crate::core::session::PageSession;
use anyhow::Result;
use chrono::Utc;
use std::future::Future;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

const TICK: Duration = Duration::from_secs(1);

/// Re-runs the render pass every second until Ctrl-C. The pass itself decides
/// whether the refresh period has elapsed, and the page is redrawn only after
/// a refresh.
pub async fn run(
    controller: &PageController<'_>,
    session: PageSession,
    passes: Option<u64>,
) -> Result<()> {
    run_until(controller, session, passes, async {
        // A failed handler install is treated as "never interrupted".
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    })
    .await
}

/// Same loop as [`run`], stopping when `shutdown` completes. The shutdown
/// future lives across passes, so a signal raised during a render is seen
/// before the next one starts.
pub async fn run_until<F>(
    controller: &PageController<'_>,
    mut session: PageSession,
    passes: Option<u64>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let mut ticker = interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut action = PageAction::Refresh;
    let mut completed = 0;

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Stopping watch");
                break;
            }
            _ = ticker.tick() => {}
        }

        let pending = std::mem::replace(&mut action, PageAction::None);
        let view = controller.render(&mut session, pending, Utc::now()).await;
        if !view.refreshed {
            continue;
        }

        if completed > 0 {
            ui::print_separator();
        }
        page::display(&view);
        completed += 1;

        if passes.is_some_and(|n| completed >= n) {
            break;
        }
    }

    Ok(())
}
