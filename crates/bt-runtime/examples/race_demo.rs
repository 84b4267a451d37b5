//! Two couriers race to a drop point while a watchdog parallel branch
//! enforces a jittered time budget.
//!
//! ```text
//! RUST_LOG=debug BT_DEMO_LIMIT='{"limit_seconds": 2.0, "deviation_seconds": 0.5, "seed": 7}' \
//!     cargo run -p bt-runtime --example race_demo --features serde
//! ```

use anyhow::{Context, Result};
use bt_core::{Blackboard, TickContext};
use bt_runtime::builder::{action, parallel, race};
use bt_runtime::{Limit, LimitConfig, Status, Tree};
use bt_tools::{TraceLog, TraceSink, TracingSink, TRACE_LOG, TRACE_SINK};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Default)]
struct Route {
    fast: f32,
    slow: f32,
}

fn courier(name: &'static str, speed: f32, distance: f32) -> bt_runtime::Node<Route> {
    action(name, move |ctx: &TickContext, route: &mut Route, _| {
        let travelled = if speed > 1.0 { &mut route.fast } else { &mut route.slow };
        *travelled += speed * ctx.dt_seconds;
        if *travelled >= distance {
            Status::Success
        } else {
            Status::Running
        }
    })
}

fn load_limit() -> Result<LimitConfig> {
    match std::env::var("BT_DEMO_LIMIT") {
        Ok(raw) => serde_json::from_str(&raw).context("parsing BT_DEMO_LIMIT"),
        Err(_) => Ok(LimitConfig::new(3.0).with_deviation(0.5).with_seed(7)),
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let limit = Limit::try_new(load_limit()?).context("invalid limit config")?;

    let mut tree = Tree::new(parallel(vec![
        race(vec![courier("sprinter", 2.0, 5.0), courier("walker", 1.0, 5.0)])
            .with_gate(limit),
    ]));

    let mut route = Route::default();
    let mut bb = Blackboard::new();
    bb.set(TRACE_LOG, TraceLog::default());
    bb.set(TRACE_SINK, Box::new(TracingSink) as Box<dyn TraceSink>);

    let mut ctx = TickContext::new(0, 0.0).with_dt(0.25);
    let status = loop {
        let status = tree.tick(&ctx, &mut route, &mut bb);
        if status.is_done() || ctx.tick >= 100 {
            break status;
        }
        ctx = ctx.next(0.25);
    };
    tree.abort(&ctx, &mut route, &mut bb);

    tracing::info!(?status, tick = ctx.tick, ?route, "race finished");
    if let Some(log) = bb.get(TRACE_LOG) {
        for event in &log.events {
            println!("{:>4} {:<22} a={} b={}", event.tick, event.tag, event.a, event.b);
        }
    }

    Ok(())
}
