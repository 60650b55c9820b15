use std::time::Duration;

use odyssey::{
    HostEnvironment, HostEvent, IntroConfig, IntroView, LayerId, LoadProgress, Point,
    SubscriptionId, Viewport,
};

struct ConsoleHost(u64);

impl HostEnvironment for ConsoleHost {
    fn subscribe(&mut self, event: HostEvent) -> Option<SubscriptionId> {
        self.0 += 1;
        println!("subscribe {event:?} -> #{}", self.0);
        Some(SubscriptionId(self.0))
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        println!("unsubscribe #{}", id.0);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut host = ConsoleHost(0);
    let mut view = IntroView::mount(
        &mut host,
        IntroConfig::default(),
        Viewport::new(1440.0, 900.0)?,
    )?;

    for (t, pct) in [(0u64, 0u8), (120, 35), (300, 80), (420, 100)] {
        view.on_progress(LoadProgress::from_percent(pct), Duration::from_millis(t));
    }
    view.on_pointer_move(Point::new(1100.0, 300.0));

    for (t, scroll) in [(0u64, 0.0), (1000, 0.0), (4000, 600.0), (4500, 1000.0), (5000, 1300.0)] {
        view.on_scroll(scroll);
        let frame = view.tick(Duration::from_millis(t));
        let p1 = frame.layer(LayerId::Phase1Root).map(|l| l.style.opacity);
        let p2 = frame.layer(LayerId::Phase2Root).map(|l| l.style.opacity);
        println!(
            "t={t}ms scroll={scroll}: {:?} ready={} layers={} phase1={p1:?} phase2={p2:?} gate={:?}",
            frame.scroll.phase,
            frame.ui.is_ready(),
            frame.layers.len(),
            frame.parallax.gate,
        );
    }

    let frame = view.tick(Duration::from_millis(6000));
    println!("{}", serde_json::to_string_pretty(&frame.logo)?);

    view.unmount(&mut host);
    Ok(())
}
