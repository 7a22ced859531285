//! Logging and span timing.
//!
//! With the `tracing` feature, graph operations emit `tracing` events and
//! spans, and [`init_tracing`] installs a stderr logger together with a layer
//! that totals the time spent in each span name.  Without the feature every
//! item here is a no-op with the same name, so call sites need no `cfg`.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, fmt, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    fn install(level: LevelFilter) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let logger = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(level);
            let _ = Registry::default().with(TimingLayer).with(logger).try_init();
        });
    }

    /// Installs the global subscriber, logging warnings and errors.  Only the
    /// first call in a process has any effect.
    pub fn init_tracing() {
        install(LevelFilter::WARN);
    }

    /// Like [`init_tracing`], but also logs debug events.
    pub fn init_verbose_tracing() {
        install(LevelFilter::DEBUG);
    }

    /// Total time and number of closed spans per span name, on this thread,
    /// since the last reset.
    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        SPAN_TIMINGS.with(|totals| {
            totals
                .borrow()
                .iter()
                .map(|(name, (duration, count))| (*name, *duration, *count))
                .collect()
        })
    }

    pub fn reset_span_timings() {
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    /// Prints [`span_timings`] to stderr, slowest first.
    pub fn dump_span_timings() {
        let mut entries = span_timings();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        eprintln!("Span timings (desc):");
        for (name, duration, count) in entries {
            eprintln!("  {name}: {:?} ({}x)", duration, count);
        }
    }

    pub use tracing::{debug, info_span, trace, warn};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn init_verbose_tracing() {
        // No-op when tracing is disabled
    }

    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        Vec::new()
    }

    pub fn reset_span_timings() {
        // No-op when tracing is disabled
    }

    pub fn dump_span_timings() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! info_span {
        ($($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! debug {
        ($($fields:tt)*) => {{}};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! trace {
        ($($fields:tt)*) => {{}};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! warn {
        ($($fields:tt)*) => {{}};
    }

    pub use crate::{debug, info_span, trace, warn};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
