use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::content::Stat;
use shared::counter::CounterAnimation;

/// Counts `stat` up from zero once `started` first turns true.
#[component]
pub fn AnimatedCounter(stat: Stat, #[prop(into)] started: Signal<bool>) -> impl IntoView {
    let counter = StoredValue::new(CounterAnimation::new(stat.value));
    let (text, set_text) = signal(counter.with_value(|c| c.render()));
    let launched = StoredValue::new(false);

    Effect::new(move |_| {
        if !started.get() || launched.get_value() {
            return;
        }
        launched.set_value(true);

        spawn_local(async move {
            let interval = counter.with_value(|c| c.interval_ms());
            loop {
                TimeoutFuture::new(interval).await;
                let Some((rendered, done)) = counter.try_update_value(|c| {
                    c.tick();
                    (c.render(), c.is_done())
                }) else {
                    break;
                };
                if set_text.try_set(rendered).is_some() || done {
                    break;
                }
            }
        });
    });

    view! {
        <span class=format!("stat-value {}", stat.tone.class())>
            {move || text.get()}
            {stat.suffix}
        </span>
    }
}
