use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use dashboard_core::{BusinessMetrics, Effect, Msg, RequestFailure};
use dashboard_engine::{EngineEvent, EngineHandle, InsightsApi};
use dashboard_logging::{dashboard_debug, dashboard_info};

use super::app::AppEvent;

const EVENT_POLL: Duration = Duration::from_millis(200);

/// Executes core effects and feeds their outcomes back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    events: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn InsightsApi>, events: mpsc::Sender<AppEvent>) -> io::Result<Self> {
        let engine = EngineHandle::new(api)?;
        let runner = Self { engine, events };
        runner.spawn_event_loop();
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchInsights {
                    request_id,
                    name,
                    location,
                } => {
                    dashboard_info!(
                        "FetchInsights request_id={} name_len={} location_len={}",
                        request_id,
                        name.len(),
                        location.len()
                    );
                    self.engine.fetch_insights(request_id, name, location);
                }
                Effect::RegenerateHeadline {
                    request_id,
                    name,
                    location,
                } => {
                    dashboard_info!("RegenerateHeadline request_id={}", request_id);
                    self.engine.regenerate_headline(request_id, name, location);
                }
                Effect::ScheduleNotificationDismiss {
                    notification_id,
                    after,
                } => {
                    dashboard_debug!("Notification {} expires in {:?}", notification_id, after);
                    let events = self.events.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = events.send(AppEvent::Core(Msg::NotificationExpired {
                            notification_id,
                        }));
                    });
                }
            }
        }
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let events = self.events.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.recv_timeout(EVENT_POLL) {
                if events.send(AppEvent::Core(map_event(event))).is_err() {
                    break;
                }
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::InsightsFetched { request_id, result } => Msg::InsightsLoaded {
            request_id,
            result: result
                .map(|data| BusinessMetrics {
                    rating: data.rating,
                    reviews: data.reviews,
                    headline: data.headline,
                })
                .map_err(|err| RequestFailure::new(err.to_string())),
        },
        EngineEvent::HeadlineRegenerated { request_id, result } => Msg::HeadlineRegenerated {
            request_id,
            result: result.map_err(|err| RequestFailure::new(err.to_string())),
        },
    }
}
