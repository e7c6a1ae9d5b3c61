//! # Echo Valley
//!
//! Console demo: seeds the feed, subscribes a text renderer, walks through
//! the actions a visitor would take and waits for the AI reply.

mod config;
mod render;
mod state;
mod telemetry;

use tokio::sync::broadcast::error::RecvError;

use echo_core::domain::{Category, Emotion};
use echo_core::ports::FeedEvent;
use echo_infra::{BroadcastObserver, catalog, random_picker};
use echo_shared::Notice;

use config::AppConfig;
use render::FeedRenderer;
use state::AppState;

const SAMPLE_POST: &str = "我觉得有点焦虑但还好";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        reply_delay_ms = config.feed.reply_delay.as_millis() as u64,
        seed = config.seed,
        "Starting Echo Valley"
    );

    let state = AppState::new(&config);
    let renderer = FeedRenderer::new(state.store.clone(), config.json_views);

    let (bridge, _) =
        BroadcastObserver::attach(state.store.as_ref(), config.feed.broadcast_buffer).await;
    let mut events = bridge.receiver();

    renderer.render().await?;
    render::topics(&catalog::topics());
    render::resources(&catalog::resources());
    render::mystery_box(&catalog::draw_box_item(&random_picker()));

    let service = &state.service;

    if let Err(e) = service.submit_post("短", Category::Emotion, Emotion::Anxiety).await {
        render::notice(&Notice::from_error(&e));
    }

    let post = service
        .submit_post(SAMPLE_POST, Category::Emotion, Emotion::Anxiety)
        .await?;
    render::notice(&Notice::post_published());

    service.like_post(post.id).await?;

    for comment in ["好的呢", "谢谢你的分享"] {
        match service.add_comment(post.id, comment).await {
            Ok(()) => render::notice(&Notice::comment_published()),
            Err(e) => render::notice(&Notice::from_error(&e)),
        }
    }

    service.load_more(catalog::more_posts()).await;

    loop {
        match events.recv().await {
            Ok(event) => {
                renderer.on_event(&event).await?;
                if event == (FeedEvent::ReplyAttached { id: post.id }) {
                    render::notice(&Notice::reply_ready());
                    break;
                }
            }
            Err(RecvError::Lagged(count)) => {
                tracing::warn!(lagged = count, "Renderer fell behind, redrawing");
                renderer.render().await?;
            }
            Err(RecvError::Closed) => break,
        }
    }

    renderer.render_stats().await?;
    tracing::info!("Echo Valley demo finished");

    Ok(())
}
