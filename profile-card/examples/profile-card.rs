use person_sdk::{RandomUserApi, RandomUserApiOptions};
use profile_card::{CardSession, FieldKey, InteractionTarget, LoadState};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let provider = Arc::new(RandomUserApi::new(RandomUserApiOptions::default()));
    let session = CardSession::new(provider);

    let state = session.request_new_record().await;
    if let LoadState::Failed(message) = state {
        eprintln!("{message}");
        return;
    }

    for field in FieldKey::ALL {
        session
            .on_hover(Some(&InteractionTarget::labeled(field.label())))
            .await;
        let view = session.view().await;
        println!("{}: {}", view.title, view.value);
    }
}
