//! Composition root.
//!
//! Wires the identity slot, store backend, gateway, and session state the
//! way the (out-of-scope) GUI shell would, then walks one demonstration
//! flow: sign in, configure a build, save it, and list the garage.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexdrive_core::catalog;
use nexdrive_core::principal::Principal;
use nexdrive_identity::IdentitySlot;
use nexdrive_session::{watch_identity, BuilderSession, GarageView};
use nexdrive_store::config::StoreConfig;
use nexdrive_store::{BuildGateway, MemoryStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nexdrive=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let store_config = StoreConfig::from_env();
    tracing::info!(
        collection = %store_config.collection,
        timeout_secs = store_config.op_timeout.as_secs(),
        "Loaded store configuration"
    );

    // --- Store and gateway ---
    // The in-memory backend stands in for the remote document store; a
    // production shell swaps in a real `DocumentStore` implementation here.
    let store = Arc::new(MemoryStore::new());
    let gateway = Arc::new(BuildGateway::new(store, &store_config));

    // --- Identity slot and garage refresh loop ---
    let (slot, watcher) = IdentitySlot::new();
    let garage = Arc::new(Mutex::new(GarageView::new()));
    tokio::spawn(watch_identity(
        slot.watch(),
        gateway.clone(),
        garage.clone(),
    ));

    // --- Demonstration flow ---
    // The identity provider callback would normally drive this.
    slot.resolve(Some(Principal {
        id: "demo-user".into(),
        display_name: "Demo Driver".into(),
        avatar_url: "https://example.com/demo.png".into(),
        email: "demo@example.com".into(),
    }));

    let mut session = BuilderSession::new(gateway.clone(), watcher);
    if let Err(err) = configure_demo_build(&mut session) {
        tracing::error!(error = %err, "demo configuration failed");
        return;
    }

    let entry = session.entry();
    tracing::info!(
        model = entry.display_name,
        price = %catalog::format_price(entry.price_cents),
        horsepower = entry.horsepower,
        "Configured build"
    );

    match session.save_current().await {
        Ok(record_id) => tracing::info!(%record_id, "Build saved"),
        Err(err) => {
            tracing::error!(error = %err, "Save failed");
            return;
        }
    }

    // Entering the garage view issues a fresh query for the signed-in owner.
    let tag = garage.lock().await.begin_refresh("demo-user");
    let result = gateway.list_for_owner("demo-user").await;
    garage.lock().await.apply(tag, result);

    let garage = garage.lock().await;
    for build in garage.builds() {
        tracing::info!(
            record_id = %build.record_id,
            model = catalog::entry(build.model).display_name,
            color = %build.color_value,
            "Garage entry"
        );
    }
}

fn configure_demo_build(
    session: &mut BuilderSession,
) -> Result<(), nexdrive_core::CoreError> {
    session.select_model("supercar")?;
    session.select_color("#32D74B")?;
    session.select_trim("wheel", "Aero")?;
    let scene = session.scene()?;
    tracing::debug!(
        nodes = scene.nodes.len(),
        lights = scene.lights.len(),
        "Scene graph derived"
    );
    Ok(())
}
