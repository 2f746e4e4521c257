//! Shield Point storefront demo binary
//!
//! Drives the full click-and-collect flow: browse the catalog, fill the
//! cart, check out, then redeem the order at the simulated kiosk. Uses the
//! real Gemini advisor when `GEMINI_API_KEY` is set and a canned one
//! otherwise.

use shieldpoint_core::environment::SystemClock;
use shieldpoint_gemini::{GeminiClient, GeminiError};
use shieldpoint_runtime::Store;
use shieldpoint_storefront::advisor::GeminiAdvisor;
use shieldpoint_storefront::config::StorefrontConfig;
use shieldpoint_storefront::error::AdvisorError;
use shieldpoint_storefront::mocks::CannedAdvisor;
use shieldpoint_storefront::providers::{ProductAdvisor, RandomIdGenerator};
use shieldpoint_storefront::types::View;
use shieldpoint_storefront::{
    StorefrontAction, StorefrontEnvironment, StorefrontReducer, StorefrontState, catalog,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Advisor wiring for the demo: real Gemini when a key is configured,
/// canned advice otherwise.
#[derive(Clone)]
enum DemoAdvisor {
    /// Real Gemini calls
    Gemini(GeminiAdvisor),
    /// Offline canned advice
    Canned(CannedAdvisor),
}

impl ProductAdvisor for DemoAdvisor {
    async fn advise(&self, query: &str) -> Result<String, AdvisorError> {
        match self {
            Self::Gemini(advisor) => advisor.advise(query).await,
            Self::Canned(advisor) => advisor.advise(query).await,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=debug,shieldpoint_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== THE SHIELD POINT: click-and-collect demo ===\n");

    let config = StorefrontConfig::from_env();
    let products = catalog::products();

    let advisor = match GeminiClient::from_env() {
        Ok(client) => DemoAdvisor::Gemini(GeminiAdvisor::new(
            client,
            config.gemini_model.as_str(),
            &products,
        )),
        Err(GeminiError::MissingApiKey) => {
            println!("(GEMINI_API_KEY not set, using canned advice)\n");
            DemoAdvisor::Canned(CannedAdvisor::new(
                "Với nhu cầu đó, Sagami Original 0.01 là lựa chọn mỏng nhất của chúng tôi.",
            ))
        },
        Err(other) => return Err(other.into()),
    };

    let env = StorefrontEnvironment::new(
        SystemClock,
        RandomIdGenerator::new(),
        advisor,
        config.timings,
    );
    let store = Store::new(StorefrontState::default(), StorefrontReducer::new(), env);

    // Browse the catalog
    println!("Catalog:");
    for product in &products {
        println!("  [{}] {} - {}", product.id, product.name, product.price);
    }

    // Fill the cart
    println!("\n>>> Adding items to the cart");
    store
        .send(StorefrontAction::AddItem {
            product: products[0].clone(),
            quantity: 1,
        })
        .await?;
    store
        .send(StorefrontAction::AddItem {
            product: products[0].clone(),
            quantity: 1,
        })
        .await?;
    store
        .send(StorefrontAction::AddItem {
            product: products[2].clone(),
            quantity: 1,
        })
        .await?;

    let (units, total) = store
        .state(|s| (s.cart.unit_count(), s.cart.total()))
        .await;
    println!("Cart: {units} units, total {total}");

    // Check out
    println!("\n>>> Checkout");
    store.send(StorefrontAction::Checkout).await?;

    let order = store.state(|s| s.orders.orders[0].clone()).await;
    println!("Order {} placed ({})", order.id, order.total);
    println!("Scan code: {}", order.qr_image_url());

    // Redeem at the kiosk
    println!("\n>>> Kiosk: scanning order {}", order.id);
    store
        .send(StorefrontAction::Navigate { view: View::Kiosk })
        .await?;
    let mut handle = store
        .send(StorefrontAction::SimulateScan {
            order_id: order.id.clone(),
        })
        .await?;
    handle.wait().await;
    println!("Kiosk: order confirmed, collecting...");

    let mut handle = store.send(StorefrontAction::Collect).await?;
    handle.wait().await;
    // Completion feeds back through the ledger a beat after the dispense
    // timer ends
    tokio::time::sleep(Duration::from_millis(100)).await;

    let status = store
        .state(|s| s.orders.orders[0].status.to_string())
        .await;
    println!("Order status: {status}");

    // Ask the consultant
    println!("\n>>> Asking the AI consultant");
    let mut handle = store
        .send(StorefrontAction::AskAdvisor {
            query: "Tôi muốn tìm loại mỏng nhất".to_string(),
        })
        .await?;
    handle.wait().await;

    if let Some(advice) = store.state(|s| s.advisor.response.clone()).await {
        println!("Consultant: {advice}");
    }

    store.shutdown(Duration::from_secs(10)).await?;
    println!("\n=== Demo complete ===");
    Ok(())
}
