//! # Pizza Order Demo
//!
//! Walks one customer through the whole flow against the configured backend
//! (the in-process one unless `PIZZA_API_BASE_URL` is set):
//! 1.  Composing two pizzas and putting them in the cart.
//! 2.  Editing the first cart entry.
//! 3.  Submitting the order.
//! 4.  Looking the order up again by its code, plus a lookup that misses.

use pizza_order::config::AppConfig;
use pizza_order::lifecycle::{setup_tracing, PizzaSystem};
use pizza_order::model::{Address, CustomerDetails, OrderCode};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting pizza order demo");
    let system = PizzaSystem::from_config(&config).map_err(|e| e.to_string())?;
    let session = system.open_session().await;

    let span = tracing::info_span!("compose");
    async {
        for pizza in [&["Cheese", "Corn"][..], &["Sauce", "Cheese", "Onions", "Peppers"][..]] {
            for ingredient in pizza {
                session
                    .add_ingredient(ingredient)
                    .await
                    .map_err(|e| e.to_string())?;
            }
            session.add_to_cart().await.map_err(|e| e.to_string())?;
        }
        info!(total = %session.cart().await.total(), "Cart filled");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("edit");
    async {
        session.begin_edit(0).await.map_err(|e| e.to_string())?;
        session
            .edit_add_ingredient("Mushrooms")
            .await
            .map_err(|e| e.to_string())?;
        let pizza = session.save_edit().await.map_err(|e| e.to_string())?;
        info!(price = %pizza.price(), "First pizza edited");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let mut customer = session.saved_customer().await;
    if customer.validate().is_err() {
        customer = CustomerDetails {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            address: Address {
                street: "Main Street".to_string(),
                house_number: "12".to_string(),
                city: "Springfield".to_string(),
            },
            phone_number: "0123456789".to_string(),
        };
    }

    let record = session
        .submit_order(&customer)
        .await
        .map_err(|e| e.to_string())?;
    for (position, pizza) in record.entries() {
        info!(position, ingredients = ?pizza.ingredients(), price = %pizza.price(), "Ordered");
    }
    info!(code = %record.code(), total = %record.total_price(), "Order placed");

    let span = tracing::info_span!("lookup");
    async {
        match session.lookup_order(record.code()).await {
            Ok(found) => info!(code = %found.code(), total = %found.total_price(), "Order found"),
            Err(e) => error!(error = %e, "Lookup of a placed order failed"),
        }
        if let Err(e) = session.lookup_order(&OrderCode::new("ZZZZ")).await {
            info!(error = %e, reason = ?e.reason(), "Unknown code reported as expected");
        }
    }
    .instrument(span)
    .await;

    drop(session);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
